//! Planet placement strategies
//!
//! All strategies produce the same output shape: an ordered layout of
//! position slots with the two starting planets first. They differ in how
//! resource planets are spread around the origin.

use std::f64::consts::TAU;

use rand::seq::SliceRandom;
use rand::Rng;
use rand_chacha::ChaChaRng;
use serde::{Deserialize, Serialize};

/// Orbital distance of the starting planet circle
pub const STARTING_ORBIT_DISTANCE: f64 = 25000.0;

/// Radial band for resource planets (random polar / evenly spaced)
pub const RESOURCE_DISTANCE_MIN: f64 = 35000.0;
pub const RESOURCE_DISTANCE_MAX: f64 = 50000.0;

/// Minimum angular separation between resource planets (evenly spaced)
pub const MIN_ANGULAR_SEPARATION: f64 = 30.0 * std::f64::consts::PI / 180.0;

/// Attempt budget before a resource angle is accepted without the
/// separation guarantee
pub const MAX_PLACEMENT_ATTEMPTS: usize = 100;

/// Angle grid step for the concentric shell strategy (degrees)
pub const SHELL_ANGLE_STEP_DEG: u32 = 10;

/// Number of discrete angles available to the shell strategy
pub const SHELL_ANGLE_COUNT: usize = (360 / SHELL_ANGLE_STEP_DEG) as usize;

/// A single planet position produced by a strategy
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slot {
    pub position: (f64, f64),
    /// Whether this slot holds a starting planet
    pub starting: bool,
}

impl Slot {
    fn polar(distance: f64, angle: f64, starting: bool) -> Self {
        Self {
            position: (distance * angle.cos(), distance * angle.sin()),
            starting,
        }
    }
}

/// Ordered planet placements plus placement diagnostics
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    /// Placements in output order: starting slots first, then resource slots
    pub slots: Vec<Slot>,
    /// Resource placements accepted after the attempt budget was exhausted
    ///
    /// Nonzero means the minimum angular separation could not be satisfied
    /// for that many planets and the last sampled angle was used instead.
    pub relaxed: usize,
}

/// Strategy for laying out planets around the system origin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlacementStrategy {
    /// Starting planets at opposite ends of a diameter; resource planets at
    /// uniformly random angles and distances inside the resource band
    RandomPolar,
    /// Starting planets at equal angular intervals on a fixed-radius
    /// circle; resource angles kept at least 30 degrees apart via
    /// bounded retry
    EvenlySpaced,
    /// Every planet on its own orbital shell (base + i * step), angles
    /// drawn without replacement from a 10-degree grid
    ConcentricShells,
}

/// Bounds for the concentric shell strategy
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShellBounds {
    /// Distance of the innermost shell
    pub base_distance: f64,
    /// Distance increment between consecutive shells
    pub distance_step: f64,
}

impl Default for ShellBounds {
    fn default() -> Self {
        Self {
            base_distance: STARTING_ORBIT_DISTANCE,
            distance_step: 5000.0,
        }
    }
}

impl PlacementStrategy {
    /// Lay out two starting planets and `resource_count` resource planets
    ///
    /// Slots are returned in output order: the two starting planets first.
    /// `shells` is only consulted by `ConcentricShells`.
    pub fn layout(
        &self,
        rng: &mut ChaChaRng,
        resource_count: usize,
        shells: &ShellBounds,
    ) -> Layout {
        match self {
            PlacementStrategy::RandomPolar => random_polar(rng, resource_count),
            PlacementStrategy::EvenlySpaced => evenly_spaced(rng, resource_count),
            PlacementStrategy::ConcentricShells => {
                concentric_shells(rng, resource_count, shells)
            }
        }
    }
}

impl std::fmt::Display for PlacementStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RandomPolar => write!(f, "Random polar"),
            Self::EvenlySpaced => write!(f, "Evenly spaced"),
            Self::ConcentricShells => write!(f, "Concentric shells"),
        }
    }
}

/// Starting planets at (+d, 0) and (-d, 0); resource planets anywhere in
/// the resource band
fn random_polar(rng: &mut ChaChaRng, resource_count: usize) -> Layout {
    let mut slots = Vec::with_capacity(resource_count + 2);
    slots.push(Slot {
        position: (STARTING_ORBIT_DISTANCE, 0.0),
        starting: true,
    });
    slots.push(Slot {
        position: (-STARTING_ORBIT_DISTANCE, 0.0),
        starting: true,
    });

    for _ in 0..resource_count {
        let angle = rng.random_range(0.0..TAU);
        let distance = rng.random_range(RESOURCE_DISTANCE_MIN..=RESOURCE_DISTANCE_MAX);
        slots.push(Slot::polar(distance, angle, false));
    }

    Layout { slots, relaxed: 0 }
}

/// Starting planets at equal angular intervals; resource planets separated
/// by at least 30 degrees where the attempt budget allows
fn evenly_spaced(rng: &mut ChaChaRng, resource_count: usize) -> Layout {
    let mut slots = Vec::with_capacity(resource_count + 2);
    for i in 0..2 {
        let angle = TAU * i as f64 / 2.0;
        slots.push(Slot::polar(STARTING_ORBIT_DISTANCE, angle, true));
    }

    let mut angles: Vec<f64> = Vec::with_capacity(resource_count);
    let mut relaxed = 0;
    for _ in 0..resource_count {
        let (angle, separated) = sample_separated_angle(rng, &angles);
        if !separated {
            relaxed += 1;
        }
        angles.push(angle);

        let distance = rng.random_range(RESOURCE_DISTANCE_MIN..=RESOURCE_DISTANCE_MAX);
        slots.push(Slot::polar(distance, angle, false));
    }

    Layout { slots, relaxed }
}

/// Sample an angle at least `MIN_ANGULAR_SEPARATION` from all accepted
/// angles, retrying up to the attempt budget
///
/// Returns the angle and whether the separation guarantee held. When the
/// budget is exhausted the last sample is accepted regardless - a known
/// relaxation, surfaced through `Layout::relaxed`.
fn sample_separated_angle(rng: &mut ChaChaRng, accepted: &[f64]) -> (f64, bool) {
    let mut angle = rng.random_range(0.0..TAU);
    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        if accepted
            .iter()
            .all(|&a| angular_difference(angle, a) >= MIN_ANGULAR_SEPARATION)
        {
            return (angle, true);
        }
        angle = rng.random_range(0.0..TAU);
    }
    (angle, false)
}

/// Absolute angular difference wrapped to [0, pi]
pub fn angular_difference(a: f64, b: f64) -> f64 {
    let diff = (a - b).rem_euclid(TAU);
    diff.min(TAU - diff)
}

/// One planet per shell at base + i * step, angles drawn without
/// replacement from the 10-degree grid
///
/// The two starting planets take the innermost shells. Config validation
/// guarantees the planet count fits the angle grid.
fn concentric_shells(
    rng: &mut ChaChaRng,
    resource_count: usize,
    shells: &ShellBounds,
) -> Layout {
    let total = resource_count + 2;
    debug_assert!(total <= SHELL_ANGLE_COUNT);

    let mut grid: Vec<f64> = (0..SHELL_ANGLE_COUNT)
        .map(|i| (i as u32 * SHELL_ANGLE_STEP_DEG) as f64 * std::f64::consts::PI / 180.0)
        .collect();
    grid.shuffle(rng);

    let slots = grid
        .into_iter()
        .take(total)
        .enumerate()
        .map(|(i, angle)| {
            let distance = shells.base_distance + i as f64 * shells.distance_step;
            Slot::polar(distance, angle, i < 2)
        })
        .collect();

    Layout { slots, relaxed: 0 }
}
