//! Orbit placement and velocity primitive
//!
//! Planets are not simulated; they get a velocity tangential to their
//! position vector so they trace orbit-like paths around the system origin.
//! The tangential direction is the normalized position rotated +90
//! degrees: (x, y) -> (-y, x).

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Numerator of the inverse square-root speed law
///
/// Tuned so planets at typical orbital distances (25k-50k game units)
/// get speeds around 90-130 units.
const ORBITAL_SPEED_NUMERATOR: f64 = 20000.0;

/// Velocity component bound for the degenerate origin fallback
const FALLBACK_SPEED: f64 = 50.0;

/// How orbital speed is derived from position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SpeedLaw {
    /// Speed decreases with distance: `scale * 20000 / (sqrt(d) + 1)`
    InverseSqrt { scale: f64 },
    /// Speed drawn uniformly from a fixed range, independent of distance
    Uniform { min: f64, max: f64 },
}

impl Default for SpeedLaw {
    fn default() -> Self {
        SpeedLaw::InverseSqrt { scale: 1.0 }
    }
}

impl SpeedLaw {
    /// Multiply an inverse square-root law's scale; fixed ranges pass
    /// through unchanged
    pub fn scaled(self, factor: f64) -> Self {
        match self {
            SpeedLaw::InverseSqrt { scale } => SpeedLaw::InverseSqrt {
                scale: scale * factor,
            },
            law @ SpeedLaw::Uniform { .. } => law,
        }
    }

    fn speed(&self, rng: &mut impl Rng, distance: f64) -> f64 {
        match self {
            SpeedLaw::InverseSqrt { scale } => {
                scale * ORBITAL_SPEED_NUMERATOR / (distance.sqrt() + 1.0)
            }
            SpeedLaw::Uniform { min, max } => rng.random_range(*min..*max),
        }
    }
}

/// Compute a velocity tangential to the position vector
///
/// The returned vector is exactly perpendicular to `(px, py)` before the
/// caller rounds it to integer components, so the dot product
/// `px*vx + py*vy` is zero up to floating point error.
///
/// A position at the origin has no tangential direction; the fallback is a
/// small random velocity with both components in `[-50, 50)`. This is
/// deterministic under a fixed seed.
///
/// # Example
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaChaRng;
/// use system_generator::orbit::{tangential_velocity, SpeedLaw};
///
/// let mut rng = ChaChaRng::seed_from_u64(42);
/// let (vx, vy) = tangential_velocity(&mut rng, 25000.0, 0.0, &SpeedLaw::default());
/// assert!((25000.0 * vx).abs() < 1e-6);
/// assert!(vy > 0.0);
/// ```
pub fn tangential_velocity(
    rng: &mut impl Rng,
    px: f64,
    py: f64,
    law: &SpeedLaw,
) -> (f64, f64) {
    let distance = px.hypot(py);
    if distance == 0.0 {
        return (
            rng.random_range(-FALLBACK_SPEED..FALLBACK_SPEED),
            rng.random_range(-FALLBACK_SPEED..FALLBACK_SPEED),
        );
    }

    let speed = law.speed(rng, distance);
    (-py / distance * speed, px / distance * speed)
}
