//! Generation configuration and validation
//!
//! All numeric parameters are validated before any output is produced;
//! an invalid configuration never yields a partial system.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::orbit::SpeedLaw;
use crate::placement::{PlacementStrategy, ShellBounds, SHELL_ANGLE_COUNT};

/// Upper bound on systems per batch
pub const MAX_SYSTEMS: u32 = 50;

/// Upper bound on resource planets per system - beyond this the layout
/// degenerates into noise. The shell strategy is further limited by its
/// angle grid.
pub const MAX_RESOURCE_PLANETS: u32 = 48;

/// Errors from nonsensical configuration values
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("system count must be between 1 and {MAX_SYSTEMS}, got {0}")]
    InvalidSystemCount(u32),
    #[error("resource planet count must be at most {MAX_RESOURCE_PLANETS}, got {0}")]
    TooManyResourcePlanets(u32),
    #[error("{0} planets do not fit the {SHELL_ANGLE_COUNT}-slot shell angle grid")]
    TooManyShells(usize),
    #[error("{name} radius must be positive")]
    InvalidRadius { name: &'static str },
    #[error("{name} metal density must be positive")]
    InvalidMetal { name: &'static str },
    #[error("shell {name} must be positive, got {value}")]
    InvalidShellDistance { name: &'static str, value: f64 },
    #[error("fixed speed range is empty or negative: [{min}, {max})")]
    InvalidSpeedRange { min: f64, max: f64 },
    #[error("inverse square-root speed scale must be positive, got {0}")]
    InvalidSpeedScale(f64),
}

/// Parameters for a generation request
///
/// Defaults match the tool's historical slider defaults: 5 systems of 3
/// resource planets around two 400-radius starting planets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Number of systems to generate in one batch
    pub systems: u32,
    /// Resource planets per system (starting planets are always 2)
    pub resource_planets: u32,
    /// Starting planet radius in game units
    pub starting_radius: u32,
    /// Starting planet metal density
    pub starting_metal: u32,
    /// Resource planet radius in game units
    pub resource_radius: u32,
    /// Base resource metal density, jittered +/-10% per planet
    pub base_metal: u32,
    /// How planets are laid out around the origin
    pub strategy: PlacementStrategy,
    /// How orbital speed is derived from distance
    pub speed_law: SpeedLaw,
    /// Shell distances for `ConcentricShells`
    pub shells: ShellBounds,
    /// Base name override; systems are numbered "{name} {i+1}"
    pub name: Option<String>,
    /// Creator recorded in the system files
    pub creator: Option<String>,
    /// RNG seed; the same seed and config reproduce byte-identical output.
    /// Unseeded requests use ambient randomness.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            systems: 5,
            resource_planets: 3,
            starting_radius: 400,
            starting_metal: 100,
            resource_radius: 300,
            base_metal: 50,
            strategy: PlacementStrategy::RandomPolar,
            speed_law: SpeedLaw::default(),
            shells: ShellBounds::default(),
            name: None,
            creator: None,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    /// Check every parameter, returning the first violation found
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.systems == 0 || self.systems > MAX_SYSTEMS {
            return Err(ConfigError::InvalidSystemCount(self.systems));
        }
        if self.resource_planets > MAX_RESOURCE_PLANETS {
            return Err(ConfigError::TooManyResourcePlanets(self.resource_planets));
        }
        if self.starting_radius == 0 {
            return Err(ConfigError::InvalidRadius { name: "starting" });
        }
        if self.resource_radius == 0 {
            return Err(ConfigError::InvalidRadius { name: "resource" });
        }
        if self.starting_metal == 0 {
            return Err(ConfigError::InvalidMetal { name: "starting" });
        }
        if self.base_metal == 0 {
            return Err(ConfigError::InvalidMetal { name: "base" });
        }

        if self.strategy == PlacementStrategy::ConcentricShells {
            let total = self.resource_planets as usize + 2;
            if total > SHELL_ANGLE_COUNT {
                return Err(ConfigError::TooManyShells(total));
            }
            if self.shells.base_distance <= 0.0 {
                return Err(ConfigError::InvalidShellDistance {
                    name: "base distance",
                    value: self.shells.base_distance,
                });
            }
            if self.shells.distance_step <= 0.0 {
                return Err(ConfigError::InvalidShellDistance {
                    name: "distance step",
                    value: self.shells.distance_step,
                });
            }
        }

        match self.speed_law {
            SpeedLaw::InverseSqrt { scale } if scale <= 0.0 => {
                return Err(ConfigError::InvalidSpeedScale(scale));
            }
            SpeedLaw::Uniform { min, max } if min < 0.0 || max <= min => {
                return Err(ConfigError::InvalidSpeedRange { min, max });
            }
            _ => {}
        }

        Ok(())
    }

    /// Total planets per system, starting planets included
    pub fn planets_per_system(&self) -> usize {
        self.resource_planets as usize + 2
    }
}
