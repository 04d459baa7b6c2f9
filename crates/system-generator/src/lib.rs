//! Procedural star system generation
//!
//! Generates game-ready star systems: two starting planets plus a
//! configurable number of resource planets, placed by one of three
//! strategies and given tangential velocities that approximate stable
//! circular orbits.
//!
//! Generation is a pure computation over an explicitly passed RNG: the same
//! seed and configuration always produce byte-identical output.

pub mod config;
pub mod generation;
pub mod orbit;
pub mod placement;

// Re-export main types at crate root
pub use config::{ConfigError, GeneratorConfig};
pub use generation::{generate_system, generate_systems, GeneratedSystem};
pub use orbit::{tangential_velocity, SpeedLaw};
pub use placement::{Layout, PlacementStrategy, Slot};

#[cfg(test)]
mod generation_test;
