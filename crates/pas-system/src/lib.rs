//! Unified star system output types
//!
//! This crate defines the output format shared by all placement strategies:
//! a `System` holding an ordered list of `Planet`s, each with a `Surface`
//! descriptor. Field names follow the `.pas` file format consumed by
//! Planetary Annihilation: Titans.

pub mod surface;
pub mod system;

// Re-export main types at crate root
pub use surface::{Biome, Surface};
pub use system::{Planet, System};
