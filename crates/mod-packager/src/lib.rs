//! Packaging of generated systems into game-ready files
//!
//! Serializes each `System` to the `.pas` layout the game expects (a
//! one-element JSON array, always) and bundles batches into a zip archive
//! laid out as a server-side content mod.

pub mod archive;
pub mod filename;
pub mod pas;

// Re-export main operations at crate root
pub use archive::{build_archive, write_archive, ModInfo, MAPS_DIR, README};
pub use filename::{sanitize_filename, system_filename};
pub use pas::{pas_json, PackageError};

#[cfg(test)]
mod pas_test;
