//! `.pas` file serialization

use thiserror::Error;

use pas_system::System;

/// Errors from serializing or archiving systems
#[derive(Error, Debug)]
pub enum PackageError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("zip archive error: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Serialize a system to `.pas` file content
///
/// The game requires the top-level JSON value to be an array containing
/// exactly one system object, not a bare object. Every `.pas` produced by
/// this crate is wrapped that way, both in archives and in single-file
/// downloads.
pub fn pas_json(system: &System) -> Result<String, PackageError> {
    Ok(serde_json::to_string_pretty(std::slice::from_ref(system))?)
}
