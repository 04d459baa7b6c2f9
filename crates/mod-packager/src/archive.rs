//! Server mod archive construction
//!
//! Bundles a batch of systems into a zip laid out as a Planetary
//! Annihilation server mod: one `.pas` per system under `pa/maps/`, plus a
//! static `modinfo.json` and `README.txt` at the archive root.

use std::io::{Cursor, Seek, Write};

use serde::{Deserialize, Serialize};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use pas_system::System;

use crate::filename::system_filename;
use crate::pas::{pas_json, PackageError};

/// Archive subdirectory holding the system files
pub const MAPS_DIR: &str = "pa/maps";

/// Installation instructions shipped with every archive
pub const README: &str = "\
# PA Titans Generated Systems

Copy the 'generated_maps' folder into your Planetary Annihilation server_mods directory.

Windows: %LOCALAPPDATA%\\Uber Entertainment\\Planetary Annihilation\\server_mods\\
Linux: ~/.local/Uber Entertainment/Planetary Annihilation/server_mods/
Mac: ~/Library/Application Support/Uber Entertainment/Planetary Annihilation/server_mods/

Structure inside the zip:

generated_maps/
  |- modinfo.json
  |- pa/
     |- maps/
        |- <system>.pas
";

/// Mod metadata identifying the archive as a server-side content pack
///
/// All fields are static - the metadata does not depend on generation
/// parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModInfo {
    pub context: String,
    pub identifier: String,
    pub display_name: String,
    pub description: String,
    pub author: String,
    pub version: String,
    pub priority: u32,
}

impl ModInfo {
    /// The fixed metadata for generated-map archives
    pub fn generated_maps() -> Self {
        Self {
            context: "server".to_string(),
            identifier: "generated_maps".to_string(),
            display_name: "Generated Maps".to_string(),
            description: "Procedurally generated star systems".to_string(),
            author: "PA Titans Community".to_string(),
            version: "1.0".to_string(),
            priority: 100,
        }
    }
}

/// Build a distributable zip archive in memory
///
/// Contains one `.pas` file per system (under [`MAPS_DIR`], named by
/// [`system_filename`]), `modinfo.json` and `README.txt`. Any failure
/// returns an error rather than a partial archive.
pub fn build_archive(systems: &[System]) -> Result<Vec<u8>, PackageError> {
    let cursor = write_archive(systems, Cursor::new(Vec::new()))?;
    Ok(cursor.into_inner())
}

/// Write the mod archive to any seekable writer
pub fn write_archive<W: Write + Seek>(systems: &[System], writer: W) -> Result<W, PackageError> {
    let mut zip = ZipWriter::new(writer);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for (i, system) in systems.iter().enumerate() {
        let path = format!("{}/{}", MAPS_DIR, system_filename(&system.name, i));
        zip.start_file(path, options)?;
        zip.write_all(pas_json(system)?.as_bytes())?;
    }

    zip.start_file("modinfo.json", options)?;
    zip.write_all(serde_json::to_string_pretty(&ModInfo::generated_maps())?.as_bytes())?;

    zip.start_file("README.txt", options)?;
    zip.write_all(README.as_bytes())?;

    Ok(zip.finish()?)
}
