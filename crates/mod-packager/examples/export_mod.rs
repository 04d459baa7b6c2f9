//! Generate a seeded batch of systems and export them as a server mod
//!
//! Usage: cargo run -p mod-packager --example export_mod
//!
//! Output: pa_titans_systems.zip in current directory

use std::fs::File;

use mod_packager::{write_archive, PackageError};
use system_generator::{generate_systems, ConfigError, GeneratorConfig};

#[derive(Debug)]
enum ExportError {
    Config(ConfigError),
    Package(PackageError),
}

impl From<ConfigError> for ExportError {
    fn from(err: ConfigError) -> Self {
        ExportError::Config(err)
    }
}

impl From<PackageError> for ExportError {
    fn from(err: PackageError) -> Self {
        ExportError::Package(err)
    }
}

fn main() -> Result<(), ExportError> {
    env_logger::init();

    let config = GeneratorConfig {
        systems: 5,
        resource_planets: 3,
        seed: Some(42),
        ..Default::default()
    };

    let systems = generate_systems(&config)?;
    for system in &systems {
        println!(
            "{}: {} planets, resource metal {:?}",
            system.name,
            system.planets.len(),
            system
                .resource_planets()
                .map(|p| p.surface.metal_density)
                .collect::<Vec<_>>()
        );
    }

    let file = File::create("pa_titans_systems.zip").map_err(PackageError::from)?;
    write_archive(&systems, file)?;
    eprintln!("Wrote {} systems to pa_titans_systems.zip", systems.len());

    Ok(())
}
