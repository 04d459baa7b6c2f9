//! System assembly pipeline
//!
//! Turns a validated configuration and an owned RNG into game-ready
//! systems: placement strategy picks the positions, the orbit primitive
//! assigns tangential velocities, and each planet gets an independently
//! sampled surface descriptor.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaChaRng;

use pas_system::{Biome, Planet, Surface, System};

use crate::config::{ConfigError, GeneratorConfig};
use crate::orbit::tangential_velocity;
use crate::placement::Slot;

/// Starting planet mass in game units
const STARTING_PLANET_MASS: u32 = 10000;

/// Resource planet mass in game units
const RESOURCE_PLANET_MASS: u32 = 5000;

/// Fixed surface temperature for starting planets
const STARTING_TEMPERATURE: u32 = 50;

/// Metal cluster counts per planet role
const STARTING_METAL_CLUSTERS: u32 = 50;
const RESOURCE_METAL_CLUSTERS: u32 = 40;

/// Surface seeds are drawn from [0, 100000)
const SURFACE_SEED_RANGE: u32 = 100_000;

/// A generated system plus placement diagnostics
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedSystem {
    pub system: System,
    /// Resource placements that gave up on the angular separation
    /// guarantee (evenly spaced strategy only)
    pub relaxed_placements: usize,
}

/// Generate one system from a validated configuration
///
/// The caller owns the RNG; the same RNG state and configuration always
/// produce the same system. Assumes `config.validate()` has passed -
/// use [`generate_systems`] for the validating entry point.
pub fn generate_system(config: &GeneratorConfig, rng: &mut ChaChaRng) -> GeneratedSystem {
    let name = config
        .name
        .clone()
        .unwrap_or_else(|| format!("Random System {}+2", config.resource_planets));
    generate_named_system(config, rng, name)
}

fn generate_named_system(
    config: &GeneratorConfig,
    rng: &mut ChaChaRng,
    name: String,
) -> GeneratedSystem {
    let description = format!(
        "Procedural system with 2 starting planets and {} additional",
        config.resource_planets
    );

    let mut system = System::new(name, description);
    if let Some(creator) = &config.creator {
        system = system.with_creator(creator.clone());
    }

    let layout = config
        .strategy
        .layout(rng, config.resource_planets as usize, &config.shells);

    let mut starting_index = 0;
    let mut resource_index = 0;
    for slot in &layout.slots {
        let planet = if slot.starting {
            starting_index += 1;
            starting_planet(config, rng, slot, starting_index)
        } else {
            resource_index += 1;
            resource_planet(config, rng, slot, resource_index)
        };
        system.planets.push(planet);
    }

    GeneratedSystem {
        system,
        relaxed_placements: layout.relaxed,
    }
}

/// Generate a batch of systems, validating the configuration first
///
/// Seeded batches derive system `i`'s RNG from `seed + i`, so the whole
/// batch is reproducible while systems still differ. A configured name
/// becomes "{name} {i+1}" per system.
///
/// Relaxed placements are logged as warnings; callers needing the exact
/// count per system should call [`generate_system`] directly.
pub fn generate_systems(config: &GeneratorConfig) -> Result<Vec<System>, ConfigError> {
    config.validate()?;

    let mut systems = Vec::with_capacity(config.systems as usize);
    for i in 0..config.systems as u64 {
        let mut rng = match config.seed {
            Some(seed) => ChaChaRng::seed_from_u64(seed.wrapping_add(i)),
            None => ChaChaRng::seed_from_u64(rand::rng().random()),
        };

        let name = config
            .name
            .as_ref()
            .map(|base| format!("{} {}", base, i + 1))
            .unwrap_or_else(|| format!("Random System {}+2", config.resource_planets));

        let generated = generate_named_system(config, &mut rng, name);
        if generated.relaxed_placements > 0 {
            log::warn!(
                "system '{}': {} resource planet(s) placed without the minimum \
                 angular separation",
                generated.system.name,
                generated.relaxed_placements
            );
        }
        systems.push(generated.system);
    }

    Ok(systems)
}

/// Build one of the two starting planets
///
/// Starting planets share a speed law (inverse square-root, scale 1) and
/// the second one's velocity is negated so the symmetric pair
/// counter-rotates.
fn starting_planet(
    config: &GeneratorConfig,
    rng: &mut ChaChaRng,
    slot: &Slot,
    index: usize,
) -> Planet {
    let (px, py) = slot.position;
    let (mut vx, mut vy) = tangential_velocity(rng, px, py, &config.speed_law);
    if index == 2 {
        vx = -vx;
        vy = -vy;
    }

    let surface = Surface::new(
        rng.random_range(0..SURFACE_SEED_RANGE),
        config.starting_radius,
        STARTING_TEMPERATURE,
        config.starting_metal,
    )
    .with_biome(Biome::sample_starting(rng))
    .with_metal_clusters(STARTING_METAL_CLUSTERS);

    Planet::new(
        format!("Starting Planet {}", index),
        STARTING_PLANET_MASS,
        surface,
    )
    .at_position(px, py)
    .with_velocity(vx, vy)
    .starting()
}

/// Build a resource planet
///
/// Metal density is the configured base value with a uniform +/-10%
/// deviation; temperature follows the sampled biome with a +/-10 jitter.
fn resource_planet(
    config: &GeneratorConfig,
    rng: &mut ChaChaRng,
    slot: &Slot,
    index: usize,
) -> Planet {
    let metal_deviation = rng.random_range(-0.1..=0.1);
    let metal_density = (config.base_metal as f64 * (1.0 + metal_deviation)).round() as u32;

    let (px, py) = slot.position;
    let speed_jitter = rng.random_range(0.8..1.2);
    let law = config.speed_law.scaled(speed_jitter);
    let (vx, vy) = tangential_velocity(rng, px, py, &law);

    let biome = Biome::sample(rng);
    let temperature = jitter_temperature(rng, biome.base_temperature());

    let surface = Surface::new(
        rng.random_range(0..SURFACE_SEED_RANGE),
        config.resource_radius,
        temperature,
        metal_density,
    )
    .with_biome(biome)
    .with_metal_clusters(RESOURCE_METAL_CLUSTERS);

    Planet::new(
        format!("Resource Planet {}", index),
        RESOURCE_PLANET_MASS,
        surface,
    )
    .at_position(px, py)
    .with_velocity(vx, vy)
}

/// Biome base temperature with a bounded +/-10 jitter, clamped to 0..=100
fn jitter_temperature(rng: &mut ChaChaRng, base: u32) -> u32 {
    let jitter: i64 = rng.random_range(-10..=10);
    (base as i64 + jitter).clamp(0, 100) as u32
}
