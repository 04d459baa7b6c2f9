use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use crate::config::GeneratorConfig;
use crate::generation::{generate_system, generate_systems};
use crate::placement::PlacementStrategy;

fn seeded_config() -> GeneratorConfig {
    GeneratorConfig {
        systems: 1,
        resource_planets: 3,
        base_metal: 50,
        starting_metal: 100,
        seed: Some(42),
        ..Default::default()
    }
}

#[test]
fn test_end_to_end_seed_42() {
    let config = seeded_config();
    let systems = generate_systems(&config).unwrap();
    assert_eq!(systems.len(), 1);

    let system = &systems[0];
    assert_eq!(system.planets.len(), 5);

    // First two planets are the starting pair
    assert!(system.planets[0].starting_planet);
    assert!(system.planets[1].starting_planet);
    assert!(system.planets[2..].iter().all(|p| !p.starting_planet));

    // Resource metal densities stay within the +/-10% band of base 50
    for planet in system.resource_planets() {
        let metal = planet.surface.metal_density;
        assert!(
            (45..=55).contains(&metal),
            "resource metal density out of band: {}",
            metal
        );
    }

    // Starting planets keep the configured values
    for planet in system.starting_planets() {
        assert_eq!(planet.surface.metal_density, 100);
        assert_eq!(planet.surface.radius, 400);
        assert_eq!(planet.surface.temperature, 50);
        assert_eq!(planet.mass, 10000);
    }

    // Rerunning with the same seed reproduces the system exactly
    let again = generate_systems(&config).unwrap();
    assert_eq!(systems, again);
}

#[test]
fn test_seeded_batches_are_byte_identical() {
    for strategy in [
        PlacementStrategy::RandomPolar,
        PlacementStrategy::EvenlySpaced,
        PlacementStrategy::ConcentricShells,
    ] {
        let config = GeneratorConfig {
            systems: 4,
            strategy,
            seed: Some(7),
            ..Default::default()
        };

        let a = generate_systems(&config).unwrap();
        let b = generate_systems(&config).unwrap();

        let json_a = serde_json::to_string(&a).unwrap();
        let json_b = serde_json::to_string(&b).unwrap();
        assert_eq!(json_a, json_b, "{}: seeded output not reproducible", strategy);
    }
}

#[test]
fn test_systems_within_a_batch_differ() {
    let config = GeneratorConfig {
        systems: 3,
        seed: Some(1000),
        ..Default::default()
    };
    let systems = generate_systems(&config).unwrap();

    // Per-system seeds are offset, so layouts must differ
    assert_ne!(systems[0].planets, systems[1].planets);
    assert_ne!(systems[1].planets, systems[2].planets);
}

#[test]
fn test_velocities_are_perpendicular_within_rounding() {
    for strategy in [
        PlacementStrategy::RandomPolar,
        PlacementStrategy::EvenlySpaced,
        PlacementStrategy::ConcentricShells,
    ] {
        let config = GeneratorConfig {
            systems: 1,
            resource_planets: 8,
            strategy,
            seed: Some(42),
            ..Default::default()
        };
        let systems = generate_systems(&config).unwrap();

        for planet in &systems[0].planets {
            let (px, py) = (planet.position_x as f64, planet.position_y as f64);
            let (vx, vy) = (planet.velocity_x as f64, planet.velocity_y as f64);
            let dot = px * vx + py * vy;

            // Rounding both vectors to integers bounds the error by
            // |p| + |v| (each component off by at most 0.5)
            let tolerance = px.hypot(py) + vx.hypot(vy) + 1.0;
            assert!(
                dot.abs() <= tolerance,
                "{}: {} dot product {} exceeds rounding tolerance {}",
                strategy,
                planet.name,
                dot,
                tolerance
            );
        }
    }
}

#[test]
fn test_starting_pair_counter_rotates() {
    let config = seeded_config();
    let systems = generate_systems(&config).unwrap();
    let planets = &systems[0].planets;

    // Symmetric positions with mirrored velocities
    assert_eq!(planets[0].position_x, -planets[1].position_x);
    assert_eq!(planets[0].position_y, -planets[1].position_y);
    assert_eq!(planets[0].velocity_x, planets[1].velocity_x);
    assert_eq!(planets[0].velocity_y, planets[1].velocity_y);
}

#[test]
fn test_default_names_and_description() {
    let config = seeded_config();
    let systems = generate_systems(&config).unwrap();

    assert_eq!(systems[0].name, "Random System 3+2");
    assert_eq!(
        systems[0].description,
        "Procedural system with 2 starting planets and 3 additional"
    );
    assert_eq!(systems[0].version, "1.0");

    let planets = &systems[0].planets;
    assert_eq!(planets[0].name, "Starting Planet 1");
    assert_eq!(planets[1].name, "Starting Planet 2");
    assert_eq!(planets[2].name, "Resource Planet 1");
}

#[test]
fn test_name_override_numbers_systems() {
    let config = GeneratorConfig {
        systems: 2,
        name: Some("Custom System".to_string()),
        creator: Some("tests".to_string()),
        seed: Some(42),
        ..Default::default()
    };
    let systems = generate_systems(&config).unwrap();

    assert_eq!(systems[0].name, "Custom System 1");
    assert_eq!(systems[1].name, "Custom System 2");
    assert_eq!(systems[0].creator.as_deref(), Some("tests"));
}

#[test]
fn test_invalid_config_produces_no_output() {
    let config = GeneratorConfig {
        base_metal: 0,
        ..Default::default()
    };
    assert!(generate_systems(&config).is_err());
}

#[test]
fn test_relaxed_placements_are_reported() {
    // 20 resource planets cannot all keep 30 degree separation
    let config = GeneratorConfig {
        resource_planets: 20,
        strategy: PlacementStrategy::EvenlySpaced,
        ..Default::default()
    };
    let mut rng = ChaChaRng::seed_from_u64(42);
    let generated = generate_system(&config, &mut rng);

    assert!(generated.relaxed_placements > 0);
    assert_eq!(generated.system.planets.len(), 22);
}

#[test]
fn test_surface_seeds_are_fresh_per_planet() {
    let config = GeneratorConfig {
        resource_planets: 10,
        seed: Some(42),
        ..Default::default()
    };
    let systems = generate_systems(&config).unwrap();

    let seeds: Vec<u32> = systems[0].planets.iter().map(|p| p.surface.seed).collect();
    assert!(seeds.iter().all(|&s| s < 100_000));

    // 12 independent draws from [0, 100000) colliding is vanishingly
    // unlikely; identical seeds would mean the RNG is not advancing
    let unique: std::collections::HashSet<u32> = seeds.iter().copied().collect();
    assert_eq!(unique.len(), seeds.len());
}
