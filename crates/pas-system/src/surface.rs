//! Planet surface descriptor and biome classification

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Biome tag understood by the game's terrain generator
///
/// `Gas` is part of the format enumeration but is never sampled for
/// generated planets - gas giants have no landable surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Biome {
    Earth,
    Desert,
    Lava,
    Moon,
    Tropical,
    Ice,
    Metal,
    Gas,
}

/// Biomes eligible for generated planets
const LANDABLE_BIOMES: [Biome; 7] = [
    Biome::Earth,
    Biome::Desert,
    Biome::Lava,
    Biome::Moon,
    Biome::Tropical,
    Biome::Ice,
    Biome::Metal,
];

impl Biome {
    /// Sample a biome uniformly from the landable set
    pub fn sample(rng: &mut impl Rng) -> Self {
        LANDABLE_BIOMES[rng.random_range(0..LANDABLE_BIOMES.len())]
    }

    /// Sample a biome for a starting planet, weighted toward `Earth`
    ///
    /// Starting planets favor temperate terrain: 50% `Earth`, remainder
    /// uniform over the other landable biomes.
    pub fn sample_starting(rng: &mut impl Rng) -> Self {
        if rng.random::<f64>() < 0.5 {
            Biome::Earth
        } else {
            LANDABLE_BIOMES[rng.random_range(1..LANDABLE_BIOMES.len())]
        }
    }

    /// Typical surface temperature for this biome (game units, 0-100)
    ///
    /// Used as the center of the biome-correlated temperature jitter on
    /// resource planets.
    pub fn base_temperature(&self) -> u32 {
        match self {
            Biome::Earth => 50,
            Biome::Desert => 75,
            Biome::Lava => 90,
            Biome::Moon => 40,
            Biome::Tropical => 65,
            Biome::Ice => 10,
            Biome::Metal => 45,
            Biome::Gas => 50,
        }
    }
}

impl std::fmt::Display for Biome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            Biome::Earth => "earth",
            Biome::Desert => "desert",
            Biome::Lava => "lava",
            Biome::Moon => "moon",
            Biome::Tropical => "tropical",
            Biome::Ice => "ice",
            Biome::Metal => "metal",
            Biome::Gas => "gas",
        };
        write!(f, "{}", tag)
    }
}

/// Surface descriptor nested under a planet's `planet` key
///
/// Keys are camelCase in the `.pas` format except `seed`, `radius`,
/// `temperature` and `biome`, which are single words.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Surface {
    /// Terrain generation seed, fresh per planet
    pub seed: u32,
    /// Planet radius in game units
    pub radius: u32,
    pub height_range: u32,
    pub water_height: u32,
    pub water_depth: u32,
    /// Surface temperature, 0-100
    pub temperature: u32,
    /// Metal spot density, 0-100
    pub metal_density: u32,
    pub metal_clusters: u32,
    pub biome_scale: u32,
    pub biome: Biome,
}

impl Surface {
    /// Create a surface with the fixed terrain parameters generated
    /// systems use (height range 50, no water, biome scale 50)
    pub fn new(seed: u32, radius: u32, temperature: u32, metal_density: u32) -> Self {
        Self {
            seed,
            radius,
            height_range: 50,
            water_height: 0,
            water_depth: 0,
            temperature,
            metal_density,
            metal_clusters: 40,
            biome_scale: 50,
            biome: Biome::Earth,
        }
    }

    /// Set the biome (builder pattern)
    pub fn with_biome(mut self, biome: Biome) -> Self {
        self.biome = biome;
        self
    }

    /// Set the metal cluster count (builder pattern)
    pub fn with_metal_clusters(mut self, clusters: u32) -> Self {
        self.metal_clusters = clusters;
        self
    }
}
