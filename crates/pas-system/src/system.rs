//! System and planet structures in the `.pas` layout

use serde::{Deserialize, Serialize};

use crate::surface::Surface;

/// A single planet entry in a system file
///
/// Field names match the `.pas` format exactly: top-level orbital state is
/// snake_case, the nested surface descriptor is camelCase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Planet {
    pub name: String,
    /// Planet mass in game units - affects gravity well strength
    pub mass: u32,
    pub position_x: i64,
    pub position_y: i64,
    pub velocity_x: i64,
    pub velocity_y: i64,
    /// Thrust needed before the planet can be steered (0 = immovable)
    pub required_thrust_to_move: u32,
    /// Whether players spawn here
    pub starting_planet: bool,
    pub respawn: bool,
    pub start_destroyed: bool,
    pub min_spawn_delay: u32,
    pub max_spawn_delay: u32,
    /// Surface descriptor, nested under the `planet` key
    #[serde(rename = "planet")]
    pub surface: Surface,
}

impl Planet {
    /// Create a planet at rest with no spawn behavior
    ///
    /// Respawn and start-destroyed flags are always false in generated
    /// output, and spawn delays always zero.
    pub fn new(name: impl Into<String>, mass: u32, surface: Surface) -> Self {
        Self {
            name: name.into(),
            mass,
            position_x: 0,
            position_y: 0,
            velocity_x: 0,
            velocity_y: 0,
            required_thrust_to_move: 0,
            starting_planet: false,
            respawn: false,
            start_destroyed: false,
            min_spawn_delay: 0,
            max_spawn_delay: 0,
            surface,
        }
    }

    /// Set position, rounding to the integer game-distance grid
    pub fn at_position(mut self, px: f64, py: f64) -> Self {
        self.position_x = px.round() as i64;
        self.position_y = py.round() as i64;
        self
    }

    /// Set velocity, rounding to integer components
    pub fn with_velocity(mut self, vx: f64, vy: f64) -> Self {
        self.velocity_x = vx.round() as i64;
        self.velocity_y = vy.round() as i64;
        self
    }

    /// Mark this planet as a starting planet
    pub fn starting(mut self) -> Self {
        self.starting_planet = true;
        self
    }

    /// Orbital distance from the system origin
    pub fn distance(&self) -> f64 {
        (self.position_x as f64).hypot(self.position_y as f64)
    }
}

/// A complete star system as stored in a `.pas` file
///
/// Planet order is significant: it is preserved in output and determines
/// in-game slot order. Generated systems emit the two starting planets
/// first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct System {
    pub name: String,
    pub description: String,
    /// Format version tag
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
    /// Supported player-count range, when constrained
    #[serde(skip_serializing_if = "Option::is_none")]
    pub players: Option<(u32, u32)>,
    pub planets: Vec<Planet>,
}

impl System {
    /// Create an empty system with the current format version
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            version: "1.0".to_string(),
            creator: None,
            players: None,
            planets: Vec::new(),
        }
    }

    /// Set the creator (builder pattern)
    pub fn with_creator(mut self, creator: impl Into<String>) -> Self {
        self.creator = Some(creator.into());
        self
    }

    /// Set the supported player-count range (builder pattern)
    pub fn with_players(mut self, min: u32, max: u32) -> Self {
        self.players = Some((min, max));
        self
    }

    /// Planets flagged as starting planets
    pub fn starting_planets(&self) -> impl Iterator<Item = &Planet> {
        self.planets.iter().filter(|p| p.starting_planet)
    }

    /// Planets not flagged as starting planets
    pub fn resource_planets(&self) -> impl Iterator<Item = &Planet> {
        self.planets.iter().filter(|p| !p.starting_planet)
    }
}
