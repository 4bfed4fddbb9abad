//! Game configuration
//!
//! Gameplay and track tunables, loadable from a TOML file with
//! defaults matching the built-in course.

use serde::{Deserialize, Serialize};

/// Game configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GameConfig {
    /// Gameplay settings
    pub gameplay: GameplayConfig,

    /// Track layout settings
    pub track: TrackConfig,
}

/// Gameplay configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameplayConfig {
    /// Forward speed per tick
    pub speed: f32,

    /// Heading change per steering event, in degrees
    pub turn_step_deg: f32,

    /// Collision volume inset relative to the visual mesh
    pub collision_margin: f32,

    /// How far ahead of the car's position the finish comparison reaches
    pub forward_reach: f32,
}

/// Track configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackConfig {
    /// Road width
    pub road_width: f32,

    /// Road length
    pub road_length: f32,

    /// Number of box obstacles per road side
    pub side_box_count: u32,

    /// Finish line position on the Z axis
    pub finish_z: f32,
}

impl Default for GameplayConfig {
    fn default() -> Self {
        Self {
            speed: 0.03,
            turn_step_deg: 5.0,
            collision_margin: 0.2,
            forward_reach: 1.0,
        }
    }
}

impl Default for TrackConfig {
    fn default() -> Self {
        Self {
            road_width: 8.0,
            road_length: 80.0,
            side_box_count: 10,
            finish_z: -2.0,
        }
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),
}

impl GameConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}
