//! Simulation parameters
//!
//! Owned by whoever drives the game (sliders, a config file, a test). The
//! simulation only ever reads them.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Errors that can occur while loading parameters
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Json(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Json(e) => write!(f, "Invalid parameters: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Tunable simulation parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameParams {
    /// Velocity added per tick while a movement key is held
    #[serde(alias = "cartSpeed")]
    pub cart_accel: f32,
    /// Velocity multiplier applied every tick, in (0, 1]
    #[serde(alias = "cartFriction")]
    pub cart_friction: f32,
    /// Cart speed cap (pixels per tick)
    #[serde(alias = "cartMaxSpeed")]
    pub cart_max_speed: f32,
    /// Distance every falling item drops per tick
    #[serde(alias = "itemFallSpeed")]
    pub fall_speed: f32,
    /// Chance per tick that a reward appears
    #[serde(alias = "moneySpawnRate")]
    pub reward_spawn_rate: f32,
    /// Chance per tick that the goblin drops a bomb
    #[serde(alias = "bombSpawnRate")]
    pub hazard_spawn_rate: f32,
}

impl Default for GameParams {
    fn default() -> Self {
        Self {
            cart_accel: 0.5,
            cart_friction: 0.98,
            cart_max_speed: 5.0,
            fall_speed: 3.0,
            reward_spawn_rate: 0.02,
            hazard_spawn_rate: 0.01,
        }
    }
}

/// Slider ranges exposed to players
pub mod ranges {
    pub const CART_ACCEL: (f32, f32) = (0.0, 1.0);
    /// Lower bound is one slider notch; zero friction would freeze the cart
    pub const CART_FRICTION: (f32, f32) = (0.01, 1.0);
    pub const CART_MAX_SPEED: (f32, f32) = (0.0, 10.0);
    pub const FALL_SPEED: (f32, f32) = (0.0, 10.0);
    pub const SPAWN_RATE: (f32, f32) = (0.0, 0.1);
}

fn clamp_range(value: f32, (lo, hi): (f32, f32)) -> f32 {
    if value.is_nan() { lo } else { value.max(lo).min(hi) }
}

impl GameParams {
    /// Parse from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let params = Self::from_json(&json)?;
        log::info!("Loaded parameters from {}", path.display());
        Ok(params)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Constrain every value to its slider range
    pub fn clamped(&self) -> Self {
        let clamped = Self {
            cart_accel: clamp_range(self.cart_accel, ranges::CART_ACCEL),
            cart_friction: clamp_range(self.cart_friction, ranges::CART_FRICTION),
            cart_max_speed: clamp_range(self.cart_max_speed, ranges::CART_MAX_SPEED),
            fall_speed: clamp_range(self.fall_speed, ranges::FALL_SPEED),
            reward_spawn_rate: clamp_range(self.reward_spawn_rate, ranges::SPAWN_RATE),
            hazard_spawn_rate: clamp_range(self.hazard_spawn_rate, ranges::SPAWN_RATE),
        };
        if clamped != *self {
            log::warn!("Parameters out of range, clamped: {:?} -> {:?}", self, clamped);
        }
        clamped
    }
}
