//! Simulation tuning resource.
//!
//! World-level constants loaded from an INI configuration file, with safe
//! defaults for startup. Values cover the forces and speeds the resolvers
//! apply every tick.
//!
//! # Configuration File Format
//!
//! ```ini
//! [world]
//! gravity = 9.8
//! ground_speed = 120.0
//! air_speed = 300.0
//! block_knockback = 0.4
//!
//! [sim]
//! tick_rate = 60
//! ```

use bevy_ecs::prelude::Resource;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_GRAVITY: f32 = 9.8;
const DEFAULT_GROUND_SPEED: f32 = 120.0;
const DEFAULT_AIR_SPEED: f32 = 300.0;
const DEFAULT_BLOCK_KNOCKBACK: f32 = 0.4;
const DEFAULT_TICK_RATE: u32 = 60;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Downward velocity added to every fighter each tick.
    pub gravity: f32,
    /// Horizontal walk speed while grounded, world units per second.
    pub ground_speed: f32,
    /// Vertical speed granted by the up axis while grounded (the jump
    /// impulse), world units per second.
    pub air_speed: f32,
    /// Scale applied to knockback when an attack is blocked.
    pub block_knockback: f32,
    /// Fixed simulation ticks per second.
    pub tick_rate: u32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            ground_speed: DEFAULT_GROUND_SPEED,
            air_speed: DEFAULT_AIR_SPEED,
            block_knockback: DEFAULT_BLOCK_KNOCKBACK,
            tick_rate: DEFAULT_TICK_RATE,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    #[allow(dead_code)]
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Seconds per simulation tick.
    pub fn tick_delta(&self) -> f32 {
        1.0 / self.tick_rate as f32
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [world] section
        if let Some(gravity) = config.getfloat("world", "gravity").ok().flatten() {
            self.gravity = gravity as f32;
        }
        if let Some(speed) = config.getfloat("world", "ground_speed").ok().flatten() {
            self.ground_speed = speed as f32;
        }
        if let Some(speed) = config.getfloat("world", "air_speed").ok().flatten() {
            self.air_speed = speed as f32;
        }
        if let Some(modifier) = config.getfloat("world", "block_knockback").ok().flatten() {
            self.block_knockback = modifier as f32;
        }

        // [sim] section
        if let Some(rate) = config.getuint("sim", "tick_rate").ok().flatten() {
            self.tick_rate = rate as u32;
        }

        info!(
            "Loaded config: gravity={}, ground_speed={}, air_speed={}, block_knockback={}, tick_rate={}",
            self.gravity, self.ground_speed, self.air_speed, self.block_knockback, self.tick_rate
        );

        Ok(())
    }
}
