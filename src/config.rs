//! Game configuration
//!
//! Persisted separately in LocalStorage on the web; native builds use defaults.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::Bounds;

/// Errors raised when a configuration breaks a construction-time invariant
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("avatar_size must be non-zero")]
    ZeroAvatarSize,
    #[error("food_size must be non-zero")]
    ZeroFoodSize,
    #[error("initial_speed {0} must be a positive finite number")]
    InvalidSpeed(f32),
    #[error("tick_rate must be non-zero")]
    ZeroTickRate,
    #[error("field {width}x{height} must have finite dimensions")]
    NonFiniteField { width: f32, height: f32 },
    #[error("field {width}x{height} cannot hold an avatar of size {avatar_size}")]
    FieldTooSmall {
        width: f32,
        height: f32,
        avatar_size: u32,
    },
    #[error("initial food position ({0}, {1}) is not finite")]
    InvalidInitialFood(f32, f32),
    #[error("invalid configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Tunable game parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Canvas width in pixels
    pub field_width: f32,
    /// Canvas height in pixels
    pub field_height: f32,
    /// Avatar edge length
    pub avatar_size: u32,
    /// Food edge length
    pub food_size: u32,
    /// Pixels per tick at the start of a run
    pub initial_speed: f32,
    /// Food position at the start of a run
    pub initial_food: [f32; 2],
    /// Draw the first food position from the RNG instead of `initial_food`
    pub randomize_initial_food: bool,
    /// Ticks per second
    pub tick_rate: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            avatar_size: AVATAR_SIZE,
            food_size: FOOD_SIZE,
            initial_speed: INITIAL_SPEED,
            initial_food: [INITIAL_FOOD_X, INITIAL_FOOD_Y],
            randomize_initial_food: false,
            tick_rate: TICK_RATE,
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check construction-time invariants
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.avatar_size == 0 {
            return Err(ConfigError::ZeroAvatarSize);
        }
        if self.food_size == 0 {
            return Err(ConfigError::ZeroFoodSize);
        }
        if !self.initial_speed.is_finite() || self.initial_speed <= 0.0 {
            return Err(ConfigError::InvalidSpeed(self.initial_speed));
        }
        if self.tick_rate == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        if !self.field_width.is_finite() || !self.field_height.is_finite() {
            return Err(ConfigError::NonFiniteField {
                width: self.field_width,
                height: self.field_height,
            });
        }
        let avatar = self.avatar_size as f32;
        if !(self.field_width >= avatar && self.field_height >= avatar) {
            return Err(ConfigError::FieldTooSmall {
                width: self.field_width,
                height: self.field_height,
                avatar_size: self.avatar_size,
            });
        }
        let [x, y] = self.initial_food;
        if !x.is_finite() || !y.is_finite() {
            return Err(ConfigError::InvalidInitialFood(x, y));
        }
        Ok(())
    }

    /// Field bounds described by this configuration
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.field_width, self.field_height)
    }

    /// Seconds per tick
    pub fn tick_dt(&self) -> f32 {
        1.0 / self.tick_rate as f32
    }

    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "blake_snake_config";

    /// Load configuration from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(config) => {
                        log::info!("Loaded config from LocalStorage");
                        return config;
                    }
                    Err(e) => log::warn!("Ignoring stored config: {}", e),
                }
            }
        }

        log::info!("Using default config");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        log::info!("Using default config");
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.bounds(), Bounds::new(800.0, 480.0));
        assert!((config.tick_dt() - 1.0 / 60.0).abs() < 1e-6);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = GameConfig::from_json(r#"{ "avatar_size": 40, "tick_rate": 30 }"#).unwrap();
        assert_eq!(config.avatar_size, 40);
        assert_eq!(config.tick_rate, 30);
        assert_eq!(config.food_size, FOOD_SIZE);
        assert_eq!(config.field_width, FIELD_WIDTH);
    }

    #[test]
    fn test_rejects_zero_sizes() {
        assert!(matches!(
            GameConfig::from_json(r#"{ "avatar_size": 0 }"#),
            Err(ConfigError::ZeroAvatarSize)
        ));
        assert!(matches!(
            GameConfig::from_json(r#"{ "food_size": 0 }"#),
            Err(ConfigError::ZeroFoodSize)
        ));
    }

    #[test]
    fn test_rejects_negative_size_as_json_error() {
        assert!(matches!(
            GameConfig::from_json(r#"{ "avatar_size": -5 }"#),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_rejects_bad_speed() {
        let config = GameConfig {
            initial_speed: 0.0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidSpeed(_))));
        let config = GameConfig {
            initial_speed: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidSpeed(_))));
    }

    #[test]
    fn test_rejects_field_smaller_than_avatar() {
        let config = GameConfig {
            field_width: 49.0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::FieldTooSmall { .. }));
        assert_eq!(
            err.to_string(),
            "field 49x480 cannot hold an avatar of size 50"
        );
    }

    #[test]
    fn test_rejects_infinite_field() {
        // 1e39 overflows f32 to infinity
        assert!(matches!(
            GameConfig::from_json(r#"{ "field_width": 1e39 }"#),
            Err(ConfigError::NonFiniteField { .. })
        ));
        let config = GameConfig {
            field_height: f32::INFINITY,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonFiniteField { .. })
        ));
    }

    #[test]
    fn test_rejects_zero_tick_rate() {
        assert!(matches!(
            GameConfig::from_json(r#"{ "tick_rate": 0 }"#),
            Err(ConfigError::ZeroTickRate)
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            GameConfig::from_json("not json"),
            Err(ConfigError::Json(_))
        ));
    }
}
