//! Data-driven game tuning
//!
//! Every gameplay constant can be overridden from a JSON file. Missing
//! fields fall back to the values in [`crate::consts`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Problems with a configuration source
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("gap range is empty: need {needed} units of play band, have {available}")]
    DegenerateGap { needed: f32, available: f32 },
    #[error("invalid value for {field}: {value}")]
    InvalidValue { field: &'static str, value: f32 },
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub world_width: f32,
    pub world_height: f32,
    pub ground_height: f32,
    pub body_x: f32,
    pub body_radius: f32,
    pub gravity: f32,
    pub flap_velocity: f32,
    pub max_frame_dt: f32,
    pub spawn_interval_ms: f32,
    pub obstacle_speed: f32,
    pub obstacle_width: f32,
    pub gap_min: f32,
    pub gap_max: f32,
    pub easy_gap_extra: f32,
    pub gap_margin_top: f32,
    pub gap_margin_bottom: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            ground_height: GROUND_HEIGHT,
            body_x: BODY_X,
            body_radius: BODY_RADIUS,
            gravity: GRAVITY,
            flap_velocity: FLAP_VELOCITY,
            max_frame_dt: MAX_FRAME_DT,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            obstacle_speed: OBSTACLE_SPEED,
            obstacle_width: OBSTACLE_WIDTH,
            gap_min: GAP_MIN,
            gap_max: GAP_MAX,
            easy_gap_extra: EASY_GAP_EXTRA,
            gap_margin_top: GAP_MARGIN_TOP,
            gap_margin_bottom: GAP_MARGIN_BOTTOM,
        }
    }
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Y coordinate of the ground surface
    pub fn ground_line(&self) -> f32 {
        self.world_height - self.ground_height
    }

    /// Largest gap the spawner can ever draw
    pub fn widest_gap(&self) -> f32 {
        self.gap_max + self.easy_gap_extra
    }

    /// Highest allowed gap-top for a gap of the given height
    pub fn max_gap_top(&self, gap: f32) -> f32 {
        self.world_height - (self.ground_height + self.gap_margin_bottom) - gap
    }

    /// Check that the spawner's draw ranges are non-empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("world_width", self.world_width),
            ("world_height", self.world_height),
            ("body_radius", self.body_radius),
            ("max_frame_dt", self.max_frame_dt),
            ("spawn_interval_ms", self.spawn_interval_ms),
            ("obstacle_width", self.obstacle_width),
            ("gap_min", self.gap_min),
        ];
        for (field, value) in positive {
            if !(value > 0.0) {
                return Err(ConfigError::InvalidValue { field, value });
            }
        }
        if self.gap_max < self.gap_min {
            return Err(ConfigError::InvalidValue {
                field: "gap_max",
                value: self.gap_max,
            });
        }
        if self.easy_gap_extra < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "easy_gap_extra",
                value: self.easy_gap_extra,
            });
        }

        let available = self.world_height - self.ground_height - self.gap_margin_bottom;
        let needed = self.gap_margin_top + self.widest_gap();
        if needed > available {
            return Err(ConfigError::DegenerateGap { needed, available });
        }
        Ok(())
    }

    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a JSON config file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::new();
        assert!(config.validate().is_ok());
        assert_eq!(config.ground_line(), 368.0);
    }

    #[test]
    fn test_widest_gap_still_fits() {
        let config = GameConfig::new();
        assert!(config.max_gap_top(config.widest_gap()) >= config.gap_margin_top);
    }

    #[test]
    fn test_degenerate_gap_rejected() {
        let config = GameConfig {
            world_height: 300.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DegenerateGap { .. })
        ));
    }

    #[test]
    fn test_from_json_partial_override() {
        let config = GameConfig::from_json(r#"{ "gravity": 1200.0 }"#).unwrap();
        assert_eq!(config.gravity, 1200.0);
        assert_eq!(config.obstacle_speed, OBSTACLE_SPEED);
    }

    #[test]
    fn test_from_json_rejects_bad_values() {
        assert!(matches!(
            GameConfig::from_json(r#"{ "gap_min": 0.0 }"#),
            Err(ConfigError::InvalidValue { field: "gap_min", .. })
        ));
        assert!(matches!(
            GameConfig::from_json("not json"),
            Err(ConfigError::Json(_))
        ));
    }
}
