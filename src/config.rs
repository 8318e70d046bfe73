//! Playfield and speed configuration
//!
//! Read-only: defaults come from `consts`, overrides from a JSON document
//! (canvas `data-config` attribute on the web, a file path natively).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Reasons a configuration is rejected
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("`{field}` must be a finite positive number, got {value}")]
    NotPositive { field: &'static str, value: f32 },
    #[error("`{field}` must be finite, got {value}")]
    NotFinite { field: &'static str, value: f32 },
    #[error("paddles ({needed}px) do not fit a {width}px wide surface")]
    PaddlesDoNotFit { needed: f32, width: f32 },
    #[error("{what} ({size}px) is taller than the {height}px surface")]
    TooTall {
        what: &'static str,
        size: f32,
        height: f32,
    },
}

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub surface_width: f32,
    pub surface_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_margin: f32,
    pub left_paddle_speed: f32,
    pub right_paddle_speed: f32,
    pub ball_size: f32,
    pub ball_speed: f32,
    pub serve_dy_range: f32,
    /// Fixed RNG seed (None = derive from the clock)
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            surface_width: SURFACE_WIDTH,
            surface_height: SURFACE_HEIGHT,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_margin: PADDLE_MARGIN,
            left_paddle_speed: LEFT_PADDLE_SPEED,
            right_paddle_speed: RIGHT_PADDLE_SPEED,
            ball_size: BALL_SIZE,
            ball_speed: BALL_SPEED,
            serve_dy_range: SERVE_DY_RANGE,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Parse a (possibly partial) JSON document; missing fields keep defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Same as the defaults but with the surface resized
    pub fn with_surface(mut self, width: f32, height: f32) -> Self {
        self.surface_width = width;
        self.surface_height = height;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("surface_width", self.surface_width),
            ("surface_height", self.surface_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("ball_size", self.ball_size),
            ("ball_speed", self.ball_speed),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NotPositive { field, value });
            }
        }

        let finite = [
            ("paddle_margin", self.paddle_margin),
            ("left_paddle_speed", self.left_paddle_speed),
            ("right_paddle_speed", self.right_paddle_speed),
            ("serve_dy_range", self.serve_dy_range),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
        }

        let needed = 2.0 * (self.paddle_margin + self.paddle_width) + self.ball_size;
        if needed >= self.surface_width {
            return Err(ConfigError::PaddlesDoNotFit {
                needed,
                width: self.surface_width,
            });
        }

        if self.paddle_height > self.surface_height {
            return Err(ConfigError::TooTall {
                what: "paddle",
                size: self.paddle_height,
                height: self.surface_height,
            });
        }
        if self.ball_size > self.surface_height {
            return Err(ConfigError::TooTall {
                what: "ball",
                size: self.ball_size,
                height: self.surface_height,
            });
        }

        Ok(())
    }
}
