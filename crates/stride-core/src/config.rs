//! Rig configuration.
//!
//! Defaults reproduce the built-in walk: a 200x400 frame centered on a
//! 1280x720 screen, 5 px/tick movement and legs scaled 0.95 / 1.05 to fake
//! depth. A JSON file can override any subset of the fields.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::geometry::Frame;
use crate::keyframe::KeyframeTable;
use crate::rig::LegPalette;

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Screen the frame is placed on, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

/// Size and starting height of the character frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameConfig {
    pub width: f64,
    pub height: f64,
    /// Bottom edge of the frame at startup. The frame starts centered horizontally.
    pub y: f64,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            width: 200.0,
            height: 400.0,
            y: 50.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    /// Pixels per tick along one axis.
    pub speed: f64,
    /// Multiplier applied to both axes when moving diagonally.
    pub diagonal_factor: f64,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            speed: 5.0,
            diagonal_factor: 0.8,
        }
    }
}

/// Bone proportions and leg styling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RigConfig {
    /// Thigh length as a fraction of the frame height.
    pub thigh_length: f64,
    /// Shank length as a fraction of the frame height.
    pub shank_length: f64,
    /// Depth scale of the far (left) leg.
    pub left_scale: f64,
    /// Depth scale of the near (right) leg.
    pub right_scale: f64,
    /// Width of a drawn bone, in pixels.
    pub bone_width: f64,
    pub palette: LegPalette,
}

impl Default for RigConfig {
    fn default() -> Self {
        Self {
            thigh_length: 0.15,
            shank_length: 0.2,
            left_scale: 0.95,
            right_scale: 1.05,
            bone_width: 4.0,
            palette: LegPalette::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Draw markers on the hip, knee and foot of each leg.
    pub show_joints: bool,
}

/// Complete configuration for a [`crate::game::GameState`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StrideConfig {
    pub screen: ScreenConfig,
    pub frame: FrameConfig,
    pub movement: MovementConfig,
    pub rig: RigConfig,
    pub debug: DebugConfig,
    pub keyframes: KeyframeTable,
}

impl StrideConfig {
    /// Parses and validates a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Checks the numeric invariants serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("frame.width", self.frame.width),
            ("frame.height", self.frame.height),
            ("movement.speed", self.movement.speed),
            ("rig.thigh_length", self.rig.thigh_length),
            ("rig.shank_length", self.rig.shank_length),
            ("rig.left_scale", self.rig.left_scale),
            ("rig.right_scale", self.rig.right_scale),
            ("rig.bone_width", self.rig.bone_width),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid(format!("{name} must be positive, got {value}")));
            }
        }
        if !self.movement.diagonal_factor.is_finite() || self.movement.diagonal_factor < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "movement.diagonal_factor must not be negative, got {}",
                self.movement.diagonal_factor
            )));
        }
        if self.screen.width == 0 || self.screen.height == 0 {
            return Err(ConfigError::Invalid("screen size must be positive".to_string()));
        }
        Ok(())
    }

    /// The frame rectangle at startup.
    pub fn initial_frame(&self) -> Frame {
        Frame::new(
            (f64::from(self.screen.width) - self.frame.width) / 2.0,
            self.frame.y,
            self.frame.width,
            self.frame.height,
        )
    }
}
