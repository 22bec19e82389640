//! Application configuration: JSON file plus environment overrides

use std::path::Path;

use painting::{EdgeFalloff, ModelVariant, SessionOptions, DEFAULT_UNDO_DEPTH};
use serde::{Deserialize, Serialize};

/// Errors while loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid value {value:?} for {key}")]
    InvalidEnv { key: &'static str, value: String },
}

/// Startup settings for a painting session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub variant: ModelVariant,
    pub undo_depth: usize,
    /// Initial brush radius
    pub brush_radius: u32,
    pub edge: EdgeFalloff,
    /// Initial state of limb mirroring
    pub mirror: bool,
    pub part_scoped_fill: bool,
    pub include_overlay_parts: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            variant: ModelVariant::Standard,
            undo_depth: DEFAULT_UNDO_DEPTH,
            brush_radius: 0,
            edge: EdgeFalloff::Hard,
            mirror: false,
            part_scoped_fill: true,
            include_overlay_parts: true,
        }
    }
}

impl AppConfig {
    /// Load from an optional JSON file, then apply environment overrides
    /// (SKINBOX_VARIANT, SKINBOX_UNDO_DEPTH).
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
            None => Self::default(),
        };
        config.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from a key lookup
    pub fn with_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(value) = lookup("SKINBOX_VARIANT") {
            self.variant = match value.to_ascii_lowercase().as_str() {
                "standard" | "classic" => ModelVariant::Standard,
                "slim" => ModelVariant::Slim,
                _ => {
                    return Err(ConfigError::InvalidEnv {
                        key: "SKINBOX_VARIANT",
                        value,
                    });
                }
            };
        }
        if let Some(value) = lookup("SKINBOX_UNDO_DEPTH") {
            self.undo_depth = value.parse().map_err(|_| ConfigError::InvalidEnv {
                key: "SKINBOX_UNDO_DEPTH",
                value,
            })?;
        }
        Ok(self)
    }

    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            variant: self.variant,
            undo_depth: self.undo_depth,
            falloff: self.edge,
            part_scoped_fill: self.part_scoped_fill,
            include_overlays: self.include_overlay_parts,
        }
    }
}
