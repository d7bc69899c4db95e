// ABOUTME: Editor configuration handling.
// ABOUTME: Loads and saves settings from TOML config files.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::GridLimits;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Spacing in pixels between panels and rows at render time
    pub gutter_width: f32,

    /// Page background fill behind the gutters
    pub page_background: String,

    /// Default page dimensions in pixels
    pub page_width: u32,
    pub page_height: u32,

    /// Structural caps applied to every grid
    pub limits: GridLimits,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            gutter_width: 8.0,
            page_background: "#ffffff".to_string(),
            page_width: 800,
            page_height: 1200,
            limits: GridLimits::default(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

impl EditorConfig {
    /// Get the default config file path (~/.config/inkgrid/config.toml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("inkgrid").join("config.toml"))
    }

    /// Load config from a path
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load config from default path, or return default config if not found
    pub fn load_or_default() -> Self {
        Self::default_path()
            .and_then(|path| Self::load(&path).ok())
            .unwrap_or_default()
    }

    /// Save config to a path
    pub fn save(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        // Create parent directories if needed
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_roundtrip() {
        let mut config = EditorConfig::default();
        config.gutter_width = 12.0;
        config.limits.max_rows = 4;

        let temp_path = std::env::temp_dir().join("inkgrid_test_config.toml");
        config.save(&temp_path).unwrap();
        let loaded = EditorConfig::load(&temp_path).unwrap();
        assert_eq!(loaded, config);

        let _ = std::fs::remove_file(&temp_path);
    }

    #[test]
    fn test_default_limits() {
        let config = EditorConfig::default();
        assert_eq!(config.limits.max_rows, 8);
        assert_eq!(config.limits.max_panels_per_row, 6);
        assert_eq!(config.limits.max_depth, 4);
        assert_eq!(config.limits.max_children, 6);
    }
}
