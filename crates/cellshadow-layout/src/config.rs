//! Serializable configuration for [`AutoLayoutShadow`](crate::AutoLayoutShadow).

use cellshadow_core::Axis;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Which correction pass a layout pass runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    /// One cell per row: snap each cell to the end of its predecessor.
    #[default]
    Linear,
    /// Several cells per row: reflow columns, then stack rows.
    Grid,
}

/// Settings the owning list pushes into the corrector before a layout pass.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadowConfig {
    /// Scroll along x instead of y
    pub horizontal: bool,
    /// Viewport size along the scroll axis
    pub window_size: i32,
    /// Extra margin rendered beyond each side of the viewport
    pub render_offset: i32,
    /// Current scroll position
    pub scroll_offset: i32,
    /// Distance from the scroll origin to the first cell (list header)
    pub offset_from_start: i32,
    /// Correction pass used by layout passes
    pub layout_mode: LayoutMode,
    /// Skip correction entirely
    pub disable_auto_layout: bool,
    /// Report blank area after every layout pass
    pub enable_instrumentation: bool,
}

impl ShadowConfig {
    /// Parse a config from TOML.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Parse a config from JSON.
    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Serialize to JSON.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string(self)?)
    }

    /// The scroll axis selected by `horizontal`.
    #[must_use]
    pub const fn axis(&self) -> Axis {
        Axis::from_horizontal(self.horizontal)
    }

    /// Reject negative sizes. The corrector accepts them as-is; hosts that
    /// want a guard call this before applying the config.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_size < 0 {
            return Err(ConfigError::NegativeWindowSize(self.window_size));
        }
        if self.render_offset < 0 {
            return Err(ConfigError::NegativeRenderOffset(self.render_offset));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = ShadowConfig::default();
        assert!(!config.horizontal);
        assert_eq!(config.window_size, 0);
        assert_eq!(config.layout_mode, LayoutMode::Linear);
        assert_eq!(config.axis(), Axis::Vertical);
    }

    #[test]
    fn test_config_from_toml() {
        let config = ShadowConfig::from_toml_str(
            r#"
            horizontal = true
            window_size = 500
            render_offset = 100
            layout_mode = "grid"
            "#,
        )
        .unwrap();
        assert!(config.horizontal);
        assert_eq!(config.window_size, 500);
        assert_eq!(config.render_offset, 100);
        assert_eq!(config.scroll_offset, 0);
        assert_eq!(config.layout_mode, LayoutMode::Grid);
        assert_eq!(config.axis(), Axis::Horizontal);
    }

    #[test]
    fn test_config_from_toml_invalid() {
        let err = ShadowConfig::from_toml_str("window_size = \"big\"").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn test_config_json_round_trip() {
        let config = ShadowConfig {
            window_size: 800,
            scroll_offset: 1200,
            offset_from_start: 40,
            enable_instrumentation: true,
            ..ShadowConfig::default()
        };
        let json = config.to_json_string().unwrap();
        assert!(json.contains("\"layout_mode\":\"linear\""));
        assert_eq!(ShadowConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_config_from_json_partial() {
        let config = ShadowConfig::from_json_str(r#"{"window_size": 300}"#).unwrap();
        assert_eq!(config.window_size, 300);
        assert!(!config.disable_auto_layout);
    }

    #[test]
    fn test_config_validate() {
        assert!(ShadowConfig::default().validate().is_ok());

        let negative_window = ShadowConfig {
            window_size: -1,
            ..ShadowConfig::default()
        };
        assert!(matches!(
            negative_window.validate(),
            Err(ConfigError::NegativeWindowSize(-1))
        ));

        let negative_offset = ShadowConfig {
            render_offset: -10,
            ..ShadowConfig::default()
        };
        assert!(matches!(
            negative_offset.validate(),
            Err(ConfigError::NegativeRenderOffset(-10))
        ));
    }
}
