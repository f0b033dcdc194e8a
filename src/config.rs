//! List Configuration
//!
//! Row geometry and drag feedback styling. Every field has a default; a page
//! can override any subset with a JSON block.

use leptos_dragdrop::PreviewStyle;
use serde::{de, Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::error::ConfigError;
use crate::source::read_element_text;

/// Id of the `<script type="application/json">` element holding overrides
pub const CONFIG_ELEMENT_ID: &str = "draggable-list-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(remote = "Self", default, deny_unknown_fields)]
pub struct ReorderConfig {
    pub row_width_px: u32,
    pub row_height_px: u32,
    pub row_padding: String,
    pub thumbnail_px: u32,
    /// Bottom border of the row under the pointer
    pub highlight_border: String,
    /// Opacity of the dragged row's secondary line
    pub dragging_opacity: f32,
    pub location_icon: String,
    pub preview: PreviewStyle,
}

impl Default for ReorderConfig {
    fn default() -> Self {
        Self {
            row_width_px: 568,
            row_height_px: 136,
            row_padding: "20px 40px".to_string(),
            thumbnail_px: 96,
            highlight_border: "3px solid #1E9BF0".to_string(),
            dragging_opacity: 0.5,
            location_icon: "images/loc.svg".to_string(),
            preview: PreviewStyle::default(),
        }
    }
}

impl<'de> Deserialize<'de> for ReorderConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Objects only; the derived impl also fills fields from an array by position
        let fields = Map::<String, Value>::deserialize(deserializer)?;
        ReorderConfig::deserialize(Value::Object(fields)).map_err(de::Error::custom)
    }
}

impl ReorderConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Page overrides if present and valid, defaults otherwise
    pub fn load() -> Self {
        match read_element_text(CONFIG_ELEMENT_ID) {
            None => Self::default(),
            Some(raw) => Self::from_json(&raw).unwrap_or_else(|e| {
                log::warn!("[CONFIG] {}, using defaults", e);
                Self::default()
            }),
        }
    }

    /// Inline style of a row
    pub fn row_style(&self, is_drop_target: bool) -> String {
        let border_bottom = if is_drop_target { self.highlight_border.as_str() } else { "none" };
        format!(
            "width: {}px; height: {}px; padding: {}; border-left: 0; border-right: 0; border-bottom: {};",
            self.row_width_px, self.row_height_px, self.row_padding, border_bottom
        )
    }

    /// Inline style of a row's secondary line
    pub fn secondary_style(&self, is_dragging: bool) -> String {
        if is_dragging {
            format!("opacity: {};", self.dragging_opacity)
        } else {
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override() {
        let config = ReorderConfig::from_json(r#"{"highlight_border": "2px dashed red", "preview": {"width_px": 240}}"#).unwrap();
        assert_eq!(config.highlight_border, "2px dashed red");
        assert_eq!(config.preview.width_px, 240);
        assert_eq!(config.preview.font_size_px, 17);
        assert_eq!(config.row_width_px, 568);
        assert_eq!(config.dragging_opacity, 0.5);
    }

    #[test]
    fn test_invalid_config() {
        assert!(ReorderConfig::from_json("{\"row_width\": 10}").is_err());
        assert!(ReorderConfig::from_json("[1, 2]").is_err());
    }

    #[test]
    fn test_array_config_falls_back() {
        assert!(ReorderConfig::from_json("[1, 2]").is_err());
        assert!(ReorderConfig::from_json(r#"{"preview": [320, "black"]}"#).is_err());
        assert_eq!(ReorderConfig::from_json("{}").unwrap(), ReorderConfig::default());
    }

    #[test]
    fn test_row_style_highlight() {
        let config = ReorderConfig::default();
        assert!(config.row_style(true).contains("border-bottom: 3px solid #1E9BF0;"));
        assert!(config.row_style(false).contains("border-bottom: none;"));
        assert!(config.row_style(false).starts_with("width: 568px; height: 136px;"));
    }

    #[test]
    fn test_secondary_style_dims_dragged_row() {
        let config = ReorderConfig::default();
        assert_eq!(config.secondary_style(true), "opacity: 0.5;");
        assert_eq!(config.secondary_style(false), "");
    }
}
