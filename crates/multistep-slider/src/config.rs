//! Slider configuration documents.
//!
//! A slider can be described in YAML (or JSON) instead of code:
//!
//! ```yaml
//! intervals:
//!   - { min: 50000, max: 100000, step: 10000 }
//!   - { min: 100000, max: 1000000, step: 100000 }
//! pre_selected: { lower: 80000, upper: 200000 }
//! style:
//!   thumb_width: 28
//!   track_highlight_tint: "#007aff"
//! ```

use crate::error::ConfigError;
use crate::interval::{Interval, IntervalSet};
use crate::style::SliderStyle;
use crate::value::RangeValue;
use multistep_core::{Color, Size};
use serde::{Deserialize, Serialize};

/// Slider configuration loaded from a document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderConfig {
    /// Step intervals in track order
    pub intervals: Vec<Interval>,
    /// Initial selection; the full range when absent
    #[serde(default)]
    pub pre_selected: Option<RangeValue>,
    /// Visual style
    #[serde(default)]
    pub style: StyleConfig,
}

impl SliderConfig {
    /// Parse a YAML document.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    /// Parse a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Intervals as a set.
    #[must_use]
    pub fn interval_set(&self) -> IntervalSet {
        IntervalSet::from(self.intervals.as_slice())
    }
}

/// Style section of a configuration document.
///
/// Colors are hex strings (`"#rrggbb"` or `"#rrggbbaa"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Track height
    pub track_height: f32,
    /// Thumb width, also the minimum thumb separation
    pub thumb_width: f32,
    /// Thumb height
    pub thumb_height: f32,
    /// Track color outside the selection
    pub track_tint: String,
    /// Track color between the thumbs
    pub track_highlight_tint: String,
    /// Thumb color
    pub thumb_tint: String,
    /// Track end curvature [0.0, 1.0]
    pub track_curvaceousness: f32,
    /// Thumb curvature [0.0, 1.0]
    pub thumb_curvaceousness: f32,
    /// Draw thumb shadows
    pub shadow_enabled: bool,
}

impl Default for StyleConfig {
    fn default() -> Self {
        let style = SliderStyle::default();
        Self {
            track_height: style.get_track_height(),
            thumb_width: style.get_thumb_size().width,
            thumb_height: style.get_thumb_size().height,
            track_tint: style.get_track_tint().to_hex(),
            track_highlight_tint: style.get_track_highlight_tint().to_hex(),
            thumb_tint: style.get_thumb_tint().to_hex(),
            track_curvaceousness: 1.0,
            thumb_curvaceousness: 1.0,
            shadow_enabled: true,
        }
    }
}

impl StyleConfig {
    /// Resolve colors and build the style.
    pub fn to_style(&self) -> Result<SliderStyle, ConfigError> {
        Ok(SliderStyle::new()
            .track_height(self.track_height)
            .thumb_size(Size::new(self.thumb_width, self.thumb_height))
            .track_tint(Color::from_hex(&self.track_tint)?)
            .track_highlight_tint(Color::from_hex(&self.track_highlight_tint)?)
            .thumb_tint(Color::from_hex(&self.thumb_tint)?)
            .track_curvaceousness(self.track_curvaceousness)
            .thumb_curvaceousness(self.thumb_curvaceousness)
            .shadow_enabled(self.shadow_enabled))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRICE_YAML: &str = r##"
intervals:
  - { min: 50000, max: 100000, step: 10000 }
  - { min: 100000, max: 1000000, step: 100000 }
  - { min: 1000000, max: 3000000, step: 500000 }
pre_selected: { lower: 80000, upper: 200000 }
style:
  thumb_width: 28
  thumb_height: 28
  track_highlight_tint: "#ff0000"
  shadow_enabled: false
"##;

    #[test]
    fn test_config_from_yaml() {
        let config = SliderConfig::from_yaml(PRICE_YAML).unwrap();
        assert_eq!(config.intervals.len(), 3);
        assert_eq!(config.intervals[1].step(), 100_000.0);
        assert_eq!(
            config.pre_selected,
            Some(RangeValue::new(80_000.0, 200_000.0))
        );
        assert_eq!(config.style.thumb_width, 28.0);
        // Unspecified style fields fall back to defaults
        assert_eq!(config.style.track_height, 1.0);
        assert_eq!(config.style.thumb_tint, "#ffffff");
    }

    #[test]
    fn test_config_from_json() {
        let config = SliderConfig::from_json(
            r#"{"intervals":[{"min":0,"max":10,"step":1}],"style":{"thumb_width":4}}"#,
        )
        .unwrap();
        assert_eq!(config.pre_selected, None);
        assert_eq!(config.interval_set().build_nodes().unwrap().len(), 11);
        assert_eq!(config.style.thumb_width, 4.0);
    }

    #[test]
    fn test_config_missing_intervals() {
        let err = SliderConfig::from_yaml("style: {}\n").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
        let err = SliderConfig::from_json("{}").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_style_config_to_style() {
        let config = SliderConfig::from_yaml(PRICE_YAML).unwrap();
        let style = config.style.to_style().unwrap();
        assert_eq!(style.get_thumb_size(), Size::new(28.0, 28.0));
        assert_eq!(style.get_track_highlight_tint(), Color::rgb(1.0, 0.0, 0.0));
        assert!(style.shadow().is_none());
    }

    #[test]
    fn test_style_config_bad_color() {
        let style = StyleConfig {
            thumb_tint: "#12345".to_string(),
            ..StyleConfig::default()
        };
        assert!(matches!(style.to_style(), Err(ConfigError::Color(_))));
    }

    #[test]
    fn test_style_config_default_round_trips_to_default_style() {
        let style = StyleConfig::default().to_style().unwrap();
        let default = SliderStyle::default();
        assert_eq!(style.get_thumb_size(), default.get_thumb_size());
        assert_eq!(style.get_thumb_tint(), default.get_thumb_tint());
        assert_eq!(
            style.get_track_highlight_tint().to_hex(),
            default.get_track_highlight_tint().to_hex()
        );
    }
}
