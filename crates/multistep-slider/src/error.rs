//! Error types for slider configuration.

use multistep_core::ColorParseError;
use thiserror::Error;

/// Errors that reject a slider configuration.
///
/// A rejected configuration never modifies the engine: the previously
/// configured nodes, thumbs and values stay in place.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An interval with a non-positive step or an empty span.
    #[error("invalid interval [{min}, {max}] step {step}: {reason}")]
    InvalidInterval {
        /// Interval lower bound
        min: f64,
        /// Interval upper bound
        max: f64,
        /// Interval step
        step: f64,
        /// Which rule was broken
        reason: &'static str,
    },

    /// The intervals generate more nodes than a track can address.
    #[error("intervals generate more than {limit} nodes")]
    TooManyNodes {
        /// Maximum node count
        limit: usize,
    },

    /// An interval produced a value below one already on the track.
    #[error("intervals are not ascending: {value} follows {previous}")]
    UnorderedIntervals {
        /// Offending node value
        value: f64,
        /// Largest node seen before it
        previous: f64,
    },

    /// A preselected bound that is not one of the generated nodes.
    #[error("preselected value {value} is not a node")]
    NotANode {
        /// The rejected value
        value: f64,
    },

    /// A preselected range whose lower bound exceeds its upper bound.
    #[error("preselected range is inverted: lower {lower} > upper {upper}")]
    InvertedRange {
        /// Requested lower bound
        lower: f64,
        /// Requested upper bound
        upper: f64,
    },

    /// YAML configuration document could not be parsed.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// JSON configuration document could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Style color could not be parsed.
    #[error("invalid color: {0}")]
    Color(#[from] ColorParseError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::NotANode { value: 500_000.0 };
        assert_eq!(err.to_string(), "preselected value 500000 is not a node");

        let err = ConfigError::InvalidInterval {
            min: 0.0,
            max: 10.0,
            step: 0.0,
            reason: "step must be positive",
        };
        assert_eq!(
            err.to_string(),
            "invalid interval [0, 10] step 0: step must be positive"
        );

        let err = ConfigError::UnorderedIntervals {
            value: 5.0,
            previous: 9.0,
        };
        assert_eq!(err.to_string(), "intervals are not ascending: 5 follows 9");
    }

    #[test]
    fn test_config_error_from_color() {
        let err: ConfigError = ColorParseError::InvalidHex.into();
        assert!(matches!(err, ConfigError::Color(_)));
        assert_eq!(err.to_string(), "invalid color: invalid hex characters");
    }
}
