//! Multi-step range slider engine for retained-mode UI hosts.
//!
//! A multi-step track concatenates intervals of different granularity, such
//! as prices stepping by 10K up to 100K and by 100K after that. This crate
//! quantizes those intervals into a node list and maps between pixels and
//! values for a two-thumb range selection:
//! - [`build_nodes`] and [`IntervalSet`]: interval quantization
//! - [`RangeEngine`]: position/value conversion and dragging
//! - [`MultiStepRangeSlider`]: frames and pointer handling around the engine
//! - [`SliderConfig`]: YAML/JSON configuration documents

pub mod config;
pub mod engine;
pub mod error;
pub mod format;
pub mod interval;
pub mod range_slider;
pub mod style;
pub mod value;

pub use config::{SliderConfig, StyleConfig};
pub use engine::{RangeEngine, DEFAULT_THUMB_WIDTH};
pub use error::ConfigError;
pub use format::abbreviate;
pub use interval::{build_nodes, Interval, IntervalSet, NodeList, MAX_NODES};
pub use range_slider::MultiStepRangeSlider;
pub use style::{SliderStyle, ThumbShadow};
pub use value::{HighlightedSpan, RangeChanged, RangeValue, Thumb, ThumbState, TrackGeometry};
