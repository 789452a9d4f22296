//! Selection values, thumb state and track geometry.

use multistep_core::Rect;
use serde::{Deserialize, Serialize};

/// A lower/upper pair of values.
///
/// Used both for the discrete selection (always two nodes) and the continuous
/// selection (interpolated between nodes).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RangeValue {
    /// Lower bound
    pub lower: f64,
    /// Upper bound
    pub upper: f64,
}

impl RangeValue {
    /// Create a new range value.
    #[must_use]
    pub const fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// Bound belonging to `thumb`.
    #[must_use]
    pub const fn get(&self, thumb: Thumb) -> f64 {
        match thumb {
            Thumb::Lower => self.lower,
            Thumb::Upper => self.upper,
        }
    }

    pub(crate) fn set(&mut self, thumb: Thumb, value: f64) {
        match thumb {
            Thumb::Lower => self.lower = value,
            Thumb::Upper => self.upper = value,
        }
    }
}

/// One of the two draggable handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Thumb {
    /// Handle marking the lower end of the selection
    Lower,
    /// Handle marking the upper end of the selection
    Upper,
}

impl Thumb {
    /// The opposite thumb.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Lower => Self::Upper,
            Self::Upper => Self::Lower,
        }
    }
}

/// Pixel center and drag state of a thumb.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ThumbState {
    /// Horizontal center in track coordinates
    pub center: f32,
    /// True while the thumb is being dragged
    pub highlighted: bool,
}

/// Horizontal frame of the interactive track.
///
/// Excludes the half-thumb margins on either side of the control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackGeometry {
    /// Left edge of the track
    pub min_x: f32,
    /// Track width
    pub width: f32,
}

impl TrackGeometry {
    /// Create a new track geometry.
    #[must_use]
    pub const fn new(min_x: f32, width: f32) -> Self {
        Self { min_x, width }
    }

    /// Horizontal extent of a track frame.
    #[must_use]
    pub const fn from_rect(rect: &Rect) -> Self {
        Self::new(rect.x, rect.width)
    }

    /// Right edge of the track.
    #[must_use]
    pub fn max_x(&self) -> f32 {
        self.min_x + self.width
    }

    /// Whether positions can be mapped onto this track at all.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        !(self.min_x.is_finite() && self.width.is_finite() && self.width > 0.0)
    }
}

/// The highlighted part of the track between the two thumbs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HighlightedSpan {
    /// Left edge of the highlight
    pub origin: f32,
    /// Highlight length
    pub length: f32,
}

/// Message emitted when the selection changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeChanged {
    /// Node-snapped selection
    pub discrete: RangeValue,
    /// Interpolated selection
    pub continuous: RangeValue,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_value_get_set() {
        let mut range = RangeValue::new(1.0, 2.0);
        assert_eq!(range.get(Thumb::Lower), 1.0);
        assert_eq!(range.get(Thumb::Upper), 2.0);

        range.set(Thumb::Upper, 5.0);
        assert_eq!(range, RangeValue::new(1.0, 5.0));
    }

    #[test]
    fn test_thumb_other() {
        assert_eq!(Thumb::Lower.other(), Thumb::Upper);
        assert_eq!(Thumb::Upper.other(), Thumb::Lower);
    }

    #[test]
    fn test_track_geometry_edges() {
        let track = TrackGeometry::from_rect(&Rect::new(5.0, 10.0, 200.0, 2.0));
        assert_eq!(track.min_x, 5.0);
        assert_eq!(track.max_x(), 205.0);
        assert!(!track.is_degenerate());
    }

    #[test]
    fn test_track_geometry_degenerate() {
        assert!(TrackGeometry::new(0.0, 0.0).is_degenerate());
        assert!(TrackGeometry::new(0.0, -10.0).is_degenerate());
        assert!(TrackGeometry::new(0.0, f32::NAN).is_degenerate());
        assert!(TrackGeometry::new(f32::INFINITY, 10.0).is_degenerate());
        assert!(TrackGeometry::default().is_degenerate());
    }
}
