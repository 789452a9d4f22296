//! Visual configuration of a range slider.
//!
//! None of this affects value mapping except the thumb width, which sets the
//! minimum separation between thumbs and the half-thumb inset of the track.

use crate::engine::DEFAULT_THUMB_WIDTH;
use multistep_core::{Color, Size};
use serde::{Deserialize, Serialize};

/// Drop shadow drawn under each thumb.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThumbShadow {
    /// Shadow color
    pub color: Color,
    /// Offset from the thumb
    pub offset: Size,
    /// Opacity [0.0, 1.0]
    pub opacity: f32,
    /// Blur radius
    pub radius: f32,
}

impl Default for ThumbShadow {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            offset: Size::new(0.0, 2.0),
            opacity: 0.3,
            radius: 2.0,
        }
    }
}

/// Colors, sizes and corner curvature of a range slider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderStyle {
    track_height: f32,
    track_tint: Color,
    track_highlight_tint: Color,
    thumb_tint: Color,
    thumb_size: Size,
    track_curvaceousness: f32,
    thumb_curvaceousness: f32,
    shadow_enabled: bool,
}

impl Default for SliderStyle {
    fn default() -> Self {
        Self::new()
    }
}

impl SliderStyle {
    /// Create the default style.
    #[must_use]
    pub fn new() -> Self {
        Self {
            track_height: 1.0,
            track_tint: Color::white(0.9, 1.0),
            track_highlight_tint: Color::rgb(0.0, 122.0 / 255.0, 1.0),
            thumb_tint: Color::WHITE,
            thumb_size: Size::new(DEFAULT_THUMB_WIDTH, DEFAULT_THUMB_WIDTH),
            track_curvaceousness: 1.0,
            thumb_curvaceousness: 1.0,
            shadow_enabled: true,
        }
    }

    /// Set track height.
    #[must_use]
    pub fn track_height(mut self, height: f32) -> Self {
        self.track_height = height.max(0.0);
        self
    }

    /// Set color of the track outside the selection.
    #[must_use]
    pub const fn track_tint(mut self, color: Color) -> Self {
        self.track_tint = color;
        self
    }

    /// Set color of the track between the thumbs.
    #[must_use]
    pub const fn track_highlight_tint(mut self, color: Color) -> Self {
        self.track_highlight_tint = color;
        self
    }

    /// Set thumb color.
    #[must_use]
    pub const fn thumb_tint(mut self, color: Color) -> Self {
        self.thumb_tint = color;
        self
    }

    /// Set thumb size.
    #[must_use]
    pub fn thumb_size(mut self, size: Size) -> Self {
        self.thumb_size = Size::new(size.width.max(0.0), size.height.max(0.0));
        self
    }

    /// Set track end curvature, clamped to [0.0, 1.0].
    #[must_use]
    pub fn track_curvaceousness(mut self, curvaceousness: f32) -> Self {
        self.track_curvaceousness = curvaceousness.clamp(0.0, 1.0);
        self
    }

    /// Set thumb curvature, clamped to [0.0, 1.0].
    #[must_use]
    pub fn thumb_curvaceousness(mut self, curvaceousness: f32) -> Self {
        self.thumb_curvaceousness = curvaceousness.clamp(0.0, 1.0);
        self
    }

    /// Enable or disable thumb shadows.
    #[must_use]
    pub const fn shadow_enabled(mut self, enabled: bool) -> Self {
        self.shadow_enabled = enabled;
        self
    }

    /// Get track height.
    #[must_use]
    pub const fn get_track_height(&self) -> f32 {
        self.track_height
    }

    /// Get track color.
    #[must_use]
    pub const fn get_track_tint(&self) -> Color {
        self.track_tint
    }

    /// Get highlight color.
    #[must_use]
    pub const fn get_track_highlight_tint(&self) -> Color {
        self.track_highlight_tint
    }

    /// Get thumb color.
    #[must_use]
    pub const fn get_thumb_tint(&self) -> Color {
        self.thumb_tint
    }

    /// Get thumb size.
    #[must_use]
    pub const fn get_thumb_size(&self) -> Size {
        self.thumb_size
    }

    /// Corner radius of the track.
    #[must_use]
    pub fn track_corner_radius(&self) -> f32 {
        self.track_height * self.track_curvaceousness / 2.0
    }

    /// Corner radius of a thumb.
    #[must_use]
    pub fn thumb_corner_radius(&self) -> f32 {
        self.thumb_size.height * self.thumb_curvaceousness / 2.0
    }

    /// Overlay drawn on a thumb while it is dragged.
    #[must_use]
    pub fn thumb_highlight_overlay(&self) -> Color {
        Color::BLACK.with_alpha(0.1)
    }

    /// Thumb shadow, if enabled.
    #[must_use]
    pub fn shadow(&self) -> Option<ThumbShadow> {
        self.shadow_enabled.then(ThumbShadow::default)
    }
}
