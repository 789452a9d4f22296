//! Two-thumb multi-step range slider widget.
//!
//! Wraps a [`RangeEngine`] with a frame, a style and pointer handling. The
//! widget never draws; a host renderer reads the frames after each layout or
//! event.

use crate::config::SliderConfig;
use crate::engine::RangeEngine;
use crate::error::ConfigError;
use crate::format::abbreviate;
use crate::interval::Interval;
use crate::style::SliderStyle;
use crate::value::{RangeChanged, RangeValue, Thumb, TrackGeometry};
use multistep_core::{Event, MouseButton, Point, PointerId, Rect, TouchId};

/// Input stream that owns a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputSource {
    Mouse,
    Touch(TouchId),
    Pointer(PointerId),
}

/// A drag in progress and the last location its owner reported.
#[derive(Debug, Clone, Copy)]
struct ActiveDrag {
    source: InputSource,
    location: Point,
}

/// Range slider over a multi-step node list.
#[derive(Debug, Clone)]
pub struct MultiStepRangeSlider {
    engine: RangeEngine,
    style: SliderStyle,
    disabled: bool,
    /// Cached bounds
    bounds: Rect,
    /// Owner and last location of the current drag
    drag: Option<ActiveDrag>,
}

impl Default for MultiStepRangeSlider {
    fn default() -> Self {
        Self::new()
    }
}

impl MultiStepRangeSlider {
    /// Create an unconfigured slider with the default style.
    #[must_use]
    pub fn new() -> Self {
        let style = SliderStyle::default();
        Self {
            engine: RangeEngine::new().with_thumb_width(style.get_thumb_size().width),
            style,
            disabled: false,
            bounds: Rect::default(),
            drag: None,
        }
    }

    /// Build a slider from a configuration document.
    pub fn from_config(config: &SliderConfig) -> Result<Self, ConfigError> {
        let mut slider = Self::new().style(config.style.to_style()?);
        slider.configure(&config.intervals, config.pre_selected)?;
        Ok(slider)
    }

    /// Set the style.
    #[must_use]
    pub fn style(mut self, style: SliderStyle) -> Self {
        self.set_style(style);
        self
    }

    /// Set disabled state.
    #[must_use]
    pub const fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Replace the style, re-deriving the track from the current bounds.
    pub fn set_style(&mut self, style: SliderStyle) {
        self.style = style;
        self.engine.set_thumb_width(style.get_thumb_size().width);
        self.engine.set_track_geometry(self.track_geometry());
    }

    /// Enable or disable input. Disabling ends any drag.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled {
            self.cancel_drag();
        }
    }

    /// Load intervals and an optional preselected range.
    pub fn configure(
        &mut self,
        intervals: &[Interval],
        pre_selected: Option<RangeValue>,
    ) -> Result<Option<RangeChanged>, ConfigError> {
        let change = self
            .engine
            .configure(intervals, self.track_geometry(), pre_selected)?;
        self.drag = None;
        Ok(change)
    }

    /// Position the slider inside `bounds`.
    pub fn layout(&mut self, bounds: Rect) {
        self.bounds = bounds;
        self.engine.set_track_geometry(self.track_geometry());
    }

    fn track_geometry(&self) -> TrackGeometry {
        TrackGeometry::from_rect(&self.track_frame())
    }

    // =========================================================================
    // Frames
    // =========================================================================

    /// Track rectangle: inset by half a thumb on each side, vertically centered.
    #[must_use]
    pub fn track_frame(&self) -> Rect {
        let height = self.style.get_track_height();
        let inset = self.bounds.inset_x(self.engine.thumb_width() / 2.0);
        Rect::new(
            inset.x,
            self.bounds.y + (self.bounds.height - height) / 2.0,
            inset.width,
            height,
        )
    }

    /// Rectangle of `thumb`.
    #[must_use]
    pub fn thumb_frame(&self, thumb: Thumb) -> Rect {
        let center = Point::new(self.engine.thumb(thumb).center, self.bounds.mid_y());
        Rect::centered_at(center, self.style.get_thumb_size())
    }

    /// Rectangle of the lower thumb.
    #[must_use]
    pub fn lower_thumb_frame(&self) -> Rect {
        self.thumb_frame(Thumb::Lower)
    }

    /// Rectangle of the upper thumb.
    #[must_use]
    pub fn upper_thumb_frame(&self) -> Rect {
        self.thumb_frame(Thumb::Upper)
    }

    /// Highlighted track rectangle between the thumbs.
    #[must_use]
    pub fn highlighted_frame(&self) -> Rect {
        let track = self.track_frame();
        let span = self.engine.highlighted_span();
        Rect::new(span.origin, track.y, span.length.max(0.0), track.height)
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Handle a pointing event, returning the selection change if any.
    ///
    /// The mouse, touch or pointer that starts a drag owns it until it lifts;
    /// events from any other source are ignored meanwhile. Secondary pointers
    /// never start a drag.
    pub fn event(&mut self, event: &Event) -> Option<RangeChanged> {
        if self.disabled {
            return None;
        }

        match *event {
            Event::MouseDown {
                position,
                button: MouseButton::Left,
            } => self.press(InputSource::Mouse, position),
            Event::TouchStart { id, position } => self.press(InputSource::Touch(id), position),
            Event::PointerDown {
                pointer_id,
                position,
                is_primary: true,
                ..
            } => self.press(InputSource::Pointer(pointer_id), position),
            Event::MouseMove { position } => return self.drag_to(InputSource::Mouse, position),
            Event::TouchMove { id, position } => {
                return self.drag_to(InputSource::Touch(id), position)
            }
            Event::PointerMove {
                pointer_id,
                position,
            } => return self.drag_to(InputSource::Pointer(pointer_id), position),
            Event::MouseUp {
                button: MouseButton::Left,
                ..
            } => self.release(InputSource::Mouse),
            Event::TouchEnd { id, .. } | Event::TouchCancel { id } => {
                self.release(InputSource::Touch(id));
            }
            Event::PointerUp { pointer_id, .. } | Event::PointerCancel { pointer_id } => {
                self.release(InputSource::Pointer(pointer_id));
            }
            _ => {}
        }
        None
    }

    fn owns_drag(&self, source: InputSource) -> bool {
        self.drag.is_some_and(|drag| drag.source == source)
    }

    fn press(&mut self, source: InputSource, position: Point) {
        if self.drag.is_some() && !self.owns_drag(source) {
            return;
        }
        let on_thumb = [Thumb::Lower, Thumb::Upper]
            .into_iter()
            .any(|thumb| self.thumb_frame(thumb).contains_point(&position));
        if on_thumb && self.engine.begin_drag(position.x).is_some() {
            self.drag = Some(ActiveDrag {
                source,
                location: position,
            });
        } else {
            self.cancel_drag();
        }
    }

    fn drag_to(&mut self, source: InputSource, position: Point) -> Option<RangeChanged> {
        let drag = self.drag.as_mut().filter(|drag| drag.source == source)?;
        let delta = (position - drag.location).x;
        drag.location = position;
        self.engine.drag_active(delta)
    }

    fn release(&mut self, source: InputSource) {
        if self.owns_drag(source) {
            self.cancel_drag();
        }
    }

    fn cancel_drag(&mut self) {
        self.engine.end_drag();
        self.drag = None;
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Underlying engine.
    #[must_use]
    pub const fn engine(&self) -> &RangeEngine {
        &self.engine
    }

    /// Current style.
    #[must_use]
    pub const fn get_style(&self) -> &SliderStyle {
        &self.style
    }

    /// Check if disabled.
    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Cached bounds.
    #[must_use]
    pub const fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Node-snapped selection.
    #[must_use]
    pub const fn value(&self) -> RangeValue {
        self.engine.discrete_value()
    }

    /// Abbreviated labels for the lower and upper selection.
    #[must_use]
    pub fn labels(&self) -> (String, String) {
        let value = self.value();
        (abbreviate(value.lower), abbreviate(value.upper))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use multistep_core::{PointerId, PointerType, Size, TouchId};

    fn price_slider() -> MultiStepRangeSlider {
        let mut slider = MultiStepRangeSlider::new();
        slider.layout(Rect::new(0.0, 0.0, 200.0, 20.0));
        slider
            .configure(
                &[
                    Interval::new(50_000.0, 100_000.0, 10_000.0).unwrap(),
                    Interval::new(100_000.0, 1_000_000.0, 100_000.0).unwrap(),
                    Interval::new(1_000_000.0, 3_000_000.0, 500_000.0).unwrap(),
                ],
                None,
            )
            .unwrap();
        slider
    }

    fn mouse_down(x: f32, y: f32) -> Event {
        Event::MouseDown {
            position: Point::new(x, y),
            button: MouseButton::Left,
        }
    }

    fn mouse_move(x: f32, y: f32) -> Event {
        Event::MouseMove {
            position: Point::new(x, y),
        }
    }

    fn mouse_up(x: f32, y: f32) -> Event {
        Event::MouseUp {
            position: Point::new(x, y),
            button: MouseButton::Left,
        }
    }

    // =========================================================================
    // Layout Tests
    // =========================================================================

    #[test]
    fn test_track_frame_insets_half_thumb() {
        let slider = price_slider();
        assert_eq!(slider.track_frame(), Rect::new(5.0, 9.5, 190.0, 1.0));
        assert_eq!(slider.engine().geometry(), TrackGeometry::new(5.0, 190.0));
    }

    #[test]
    fn test_thumb_frames_follow_centers() {
        let slider = price_slider();
        assert_eq!(slider.lower_thumb_frame(), Rect::new(0.0, 5.0, 10.0, 10.0));
        assert_eq!(slider.upper_thumb_frame(), Rect::new(190.0, 5.0, 10.0, 10.0));
    }

    #[test]
    fn test_highlighted_frame_spans_thumbs() {
        let slider = price_slider();
        assert_eq!(slider.highlighted_frame(), Rect::new(0.0, 9.5, 190.0, 1.0));
    }

    #[test]
    fn test_relayout_moves_thumbs() {
        let mut slider = price_slider();
        slider.layout(Rect::new(10.0, 0.0, 110.0, 20.0));
        assert_eq!(slider.engine().geometry(), TrackGeometry::new(15.0, 100.0));
        assert_eq!(slider.engine().lower_center(), 15.0);
        assert_eq!(slider.engine().upper_center(), 115.0);
    }

    #[test]
    fn test_set_style_updates_thumb_width() {
        let mut slider = price_slider();
        slider.set_style(SliderStyle::new().thumb_size(Size::new(20.0, 20.0)));
        assert_eq!(slider.engine().thumb_width(), 20.0);
        assert_eq!(slider.engine().geometry(), TrackGeometry::new(10.0, 180.0));
    }

    #[test]
    fn test_configure_before_layout() {
        let mut slider = MultiStepRangeSlider::new();
        slider
            .configure(&[Interval::new(0.0, 90.0, 10.0).unwrap()], None)
            .unwrap();
        slider.layout(Rect::new(0.0, 0.0, 110.0, 10.0));
        // Ten nodes on a 100px track
        assert_eq!(slider.engine().lower_center(), 5.0);
        assert_eq!(slider.engine().upper_center(), 105.0);
    }

    // =========================================================================
    // Event Tests
    // =========================================================================

    #[test]
    fn test_mouse_drag_lower_thumb() {
        let mut slider = price_slider();
        assert_eq!(slider.event(&mouse_down(5.0, 10.0)), None);
        assert_eq!(slider.engine().active_thumb(), Some(Thumb::Lower));

        let change = slider.event(&mouse_move(45.0, 12.0)).unwrap();
        assert_eq!(change.discrete.lower, 90_000.0);
        assert_eq!(slider.engine().lower_center(), 45.0);

        slider.event(&mouse_up(45.0, 12.0));
        assert_eq!(slider.engine().active_thumb(), None);
        assert_eq!(slider.event(&mouse_move(80.0, 10.0)), None);
        assert_eq!(slider.labels(), ("90K".to_string(), "3M".to_string()));
    }

    #[test]
    fn test_mouse_down_outside_thumb_vertically() {
        let mut slider = price_slider();
        slider.event(&mouse_down(5.0, 30.0));
        assert_eq!(slider.engine().active_thumb(), None);
        assert_eq!(slider.event(&mouse_move(45.0, 30.0)), None);
    }

    #[test]
    fn test_right_button_ignored() {
        let mut slider = price_slider();
        slider.event(&Event::MouseDown {
            position: Point::new(5.0, 10.0),
            button: MouseButton::Right,
        });
        assert_eq!(slider.engine().active_thumb(), None);
    }

    #[test]
    fn test_touch_drag_upper_thumb() {
        let mut slider = price_slider();
        let id = TouchId(1);
        slider.event(&Event::TouchStart {
            id,
            position: Point::new(195.0, 10.0),
        });
        let change = slider
            .event(&Event::TouchMove {
                id,
                position: Point::new(155.0, 10.0),
            })
            .unwrap();
        assert_eq!(change.discrete.upper, 1_500_000.0);

        slider.event(&Event::TouchCancel { id });
        assert_eq!(slider.engine().active_thumb(), None);
    }

    #[test]
    fn test_foreign_touch_does_not_steer_drag() {
        let mut slider = price_slider();
        slider.event(&Event::TouchStart {
            id: TouchId(1),
            position: Point::new(5.0, 10.0),
        });

        let moved = slider.event(&Event::TouchMove {
            id: TouchId(2),
            position: Point::new(150.0, 10.0),
        });
        assert_eq!(moved, None);
        assert_eq!(slider.engine().lower_center(), 5.0);

        // A second finger landing off the thumbs or lifting leaves the drag alone
        slider.event(&Event::TouchStart {
            id: TouchId(2),
            position: Point::new(100.0, 10.0),
        });
        slider.event(&Event::TouchEnd {
            id: TouchId(2),
            position: Point::new(100.0, 10.0),
        });
        assert_eq!(slider.engine().active_thumb(), Some(Thumb::Lower));

        let change = slider
            .event(&Event::TouchMove {
                id: TouchId(1),
                position: Point::new(45.0, 10.0),
            })
            .unwrap();
        assert_eq!(change.discrete.lower, 90_000.0);

        slider.event(&Event::TouchEnd {
            id: TouchId(1),
            position: Point::new(45.0, 10.0),
        });
        assert_eq!(slider.engine().active_thumb(), None);
    }

    #[test]
    fn test_foreign_pointer_does_not_end_drag() {
        let mut slider = price_slider();
        slider.event(&Event::PointerDown {
            pointer_id: PointerId(1),
            pointer_type: PointerType::Pen,
            position: Point::new(195.0, 10.0),
            is_primary: true,
        });
        slider.event(&Event::PointerUp {
            pointer_id: PointerId(7),
            position: Point::new(0.0, 0.0),
        });
        slider.event(&Event::PointerCancel {
            pointer_id: PointerId(7),
        });
        assert_eq!(slider.engine().active_thumb(), Some(Thumb::Upper));

        // The mouse cannot take over either
        assert_eq!(slider.event(&mouse_move(100.0, 10.0)), None);
        slider.event(&mouse_up(100.0, 10.0));
        assert_eq!(slider.engine().upper_center(), 195.0);

        slider.event(&Event::PointerCancel {
            pointer_id: PointerId(1),
        });
        assert_eq!(slider.engine().active_thumb(), None);
    }

    #[test]
    fn test_secondary_pointer_ignored() {
        let mut slider = price_slider();
        slider.event(&Event::PointerDown {
            pointer_id: PointerId(2),
            pointer_type: PointerType::Touch,
            position: Point::new(5.0, 10.0),
            is_primary: false,
        });
        assert_eq!(slider.engine().active_thumb(), None);
    }

    #[test]
    fn test_disabled_ignores_events() {
        let mut slider = price_slider().disabled(true);
        slider.event(&mouse_down(5.0, 10.0));
        assert_eq!(slider.engine().active_thumb(), None);
        assert!(slider.is_disabled());
    }

    #[test]
    fn test_disabling_ends_drag() {
        let mut slider = price_slider();
        slider.event(&mouse_down(5.0, 10.0));
        slider.set_disabled(true);
        assert_eq!(slider.engine().active_thumb(), None);
    }

    #[test]
    fn test_from_config() {
        let config = SliderConfig::from_yaml(
            "intervals:\n  - { min: 0, max: 4000, step: 1000 }\npre_selected: { lower: 1000, upper: 3000 }\n",
        )
        .unwrap();
        let slider = MultiStepRangeSlider::from_config(&config).unwrap();
        assert_eq!(slider.value(), RangeValue::new(1_000.0, 3_000.0));
        assert_eq!(slider.labels(), ("1000".to_string(), "3K".to_string()));
    }
}
