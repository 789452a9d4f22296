//! Range engine: position/value conversion and thumb dragging.
//!
//! The engine owns the node list, both thumbs and both selections. It never
//! draws and never reads input devices; a rendering layer reads
//! [`RangeEngine::lower_center`], [`RangeEngine::upper_center`] and
//! [`RangeEngine::highlighted_span`] after each mutation, and an input layer
//! feeds it pixel deltas.
//!
//! # Track mapping
//!
//! The track is split into one equal segment per node. The first node sits on
//! the left edge, the last node on the right edge, and every interior node on
//! the center of its segment. Reading a pixel back floors it into a segment;
//! the right edge itself is inclusive and reads as the last node.
//!
//! ```
//! use multistep_slider::{Interval, RangeEngine, Thumb, TrackGeometry};
//!
//! let intervals = [Interval::new(0.0, 40.0, 10.0).unwrap()];
//! let mut engine = RangeEngine::new().with_thumb_width(10.0);
//! engine
//!     .configure(&intervals, TrackGeometry::new(0.0, 100.0), None)
//!     .unwrap();
//!
//! // Five nodes, 20px segments: node 10 sits at the center of segment 1
//! assert_eq!(engine.position_for_node(10.0), Some(30.0));
//!
//! let change = engine.apply_drag(Thumb::Lower, 30.0);
//! assert_eq!(change.discrete.lower, 10.0);
//! ```

use crate::config::SliderConfig;
use crate::error::ConfigError;
use crate::interval::{build_nodes, Interval, IntervalSet, NodeList};
use crate::value::{HighlightedSpan, RangeChanged, RangeValue, Thumb, ThumbState, TrackGeometry};
use tracing::{debug, trace, warn};

/// Default thumb width in pixels.
pub const DEFAULT_THUMB_WIDTH: f32 = 10.0;

/// Where a pixel falls on the segmented track.
#[derive(Debug, Clone, Copy)]
struct SegmentHit {
    index: usize,
    width: f32,
    offset: f32,
}

/// Value-mapping engine behind a two-thumb multi-step slider.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeEngine {
    intervals: IntervalSet,
    nodes: NodeList,
    geometry: TrackGeometry,
    thumb_width: f32,
    lower: ThumbState,
    upper: ThumbState,
    discrete: RangeValue,
    continuous: RangeValue,
    highlighted_span: HighlightedSpan,
}

impl Default for RangeEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RangeEngine {
    /// Create an unconfigured engine.
    #[must_use]
    pub fn new() -> Self {
        Self {
            intervals: IntervalSet::default(),
            nodes: NodeList::default(),
            geometry: TrackGeometry::default(),
            thumb_width: DEFAULT_THUMB_WIDTH,
            lower: ThumbState::default(),
            upper: ThumbState::default(),
            discrete: RangeValue::default(),
            continuous: RangeValue::default(),
            highlighted_span: HighlightedSpan::default(),
        }
    }

    /// Set the thumb width used as the minimum separation between thumbs.
    #[must_use]
    pub fn with_thumb_width(mut self, width: f32) -> Self {
        self.set_thumb_width(width);
        self
    }

    /// Build and configure an engine from a configuration document.
    pub fn from_config(config: &SliderConfig, geometry: TrackGeometry) -> Result<Self, ConfigError> {
        let mut engine = Self::new().with_thumb_width(config.style.thumb_width);
        engine.configure(&config.intervals, geometry, config.pre_selected)?;
        Ok(engine)
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Rebuild the node list and place both thumbs.
    ///
    /// Without a preselected range the whole track is selected. An empty
    /// interval list clears the node list but leaves thumbs and values where
    /// they were, and returns `Ok(None)`. Any error leaves the engine exactly
    /// as it was.
    #[tracing::instrument(level = "debug", skip(self, intervals), fields(intervals = intervals.len()))]
    pub fn configure(
        &mut self,
        intervals: &[Interval],
        geometry: TrackGeometry,
        pre_selected: Option<RangeValue>,
    ) -> Result<Option<RangeChanged>, ConfigError> {
        let nodes = build_nodes(intervals).map_err(|err| {
            warn!(%err, "rejected slider intervals");
            err
        })?;

        let (Some(first), Some(last)) = (nodes.first(), nodes.last()) else {
            debug!("no nodes; thumbs left in place");
            self.intervals = IntervalSet::from(intervals);
            self.nodes = nodes;
            return Ok(None);
        };

        let discrete = match pre_selected {
            Some(range) => {
                Self::validate_range(&nodes, range).map_err(|err| {
                    warn!(%err, "rejected preselected range");
                    err
                })?;
                range
            }
            None => RangeValue::new(first, last),
        };

        self.intervals = IntervalSet::from(intervals);
        self.nodes = nodes;
        self.geometry = geometry;
        self.discrete = discrete;
        self.continuous = discrete;
        self.lower.highlighted = false;
        self.upper.highlighted = false;
        self.place_thumbs();
        self.update_highlighted_span();

        debug!(
            nodes = self.nodes.len(),
            lower = discrete.lower,
            upper = discrete.upper,
            "slider configured"
        );
        Ok(Some(self.change()))
    }

    fn validate_range(nodes: &NodeList, range: RangeValue) -> Result<(), ConfigError> {
        for value in [range.lower, range.upper] {
            if !nodes.contains(value) {
                return Err(ConfigError::NotANode { value });
            }
        }
        if range.lower > range.upper {
            return Err(ConfigError::InvertedRange {
                lower: range.lower,
                upper: range.upper,
            });
        }
        Ok(())
    }

    /// Move the track frame, re-deriving both thumb centers.
    ///
    /// Returns `false` when the geometry is unchanged.
    pub fn set_track_geometry(&mut self, geometry: TrackGeometry) -> bool {
        if geometry == self.geometry {
            return false;
        }
        self.geometry = geometry;
        self.place_thumbs();
        self.update_highlighted_span();
        debug!(min_x = geometry.min_x, width = geometry.width, "track geometry changed");
        true
    }

    /// Change the thumb width. Negative widths are treated as zero.
    pub fn set_thumb_width(&mut self, width: f32) {
        self.thumb_width = if width.is_finite() { width.max(0.0) } else { 0.0 };
        self.update_highlighted_span();
    }

    /// Derive thumb centers from the discrete selection.
    fn place_thumbs(&mut self) {
        self.lower.center = match self.position_for_node(self.discrete.lower) {
            Some(x) => x,
            None => self.geometry.min_x,
        };

        // A single node is both first and last; the upper thumb keeps the
        // right edge.
        self.upper.center = if self.nodes.last() == Some(self.discrete.upper) {
            self.geometry.max_x()
        } else {
            match self.position_for_node(self.discrete.upper) {
                Some(x) => x,
                None => self.geometry.max_x(),
            }
        };
    }

    // =========================================================================
    // Position / value conversion
    // =========================================================================

    fn segment_width(&self) -> Option<f32> {
        if self.nodes.is_empty() || self.geometry.is_degenerate() {
            return None;
        }
        Some(self.geometry.width / self.nodes.len() as f32)
    }

    fn locate(&self, pixel: f32) -> Option<SegmentHit> {
        let width = self.segment_width()?;
        if !(self.geometry.min_x..=self.geometry.max_x()).contains(&pixel) {
            return None;
        }
        let offset = pixel - self.geometry.min_x;
        // The right edge belongs to the last segment.
        let index = (offset / width)
            .floor()
            .min((self.nodes.len() - 1) as f32);
        Some(SegmentHit {
            index: index as usize,
            width,
            offset: index.mul_add(-width, offset),
        })
    }

    fn is_right_edge(&self, pixel: f32) -> bool {
        self.segment_width().is_some() && pixel == self.geometry.max_x()
    }

    /// Pixel center for a node, `None` if `value` is not a node.
    #[must_use]
    pub fn position_for_node(&self, value: f64) -> Option<f32> {
        let width = self.segment_width()?;
        let index = self.nodes.index_of(value)?;

        if index == 0 {
            Some(self.geometry.min_x)
        } else if index == self.nodes.len() - 1 {
            Some(self.geometry.max_x())
        } else {
            Some(width.mul_add(index as f32, self.geometry.min_x) + width / 2.0)
        }
    }

    /// Node whose segment contains `pixel`.
    #[must_use]
    pub fn node_for_position(&self, pixel: f32) -> Option<f64> {
        let hit = self.locate(pixel)?;
        self.nodes.get(hit.index)
    }

    /// Value interpolated between the node of `pixel`'s segment and the next.
    ///
    /// `None` inside the last segment (there is no next node) and outside the
    /// track; the right edge itself reads as the last node.
    #[must_use]
    pub fn value_for_position(&self, pixel: f32) -> Option<f64> {
        if self.is_right_edge(pixel) {
            return self.nodes.last();
        }
        let hit = self.locate(pixel)?;
        let from = self.nodes.get(hit.index)?;
        let to = self.nodes.get(hit.index + 1)?;
        let fraction = f64::from(hit.offset / hit.width);
        Some(fraction.mul_add(to - from, from))
    }

    // =========================================================================
    // Dragging
    // =========================================================================

    /// Start a drag at `pixel`, returning the thumb under it.
    ///
    /// The lower thumb wins when both overlap. Any previous drag ends first.
    pub fn begin_drag(&mut self, pixel: f32) -> Option<Thumb> {
        self.end_drag();
        let hit = [Thumb::Lower, Thumb::Upper]
            .into_iter()
            .find(|&thumb| (pixel - self.thumb(thumb).center).abs() <= self.thumb_width / 2.0);
        if let Some(thumb) = hit {
            self.thumb_mut(thumb).highlighted = true;
            trace!(?thumb, pixel, "drag began");
        }
        hit
    }

    /// Move `thumb` by `delta` pixels, bounded by the track and the other thumb.
    pub fn apply_drag(&mut self, thumb: Thumb, delta: f32) -> RangeChanged {
        let (low, high) = match thumb {
            Thumb::Lower => (self.geometry.min_x, self.upper.center - self.thumb_width),
            Thumb::Upper => (self.lower.center + self.thumb_width, self.geometry.max_x()),
        };
        // Not `f32::clamp`: the bounds invert when the thumbs are closer than
        // one thumb width, and the upper bound must win.
        let center = (self.thumb(thumb).center + delta).max(low).min(high);
        self.thumb_mut(thumb).center = center;

        if let Some(node) = self.node_for_position(center) {
            self.discrete.set(thumb, node);
        }
        if let Some(value) = self.value_for_position(center) {
            self.continuous.set(thumb, value);
        }
        self.order_continuous(thumb);
        self.update_highlighted_span();

        trace!(?thumb, delta, center, "drag applied");
        self.change()
    }

    /// Restore `continuous.lower <= continuous.upper` after `moved` changed.
    ///
    /// A thumb in the last segment has no interpolated value and keeps its old
    /// one, which the moved thumb can overtake. The other thumb is then read
    /// again from its center, or takes its discrete node when that misses too;
    /// if the pair is still inverted the moved thumb takes the other's value.
    fn order_continuous(&mut self, moved: Thumb) {
        if self.continuous.lower <= self.continuous.upper {
            return;
        }
        let other = moved.other();
        let reread = self
            .value_for_position(self.thumb(other).center)
            .unwrap_or_else(|| self.discrete.get(other));
        self.continuous.set(other, reread);
        if self.continuous.lower > self.continuous.upper {
            self.continuous.set(moved, reread);
        }
        trace!(?other, reread, "continuous selection reordered");
    }

    /// Apply `delta` to whichever thumb is being dragged.
    pub fn drag_active(&mut self, delta: f32) -> Option<RangeChanged> {
        let thumb = self.active_thumb()?;
        Some(self.apply_drag(thumb, delta))
    }

    /// Return both thumbs to idle.
    pub fn end_drag(&mut self) {
        self.lower.highlighted = false;
        self.upper.highlighted = false;
    }

    fn update_highlighted_span(&mut self) {
        self.highlighted_span = HighlightedSpan {
            origin: self.lower.center - self.thumb_width / 2.0,
            length: self.upper.center - self.lower.center,
        };
    }

    fn change(&self) -> RangeChanged {
        RangeChanged {
            discrete: self.discrete,
            continuous: self.continuous,
        }
    }

    fn thumb_mut(&mut self, thumb: Thumb) -> &mut ThumbState {
        match thumb {
            Thumb::Lower => &mut self.lower,
            Thumb::Upper => &mut self.upper,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// State of `thumb`.
    #[must_use]
    pub const fn thumb(&self, thumb: Thumb) -> ThumbState {
        match thumb {
            Thumb::Lower => self.lower,
            Thumb::Upper => self.upper,
        }
    }

    /// Center of the lower thumb.
    #[must_use]
    pub const fn lower_center(&self) -> f32 {
        self.lower.center
    }

    /// Center of the upper thumb.
    #[must_use]
    pub const fn upper_center(&self) -> f32 {
        self.upper.center
    }

    /// Thumb currently being dragged.
    #[must_use]
    pub const fn active_thumb(&self) -> Option<Thumb> {
        if self.lower.highlighted {
            Some(Thumb::Lower)
        } else if self.upper.highlighted {
            Some(Thumb::Upper)
        } else {
            None
        }
    }

    /// Whether `thumb` is being dragged.
    #[must_use]
    pub const fn is_highlighted(&self, thumb: Thumb) -> bool {
        self.thumb(thumb).highlighted
    }

    /// Span of track between the thumbs.
    #[must_use]
    pub const fn highlighted_span(&self) -> HighlightedSpan {
        self.highlighted_span
    }

    /// Node-snapped selection.
    #[must_use]
    pub const fn discrete_value(&self) -> RangeValue {
        self.discrete
    }

    /// Interpolated selection.
    #[must_use]
    pub const fn continuous_value(&self) -> RangeValue {
        self.continuous
    }

    /// Current node list.
    #[must_use]
    pub const fn nodes(&self) -> &NodeList {
        &self.nodes
    }

    /// Intervals of the last accepted configuration.
    #[must_use]
    pub const fn intervals(&self) -> &IntervalSet {
        &self.intervals
    }

    /// Current track frame.
    #[must_use]
    pub const fn geometry(&self) -> TrackGeometry {
        self.geometry
    }

    /// Thumb width used for separation and hit testing.
    #[must_use]
    pub const fn thumb_width(&self) -> f32 {
        self.thumb_width
    }
}
