//! Step intervals and the node list they flatten into.
//!
//! A track is described by a sequence of [`Interval`]s, each with its own
//! granularity. [`build_nodes`] turns them into the [`NodeList`]: every
//! selectable value on the track, strictly increasing, without duplicates.
//!
//! # Closing rule
//!
//! An interval produces `min + i * step` for `i = 0, 1, ...` and includes a
//! value iff it is `<= max`, compared exactly. Values are derived from the
//! index rather than accumulated, so long intervals do not drift.
//!
//! ```
//! use multistep_slider::{build_nodes, Interval};
//!
//! let intervals = [
//!     Interval::new(0.0, 10.0, 5.0).unwrap(),
//!     Interval::new(10.0, 100.0, 45.0).unwrap(),
//! ];
//! let nodes = build_nodes(&intervals).unwrap();
//! assert_eq!(nodes.as_slice(), &[0.0, 5.0, 10.0, 55.0, 100.0]);
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Upper bound on the number of nodes a track may hold.
pub const MAX_NODES: usize = 1_000_000;

/// A `[min, max]` sub-range of the track with its own step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    min: f64,
    max: f64,
    step: f64,
}

impl Interval {
    /// Create a validated interval.
    pub fn new(min: f64, max: f64, step: f64) -> Result<Self, ConfigError> {
        let interval = Self { min, max, step };
        interval.validate()?;
        Ok(interval)
    }

    /// Lower bound (always a node).
    #[must_use]
    pub const fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound (a node only when the step lands on it).
    #[must_use]
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// Distance between consecutive nodes.
    #[must_use]
    pub const fn step(&self) -> f64 {
        self.step
    }

    /// Check the interval invariants.
    ///
    /// Deserialized intervals bypass [`Interval::new`], so node generation
    /// validates again.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let reason = if !(self.min.is_finite() && self.max.is_finite() && self.step.is_finite()) {
            Some("bounds and step must be finite")
        } else if self.step <= 0.0 {
            Some("step must be positive")
        } else if self.min >= self.max {
            Some("min must be below max")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(ConfigError::InvalidInterval {
                min: self.min,
                max: self.max,
                step: self.step,
                reason,
            }),
            None => Ok(()),
        }
    }

    /// Generate this interval's nodes in ascending order.
    pub fn nodes(&self) -> Result<Vec<f64>, ConfigError> {
        self.validate()?;

        let span = ((self.max - self.min) / self.step).floor();
        if span >= MAX_NODES as f64 {
            return Err(ConfigError::TooManyNodes { limit: MAX_NODES });
        }

        // One index past the estimate: the division can round below an
        // index whose product still lands on `max`.
        let last_index = span as u32 + 1;
        Ok((0..=last_index)
            .map(|i| f64::from(i).mul_add(self.step, self.min))
            .take_while(|value| *value <= self.max)
            .collect())
    }
}

/// Ordered, de-duplicated node values of a track.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NodeList {
    nodes: Vec<f64>,
}

impl NodeList {
    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the track has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Smallest node.
    #[must_use]
    pub fn first(&self) -> Option<f64> {
        self.nodes.first().copied()
    }

    /// Largest node.
    #[must_use]
    pub fn last(&self) -> Option<f64> {
        self.nodes.last().copied()
    }

    /// Node at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.nodes.get(index).copied()
    }

    /// Index of the node exactly equal to `value`.
    #[must_use]
    pub fn index_of(&self, value: f64) -> Option<usize> {
        self.nodes
            .binary_search_by(|node| node.partial_cmp(&value).unwrap_or(Ordering::Less))
            .ok()
    }

    /// Whether `value` is one of the nodes.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        self.index_of(value).is_some()
    }

    /// Nodes as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.nodes
    }

    /// Iterate over the nodes in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.nodes.iter().copied()
    }

    fn push_unique(&mut self, value: f64) -> Result<(), ConfigError> {
        match self.last() {
            Some(previous) if value <= previous => {
                if self.contains(value) {
                    Ok(())
                } else {
                    Err(ConfigError::UnorderedIntervals { value, previous })
                }
            }
            _ => {
                if self.nodes.len() >= MAX_NODES {
                    return Err(ConfigError::TooManyNodes { limit: MAX_NODES });
                }
                self.nodes.push(value);
                Ok(())
            }
        }
    }
}

/// Flatten intervals into the canonical node list.
///
/// Nodes keep the order their intervals were supplied in; a value seen
/// before (typically a shared boundary like `100_000` ending one interval
/// and starting the next) is dropped. A new value that would land below
/// the current maximum means the intervals overlap or are out of order,
/// and is rejected instead of being silently reordered.
pub fn build_nodes(intervals: &[Interval]) -> Result<NodeList, ConfigError> {
    let mut list = NodeList::default();
    for interval in intervals {
        for value in interval.nodes()? {
            list.push_unique(value)?;
        }
    }
    Ok(list)
}

/// The interval configuration of a track.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IntervalSet {
    intervals: Vec<Interval>,
}

impl IntervalSet {
    /// Create from intervals in track order.
    #[must_use]
    pub const fn new(intervals: Vec<Interval>) -> Self {
        Self { intervals }
    }

    /// Intervals in track order.
    #[must_use]
    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// Build the node list for these intervals.
    pub fn build_nodes(&self) -> Result<NodeList, ConfigError> {
        build_nodes(&self.intervals)
    }
}

impl From<Vec<Interval>> for IntervalSet {
    fn from(intervals: Vec<Interval>) -> Self {
        Self::new(intervals)
    }
}

impl From<&[Interval]> for IntervalSet {
    fn from(intervals: &[Interval]) -> Self {
        Self::new(intervals.to_vec())
    }
}
