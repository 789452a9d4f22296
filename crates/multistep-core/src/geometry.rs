//! Geometric primitives: Point, Size, Rect.

use serde::{Deserialize, Serialize};
use std::ops::Sub;

/// A 2D point with x and y coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate
    pub x: f32,
    /// Y coordinate
    pub y: f32,
}

impl Point {
    /// Origin point (0, 0)
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::ORIGIN
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// A 2D size with width and height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Size {
    /// Zero size
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Create a new size.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::ZERO
    }
}

/// A rectangle defined by position and size.
///
/// Slider code works mostly along the horizontal axis, so the accessors
/// mirror the `min_x`/`mid_x`/`max_x` vocabulary used by the engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// X position of top-left corner
    pub x: f32,
    /// Y position of top-left corner
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle of `size` centered on `center`.
    #[must_use]
    pub fn centered_at(center: Point, size: Size) -> Self {
        Self::new(
            center.x - size.width / 2.0,
            center.y - size.height / 2.0,
            size.width,
            size.height,
        )
    }

    /// Get the size.
    #[must_use]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Left edge.
    #[must_use]
    pub const fn min_x(&self) -> f32 {
        self.x
    }

    /// Horizontal center.
    #[must_use]
    pub fn mid_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Right edge.
    #[must_use]
    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    /// Vertical center.
    #[must_use]
    pub fn mid_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Check if a point is inside the rectangle (inclusive).
    #[must_use]
    pub fn contains_point(&self, point: &Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    /// Shrink horizontally by `amount` on each side, keeping the vertical extent.
    ///
    /// The width never goes negative.
    #[must_use]
    pub fn inset_x(&self, amount: f32) -> Self {
        Self::new(
            self.x + amount,
            self.y,
            2.0f32.mul_add(-amount, self.width).max(0.0),
            self.height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_sub() {
        let diff = Point::new(5.0, 7.0) - Point::new(2.0, 3.0);
        assert_eq!(diff, Point::new(3.0, 4.0));
    }

    #[test]
    fn test_rect_horizontal_edges() {
        let r = Rect::new(10.0, 0.0, 100.0, 20.0);
        assert_eq!(r.min_x(), 10.0);
        assert_eq!(r.mid_x(), 60.0);
        assert_eq!(r.max_x(), 110.0);
        assert_eq!(r.mid_y(), 10.0);
    }

    #[test]
    fn test_rect_centered_at() {
        let r = Rect::centered_at(Point::new(50.0, 20.0), Size::new(10.0, 8.0));
        assert_eq!(r, Rect::new(45.0, 16.0, 10.0, 8.0));
        assert_eq!(r.mid_x(), 50.0);
    }

    #[test]
    fn test_rect_inset_x_clamps_width() {
        let r = Rect::new(0.0, 5.0, 10.0, 4.0);
        assert_eq!(r.inset_x(2.0), Rect::new(2.0, 5.0, 6.0, 4.0));
        assert_eq!(r.inset_x(20.0).width, 0.0);
    }
}
