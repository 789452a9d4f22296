//! Core types shared by the multistep slider crates.
//!
//! This crate provides the primitives the slider engine and its widget
//! adapter exchange with a host UI:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`]
//! - Color representation: [`Color`]
//! - Pointing input: [`Event`]

mod color;
mod event;
mod geometry;

pub use color::{Color, ColorParseError};
pub use event::{Event, MouseButton, PointerId, PointerType, TouchId};
pub use geometry::{Point, Rect, Size};

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // GEOMETRY TESTS
    // ==========================================================================

    mod geometry_tests {
        use super::*;
        use proptest::prelude::*;

        #[test]
        fn test_rect_contains_point() {
            let r = Rect::new(10.0, 10.0, 100.0, 100.0);
            assert!(r.contains_point(&Point::new(50.0, 50.0)));
            assert!(r.contains_point(&Point::new(10.0, 10.0))); // Edge inclusive
            assert!(!r.contains_point(&Point::new(5.0, 50.0)));
            assert!(!r.contains_point(&Point::new(111.0, 50.0)));
        }

        #[test]
        fn test_size_default_is_zero() {
            assert_eq!(Size::default(), Size::ZERO);
            assert_eq!(Rect::default().size(), Size::ZERO);
        }

        proptest! {
            #[test]
            fn prop_centered_rect_contains_center(x in -1000i16..1000, y in -1000i16..1000, w in 0u16..500, h in 0u16..500) {
                let center = Point::new(f32::from(x), f32::from(y));
                let r = Rect::centered_at(center, Size::new(f32::from(w), f32::from(h)));
                prop_assert!(r.contains_point(&center));
                prop_assert_eq!(r.mid_x(), center.x);
            }

            #[test]
            fn prop_inset_x_keeps_mid(x in -1000.0f32..1000.0, w in 0.0f32..1000.0, amount in 0.0f32..100.0) {
                let r = Rect::new(x, 0.0, w, 10.0);
                let inset = r.inset_x(amount);
                prop_assert!(inset.width >= 0.0);
                if w >= amount * 2.0 {
                    prop_assert!((inset.mid_x() - r.mid_x()).abs() < 0.01);
                }
            }
        }
    }

    // ==========================================================================
    // EVENT TESTS
    // ==========================================================================

    mod event_tests {
        use super::*;

        #[test]
        fn test_event_mouse_button() {
            let e = Event::MouseDown {
                position: Point::new(50.0, 50.0),
                button: MouseButton::Left,
            };
            if let Event::MouseDown { button, .. } = e {
                assert_eq!(button, MouseButton::Left);
            } else {
                panic!("Expected MouseDown event");
            }
        }

        #[test]
        fn test_event_pointer_down() {
            let e = Event::PointerDown {
                pointer_id: PointerId(3),
                pointer_type: PointerType::Touch,
                position: Point::new(1.0, 2.0),
                is_primary: true,
            };
            assert_eq!(e.position(), Some(Point::new(1.0, 2.0)));
        }
    }
}
