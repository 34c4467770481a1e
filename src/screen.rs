//! Device-pixel to gesture-space mapping.
//!
//! Gestures are measured in two normalized coordinate spaces derived from
//! the tracked element's bounding rectangle: a `[0, 1]²` screen-fraction
//! space for pan and zoom deltas, and a circular `[-1, 1]` space centered
//! on the element for rotation direction.

use glam::Vec2;

/// Cached viewport geometry, in device pixels.
///
/// Mirrors the tracked element's bounding rectangle (or the whole window).
/// The controller replaces its copy wholesale through
/// [`handle_resize`](crate::controller::TrackballController::handle_resize);
/// the mapping functions are pure. A zero-sized viewport is a host
/// precondition violation: resize before the first mapped event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Left edge of the tracked element.
    pub left: f32,
    /// Top edge of the tracked element.
    pub top: f32,
    /// Element width.
    pub width: f32,
    /// Element height.
    pub height: f32,
}

impl Viewport {
    /// Viewport from an explicit element rectangle.
    #[must_use]
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Whole-window viewport with the origin at the top-left corner.
    #[must_use]
    pub fn from_size(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Map a pointer position to screen-fraction space: `[0, 1]` across the
    /// element on both axes. Used by the pan and zoom gestures.
    #[must_use]
    pub fn pointer_on_screen(&self, x: f32, y: f32) -> Vec2 {
        Vec2::new((x - self.left) / self.width, (y - self.top) / self.height)
    }

    /// Map a pointer position to the circular rotation space: `[-1, 1]`
    /// horizontally, centered on the element, y increasing upward.
    ///
    /// The vertical axis is normalized by the element *width* so that
    /// horizontal and vertical drags of the same pixel length produce the
    /// same angular speed at any aspect ratio.
    #[must_use]
    pub fn pointer_on_circle(&self, x: f32, y: f32) -> Vec2 {
        Vec2::new(
            (x - self.width * 0.5 - self.left) / (self.width * 0.5),
            (self.height + 2.0 * (self.top - y)) / self.width,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_fraction_spans_unit_square() {
        let viewport = Viewport::from_size(800.0, 600.0);
        assert_eq!(viewport.pointer_on_screen(0.0, 0.0), Vec2::new(0.0, 0.0));
        assert_eq!(
            viewport.pointer_on_screen(800.0, 600.0),
            Vec2::new(1.0, 1.0)
        );
        assert_eq!(
            viewport.pointer_on_screen(400.0, 300.0),
            Vec2::new(0.5, 0.5)
        );
    }

    #[test]
    fn screen_fraction_honors_element_offset() {
        let viewport = Viewport::new(100.0, 50.0, 200.0, 100.0);
        assert_eq!(viewport.pointer_on_screen(100.0, 50.0), Vec2::new(0.0, 0.0));
        assert_eq!(
            viewport.pointer_on_screen(300.0, 150.0),
            Vec2::new(1.0, 1.0)
        );
    }

    #[test]
    fn circle_center_maps_to_origin() {
        let viewport = Viewport::from_size(800.0, 600.0);
        assert_eq!(viewport.pointer_on_circle(400.0, 300.0), Vec2::new(0.0, 0.0));
    }

    #[test]
    fn circle_x_spans_minus_one_to_one() {
        let viewport = Viewport::from_size(800.0, 600.0);
        assert_eq!(viewport.pointer_on_circle(0.0, 300.0).x, -1.0);
        assert_eq!(viewport.pointer_on_circle(800.0, 300.0).x, 1.0);
    }

    #[test]
    fn circle_y_is_width_normalized() {
        // A vertical drag from center to top edge covers height/2 pixels,
        // which reads as (height/2) / (width/2) = h/w in circle units.
        let viewport = Viewport::from_size(800.0, 600.0);
        let top = viewport.pointer_on_circle(400.0, 0.0);
        assert!((top.y - 600.0 / 800.0).abs() < 1e-6);
        let bottom = viewport.pointer_on_circle(400.0, 600.0);
        assert!((bottom.y + 600.0 / 800.0).abs() < 1e-6);
    }

    #[test]
    fn circle_honors_element_offset() {
        let viewport = Viewport::new(100.0, 50.0, 200.0, 100.0);
        // Element center is at (200, 100).
        assert_eq!(viewport.pointer_on_circle(200.0, 100.0), Vec2::new(0.0, 0.0));
    }
}
