//! Platform-agnostic input vocabulary.
//!
//! Hosts translate their windowing events into these types and feed them to
//! the controller's input callbacks. With the `winit` feature enabled the
//! pointer and touch types convert directly from winit's.

use serde::{Deserialize, Serialize};

/// Platform-agnostic pointer button identifier.
///
/// Pressing a button while the controller is idle starts the gesture it is
/// mapped to: `Primary` rotates, `Auxiliary` zooms, `Secondary` pans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Primary (left) button.
    Primary,
    /// Auxiliary (middle / wheel) button.
    Auxiliary,
    /// Secondary (right) button.
    Secondary,
}

#[cfg(feature = "winit")]
impl From<winit::event::MouseButton> for PointerButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Middle => Self::Auxiliary,
            winit::event::MouseButton::Right => Self::Secondary,
            _ => Self::Primary,
        }
    }
}

/// One active touch contact, in device pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    /// Horizontal position.
    pub x: f32,
    /// Vertical position.
    pub y: f32,
}

impl TouchPoint {
    /// Touch point from device-pixel coordinates.
    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Pixel distance to another contact.
    #[must_use]
    pub fn distance(&self, other: &Self) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Midpoint between two contacts, in device pixels.
    #[must_use]
    pub fn midpoint(&self, other: &Self) -> (f32, f32) {
        ((self.x + other.x) * 0.5, (self.y + other.y) * 0.5)
    }
}

#[cfg(feature = "winit")]
impl From<&winit::event::Touch> for TouchPoint {
    fn from(touch: &winit::event::Touch) -> Self {
        Self::new(touch.location.x as f32, touch.location.y as f32)
    }
}

/// Numeric key code, in the host's physical key numbering.
///
/// The controller compares codes against the configured trigger keys and
/// forwards every physical key-down to the host's key handler; it attaches
/// no meaning to any other code. The provided constants use the common
/// DOM-style numbering the defaults were chosen in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyCode(pub u32);

impl KeyCode {
    /// The `A` key, default rotate trigger.
    pub const A: Self = Self(65);
    /// The `S` key, default zoom trigger.
    pub const S: Self = Self(83);
    /// The `D` key, default pan trigger.
    pub const D: Self = Self(68);
}
