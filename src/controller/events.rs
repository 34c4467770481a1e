//! Outbound notification vocabulary.

use crate::input::KeyCode;

/// Notifications pushed to the host as the controller reacts to input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlEvent {
    /// A gesture began: pointer press, touch start, or a wheel tick.
    Start,
    /// A gesture ended: pointer/touch release, or a wheel tick.
    End,
    /// The camera pose visibly moved since the previous update cycle.
    Change,
}

/// Host callback receiving [`ControlEvent`] notifications.
pub type EventHandler = Box<dyn FnMut(ControlEvent)>;

/// Host callback receiving the raw code of every physical key-down.
///
/// The seam for scene-scripted reactions (prop animation, audio, canned
/// camera jumps): the controller forwards codes verbatim and attaches no
/// meaning beyond its own trigger keys.
pub type KeyHandler = Box<dyn FnMut(KeyCode)>;
