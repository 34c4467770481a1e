//! The trackball controller: construction, the per-frame update cycle, and
//! lifecycle (resize, reset, handler installation).
//!
//! Input callbacks live in the sibling `input` module, gesture integration
//! in `motion`. Everything runs on the host's single event/render thread;
//! callbacks and updates are never expected to interleave.

mod events;
mod input;
mod motion;

pub use events::{ControlEvent, EventHandler, KeyHandler};

use glam::Vec3;

use crate::camera::CameraPose;
use crate::input::state::{GestureSamples, Mode};
use crate::input::KeyCode;
use crate::options::ControlOptions;
use crate::screen::Viewport;

/// Squared-distance threshold below which the camera counts as static and
/// no change notification is emitted.
const POSITION_EPS: f32 = 1e-6;

/// The `(target, position, up)` triple captured at construction, restored
/// by [`TrackballController::reset`].
#[derive(Debug, Clone, Copy)]
struct RigSnapshot {
    target: Vec3,
    position: Vec3,
    up: Vec3,
}

/// Interactive trackball camera controller.
///
/// Owns the look-at target and all gesture state; the camera pose itself
/// stays with the host and is borrowed mutably for each [`update`](Self::update)
/// and [`reset`](Self::reset).
///
/// # Frame loop
///
/// Forward raw input through the input callbacks
/// ([`pointer_down`](Self::pointer_down) and friends) as the host event
/// loop delivers it, then call [`update`](Self::update) once per rendered
/// frame. Listen for [`ControlEvent::Change`] to schedule re-renders only
/// when the camera actually moved.
pub struct TrackballController {
    /// Hard input gate: when `false` every input callback no-ops
    /// immediately. The per-frame update is not gated.
    pub enabled: bool,
    /// Behavior options, read fresh on every callback and update.
    pub options: ControlOptions,
    /// Current look-at point. Mutated by the pan gesture.
    pub target: Vec3,

    viewport: Viewport,
    mode: Mode,
    prev_mode: Mode,
    /// Set while a physical key is held; suppresses auto-repeat re-entry.
    key_engaged: bool,
    samples: GestureSamples,
    /// Intra-update scratch: `position - target` at cycle start, reconciled
    /// back into the position at cycle end.
    eye: Vec3,
    last_axis: Vec3,
    last_angle: f32,
    last_position: Vec3,
    snapshot: RigSnapshot,
    on_event: Option<EventHandler>,
    on_key: Option<KeyHandler>,
}

impl TrackballController {
    /// Controller for a host-owned camera looking at `target`.
    ///
    /// Captures the reset snapshot from the pose as given, then runs one
    /// update so pose, target, and the distance clamp start out consistent.
    #[must_use]
    pub fn new(
        camera: &mut CameraPose,
        target: Vec3,
        viewport: Viewport,
        options: ControlOptions,
    ) -> Self {
        let snapshot = RigSnapshot {
            target,
            position: camera.position,
            up: camera.up,
        };
        let mut controller = Self {
            enabled: true,
            options,
            target,
            viewport,
            mode: Mode::Idle,
            prev_mode: Mode::Idle,
            key_engaged: false,
            samples: GestureSamples::default(),
            eye: camera.position - target,
            last_axis: Vec3::ZERO,
            last_angle: 0.0,
            last_position: Vec3::ZERO,
            snapshot,
            on_event: None,
            on_key: None,
        };
        controller.update(camera);
        controller
    }

    /// Current interaction mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Current viewport geometry.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Install the notification handler receiving
    /// [`ControlEvent`] values as gestures start, end, and move the camera.
    pub fn set_event_handler(&mut self, handler: impl FnMut(ControlEvent) + 'static) {
        self.on_event = Some(Box::new(handler));
    }

    /// Install the raw key-down handler.
    ///
    /// Called with the numeric code of every physical key press (held-key
    /// repeats suppressed), whatever the controller does with it. This is
    /// the seam for scene-scripted reactions; the controller itself only
    /// interprets the configured trigger keys.
    pub fn set_key_handler(&mut self, handler: impl FnMut(KeyCode) + 'static) {
        self.on_key = Some(Box::new(handler));
    }

    /// Replace the cached viewport geometry after the tracked element moved
    /// or resized.
    ///
    /// Stale geometry between a host resize and this call only skews the
    /// next few gesture mappings; it is never an error.
    pub fn handle_resize(&mut self, viewport: Viewport) {
        if viewport.width <= 0.0 || viewport.height <= 0.0 {
            log::warn!(
                "viewport resized to degenerate bounds {}x{}",
                viewport.width,
                viewport.height
            );
        }
        self.viewport = viewport;
    }

    /// Integrate pending gesture samples into the camera pose.
    ///
    /// Call once per rendered frame. Fixed step order: rotate, then zoom,
    /// then pan, each skipped when disabled; then the position is
    /// reconciled from target and eye, the distance clamp applied, and a
    /// [`ControlEvent::Change`] emitted if the position moved more than an
    /// epsilon since the last cycle.
    pub fn update(&mut self, camera: &mut CameraPose) {
        self.eye = camera.position - self.target;

        if !self.options.no_rotate {
            self.rotate_camera(camera);
        }
        if !self.options.no_zoom {
            self.zoom_camera();
        }
        if !self.options.no_pan {
            self.pan_camera(camera);
        }

        camera.position = self.target + self.eye;

        self.check_distances(camera);

        if camera.position.distance_squared(self.last_position) > POSITION_EPS {
            self.emit(ControlEvent::Change);
            self.last_position = camera.position;
        }
    }

    /// Restore the construction-time rig and force the controller idle.
    ///
    /// Unconditionally emits [`ControlEvent::Change`].
    pub fn reset(&mut self, camera: &mut CameraPose) {
        self.mode = Mode::Idle;
        self.prev_mode = Mode::Idle;

        self.target = self.snapshot.target;
        camera.position = self.snapshot.position;
        camera.up = self.snapshot.up;
        self.eye = camera.position - self.target;

        log::debug!("controller reset to construction snapshot");
        self.emit(ControlEvent::Change);
        self.last_position = camera.position;
    }

    fn emit(&mut self, event: ControlEvent) {
        if let Some(handler) = self.on_event.as_mut() {
            handler(event);
        }
    }

    fn dispatch_key(&mut self, code: KeyCode) {
        if let Some(handler) = self.on_key.as_mut() {
            handler(code);
        }
    }
}
