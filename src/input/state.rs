//! Interaction modes and gesture sample storage.

use glam::Vec2;

/// The controller's current interaction mode.
///
/// Exactly one mode is active at any instant. Each mode re-seeds its own
/// gesture samples on entry, so the samples of an inactive mode are stale
/// and never read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// No gesture in progress.
    #[default]
    Idle,
    /// Pointer-driven orbit around the target.
    Rotate,
    /// Pointer-driven dolly along the view direction.
    Zoom,
    /// Pointer-driven pan of the whole rig.
    Pan,
    /// Single-finger orbit.
    TouchRotate,
    /// Two-finger combined pan and pinch zoom.
    TouchPanZoom,
}

/// Gesture sample pairs for every interaction mode.
///
/// Rotate tracks a previous/current pair in circular space; zoom and pan
/// track an anchor/latest pair in screen-fraction space; the two-finger
/// mode additionally tracks the inter-finger pixel distance pair. Only the
/// active mode's samples are live.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct GestureSamples {
    pub move_prev: Vec2,
    pub move_curr: Vec2,
    pub zoom_start: Vec2,
    pub zoom_end: Vec2,
    pub pan_start: Vec2,
    pub pan_end: Vec2,
    pub pinch_start: f32,
    pub pinch_end: f32,
}

impl GestureSamples {
    /// Seed the rotate pair at a fresh gesture position.
    pub fn seed_rotate(&mut self, point: Vec2) {
        self.move_curr = point;
        self.move_prev = point;
    }

    /// Advance the rotate pair by one sample.
    pub fn track_rotate(&mut self, point: Vec2) {
        self.move_prev = self.move_curr;
        self.move_curr = point;
    }

    /// Seed the zoom pair at a fresh gesture position.
    pub fn seed_zoom(&mut self, point: Vec2) {
        self.zoom_start = point;
        self.zoom_end = point;
    }

    /// Seed the pan pair at a fresh gesture position.
    pub fn seed_pan(&mut self, point: Vec2) {
        self.pan_start = point;
        self.pan_end = point;
    }

    /// Seed both pinch distances at a fresh two-finger gesture.
    pub fn seed_pinch(&mut self, distance: f32) {
        self.pinch_start = distance;
        self.pinch_end = distance;
    }
}
