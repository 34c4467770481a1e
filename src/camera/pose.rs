use glam::{Mat4, Vec3};

/// Host-owned camera pose: world-space position plus up vector.
///
/// The controller borrows a pose mutably for each update and mutates it in
/// place; together with the controller's target the pose fully determines
/// the camera orientation. The up vector is rotated alongside the eye
/// vector during orbiting and is never explicitly renormalized (quaternion
/// application preserves its length to within floating-point error).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// Camera position in world space.
    pub position: Vec3,
    /// Up direction vector.
    pub up: Vec3,
}

impl CameraPose {
    /// Pose at `position` with `+Y` up.
    #[must_use]
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            up: Vec3::Y,
        }
    }

    /// Pose with an explicit up vector.
    #[must_use]
    pub fn with_up(position: Vec3, up: Vec3) -> Self {
        Self { position, up }
    }

    /// Build the right-handed view matrix looking at `target`.
    ///
    /// This is where the look-at orientation is realized: the controller
    /// keeps position, up, and target consistent, and the host folds this
    /// matrix into its projection pipeline.
    #[must_use]
    pub fn view_matrix(&self, target: Vec3) -> Mat4 {
        Mat4::look_at_rh(self.position, target, self.up)
    }
}
