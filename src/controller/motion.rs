//! Gesture integration: the orbit, dolly, and pan steps plus distance
//! clamping, run in fixed order by the per-frame update.

use glam::Quat;

use super::TrackballController;
use crate::camera::CameraPose;
use crate::input::state::Mode;

impl TrackballController {
    /// Orbit step: rotate the eye and up vectors about the axis implied by
    /// the latest gesture movement, or coast on the remembered axis while
    /// inertial damping is active.
    pub(super) fn rotate_camera(&mut self, camera: &mut CameraPose) {
        let movement = self.samples.move_curr - self.samples.move_prev;
        let mut angle = movement.length();

        if angle > 0.0 {
            // Blend the gesture into a world-space direction: vertical drag
            // along the camera's up, horizontal along its sideways axis.
            let eye_direction = self.eye.normalize();
            let up_direction = camera.up.normalize();
            let sideways_direction = up_direction.cross(eye_direction).normalize();

            let move_direction =
                up_direction * movement.y + sideways_direction * movement.x;
            let axis = move_direction.cross(self.eye).normalize();

            angle *= self.options.rotate_speed;
            let rotation = Quat::from_axis_angle(axis, angle);

            self.eye = rotation * self.eye;
            camera.up = rotation * camera.up;

            self.last_axis = axis;
            self.last_angle = angle;
        } else if !self.options.static_moving && self.last_angle != 0.0 {
            // No new movement: decay the remembered rotation toward zero.
            self.last_angle *= (1.0 - self.options.dynamic_damping_factor).sqrt();
            let rotation = Quat::from_axis_angle(self.last_axis, self.last_angle);
            self.eye = rotation * self.eye;
            camera.up = rotation * camera.up;
        }

        self.samples.move_prev = self.samples.move_curr;
    }

    /// Dolly step: scale the eye vector by the gesture's zoom factor.
    ///
    /// Pinch zoom ratchets (each frame consumes the distance change, no
    /// easing); pointer zoom eases its anchor toward the latest sample
    /// unless `static_moving` snaps it.
    pub(super) fn zoom_camera(&mut self) {
        if self.mode == Mode::TouchPanZoom {
            let factor = self.samples.pinch_start / self.samples.pinch_end;
            self.samples.pinch_start = self.samples.pinch_end;
            self.eye *= factor;
        } else {
            let factor = 1.0
                + (self.samples.zoom_end.y - self.samples.zoom_start.y)
                    * self.options.zoom_speed;

            // A collapsed or inverted eye vector is unrecoverable; only
            // strictly positive non-unity factors are applied.
            if factor != 1.0 && factor > 0.0 {
                self.eye *= factor;

                if self.options.static_moving {
                    self.samples.zoom_start = self.samples.zoom_end;
                } else {
                    self.samples.zoom_start.y += (self.samples.zoom_end.y
                        - self.samples.zoom_start.y)
                        * self.options.dynamic_damping_factor;
                }
            }
        }
    }

    /// Pan step: translate the whole rig (camera position and target
    /// together) perpendicular to the view direction.
    pub(super) fn pan_camera(&mut self, camera: &mut CameraPose) {
        let mouse_change = self.samples.pan_end - self.samples.pan_start;

        if mouse_change.length_squared() > 0.0 {
            let mouse_change =
                mouse_change * (self.eye.length() * self.options.pan_speed);

            let mut pan = self.eye.cross(camera.up).normalize() * mouse_change.x;
            pan += camera.up.normalize() * mouse_change.y;

            camera.position += pan;
            self.target += pan;

            if self.options.static_moving {
                self.samples.pan_start = self.samples.pan_end;
            } else {
                self.samples.pan_start += (self.samples.pan_end
                    - self.samples.pan_start)
                    * self.options.dynamic_damping_factor;
            }
        }
    }

    /// Clamp the eye length into `[min_distance, max_distance]` and
    /// reconcile the camera position.
    ///
    /// Skipped entirely when both zoom and pan are disabled; nothing can
    /// change the distance then.
    pub(super) fn check_distances(&mut self, camera: &mut CameraPose) {
        if self.options.no_zoom && self.options.no_pan {
            return;
        }

        let max = self.options.max_distance;
        if self.eye.length_squared() > max * max {
            self.eye = self.eye.normalize() * max;
            camera.position = self.target + self.eye;
        }

        let min = self.options.min_distance;
        if self.eye.length_squared() < min * min {
            self.eye = self.eye.normalize() * min;
            camera.position = self.target + self.eye;
        }
    }
}
