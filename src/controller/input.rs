//! Input callbacks for the trackball controller: the interaction state
//! machine transitions.
//!
//! Each method is one host event callback. All effects of a callback are
//! applied before it returns, so no partial mode switch is ever observable
//! between callbacks. Every callback checks the `enabled` gate first.

use super::{ControlEvent, TrackballController};
use crate::input::state::Mode;
use crate::input::{KeyCode, PointerButton, TouchPoint};

/// Scale from wheel notches to zoom-sample screen fraction.
const WHEEL_ZOOM_SCALE: f32 = 0.01;

impl TrackballController {
    /// Pointer button press at device-pixel coordinates.
    ///
    /// From idle, adopts the button's gesture mode; while a mode is already
    /// active (e.g. held trigger key) the press seeds that mode's samples
    /// instead. Emits [`ControlEvent::Start`].
    pub fn pointer_down(&mut self, button: PointerButton, x: f32, y: f32) {
        if !self.enabled {
            return;
        }

        if self.mode == Mode::Idle {
            self.mode = match button {
                PointerButton::Primary => Mode::Rotate,
                PointerButton::Auxiliary => Mode::Zoom,
                PointerButton::Secondary => Mode::Pan,
            };
        }

        match self.mode {
            Mode::Rotate if !self.options.no_rotate => {
                self.samples
                    .seed_rotate(self.viewport.pointer_on_circle(x, y));
            }
            Mode::Zoom if !self.options.no_zoom => {
                self.samples
                    .seed_zoom(self.viewport.pointer_on_screen(x, y));
            }
            Mode::Pan if !self.options.no_pan => {
                self.samples.seed_pan(self.viewport.pointer_on_screen(x, y));
            }
            _ => {}
        }

        self.emit(ControlEvent::Start);
    }

    /// Pointer motion at device-pixel coordinates.
    ///
    /// Updates the live samples of the current pointer mode; a no-op while
    /// idle or in a touch mode.
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        if !self.enabled {
            return;
        }

        match self.mode {
            Mode::Rotate if !self.options.no_rotate => {
                self.samples
                    .track_rotate(self.viewport.pointer_on_circle(x, y));
            }
            Mode::Zoom if !self.options.no_zoom => {
                self.samples.zoom_end = self.viewport.pointer_on_screen(x, y);
            }
            Mode::Pan if !self.options.no_pan => {
                self.samples.pan_end = self.viewport.pointer_on_screen(x, y);
            }
            _ => {}
        }
    }

    /// Pointer button release. Returns to idle and emits
    /// [`ControlEvent::End`].
    pub fn pointer_up(&mut self) {
        if !self.enabled {
            return;
        }
        self.mode = Mode::Idle;
        self.emit(ControlEvent::End);
    }

    /// Wheel/scroll tick, in notches; positive dollies toward the target.
    ///
    /// A discrete gesture: perturbs the zoom samples without changing mode
    /// and immediately emits a [`ControlEvent::Start`]/[`ControlEvent::End`]
    /// pair.
    pub fn wheel(&mut self, delta: f32) {
        if !self.enabled {
            return;
        }
        self.samples.zoom_start.y += delta * WHEEL_ZOOM_SCALE;
        self.emit(ControlEvent::Start);
        self.emit(ControlEvent::End);
    }

    /// Physical key press with the host's numeric key code.
    ///
    /// Every physical press is forwarded to the key handler; auto-repeat is
    /// suppressed until [`key_up`](Self::key_up). From idle, a configured
    /// trigger key enters its gesture mode; while any mode is active the
    /// press only records the mode to resume at release.
    pub fn key_down(&mut self, code: KeyCode) {
        if !self.enabled {
            return;
        }
        if self.key_engaged {
            return;
        }
        self.key_engaged = true;

        self.dispatch_key(code);

        self.prev_mode = self.mode;
        if self.mode != Mode::Idle {
            return;
        }

        let keys = self.options.trigger_keys;
        if code == keys.rotate && !self.options.no_rotate {
            self.mode = Mode::Rotate;
        } else if code == keys.zoom && !self.options.no_zoom {
            self.mode = Mode::Zoom;
        } else if code == keys.pan && !self.options.no_pan {
            self.mode = Mode::Pan;
        }
    }

    /// Physical key release: restores the mode remembered at press time and
    /// re-arms key handling.
    pub fn key_up(&mut self) {
        if !self.enabled {
            return;
        }
        self.mode = self.prev_mode;
        self.key_engaged = false;
    }

    /// Touch contact(s) added; `touches` is the full set now down.
    ///
    /// One contact enters touch-rotate, two enter touch-pan-zoom (seeding
    /// both the midpoint pan pair and the pinch distance pair), any other
    /// count forces idle. Emits [`ControlEvent::Start`].
    pub fn touch_start(&mut self, touches: &[TouchPoint]) {
        if !self.enabled {
            return;
        }

        match touches {
            [touch] => {
                self.mode = Mode::TouchRotate;
                self.samples
                    .seed_rotate(self.viewport.pointer_on_circle(touch.x, touch.y));
            }
            [a, b] => {
                self.mode = Mode::TouchPanZoom;
                self.samples.seed_pinch(a.distance(b));
                let (x, y) = a.midpoint(b);
                self.samples.seed_pan(self.viewport.pointer_on_screen(x, y));
            }
            _ => self.mode = Mode::Idle,
        }

        self.emit(ControlEvent::Start);
    }

    /// Touch contact(s) moved; `touches` is the full set currently down.
    ///
    /// Updates the live samples of the current touch mode without changing
    /// mode; an unexpected contact count forces idle.
    pub fn touch_move(&mut self, touches: &[TouchPoint]) {
        if !self.enabled {
            return;
        }

        match touches {
            [touch] => {
                self.samples
                    .track_rotate(self.viewport.pointer_on_circle(touch.x, touch.y));
            }
            [a, b] => {
                self.samples.pinch_end = a.distance(b);
                let (x, y) = a.midpoint(b);
                self.samples.pan_end = self.viewport.pointer_on_screen(x, y);
            }
            _ => self.mode = Mode::Idle,
        }
    }

    /// Touch contact(s) lifted; `touches` is the set still down.
    ///
    /// Remaining contacts update their samples one last time, then the
    /// controller returns to idle and emits [`ControlEvent::End`].
    pub fn touch_end(&mut self, touches: &[TouchPoint]) {
        if !self.enabled {
            return;
        }

        match touches {
            [touch] => {
                self.samples
                    .track_rotate(self.viewport.pointer_on_circle(touch.x, touch.y));
            }
            [a, b] => {
                self.samples.seed_pinch(0.0);
                let (x, y) = a.midpoint(b);
                let point = self.viewport.pointer_on_screen(x, y);
                self.samples.pan_end = point;
                self.samples.pan_start = point;
            }
            _ => {}
        }

        self.mode = Mode::Idle;
        self.emit(ControlEvent::End);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec3;

    use super::*;
    use crate::camera::CameraPose;
    use crate::controller::ControlEvent;
    use crate::options::ControlOptions;
    use crate::screen::Viewport;

    fn rig() -> (CameraPose, TrackballController) {
        let mut camera = CameraPose::new(Vec3::new(0.0, 0.0, 10.0));
        let controller = TrackballController::new(
            &mut camera,
            Vec3::ZERO,
            Viewport::from_size(800.0, 600.0),
            ControlOptions::default(),
        );
        (camera, controller)
    }

    fn record_events(
        controller: &mut TrackballController,
    ) -> Rc<RefCell<Vec<ControlEvent>>> {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        controller.set_event_handler(move |event| sink.borrow_mut().push(event));
        events
    }

    #[test]
    fn buttons_map_to_their_modes() {
        let (_, mut controller) = rig();

        controller.pointer_down(PointerButton::Primary, 400.0, 300.0);
        assert_eq!(controller.mode(), Mode::Rotate);
        controller.pointer_up();
        assert_eq!(controller.mode(), Mode::Idle);

        controller.pointer_down(PointerButton::Auxiliary, 400.0, 300.0);
        assert_eq!(controller.mode(), Mode::Zoom);
        controller.pointer_up();

        controller.pointer_down(PointerButton::Secondary, 400.0, 300.0);
        assert_eq!(controller.mode(), Mode::Pan);
        controller.pointer_up();
    }

    #[test]
    fn pointer_gesture_emits_start_then_end() {
        let (_, mut controller) = rig();
        let events = record_events(&mut controller);

        controller.pointer_down(PointerButton::Primary, 400.0, 300.0);
        controller.pointer_move(420.0, 300.0);
        controller.pointer_up();
        assert_eq!(
            *events.borrow(),
            vec![ControlEvent::Start, ControlEvent::End]
        );
    }

    #[test]
    fn wheel_emits_start_end_pair_without_mode_change() {
        let (_, mut controller) = rig();
        let events = record_events(&mut controller);

        controller.wheel(1.0);
        assert_eq!(controller.mode(), Mode::Idle);
        assert_eq!(
            *events.borrow(),
            vec![ControlEvent::Start, ControlEvent::End]
        );
    }

    #[test]
    fn trigger_key_enters_mode_from_idle_only() {
        let (_, mut controller) = rig();

        controller.key_down(KeyCode::S);
        assert_eq!(controller.mode(), Mode::Zoom);
        controller.key_up();
        assert_eq!(controller.mode(), Mode::Idle);

        // While a pointer gesture is active a trigger key must not steal
        // the mode; it resumes the pointer mode on release instead.
        controller.pointer_down(PointerButton::Secondary, 400.0, 300.0);
        assert_eq!(controller.mode(), Mode::Pan);
        controller.key_down(KeyCode::A);
        assert_eq!(controller.mode(), Mode::Pan);
        controller.key_up();
        assert_eq!(controller.mode(), Mode::Pan);
        controller.pointer_up();
    }

    #[test]
    fn held_key_repeats_are_ignored() {
        let (_, mut controller) = rig();
        let codes = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&codes);
        controller.set_key_handler(move |code| sink.borrow_mut().push(code));

        controller.key_down(KeyCode::A);
        controller.key_down(KeyCode::A);
        controller.key_down(KeyCode::D);
        assert_eq!(*codes.borrow(), vec![KeyCode::A]);
        assert_eq!(controller.mode(), Mode::Rotate);

        controller.key_up();
        controller.key_down(KeyCode::D);
        assert_eq!(*codes.borrow(), vec![KeyCode::A, KeyCode::D]);
    }

    #[test]
    fn unbound_keys_reach_the_key_handler_but_not_the_mode() {
        let (_, mut controller) = rig();
        let codes = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&codes);
        controller.set_key_handler(move |code| sink.borrow_mut().push(code));

        controller.key_down(KeyCode(77));
        assert_eq!(controller.mode(), Mode::Idle);
        assert_eq!(*codes.borrow(), vec![KeyCode(77)]);
    }

    #[test]
    fn touch_counts_select_touch_modes() {
        let (_, mut controller) = rig();

        controller.touch_start(&[TouchPoint::new(400.0, 300.0)]);
        assert_eq!(controller.mode(), Mode::TouchRotate);
        controller.touch_end(&[]);
        assert_eq!(controller.mode(), Mode::Idle);

        controller.touch_start(&[
            TouchPoint::new(350.0, 300.0),
            TouchPoint::new(450.0, 300.0),
        ]);
        assert_eq!(controller.mode(), Mode::TouchPanZoom);
        controller.touch_end(&[]);

        controller.touch_start(&[
            TouchPoint::new(100.0, 100.0),
            TouchPoint::new(200.0, 200.0),
            TouchPoint::new(300.0, 300.0),
        ]);
        assert_eq!(controller.mode(), Mode::Idle);
    }

    #[test]
    fn touch_end_always_returns_to_idle() {
        let (_, mut controller) = rig();
        let events = record_events(&mut controller);

        controller.touch_start(&[
            TouchPoint::new(350.0, 300.0),
            TouchPoint::new(450.0, 300.0),
        ]);
        // One finger lifted, one remains: samples update, mode still drops.
        controller.touch_end(&[TouchPoint::new(400.0, 300.0)]);
        assert_eq!(controller.mode(), Mode::Idle);
        assert_eq!(
            *events.borrow(),
            vec![ControlEvent::Start, ControlEvent::End]
        );
    }

    #[test]
    fn disabled_controller_ignores_every_callback() {
        let (_, mut controller) = rig();
        let events = record_events(&mut controller);
        controller.enabled = false;

        controller.pointer_down(PointerButton::Primary, 400.0, 300.0);
        controller.pointer_move(500.0, 300.0);
        controller.wheel(2.0);
        controller.key_down(KeyCode::A);
        controller.touch_start(&[TouchPoint::new(400.0, 300.0)]);
        controller.pointer_up();

        assert_eq!(controller.mode(), Mode::Idle);
        assert!(events.borrow().is_empty());
    }
}
