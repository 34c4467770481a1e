// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Gesture math compares against exact sentinels (0.0, 1.0)
#![allow(clippy::float_cmp)]
// Casts between f64 host coordinates and f32 math are intentional
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::missing_const_for_fn)]

//! Interactive trackball camera controller.
//!
//! Converts raw pointer, touch, wheel, and key input into continuous orbit
//! (rotate), zoom (dolly), and pan transforms applied to a host-owned camera
//! pose looking at a movable target point. The crate renders nothing and
//! owns no scene: hosts feed input callbacks between frames, call
//! [`controller::TrackballController::update`] once per rendered frame, and
//! react to the emitted notifications.
//!
//! # Key entry points
//!
//! - [`controller::TrackballController`] - the controller itself
//! - [`camera::CameraPose`] - the host-owned position/up pair it mutates
//! - [`options::ControlOptions`] - speeds, damping, clamping, trigger keys
//! - [`screen::Viewport`] - device-pixel to gesture-space mapping
//!
//! # Architecture
//!
//! A single-threaded, callback-driven core. The host's event loop delivers
//! pointer/touch/wheel/key callbacks, each of which atomically advances a
//! small interaction state machine (idle, rotate, zoom, pan, touch-rotate,
//! touch-pan-zoom) and records gesture samples in normalized screen spaces.
//! `update` then integrates the accumulated samples into the camera pose,
//! clamps the camera-to-target distance, and applies inertial damping when
//! a gesture has ended. `start`/`end`/`change` notifications and raw
//! key-downs are pushed through host-installed handlers; scene-reactive
//! behavior (prop animation, audio, canned camera jumps) belongs entirely
//! to the host behind that key seam.

pub mod camera;
pub mod controller;
pub mod error;
pub mod input;
pub mod options;
pub mod screen;
