//! Camera pose handling.
//!
//! The controller mutates a host-owned [`CameraPose`]; projection and
//! rendering stay entirely on the host side.

/// Host-owned camera pose and view-matrix construction.
pub mod pose;

pub use pose::CameraPose;
