//! Controller configuration with TOML preset support.
//!
//! All tweakable settings consolidate here. Option structs use
//! `#[serde(default)]` so partial TOML presets (e.g. only overriding
//! `[trigger_keys]`) work correctly.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::TrackballError;
use crate::input::KeyCode;

/// Keys that start a gesture while held from idle.
///
/// Holding one of these enters the corresponding mode until release, which
/// restores whatever mode was active when the key went down.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TriggerKeys {
    /// Enters rotate while held.
    pub rotate: KeyCode,
    /// Enters zoom while held.
    pub zoom: KeyCode,
    /// Enters pan while held.
    pub pan: KeyCode,
}

impl Default for TriggerKeys {
    fn default() -> Self {
        Self {
            rotate: KeyCode::A,
            zoom: KeyCode::S,
            pan: KeyCode::D,
        }
    }
}

/// Controller behavior options.
///
/// Safe to tweak between frames; the controller reads them fresh on every
/// callback and update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct ControlOptions {
    /// Orbit sensitivity multiplier.
    pub rotate_speed: f32,
    /// Dolly sensitivity multiplier.
    pub zoom_speed: f32,
    /// Pan sensitivity multiplier.
    pub pan_speed: f32,
    /// Disable the orbit gesture entirely.
    pub no_rotate: bool,
    /// Disable the dolly gesture entirely.
    pub no_zoom: bool,
    /// Disable the pan gesture entirely.
    pub no_pan: bool,
    /// Apply every gesture immediately and fully, with no inertial easing.
    pub static_moving: bool,
    /// Per-frame decay/approach rate in `0.0..=1.0`, used when
    /// `static_moving` is off. The rate is per `update` call, so damping
    /// speed tracks the host's frame rate.
    pub dynamic_damping_factor: f32,
    /// Closest the camera may dolly toward the target.
    pub min_distance: f32,
    /// Farthest the camera may dolly from the target.
    pub max_distance: f32,
    /// Keys that enter rotate/zoom/pan while held from idle.
    pub trigger_keys: TriggerKeys,
}

impl Default for ControlOptions {
    fn default() -> Self {
        Self {
            rotate_speed: 1.0,
            zoom_speed: 1.2,
            pan_speed: 0.3,
            no_rotate: false,
            no_zoom: false,
            no_pan: false,
            static_moving: false,
            dynamic_damping_factor: 0.2,
            min_distance: 0.0,
            max_distance: f32::INFINITY,
            trigger_keys: TriggerKeys::default(),
        }
    }
}

impl ControlOptions {
    /// Load options from a TOML preset. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`TrackballError`] if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, TrackballError> {
        let content = std::fs::read_to_string(path)?;
        let options = toml::from_str(&content)
            .map_err(|e| TrackballError::OptionsParse(e.to_string()))?;
        log::info!("loaded control preset from {}", path.display());
        Ok(options)
    }

    /// Save options to a TOML preset (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`TrackballError`] if serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<(), TrackballError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| TrackballError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        log::info!("saved control preset to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let opts = ControlOptions::default();
        assert_eq!(opts.rotate_speed, 1.0);
        assert_eq!(opts.zoom_speed, 1.2);
        assert_eq!(opts.pan_speed, 0.3);
        assert!(!opts.no_rotate && !opts.no_zoom && !opts.no_pan);
        assert!(!opts.static_moving);
        assert_eq!(opts.dynamic_damping_factor, 0.2);
        assert_eq!(opts.min_distance, 0.0);
        assert_eq!(opts.max_distance, f32::INFINITY);
        assert_eq!(opts.trigger_keys.rotate, KeyCode::A);
        assert_eq!(opts.trigger_keys.zoom, KeyCode::S);
        assert_eq!(opts.trigger_keys.pan, KeyCode::D);
    }

    #[test]
    fn default_round_trips_through_toml() {
        let opts = ControlOptions::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: ControlOptions = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
rotate_speed = 2.5
static_moving = true

[trigger_keys]
pan = 80
";
        let opts: ControlOptions = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.rotate_speed, 2.5);
        assert!(opts.static_moving);
        assert_eq!(opts.trigger_keys.pan, KeyCode(80));
        // Everything else should be default
        assert_eq!(opts.zoom_speed, 1.2);
        assert_eq!(opts.max_distance, f32::INFINITY);
        assert_eq!(opts.trigger_keys.rotate, KeyCode::A);
    }
}
