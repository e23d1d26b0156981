//! Game settings and preferences
//!
//! Read once at startup. The web build takes them from a
//! `<script id="settings" type="application/json">` block in the page; the
//! native build from the `FLAPPY_SETTINGS` environment variable. Nothing is
//! written back.

use serde::{Deserialize, Serialize};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Silence all cues
    pub muted: bool,

    // === HUD ===
    /// Show FPS counter
    pub show_fps: bool,

    // === Simulation ===
    /// Fixed RNG seed; `None` seeds from the clock
    pub seed: Option<u64>,
    /// Start with the autopilot flying
    pub autopilot: bool,
    /// Length of the native headless run, in ticks
    pub max_ticks: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,

            show_fps: false,

            seed: None,
            autopilot: false,
            max_ticks: 60 * 60,
        }
    }
}

impl Settings {
    /// Environment variable holding JSON settings (native)
    pub const ENV_VAR: &'static str = "FLAPPY_SETTINGS";
    /// Element id of the JSON settings block (web)
    pub const ELEMENT_ID: &'static str = "settings";

    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        let settings: Settings = serde_json::from_str(json)?;
        Ok(settings.sanitized())
    }

    /// Parse, falling back to defaults on malformed input
    pub fn from_json_or_default(json: &str) -> Self {
        match Self::from_json(json) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring malformed settings ({e}), using defaults");
                Self::default()
            }
        }
    }

    /// Clamp volumes into range
    pub fn sanitized(mut self) -> Self {
        self.master_volume = self.master_volume.clamp(0.0, 1.0);
        self.sfx_volume = self.sfx_volume.clamp(0.0, 1.0);
        self
    }

    /// Gain applied to every cue
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Load settings from the page (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let json = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(Self::ELEMENT_ID))
            .and_then(|el| el.text_content());

        match json {
            Some(json) if !json.trim().is_empty() => {
                log::info!("Loaded settings from page");
                Self::from_json_or_default(&json)
            }
            _ => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Load settings from the environment (native)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        match std::env::var(Self::ENV_VAR) {
            Ok(json) => {
                log::info!("Loaded settings from {}", Self::ENV_VAR);
                Self::from_json_or_default(&json)
            }
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let s = Settings::from_json(r#"{ "muted": true, "seed": 42 }"#).unwrap();
        assert!(s.muted);
        assert_eq!(s.seed, Some(42));
        assert_eq!(s.master_volume, 0.8);
        assert_eq!(s.max_ticks, 3600);
    }

    #[test]
    fn test_volumes_clamped() {
        let s = Settings::from_json(r#"{ "master_volume": 3.0, "sfx_volume": -1.0 }"#).unwrap();
        assert_eq!(s.master_volume, 1.0);
        assert_eq!(s.sfx_volume, 0.0);
    }

    #[test]
    fn test_malformed_falls_back() {
        assert!(Settings::from_json("{ nope").is_err());
        assert_eq!(Settings::from_json_or_default("{ nope"), Settings::default());
    }

    #[test]
    fn test_effective_volume() {
        let mut s = Settings::default();
        assert!((s.effective_volume() - 0.8).abs() < 1e-6);
        s.muted = true;
        assert_eq!(s.effective_volume(), 0.0);
    }
}
