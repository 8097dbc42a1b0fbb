//! Game settings and session configuration
//!
//! Loaded from an optional JSON file; every field falls back to its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::sim::Trajectory;

/// Play area geometry, injected into the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayArea {
    pub width: i32,
    pub height: i32,
    /// Margin around the status bars
    pub padding: i32,
}

impl Default for PlayArea {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 480,
            padding: 10,
        }
    }
}

impl PlayArea {
    /// Vertical center; the dot lands here
    #[inline]
    pub fn midline(&self) -> i32 {
        self.height / 2
    }
}

/// What a restart from the game-over menu does to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum RestartPolicy {
    /// Build a fresh session (score, obstacle, power-ups and clocks reset)
    #[default]
    Fresh,
    /// Re-enter the live loop with the stale session untouched
    Resume,
}

impl RestartPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            RestartPolicy::Fresh => "fresh",
            RestartPolicy::Resume => "resume",
        }
    }
}

/// Status bar layout for the HUD
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HudLayout {
    pub bar_width: i32,
    pub row_height: i32,
}

impl Default for HudLayout {
    fn default() -> Self {
        Self {
            bar_width: 100,
            row_height: 30,
        }
    }
}

/// Session settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub play_area: PlayArea,
    /// RNG seed; `None` derives one from the wall clock
    pub seed: Option<u64>,
    pub restart_policy: RestartPolicy,
    /// Vertical integrator for the dot
    pub trajectory: Trajectory,
    /// Target frame period (ms), used by the headless platform
    pub frame_ms: u64,
    /// Stop the run after this many frames (treated as quit)
    pub frame_limit: Option<u64>,
    pub hud: HudLayout,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            play_area: PlayArea::default(),
            seed: None,
            restart_policy: RestartPolicy::Fresh,
            trajectory: Trajectory::PerFrame,
            frame_ms: 16,
            frame_limit: None,
            hud: HudLayout::default(),
        }
    }
}

impl Settings {
    /// Parse settings from JSON (missing fields take defaults)
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load settings from a JSON file, falling back to defaults on any failure
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Invalid settings in {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Cannot read settings {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Seed to use for a run (explicit or wall-clock derived)
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_play_area() {
        let settings = Settings::default();
        assert_eq!(settings.play_area.width, 1000);
        assert_eq!(settings.play_area.height, 480);
        assert_eq!(settings.play_area.padding, 10);
        assert_eq!(settings.play_area.midline(), 240);
        assert_eq!(settings.restart_policy, RestartPolicy::Fresh);
        assert_eq!(settings.trajectory, Trajectory::PerFrame);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings =
            Settings::from_json(r#"{ "seed": 7, "play_area": { "height": 600 } }"#).unwrap();
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.play_area.height, 600);
        assert_eq!(settings.play_area.width, 1000);
        assert_eq!(settings.frame_ms, 16);
    }

    #[test]
    fn test_restart_policy_and_trajectory_from_json() {
        let settings = Settings::from_json(
            r#"{ "restart_policy": "Resume", "trajectory": { "FixedStep": { "reference_frame_ms": 16 } } }"#,
        )
        .unwrap();
        assert_eq!(settings.restart_policy, RestartPolicy::Resume);
        assert_eq!(
            settings.trajectory,
            Trajectory::FixedStep {
                reference_frame_ms: 16
            }
        );
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(Settings::from_json("{ not json").is_err());
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let settings = Settings::load_from(Path::new("/nonexistent/flip-dot/settings.json"));
        assert_eq!(settings.play_area, PlayArea::default());
        assert_eq!(settings.seed, None);
    }

    #[test]
    fn test_explicit_seed_is_used() {
        let settings = Settings {
            seed: Some(42),
            ..Default::default()
        };
        assert_eq!(settings.resolve_seed(), 42);
    }
}
