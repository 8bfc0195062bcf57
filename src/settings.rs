//! Demo settings
//!
//! Read from a JSON file on native builds; every field falls back to its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
pub use crate::sim::ScenePreset;

/// Window parameters passed through to the host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: SCR_WIDTH,
            height: SCR_HEIGHT,
            title: "Animated Shapes".to_string(),
        }
    }
}

/// Demo settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Scene to build at startup
    pub preset: ScenePreset,
    pub window: WindowSettings,
    pub clear_color: [f32; 4],

    // === Animation ===
    /// Motion step applied per frame (seconds)
    pub motion_dt: f32,
    /// Mix factor change per scroll notch
    pub scroll_step: f32,

    // === Textures ===
    /// Image files bound to texture slots 0 and 1
    pub textures: [String; 2],

    // === Headless run ===
    /// Frames simulated by the native binary
    pub frames: u32,
    /// Drive rotation and pulse from the wall clock instead of summed `motion_dt`
    pub wall_clock: bool,
    /// `env_logger` filter string, overrides `RUST_LOG`
    pub log_filter: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            preset: ScenePreset::Animated,
            window: WindowSettings::default(),
            clear_color: CLEAR_COLOR,

            motion_dt: MOTION_DT,
            scroll_step: SCROLL_STEP,

            textures: ["texture1.jpg".to_string(), "texture2.jpg".to_string()],

            frames: 600,
            wall_clock: false,
            log_filter: None,
        }
    }
}

impl Settings {
    /// Default settings for a preset, with the matching window title
    pub fn from_preset(preset: ScenePreset) -> Self {
        let mut settings = Self::default();
        settings.preset = preset;
        if preset == ScenePreset::Textured {
            settings.window.title = "Shapes with Textures".to_string();
        }
        settings
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Read and parse a JSON settings file
    pub fn try_load(path: &Path) -> Result<Self, String> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| format!("Cannot read settings {}: {}", path.display(), e))?;
        Self::from_json(&json).map_err(|e| format!("Invalid settings {}: {}", path.display(), e))
    }

    /// Load settings from a JSON file, falling back to defaults
    ///
    /// Logs through `log`, so call it after the logger is up.
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("{} - using defaults", e);
                Self::default()
            }
        }
    }

    /// File bound to a texture slot, if any
    pub fn texture_path(&self, slot: crate::sim::TextureSlot) -> Option<&str> {
        self.textures.get(slot.0 as usize).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::TextureSlot;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.window.width, 800);
        assert_eq!(settings.window.height, 600);
        assert_eq!(settings.motion_dt, 0.01);
        assert_eq!(settings.scroll_step, 0.05);
        assert_eq!(settings.clear_color, [0.1, 0.1, 0.1, 1.0]);
        assert_eq!(settings.preset, ScenePreset::Animated);
        assert!(!settings.wall_clock);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "preset": "textured", "window": { "width": 1024 } }"#)
            .expect("valid json");
        assert_eq!(settings.preset, ScenePreset::Textured);
        assert_eq!(settings.window.width, 1024);
        assert_eq!(settings.window.height, 600);
        assert_eq!(settings.frames, 600);
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(Settings::from_json("{ preset: ").is_err());
        assert!(Settings::from_json(r#"{ "preset": "spinning" }"#).is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let mut settings = Settings::from_preset(ScenePreset::Textured);
        settings.log_filter = Some("debug".to_string());
        let json = settings.to_json().expect("serializable");
        assert_eq!(Settings::from_json(&json).expect("valid json"), settings);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let settings = Settings::load(Path::new("/nonexistent/shape-motion.json"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_try_load_reports_bad_files() {
        let err = Settings::try_load(Path::new("/nonexistent/shape-motion.json"))
            .expect_err("missing file");
        assert!(err.starts_with("Cannot read settings"));

        let path = std::env::temp_dir().join("shape-motion-truncated-settings.json");
        std::fs::write(&path, r#"{ "frames": "#).expect("writable temp dir");
        let err = Settings::try_load(&path).expect_err("truncated json");
        assert!(err.starts_with("Invalid settings"));
        assert_eq!(Settings::load(&path), Settings::default());
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_try_load_reads_file() {
        let path = std::env::temp_dir().join("shape-motion-valid-settings.json");
        std::fs::write(&path, r#"{ "frames": 12, "wall_clock": true }"#).expect("writable temp dir");
        let settings = Settings::try_load(&path).expect("valid settings");
        assert_eq!(settings.frames, 12);
        assert!(settings.wall_clock);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_texture_paths() {
        let settings = Settings::default();
        assert_eq!(settings.texture_path(TextureSlot(0)), Some("texture1.jpg"));
        assert_eq!(settings.texture_path(TextureSlot(1)), Some("texture2.jpg"));
        assert_eq!(settings.texture_path(TextureSlot(2)), None);
        assert_eq!(Settings::from_preset(ScenePreset::Textured).window.title, "Shapes with Textures");
    }
}
