//! Game settings and preferences
//!
//! Persisted in LocalStorage on the web; natively the defaults are used.

use serde::{Deserialize, Serialize};

use crate::renderer::Color;

/// Key bindings and color for one fighter
///
/// Keys are `KeyboardEvent.code` values, so bindings follow physical key
/// positions rather than the keyboard layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Controls {
    pub left: String,
    pub right: String,
    pub jump: String,
    /// Fill color as `#RRGGBB`
    pub color: String,
}

impl Controls {
    pub fn new(left: &str, right: &str, jump: &str, color: &str) -> Self {
        Self {
            left: left.to_string(),
            right: right.to_string(),
            jump: jump.to_string(),
            color: color.to_string(),
        }
    }

    /// WASD-style bindings
    pub fn player_one() -> Self {
        Self::new("KeyA", "KeyD", "KeyW", "#555555")
    }

    /// Arrow-key bindings
    pub fn player_two() -> Self {
        Self::new("ArrowLeft", "ArrowRight", "ArrowUp", "#333333")
    }

    /// Parsed fill color, gray if the stored string is malformed
    pub fn fill(&self) -> Color {
        Color::from_hex(&self.color).unwrap_or(Color::BUTTON)
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Show FPS counter
    pub show_fps: bool,
    /// Length of a match once the lead-in countdown ends
    pub match_length_secs: u32,
    /// One entry per fighter, in spawn order (left to right)
    pub players: Vec<Controls>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_fps: true,
            match_length_secs: 90,
            players: vec![Controls::player_one(), Controls::player_two()],
        }
    }
}

impl Settings {
    /// Match length in milliseconds
    pub fn match_length_ms(&self) -> f64 {
        self.match_length_secs as f64 * 1000.0
    }

    /// Parse settings JSON, falling back to defaults for missing fields
    pub fn from_json(json: &str) -> Option<Self> {
        match serde_json::from_str(json) {
            Ok(settings) => Some(settings),
            Err(e) => {
                log::warn!("Ignoring stored settings: {}", e);
                None
            }
        }
    }

    pub fn to_json(&self) -> Option<String> {
        serde_json::to_string(self).ok()
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "smash_sticks_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Some(settings) = Self::from_json(&json) {
                    log::info!("Loaded settings from LocalStorage");
                    return settings;
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Some(json) = self.to_json() {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}
