//! Player settings and preferences
//!
//! Persisted in LocalStorage on the web. Scores are never stored.

use serde::{Deserialize, Serialize};

/// Player preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Background music volume (0.0 - 1.0)
    pub music_volume: f32,
    /// All audio off
    pub muted: bool,
    /// Master volume while the page is hidden
    pub hidden_volume: f32,

    // === Visuals ===
    /// Drifting background clouds
    pub clouds: bool,
    /// Glow and sparkles on the catcher after a catch
    pub catch_glow: bool,

    // === Accessibility ===
    /// Reduced motion (no catcher tilt, no glow)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.7,
            sfx_volume: 0.8,
            music_volume: 0.4,
            muted: false,
            hidden_volume: 0.1,

            clouds: true,
            catch_glow: true,

            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Effective catcher tilt (respects reduced_motion)
    pub fn effective_tilt(&self, tilt: f32) -> f32 {
        if self.reduced_motion { 0.0 } else { tilt }
    }

    /// Effective glow intensity (respects reduced_motion)
    pub fn effective_glow(&self, intensity: f32) -> f32 {
        if self.catch_glow && !self.reduced_motion {
            intensity
        } else {
            0.0
        }
    }

    /// Flip mute, returning the new state
    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }

    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "balloon_catcher_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match serde_json::from_str(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring unreadable settings: {}", e),
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
            if let Ok(json) = serde_json::to_string(self) {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert_eq!(s.master_volume, 0.7);
        assert_eq!(s.sfx_volume, 0.8);
        assert_eq!(s.music_volume, 0.4);
        assert!(!s.muted);
    }

    #[test]
    fn test_reduced_motion() {
        let mut s = Settings::default();
        assert_eq!(s.effective_tilt(0.2), 0.2);
        assert_eq!(s.effective_glow(0.5), 0.5);
        s.reduced_motion = true;
        assert_eq!(s.effective_tilt(0.2), 0.0);
        assert_eq!(s.effective_glow(0.5), 0.0);
    }

    #[test]
    fn test_toggle_mute() {
        let mut s = Settings::default();
        assert!(s.toggle_mute());
        assert!(!s.toggle_mute());
    }

    #[test]
    fn test_partial_json_round_trip() {
        let s: Settings = serde_json::from_str(r#"{ "muted": true }"#).expect("valid json");
        assert!(s.muted);
        assert_eq!(s.music_volume, 0.4);
    }
}
