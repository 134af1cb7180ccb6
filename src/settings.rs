//! Player preferences
//!
//! Persisted separately from the best score in LocalStorage.

use serde::{Deserialize, Serialize};

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Audio ===
    /// Sound effects silenced
    pub muted: bool,
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,

    // === Debug ===
    /// Draw collision bounds around the body and obstacles
    pub debug_bounds: bool,

    // === Accessibility ===
    /// Reduced motion (freeze day/night cycle and ground scroll)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            muted: false,
            master_volume: 0.8,
            debug_bounds: false,
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Flip mute; returns the new value
    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }

    /// Flip hitbox drawing; returns the new value
    pub fn toggle_debug(&mut self) -> bool {
        self.debug_bounds = !self.debug_bounds;
        self.debug_bounds
    }

    /// Set master volume, clamped to [0, 1]
    pub fn set_volume(&mut self, volume: f32) {
        self.master_volume = if volume.is_finite() {
            volume.clamp(0.0, 1.0)
        } else {
            0.0
        };
    }

    /// Volume an audio backend should use
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume.clamp(0.0, 1.0)
        }
    }

    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "flap_gates_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(settings) = serde_json::from_str(&json) {
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
            if let Ok(json) = serde_json::to_string(self) {
                match storage.set_item(Self::STORAGE_KEY, &json) {
                    Ok(()) => log::info!("Settings saved"),
                    Err(e) => log::warn!("Failed to save settings: {:?}", e),
                }
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
    fn test_mute_silences_volume() {
        let mut settings = Settings::default();
        assert!(settings.effective_volume() > 0.0);
        assert!(settings.toggle_mute());
        assert_eq!(settings.effective_volume(), 0.0);
        assert!(!settings.toggle_mute());
    }

    #[test]
    fn test_set_volume_clamps() {
        let mut settings = Settings::default();
        settings.set_volume(1.7);
        assert_eq!(settings.master_volume, 1.0);
        settings.set_volume(f32::NAN);
        assert_eq!(settings.master_volume, 0.0);
        settings.set_volume(0.3);
        assert_eq!(settings.effective_volume(), 0.3);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings: Settings = serde_json::from_str(r#"{ "muted": true }"#).unwrap();
        assert!(settings.muted);
        assert_eq!(settings.master_volume, 0.8);
    }
}
