//! JavaScript bindings
//!
//! The page owns the canvas, audio and DOM. It forwards input to the
//! handlers below, calls `frame` from `requestAnimationFrame` and reads
//! `snapshot_json` / the returned event JSON to draw and play sounds.
//! Saved settings are read back through `settings_json` after construction.

use wasm_bindgen::prelude::*;

use crate::config::GameConfig;
use crate::game::Game;
use crate::persistence::LocalStorageStore;
use crate::settings::Settings;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    super::init_logging();
    log::info!("Flap Gates starting...");
}

/// Game handle exported to JavaScript
#[wasm_bindgen]
pub struct WebGame {
    game: Game<LocalStorageStore>,
}

#[wasm_bindgen]
impl WebGame {
    /// Create a session. `config_json` may be empty for defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(seed: f64, config_json: &str) -> Result<WebGame, JsValue> {
        let config = if config_json.trim().is_empty() {
            GameConfig::default()
        } else {
            GameConfig::from_json(config_json).map_err(|e| JsValue::from_str(&e.to_string()))?
        };
        let game = Game::new(seed as u64, config, Settings::load(), LocalStorageStore::new())
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(Self { game })
    }

    pub fn flap(&mut self) {
        self.game.flap();
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.game.toggle_pause()
    }

    pub fn restart(&mut self) -> bool {
        self.game.restart()
    }

    pub fn toggle_mute(&mut self) -> bool {
        self.game.toggle_mute()
    }

    pub fn toggle_debug(&mut self) -> bool {
        self.game.toggle_debug()
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.game.set_volume(volume);
    }

    pub fn set_reduced_motion(&mut self, on: bool) {
        self.game.set_reduced_motion(on);
    }

    pub fn muted(&self) -> bool {
        self.game.settings.muted
    }

    pub fn debug_bounds(&self) -> bool {
        self.game.settings.debug_bounds
    }

    /// Volume the audio layer should play at (0 when muted)
    pub fn volume(&self) -> f32 {
        self.game.settings.effective_volume()
    }

    /// Player settings as JSON, for restoring UI toggles on load
    pub fn settings_json(&self) -> String {
        serde_json::to_string(&self.game.settings).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn reset_best(&mut self) {
        self.game.reset_best();
    }

    /// Apply a cheat code from free text. Returns the status message, or
    /// None if no known code was found.
    pub fn apply_code(&mut self, text: &str) -> Option<String> {
        self.game
            .apply_code(text)
            .ok()
            .map(|code| code.message().to_string())
    }

    /// Advance one frame; returns the frame's events as JSON
    pub fn frame(&mut self, now_ms: f64) -> String {
        let events = self.game.frame(now_ms);
        serde_json::to_string(&events).unwrap_or_else(|_| "[]".to_string())
    }

    /// Current state as JSON for the renderer
    pub fn snapshot_json(&self) -> String {
        serde_json::to_string(&self.game.snapshot()).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn share_text(&self) -> String {
        self.game.share_text()
    }
}
