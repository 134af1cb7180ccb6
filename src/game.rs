//! Host-facing game session
//!
//! Wraps the simulation with its collaborators: the best-score store and
//! player settings. Hosts call one handler per input action and `frame`
//! once per rendered frame, then forward the returned events to audio and
//! UI.

use crate::config::{ConfigError, GameConfig};
use crate::persistence::BestScoreStore;
use crate::settings::Settings;
use crate::sim::{CheatCode, GameEvent, GameState, ModifierError, Snapshot};

/// A running session
pub struct Game<S: BestScoreStore> {
    pub state: GameState,
    pub settings: Settings,
    store: S,
}

impl<S: BestScoreStore> Game<S> {
    /// New session in `Ready`, seeded for gap and day-phase draws.
    /// Fails if the config cannot produce a valid gap.
    pub fn new(
        seed: u64,
        config: GameConfig,
        settings: Settings,
        store: S,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let best = store.read_best();
        log::info!("Game initialized with seed: {} (best {})", seed, best);
        let mut state = GameState::new(seed, config, best);
        state.reduced_motion = settings.reduced_motion;
        Ok(Self {
            state,
            settings,
            store,
        })
    }

    pub fn flap(&mut self) {
        self.state.flap();
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.state.toggle_pause()
    }

    pub fn restart(&mut self) -> bool {
        self.state.restart()
    }

    pub fn apply_code(&mut self, text: &str) -> Result<CheatCode, ModifierError> {
        self.state.apply_code(text)
    }

    pub fn toggle_mute(&mut self) -> bool {
        let muted = self.settings.toggle_mute();
        self.settings.save();
        self.state.events.push(GameEvent::MuteToggled { muted });
        muted
    }

    pub fn toggle_debug(&mut self) -> bool {
        self.settings.toggle_debug()
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.settings.set_volume(volume);
        self.settings.save();
    }

    pub fn set_reduced_motion(&mut self, on: bool) {
        self.settings.reduced_motion = on;
        self.state.reduced_motion = on;
        self.settings.save();
    }

    /// Forget the persisted best score
    pub fn reset_best(&mut self) {
        self.store.clear_best();
        self.state.score.best = 0;
        self.state.events.push(GameEvent::BestReset);
    }

    /// Advance one rendered frame and return the events it produced
    pub fn frame(&mut self, now_ms: f64) -> Vec<GameEvent> {
        self.state.frame(now_ms);
        self.take_events()
    }

    /// Drain pending events, persisting a new best on game over
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        let events = self.state.drain_events();
        for event in &events {
            if let GameEvent::GameOver {
                best,
                new_best: true,
                ..
            } = event
            {
                self.store.write_best(*best);
            }
        }
        events
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn share_text(&self) -> String {
        share_message(self.state.score.current, self.state.score.display_best())
    }
}

/// Text offered by the share button
pub fn share_message(score: u32, best: u32) -> String {
    format!("I scored {score} in Flap Gates! Can you beat my best of {best}?")
}
