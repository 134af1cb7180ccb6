//! Per-frame simulation step and player actions
//!
//! One tick runs to completion: state check, spawn, advance, integrate,
//! evaluate. Only `Playing` runs the spawner, physics and collisions.

use super::collision::evaluate;
use super::modifiers::{CheatCode, ModifierError, scan_for_codes};
use super::state::{GameEvent, GameState, RunState, Trigger};
use crate::consts::{DAY_CYCLE_RATE, GROUND_RATE_DEAD, GROUND_RATE_READY, GROUND_TILE_WIDTH};

/// Discrete actions gathered for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Flap (also starts a run from Ready, restarts from Dead)
    pub flap: bool,
    /// Pause toggle
    pub pause: bool,
    /// Restart request
    pub restart: bool,
}

impl GameState {
    /// Primary action
    pub fn flap(&mut self) {
        match self.run_state {
            RunState::Ready => {
                self.fire(Trigger::Start);
                self.apply_flap();
            }
            RunState::Playing => self.apply_flap(),
            RunState::Dead => {
                self.fire(Trigger::Restart);
            }
            RunState::Paused => {}
        }
    }

    fn apply_flap(&mut self) {
        self.body.flap(&self.config);
        self.events.push(GameEvent::Flapped);
    }

    /// Pause while playing, resume while paused. Ignored otherwise.
    pub fn toggle_pause(&mut self) -> bool {
        match self.run_state {
            RunState::Playing => self.fire(Trigger::Pause),
            RunState::Paused => self.fire(Trigger::Resume),
            _ => false,
        }
    }

    /// Begin a fresh run from Ready or Dead. Ignored mid-run.
    pub fn restart(&mut self) -> bool {
        match self.run_state {
            RunState::Ready => self.fire(Trigger::Start),
            RunState::Dead => self.fire(Trigger::Restart),
            RunState::Playing | RunState::Paused => false,
        }
    }

    /// Apply the first known code found in free text
    pub fn apply_code(&mut self, text: &str) -> Result<CheatCode, ModifierError> {
        let Some(code) = scan_for_codes(text) else {
            log::warn!("Unknown cheat code: {:?}", text);
            return Err(ModifierError::UnknownCode(text.to_string()));
        };

        let bonus = self.modifiers.apply(code);
        if bonus > 0 {
            self.add_score(bonus);
        }
        log::info!("{}", code.message());
        self.events.push(GameEvent::ModifierApplied(code));
        Ok(code)
    }

    /// Step using a host timestamp in milliseconds. Returns the dt used.
    pub fn frame(&mut self, now_ms: f64) -> f32 {
        let dt = self.clock.step(now_ms, self.modifiers.time_scale());
        tick(self, &TickInput::default(), dt);
        dt
    }

    fn scroll_ground(&mut self, dt: f32, rate: f32) {
        if self.reduced_motion {
            return;
        }
        self.ground_offset = (self.ground_offset + self.config.obstacle_speed * dt * rate)
            .rem_euclid(GROUND_TILE_WIDTH);
    }
}

/// Advance the game state by `dt` seconds (already clamped and scaled)
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if input.pause {
        state.toggle_pause();
    }
    if input.restart {
        state.restart();
    }
    if input.flap {
        state.flap();
    }

    if !state.reduced_motion {
        state.day_phase = (state.day_phase + dt * DAY_CYCLE_RATE).rem_euclid(1.0);
    }

    match state.run_state {
        RunState::Ready => state.scroll_ground(dt, GROUND_RATE_READY),
        RunState::Playing => step_playing(state, dt),
        RunState::Paused => {}
        RunState::Dead => {
            state.body.settle(dt, &state.config);
            state.scroll_ground(dt, GROUND_RATE_DEAD);
        }
    }
}

fn step_playing(state: &mut GameState, dt: f32) {
    state
        .obstacles
        .update_spawner(dt, &state.modifiers, &state.config, &mut state.rng);
    state.obstacles.advance(dt, &state.config);
    state.obstacles.evict(&state.config);

    state.body.integrate(dt, &state.config);
    state.scroll_ground(dt, 1.0);

    let eval = evaluate(
        &mut state.body,
        &mut state.obstacles,
        &state.modifiers,
        &state.config,
    );
    for _ in 0..eval.passed {
        state.add_score(1);
        state.events.push(GameEvent::Scored {
            score: state.score.current,
        });
    }
    if let Some(collision) = eval.collision {
        state.collide(collision);
    }
}
