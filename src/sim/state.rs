//! Game state and run-state machine
//!
//! `GameState` is the single aggregate that owns everything a tick mutates.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::body::Body;
use super::clock::Clock;
use super::collision::Collision;
use super::modifiers::{CheatCode, Modifiers};
use super::obstacles::{Obstacle, ObstaclePool};
use crate::config::GameConfig;

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RunState {
    /// Waiting for the first flap
    #[default]
    Ready,
    /// Active gameplay
    Playing,
    /// Suspended by the player
    Paused,
    /// Run ended by a collision
    Dead,
}

/// Something that requests a run-state change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Start,
    Pause,
    Resume,
    Collide,
    Restart,
}

impl RunState {
    /// Transition table. `None` means the trigger is ignored in this state.
    pub fn transition(self, trigger: Trigger) -> Option<RunState> {
        match (self, trigger) {
            (RunState::Ready, Trigger::Start) => Some(RunState::Playing),
            (RunState::Playing, Trigger::Pause) => Some(RunState::Paused),
            (RunState::Paused, Trigger::Resume) => Some(RunState::Playing),
            (RunState::Playing, Trigger::Collide) => Some(RunState::Dead),
            (RunState::Dead, Trigger::Restart) => Some(RunState::Playing),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RunState::Ready => "Ready",
            RunState::Playing => "Playing",
            RunState::Paused => "Paused",
            RunState::Dead => "Game Over",
        }
    }
}

/// Discrete notifications for rendering, audio and persistence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    RunStarted,
    Flapped,
    Scored { score: u32 },
    Collided(Collision),
    GameOver { score: u32, best: u32, new_best: bool },
    Paused,
    Resumed,
    ModifierApplied(CheatCode),
    BestReset,
    MuteToggled { muted: bool },
}

/// Current run score and the persisted best
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub current: u32,
    /// Best as last persisted; only raised when a run ends
    pub best: u32,
}

impl Score {
    pub fn new(best: u32) -> Self {
        Self { current: 0, best }
    }

    /// Best to show while a run is in progress
    pub fn display_best(&self) -> u32 {
        self.current.max(self.best)
    }

    /// Fold the run into the best. Returns true on a new record.
    pub fn finish_run(&mut self) -> bool {
        if self.current > self.best {
            self.best = self.current;
            true
        } else {
            false
        }
    }
}

/// Read-only view handed to renderers each frame
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub run_state: RunState,
    pub status: &'static str,
    pub body: Body,
    pub obstacles: Vec<Obstacle>,
    pub obstacle_width: f32,
    pub score: u32,
    pub best: u32,
    pub modifiers: Modifiers,
    pub active_modifiers: Vec<&'static str>,
    pub day_phase: f32,
    pub ground_offset: f32,
    pub elapsed_ms: f64,
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the RNG was created from
    pub seed: u64,
    pub config: GameConfig,
    pub run_state: RunState,
    pub body: Body,
    pub obstacles: ObstaclePool,
    pub score: Score,
    pub modifiers: Modifiers,
    pub clock: Clock,
    /// Day/night cycle position in [0, 1)
    pub day_phase: f32,
    /// Ground scroll distance (cosmetic)
    pub ground_offset: f32,
    /// Freeze the day/night cycle and ground scroll
    pub reduced_motion: bool,
    /// Pending events, drained by the host
    pub events: Vec<GameEvent>,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a state in `Ready` with the given seed and persisted best.
    ///
    /// `config` must pass [`GameConfig::validate`]; an empty gap range
    /// panics at the first spawn. `Game::new` checks this for hosts.
    pub fn new(seed: u64, config: GameConfig, best: u32) -> Self {
        Self {
            seed,
            body: Body::new(&config),
            clock: Clock::new(config.max_frame_dt),
            config,
            run_state: RunState::Ready,
            obstacles: ObstaclePool::new(),
            score: Score::new(best),
            modifiers: Modifiers::default(),
            day_phase: 0.0,
            ground_offset: 0.0,
            reduced_motion: false,
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Apply a trigger through the transition table and run entry effects.
    /// Returns false if the trigger was ignored.
    pub fn fire(&mut self, trigger: Trigger) -> bool {
        let Some(next) = self.run_state.transition(trigger) else {
            log::debug!("Ignored {:?} while {:?}", trigger, self.run_state);
            return false;
        };
        self.run_state = next;

        match trigger {
            Trigger::Start | Trigger::Restart => self.reset_run(),
            Trigger::Pause => self.events.push(GameEvent::Paused),
            Trigger::Resume => {
                // Paused time must not count as a frame
                self.clock.reset();
                self.events.push(GameEvent::Resumed);
            }
            Trigger::Collide => self.enter_dead(),
        }
        true
    }

    /// Fresh run: empty world, body back at the start
    fn reset_run(&mut self) {
        self.score.current = 0;
        self.obstacles.reset();
        self.body.reset(&self.config);
        self.ground_offset = 0.0;
        self.day_phase = self.rng.random::<f32>();
        self.clock.reset();
        self.events.push(GameEvent::RunStarted);
        log::info!("Run started (best {})", self.score.best);
    }

    fn enter_dead(&mut self) {
        let new_best = self.score.finish_run();
        let (score, best) = (self.score.current, self.score.best);
        if new_best {
            log::info!("Game over: new best {}", best);
        } else {
            log::info!("Game over: score {} (best {})", score, best);
        }
        self.events.push(GameEvent::GameOver {
            score,
            best,
            new_best,
        });
    }

    /// End the run because of a collision. No-op unless playing.
    pub fn collide(&mut self, collision: Collision) -> bool {
        if self.run_state != RunState::Playing {
            return false;
        }
        self.events.push(GameEvent::Collided(collision));
        self.fire(Trigger::Collide)
    }

    /// Add points to the current run
    pub fn add_score(&mut self, points: u32) {
        self.score.current = self.score.current.saturating_add(points);
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            run_state: self.run_state,
            status: self.run_state.label(),
            body: self.body.clone(),
            obstacles: self.obstacles.iter().cloned().collect(),
            obstacle_width: self.config.obstacle_width,
            score: self.score.current,
            best: self.score.display_best(),
            modifiers: self.modifiers,
            active_modifiers: self.modifiers.active_labels(),
            day_phase: self.day_phase,
            ground_offset: self.ground_offset,
            elapsed_ms: self.clock.elapsed_ms(),
        }
    }
}
