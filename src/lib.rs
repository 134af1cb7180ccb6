//! Flap Gates - a side-scrolling flap-through-the-gates arcade game
//!
//! Core modules:
//! - `sim`: Frame-driven simulation (physics, obstacles, collisions, run state)
//! - `config`: Data-driven game tuning
//! - `persistence`: Best-score storage backends
//! - `platform`: Browser bindings
//! - `game`: Host-facing session tying the simulation to its collaborators

pub mod config;
pub mod game;
pub mod persistence;
pub mod platform;
pub mod settings;
pub mod sim;

pub use config::{ConfigError, GameConfig};
pub use game::{Game, share_message};
pub use persistence::{BestScoreStore, MemoryStore};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Largest simulated step per frame (seconds), prevents tunneling on stalls
    pub const MAX_FRAME_DT: f32 = 0.045;

    /// World dimensions
    pub const WORLD_WIDTH: f32 = 400.0;
    pub const WORLD_HEIGHT: f32 = 480.0;
    pub const GROUND_HEIGHT: f32 = 112.0;

    /// Body defaults
    pub const BODY_X: f32 = 110.0;
    pub const BODY_RADIUS: f32 = 18.0;

    /// Downward acceleration (units/s²)
    pub const GRAVITY: f32 = 1800.0;
    /// Vertical velocity set by a flap (units/s, negative is up)
    pub const FLAP_VELOCITY: f32 = -500.0;
    /// Impulse phase decay per second
    pub const FLAP_PHASE_DECAY: f32 = 6.0;

    /// Orientation smoothing while playing
    pub const ROT_VELOCITY_DIVISOR: f32 = 600.0;
    pub const ROT_MIN: f32 = -0.6;
    pub const ROT_MAX: f32 = 1.0;
    pub const ROT_SMOOTHING: f32 = 0.15;

    /// Crash settle (dead state)
    pub const SETTLE_GRAVITY_FACTOR: f32 = 0.9;
    pub const SETTLE_ROT: f32 = 0.9;
    pub const SETTLE_SMOOTHING: f32 = 0.08;

    /// Obstacle cadence and motion
    pub const SPAWN_INTERVAL_MS: f32 = 1400.0;
    pub const OBSTACLE_SPEED: f32 = 190.0;
    pub const OBSTACLE_WIDTH: f32 = 74.0;
    /// Spawn offset beyond the right edge
    pub const SPAWN_OFFSET: f32 = 40.0;
    /// Eviction slack past the left edge
    pub const EVICT_MARGIN: f32 = 80.0;

    /// Gap geometry
    pub const GAP_MIN: f32 = 140.0;
    pub const GAP_MAX: f32 = 200.0;
    pub const EASY_GAP_EXTRA: f32 = 60.0;
    pub const GAP_MARGIN_TOP: f32 = 40.0;
    /// Added on top of the ground height
    pub const GAP_MARGIN_BOTTOM: f32 = 40.0;

    /// Modifiers
    pub const SLOW_MOTION_SCALE: f32 = 0.6;
    pub const SCORE_BONUS: u32 = 10;

    /// Cosmetic rates
    pub const DAY_CYCLE_RATE: f32 = 0.02;
    pub const GROUND_RATE_READY: f32 = 0.4;
    pub const GROUND_RATE_DEAD: f32 = 0.6;
    /// Ground pattern repeats every tile, so the scroll offset wraps here
    pub const GROUND_TILE_WIDTH: f32 = 48.0;
}

/// Linear interpolation from `a` toward `b` by `t`
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}
