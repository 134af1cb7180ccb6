//! Simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering
//! and platform dependencies:
//! - One tick per frame, driven by a clamped dt
//! - Seeded RNG only
//! - Obstacles iterated oldest first

pub mod body;
pub mod clock;
pub mod collision;
pub mod modifiers;
pub mod obstacles;
pub mod state;
pub mod tick;

pub use body::Body;
pub use clock::Clock;
pub use collision::{Collision, Evaluation, evaluate};
pub use modifiers::{CheatCode, KNOWN_CODES, ModifierError, Modifiers, scan_for_codes};
pub use obstacles::{Obstacle, ObstaclePool, spawn_obstacle};
pub use state::{GameEvent, GameState, RunState, Score, Snapshot, Trigger};
pub use tick::{TickInput, tick};
