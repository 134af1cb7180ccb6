//! Gated obstacles and their spawner
//!
//! Obstacles are created at the right edge on a fixed cadence, scroll left
//! at a uniform speed and are evicted from the front once well off-screen.
//! Since every obstacle moves by the same amount each tick, creation order
//! and position order coincide: the front of the queue is always leftmost.

use std::collections::VecDeque;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::modifiers::Modifiers;
use crate::config::GameConfig;

/// A vertical obstacle pair with a passable gap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Left edge
    pub x: f32,
    /// Y of the gap's upper edge
    pub gap_top: f32,
    pub gap_height: f32,
    /// Set once the body has fully passed this obstacle
    pub scored: bool,
}

impl Obstacle {
    pub fn new(x: f32, gap_top: f32, gap_height: f32) -> Self {
        Self {
            x,
            gap_top,
            gap_height,
            scored: false,
        }
    }

    pub fn gap_bottom(&self) -> f32 {
        self.gap_top + self.gap_height
    }

    pub fn right(&self, width: f32) -> f32 {
        self.x + width
    }
}

/// Ordered obstacle sequence plus the spawn timer
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObstaclePool {
    /// Oldest first
    obstacles: VecDeque<Obstacle>,
    /// Milliseconds since the last spawn
    spawn_timer_ms: f32,
}

impl ObstaclePool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all obstacles and restart the spawn cadence
    pub fn reset(&mut self) {
        self.obstacles.clear();
        self.spawn_timer_ms = 0.0;
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Obstacle> {
        self.obstacles.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Obstacle> {
        self.obstacles.get(index)
    }

    pub fn spawn_timer_ms(&self) -> f32 {
        self.spawn_timer_ms
    }

    /// Append an already-built obstacle
    pub fn push(&mut self, obstacle: Obstacle) {
        self.obstacles.push_back(obstacle);
    }

    /// Advance the spawn timer; returns true if an obstacle was created
    pub fn update_spawner<R: Rng>(
        &mut self,
        dt: f32,
        modifiers: &Modifiers,
        config: &GameConfig,
        rng: &mut R,
    ) -> bool {
        self.spawn_timer_ms += dt * 1000.0;
        if self.spawn_timer_ms >= config.spawn_interval_ms {
            self.spawn_timer_ms = 0.0;
            let obstacle = spawn_obstacle(modifiers, config, rng);
            log::debug!(
                "Spawned obstacle: gap {:.0}..{:.0}",
                obstacle.gap_top,
                obstacle.gap_bottom()
            );
            self.obstacles.push_back(obstacle);
            true
        } else {
            false
        }
    }

    /// Scroll every obstacle left by `speed * dt`
    pub fn advance(&mut self, dt: f32, config: &GameConfig) {
        let dx = config.obstacle_speed * dt;
        for obstacle in &mut self.obstacles {
            obstacle.x -= dx;
        }
    }

    /// Drop obstacles from the front once fully past the left edge plus margin.
    /// Returns how many were removed.
    pub fn evict(&mut self, config: &GameConfig) -> usize {
        let mut removed = 0;
        while self
            .obstacles
            .front()
            .is_some_and(|o| o.right(config.obstacle_width) < -crate::consts::EVICT_MARGIN)
        {
            self.obstacles.pop_front();
            removed += 1;
        }
        removed
    }

    /// True if positions are non-increasing from back to front
    pub fn is_sorted(&self) -> bool {
        self.obstacles
            .iter()
            .zip(self.obstacles.iter().skip(1))
            .all(|(older, newer)| older.x <= newer.x)
    }
}

/// Gap height for a new obstacle
pub fn draw_gap_height<R: Rng>(modifiers: &Modifiers, config: &GameConfig, rng: &mut R) -> f32 {
    let base = rng.random_range(config.gap_min..=config.gap_max);
    if modifiers.easy_gaps {
        rng.random_range(base..=base + config.easy_gap_extra)
    } else {
        base
    }
}

/// Create an obstacle just past the right edge with a gap inside the play band
pub fn spawn_obstacle<R: Rng>(modifiers: &Modifiers, config: &GameConfig, rng: &mut R) -> Obstacle {
    let gap_height = draw_gap_height(modifiers, config, rng);
    let gap_top = rng.random_range(config.gap_margin_top..=config.max_gap_top(gap_height));
    Obstacle::new(
        config.world_width + crate::consts::SPAWN_OFFSET,
        gap_top,
        gap_height,
    )
}
