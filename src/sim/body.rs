//! The player-controlled body
//!
//! The body never moves horizontally; the world scrolls past it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::consts::*;
use crate::lerp;

/// The flapping body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Center position (x is fixed for the whole run)
    pub pos: Vec2,
    /// Vertical velocity (positive is down)
    pub vel_y: f32,
    pub radius: f32,
    /// Orientation in radians (positive is nose-down)
    pub rot: f32,
    /// Wing phase (1 right after a flap, decays to 0). Presentation only.
    pub flap_phase: f32,
}

impl Body {
    /// Body at its start-of-run pose
    pub fn new(config: &GameConfig) -> Self {
        Self {
            pos: Vec2::new(config.body_x, config.world_height * 0.5),
            vel_y: 0.0,
            radius: config.body_radius,
            rot: 0.0,
            flap_phase: 0.0,
        }
    }

    /// Restore the start-of-run pose
    pub fn reset(&mut self, config: &GameConfig) {
        *self = Self::new(config);
    }

    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }

    pub fn left(&self) -> f32 {
        self.pos.x - self.radius
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.radius
    }

    /// Replace the vertical velocity with the flap impulse
    pub fn flap(&mut self, config: &GameConfig) {
        self.vel_y = config.flap_velocity;
        self.flap_phase = 1.0;
    }

    /// Playing-state physics step
    pub fn integrate(&mut self, dt: f32, config: &GameConfig) {
        self.vel_y += config.gravity * dt;
        self.pos.y += self.vel_y * dt;

        // Exponential smoothing toward a velocity-derived tilt, per tick
        let target = (self.vel_y / ROT_VELOCITY_DIVISOR).clamp(ROT_MIN, ROT_MAX);
        self.rot = lerp(self.rot, target, ROT_SMOOTHING);

        self.decay_flap_phase(dt);
    }

    /// Dead-state crash settle: gentler fall that stops on the ground
    pub fn settle(&mut self, dt: f32, config: &GameConfig) {
        self.vel_y += config.gravity * dt * SETTLE_GRAVITY_FACTOR;
        let rest_y = config.ground_line() - self.radius;
        self.pos.y = (self.pos.y + self.vel_y * dt).min(rest_y);
        self.rot = lerp(self.rot, SETTLE_ROT, SETTLE_SMOOTHING);
        self.decay_flap_phase(dt);
    }

    fn decay_flap_phase(&mut self, dt: f32) {
        self.flap_phase = (self.flap_phase - dt * FLAP_PHASE_DECAY).max(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_flap_overrides_velocity() {
        let config = GameConfig::new();
        let mut body = Body::new(&config);

        body.vel_y = 900.0;
        body.flap(&config);
        assert_eq!(body.vel_y, FLAP_VELOCITY);

        body.vel_y = -1200.0;
        body.flap(&config);
        assert_eq!(body.vel_y, FLAP_VELOCITY);
        assert_eq!(body.flap_phase, 1.0);
    }

    #[test]
    fn test_flap_then_fall() {
        let config = GameConfig::new();
        let mut body = Body::new(&config);
        let start_y = body.pos.y;
        body.flap(&config);

        // 0.1 s in small steps
        for _ in 0..10 {
            body.integrate(0.01, &config);
        }
        assert!((body.vel_y - (-320.0)).abs() < 1e-3);
        assert!(body.pos.y < start_y, "still rising");

        for _ in 0..30 {
            body.integrate(0.01, &config);
        }
        assert!(body.vel_y > 0.0, "now falling");
    }

    #[test]
    fn test_rotation_eases_toward_clamped_target() {
        let config = GameConfig::new();
        let mut body = Body::new(&config);
        body.vel_y = 6000.0;
        body.integrate(0.0, &config);
        assert!((body.rot - ROT_MAX * ROT_SMOOTHING).abs() < 1e-6);
        for _ in 0..200 {
            body.integrate(0.0, &config);
        }
        assert!((body.rot - ROT_MAX).abs() < 1e-3);
    }

    #[test]
    fn test_flap_phase_decays_to_zero() {
        let config = GameConfig::new();
        let mut body = Body::new(&config);
        body.flap(&config);
        body.integrate(0.1, &config);
        assert!((body.flap_phase - 0.4).abs() < 1e-5);
        body.integrate(0.1, &config);
        assert_eq!(body.flap_phase, 0.0);
    }

    #[test]
    fn test_settle_never_passes_ground() {
        let config = GameConfig::new();
        let mut body = Body::new(&config);
        let rest_y = config.ground_line() - body.radius;
        for _ in 0..200 {
            body.settle(MAX_FRAME_DT, &config);
            assert!(body.pos.y <= rest_y);
        }
        assert_eq!(body.pos.y, rest_y);
        assert!((body.rot - SETTLE_ROT).abs() < 1e-3);
    }

    proptest! {
        #[test]
        fn velocity_matches_constant_acceleration(
            v0 in -800.0f32..800.0,
            steps in proptest::collection::vec(0.0f32..=MAX_FRAME_DT, 1..60),
        ) {
            let config = GameConfig::new();
            let mut body = Body::new(&config);
            body.vel_y = v0;
            let total: f32 = steps.iter().sum();
            for dt in steps {
                body.integrate(dt, &config);
            }
            let expected = v0 + config.gravity * total;
            prop_assert!((body.vel_y - expected).abs() < 0.1);
        }
    }
}
