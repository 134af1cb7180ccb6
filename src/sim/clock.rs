//! Frame clock
//!
//! Turns wall-clock frame timestamps into a clamped, scaled simulation step.

use serde::{Deserialize, Serialize};

/// Converts host timestamps (milliseconds) into simulation dt (seconds)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Clock {
    /// Reference timestamp of the previous frame (None until the first frame)
    last_ms: Option<f64>,
    /// Scaled simulation time accumulated so far (cosmetic animation phase)
    elapsed_ms: f64,
    /// Upper bound for a single raw step
    max_dt: f32,
}

impl Clock {
    pub fn new(max_dt: f32) -> Self {
        Self {
            last_ms: None,
            elapsed_ms: 0.0,
            max_dt,
        }
    }

    /// Advance to `now_ms` and return the step in seconds.
    ///
    /// The raw delta is clamped to `[0, max_dt]` before `time_scale` is
    /// applied. The first frame after a reset yields 0.
    pub fn step(&mut self, now_ms: f64, time_scale: f32) -> f32 {
        let raw = match self.last_ms {
            Some(last) => ((now_ms - last) / 1000.0) as f32,
            None => 0.0,
        };
        self.last_ms = Some(now_ms);

        let dt = raw.clamp(0.0, self.max_dt) * time_scale;
        self.elapsed_ms += f64::from(dt) * 1000.0;
        dt
    }

    /// Forget the reference timestamp so the next frame does not count
    /// time spent outside the simulation
    pub fn reset(&mut self) {
        self.last_ms = None;
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::MAX_FRAME_DT;

    #[test]
    fn test_first_frame_is_zero() {
        let mut clock = Clock::new(MAX_FRAME_DT);
        assert_eq!(clock.step(1000.0, 1.0), 0.0);
        let dt = clock.step(1016.0, 1.0);
        assert!((dt - 0.016).abs() < 1e-6);
    }

    #[test]
    fn test_stall_is_clamped() {
        let mut clock = Clock::new(MAX_FRAME_DT);
        clock.step(0.0, 1.0);
        assert_eq!(clock.step(5000.0, 1.0), MAX_FRAME_DT);
    }

    #[test]
    fn test_scale_applies_after_clamp() {
        let mut clock = Clock::new(MAX_FRAME_DT);
        clock.step(0.0, 1.0);
        let dt = clock.step(1000.0, 0.6);
        assert!((dt - MAX_FRAME_DT * 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_backwards_timestamp_yields_zero() {
        let mut clock = Clock::new(MAX_FRAME_DT);
        clock.step(100.0, 1.0);
        assert_eq!(clock.step(50.0, 1.0), 0.0);
    }

    #[test]
    fn test_reset_discards_gap() {
        let mut clock = Clock::new(MAX_FRAME_DT);
        clock.step(0.0, 1.0);
        clock.step(16.0, 1.0);
        clock.reset();
        assert_eq!(clock.step(60_000.0, 1.0), 0.0);
        let dt = clock.step(60_010.0, 1.0);
        assert!((dt - 0.010).abs() < 1e-6);
    }

    #[test]
    fn test_elapsed_accumulates_scaled_time() {
        let mut clock = Clock::new(MAX_FRAME_DT);
        clock.step(0.0, 1.0);
        clock.step(20.0, 1.0);
        clock.step(40.0, 0.5);
        assert!((clock.elapsed_ms() - 30.0).abs() < 1e-3);
    }
}
