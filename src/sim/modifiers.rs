//! Cheat modifiers
//!
//! A fixed table of numeric codes toggles difficulty modifiers at runtime.
//! Codes are matched permissively: every digit in the input is kept, the
//! rest is dropped, and the first known code contained in the result wins.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{SCORE_BONUS, SLOW_MOTION_SCALE};

/// A recognized cheat code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CheatCode {
    /// 4256: no terminal collisions
    Invincible,
    /// 9001: time scale 0.6
    SlowMotion,
    /// 1337: wider gaps on newly spawned obstacles
    EasyGaps,
    /// 7777: one-shot score bonus
    ScoreBonus,
    /// 0000: restore defaults
    ClearAll,
}

/// Known codes in match priority order
pub const KNOWN_CODES: [CheatCode; 5] = [
    CheatCode::Invincible,
    CheatCode::SlowMotion,
    CheatCode::EasyGaps,
    CheatCode::ScoreBonus,
    CheatCode::ClearAll,
];

impl CheatCode {
    /// The digits that trigger this code
    pub fn digits(&self) -> &'static str {
        match self {
            CheatCode::Invincible => "4256",
            CheatCode::SlowMotion => "9001",
            CheatCode::EasyGaps => "1337",
            CheatCode::ScoreBonus => "7777",
            CheatCode::ClearAll => "0000",
        }
    }

    /// Confirmation text for status displays
    pub fn message(&self) -> &'static str {
        match self {
            CheatCode::Invincible => "Invincibility ON",
            CheatCode::SlowMotion => "Slow-mo ON",
            CheatCode::EasyGaps => "Easy mode ON (bigger gaps)",
            CheatCode::ScoreBonus => "+10 score",
            CheatCode::ClearAll => "Cheats cleared",
        }
    }
}

/// Rejected modifier input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModifierError {
    #[error("unknown code: {0:?}")]
    UnknownCode(String),
}

/// Find the first known code embedded in free text
pub fn scan_for_codes(text: &str) -> Option<CheatCode> {
    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    KNOWN_CODES
        .iter()
        .copied()
        .find(|code| digits.contains(code.digits()))
}

/// Active difficulty modifiers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    pub invincible: bool,
    pub slow_motion: bool,
    pub easy_gaps: bool,
}

impl Modifiers {
    /// Apply a code. Returns the score bonus it grants (0 for flag codes).
    pub fn apply(&mut self, code: CheatCode) -> u32 {
        match code {
            CheatCode::Invincible => self.invincible = true,
            CheatCode::SlowMotion => self.slow_motion = true,
            CheatCode::EasyGaps => self.easy_gaps = true,
            CheatCode::ScoreBonus => return SCORE_BONUS,
            CheatCode::ClearAll => self.clear(),
        }
        0
    }

    /// Restore defaults
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Multiplier applied to every frame's dt
    pub fn time_scale(&self) -> f32 {
        if self.slow_motion {
            SLOW_MOTION_SCALE
        } else {
            1.0
        }
    }

    pub fn any_active(&self) -> bool {
        self.invincible || self.slow_motion || self.easy_gaps
    }

    /// Short names of the active modifiers for status text
    pub fn active_labels(&self) -> Vec<&'static str> {
        let mut labels = Vec::new();
        if self.invincible {
            labels.push("Invincible");
        }
        if self.slow_motion {
            labels.push("Slow-mo");
        }
        if self.easy_gaps {
            labels.push("Easy");
        }
        labels
    }
}
