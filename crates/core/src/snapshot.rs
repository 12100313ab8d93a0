//! Read-only view of a session for the rendering layer.

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::types::{Category, Difficulty, GameStatus, PowerUpKind, MAX_MISTAKES};

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PowerUpView {
    pub kind: PowerUpKind,
    pub name: &'static str,
    pub cost: u32,
    pub used: bool,
    pub affordable: bool,
}

impl PowerUpView {
    fn idle(kind: PowerUpKind) -> Self {
        Self {
            kind,
            name: kind.name(),
            cost: kind.cost(),
            used: false,
            affordable: false,
        }
    }

    /// Whether the power-up can be bought right now.
    pub fn usable(&self) -> bool {
        !self.used && self.affordable
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct HintSnapshot {
    pub available: bool,
    /// Letter shown while the reveal timer runs.
    pub letter: Option<char>,
    pub countdown_secs: u32,
    /// Progress of the armed auto-guess, `None` when nothing is armed.
    pub pending_progress: Option<f32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ShakeSnapshot {
    pub active: bool,
    pub intensity: u8,
    pub elapsed_ms: u32,
    pub duration_ms: u32,
    pub offset: i16,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct GameSnapshot {
    pub display: String,
    pub word_len: usize,
    pub guessed: Vec<char>,
    pub mistakes: u8,
    pub max_mistakes: u8,
    pub status: GameStatus,
    pub coins: u32,
    pub power_ups: [PowerUpView; 3],
    pub hint: HintSnapshot,
    pub shake: ShakeSnapshot,
    pub difficulty: Difficulty,
    pub category: Category,
    pub episode_id: u32,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        !self.status.is_terminal()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            display: String::new(),
            word_len: 0,
            guessed: Vec::new(),
            mistakes: 0,
            max_mistakes: MAX_MISTAKES,
            status: GameStatus::InProgress,
            coins: 0,
            power_ups: PowerUpKind::ALL.map(PowerUpView::idle),
            hint: HintSnapshot::default(),
            shake: ShakeSnapshot::default(),
            difficulty: Difficulty::default(),
            category: Category::default(),
            episode_id: 0,
        }
    }
}
