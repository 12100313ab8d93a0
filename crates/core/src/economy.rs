//! Power-up economy - coin balance and the three one-shot power-ups
//!
//! This module only owns the bookkeeping: balance, costs, `used` flags and
//! coin rewards for guesses. The effects themselves touch the guess board and
//! are applied by [`crate::game_state::GameState::use_power_up`].

use crate::guess::GuessOutcome;
use crate::types::{Difficulty, PowerUpKind, COINS_PER_HIT, WIN_BONUS_BASE};

/// One power-up slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PowerUp {
    pub kind: PowerUpKind,
    pub used: bool,
}

impl PowerUp {
    pub fn new(kind: PowerUpKind) -> Self {
        Self { kind, used: false }
    }

    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    pub fn cost(&self) -> u32 {
        self.kind.cost()
    }
}

/// Coin bonus for winning with `mistakes` wrong guesses. Never less than 1.
pub fn win_bonus(mistakes: u8) -> u32 {
    WIN_BONUS_BASE.saturating_sub(mistakes as u32).max(1)
}

/// Coins earned by a guess outcome.
pub fn coins_for(outcome: GuessOutcome, mistakes: u8) -> u32 {
    match outcome {
        GuessOutcome::Hit { won: true, .. } => COINS_PER_HIT + win_bonus(mistakes),
        GuessOutcome::Hit { won: false, .. } => COINS_PER_HIT,
        GuessOutcome::Miss { .. } | GuessOutcome::Ignored => 0,
    }
}

/// Coin balance plus power-up slots for one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Economy {
    coins: u32,
    power_ups: [PowerUp; 3],
}

impl Economy {
    /// Fresh economy with the starting balance for `difficulty`.
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            coins: difficulty.starting_coins(),
            power_ups: PowerUpKind::ALL.map(PowerUp::new),
        }
    }

    pub fn coins(&self) -> u32 {
        self.coins
    }

    pub fn power_ups(&self) -> &[PowerUp; 3] {
        &self.power_ups
    }

    pub fn power_up(&self, kind: PowerUpKind) -> PowerUp {
        self.power_ups[kind.slot()]
    }

    pub fn can_afford(&self, kind: PowerUpKind) -> bool {
        self.coins >= kind.cost()
    }

    /// Whether `kind` can be bought right now.
    pub fn is_available(&self, kind: PowerUpKind) -> bool {
        !self.power_up(kind).used && self.can_afford(kind)
    }

    pub fn earn(&mut self, amount: u32) {
        self.coins = self.coins.saturating_add(amount);
    }

    /// Pay for a power-up and mark it used.
    ///
    /// Returns false, leaving everything untouched, if it is already used or
    /// the balance is too low.
    pub fn purchase(&mut self, kind: PowerUpKind) -> bool {
        if !self.is_available(kind) {
            return false;
        }
        self.coins -= kind.cost();
        self.power_ups[kind.slot()].used = true;
        true
    }
}

impl Default for Economy {
    fn default() -> Self {
        Self::new(Difficulty::default())
    }
}
