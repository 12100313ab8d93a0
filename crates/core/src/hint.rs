//! Hint scheduler - one delayed auto-guess per session
//!
//! Using a hint arms two independent timers:
//!
//! - a cosmetic reveal (`HINT_REVEAL_MS`) that only drives the on-screen text
//! - the pending auto-guess (`HINT_COMMIT_DELAY_MS`) that fires exactly once
//!
//! The scheduler never touches the guess board itself. [`HintScheduler::tick`]
//! hands back the letter when the pending action fires and the caller routes it
//! through the regular guess path.

use crate::types::{Letter, HINT_COMMIT_DELAY_MS, HINT_REVEAL_MS};

/// Letter currently shown by the hint, with time left on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HintReveal {
    pub letter: Letter,
    pub remaining_ms: u32,
}

impl HintReveal {
    /// Whole seconds left, rounded up (what the countdown shows).
    pub fn countdown_secs(&self) -> u32 {
        self.remaining_ms.div_ceil(1000)
    }
}

/// Armed auto-guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingGuess {
    pub letter: Letter,
    pub elapsed_ms: u32,
}

impl PendingGuess {
    /// Progress towards firing, in `[0.0, 1.0]`.
    pub fn progress(&self) -> f32 {
        (self.elapsed_ms as f32 / HINT_COMMIT_DELAY_MS as f32).min(1.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HintScheduler {
    available: bool,
    reveal: Option<HintReveal>,
    pending: Option<PendingGuess>,
}

impl HintScheduler {
    pub fn new() -> Self {
        Self {
            available: true,
            reveal: None,
            pending: None,
        }
    }

    pub fn available(&self) -> bool {
        self.available
    }

    pub fn reveal(&self) -> Option<HintReveal> {
        self.reveal
    }

    pub fn pending(&self) -> Option<PendingGuess> {
        self.pending
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    /// Arm the auto-guess for `letter` and consume the hint.
    ///
    /// Returns false if the hint was already used this session.
    pub fn arm(&mut self, letter: Letter) -> bool {
        if !self.available {
            return false;
        }
        self.available = false;
        self.reveal = Some(HintReveal {
            letter,
            remaining_ms: HINT_REVEAL_MS,
        });
        self.pending = Some(PendingGuess {
            letter,
            elapsed_ms: 0,
        });
        true
    }

    /// Advance both timers. Returns the letter to guess when the pending
    /// action completes; it is discarded at the same time.
    pub fn tick(&mut self, elapsed_ms: u32) -> Option<Letter> {
        if let Some(reveal) = self.reveal.as_mut() {
            reveal.remaining_ms = reveal.remaining_ms.saturating_sub(elapsed_ms);
            if reveal.remaining_ms == 0 {
                self.reveal = None;
            }
        }

        let pending = self.pending.as_mut()?;
        pending.elapsed_ms = pending.elapsed_ms.saturating_add(elapsed_ms);
        if pending.elapsed_ms >= HINT_COMMIT_DELAY_MS {
            return self.pending.take().map(|p| p.letter);
        }
        None
    }
}

impl Default for HintScheduler {
    fn default() -> Self {
        Self::new()
    }
}
