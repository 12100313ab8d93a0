//! Screen shake - cosmetic one-shot timer triggered by wrong guesses.
//!
//! Carries no gameplay state. The view reads [`ScreenShake::offset`] to nudge
//! the frame horizontally while the timer runs.

use crate::types::{SHAKE_DURATION_MS, SHAKE_INTENSITY};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenShake {
    active: bool,
    intensity: u8,
    duration_ms: u32,
    elapsed_ms: u32,
}

impl ScreenShake {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) the shake.
    pub fn trigger(&mut self, intensity: u8, duration_ms: u32) {
        self.active = duration_ms > 0 && intensity > 0;
        self.intensity = intensity;
        self.duration_ms = duration_ms;
        self.elapsed_ms = 0;
    }

    /// Shake with the default wrong-guess parameters.
    pub fn trigger_default(&mut self) {
        self.trigger(SHAKE_INTENSITY, SHAKE_DURATION_MS);
    }

    pub fn tick(&mut self, elapsed_ms: u32) {
        if !self.active {
            return;
        }
        self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms);
        if self.elapsed_ms >= self.duration_ms {
            self.active = false;
        }
    }

    pub fn active(&self) -> bool {
        self.active
    }

    pub fn intensity(&self) -> u8 {
        self.intensity
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    pub fn elapsed_ms(&self) -> u32 {
        self.elapsed_ms
    }

    /// Horizontal offset in columns for the current frame.
    ///
    /// Alternates direction every 50ms and decays linearly to zero.
    pub fn offset(&self) -> i16 {
        if !self.active || self.duration_ms == 0 {
            return 0;
        }
        let remaining = self.duration_ms.saturating_sub(self.elapsed_ms);
        let magnitude = (self.intensity as u32 * remaining).div_ceil(self.duration_ms) as i16;
        if (self.elapsed_ms / 50) % 2 == 0 {
            magnitude
        } else {
            -magnitude
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_has_no_offset() {
        let s = ScreenShake::new();
        assert!(!s.active());
        assert_eq!(s.offset(), 0);
    }

    #[test]
    fn test_trigger_and_expire() {
        let mut s = ScreenShake::new();
        s.trigger(2, 300);
        assert!(s.active());
        assert_eq!(s.offset(), 2);

        s.tick(60);
        assert!(s.offset() < 0);

        s.tick(240);
        assert!(!s.active());
        assert_eq!(s.offset(), 0);
    }

    #[test]
    fn test_retrigger_restarts() {
        let mut s = ScreenShake::new();
        s.trigger_default();
        s.tick(200);
        s.trigger_default();
        assert_eq!(s.elapsed_ms(), 0);
        assert!(s.active());
    }
}
