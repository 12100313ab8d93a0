/// Frame tick clock over a monotonic millisecond counter.
///
/// Each tick reports the real time since the previous one, so slow frames
/// advance the game timers by what actually elapsed.
#[derive(Debug, Clone)]
pub struct FrameClock {
    tick_ms: u64,
    last_tick_ms: u64,
}

impl FrameClock {
    pub fn new(tick_ms: u64, now_ms: u64) -> Self {
        Self {
            tick_ms,
            last_tick_ms: now_ms,
        }
    }

    /// Milliseconds left until the next tick is due.
    pub fn timeout_ms(&self, now_ms: u64) -> u64 {
        self.tick_ms
            .saturating_sub(now_ms.saturating_sub(self.last_tick_ms))
    }

    /// Returns the elapsed milliseconds once a tick is due and starts the next one.
    pub fn tick(&mut self, now_ms: u64) -> Option<u32> {
        let elapsed = now_ms.saturating_sub(self.last_tick_ms);
        if elapsed < self.tick_ms {
            return None;
        }
        self.last_tick_ms = now_ms;
        Some(u32::try_from(elapsed).unwrap_or(u32::MAX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_due_before_tick_interval() {
        let mut clock = FrameClock::new(16, 100);
        assert_eq!(clock.timeout_ms(110), 6);
        assert_eq!(clock.tick(115), None);
        assert_eq!(clock.tick(116), Some(16));
        assert_eq!(clock.timeout_ms(116), 16);
    }

    #[test]
    fn test_slow_frame_reports_full_elapsed() {
        let mut clock = FrameClock::new(16, 0);
        assert_eq!(clock.tick(250), Some(250));
        assert_eq!(clock.timeout_ms(300), 0);
        assert_eq!(clock.tick(300), Some(50));
    }

    #[test]
    fn test_slow_ticks_sum_to_wall_time() {
        let mut clock = FrameClock::new(16, 0);
        let total: u32 = [40u64, 400, 700, 1000]
            .into_iter()
            .filter_map(|now| clock.tick(now))
            .sum();
        assert_eq!(total, 1000);
    }
}
