//! Shared scheduling clock.
//!
//! Every tone, chord, and drone change is registered as an absolute
//! time against one clock owned by the engine. The clock is created
//! lazily on first use and advances only as audio is rendered, so
//! scheduling is always non-blocking and offsets stay sample-exact.

/// Monotonic clock measured in seconds.
#[derive(Debug, Clone)]
pub struct AudioClock {
    time: f64,
    suspended: bool,
}

impl AudioClock {
    pub fn new() -> Self {
        AudioClock {
            time: 0.0,
            suspended: false,
        }
    }

    /// Current time in seconds.
    pub fn now(&self) -> f64 {
        self.time
    }

    /// Advance the clock by `seconds`. No-op while suspended.
    pub fn advance(&mut self, seconds: f64) {
        if !self.suspended {
            self.time += seconds;
        }
    }

    /// Halt time advancement.
    pub fn suspend(&mut self) {
        self.suspended = true;
    }

    /// Resume a suspended clock.
    pub fn resume(&mut self) {
        self.suspended = false;
    }

    pub fn is_suspended(&self) -> bool {
        self.suspended
    }
}

impl Default for AudioClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero_running() {
        let clock = AudioClock::new();
        assert_eq!(clock.now(), 0.0);
        assert!(!clock.is_suspended());
    }

    #[test]
    fn advance_accumulates() {
        let mut clock = AudioClock::new();
        clock.advance(0.5);
        clock.advance(0.25);
        assert!((clock.now() - 0.75).abs() < 1e-12);
    }

    #[test]
    fn suspend_freezes_time() {
        let mut clock = AudioClock::new();
        clock.advance(1.0);
        clock.suspend();
        clock.advance(1.0);
        assert_eq!(clock.now(), 1.0);
        clock.resume();
        clock.advance(1.0);
        assert_eq!(clock.now(), 2.0);
    }
}
