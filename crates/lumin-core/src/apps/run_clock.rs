//! Start/stop clock shared by the Timer and Stopwatch apps.

/// A clock that is either stopped or running since a start instant.
///
/// Stopping discards the elapsed time: there is no pause and resume, a new
/// start always counts from zero.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RunClock {
    running: bool,
    /// Monotonic seconds at the last start
    start: f64,
}

impl RunClock {
    pub const fn new() -> Self {
        Self {
            running: false,
            start: 0.0,
        }
    }

    /// Start if stopped, stop if running.
    pub fn toggle(&mut self, now: f64) {
        if self.running {
            self.running = false;
        } else {
            self.running = true;
            self.start = now;
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Whole seconds since start while running, zero when stopped.
    ///
    /// A clock that went backwards reads as zero.
    pub fn display_seconds(&self, now: f64) -> u64 {
        if !self.running {
            return 0;
        }
        let elapsed = now - self.start;
        if elapsed > 0.0 {
            libm::floor(elapsed) as u64
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_stopped() {
        let clock = RunClock::new();
        assert!(!clock.is_running());
        assert_eq!(clock.display_seconds(1234.0), 0);
    }

    #[test]
    fn test_counts_whole_seconds_while_running() {
        let mut clock = RunClock::new();
        clock.toggle(100.0);
        assert_eq!(clock.display_seconds(100.0), 0);
        assert_eq!(clock.display_seconds(100.99), 0);
        assert_eq!(clock.display_seconds(101.0), 1);
        assert_eq!(clock.display_seconds(225.5), 125);
    }

    #[test]
    fn test_double_toggle_resets_to_zero() {
        let mut clock = RunClock::new();
        clock.toggle(10.0);
        clock.toggle(5000.0);
        assert!(!clock.is_running());
        assert_eq!(clock.display_seconds(5000.0), 0);
        assert_eq!(clock.display_seconds(90000.0), 0);
    }

    #[test]
    fn test_restart_does_not_accumulate() {
        let mut clock = RunClock::new();
        clock.toggle(0.0);
        clock.toggle(30.0);
        clock.toggle(40.0);
        assert_eq!(clock.display_seconds(45.0), 5);
    }

    #[test]
    fn test_backwards_clock_reads_zero() {
        let mut clock = RunClock::new();
        clock.toggle(50.0);
        assert_eq!(clock.display_seconds(49.0), 0);
    }
}
