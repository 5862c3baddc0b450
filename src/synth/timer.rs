//! Sample-counting timer for LFO delay and ramp-up
//!
//! Counts render calls against a target expressed in milliseconds at a
//! given sample rate. Used to gate LFO output after note-on (delay) and
//! to fade it in (ramp).

/// Counts samples toward a millisecond target
#[derive(Debug, Clone, Copy, Default)]
pub struct Timer {
    counter: f64,
    target: f64,
}

impl Timer {
    /// Create an expired timer (zero target)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target duration; does not reset the elapsed count
    pub fn set_target_ms(&mut self, ms: f64, sample_rate: f64) {
        self.target = ms * sample_rate / 1000.0;
    }

    /// Restart the elapsed count
    pub fn reset(&mut self) {
        self.counter = 0.0;
    }

    /// Advance by one sample
    pub fn advance(&mut self) {
        self.counter += 1.0;
    }

    /// True once the target has elapsed (a zero target is always expired)
    pub fn expired(&self) -> bool {
        self.counter >= self.target
    }

    /// Fraction of the target elapsed, clamped to 0.0..=1.0
    pub fn progress(&self) -> f64 {
        if self.target <= 0.0 {
            1.0
        } else {
            (self.counter / self.target).min(1.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timer_zero_target_expired() {
        let timer = Timer::new();
        assert!(timer.expired());
        assert_eq!(timer.progress(), 1.0);
    }

    #[test]
    fn test_timer_counts_to_target() {
        let mut timer = Timer::new();
        timer.set_target_ms(100.0, 1000.0); // 100 samples

        for _ in 0..100 {
            assert!(!timer.expired());
            timer.advance();
        }
        assert!(timer.expired());
    }

    #[test]
    fn test_timer_reset() {
        let mut timer = Timer::new();
        timer.set_target_ms(10.0, 1000.0); // 10 samples

        for _ in 0..10 {
            timer.advance();
        }
        assert!(timer.expired());

        timer.reset();
        assert!(!timer.expired());
    }

    #[test]
    fn test_timer_progress() {
        let mut timer = Timer::new();
        timer.set_target_ms(100.0, 1000.0);

        for _ in 0..50 {
            timer.advance();
        }
        assert!((timer.progress() - 0.5).abs() < 1e-12);

        for _ in 0..100 {
            timer.advance();
        }
        assert_eq!(timer.progress(), 1.0);
    }

    #[test]
    fn test_timer_retarget_keeps_elapsed() {
        let mut timer = Timer::new();
        timer.set_target_ms(10.0, 1000.0);

        for _ in 0..10 {
            timer.advance();
        }
        assert!(timer.expired());

        // Raising the target un-expires without losing elapsed time
        timer.set_target_ms(20.0, 1000.0);
        assert!(!timer.expired());
        assert!((timer.progress() - 0.5).abs() < 1e-12);
    }
}
