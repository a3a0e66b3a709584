//! Recurring interval timers driven by frame time

use std::time::Duration;

/// A recurring schedule that fires once per `period` of accumulated time.
///
/// Timers don't own a thread; the frame loop feeds them elapsed time and
/// they report how many periods completed. A cancelled timer never fires
/// again until it is re-armed.
#[derive(Debug, Clone)]
pub struct IntervalTimer {
    period: Duration,
    elapsed: Duration,
    cancelled: bool,
}

impl IntervalTimer {
    /// Create a timer with the given period. A zero period is bumped to 1ms.
    pub fn new(period: Duration) -> Self {
        Self {
            period: period.max(Duration::from_millis(1)),
            elapsed: Duration::ZERO,
            cancelled: false,
        }
    }

    /// Feed elapsed time, returning how many periods completed
    pub fn advance(&mut self, dt: Duration) -> u32 {
        if self.cancelled {
            return 0;
        }

        self.elapsed += dt;
        let mut fired = 0;
        while self.elapsed >= self.period {
            self.elapsed -= self.period;
            fired += 1;
        }
        fired
    }

    /// Stop the schedule. Pending partial time is discarded.
    pub fn cancel(&mut self) {
        self.cancelled = true;
        self.elapsed = Duration::ZERO;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Restart the schedule from zero
    pub fn rearm(&mut self) {
        self.cancelled = false;
        self.elapsed = Duration::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_per_period() {
        let mut timer = IntervalTimer::new(Duration::from_millis(700));
        assert_eq!(timer.advance(Duration::from_millis(500)), 0);
        assert_eq!(timer.advance(Duration::from_millis(200)), 1);
        assert_eq!(timer.advance(Duration::from_millis(699)), 0);
        assert_eq!(timer.advance(Duration::from_millis(1)), 1);
    }

    #[test]
    fn catches_up_on_long_frames() {
        let mut timer = IntervalTimer::new(Duration::from_millis(100));
        assert_eq!(timer.advance(Duration::from_millis(350)), 3);
        // The leftover 50ms carries into the next period
        assert_eq!(timer.advance(Duration::from_millis(49)), 0);
        assert_eq!(timer.advance(Duration::from_millis(1)), 1);
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let mut timer = IntervalTimer::new(Duration::from_secs(1));
        timer.advance(Duration::from_millis(900));
        timer.cancel();
        assert!(timer.is_cancelled());
        assert_eq!(timer.advance(Duration::from_secs(10)), 0);
    }

    #[test]
    fn rearm_restarts_from_zero() {
        let mut timer = IntervalTimer::new(Duration::from_secs(1));
        timer.cancel();
        timer.rearm();
        assert!(!timer.is_cancelled());
        assert_eq!(timer.advance(Duration::from_millis(999)), 0);
        assert_eq!(timer.advance(Duration::from_millis(1)), 1);
    }

    #[test]
    fn zero_period_is_clamped() {
        let mut timer = IntervalTimer::new(Duration::ZERO);
        assert_eq!(timer.advance(Duration::ZERO), 0);
        assert_eq!(timer.advance(Duration::from_millis(3)), 3);
    }
}
