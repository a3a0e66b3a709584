//! Game clock with fixed-timestep accumulator

use std::time::{Duration, Instant};

/// Longest frame the clock will report; longer stalls are clamped.
const MAX_FRAME: Duration = Duration::from_millis(250);

/// Tracks frame time and provides a fixed-timestep accumulator for timer updates
pub struct GameClock {
    /// Total elapsed game time
    pub total_time: Duration,
    /// Time since last frame
    pub delta_time: Duration,
    /// Fixed timestep interval (default: 1/60 second)
    pub fixed_timestep: Duration,
    /// Accumulated time for fixed-step consumption
    accumulator: Duration,
    /// Last tick instant
    last_instant: Instant,
    /// Whether this is the first tick
    first_tick: bool,
}

impl Default for GameClock {
    fn default() -> Self {
        Self {
            total_time: Duration::ZERO,
            delta_time: Duration::ZERO,
            fixed_timestep: Duration::from_secs_f64(1.0 / 60.0),
            accumulator: Duration::ZERO,
            last_instant: Instant::now(),
            first_tick: true,
        }
    }
}

impl GameClock {
    /// Create a new game clock with default 60Hz fixed timestep
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock from the wall clock. Call once per frame.
    pub fn tick(&mut self) {
        let now = Instant::now();

        if self.first_tick {
            self.first_tick = false;
            self.last_instant = now;
            self.delta_time = Duration::ZERO;
            return;
        }

        let elapsed = now.duration_since(self.last_instant);
        self.last_instant = now;
        self.advance(elapsed);
    }

    /// Advance the clock by an explicit amount (headless and simulated runs)
    pub fn advance(&mut self, elapsed: Duration) {
        self.first_tick = false;
        // Clamp to avoid spiral of death
        self.delta_time = elapsed.min(MAX_FRAME);
        self.total_time += self.delta_time;
        self.accumulator += self.delta_time;
    }

    /// Returns true if there's enough accumulated time for a fixed update step
    pub fn should_fixed_update(&self) -> bool {
        self.accumulator >= self.fixed_timestep
    }

    /// Consume one fixed timestep from the accumulator
    pub fn consume_fixed_step(&mut self) {
        self.accumulator = self.accumulator.saturating_sub(self.fixed_timestep);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_defaults() {
        let clock = GameClock::new();
        assert!((clock.fixed_timestep.as_secs_f64() - 1.0 / 60.0).abs() < 1e-9);
        assert_eq!(clock.total_time, Duration::ZERO);
        assert_eq!(clock.delta_time, Duration::ZERO);
    }

    #[test]
    fn test_first_tick_zero_delta() {
        let mut clock = GameClock::new();
        clock.tick();
        assert_eq!(clock.delta_time, Duration::ZERO);
    }

    #[test]
    fn test_advance_clamps_long_frames() {
        let mut clock = GameClock::new();
        clock.advance(Duration::from_secs(3));
        assert_eq!(clock.delta_time, MAX_FRAME);
        assert_eq!(clock.total_time, MAX_FRAME);
    }

    #[test]
    fn test_accumulator_logic() {
        let mut clock = GameClock {
            fixed_timestep: Duration::from_millis(100),
            ..GameClock::new()
        };
        clock.advance(Duration::from_millis(200)); // Two fixed steps worth

        assert!(clock.should_fixed_update());
        clock.consume_fixed_step();
        assert!(clock.should_fixed_update());
        clock.consume_fixed_step();
        assert!(!clock.should_fixed_update());
    }
}
