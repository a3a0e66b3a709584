//! One-second countdown that ends the round

use crate::game_state::GameState;
use crate::status::StatusDisplay;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownOutcome {
    /// One second elapsed; carries the new time left
    Ticked(u32),
    /// Time ran out on this tick. The schedule must not fire again.
    Ended,
    /// The round was already over
    Ignored,
}

#[derive(Debug, Default)]
pub struct Countdown;

impl Countdown {
    pub fn new() -> Self {
        Self
    }

    /// Take a second off the clock and publish the new status
    pub fn tick(&mut self, state: &mut GameState, status: &mut dyn StatusDisplay) -> CountdownOutcome {
        if state.is_over() {
            return CountdownOutcome::Ignored;
        }

        let ended = state.count_down();
        status.show(&state.status());

        if ended {
            tracing::info!(score = state.score(), "time is up");
            CountdownOutcome::Ended
        } else {
            CountdownOutcome::Ticked(state.time_left())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::RecordingStatus;

    #[test]
    fn ticks_down_and_publishes() {
        let mut state = GameState::new(3);
        let recorder = RecordingStatus::new();
        let mut status = recorder.clone();
        let mut countdown = Countdown::new();

        assert_eq!(countdown.tick(&mut state, &mut status), CountdownOutcome::Ticked(2));
        assert_eq!(countdown.tick(&mut state, &mut status), CountdownOutcome::Ticked(1));
        let times: Vec<u32> = recorder.updates().iter().map(|s| s.time_left).collect();
        assert_eq!(times, vec![2, 1]);
    }

    #[test]
    fn last_second_ends_round() {
        let mut state = GameState::new(1);
        let recorder = RecordingStatus::new();
        let mut status = recorder.clone();
        let mut countdown = Countdown::new();

        assert_eq!(countdown.tick(&mut state, &mut status), CountdownOutcome::Ended);
        assert_eq!(state.time_left(), 0);
        assert!(state.is_over());
        assert!(recorder.last().unwrap().is_over);

        assert_eq!(countdown.tick(&mut state, &mut status), CountdownOutcome::Ignored);
        assert_eq!(state.time_left(), 0);
        assert!(state.is_over());
        assert_eq!(recorder.updates().len(), 1);
    }
}
