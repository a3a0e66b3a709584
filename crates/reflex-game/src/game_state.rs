//! Score, countdown, and phase for one round

use reflex_runtime::{SessionPhase, SessionState};
use serde::Serialize;
use std::fmt;

/// Snapshot published to the status display on every change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameStatus {
    pub score: u32,
    pub time_left: u32,
    pub is_over: bool,
}

impl GameStatus {
    pub fn message(&self) -> &'static str {
        if self.is_over {
            SessionPhase::GameOver.message()
        } else {
            SessionPhase::Playing.message()
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Score: {} | Time: {}s | {}",
            self.score,
            self.time_left,
            self.message()
        )
    }
}

/// Mutable game state. `score` only grows and `time_left` only shrinks
/// until the round is reset.
#[derive(Debug, Clone)]
pub struct GameState {
    score: u32,
    time_left: u32,
    starting_time: u32,
    session: SessionState,
}

impl GameState {
    pub fn new(countdown_secs: u32) -> Self {
        Self {
            score: 0,
            time_left: countdown_secs,
            starting_time: countdown_secs,
            session: SessionState::new(),
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn is_over(&self) -> bool {
        self.session.is_over()
    }

    pub fn phase(&self) -> SessionPhase {
        self.session.phase()
    }

    /// Number of in-place restarts
    pub fn generation(&self) -> u32 {
        self.session.generation()
    }

    pub(crate) fn add_point(&mut self) {
        self.score = self.score.saturating_add(1);
    }

    /// Take one second off the clock, ending the round at zero.
    /// Returns true if this call ended the round.
    pub(crate) fn count_down(&mut self) -> bool {
        self.time_left = self.time_left.saturating_sub(1);
        if self.time_left == 0 {
            return self.session.finish();
        }
        false
    }

    pub(crate) fn reset(&mut self) {
        self.score = 0;
        self.time_left = self.starting_time;
        self.session.restart();
    }

    pub fn status(&self) -> GameStatus {
        GameStatus {
            score: self.score,
            time_left: self.time_left,
            is_over: self.is_over(),
        }
    }
}
