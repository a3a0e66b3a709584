//! Session phase machine — `Playing → GameOver`.
//!
//! A session starts in [`SessionPhase::Playing`] and moves to
//! [`SessionPhase::GameOver`] exactly once, when the countdown runs out.
//! There is no edge back to `Playing` other than an explicit restart, which
//! rebuilds the session from scratch.

use std::fmt;

/// The phase a session is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Timers run and clicks score.
    Playing,
    /// Terminal phase. Every game operation is a no-op.
    GameOver,
}

impl SessionPhase {
    /// Status message shown on the overlay
    pub fn message(&self) -> &'static str {
        match self {
            SessionPhase::Playing => "play",
            SessionPhase::GameOver => "game over",
        }
    }
}

impl fmt::Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Tracks the current phase and how many times it has been restarted.
#[derive(Debug, Clone)]
pub struct SessionState {
    phase: SessionPhase,
    generation: u32,
}

impl SessionState {
    /// Creates a new state machine in the `Playing` phase.
    pub fn new() -> Self {
        Self {
            phase: SessionPhase::Playing,
            generation: 0,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_over(&self) -> bool {
        self.phase == SessionPhase::GameOver
    }

    /// Take the `Playing → GameOver` edge. Returns false if already over.
    pub fn finish(&mut self) -> bool {
        if self.is_over() {
            return false;
        }
        self.phase = SessionPhase::GameOver;
        tracing::debug!(generation = self.generation, "session phase -> game over");
        true
    }

    /// Start a fresh round, whatever the current phase.
    pub fn restart(&mut self) {
        self.phase = SessionPhase::Playing;
        self.generation += 1;
        tracing::debug!(generation = self.generation, "session phase -> playing");
    }

    /// Number of restarts since the session was created
    pub fn generation(&self) -> u32 {
        self.generation
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_starts_playing() {
        let state = SessionState::new();
        assert_eq!(state.phase(), SessionPhase::Playing);
        assert!(!state.is_over());
        assert_eq!(state.generation(), 0);
    }

    #[test]
    fn finish_is_one_way() {
        let mut state = SessionState::new();
        assert!(state.finish());
        assert!(state.is_over());
        assert!(!state.finish());
        assert_eq!(state.phase(), SessionPhase::GameOver);
    }

    #[test]
    fn restart_returns_to_playing() {
        let mut state = SessionState::new();
        state.finish();
        state.restart();
        assert_eq!(state.phase(), SessionPhase::Playing);
        assert_eq!(state.generation(), 1);
    }

    #[test]
    fn messages() {
        assert_eq!(SessionPhase::Playing.to_string(), "play");
        assert_eq!(SessionPhase::GameOver.to_string(), "game over");
    }
}
