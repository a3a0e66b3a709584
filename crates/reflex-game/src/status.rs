//! Status overlay: score, time left, and play / game over

use crate::game_state::GameStatus;
use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

/// Projection of [`GameStatus`] onto some display. Called on every change,
/// never polled.
pub trait StatusDisplay {
    fn show(&mut self, status: &GameStatus);
}

/// Writes one status line per update
pub struct TextStatus<W: Write> {
    out: W,
    last: Option<GameStatus>,
}

impl<W: Write> TextStatus<W> {
    pub fn new(out: W) -> Self {
        Self { out, last: None }
    }

    /// The most recently displayed status
    pub fn last(&self) -> Option<&GameStatus> {
        self.last.as_ref()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> StatusDisplay for TextStatus<W> {
    fn show(&mut self, status: &GameStatus) {
        if let Err(e) = writeln!(self.out, "{status}").and_then(|_| self.out.flush()) {
            tracing::warn!("status display write failed: {e}");
        }
        self.last = Some(*status);
    }
}

/// Keeps every update. Clones share the same history.
#[derive(Debug, Clone, Default)]
pub struct RecordingStatus {
    updates: Rc<RefCell<Vec<GameStatus>>>,
}

impl RecordingStatus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn updates(&self) -> Vec<GameStatus> {
        self.updates.borrow().clone()
    }

    pub fn last(&self) -> Option<GameStatus> {
        self.updates.borrow().last().copied()
    }
}

impl StatusDisplay for RecordingStatus {
    fn show(&mut self, status: &GameStatus) {
        self.updates.borrow_mut().push(*status);
    }
}

/// Discards updates
#[derive(Debug, Default)]
pub struct NullStatus;

impl StatusDisplay for NullStatus {
    fn show(&mut self, _status: &GameStatus) {}
}
