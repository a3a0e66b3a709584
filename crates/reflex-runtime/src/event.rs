//! Events consumed by the game session

use reflex_core::TargetId;

/// Everything that can happen to a session, in the order the bus delivers it.
///
/// Timer events come from the [`Scheduler`](crate::Scheduler); clicks come
/// from the input layer after picking has resolved the target under the
/// pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The spawn schedule fired
    SpawnTick,
    /// The one-second countdown schedule fired
    CountdownTick,
    /// A pointer click, with the picked target if any
    Click(Option<TargetId>),
    /// Restart the session in place
    Reset,
}
