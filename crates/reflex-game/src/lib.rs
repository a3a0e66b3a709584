//! Reflex Game - the timed click-reaction game loop
//!
//! A fixed grid of targets is created once. The [`Spawner`] lights up a
//! random inactive target on every spawn tick (bounded by `max_active`),
//! the [`HitResolver`] scores clicks on lit targets, and the [`Countdown`]
//! ends the round when time runs out. [`Session`] owns all of it and applies
//! [`GameEvent`](reflex_runtime::GameEvent)s one at a time; [`GameLoop`]
//! wires the session to the timer schedules.

mod autoplay;
mod board;
mod countdown;
mod game_loop;
mod game_state;
mod hit;
mod picker;
mod presenter;
mod random;
mod session;
mod spawner;
mod status;
mod target;

pub use autoplay::AutoPlayer;
pub use board::{ActiveSet, Board};
pub use countdown::{Countdown, CountdownOutcome};
pub use game_loop::GameLoop;
pub use game_state::{GameState, GameStatus};
pub use hit::{HitOutcome, HitResolver};
pub use picker::{Cell, GridPicker, Picker};
pub use presenter::{NullPresenter, TargetPresenter};
pub use random::{RandomSource, SeededRandom, SequenceRandom};
pub use session::{Outcome, Session, SessionSummary};
pub use spawner::Spawner;
pub use status::{NullStatus, RecordingStatus, StatusDisplay, TextStatus};
pub use target::{Target, TargetGrid};
