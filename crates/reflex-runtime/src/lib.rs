//! Reflex Runtime - Game loop infrastructure
//!
//! Provides the building blocks the reaction game is driven by:
//! - `GameClock` — frame clock with a fixed-timestep accumulator
//! - `IntervalTimer` / `Scheduler` — recurring spawn and countdown schedules
//! - `GameEvent` / `EventBus` — typed event queue with a single consumer
//! - `SessionState` — the one-way `Playing → GameOver` phase machine
//! - `RuntimeSystem` — trait for systems ticked by the frame loop

mod clock;
mod event;
mod event_bus;
mod scheduler;
mod state;
mod system;
mod timer;

pub use clock::GameClock;
pub use event::GameEvent;
pub use event_bus::EventBus;
pub use scheduler::Scheduler;
pub use state::{SessionPhase, SessionState};
pub use system::RuntimeSystem;
pub use timer::IntervalTimer;
