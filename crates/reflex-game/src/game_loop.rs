//! Wires a session to its timer schedules

use crate::session::{Outcome, Session};
use reflex_runtime::{EventBus, GameEvent, RuntimeSystem, Scheduler};
use std::time::Duration;

/// Drives a [`Session`] from elapsed time.
///
/// Each step pushes timer ticks first, then any queued input, and hands the
/// whole batch to the session in that order. When the countdown ends the
/// round, its schedule is cancelled; a reset re-arms both schedules.
pub struct GameLoop {
    session: Session,
    scheduler: Scheduler,
    bus: EventBus,
    input: Vec<GameEvent>,
}

impl GameLoop {
    pub fn new(session: Session) -> Self {
        let config = session.config();
        let scheduler = Scheduler::new(config.spawn_interval(), config.countdown_interval());
        Self {
            session,
            scheduler,
            bus: EventBus::new(),
            input: Vec::new(),
        }
    }

    /// Queue an input event for the next step
    pub fn push(&mut self, event: GameEvent) {
        self.input.push(event);
    }

    /// Let a system push events for the next step
    pub fn run_system(&mut self, system: &mut dyn RuntimeSystem, dt: Duration) {
        let mut bus = EventBus::new();
        system.update(dt, &mut bus);
        if !bus.is_empty() {
            tracing::trace!(system = system.name(), events = bus.len(), "system queued input");
        }
        self.input.extend(bus.drain());
    }

    /// Advance time by `dt` and apply everything that happened
    pub fn step(&mut self, dt: Duration) -> Vec<Outcome> {
        self.scheduler.update(dt, &mut self.bus);
        self.bus.extend(self.input.drain(..));

        let mut outcomes = Vec::with_capacity(self.bus.len());
        while let Some(event) = self.bus.pop() {
            let outcome = self.session.dispatch(event);
            match outcome {
                Outcome::Ended => self.scheduler.cancel_countdown(),
                Outcome::Reset => self.scheduler.rearm(),
                _ => {}
            }
            outcomes.push(outcome);
        }
        outcomes
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }
}
