//! Scripted player for headless runs

use crate::random::RandomSource;
use crate::session::Outcome;
use reflex_core::TargetId;
use reflex_runtime::{EventBus, GameEvent, RuntimeSystem};
use std::time::Duration;

/// Clicks each activated target after a fixed reaction time.
///
/// With probability `accuracy` the click lands on the target; otherwise it
/// picks nothing. Feed it the outcomes of every step with
/// [`AutoPlayer::observe`] so it learns which targets lit up.
pub struct AutoPlayer {
    reaction: Duration,
    accuracy: f64,
    rng: Box<dyn RandomSource>,
    pending: Vec<(TargetId, Duration)>,
}

impl AutoPlayer {
    pub fn new(reaction: Duration, accuracy: f64, rng: Box<dyn RandomSource>) -> Self {
        Self {
            reaction,
            accuracy: accuracy.clamp(0.0, 1.0),
            rng,
            pending: Vec::new(),
        }
    }

    pub fn observe(&mut self, outcomes: &[Outcome]) {
        for outcome in outcomes {
            match outcome {
                Outcome::Activated(id) => self.pending.push((*id, self.reaction)),
                Outcome::Ended | Outcome::Reset => self.pending.clear(),
                _ => {}
            }
        }
    }

    /// Targets still waiting for a click
    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}

impl RuntimeSystem for AutoPlayer {
    fn update(&mut self, dt: Duration, bus: &mut EventBus) {
        let mut due = Vec::new();
        self.pending.retain_mut(|(id, remaining)| {
            *remaining = remaining.saturating_sub(dt);
            if remaining.is_zero() {
                due.push(*id);
                false
            } else {
                true
            }
        });

        for id in due {
            let picked = (self.rng.unit() < self.accuracy).then_some(id);
            bus.push(GameEvent::Click(picked));
        }
    }

    fn name(&self) -> &str {
        "autoplayer"
    }
}
