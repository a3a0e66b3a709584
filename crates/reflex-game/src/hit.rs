//! Turning click pick results into score

use crate::board::Board;
use crate::game_state::GameState;
use crate::presenter::TargetPresenter;
use crate::status::StatusDisplay;
use reflex_core::TargetId;

/// Result of resolving one click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitOutcome {
    /// An active target was clicked and scored
    Hit(TargetId),
    /// Nothing picked, or the picked target wasn't lit
    Miss,
    /// The round is over
    Ignored,
}

#[derive(Debug, Default)]
pub struct HitResolver {
    hits: u32,
    misses: u32,
}

impl HitResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Score a click. Only a currently active target counts; clicking it a
    /// second time is a miss because the first click turned it off.
    pub fn resolve(
        &mut self,
        picked: Option<TargetId>,
        board: &mut Board,
        state: &mut GameState,
        presenter: &mut dyn TargetPresenter,
        status: &mut dyn StatusDisplay,
    ) -> HitOutcome {
        if state.is_over() {
            return HitOutcome::Ignored;
        }

        let Some(id) = picked.filter(|id| board.is_active(*id)) else {
            self.misses += 1;
            tracing::trace!(?picked, "click missed");
            return HitOutcome::Miss;
        };

        board.deactivate(id);
        state.add_point();
        self.hits += 1;
        presenter.deactivated(id);
        status.show(&state.status());
        tracing::debug!(target_id = id.raw(), score = state.score(), "target hit");
        HitOutcome::Hit(id)
    }

    pub fn hits(&self) -> u32 {
        self.hits
    }

    pub fn misses(&self) -> u32 {
        self.misses
    }

    pub(crate) fn reset_stats(&mut self) {
        self.hits = 0;
        self.misses = 0;
    }
}
