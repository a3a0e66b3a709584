//! Periodic activation of random inactive targets

use crate::board::Board;
use crate::game_state::GameState;
use crate::presenter::TargetPresenter;
use crate::random::RandomSource;
use reflex_core::TargetId;

/// Lights one random inactive target per tick while below `max_active`.
pub struct Spawner {
    rng: Box<dyn RandomSource>,
    spawns: u32,
}

impl Spawner {
    pub fn new(rng: Box<dyn RandomSource>) -> Self {
        Self { rng, spawns: 0 }
    }

    /// Activate one target chosen uniformly among the inactive ones.
    ///
    /// No-op (returns `None`) when the round is over, the active set is
    /// full, or every target is already lit.
    pub fn tick(
        &mut self,
        board: &mut Board,
        state: &GameState,
        presenter: &mut dyn TargetPresenter,
    ) -> Option<TargetId> {
        if state.is_over() {
            return None;
        }
        if board.active().is_full() {
            tracing::trace!("spawn skipped: {} targets active", board.active().len());
            return None;
        }

        let inactive = board.grid().inactive_ids();
        if inactive.is_empty() {
            tracing::trace!("spawn skipped: no inactive targets");
            return None;
        }

        let id = *inactive.get(self.rng.pick_index(inactive.len()))?;
        if !board.activate(id) {
            return None;
        }
        self.spawns += 1;
        presenter.activated(id);
        tracing::debug!(target_id = id.raw(), active = board.active().len(), "target activated");
        Some(id)
    }

    /// Total activations since the spawner was created
    pub fn spawns(&self) -> u32 {
        self.spawns
    }

    pub(crate) fn reset_stats(&mut self) {
        self.spawns = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presenter::NullPresenter;
    use crate::random::{SeededRandom, SequenceRandom};

    #[test]
    fn saturates_at_max_active() {
        let mut board = Board::new(5, 2, 3);
        let state = GameState::new(30);
        let mut spawner = Spawner::new(Box::new(SeededRandom::new(Some(1))));

        for _ in 0..3 {
            assert!(spawner.tick(&mut board, &state, &mut NullPresenter).is_some());
        }
        assert_eq!(board.active().len(), 3);

        assert!(spawner.tick(&mut board, &state, &mut NullPresenter).is_none());
        assert_eq!(board.active().len(), 3);
        assert_eq!(spawner.spawns(), 3);
    }

    #[test]
    fn picks_among_inactive_only() {
        let mut board = Board::new(2, 2, 4);
        let state = GameState::new(30);
        // Index 0 every time: always the lowest inactive id
        let mut spawner = Spawner::new(Box::new(SequenceRandom::new(vec![0])));

        let picked: Vec<TargetId> = (0..4)
            .filter_map(|_| spawner.tick(&mut board, &state, &mut NullPresenter))
            .collect();
        assert_eq!(picked, vec![TargetId(0), TargetId(1), TargetId(2), TargetId(3)]);

        // Nothing left to light
        assert!(spawner.tick(&mut board, &state, &mut NullPresenter).is_none());
    }

    #[test]
    fn no_spawn_after_game_over() {
        let mut board = Board::new(4, 4, 3);
        let mut state = GameState::new(1);
        state.count_down();
        let mut spawner = Spawner::new(Box::new(SeededRandom::new(Some(3))));

        assert!(spawner.tick(&mut board, &state, &mut NullPresenter).is_none());
        assert!(board.active().is_empty());
    }

    #[test]
    fn seeded_spawns_are_reproducible() {
        let run = |seed| {
            let mut board = Board::new(4, 4, 16);
            let state = GameState::new(30);
            let mut spawner = Spawner::new(Box::new(SeededRandom::new(Some(seed))));
            (0..10)
                .filter_map(|_| spawner.tick(&mut board, &state, &mut NullPresenter))
                .collect::<Vec<_>>()
        };
        assert_eq!(run(11), run(11));
    }
}
