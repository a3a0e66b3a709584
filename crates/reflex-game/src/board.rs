//! Target grid plus the set of targets currently lit
//!
//! `Board` is the only place that flips `Target::is_active`, so the flag and
//! `ActiveSet` membership never disagree.

use crate::target::{Target, TargetGrid};
use reflex_core::TargetId;
use std::collections::BTreeSet;

/// Targets currently eligible to be hit. Never holds more than `max_active`.
#[derive(Debug, Clone)]
pub struct ActiveSet {
    members: BTreeSet<TargetId>,
    max_active: usize,
}

impl ActiveSet {
    pub fn new(max_active: usize) -> Self {
        Self {
            members: BTreeSet::new(),
            max_active,
        }
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.members.len() >= self.max_active
    }

    pub fn max_active(&self) -> usize {
        self.max_active
    }

    pub fn contains(&self, id: TargetId) -> bool {
        self.members.contains(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = TargetId> + '_ {
        self.members.iter().copied()
    }

    fn insert(&mut self, id: TargetId) -> bool {
        if self.is_full() {
            return false;
        }
        self.members.insert(id)
    }

    fn remove(&mut self, id: TargetId) -> bool {
        self.members.remove(&id)
    }

    fn clear(&mut self) {
        self.members.clear();
    }
}

#[derive(Debug, Clone)]
pub struct Board {
    grid: TargetGrid,
    active: ActiveSet,
}

impl Board {
    pub fn new(columns: u32, rows: u32, max_active: usize) -> Self {
        Self {
            grid: TargetGrid::new(columns, rows),
            active: ActiveSet::new(max_active),
        }
    }

    pub fn grid(&self) -> &TargetGrid {
        &self.grid
    }

    pub fn active(&self) -> &ActiveSet {
        &self.active
    }

    pub fn target(&self, id: TargetId) -> Option<&Target> {
        self.grid.get(id)
    }

    pub fn is_active(&self, id: TargetId) -> bool {
        self.active.contains(id)
    }

    /// Light up an inactive target. Returns false if the id is unknown, the
    /// target is already lit, or the active set is full.
    pub fn activate(&mut self, id: TargetId) -> bool {
        let Some(target) = self.grid.get_mut(id) else {
            return false;
        };
        if target.is_active || !self.active.insert(id) {
            return false;
        }
        target.is_active = true;
        true
    }

    /// Turn off a lit target. Returns false if it wasn't lit.
    pub fn deactivate(&mut self, id: TargetId) -> bool {
        let Some(target) = self.grid.get_mut(id) else {
            return false;
        };
        if !target.is_active {
            return false;
        }
        target.is_active = false;
        self.active.remove(id);
        true
    }

    /// Turn off every lit target, returning the ids that were lit
    pub fn deactivate_all(&mut self) -> Vec<TargetId> {
        let lit: Vec<TargetId> = self.active.iter().collect();
        for id in &lit {
            if let Some(target) = self.grid.get_mut(*id) {
                target.is_active = false;
            }
        }
        self.active.clear();
        lit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activate_respects_bound() {
        let mut board = Board::new(5, 2, 3);
        assert!(board.activate(TargetId(0)));
        assert!(board.activate(TargetId(1)));
        assert!(board.activate(TargetId(2)));
        assert!(board.active().is_full());
        assert!(!board.activate(TargetId(3)));
        assert_eq!(board.active().len(), 3);
        assert!(!board.target(TargetId(3)).unwrap().is_active);
    }

    #[test]
    fn activate_twice_is_rejected() {
        let mut board = Board::new(2, 2, 3);
        assert!(board.activate(TargetId(1)));
        assert!(!board.activate(TargetId(1)));
        assert_eq!(board.active().len(), 1);
    }

    #[test]
    fn unknown_target_is_rejected() {
        let mut board = Board::new(2, 2, 3);
        assert!(!board.activate(TargetId(9)));
        assert!(!board.deactivate(TargetId(9)));
    }

    #[test]
    fn flag_and_membership_agree() {
        let mut board = Board::new(3, 3, 3);
        board.activate(TargetId(5));
        assert!(board.is_active(TargetId(5)));
        assert!(board.target(TargetId(5)).unwrap().is_active);

        assert!(board.deactivate(TargetId(5)));
        assert!(!board.is_active(TargetId(5)));
        assert!(!board.target(TargetId(5)).unwrap().is_active);
        assert!(!board.deactivate(TargetId(5)));
    }

    #[test]
    fn deactivate_all_clears() {
        let mut board = Board::new(3, 3, 3);
        board.activate(TargetId(0));
        board.activate(TargetId(8));
        let lit = board.deactivate_all();
        assert_eq!(lit, vec![TargetId(0), TargetId(8)]);
        assert!(board.active().is_empty());
        assert_eq!(board.grid().inactive_ids().len(), 9);
    }
}
