//! Targets and the fixed grid that holds them

use reflex_core::TargetId;

/// A pickable game entity that can be activated and clicked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub id: TargetId,
    /// Zero-based grid column
    pub column: u32,
    /// Zero-based grid row
    pub row: u32,
    pub is_active: bool,
}

/// Row-major grid of targets. Built once, never resized.
///
/// Target ids equal their row-major index, so lookup by id is a slice index.
#[derive(Debug, Clone)]
pub struct TargetGrid {
    columns: u32,
    rows: u32,
    targets: Vec<Target>,
}

impl TargetGrid {
    pub fn new(columns: u32, rows: u32) -> Self {
        let mut targets = Vec::with_capacity((columns * rows) as usize);
        for row in 0..rows {
            for column in 0..columns {
                targets.push(Target {
                    id: TargetId(row * columns + column),
                    column,
                    row,
                    is_active: false,
                });
            }
        }
        Self {
            columns,
            rows,
            targets,
        }
    }

    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    pub fn get(&self, id: TargetId) -> Option<&Target> {
        self.targets.get(id.index())
    }

    pub(crate) fn get_mut(&mut self, id: TargetId) -> Option<&mut Target> {
        self.targets.get_mut(id.index())
    }

    /// Target at a grid cell, or `None` outside the grid
    pub fn at(&self, column: u32, row: u32) -> Option<&Target> {
        if column >= self.columns || row >= self.rows {
            return None;
        }
        self.targets.get((row * self.columns + column) as usize)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Target> {
        self.targets.iter()
    }

    /// Ids of every target not currently active, in id order
    pub fn inactive_ids(&self) -> Vec<TargetId> {
        self.targets
            .iter()
            .filter(|t| !t.is_active)
            .map(|t| t.id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_row_major() {
        let grid = TargetGrid::new(3, 2);
        assert_eq!(grid.len(), 6);
        let t = grid.at(1, 1).unwrap();
        assert_eq!(t.id, TargetId(4));
        assert_eq!(grid.get(TargetId(4)), Some(t));
    }

    #[test]
    fn out_of_grid_is_none() {
        let grid = TargetGrid::new(3, 2);
        assert!(grid.at(3, 0).is_none());
        assert!(grid.at(0, 2).is_none());
        assert!(grid.get(TargetId(6)).is_none());
    }

    #[test]
    fn all_start_inactive() {
        let grid = TargetGrid::new(2, 2);
        assert_eq!(grid.inactive_ids().len(), 4);
        assert!(grid.iter().all(|t| !t.is_active));
    }
}
