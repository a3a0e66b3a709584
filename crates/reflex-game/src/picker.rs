//! Resolving a pointer position to the target under it

use crate::target::TargetGrid;
use reflex_core::{ReflexError, TargetId};
use std::fmt;
use std::str::FromStr;

/// A zero-based grid cell the pointer is over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub column: u32,
    pub row: u32,
}

impl Cell {
    pub fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }
}

impl fmt::Display for Cell {
    /// Letter column, one-based row: `Cell::new(1, 2)` is `b3`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.column < 26 {
            let letter = (b'a' + self.column as u8) as char;
            write!(f, "{}{}", letter, self.row + 1)
        } else {
            write!(f, "{} {}", self.column + 1, self.row + 1)
        }
    }
}

impl FromStr for Cell {
    type Err = ReflexError;

    /// Accepts `b3` (letter column, one-based row) or `2 3` (one-based column
    /// and row, separated by whitespace or a comma).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || ReflexError::InvalidInput(format!("not a grid cell: '{s}'"));

        let mut chars = s.chars();
        if let Some(first) = chars.next().filter(|c| c.is_ascii_alphabetic()) {
            let column = first.to_ascii_lowercase() as u32 - 'a' as u32;
            let row: u32 = chars.as_str().trim().parse().map_err(|_| invalid())?;
            if row == 0 {
                return Err(invalid());
            }
            return Ok(Cell::new(column, row - 1));
        }

        let parts: Vec<&str> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .collect();
        if parts.len() != 2 {
            return Err(invalid());
        }
        let column: u32 = parts[0].parse().map_err(|_| invalid())?;
        let row: u32 = parts[1].parse().map_err(|_| invalid())?;
        if column == 0 || row == 0 {
            return Err(invalid());
        }
        Ok(Cell::new(column - 1, row - 1))
    }
}

/// Turns a pointer position into a pick result.
pub trait Picker {
    fn pick(&self, grid: &TargetGrid, pointer: Cell) -> Option<TargetId>;
}

/// Picks the target occupying the pointer's cell
#[derive(Debug, Default)]
pub struct GridPicker;

impl Picker for GridPicker {
    fn pick(&self, grid: &TargetGrid, pointer: Cell) -> Option<TargetId> {
        grid.at(pointer.column, pointer.row).map(|t| t.id)
    }
}
