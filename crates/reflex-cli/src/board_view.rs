//! Text rendering of the target grid

use reflex_core::TargetId;
use reflex_game::{Board, Cell, TargetPresenter};

const LIT: char = '#';
const DARK: char = '.';

/// Render the grid with letter columns and one-based rows
pub fn render(board: &Board) -> String {
    let grid = board.grid();
    let mut out = String::from("   ");
    for column in 0..grid.columns() {
        let label = if column < 26 { (b'a' + column as u8) as char } else { '?' };
        out.push(' ');
        out.push(label);
    }
    out.push('\n');

    for row in 0..grid.rows() {
        out.push_str(&format!("{:>3}", row + 1));
        for column in 0..grid.columns() {
            let lit = grid.at(column, row).map(|t| t.is_active).unwrap_or(false);
            out.push(' ');
            out.push(if lit { LIT } else { DARK });
        }
        out.push('\n');
    }
    out
}

/// Reports activation changes in the log, by cell name
pub struct TracePresenter {
    columns: u32,
}

impl TracePresenter {
    pub fn new(columns: u32) -> Self {
        Self { columns }
    }

    fn cell(&self, id: TargetId) -> Cell {
        Cell::new(id.raw() % self.columns, id.raw() / self.columns)
    }
}

impl TargetPresenter for TracePresenter {
    fn activated(&mut self, id: TargetId) {
        tracing::debug!("lit {}", self.cell(id));
    }

    fn deactivated(&mut self, id: TargetId) {
        tracing::debug!("cleared {}", self.cell(id));
    }
}
