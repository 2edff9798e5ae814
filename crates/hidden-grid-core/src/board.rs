use crate::puzzle::Puzzle;
use serde::{Deserialize, Serialize};

/// Player's mark on a single cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CellState {
    #[default]
    Empty,
    Filled,
    MarkedEmpty,
}

/// The in-progress player grid for one puzzle.
///
/// Mutated only by [`Board::cycle_cell`] and [`Board::reveal_excess`]; a new
/// puzzle gets a fresh all-empty board.
#[derive(Debug, Clone)]
pub struct Board {
    size: usize,
    cells: Vec<Vec<CellState>>,
    moves: u32,
    reveals_used: u32,
}

impl Board {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![vec![CellState::Empty; size]; size],
            moves: 0,
            reveals_used: 0,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cell(&self, row: usize, col: usize) -> CellState {
        self.cells[row][col]
    }

    /// Total cell cycles made on this board.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// How many times the reveal pass has run on this board.
    pub fn reveals_used(&self) -> u32 {
        self.reveals_used
    }

    /// Rotate a cell's state and count the move.
    ///
    /// The primary action toggles empty and filled; a marked-empty cell
    /// collapses back to empty. The secondary action forces marked-empty on
    /// anything that is not already marked, and clears a marked cell back to
    /// empty; it never turns a filled cell directly into empty.
    pub fn cycle_cell(&mut self, row: usize, col: usize, secondary: bool) {
        let current = self.cells[row][col];
        let next = if secondary {
            match current {
                CellState::MarkedEmpty => CellState::Empty,
                _ => CellState::MarkedEmpty,
            }
        } else {
            match current {
                CellState::Empty => CellState::Filled,
                _ => CellState::Empty,
            }
        };
        self.cells[row][col] = next;
        self.moves += 1;
    }

    /// Clear every cell back to empty. Counters are kept.
    pub fn reset(&mut self) {
        for row in self.cells.iter_mut() {
            row.fill(CellState::Empty);
        }
    }

    /// Filled cells per row. Marked-empty cells do not count.
    pub fn row_filled(&self) -> Vec<usize> {
        self.cells
            .iter()
            .map(|row| row.iter().filter(|&&cell| cell == CellState::Filled).count())
            .collect()
    }

    /// Filled cells per column. Marked-empty cells do not count.
    pub fn col_filled(&self) -> Vec<usize> {
        (0..self.size)
            .map(|col| {
                (0..self.size)
                    .filter(|&row| self.cells[row][col] == CellState::Filled)
                    .count()
            })
            .collect()
    }

    /// Count-based solve check: every row and column filled-count equals the
    /// puzzle's clue count. A filled pattern different from the generated
    /// solution is accepted as long as all the sums agree.
    pub fn is_solved(&self, puzzle: &Puzzle) -> bool {
        self.row_filled() == puzzle.row_counts && self.col_filled() == puzzle.col_counts
    }

    /// Remove excess filled marks until no row or column exceeds its clue.
    ///
    /// Rows are corrected first in index order, unfilling the leftmost filled
    /// cells while the row exceeds its clue. Column counts are then recomputed
    /// from the row-pass result and corrected top to bottom. Marked-empty
    /// cells are never touched. Counts one reveal use; the caller enforces the
    /// reveal budget.
    pub fn reveal_excess(&mut self, puzzle: &Puzzle) {
        for row in 0..self.size {
            let need = puzzle.row_counts[row];
            let mut have = self.cells[row]
                .iter()
                .filter(|&&cell| cell == CellState::Filled)
                .count();
            for col in 0..self.size {
                if have <= need {
                    break;
                }
                if self.cells[row][col] == CellState::Filled {
                    self.cells[row][col] = CellState::Empty;
                    have -= 1;
                }
            }
        }

        for col in 0..self.size {
            let need = puzzle.col_counts[col];
            let mut have = (0..self.size)
                .filter(|&row| self.cells[row][col] == CellState::Filled)
                .count();
            for row in 0..self.size {
                if have <= need {
                    break;
                }
                if self.cells[row][col] == CellState::Filled {
                    self.cells[row][col] = CellState::Empty;
                    have -= 1;
                }
            }
        }

        self.reveals_used += 1;
    }
}
