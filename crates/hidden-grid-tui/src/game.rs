use hidden_grid_core::{Board, CellState, Difficulty, Puzzle};
use rand::distributions::Alphanumeric;
use rand::Rng;
use std::time::{Duration, Instant};

/// Play mode for the current puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Daily,
    Practice,
}

/// One puzzle being played: board, timer, reveal budget.
///
/// Starting a new session discards the old board entirely; there is no
/// carry-over between puzzles.
pub struct GameSession {
    puzzle: Puzzle,
    board: Board,
    difficulty: Difficulty,
    mode: Mode,
    /// Start of the running timer segment
    start_time: Instant,
    /// Accumulated time from before the current segment
    elapsed: Duration,
    paused: bool,
    solved: bool,
}

impl GameSession {
    pub fn new(seed: &str, difficulty: Difficulty, mode: Mode) -> Self {
        let puzzle = Puzzle::for_difficulty(seed, difficulty);
        let board = Board::new(puzzle.size);
        Self {
            puzzle,
            board,
            difficulty,
            mode,
            start_time: Instant::now(),
            elapsed: Duration::ZERO,
            paused: false,
            solved: false,
        }
    }

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn seed(&self) -> &str {
        &self.puzzle.id
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_solved(&self) -> bool {
        self.solved
    }

    pub fn moves(&self) -> u32 {
        self.board.moves()
    }

    /// Elapsed play time. Recomputed on demand from the start instant, so
    /// reads are idempotent; the value freezes once solved or paused.
    pub fn elapsed(&self) -> Duration {
        if self.paused || self.solved {
            self.elapsed
        } else {
            self.elapsed + self.start_time.elapsed()
        }
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed().as_secs()
    }

    pub fn toggle_pause(&mut self) {
        if self.solved {
            return;
        }
        if self.paused {
            self.start_time = Instant::now();
        } else {
            self.elapsed += self.start_time.elapsed();
        }
        self.paused = !self.paused;
    }

    /// Cycle a cell and re-check the solve predicate.
    pub fn cycle_cell(&mut self, row: usize, col: usize, secondary: bool) {
        if self.solved || self.paused {
            return;
        }
        self.board.cycle_cell(row, col, secondary);
        self.check_solved();
    }

    /// Clear the board back to all-empty.
    pub fn reset_board(&mut self) {
        if self.solved || self.paused {
            return;
        }
        self.board.reset();
    }

    /// Reveals remaining under the difficulty's budget, `None` for unlimited.
    pub fn reveals_left(&self) -> Option<u32> {
        let allowed = self.difficulty.config().reveals_allowed;
        if allowed < 0 {
            None
        } else {
            Some((allowed as u32).saturating_sub(self.board.reveals_used()))
        }
    }

    /// Run the correction pass if budget remains. Returns false when the
    /// budget is exhausted (the board is untouched in that case).
    pub fn reveal(&mut self) -> bool {
        if self.solved || self.paused {
            return false;
        }
        if self.reveals_left() == Some(0) {
            return false;
        }
        self.board.reveal_excess(&self.puzzle);
        self.check_solved();
        true
    }

    /// Whether the line counts currently match for a row (for clue coloring).
    pub fn row_satisfied(&self, row: usize) -> bool {
        self.board.row_filled()[row] == self.puzzle.row_counts[row]
    }

    pub fn col_satisfied(&self, col: usize) -> bool {
        self.board.col_filled()[col] == self.puzzle.col_counts[col]
    }

    pub fn cell(&self, row: usize, col: usize) -> CellState {
        self.board.cell(row, col)
    }

    fn check_solved(&mut self) {
        if !self.solved && self.board.is_solved(&self.puzzle) {
            self.solved = true;
            self.elapsed += self.start_time.elapsed();
        }
    }
}

/// Random eight-character token for practice seeds.
pub fn practice_token() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(8)
        .map(|byte| (byte as char).to_ascii_lowercase())
        .collect()
}

/// Format seconds as MM:SS or HH:MM:SS.
pub fn format_time(secs: u64) -> String {
    if secs >= 3600 {
        let hours = secs / 3600;
        let mins = (secs % 3600) / 60;
        let secs = secs % 60;
        format!("{}:{:02}:{:02}", hours, mins, secs)
    } else {
        let mins = secs / 60;
        let secs = secs % 60;
        format!("{:02}:{:02}", mins, secs)
    }
}
