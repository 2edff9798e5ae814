use crate::difficulty::Difficulty;
use crate::rng::SeededRng;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A generated puzzle: the hidden solution plus the per-line clue counts
/// shown to the player. Immutable once generated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    /// The seed string the puzzle was generated from.
    pub id: String,
    pub size: usize,
    pub solution: Vec<Vec<bool>>,
    pub row_counts: Vec<usize>,
    pub col_counts: Vec<usize>,
}

impl Puzzle {
    /// Generate a puzzle from a seed string.
    ///
    /// Identical `(seed, size, density)` always produce an identical puzzle.
    /// Each cell is filled iff the next draw is below `density`, row-major.
    /// Rows that come out entirely empty are repaired with one forced cell
    /// each, then columns likewise, consuming extra draws in that order, so
    /// every line of the solution keeps at least one filled cell.
    pub fn generate(seed: &str, size: usize, density: f64) -> Self {
        let mut rng = SeededRng::from_str_seed(seed);

        let mut solution: Vec<Vec<bool>> = (0..size)
            .map(|_| (0..size).map(|_| rng.next_f64() < density).collect())
            .collect();

        for row in solution.iter_mut() {
            if row.iter().all(|&cell| !cell) {
                let col = rng.next_index(size);
                row[col] = true;
            }
        }
        for col in 0..size {
            if (0..size).all(|row| !solution[row][col]) {
                let row = rng.next_index(size);
                solution[row][col] = true;
            }
        }

        let row_counts = solution
            .iter()
            .map(|row| row.iter().filter(|&&cell| cell).count())
            .collect();
        let col_counts = (0..size)
            .map(|col| (0..size).filter(|&row| solution[row][col]).count())
            .collect();

        log::debug!("generated {size}x{size} puzzle from seed {seed:?}");

        Self {
            id: seed.to_string(),
            size,
            solution,
            row_counts,
            col_counts,
        }
    }

    /// Generate the puzzle for a difficulty using its configured size and density.
    pub fn for_difficulty(seed: &str, difficulty: Difficulty) -> Self {
        let cfg = difficulty.config();
        Self::generate(seed, cfg.size, cfg.density)
    }
}

/// Seed string for a given day's daily puzzle.
pub fn daily_seed(date: NaiveDate, difficulty: Difficulty) -> String {
    format!("daily-{}-{}", date.format("%Y-%m-%d"), difficulty)
}

/// Seed string for a practice puzzle built from a random token.
pub fn practice_seed(token: &str, difficulty: Difficulty) -> String {
    format!("practice-{token}-{difficulty}")
}

/// Whether a seed denotes a daily puzzle. The literal prefix is the only
/// signal; anything else is treated as practice.
pub fn is_daily_seed(seed: &str) -> bool {
    seed.starts_with("daily-")
}
