//! Core engine for Hidden Grid, a nonogram-style logic puzzle with session
//! progression.
//!
//! Everything here is pure and deterministic: puzzle generation is
//! reproducible from a seed string, solve detection and the reveal pass are
//! functions of the board and puzzle alone, and the progression pipeline
//! consumes a profile snapshot and returns a new one. All I/O (persistence,
//! clock reads, terminal) lives in the front-end crates.

pub mod achievements;
pub mod board;
pub mod difficulty;
pub mod profile;
pub mod progression;
pub mod puzzle;
pub mod rng;
pub mod solve;
pub mod stats;
pub mod streak;

pub use achievements::{AchievementEntry, AchievementId, Achievements, SolveSnapshot};
pub use board::{Board, CellState};
pub use difficulty::{Difficulty, DifficultyConfig, ParTimes};
pub use profile::{MedalTally, PlayerProfile, Settings, ThemeKind};
pub use progression::{
    compute_medal, compute_xp, level_from_xp, title_for_level, xp_for_level, LevelInfo, Medal,
};
pub use puzzle::{daily_seed, is_daily_seed, practice_seed, Puzzle};
pub use rng::SeededRng;
pub use solve::{apply_solve, SolveContext, SolveOutcome, DAILY_BONUS_XP};
pub use stats::{PerDifficulty, Stats};
pub use streak::Streak;
