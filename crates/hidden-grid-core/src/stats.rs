use crate::difficulty::Difficulty;
use crate::progression::Medal;
use serde::{Deserialize, Serialize};

/// One value per difficulty, with exhaustive access by enum instead of
/// runtime map indexing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, bound(deserialize = "T: serde::Deserialize<'de> + Default"))]
pub struct PerDifficulty<T> {
    pub beginner: T,
    pub medium: T,
    pub hard: T,
}

impl<T> PerDifficulty<T> {
    pub fn get(&self, difficulty: Difficulty) -> &T {
        match difficulty {
            Difficulty::Beginner => &self.beginner,
            Difficulty::Medium => &self.medium,
            Difficulty::Hard => &self.hard,
        }
    }

    pub fn get_mut(&mut self, difficulty: Difficulty) -> &mut T {
        match difficulty {
            Difficulty::Beginner => &mut self.beginner,
            Difficulty::Medium => &mut self.medium,
            Difficulty::Hard => &mut self.hard,
        }
    }
}

/// Cumulative solve statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stats {
    pub solves_by_difficulty: PerDifficulty<u32>,
    /// Total seconds spent on solved puzzles, per difficulty.
    pub time_totals_by_difficulty: PerDifficulty<u64>,
    pub perfect_solves: u32,
    /// Fastest solve per difficulty, in seconds.
    pub best_time: PerDifficulty<Option<u64>>,
}

impl Stats {
    /// Fold one completed solve into the statistics. Returns a new snapshot.
    pub fn record_solve(
        &self,
        difficulty: Difficulty,
        seconds: u64,
        perfect: bool,
        _medal: Medal,
    ) -> Stats {
        let mut next = self.clone();
        *next.solves_by_difficulty.get_mut(difficulty) += 1;
        *next.time_totals_by_difficulty.get_mut(difficulty) += seconds;
        if perfect {
            next.perfect_solves += 1;
        }
        let best = next.best_time.get_mut(difficulty);
        if best.map_or(true, |prior| seconds < prior) {
            *best = Some(seconds);
        }
        next
    }

    /// Total solves across every difficulty.
    pub fn total_solves(&self) -> u32 {
        Difficulty::ALL
            .iter()
            .map(|&difficulty| *self.solves_by_difficulty.get(difficulty))
            .sum()
    }
}
