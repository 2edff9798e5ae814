use crate::difficulty::Difficulty;
use crate::progression::Medal;
use crate::stats::PerDifficulty;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Badge identifiers.
///
/// Conditions live on the variant, so the evaluator is a plain scan over
/// [`AchievementId::ALL`]; adding a badge means adding a variant and its
/// condition, never touching the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AchievementId {
    /// Earn a gold medal.
    FirstGold,
    /// Solve any puzzle in two minutes or less.
    FastThinker,
    /// Reach a seven-day streak.
    WeekWarrior,
    /// Solve at least one puzzle on every difficulty.
    Sampler,
}

impl AchievementId {
    pub const ALL: [AchievementId; 4] = [
        AchievementId::FirstGold,
        AchievementId::FastThinker,
        AchievementId::WeekWarrior,
        AchievementId::Sampler,
    ];

    /// Stable identifier used as the storage key.
    pub fn key(self) -> &'static str {
        match self {
            AchievementId::FirstGold => "first_gold",
            AchievementId::FastThinker => "fast_thinker",
            AchievementId::WeekWarrior => "week_warrior",
            AchievementId::Sampler => "sampler",
        }
    }

    /// Display name for the badge.
    pub fn name(self) -> &'static str {
        match self {
            AchievementId::FirstGold => "First Gold",
            AchievementId::FastThinker => "Fast Thinker",
            AchievementId::WeekWarrior => "Week Warrior",
            AchievementId::Sampler => "Sampler",
        }
    }

    /// Unlock condition for this badge.
    fn qualifies(self, snapshot: &SolveSnapshot<'_>) -> bool {
        match self {
            AchievementId::FirstGold => snapshot.medal == Medal::Gold,
            AchievementId::FastThinker => snapshot.seconds <= 120,
            AchievementId::WeekWarrior => snapshot.current_streak >= 7,
            AchievementId::Sampler => Difficulty::ALL
                .iter()
                .all(|&difficulty| *snapshot.solves_by_difficulty.get(difficulty) > 0),
        }
    }
}

/// Post-solve state an unlock condition can inspect. Streak and stats are the
/// already-updated values for the solve being evaluated.
#[derive(Debug, Clone, Copy)]
pub struct SolveSnapshot<'a> {
    pub difficulty: Difficulty,
    pub seconds: u64,
    pub medal: Medal,
    pub perfect: bool,
    pub date: NaiveDate,
    pub current_streak: u32,
    pub solves_by_difficulty: &'a PerDifficulty<u32>,
}

/// Unlock record for a single badge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementEntry {
    pub unlocked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

/// Unlock state for every badge, keyed by the stable badge id. Unknown keys
/// from other versions survive a load/save round trip untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Achievements {
    entries: HashMap<String, AchievementEntry>,
}

impl Default for Achievements {
    fn default() -> Self {
        let entries = AchievementId::ALL
            .iter()
            .map(|id| (id.key().to_string(), AchievementEntry::default()))
            .collect();
        Self { entries }
    }
}

impl Achievements {
    pub fn is_unlocked(&self, id: AchievementId) -> bool {
        self.entries.get(id.key()).is_some_and(|entry| entry.unlocked)
    }

    pub fn unlock_date(&self, id: AchievementId) -> Option<NaiveDate> {
        self.entries.get(id.key()).and_then(|entry| entry.date)
    }

    /// Scan every badge against the solve snapshot.
    ///
    /// Unlocking is monotonic and idempotent: an unlocked badge stays
    /// unlocked, and a badge already unlocked before the call is never
    /// reported in `newly_unlocked` again.
    pub fn evaluate(&self, snapshot: &SolveSnapshot<'_>) -> (Achievements, Vec<AchievementId>) {
        let mut updated = self.clone();
        let mut newly_unlocked = Vec::new();
        for id in AchievementId::ALL {
            if !updated.is_unlocked(id) && id.qualifies(snapshot) {
                updated.entries.insert(
                    id.key().to_string(),
                    AchievementEntry {
                        unlocked: true,
                        date: Some(snapshot.date),
                    },
                );
                newly_unlocked.push(id);
            }
        }
        (updated, newly_unlocked)
    }
}
