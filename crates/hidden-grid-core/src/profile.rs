use crate::achievements::Achievements;
use crate::difficulty::Difficulty;
use crate::progression::Medal;
use crate::stats::Stats;
use crate::streak::Streak;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Counters for medals earned across all solves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MedalTally {
    pub bronze: u32,
    pub silver: u32,
    pub gold: u32,
}

impl MedalTally {
    /// Count a newly earned medal. `Medal::None` is not counted.
    pub fn add(&mut self, medal: Medal) {
        match medal {
            Medal::Bronze => self.bronze += 1,
            Medal::Silver => self.silver += 1,
            Medal::Gold => self.gold += 1,
            Medal::None => {}
        }
    }
}

/// Color theme preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeKind {
    #[default]
    Dark,
    Light,
}

/// Player-adjustable settings carried in the profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub difficulty: Difficulty,
    pub theme: ThemeKind,
    pub show_timer: bool,
    pub sound: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Beginner,
            theme: ThemeKind::Dark,
            show_timer: true,
            sound: true,
        }
    }
}

/// The whole persisted player profile.
///
/// Every field and nested struct has a serde default, so profiles written by
/// older versions deserialize cleanly with missing fields falling back one by
/// one rather than failing the whole document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerProfile {
    pub xp: u32,
    pub total_solved: u32,
    pub medals: MedalTally,
    pub settings: Settings,
    pub streak: Streak,
    pub achievements: Achievements,
    pub stats: Stats,
    pub last_daily_bonus_date: Option<NaiveDate>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::achievements::AchievementId;

    #[test]
    fn default_profile_round_trips_through_json() {
        let profile = PlayerProfile::default();
        let json = serde_json::to_string(&profile).unwrap();
        let back: PlayerProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, profile);
    }

    #[test]
    fn partial_profile_merges_with_defaults() {
        let back: PlayerProfile =
            serde_json::from_str(r#"{"xp": 50, "settings": {"difficulty": "hard"}}"#).unwrap();
        assert_eq!(back.xp, 50);
        assert_eq!(back.settings.difficulty, Difficulty::Hard);
        // Missing fields, including those inside partial nested objects,
        // fall back to their defaults.
        assert!(back.settings.show_timer);
        assert_eq!(back.total_solved, 0);
        assert_eq!(back.streak, Streak::default());
        assert!(!back.achievements.is_unlocked(AchievementId::Sampler));
    }

    #[test]
    fn malformed_json_is_an_error_not_a_panic() {
        assert!(serde_json::from_str::<PlayerProfile>("{ not json").is_err());
    }

    #[test]
    fn medal_tally_ignores_none() {
        let mut tally = MedalTally::default();
        tally.add(Medal::Gold);
        tally.add(Medal::Gold);
        tally.add(Medal::Bronze);
        tally.add(Medal::None);
        assert_eq!(tally, MedalTally { bronze: 1, silver: 0, gold: 2 });
    }
}
