use crate::difficulty::Difficulty;
use serde::{Deserialize, Serialize};

/// Medal tier awarded for a solve time. Ordered worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Medal {
    None,
    Bronze,
    Silver,
    Gold,
}

impl Medal {
    pub fn label(self) -> &'static str {
        match self {
            Medal::None => "none",
            Medal::Bronze => "bronze",
            Medal::Silver => "silver",
            Medal::Gold => "gold",
        }
    }
}

/// Medal for a solve at the given difficulty. Par thresholds are inclusive.
pub fn compute_medal(difficulty: Difficulty, seconds: u64) -> Medal {
    let par = difficulty.config().par_times;
    if seconds <= par.gold {
        Medal::Gold
    } else if seconds <= par.silver {
        Medal::Silver
    } else if seconds <= par.bronze {
        Medal::Bronze
    } else {
        Medal::None
    }
}

/// XP award for a completed solve.
///
/// Base is ten points per grid row, scaled by the difficulty multiplier, a
/// time bonus anchored at the silver par and clamped to [0.5, 1.5], and a
/// 25% accuracy bonus for perfect solves.
pub fn compute_xp(size: usize, difficulty: Difficulty, seconds: u64, perfect: bool) -> u32 {
    let cfg = difficulty.config();
    let base = (size * 10) as f64;
    let time_bonus = (cfg.par_times.silver as f64 / seconds.max(1) as f64).clamp(0.5, 1.5);
    let accuracy_bonus = if perfect { 1.25 } else { 1.0 };
    (base * cfg.xp_multiplier * time_bonus * accuracy_bonus).round() as u32
}

/// Total XP required to reach a level. Level 1 starts at zero.
pub fn xp_for_level(level: u32) -> u32 {
    if level <= 1 {
        0
    } else {
        (100.0 * (level as f64).powf(1.4)).round() as u32
    }
}

/// Position within the level curve for a total XP amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelInfo {
    pub level: u32,
    /// XP accumulated past the current level's threshold.
    pub into_level: u32,
    /// XP span between the current and next thresholds.
    pub next_level_xp: u32,
}

/// Largest level whose threshold does not exceed `total_xp`.
pub fn level_from_xp(total_xp: u32) -> LevelInfo {
    let mut level = 1;
    while xp_for_level(level + 1) <= total_xp {
        level += 1;
    }
    let current = xp_for_level(level);
    LevelInfo {
        level,
        into_level: total_xp - current,
        next_level_xp: xp_for_level(level + 1) - current,
    }
}

/// Player title for a level.
pub fn title_for_level(level: u32) -> &'static str {
    match level {
        level if level >= 20 => "Architect",
        level if level >= 15 => "Grid Master",
        level if level >= 10 => "Logic Adept",
        level if level >= 5 => "Pattern Solver",
        _ => "Grid Apprentice",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn medal_thresholds_are_inclusive() {
        assert_eq!(compute_medal(Difficulty::Beginner, 120), Medal::Gold);
        assert_eq!(compute_medal(Difficulty::Beginner, 121), Medal::Silver);
        assert_eq!(compute_medal(Difficulty::Beginner, 180), Medal::Silver);
        assert_eq!(compute_medal(Difficulty::Beginner, 300), Medal::Bronze);
        assert_eq!(compute_medal(Difficulty::Beginner, 301), Medal::None);
    }

    #[test]
    fn medal_is_monotonic_in_time() {
        for difficulty in Difficulty::ALL {
            let mut previous = Medal::Gold;
            for seconds in 0..700 {
                let medal = compute_medal(difficulty, seconds);
                assert!(medal <= previous, "medal improved as time grew at {seconds}s");
                previous = medal;
            }
        }
    }

    #[test]
    fn xp_for_known_solve() {
        // Beginner, 6x6, 100s, perfect: 60 * 1.0 * 1.5 * 1.25 rounds to 113.
        assert_eq!(compute_xp(6, Difficulty::Beginner, 100, true), 113);
    }

    #[test]
    fn time_bonus_clamps_both_ways() {
        // Very slow: bonus floors at 0.5.
        assert_eq!(compute_xp(6, Difficulty::Beginner, 100_000, false), 30);
        // Zero elapsed is treated as one second, capping the bonus at 1.5.
        assert_eq!(compute_xp(6, Difficulty::Beginner, 0, false), 90);
    }

    #[test]
    fn xp_scales_with_difficulty_multiplier() {
        let beginner = compute_xp(6, Difficulty::Beginner, 1_000, false);
        let hard = compute_xp(6, Difficulty::Hard, 1_000, false);
        assert!(hard > beginner);
    }

    #[test]
    fn level_thresholds() {
        assert_eq!(xp_for_level(0), 0);
        assert_eq!(xp_for_level(1), 0);
        assert_eq!(xp_for_level(2), 264);
        assert_eq!(xp_for_level(3), 466);
    }

    #[test]
    fn level_from_zero_xp() {
        let info = level_from_xp(0);
        assert_eq!(info.level, 1);
        assert_eq!(info.into_level, 0);
        assert_eq!(info.next_level_xp, xp_for_level(2));
    }

    #[test]
    fn level_boundaries() {
        assert_eq!(level_from_xp(263).level, 1);
        assert_eq!(level_from_xp(263).into_level, 263);
        let at_two = level_from_xp(264);
        assert_eq!(at_two.level, 2);
        assert_eq!(at_two.into_level, 0);
        assert_eq!(at_two.next_level_xp, xp_for_level(3) - xp_for_level(2));
    }

    #[test]
    fn level_is_monotonic_in_xp() {
        let mut previous = 0;
        for total in (0..20_000).step_by(37) {
            let level = level_from_xp(total).level;
            assert!(level >= previous);
            previous = level;
        }
    }

    #[test]
    fn titles_by_band() {
        assert_eq!(title_for_level(1), "Grid Apprentice");
        assert_eq!(title_for_level(4), "Grid Apprentice");
        assert_eq!(title_for_level(5), "Pattern Solver");
        assert_eq!(title_for_level(10), "Logic Adept");
        assert_eq!(title_for_level(15), "Grid Master");
        assert_eq!(title_for_level(20), "Architect");
        assert_eq!(title_for_level(42), "Architect");
    }
}
