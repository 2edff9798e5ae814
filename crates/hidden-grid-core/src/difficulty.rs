use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Puzzle difficulty level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Beginner,
    Medium,
    Hard,
}

/// Medal par times in seconds. Thresholds are inclusive, gold < silver < bronze.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParTimes {
    pub bronze: u64,
    pub silver: u64,
    pub gold: u64,
}

/// Static generation and scoring parameters for one difficulty.
#[derive(Debug, Clone, Copy)]
pub struct DifficultyConfig {
    /// Grid side length.
    pub size: usize,
    /// Probability that a generated cell is filled.
    pub density: f64,
    /// Reveal budget per puzzle, -1 for unlimited.
    pub reveals_allowed: i32,
    pub par_times: ParTimes,
    /// Multiplier applied to the base XP award.
    pub xp_multiplier: f64,
}

const BEGINNER: DifficultyConfig = DifficultyConfig {
    size: 6,
    density: 0.45,
    reveals_allowed: -1,
    par_times: ParTimes { bronze: 300, silver: 180, gold: 120 },
    xp_multiplier: 1.0,
};

const MEDIUM: DifficultyConfig = DifficultyConfig {
    size: 8,
    density: 0.50,
    reveals_allowed: 1,
    par_times: ParTimes { bronze: 420, silver: 300, gold: 180 },
    xp_multiplier: 1.5,
};

const HARD: DifficultyConfig = DifficultyConfig {
    size: 10,
    density: 0.55,
    reveals_allowed: 0,
    par_times: ParTimes { bronze: 540, silver: 420, gold: 300 },
    xp_multiplier: 2.0,
};

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Beginner, Difficulty::Medium, Difficulty::Hard];

    /// Static configuration for this difficulty.
    pub fn config(self) -> &'static DifficultyConfig {
        match self {
            Difficulty::Beginner => &BEGINNER,
            Difficulty::Medium => &MEDIUM,
            Difficulty::Hard => &HARD,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        f.pad(name)
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "beginner" => Ok(Difficulty::Beginner),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn par_times_ascend_with_difficulty() {
        for difficulty in Difficulty::ALL {
            let par = difficulty.config().par_times;
            assert!(par.gold < par.silver);
            assert!(par.silver < par.bronze);
        }
        assert!(BEGINNER.par_times.gold < MEDIUM.par_times.gold);
        assert!(MEDIUM.par_times.gold < HARD.par_times.gold);
    }

    #[test]
    fn display_and_parse_round_trip() {
        for difficulty in Difficulty::ALL {
            assert_eq!(difficulty.to_string().parse::<Difficulty>(), Ok(difficulty));
        }
        assert!("extreme".parse::<Difficulty>().is_err());
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&Difficulty::Medium).unwrap();
        assert_eq!(json, "\"medium\"");
    }
}
