use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Consecutive-day solve streak. Dates compare date-only; time of day never
/// enters the calculation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Streak {
    pub current: u32,
    pub best: u32,
    pub last_solved_date: Option<NaiveDate>,
}

impl Streak {
    /// The streak after a solve on `today`.
    ///
    /// No prior date starts a run of one. A whole-day difference of zero or
    /// less (same-day re-solve, or a clock that moved backwards) leaves the
    /// counts unchanged. Exactly one day extends the run; any longer gap
    /// restarts it at one. The best count never decreases and the last-solved
    /// date always moves to `today`.
    pub fn advanced(&self, today: NaiveDate) -> Streak {
        let current = match self.last_solved_date {
            None => 1,
            Some(last) => {
                let days = today.signed_duration_since(last).num_days();
                if days <= 0 {
                    self.current
                } else if days == 1 {
                    self.current + 1
                } else {
                    1
                }
            }
        };
        Streak {
            current,
            best: self.best.max(current),
            last_solved_date: Some(today),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn first_solve_starts_a_run() {
        let streak = Streak::default().advanced(day(2024, 1, 1));
        assert_eq!(streak.current, 1);
        assert_eq!(streak.best, 1);
        assert_eq!(streak.last_solved_date, Some(day(2024, 1, 1)));
    }

    #[test]
    fn same_day_resolve_is_idempotent() {
        let streak = Streak::default().advanced(day(2024, 1, 1));
        let again = streak.advanced(day(2024, 1, 1));
        assert_eq!(again, streak);
    }

    #[test]
    fn consecutive_day_extends_by_one() {
        let streak = Streak::default()
            .advanced(day(2024, 1, 1))
            .advanced(day(2024, 1, 2))
            .advanced(day(2024, 1, 3));
        assert_eq!(streak.current, 3);
        assert_eq!(streak.best, 3);
    }

    #[test]
    fn gap_resets_current_but_preserves_best() {
        let streak = Streak {
            current: 5,
            best: 5,
            last_solved_date: Some(day(2024, 1, 5)),
        };
        let after = streak.advanced(day(2024, 1, 8));
        assert_eq!(after.current, 1);
        assert_eq!(after.best, 5);
        assert_eq!(after.last_solved_date, Some(day(2024, 1, 8)));
    }

    #[test]
    fn month_boundary_still_counts_as_consecutive() {
        let streak = Streak {
            current: 2,
            best: 2,
            last_solved_date: Some(day(2024, 1, 31)),
        };
        assert_eq!(streak.advanced(day(2024, 2, 1)).current, 3);
    }

    #[test]
    fn backwards_clock_keeps_counts_and_moves_date() {
        let streak = Streak {
            current: 4,
            best: 6,
            last_solved_date: Some(day(2024, 1, 10)),
        };
        let after = streak.advanced(day(2024, 1, 8));
        assert_eq!(after.current, 4);
        assert_eq!(after.best, 6);
        assert_eq!(after.last_solved_date, Some(day(2024, 1, 8)));
    }
}
