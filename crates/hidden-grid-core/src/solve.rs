use crate::achievements::{AchievementId, SolveSnapshot};
use crate::difficulty::Difficulty;
use crate::profile::PlayerProfile;
use crate::progression::{self, Medal};
use crate::puzzle;
use chrono::NaiveDate;

/// Flat XP bonus for the first daily solve of a calendar day.
pub const DAILY_BONUS_XP: u32 = 25;

/// Everything the progression pipeline needs to know about a completed solve.
#[derive(Debug, Clone)]
pub struct SolveContext {
    /// Seed of the solved puzzle; the `daily-` prefix selects daily treatment.
    pub seed: String,
    pub difficulty: Difficulty,
    pub seconds: u64,
    /// Whether the solve finished without unresolved mistakes. The current
    /// shell tracks no penalties and always passes true, but the pipeline
    /// honors whatever the caller reports.
    pub perfect: bool,
    pub today: NaiveDate,
}

/// What a solve earned, for the completion screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveOutcome {
    pub seconds: u64,
    pub medal: Medal,
    /// Total XP granted, daily bonus included.
    pub gained_xp: u32,
    /// Bonus portion of `gained_xp`, present when this was the first daily
    /// solve of the day.
    pub daily_bonus: Option<u32>,
    /// `(from, to)` when the award crossed a level threshold.
    pub level_up: Option<(u32, u32)>,
    pub newly_unlocked: Vec<AchievementId>,
}

/// Run the full progression pipeline for one completed solve.
///
/// Pure: consumes a profile snapshot and returns the updated snapshot plus an
/// outcome summary; the caller persists the result. Daily seeds advance the
/// streak and may earn the once-per-day bonus; practice seeds touch neither.
/// Achievements are evaluated against the post-streak, post-stats state.
pub fn apply_solve(profile: &PlayerProfile, ctx: &SolveContext) -> (PlayerProfile, SolveOutcome) {
    let cfg = ctx.difficulty.config();
    let medal = progression::compute_medal(ctx.difficulty, ctx.seconds);
    let award = progression::compute_xp(cfg.size, ctx.difficulty, ctx.seconds, ctx.perfect);

    let mut next = profile.clone();

    let mut daily_bonus = None;
    if puzzle::is_daily_seed(&ctx.seed) {
        next.streak = next.streak.advanced(ctx.today);
        if next.last_daily_bonus_date != Some(ctx.today) {
            daily_bonus = Some(DAILY_BONUS_XP);
            next.last_daily_bonus_date = Some(ctx.today);
        }
    }

    next.stats = next.stats.record_solve(ctx.difficulty, ctx.seconds, ctx.perfect, medal);

    let snapshot = SolveSnapshot {
        difficulty: ctx.difficulty,
        seconds: ctx.seconds,
        medal,
        perfect: ctx.perfect,
        date: ctx.today,
        current_streak: next.streak.current,
        solves_by_difficulty: &next.stats.solves_by_difficulty,
    };
    let (achievements, newly_unlocked) = next.achievements.evaluate(&snapshot);
    next.achievements = achievements;

    let gained_xp = award + daily_bonus.unwrap_or(0);
    let before = progression::level_from_xp(next.xp);
    next.xp = next.xp.saturating_add(gained_xp);
    next.total_solved += 1;
    next.medals.add(medal);
    let after = progression::level_from_xp(next.xp);
    let level_up = (after.level > before.level).then_some((before.level, after.level));

    log::debug!(
        "solve recorded: seed={} difficulty={} seconds={} medal={} xp=+{}",
        ctx.seed,
        ctx.difficulty,
        ctx.seconds,
        medal.label(),
        gained_xp
    );

    (
        next,
        SolveOutcome {
            seconds: ctx.seconds,
            medal,
            gained_xp,
            daily_bonus,
            level_up,
            newly_unlocked,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn daily_ctx(seconds: u64) -> SolveContext {
        SolveContext {
            seed: "daily-2024-01-01-beginner".to_string(),
            difficulty: Difficulty::Beginner,
            seconds,
            perfect: true,
            today: day(2024, 1, 1),
        }
    }

    #[test]
    fn first_daily_solve_grants_the_bonus() {
        let (next, outcome) = apply_solve(&PlayerProfile::default(), &daily_ctx(100));
        assert_eq!(outcome.medal, Medal::Gold);
        assert_eq!(outcome.daily_bonus, Some(DAILY_BONUS_XP));
        // 113 award for a perfect 100s beginner solve, plus the bonus.
        assert_eq!(outcome.gained_xp, 138);
        assert_eq!(next.xp, 138);
        assert_eq!(next.total_solved, 1);
        assert_eq!(next.medals.gold, 1);
        assert_eq!(next.streak.current, 1);
        assert_eq!(next.last_daily_bonus_date, Some(day(2024, 1, 1)));
    }

    #[test]
    fn second_daily_solve_same_day_gets_no_bonus() {
        let (first, _) = apply_solve(&PlayerProfile::default(), &daily_ctx(100));
        let (second, outcome) = apply_solve(&first, &daily_ctx(400));
        assert_eq!(outcome.daily_bonus, None);
        assert_eq!(outcome.medal, Medal::None);
        // Streak is idempotent for a same-day re-solve.
        assert_eq!(second.streak.current, 1);
        assert_eq!(second.total_solved, 2);
        assert_eq!(second.medals.gold, 1);
    }

    #[test]
    fn practice_solves_never_touch_streak_or_bonus() {
        let ctx = SolveContext {
            seed: "practice-a1b2c3d4-beginner".to_string(),
            ..daily_ctx(100)
        };
        let (next, outcome) = apply_solve(&PlayerProfile::default(), &ctx);
        assert_eq!(outcome.daily_bonus, None);
        assert_eq!(next.streak.current, 0);
        assert_eq!(next.streak.last_solved_date, None);
        assert_eq!(next.last_daily_bonus_date, None);
        // XP and stats still accrue.
        assert_eq!(next.xp, 113);
        assert_eq!(next.stats.solves_by_difficulty.beginner, 1);
    }

    #[test]
    fn level_up_reports_before_and_after() {
        let profile = PlayerProfile { xp: 250, ..Default::default() };
        // 113 + 25 pushes past the 264 threshold for level 2.
        let (next, outcome) = apply_solve(&profile, &daily_ctx(100));
        assert_eq!(next.xp, 388);
        assert_eq!(outcome.level_up, Some((1, 2)));
    }

    #[test]
    fn no_level_up_within_a_level() {
        let (_, outcome) = apply_solve(&PlayerProfile::default(), &daily_ctx(100));
        assert_eq!(outcome.level_up, None);
    }

    #[test]
    fn achievements_see_the_updated_streak_and_stats() {
        let profile = PlayerProfile {
            streak: crate::Streak {
                current: 6,
                best: 6,
                last_solved_date: Some(day(2023, 12, 31)),
            },
            ..Default::default()
        };
        let (next, outcome) = apply_solve(&profile, &daily_ctx(100));
        // The streak reached 7 during this solve; the evaluator saw it.
        assert_eq!(next.streak.current, 7);
        assert!(outcome.newly_unlocked.contains(&AchievementId::WeekWarrior));
        assert!(outcome.newly_unlocked.contains(&AchievementId::FirstGold));
        assert!(outcome.newly_unlocked.contains(&AchievementId::FastThinker));
    }

    #[test]
    fn sampler_unlocks_through_the_pipeline() {
        let mut profile = PlayerProfile::default();
        for (seed, difficulty) in [
            ("practice-aaaaaaaa-beginner", Difficulty::Beginner),
            ("practice-bbbbbbbb-medium", Difficulty::Medium),
        ] {
            let ctx = SolveContext {
                seed: seed.to_string(),
                difficulty,
                seconds: 500,
                perfect: true,
                today: day(2024, 1, 1),
            };
            profile = apply_solve(&profile, &ctx).0;
        }
        assert!(!profile.achievements.is_unlocked(AchievementId::Sampler));

        let ctx = SolveContext {
            seed: "practice-cccccccc-hard".to_string(),
            difficulty: Difficulty::Hard,
            seconds: 500,
            perfect: true,
            today: day(2024, 1, 1),
        };
        let (profile, outcome) = apply_solve(&profile, &ctx);
        assert!(profile.achievements.is_unlocked(AchievementId::Sampler));
        assert!(outcome.newly_unlocked.contains(&AchievementId::Sampler));
    }

    #[test]
    fn next_day_daily_extends_streak_and_grants_bonus() {
        let (first, _) = apply_solve(&PlayerProfile::default(), &daily_ctx(100));
        let ctx = SolveContext {
            seed: "daily-2024-01-02-beginner".to_string(),
            today: day(2024, 1, 2),
            ..daily_ctx(100)
        };
        let (second, outcome) = apply_solve(&first, &ctx);
        assert_eq!(second.streak.current, 2);
        assert_eq!(outcome.daily_bonus, Some(DAILY_BONUS_XP));
    }
}
