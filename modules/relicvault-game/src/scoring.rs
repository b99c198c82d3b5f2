use chrono::NaiveDate;

use relicvault_common::GameProgress;

/// Fixed reward per correct solve, granted at most once per day.
pub const SOLVE_REWARD: u64 = 100;

/// Streak value after a solve on `today`, given the previous state.
///
/// gap 1 day → extend; longer → reset to 1; same day → unchanged;
/// no prior solve → start at 1.
pub fn next_streak(previous: u32, last_solved: Option<NaiveDate>, today: NaiveDate) -> u32 {
    let Some(last) = last_solved else {
        return 1;
    };
    let gap = (today - last).num_days();
    if gap == 1 {
        previous + 1
    } else if gap > 1 {
        1
    } else {
        previous
    }
}

/// Whether progress already records a solve for `today`.
pub fn solved_today(progress: &GameProgress, today: NaiveDate) -> bool {
    progress.last_solved_date == Some(today)
}

/// Apply a correct solve to the progress record. Returns false without
/// mutating anything when today is already solved (a non-positive day gap
/// also counts as solved — a clock running backwards must not farm score).
pub fn record_solve(progress: &mut GameProgress, artifact_id: &str, today: NaiveDate) -> bool {
    if let Some(last) = progress.last_solved_date {
        if (today - last).num_days() <= 0 {
            return false;
        }
    }

    progress.streak = next_streak(progress.streak, progress.last_solved_date, today);
    progress.score += SOLVE_REWARD;
    progress.last_solved_date = Some(today);
    progress.artifacts_collected.insert(artifact_id.to_string());
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn first_solve_starts_streak_at_one() {
        let mut progress = GameProgress::default();
        assert!(record_solve(&mut progress, "7szmue", day(2025, 6, 10)));
        assert_eq!(progress.streak, 1);
        assert_eq!(progress.score, 100);
        assert_eq!(progress.last_solved_date, Some(day(2025, 6, 10)));
        assert!(progress.artifacts_collected.contains("7szmue"));
    }

    #[test]
    fn consecutive_day_extends_streak() {
        let mut progress = GameProgress {
            streak: 3,
            score: 300,
            last_solved_date: Some(day(2025, 6, 9)),
            ..Default::default()
        };
        assert!(record_solve(&mut progress, "7c5293", day(2025, 6, 10)));
        assert_eq!(progress.streak, 4);
        assert_eq!(progress.score, 400);
    }

    #[test]
    fn missed_days_reset_streak_to_one() {
        let mut progress = GameProgress {
            streak: 7,
            score: 700,
            last_solved_date: Some(day(2025, 6, 7)),
            ..Default::default()
        };
        assert!(record_solve(&mut progress, "7c5293", day(2025, 6, 10)));
        assert_eq!(progress.streak, 1);
        assert_eq!(progress.score, 800);
    }

    #[test]
    fn same_day_solve_changes_nothing() {
        let mut progress = GameProgress {
            streak: 4,
            score: 400,
            last_solved_date: Some(day(2025, 6, 10)),
            ..Default::default()
        };
        let before = progress.clone();
        assert!(!record_solve(&mut progress, "7c5293", day(2025, 6, 10)));
        assert_eq!(progress, before);
    }

    #[test]
    fn backwards_clock_changes_nothing() {
        let mut progress = GameProgress {
            streak: 4,
            score: 400,
            last_solved_date: Some(day(2025, 6, 10)),
            ..Default::default()
        };
        let before = progress.clone();
        assert!(!record_solve(&mut progress, "7c5293", day(2025, 6, 8)));
        assert_eq!(progress, before);
    }

    #[test]
    fn streak_table_matches_policy() {
        let today = day(2025, 6, 10);
        assert_eq!(next_streak(5, None, today), 1);
        assert_eq!(next_streak(5, Some(day(2025, 6, 10)), today), 5);
        assert_eq!(next_streak(5, Some(day(2025, 6, 9)), today), 6);
        assert_eq!(next_streak(5, Some(day(2025, 6, 7)), today), 1);
    }

    #[test]
    fn solved_today_tracks_the_date() {
        let progress = GameProgress {
            last_solved_date: Some(day(2025, 6, 10)),
            ..Default::default()
        };
        assert!(solved_today(&progress, day(2025, 6, 10)));
        assert!(!solved_today(&progress, day(2025, 6, 11)));
        assert!(!solved_today(&GameProgress::default(), day(2025, 6, 10)));
    }
}
