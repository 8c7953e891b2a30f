/// Current-streak calculation
///
/// The streak is the number of consecutive calendar days with a completion,
/// ending at and including today. A habit completed every day except today
/// has a streak of 0 - the walk anchors at today by definition, it does not
/// find the most recent unbroken run.

use chrono::NaiveDate;

use crate::dates::days_before;
use crate::domain::HabitId;
use crate::stats::CompletionWindow;

/// Consecutive-day streak for one habit, ending at `today`
///
/// Pure function of the log window and the given day: collect the habit's
/// completion days, dedupe, sort newest first, then walk - the i-th most
/// recent distinct day must be exactly i days before today. The first
/// mismatch stops the walk.
pub fn current_streak(habit_id: &HabitId, window: &CompletionWindow, today: NaiveDate) -> u32 {
    let mut days: Vec<NaiveDate> = window
        .records_for(habit_id)
        .map(|log| log.completed_on)
        .collect();

    days.sort_unstable_by(|a, b| b.cmp(a));
    days.dedup();

    let mut streak = 0;
    for (i, day) in days.iter().enumerate() {
        if *day == days_before(today, i as u32) {
            streak += 1;
        } else {
            break;
        }
    }

    streak
}
