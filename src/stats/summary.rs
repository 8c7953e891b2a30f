/// Aggregate statistics for the dashboard header
///
/// Today's completion count, the completion rate, and the longest current
/// streak across all active habits. Pure function of the habit set, the log
/// window, and the given day.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::Habit;
use crate::stats::{current_streak, CompletionWindow};

/// Round-half-up percentage, 0 when the denominator is zero
pub(crate) fn percentage(count: usize, total: usize) -> u32 {
    if total == 0 {
        0
    } else {
        (count as f64 / total as f64 * 100.0).round() as u32
    }
}

/// Aggregate numbers shown at the top of the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    /// Active habits with at least one log dated today
    pub today_completed: u32,
    /// Number of active habits
    pub total_active: u32,
    /// round(today_completed / total_active * 100); 0 with no habits
    pub completion_rate: u32,
    /// Maximum current streak over all active habits; 0 with no habits
    pub longest_streak: u32,
}

impl DashboardStats {
    /// Compute the aggregates for the given day
    ///
    /// `habits` is the active set as fetched; inactive habits never reach
    /// this point because the store filters them out.
    pub fn compute(habits: &[Habit], window: &CompletionWindow, today: NaiveDate) -> Self {
        let today_completed = habits
            .iter()
            .filter(|habit| window.is_completed_on(&habit.id, today))
            .count();

        let longest_streak = habits
            .iter()
            .map(|habit| current_streak(&habit.id, window, today))
            .max()
            .unwrap_or(0);

        Self {
            today_completed: today_completed as u32,
            total_active: habits.len() as u32,
            completion_rate: percentage(today_completed, habits.len()),
            longest_streak,
        }
    }
}
