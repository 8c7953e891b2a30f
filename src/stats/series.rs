/// 7-day rolling completion-percentage series
///
/// One point per day for the last seven calendar days, oldest first, ready
/// for direct rendering as a bar chart. The day count is across all habits
/// and is NOT deduplicated per habit; with the unique (habit, day) index in
/// the SQLite backend the distinction never shows up in practice.

use chrono::NaiveDate;
use serde::Serialize;

use crate::dates::{last_n_days_from, weekday_label};
use crate::domain::Habit;
use crate::stats::summary::percentage;
use crate::stats::CompletionWindow;

/// Days covered by the progress chart
pub const SERIES_DAYS: u32 = 7;

/// One bar of the progress chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressPoint {
    /// The calendar day this point covers
    pub day: NaiveDate,
    /// Abbreviated weekday name for the axis label
    pub label: &'static str,
    /// round(logs on this day / active habit count * 100); 0 with no habits
    pub percent: u32,
}

/// The full 7-day series, oldest first
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressSeries {
    pub points: Vec<ProgressPoint>,
}

impl ProgressSeries {
    /// Build the series for the seven days ending at `today`
    pub fn build(habits: &[Habit], window: &CompletionWindow, today: NaiveDate) -> Self {
        let points = last_n_days_from(today, SERIES_DAYS)
            .into_iter()
            .map(|day| ProgressPoint {
                day,
                label: weekday_label(day),
                percent: percentage(window.count_on(day), habits.len()),
            })
            .collect();

        Self { points }
    }
}
