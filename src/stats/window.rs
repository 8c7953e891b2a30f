/// In-memory view over the fetched completion logs
///
/// The store hands back the current user's logs filtered to the trailing
/// 30-day window; this wraps them and answers the point queries the streak
/// and statistics code needs. Read-only - a missing or empty fetch just
/// degrades to empty results.

use chrono::NaiveDate;

use crate::domain::{HabitId, HabitLog};

/// How far back the log fetch reaches, in calendar days (inclusive)
pub const LOG_WINDOW_DAYS: u32 = 30;

/// Read-only view of completion logs for the current user
#[derive(Debug, Clone, Default)]
pub struct CompletionWindow {
    logs: Vec<HabitLog>,
}

impl CompletionWindow {
    /// Wrap a fetched set of logs
    pub fn new(logs: Vec<HabitLog>) -> Self {
        Self { logs }
    }

    /// True iff a log exists for that habit on that exact day
    pub fn is_completed_on(&self, habit_id: &HabitId, day: NaiveDate) -> bool {
        self.logs
            .iter()
            .any(|log| &log.habit_id == habit_id && log.completed_on == day)
    }

    /// The log for that habit on that day, if any
    ///
    /// The toggle path uses this to find the row to hard-delete.
    pub fn find_on(&self, habit_id: &HabitId, day: NaiveDate) -> Option<&HabitLog> {
        self.logs
            .iter()
            .find(|log| &log.habit_id == habit_id && log.completed_on == day)
    }

    /// All logs belonging to a habit, in arbitrary order (caller sorts)
    pub fn records_for<'a>(
        &'a self,
        habit_id: &'a HabitId,
    ) -> impl Iterator<Item = &'a HabitLog> {
        self.logs.iter().filter(move |log| &log.habit_id == habit_id)
    }

    /// Count of logs across ALL habits dated exactly that day
    ///
    /// Not deduplicated per habit; the series builder depends on that.
    pub fn count_on(&self, day: NaiveDate) -> usize {
        self.logs.iter().filter(|log| log.completed_on == day).count()
    }

    /// Total number of logs in the window
    pub fn len(&self) -> usize {
        self.logs.len()
    }

    /// True when the window holds no logs
    pub fn is_empty(&self) -> bool {
        self.logs.is_empty()
    }
}
