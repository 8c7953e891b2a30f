/// Dashboard state and the reload-after-mutation flow
///
/// The dashboard holds a transient snapshot of the user's habits and their
/// trailing completion-log window. Every mutation goes to the store first
/// and is followed by a full reload; nothing is patched incrementally. A
/// failed store call leaves the current snapshot untouched and returns the
/// error to the caller only.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};

use crate::dates;
use crate::domain::{Category, Habit, HabitId, HabitLog, HabitPatch, UserId};
use crate::stats::{
    current_streak, CompletionWindow, DashboardStats, ProgressSeries, LOG_WINDOW_DAYS,
};
use crate::store::{HabitStore, StoreError};

/// Fields the user fills in when creating a habit
#[derive(Debug, Clone)]
pub struct NewHabit {
    pub title: String,
    pub description: Option<String>,
    pub category: Category,
    pub target_frequency: String,
    pub color: String,
    pub icon: String,
}

/// One consistent view of the store, replaced wholesale by each reload
///
/// Habits and logs always come from the same pair of fetches; readers never
/// see habits from a newer fetch than the logs or vice versa.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub habits: Vec<Habit>,
    pub window: CompletionWindow,
    pub fetched_at: Option<DateTime<Utc>>,
}

/// The application core: a store handle, an owner, and the latest snapshot
pub struct Dashboard {
    store: Arc<dyn HabitStore>,
    owner: UserId,
    snapshot: Snapshot,
}

impl Dashboard {
    /// Create a dashboard with an empty snapshot; call reload to populate it
    pub fn new(store: Arc<dyn HabitStore>, owner: UserId) -> Self {
        Self {
            store,
            owner,
            snapshot: Snapshot::default(),
        }
    }

    /// Fetch habits and logs concurrently and swap in the new snapshot
    ///
    /// The two fetches are dispatched together and the snapshot is replaced
    /// only after both complete. On error the old snapshot stays.
    pub async fn reload(&mut self) -> Result<(), StoreError> {
        let since = dates::days_before(dates::today(), LOG_WINDOW_DAYS);

        let (habits, logs) = tokio::try_join!(
            self.store.list_habits(&self.owner),
            self.store.list_logs(&self.owner, since),
        )?;

        tracing::debug!(habits = habits.len(), logs = logs.len(), "snapshot reloaded");

        self.snapshot = Snapshot {
            habits,
            window: CompletionWindow::new(logs),
            fetched_at: Some(Utc::now()),
        };

        Ok(())
    }

    /// The active habits as of the last reload, newest first
    pub fn habits(&self) -> &[Habit] {
        &self.snapshot.habits
    }

    /// The completion-log window as of the last reload
    pub fn window(&self) -> &CompletionWindow {
        &self.snapshot.window
    }

    /// The owner this dashboard is scoped to
    pub fn owner(&self) -> &UserId {
        &self.owner
    }

    /// Aggregate numbers for the dashboard header
    pub fn stats(&self) -> DashboardStats {
        DashboardStats::compute(&self.snapshot.habits, &self.snapshot.window, dates::today())
    }

    /// The 7-day progress series
    pub fn progress(&self) -> ProgressSeries {
        ProgressSeries::build(&self.snapshot.habits, &self.snapshot.window, dates::today())
    }

    /// Current streak for one habit
    pub fn streak_for(&self, habit_id: &HabitId) -> u32 {
        current_streak(habit_id, &self.snapshot.window, dates::today())
    }

    /// Whether the habit has a completion log for today
    pub fn is_completed_today(&self, habit_id: &HabitId) -> bool {
        self.snapshot
            .window
            .is_completed_on(habit_id, dates::today())
    }

    /// Create a habit, then reload
    pub async fn add_habit(&mut self, new: NewHabit) -> Result<HabitId, StoreError> {
        let habit = Habit::new(
            self.owner.clone(),
            new.title,
            new.description,
            new.category,
            new.target_frequency,
            new.color,
            new.icon,
        )?;
        let id = habit.id.clone();

        self.store.insert_habit(&habit).await?;
        self.reload().await?;
        Ok(id)
    }

    /// Apply a partial edit to a habit, then reload
    pub async fn edit_habit(&mut self, id: &HabitId, patch: HabitPatch) -> Result<(), StoreError> {
        self.store.update_habit(id, &patch).await?;
        self.reload().await
    }

    /// Logically delete a habit by flipping is_active, then reload
    ///
    /// The row and its logs stay in the store; the habit just stops
    /// participating in statistics.
    pub async fn archive_habit(&mut self, id: &HabitId) -> Result<(), StoreError> {
        let patch = HabitPatch {
            is_active: Some(false),
            ..Default::default()
        };
        self.store.update_habit(id, &patch).await?;
        self.reload().await
    }

    /// Toggle today's completion for a habit, then reload
    ///
    /// Returns the new completion state. Marking inserts a log for today;
    /// un-marking hard-deletes the existing one. Toggling twice returns the
    /// log to its original state.
    pub async fn toggle_today(&mut self, habit_id: &HabitId) -> Result<bool, StoreError> {
        self.toggle_on(habit_id, dates::today()).await
    }

    /// Toggle the completion for a habit on a specific day, then reload
    pub async fn toggle_on(
        &mut self,
        habit_id: &HabitId,
        day: NaiveDate,
    ) -> Result<bool, StoreError> {
        let existing = self
            .snapshot
            .window
            .find_on(habit_id, day)
            .map(|log| log.id.clone());

        match existing {
            Some(log_id) => {
                self.store.delete_log(&log_id).await?;
                self.reload().await?;
                Ok(false)
            }
            None => {
                let log = HabitLog::new(habit_id.clone(), self.owner.clone(), day, None)?;
                self.store.insert_log(&log).await?;
                self.reload().await?;
                Ok(true)
            }
        }
    }

    /// Find a habit in the snapshot by a unique ID prefix
    ///
    /// Lets the CLI accept shortened UUIDs. Ambiguous or unknown prefixes
    /// resolve to None.
    pub fn find_by_prefix(&self, prefix: &str) -> Option<&Habit> {
        let mut matches = self
            .snapshot
            .habits
            .iter()
            .filter(|h| h.id.to_string().starts_with(prefix));

        match (matches.next(), matches.next()) {
            (Some(habit), None) => Some(habit),
            _ => None,
        }
    }
}
