/// Statistics derived from the habit set and the completion-log window
///
/// Everything here is a pure function over the snapshot: the current streak
/// per habit, the aggregate dashboard numbers, and the 7-day progress series.

pub mod series;
pub mod streak;
pub mod summary;
pub mod window;

pub use series::{ProgressPoint, ProgressSeries, SERIES_DAYS};
pub use streak::current_streak;
pub use summary::DashboardStats;
pub use window::{CompletionWindow, LOG_WINDOW_DAYS};
