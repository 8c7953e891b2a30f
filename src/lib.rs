/// Public library interface for habit-board
///
/// The core is a set of pure statistics functions over a snapshot fetched
/// from an abstract store, plus the dashboard layer that owns the snapshot
/// and the reload-after-mutation flow.

use thiserror::Error;

pub mod dashboard;
pub mod dates;
pub mod domain;
pub mod session;
pub mod stats;
pub mod store;

pub use dashboard::{Dashboard, NewHabit, Snapshot};
pub use domain::*;
pub use session::Session;
pub use stats::{current_streak, CompletionWindow, DashboardStats, ProgressSeries};
pub use store::{HabitStore, SqliteStore, StoreError};

/// Errors that can occur during application operation
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Store error: {0}")]
    Store(#[from] store::StoreError),

    #[error("Domain validation error: {0}")]
    Domain(#[from] domain::DomainError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Session error: {0}")]
    Session(String),
}
