/// Storage layer for persisting habit data
///
/// The application core talks to an abstract async store; the bundled
/// SQLite implementation is the reference backend, but anything that can
/// list, insert, update, and delete habits and logs satisfies the trait.

pub mod migrations;
pub mod sqlite;

pub use sqlite::SqliteStore;

use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::{Habit, HabitId, HabitLog, HabitPatch, LogId, UserId};

/// Errors that can occur during store operations
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::QueryReturnedNoRows => StoreError::NotFound("no matching row".to_string()),
            other => StoreError::Unavailable(other.to_string()),
        }
    }
}

impl From<crate::domain::DomainError> for StoreError {
    fn from(err: crate::domain::DomainError) -> Self {
        StoreError::Validation(err.to_string())
    }
}

/// Abstract contract with the remote store
///
/// Every query is scoped to an owner; no operation is meaningful without a
/// resolved user identity. Failed mutations leave the backend untouched.
#[async_trait]
pub trait HabitStore: Send + Sync {
    /// Active habits for the owner, newest first
    async fn list_habits(&self, owner: &UserId) -> Result<Vec<Habit>, StoreError>;

    /// Completion logs for the owner dated `since` or later
    async fn list_logs(&self, owner: &UserId, since: NaiveDate) -> Result<Vec<HabitLog>, StoreError>;

    /// Insert a new habit
    async fn insert_habit(&self, habit: &Habit) -> Result<(), StoreError>;

    /// Apply a partial update to an existing habit
    async fn update_habit(&self, id: &HabitId, patch: &HabitPatch) -> Result<(), StoreError>;

    /// Insert a completion log
    async fn insert_log(&self, log: &HabitLog) -> Result<(), StoreError>;

    /// Hard-delete a completion log
    async fn delete_log(&self, id: &LogId) -> Result<(), StoreError>;
}
