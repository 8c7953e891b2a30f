/// HabitLog entity for tracking habit completions
///
/// A HabitLog is evidence that a habit was performed on a specific calendar
/// day. The day is a plain local date, not a timestamp - one log per habit
/// per day is the invariant, maintained by toggle logic and enforced by the
/// SQLite backend's unique index.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, HabitId, LogId, UserId};

/// A record of completing a habit on a specific calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitLog {
    /// Unique identifier for this log
    pub id: LogId,
    /// Which habit this log is for
    pub habit_id: HabitId,
    /// User who owns this log
    pub owner: UserId,
    /// Which calendar day this completion was for
    pub completed_on: NaiveDate,
    /// User's notes about this completion
    pub notes: Option<String>,
    /// When this log was created
    pub created_at: DateTime<Utc>,
}

impl HabitLog {
    /// Create a new completion log with validation
    pub fn new(
        habit_id: HabitId,
        owner: UserId,
        completed_on: NaiveDate,
        notes: Option<String>,
    ) -> Result<Self, DomainError> {
        Self::validate_notes(&notes)?;

        Ok(Self {
            id: LogId::new(),
            habit_id,
            owner,
            completed_on,
            notes,
            created_at: Utc::now(),
        })
    }

    /// Create a log from existing data (used when loading from the store)
    pub fn from_existing(
        id: LogId,
        habit_id: HabitId,
        owner: UserId,
        completed_on: NaiveDate,
        notes: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            habit_id,
            owner,
            completed_on,
            notes,
            created_at,
        }
    }

    /// Validate the optional notes field
    fn validate_notes(notes: &Option<String>) -> Result<(), DomainError> {
        if let Some(text) = notes {
            if text.len() > 500 {
                return Err(DomainError::Validation {
                    message: "Notes cannot be longer than 500 characters".to_string(),
                });
            }
        }
        Ok(())
    }
}
