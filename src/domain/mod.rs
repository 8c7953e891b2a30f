/// Domain module containing core entities and data types
///
/// This module defines the core entities (Habit, HabitLog) and their
/// validation rules, along with the ID newtypes, categories, and the
/// color palette.

pub mod habit;
pub mod log;
pub mod types;

// Re-export public types for easy access
pub use habit::*;
pub use log::*;
pub use types::*;

use thiserror::Error;

/// Errors that can occur during domain operations
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Invalid habit title: {0}")]
    InvalidTitle(String),
}
