/// Habit entity and related functionality
///
/// This module defines the core Habit struct that represents a recurring
/// behavior the user wants to track, along with validation and the patch
/// type used for partial updates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Category, DomainError, HabitId, UserId};

/// A habit represents something the user wants to do regularly
///
/// This is the core entity in the system. Only active habits participate in
/// streak and statistics computation; deleting a habit flips is_active rather
/// than removing the row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Habit {
    /// Unique identifier for this habit
    pub id: HabitId,
    /// User who owns this habit
    pub owner: UserId,
    /// Display name (e.g., "Morning Exercise")
    pub title: String,
    /// Optional detailed description
    pub description: Option<String>,
    /// Category for organization (health, productivity, etc.)
    pub category: Category,
    /// Free-form frequency text (e.g., "daily"); not interpreted by the core
    pub target_frequency: String,
    /// Color tag, resolved through the palette with a default fallback
    pub color: String,
    /// Icon tag, free-form
    pub icon: String,
    /// When this habit was created
    pub created_at: DateTime<Utc>,
    /// When this habit was last edited
    pub updated_at: DateTime<Utc>,
    /// Whether this habit is currently active (logical delete flag)
    pub is_active: bool,
}

impl Habit {
    /// Create a new habit with validation
    pub fn new(
        owner: UserId,
        title: String,
        description: Option<String>,
        category: Category,
        target_frequency: String,
        color: String,
        icon: String,
    ) -> Result<Self, DomainError> {
        Self::validate_title(&title)?;
        Self::validate_description(&description)?;

        let now = Utc::now();
        Ok(Self {
            id: HabitId::new(),
            owner,
            title,
            description,
            category,
            target_frequency,
            color,
            icon,
            created_at: now,
            updated_at: now,
            is_active: true,
        })
    }

    /// Create a habit from existing data (used when loading from the store)
    ///
    /// This constructor assumes data is already validated and is mainly used
    /// by the storage layer when loading habits from the database.
    pub fn from_existing(
        id: HabitId,
        owner: UserId,
        title: String,
        description: Option<String>,
        category: Category,
        target_frequency: String,
        color: String,
        icon: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        is_active: bool,
    ) -> Self {
        Self {
            id,
            owner,
            title,
            description,
            category,
            target_frequency,
            color,
            icon,
            created_at,
            updated_at,
            is_active,
        }
    }

    /// Validate habit title according to business rules
    fn validate_title(title: &str) -> Result<(), DomainError> {
        let trimmed = title.trim();

        if trimmed.is_empty() {
            return Err(DomainError::InvalidTitle(
                "Habit title cannot be empty".to_string(),
            ));
        }

        if trimmed.len() > 100 {
            return Err(DomainError::InvalidTitle(
                "Habit title cannot be longer than 100 characters".to_string(),
            ));
        }

        Ok(())
    }

    /// Validate optional description
    fn validate_description(description: &Option<String>) -> Result<(), DomainError> {
        if let Some(desc) = description {
            if desc.len() > 500 {
                return Err(DomainError::Validation {
                    message: "Description cannot be longer than 500 characters".to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Partial update for a habit
///
/// Edits replace title/description/category/color/icon (and the frequency
/// text); fields left as None keep their current value. The store applies
/// whatever is present and bumps updated_at.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HabitPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub category: Option<Category>,
    pub target_frequency: Option<String>,
    pub color: Option<String>,
    pub icon: Option<String>,
    pub is_active: Option<bool>,
}

impl HabitPatch {
    /// Validate the fields that are present
    pub fn validate(&self) -> Result<(), DomainError> {
        if let Some(ref title) = self.title {
            Habit::validate_title(title)?;
        }
        if let Some(ref description) = self.description {
            Habit::validate_description(description)?;
        }
        Ok(())
    }

    /// True when no field would change
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.target_frequency.is_none()
            && self.color.is_none()
            && self.icon.is_none()
            && self.is_active.is_none()
    }
}
