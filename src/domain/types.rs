/// Core types and enums used throughout the domain layer
///
/// This module defines the ID newtypes, the Category enum, and the color
/// palette lookup used by Habit and HabitLog.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a habit
///
/// This is a wrapper around UUID to provide type safety - you can't accidentally
/// pass a habit ID where a log ID is expected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HabitId(pub Uuid);

impl HabitId {
    /// Generate a new random habit ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a habit ID from a string (useful for database loading)
    pub fn from_string(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl std::fmt::Display for HabitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Unique identifier for a completion log
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LogId(pub Uuid);

impl LogId {
    /// Generate a new random log ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a log ID from a string
    pub fn from_string(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl std::fmt::Display for LogId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Identifier for the owning user
///
/// The core never interprets this; it is a precondition supplied by the
/// session layer and used to scope every store query.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Generate a new random user ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a user ID from a string
    pub fn from_string(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Categories for organizing habits into different life areas
///
/// Users pick from the fixed set in the habit form, but any free-form string
/// coming back from the store round-trips through Custom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    /// Health-related habits (exercise, diet, sleep)
    Health,
    /// Work habits (deep work, planning)
    Productivity,
    /// Studying and skill building
    Learning,
    /// Relationship and communication habits
    Social,
    /// Money management habits
    Finance,
    /// Meditation, reflection, gratitude practices
    Mindfulness,
    /// Anything that doesn't fit the above
    Other,
    /// Free-form category preserved as-is
    Custom(String),
}

impl Category {
    /// Get the display name for this category
    pub fn display_name(&self) -> &str {
        match self {
            Category::Health => "Health",
            Category::Productivity => "Productivity",
            Category::Learning => "Learning",
            Category::Social => "Social",
            Category::Finance => "Finance",
            Category::Mindfulness => "Mindfulness",
            Category::Other => "Other",
            Category::Custom(name) => name,
        }
    }

    /// Parse a category from its stored string form
    ///
    /// Total: unknown strings become Custom rather than failing, so stale
    /// rows never break a load.
    pub fn parse(s: &str) -> Self {
        match s {
            "Health" => Category::Health,
            "Productivity" => Category::Productivity,
            "Learning" => Category::Learning,
            "Social" => Category::Social,
            "Finance" => Category::Finance,
            "Mindfulness" => Category::Mindfulness,
            "Other" => Category::Other,
            other => Category::Custom(other.to_string()),
        }
    }
}

/// Resolved styling for a habit's color tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Canonical tag name, also what gets persisted
    pub tag: &'static str,
    /// ANSI color code used by the CLI renderer
    pub ansi: u8,
}

/// The enumerated color palette
const PALETTE: &[Palette] = &[
    Palette { tag: "blue", ansi: 4 },
    Palette { tag: "green", ansi: 2 },
    Palette { tag: "purple", ansi: 5 },
    Palette { tag: "red", ansi: 1 },
    Palette { tag: "yellow", ansi: 3 },
    Palette { tag: "pink", ansi: 13 },
    Palette { tag: "orange", ansi: 208 },
    Palette { tag: "teal", ansi: 6 },
];

/// Look up the palette entry for a color tag
///
/// Total function: any tag outside the enumerated set falls back to the
/// default (blue), never failing.
pub fn palette_for(tag: &str) -> &'static Palette {
    PALETTE
        .iter()
        .find(|p| p.tag == tag)
        .unwrap_or(&PALETTE[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse_round_trip() {
        for name in ["Health", "Productivity", "Learning", "Social", "Finance", "Mindfulness", "Other"] {
            let cat = Category::parse(name);
            assert_eq!(cat.display_name(), name);
            assert!(!matches!(cat, Category::Custom(_)));
        }
    }

    #[test]
    fn test_category_parse_unknown_is_custom() {
        let cat = Category::parse("Gardening");
        assert_eq!(cat, Category::Custom("Gardening".to_string()));
        assert_eq!(cat.display_name(), "Gardening");
    }

    #[test]
    fn test_palette_known_tag() {
        assert_eq!(palette_for("teal").tag, "teal");
        assert_eq!(palette_for("green").ansi, 2);
    }

    #[test]
    fn test_palette_falls_back_to_default() {
        assert_eq!(palette_for("chartreuse").tag, "blue");
        assert_eq!(palette_for("").tag, "blue");
    }
}
