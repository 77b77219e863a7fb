//! The `Task` domain model and its priority scale.

use serde::{Deserialize, Serialize};

/// Task priority. Variant order is the sort order: HIGH sorts first.
///
/// Stored in the database as the literal strings `"HIGH" | "MEDIUM" |
/// "LOW"`. Unrecognized stored values normalize to [`Priority::Low`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    /// Highest urgency.
    High,
    /// Middle of the scale.
    Medium,
    /// Lowest urgency. Default for new tasks and unknown stored values.
    #[default]
    Low,
}

impl Priority {
    /// Numeric sort rank: HIGH = 1, MEDIUM = 2, LOW = 3.
    pub fn rank(self) -> u8 {
        match self {
            Self::High => 1,
            Self::Medium => 2,
            Self::Low => 3,
        }
    }

    /// The stored string form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
        }
    }

    /// Parse a stored string. Unknown values normalize to [`Priority::Low`]
    /// rather than failing — reads from storage cannot error on priority.
    pub fn parse(value: &str) -> Self {
        match value {
            "HIGH" => Self::High,
            "MEDIUM" => Self::Medium,
            _ => Self::Low,
        }
    }
}

/// A single to-do item.
///
/// `id` is assigned by the store on insert; `0` means not yet persisted.
/// Timestamps are epoch milliseconds. `created_at` is set once at
/// construction and never changes afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Store-assigned identifier (0 = unsaved).
    pub id: i64,
    /// Short label. Non-empty for persisted tasks (enforced upstream).
    pub title: String,
    /// Free-form detail text, may be empty.
    pub description: String,
    /// Urgency, defaults to [`Priority::Low`].
    pub priority: Priority,
    /// Optional due date (epoch ms, date-only semantics).
    pub due_date: Option<i64>,
    /// Completion flag.
    pub is_completed: bool,
    /// Creation timestamp (epoch ms), immutable after construction.
    pub created_at: i64,
}

impl Task {
    /// Build a new, not-yet-persisted task stamped with the current time.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        priority: Priority,
        due_date: Option<i64>,
    ) -> Self {
        Self {
            id: 0,
            title: title.into(),
            description: description.into(),
            priority,
            due_date,
            is_completed: false,
            created_at: chrono::Utc::now().timestamp_millis(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
