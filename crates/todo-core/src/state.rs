//! Filter, sort order, and the UI state snapshot for the task list.

use serde::{Deserialize, Serialize};

use crate::task::Task;

/// Which completion slice of the task list is shown. Exactly one is
/// active at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    /// Every task regardless of completion.
    #[default]
    All,
    /// Tasks with `is_completed = false`.
    Active,
    /// Tasks with `is_completed = true`.
    Completed,
}

/// How the visible task list is ordered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SortOrder {
    /// Newest first — the store's native ordering.
    #[default]
    CreationDate,
    /// Due date ascending; tasks without a due date sort last.
    DueDate,
    /// HIGH, then MEDIUM, then LOW; ties keep their prior order.
    Priority,
}

/// Snapshot of list-screen state observed by the presentation layer.
///
/// `recently_deleted_task` holds at most one pending-undo task: set on
/// delete (replacing any previous staging), cleared on undo, explicit
/// dismissal, or the next delete.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskUiState {
    /// Active completion filter.
    pub filter: TaskStatus,
    /// Active sort order.
    pub sort_order: SortOrder,
    /// Task staged for undo after a delete, if any.
    pub recently_deleted_task: Option<Task>,
    /// True while the live query for a new filter/sort is being set up.
    pub is_loading: bool,
    /// Last storage failure, for UI display. Cleared by the next
    /// successful mutation.
    pub error_message: Option<String>,
}

impl Default for TaskUiState {
    fn default() -> Self {
        Self {
            filter: TaskStatus::All,
            sort_order: SortOrder::CreationDate,
            recently_deleted_task: None,
            is_loading: false,
            error_message: None,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_shows_all_newest_first() {
        let state = TaskUiState::default();
        assert_eq!(state.filter, TaskStatus::All);
        assert_eq!(state.sort_order, SortOrder::CreationDate);
        assert!(state.recently_deleted_task.is_none());
        assert!(!state.is_loading);
        assert!(state.error_message.is_none());
    }

    #[test]
    fn filter_serializes_as_screaming_snake() {
        assert_eq!(
            serde_json::to_string(&TaskStatus::Active).unwrap(),
            "\"ACTIVE\""
        );
        assert_eq!(
            serde_json::to_string(&SortOrder::DueDate).unwrap(),
            "\"DUE_DATE\""
        );
    }
}
