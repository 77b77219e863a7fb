//! Error types for the application layer.

use thiserror::Error;
use todo_store::StoreError;

/// Errors surfaced by the repository and list state controller.
#[derive(Debug, Error)]
pub enum TaskListError {
    /// The operation was rejected before any write (e.g. a blank title).
    #[error("validation error: {0}")]
    Validation(String),

    /// The underlying store failed; no partial state was left behind.
    #[error(transparent)]
    Store(#[from] StoreError),
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_display() {
        let err = TaskListError::Validation("task title must not be blank".into());
        assert!(err.to_string().contains("blank"));
    }
}
