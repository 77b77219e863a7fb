//! Raw database row structs and their domain conversions.

use todo_core::{Priority, Task};

/// One row of the `tasks` table, exactly as stored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskRow {
    /// Rowid assigned by SQLite (ignored on insert).
    pub id: i64,
    /// Task title.
    pub title: String,
    /// Task description, may be empty.
    pub description: String,
    /// Priority as the stored literal string.
    pub priority: String,
    /// Optional due date in epoch milliseconds.
    pub due_date: Option<i64>,
    /// Completion flag.
    pub is_completed: bool,
    /// Creation timestamp in epoch milliseconds.
    pub created_at: i64,
}

impl TaskRow {
    /// Map a rusqlite row in column order
    /// `(id, title, description, priority, dueDate, isCompleted, createdAt)`.
    pub fn from_sql_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            title: row.get(1)?,
            description: row.get(2)?,
            priority: row.get(3)?,
            due_date: row.get(4)?,
            is_completed: row.get(5)?,
            created_at: row.get(6)?,
        })
    }

    /// Convert to the domain model. Pure and infallible: unknown
    /// priority strings normalize to [`Priority::Low`].
    pub fn into_task(self) -> Task {
        Task {
            id: self.id,
            title: self.title,
            description: self.description,
            priority: Priority::parse(&self.priority),
            due_date: self.due_date,
            is_completed: self.is_completed,
            created_at: self.created_at,
        }
    }

    /// Build a row from the domain model. Pure and infallible.
    pub fn from_task(task: &Task) -> Self {
        Self {
            id: task.id,
            title: task.title.clone(),
            description: task.description.clone(),
            priority: task.priority.as_str().to_string(),
            due_date: task.due_date,
            is_completed: task.is_completed,
            created_at: task.created_at,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> TaskRow {
        TaskRow {
            id: 7,
            title: "File taxes".into(),
            description: "before the deadline".into(),
            priority: "HIGH".into(),
            due_date: Some(86_400_000),
            is_completed: false,
            created_at: 1_000,
        }
    }

    #[test]
    fn row_to_task_and_back_preserves_fields() {
        let row = sample_row();
        let task = row.clone().into_task();
        assert_eq!(task.priority, Priority::High);
        assert_eq!(TaskRow::from_task(&task), row);
    }

    #[test]
    fn unknown_priority_normalizes_to_low() {
        let mut row = sample_row();
        row.priority = "URGENT".into();
        assert_eq!(row.into_task().priority, Priority::Low);
    }

    #[test]
    fn null_due_date_survives_mapping() {
        let mut row = sample_row();
        row.due_date = None;
        let task = row.into_task();
        assert!(task.due_date.is_none());
        assert!(TaskRow::from_task(&task).due_date.is_none());
    }
}
