//! Task repository — CRUD and list queries for the `tasks` table.
//!
//! The repository is stateless; every method takes `&Connection`.
//! The `id` column is assigned by SQLite on insert and ignored when a
//! caller passes a row in.

use rusqlite::{Connection, OptionalExtension, params};

use crate::errors::Result;
use crate::sqlite::row_types::TaskRow;

/// Columns in the order [`TaskRow::from_sql_row`] expects.
const COLUMNS: &str = "id, title, description, priority, dueDate, isCompleted, createdAt";

/// The fixed catalog of continuously-updating list queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TaskQuery {
    /// Every task, newest first.
    All,
    /// Incomplete tasks, newest first.
    Active,
    /// Completed tasks, newest first.
    Completed,
    /// Every task by due date ascending, NULL due dates last.
    ByDueDate,
    /// Every task by priority HIGH → MEDIUM → LOW, unknown strings last.
    ByPriority,
}

/// Task repository — stateless, every method takes `&Connection`.
pub struct TaskRepo;

impl TaskRepo {
    /// Insert a new task and return its assigned id. `row.id` is ignored.
    pub fn insert(conn: &Connection, row: &TaskRow) -> Result<i64> {
        let _ = conn.execute(
            "INSERT INTO tasks (title, description, priority, dueDate, isCompleted, createdAt)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                row.title,
                row.description,
                row.priority,
                row.due_date,
                row.is_completed,
                row.created_at
            ],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Rewrite every column of an existing task. Returns `true` if a
    /// row was updated.
    pub fn update(conn: &Connection, row: &TaskRow) -> Result<bool> {
        let changed = conn.execute(
            "UPDATE tasks
             SET title = ?1, description = ?2, priority = ?3,
                 dueDate = ?4, isCompleted = ?5, createdAt = ?6
             WHERE id = ?7",
            params![
                row.title,
                row.description,
                row.priority,
                row.due_date,
                row.is_completed,
                row.created_at,
                row.id
            ],
        )?;
        Ok(changed > 0)
    }

    /// Delete a task by id. Returns `true` if a row was deleted.
    pub fn delete(conn: &Connection, id: i64) -> Result<bool> {
        let changed = conn.execute("DELETE FROM tasks WHERE id = ?1", params![id])?;
        Ok(changed > 0)
    }

    /// Point lookup by id. Absent rows are `None`, never an error.
    pub fn get_by_id(conn: &Connection, id: i64) -> Result<Option<TaskRow>> {
        let row = conn
            .query_row(
                &format!("SELECT {COLUMNS} FROM tasks WHERE id = ?1"),
                params![id],
                TaskRow::from_sql_row,
            )
            .optional()?;
        Ok(row)
    }

    /// Set only the completion flag. Returns `true` if a row was updated.
    pub fn set_completed(conn: &Connection, id: i64, completed: bool) -> Result<bool> {
        let changed = conn.execute(
            "UPDATE tasks SET isCompleted = ?1 WHERE id = ?2",
            params![completed, id],
        )?;
        Ok(changed > 0)
    }

    /// Run one of the list queries and return the full ordered result set.
    pub fn list(conn: &Connection, query: TaskQuery) -> Result<Vec<TaskRow>> {
        let sql = match query {
            TaskQuery::All => {
                format!("SELECT {COLUMNS} FROM tasks ORDER BY createdAt DESC, id DESC")
            }
            TaskQuery::Active => format!(
                "SELECT {COLUMNS} FROM tasks WHERE isCompleted = 0 \
                 ORDER BY createdAt DESC, id DESC"
            ),
            TaskQuery::Completed => format!(
                "SELECT {COLUMNS} FROM tasks WHERE isCompleted = 1 \
                 ORDER BY createdAt DESC, id DESC"
            ),
            TaskQuery::ByDueDate => format!(
                "SELECT {COLUMNS} FROM tasks \
                 ORDER BY CASE WHEN dueDate IS NULL THEN 1 ELSE 0 END, dueDate ASC, id ASC"
            ),
            TaskQuery::ByPriority => format!(
                "SELECT {COLUMNS} FROM tasks \
                 ORDER BY CASE priority \
                   WHEN 'HIGH' THEN 1 \
                   WHEN 'MEDIUM' THEN 2 \
                   WHEN 'LOW' THEN 3 \
                   ELSE 4 END, id ASC"
            ),
        };

        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
            .query_map([], TaskRow::from_sql_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    /// Count all tasks.
    pub fn count(conn: &Connection) -> Result<i64> {
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM tasks", [], |row| row.get(0))?;
        Ok(count)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
#[allow(unused_results)]
mod tests {
    use super::*;
    use crate::sqlite::migrations::run_migrations;

    fn setup() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        run_migrations(&conn).unwrap();
        conn
    }

    fn row(title: &str, priority: &str, due_date: Option<i64>, created_at: i64) -> TaskRow {
        TaskRow {
            id: 0,
            title: title.into(),
            description: String::new(),
            priority: priority.into(),
            due_date,
            is_completed: false,
            created_at,
        }
    }

    fn titles(rows: &[TaskRow]) -> Vec<&str> {
        rows.iter().map(|r| r.title.as_str()).collect()
    }

    #[test]
    fn insert_then_get_preserves_fields() {
        let conn = setup();
        let input = TaskRow {
            id: 0,
            title: "Buy milk".into(),
            description: "2%".into(),
            priority: "MEDIUM".into(),
            due_date: Some(86_400_000),
            is_completed: false,
            created_at: 1_000,
        };
        let id = TaskRepo::insert(&conn, &input).unwrap();
        assert!(id > 0);

        let fetched = TaskRepo::get_by_id(&conn, id).unwrap().unwrap();
        assert_eq!(fetched, TaskRow { id, ..input });
    }

    #[test]
    fn get_by_id_absent_is_none() {
        let conn = setup();
        assert!(TaskRepo::get_by_id(&conn, 404).unwrap().is_none());
    }

    #[test]
    fn list_all_orders_newest_first() {
        let conn = setup();
        TaskRepo::insert(&conn, &row("old", "LOW", None, 100)).unwrap();
        TaskRepo::insert(&conn, &row("new", "LOW", None, 300)).unwrap();
        TaskRepo::insert(&conn, &row("mid", "LOW", None, 200)).unwrap();

        let rows = TaskRepo::list(&conn, TaskQuery::All).unwrap();
        assert_eq!(titles(&rows), vec!["new", "mid", "old"]);
    }

    #[test]
    fn active_and_completed_split_on_flag() {
        let conn = setup();
        let done_id = TaskRepo::insert(&conn, &row("done", "LOW", None, 100)).unwrap();
        TaskRepo::insert(&conn, &row("open", "LOW", None, 200)).unwrap();
        TaskRepo::set_completed(&conn, done_id, true).unwrap();

        let active = TaskRepo::list(&conn, TaskQuery::Active).unwrap();
        assert_eq!(titles(&active), vec!["open"]);

        let completed = TaskRepo::list(&conn, TaskQuery::Completed).unwrap();
        assert_eq!(titles(&completed), vec!["done"]);

        let all = TaskRepo::list(&conn, TaskQuery::All).unwrap();
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn due_date_order_puts_null_last() {
        let conn = setup();
        TaskRepo::insert(&conn, &row("no date", "LOW", None, 100)).unwrap();
        TaskRepo::insert(&conn, &row("day 5", "LOW", Some(5 * 86_400_000), 200)).unwrap();
        TaskRepo::insert(&conn, &row("day 1", "LOW", Some(86_400_000), 300)).unwrap();

        let rows = TaskRepo::list(&conn, TaskQuery::ByDueDate).unwrap();
        assert_eq!(titles(&rows), vec!["day 1", "day 5", "no date"]);
    }

    #[test]
    fn priority_order_is_high_medium_low_then_unknown() {
        let conn = setup();
        TaskRepo::insert(&conn, &row("low", "LOW", None, 100)).unwrap();
        TaskRepo::insert(&conn, &row("weird", "URGENT", None, 200)).unwrap();
        TaskRepo::insert(&conn, &row("high", "HIGH", None, 300)).unwrap();
        TaskRepo::insert(&conn, &row("medium", "MEDIUM", None, 400)).unwrap();

        let rows = TaskRepo::list(&conn, TaskQuery::ByPriority).unwrap();
        assert_eq!(titles(&rows), vec!["high", "medium", "low", "weird"]);
    }

    #[test]
    fn set_completed_touches_only_the_flag() {
        let conn = setup();
        let id = TaskRepo::insert(&conn, &row("toggle me", "HIGH", Some(7), 100)).unwrap();
        TaskRepo::set_completed(&conn, id, true).unwrap();

        let fetched = TaskRepo::get_by_id(&conn, id).unwrap().unwrap();
        assert!(fetched.is_completed);
        assert_eq!(fetched.title, "toggle me");
        assert_eq!(fetched.priority, "HIGH");
        assert_eq!(fetched.due_date, Some(7));
        assert_eq!(fetched.created_at, 100);
    }

    #[test]
    fn set_completed_nonexistent_is_false() {
        let conn = setup();
        assert!(!TaskRepo::set_completed(&conn, 404, true).unwrap());
    }

    #[test]
    fn update_rewrites_all_fields() {
        let conn = setup();
        let id = TaskRepo::insert(&conn, &row("before", "LOW", None, 100)).unwrap();

        let updated = TaskRow {
            id,
            title: "after".into(),
            description: "edited".into(),
            priority: "HIGH".into(),
            due_date: Some(9),
            is_completed: true,
            created_at: 100,
        };
        assert!(TaskRepo::update(&conn, &updated).unwrap());
        assert_eq!(TaskRepo::get_by_id(&conn, id).unwrap().unwrap(), updated);
    }

    #[test]
    fn update_nonexistent_is_false() {
        let conn = setup();
        let ghost = TaskRow {
            id: 404,
            ..row("ghost", "LOW", None, 1)
        };
        assert!(!TaskRepo::update(&conn, &ghost).unwrap());
    }

    #[test]
    fn delete_removes_the_row() {
        let conn = setup();
        let id = TaskRepo::insert(&conn, &row("gone", "LOW", None, 100)).unwrap();
        assert!(TaskRepo::delete(&conn, id).unwrap());
        assert!(TaskRepo::get_by_id(&conn, id).unwrap().is_none());
        assert!(!TaskRepo::delete(&conn, id).unwrap());
        assert_eq!(TaskRepo::count(&conn).unwrap(), 0);
    }

    #[test]
    fn reinsert_after_delete_assigns_new_id() {
        let conn = setup();
        let original = row("undo me", "MEDIUM", Some(5), 100);
        let first_id = TaskRepo::insert(&conn, &original).unwrap();
        TaskRepo::delete(&conn, first_id).unwrap();

        let second_id = TaskRepo::insert(&conn, &original).unwrap();
        assert_ne!(first_id, second_id);

        let fetched = TaskRepo::get_by_id(&conn, second_id).unwrap().unwrap();
        assert_eq!(
            fetched,
            TaskRow {
                id: second_id,
                ..original
            }
        );
    }
}
