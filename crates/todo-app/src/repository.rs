//! Domain-typed repository over the task store.
//!
//! A pure translation boundary: every method delegates to
//! [`TaskStore`] and maps [`TaskRow`] to [`Task`]. No filtering or
//! sorting happens here — ordering comes from the store's queries, and
//! any secondary sort belongs to the controller.

use std::sync::Arc;

use todo_core::Task;
use todo_store::{StoreError, TaskQuery, TaskRow, TaskStore, TaskWatch};

/// Live, domain-typed task list subscription.
///
/// Each emission materializes a fresh `Vec<Task>` from the underlying
/// row snapshot.
#[derive(Debug)]
pub struct TaskListFeed {
    watch: TaskWatch,
}

impl TaskListFeed {
    /// The current result set as domain tasks, in store order.
    pub fn current(&self) -> Vec<Task> {
        self.watch
            .snapshot()
            .into_iter()
            .map(TaskRow::into_task)
            .collect()
    }

    /// Wait for the next changed snapshot. Returns `false` once the
    /// store has been dropped.
    pub async fn changed(&mut self) -> bool {
        self.watch.changed().await
    }
}

/// Repository for task operations, shared by controllers.
pub struct TaskRepository {
    store: Arc<TaskStore>,
}

impl TaskRepository {
    /// Wrap a store handle.
    pub fn new(store: Arc<TaskStore>) -> Self {
        Self { store }
    }

    /// All tasks, newest first.
    pub async fn get_all_tasks(&self) -> Result<TaskListFeed, StoreError> {
        self.feed(TaskQuery::All).await
    }

    /// Incomplete tasks, newest first.
    pub async fn get_active_tasks(&self) -> Result<TaskListFeed, StoreError> {
        self.feed(TaskQuery::Active).await
    }

    /// Completed tasks, newest first.
    pub async fn get_completed_tasks(&self) -> Result<TaskListFeed, StoreError> {
        self.feed(TaskQuery::Completed).await
    }

    /// All tasks by due date ascending, no-due-date tasks last.
    pub async fn get_tasks_sorted_by_due_date(&self) -> Result<TaskListFeed, StoreError> {
        self.feed(TaskQuery::ByDueDate).await
    }

    /// All tasks by priority HIGH → MEDIUM → LOW.
    pub async fn get_tasks_sorted_by_priority(&self) -> Result<TaskListFeed, StoreError> {
        self.feed(TaskQuery::ByPriority).await
    }

    /// Point lookup by id. Absent tasks are `None`, never an error.
    pub async fn get_task_by_id(&self, id: i64) -> Result<Option<Task>, StoreError> {
        Ok(self.store.get_by_id(id).await?.map(TaskRow::into_task))
    }

    /// Persist a new task and return its assigned id.
    pub async fn insert_task(&self, task: &Task) -> Result<i64, StoreError> {
        self.store.insert(TaskRow::from_task(task)).await
    }

    /// Persist every field of an existing task. Returns `true` if the
    /// task still existed.
    pub async fn update_task(&self, task: &Task) -> Result<bool, StoreError> {
        self.store.update(TaskRow::from_task(task)).await
    }

    /// Remove a task from the store. Returns `true` if it existed.
    pub async fn delete_task(&self, task: &Task) -> Result<bool, StoreError> {
        self.store.delete(task.id).await
    }

    /// Persist a new completion flag for the given task id.
    pub async fn toggle_completion(&self, id: i64, completed: bool) -> Result<bool, StoreError> {
        self.store.set_completed(id, completed).await
    }

    async fn feed(&self, query: TaskQuery) -> Result<TaskListFeed, StoreError> {
        Ok(TaskListFeed {
            watch: self.store.watch(query).await?,
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
