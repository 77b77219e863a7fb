//! Reactive list state controller.
//!
//! [`TaskListController`] is the single owner of filter, sort, and
//! pending-delete state. It composes the live query matching the
//! current filter, applies the secondary in-memory sort when the
//! requested order is not the store's native one, and publishes the
//! result through one `watch` channel the UI observes.
//!
//! Switching filter or sort replaces the subscription atomically: each
//! replacement bumps a generation counter, and a forwarder publishes
//! only while its generation is still current (checked inside the
//! publish compare-and-set). A superseded forwarder's emissions are
//! dropped, so consumers never see a list computed from a stale
//! filter/sort combination.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::{Mutex, watch};
use tracing::{debug, warn};

use todo_core::{Priority, SortOrder, Task, TaskStatus, TaskUiState};

use crate::errors::TaskListError;
use crate::repository::{TaskListFeed, TaskRepository};

/// Owns the task-list screen state and the derived observable list.
pub struct TaskListController {
    repository: Arc<TaskRepository>,
    ui_state: watch::Sender<TaskUiState>,
    tasks: Arc<watch::Sender<Vec<Task>>>,
    generation: Arc<AtomicU64>,
    /// Serializes user intents so rapid toggle/delete/filter sequences
    /// apply in arrival order.
    intents: Mutex<()>,
}

impl TaskListController {
    /// Create a controller and subscribe to the default view
    /// (filter ALL, newest first).
    pub async fn new(repository: Arc<TaskRepository>) -> Result<Self, TaskListError> {
        let (ui_state, _) = watch::channel(TaskUiState::default());
        let (tasks, _) = watch::channel(Vec::new());
        let controller = Self {
            repository,
            ui_state,
            tasks: Arc::new(tasks),
            generation: Arc::new(AtomicU64::new(0)),
            intents: Mutex::new(()),
        };
        let (filter, sort_order) = {
            let state = controller.ui_state.borrow();
            (state.filter, state.sort_order)
        };
        controller.resubscribe(filter, sort_order).await?;
        Ok(controller)
    }

    /// The derived, continuously-updating task list.
    pub fn task_list(&self) -> watch::Receiver<Vec<Task>> {
        self.tasks.subscribe()
    }

    /// The observable UI state (filter, sort, pending undo, errors).
    pub fn ui_state(&self) -> watch::Receiver<TaskUiState> {
        self.ui_state.subscribe()
    }

    /// Persist a new task. Rejects a blank (after trimming) title with
    /// a validation error and performs no write.
    pub async fn add_task(
        &self,
        title: &str,
        description: &str,
        priority: Priority,
        due_date: Option<i64>,
    ) -> Result<i64, TaskListError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(TaskListError::Validation(
                "task title must not be blank".into(),
            ));
        }

        let _guard = self.intents.lock().await;
        let task = Task::new(title, description.trim(), priority, due_date);
        match self.repository.insert_task(&task).await {
            Ok(id) => {
                self.update_state(|s| s.error_message = None);
                Ok(id)
            }
            Err(e) => {
                warn!(error = %e, "add task failed");
                self.update_state(|s| s.error_message = Some(e.to_string()));
                Err(e.into())
            }
        }
    }

    /// Persist every field of an existing task (same id). Rejects a
    /// blank title like [`Self::add_task`].
    pub async fn update_task(&self, task: &Task) -> Result<(), TaskListError> {
        if task.title.trim().is_empty() {
            return Err(TaskListError::Validation(
                "task title must not be blank".into(),
            ));
        }

        let _guard = self.intents.lock().await;
        match self.repository.update_task(task).await {
            Ok(_) => {
                self.update_state(|s| s.error_message = None);
                Ok(())
            }
            Err(e) => {
                warn!(task_id = task.id, error = %e, "update task failed");
                self.update_state(|s| s.error_message = Some(e.to_string()));
                Err(e.into())
            }
        }
    }

    /// Persist the logical negation of the task's completion flag.
    pub async fn toggle_completion(&self, task: &Task) -> Result<(), TaskListError> {
        let _guard = self.intents.lock().await;
        match self
            .repository
            .toggle_completion(task.id, !task.is_completed)
            .await
        {
            Ok(_) => {
                self.update_state(|s| s.error_message = None);
                Ok(())
            }
            Err(e) => {
                warn!(task_id = task.id, error = %e, "toggle completion failed");
                self.update_state(|s| s.error_message = Some(e.to_string()));
                Err(e.into())
            }
        }
    }

    /// Remove the task from the store and stage it for undo, replacing
    /// any previously staged deletion. A task the store no longer holds
    /// is not staged — undo never re-inserts a copy of something that
    /// was not actually removed. On storage failure nothing is staged
    /// and prior state is unchanged.
    pub async fn delete_task(&self, task: &Task) -> Result<(), TaskListError> {
        let _guard = self.intents.lock().await;
        match self.repository.delete_task(task).await {
            Ok(deleted) => {
                self.update_state(|s| {
                    if deleted {
                        s.recently_deleted_task = Some(task.clone());
                    }
                    s.error_message = None;
                });
                Ok(())
            }
            Err(e) => {
                warn!(task_id = task.id, error = %e, "delete task failed");
                self.update_state(|s| s.error_message = Some(e.to_string()));
                Err(e.into())
            }
        }
    }

    /// Re-insert the staged deletion, if any. The store assigns a new
    /// id; the original id is not reused. Returns the new id, or `None`
    /// when nothing was staged. A failed re-insert keeps the task
    /// staged so the caller can retry.
    pub async fn undo_delete(&self) -> Result<Option<i64>, TaskListError> {
        let _guard = self.intents.lock().await;
        let Some(task) = self.ui_state.borrow().recently_deleted_task.clone() else {
            return Ok(None);
        };

        match self.repository.insert_task(&task).await {
            Ok(id) => {
                debug!(old_id = task.id, new_id = id, "undo restored task");
                self.update_state(|s| {
                    s.recently_deleted_task = None;
                    s.error_message = None;
                });
                Ok(Some(id))
            }
            Err(e) => {
                warn!(task_id = task.id, error = %e, "undo delete failed, staying staged");
                self.update_state(|s| s.error_message = Some(e.to_string()));
                Err(e.into())
            }
        }
    }

    /// Drop the staged deletion without reinserting. Idempotent.
    pub async fn clear_recently_deleted(&self) {
        let _guard = self.intents.lock().await;
        self.update_state(|s| s.recently_deleted_task = None);
    }

    /// Switch the completion filter. No-op when unchanged; otherwise
    /// the derived list is recomputed from the matching live query. On
    /// failure the previous filter and list stay in effect.
    pub async fn set_filter(&self, filter: TaskStatus) -> Result<(), TaskListError> {
        let _guard = self.intents.lock().await;
        let sort_order = {
            let state = self.ui_state.borrow();
            if state.filter == filter {
                return Ok(());
            }
            state.sort_order
        };
        self.resubscribe(filter, sort_order).await
    }

    /// Switch the sort order. No-op when unchanged; otherwise the
    /// derived list is recomputed. On failure the previous sort and
    /// list stay in effect.
    pub async fn set_sort_order(&self, sort_order: SortOrder) -> Result<(), TaskListError> {
        let _guard = self.intents.lock().await;
        let filter = {
            let state = self.ui_state.borrow();
            if state.sort_order == sort_order {
                return Ok(());
            }
            state.filter
        };
        self.resubscribe(filter, sort_order).await
    }

    // ─────────────────────────────────────────────────────────────────────
    // Subscription plumbing
    // ─────────────────────────────────────────────────────────────────────

    /// Replace the active live query subscription with one matching
    /// the requested filter/sort. The new feed is acquired first;
    /// only once it is in hand are the filter/sort committed and the
    /// generation bumped, so a failed acquisition leaves the previous
    /// filter, sort, subscription, and list all untouched. On success
    /// the derived list is seeded synchronously, then handed to a
    /// background forwarder scoped to this generation.
    async fn resubscribe(
        &self,
        filter: TaskStatus,
        sort_order: SortOrder,
    ) -> Result<(), TaskListError> {
        self.update_state(|s| s.is_loading = true);

        let feed = match filter {
            TaskStatus::All => self.repository.get_all_tasks().await,
            TaskStatus::Active => self.repository.get_active_tasks().await,
            TaskStatus::Completed => self.repository.get_completed_tasks().await,
        };
        let mut feed = match feed {
            Ok(feed) => feed,
            Err(e) => {
                warn!(?filter, error = %e, "live query subscription failed");
                self.update_state(|s| {
                    s.is_loading = false;
                    s.error_message = Some(e.to_string());
                });
                return Err(e.into());
            }
        };

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.update_state(|s| {
            s.filter = filter;
            s.sort_order = sort_order;
            s.is_loading = false;
        });
        publish(
            &self.tasks,
            &self.generation,
            generation,
            sort_tasks(feed.current(), sort_order),
        );

        let tasks = Arc::clone(&self.tasks);
        let counter = Arc::clone(&self.generation);
        let _ = tokio::spawn(async move {
            while feed.changed().await {
                if counter.load(Ordering::SeqCst) != generation {
                    break;
                }
                publish(
                    &tasks,
                    &counter,
                    generation,
                    sort_tasks(feed.current(), sort_order),
                );
            }
            debug!(generation, "list forwarder ended");
        });

        Ok(())
    }

    fn update_state(&self, f: impl FnOnce(&mut TaskUiState)) {
        self.ui_state.send_modify(f);
    }
}

/// Publish a derived list unless this generation has been superseded or
/// the content is unchanged. The generation check runs inside the
/// channel's modify lock, so a stale forwarder can never clobber a
/// newer subscription's output.
fn publish(
    tasks: &watch::Sender<Vec<Task>>,
    counter: &AtomicU64,
    generation: u64,
    next: Vec<Task>,
) {
    let _ = tasks.send_if_modified(|current| {
        if counter.load(Ordering::SeqCst) != generation {
            return false;
        }
        if *current == next {
            return false;
        }
        *current = next;
        true
    });
}

/// Apply the secondary in-memory sort. `CreationDate` passes the
/// store's native order through; the other orders use a stable sort so
/// ties keep their prior relative order.
fn sort_tasks(mut tasks: Vec<Task>, order: SortOrder) -> Vec<Task> {
    match order {
        SortOrder::CreationDate => {}
        SortOrder::DueDate => tasks.sort_by_key(|t| (t.due_date.is_none(), t.due_date)),
        SortOrder::Priority => tasks.sort_by_key(|t| t.priority.rank()),
    }
    tasks
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
