//! High-level async `TaskStore` API.
//!
//! Wraps the connection pool and [`TaskRepo`]: point operations run on
//! the tokio blocking pool, and every successful write bumps an
//! internal revision channel that drives the live query subscriptions.
//!
//! SQLite itself serializes conflicting writes (single writer, WAL) and
//! the per-connection busy timeout absorbs contention, so no lock is
//! held at this layer.

use rusqlite::Connection;
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::errors::{Result, StoreError};
use crate::sqlite::connection::{self, ConnectionConfig, ConnectionPool};
use crate::sqlite::migrations::run_migrations;
use crate::sqlite::repositories::task::{TaskQuery, TaskRepo};
use crate::sqlite::row_types::TaskRow;
use crate::store::live::TaskWatch;

/// Async task store over a pooled SQLite database.
pub struct TaskStore {
    pool: ConnectionPool,
    revision: watch::Sender<u64>,
}

impl TaskStore {
    /// Open (or create) a file-backed store and run pending migrations.
    pub fn open(path: &str, config: &ConnectionConfig) -> Result<Self> {
        let pool = connection::new_file(path, config)?;
        Self::from_pool(pool)
    }

    /// Open an in-memory store (single shared connection), for tests
    /// and previews.
    pub fn open_in_memory() -> Result<Self> {
        let pool = connection::new_in_memory(&ConnectionConfig::default())?;
        Self::from_pool(pool)
    }

    fn from_pool(pool: ConnectionPool) -> Result<Self> {
        {
            let conn = pool.get()?;
            let _ = run_migrations(&conn)?;
        }
        let (revision, _) = watch::channel(0);
        Ok(Self { pool, revision })
    }

    /// Insert a new task and return its assigned id. `row.id` is ignored.
    pub async fn insert(&self, row: TaskRow) -> Result<i64> {
        let id = self.run(move |conn| TaskRepo::insert(conn, &row)).await?;
        self.bump();
        Ok(id)
    }

    /// Rewrite every column of an existing task. Returns `true` if a
    /// row was updated.
    pub async fn update(&self, row: TaskRow) -> Result<bool> {
        let updated = self.run(move |conn| TaskRepo::update(conn, &row)).await?;
        if updated {
            self.bump();
        }
        Ok(updated)
    }

    /// Delete a task by id. Returns `true` if a row was deleted.
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let deleted = self.run(move |conn| TaskRepo::delete(conn, id)).await?;
        if deleted {
            self.bump();
        }
        Ok(deleted)
    }

    /// Set only the completion flag. Returns `true` if a row was updated.
    pub async fn set_completed(&self, id: i64, completed: bool) -> Result<bool> {
        let updated = self
            .run(move |conn| TaskRepo::set_completed(conn, id, completed))
            .await?;
        if updated {
            self.bump();
        }
        Ok(updated)
    }

    /// Point lookup by id. Absent rows are `None`, never an error.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<TaskRow>> {
        self.run(move |conn| TaskRepo::get_by_id(conn, id)).await
    }

    /// Subscribe to a live query.
    ///
    /// The returned [`TaskWatch`] carries an initial snapshot
    /// immediately. A background task requeries after every write and
    /// publishes only result sets that differ from the last emission;
    /// it exits when the watch handle is dropped.
    pub async fn watch(&self, query: TaskQuery) -> Result<TaskWatch> {
        // Subscribe before the initial query so a write landing in
        // between still triggers a refresh.
        let mut revision = self.revision.subscribe();
        let initial = self.run(move |conn| TaskRepo::list(conn, query)).await?;
        let (tx, rx) = watch::channel(initial);
        let pool = self.pool.clone();

        let _ = tokio::spawn(async move {
            loop {
                tokio::select! {
                    () = tx.closed() => break,
                    changed = revision.changed() => {
                        if changed.is_err() {
                            break;
                        }
                    }
                }

                let requery = tokio::task::spawn_blocking({
                    let pool = pool.clone();
                    move || -> Result<Vec<TaskRow>> {
                        let conn = pool.get()?;
                        TaskRepo::list(&conn, query)
                    }
                })
                .await;

                let rows = match requery {
                    Ok(Ok(rows)) => rows,
                    Ok(Err(e)) => {
                        warn!(?query, error = %e, "live query refresh failed");
                        continue;
                    }
                    Err(e) => {
                        warn!(?query, error = %e, "live query refresh task aborted");
                        break;
                    }
                };

                let _ = tx.send_if_modified(|current| {
                    if *current == rows {
                        false
                    } else {
                        *current = rows;
                        true
                    }
                });
            }
            debug!(?query, "live query subscription ended");
        });

        Ok(TaskWatch::new(rx))
    }

    fn bump(&self) {
        self.revision.send_modify(|rev| *rev += 1);
    }

    async fn run<T, F>(&self, f: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce(&Connection) -> Result<T> + Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let conn = pool.get()?;
            f(&conn)
        })
        .await
        .map_err(|e| StoreError::Internal(format!("blocking task join: {e}")))?
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
