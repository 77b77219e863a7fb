//! # todo-store
//!
//! SQLite-backed task store for the todo application:
//!
//! - **Connection pool**: `r2d2`/`rusqlite` with WAL mode and busy-timeout
//!   pragmas applied to every connection
//! - **Migrations**: version-tracked schema, destructively recreated when
//!   the on-disk version is newer than the code supports
//! - **Repository**: stateless [`sqlite::repositories::task::TaskRepo`] —
//!   every method takes `&Connection` and executes SQL
//! - **Store facade**: [`store::TaskStore`] runs the repository on the
//!   blocking pool and bumps a revision channel after each write
//! - **Live queries**: [`store::TaskWatch`] subscriptions that emit an
//!   initial snapshot immediately and a fresh snapshot after every write
//!   that changes the query's result set

#![deny(unsafe_code)]

pub mod errors;
pub mod sqlite;
pub mod store;

pub use errors::{Result, StoreError};
pub use sqlite::connection::ConnectionConfig;
pub use sqlite::row_types::TaskRow;
pub use store::{TaskQuery, TaskStore, TaskWatch};
