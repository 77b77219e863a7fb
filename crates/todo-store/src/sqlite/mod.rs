//! `SQLite` backend for the task store.
//!
//! - **[`connection`]**: `r2d2` connection pool with WAL mode and a
//!   busy timeout applied to every connection.
//! - **[`migrations`]**: version-tracked schema. A database written by
//!   a newer schema version is dropped and recreated — single-device
//!   storage with no migration path promised.
//! - **[`row_types`]**: raw `tasks` row struct plus the pure
//!   conversions to and from the domain [`todo_core::Task`].
//! - **[`repositories`]**: stateless repository structs — each method
//!   takes `&Connection` and executes SQL. No shared mutable state.

pub mod connection;
pub mod migrations;
pub mod repositories;
pub mod row_types;

pub use connection::{ConnectionConfig, ConnectionPool, PooledConnection, new_file, new_in_memory};
pub use migrations::{current_version, latest_version, run_migrations};
