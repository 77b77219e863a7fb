//! # todo-core
//!
//! Foundation types for the todo application. This crate provides the
//! shared vocabulary the store and controller crates depend on:
//!
//! - **Domain model**: [`task::Task`] and [`task::Priority`]
//! - **List state**: [`state::TaskStatus`] filter, [`state::SortOrder`],
//!   and the [`state::TaskUiState`] snapshot consumed by the UI
//! - **Dates**: epoch-millisecond helpers in [`dates`] (formatting,
//!   overdue/today checks against the local calendar day)
//! - **Logging**: [`logging::init_subscriber`] for `tracing` setup
//!
//! ## Crate Position
//!
//! Foundation crate. Depended on by `todo-store` and `todo-app`.

#![deny(unsafe_code)]

pub mod dates;
pub mod logging;
pub mod state;
pub mod task;

pub use state::{SortOrder, TaskStatus, TaskUiState};
pub use task::{Priority, Task};
