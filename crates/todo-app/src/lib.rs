//! # todo-app
//!
//! The application layer between the SQLite store and the presentation
//! shell:
//!
//! - **[`repository::TaskRepository`]**: domain-typed facade over the
//!   store — maps rows to [`todo_core::Task`] and nothing else
//! - **[`controller::TaskListController`]**: owns filter, sort, and
//!   pending-delete state; derives the single observable task list the
//!   UI renders
//! - **[`nav::Route`]**: the closed variant the presentation shell
//!   switches on
//! - **[`errors::TaskListError`]**: validation and storage failures
//!   surfaced to the caller

#![deny(unsafe_code)]

pub mod controller;
pub mod errors;
pub mod nav;
pub mod repository;

pub use controller::TaskListController;
pub use errors::TaskListError;
pub use nav::Route;
pub use repository::{TaskListFeed, TaskRepository};
