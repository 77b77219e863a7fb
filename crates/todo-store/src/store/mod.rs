//! Async store facade and live query subscriptions.

pub mod live;
pub mod task_store;

pub use crate::sqlite::repositories::task::TaskQuery;
pub use live::TaskWatch;
pub use task_store::TaskStore;
