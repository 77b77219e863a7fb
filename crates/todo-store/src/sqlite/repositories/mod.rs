//! Stateless repository structs over `&Connection`.

pub mod task;

pub use task::TaskRepo;
