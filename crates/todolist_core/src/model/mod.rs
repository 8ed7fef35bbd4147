//! To-do domain model.
//!
//! # Invariants
//! - A task's `name` and `category` are non-empty after trimming.
//! - Tasks have no identifier; identity is the position in the task list.

pub mod task;
