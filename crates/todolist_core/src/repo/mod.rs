//! Task list ownership and mutation.
//!
//! # Invariants
//! - All task mutations go through `TaskRepository`.
//! - Persistence failures degrade silently; they never block a mutation.

pub mod task_repo;
