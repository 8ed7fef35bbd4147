//! Persistent store for the task list.
//!
//! # Responsibility
//! - Provide a flat key/value blob namespace over SQLite.
//! - Encode/decode the task list under the `items` key.
//!
//! # Invariants
//! - The task list is only ever written as one value under one key.
//! - Decoding never yields a task that fails validation.

pub mod kv_store;
pub mod task_store;
