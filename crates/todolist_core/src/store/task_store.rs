//! Task list persistence over a `KvStore`.
//!
//! # Responsibility
//! - Read the task list once at startup and write it after every mutation.
//! - Own the on-disk encoding of task records.
//!
//! # Invariants
//! - `load` never fails; absent or malformed data reads as an empty list.
//! - Completion state is persisted only inside each task record. The legacy
//!   `completedTasks` array is never consulted.

use crate::model::task::Task;
use crate::store::kv_store::{KvStore, StoreError, StoreResult};
use log::{debug, info, warn};

/// Key holding the encoded task list.
pub const ITEMS_KEY: &str = "items";
/// Key of the parallel completion array written by older releases.
pub const LEGACY_COMPLETED_KEY: &str = "completedTasks";

/// Encodes tasks as a JSON array of `{name, category, completed}` records.
pub fn encode_tasks(tasks: &[Task]) -> StoreResult<Vec<u8>> {
    serde_json::to_vec(tasks).map_err(StoreError::Encode)
}

/// Decodes a blob written by `encode_tasks` (or an older compatible writer).
///
/// # Errors
/// - `Decode` when the blob is not a record array or any record is invalid.
pub fn decode_tasks(bytes: &[u8]) -> StoreResult<Vec<Task>> {
    serde_json::from_slice(bytes).map_err(StoreError::Decode)
}

/// Reads and writes the task list under `ITEMS_KEY`.
pub struct TaskStore<S: KvStore> {
    kv: S,
}

impl<S: KvStore> TaskStore<S> {
    pub fn new(kv: S) -> Self {
        Self { kv }
    }

    /// Loads the stored list, treating every failure as "no prior state".
    pub fn load(&self) -> Vec<Task> {
        match self.try_load() {
            Ok(Some(tasks)) => {
                info!(
                    "event=tasks_load module=store status=ok count={}",
                    tasks.len()
                );
                tasks
            }
            Ok(None) => {
                info!("event=tasks_load module=store status=ok count=0 reason=absent");
                Vec::new()
            }
            Err(err) => {
                warn!(
                    "event=tasks_load module=store status=error error_code={} error={}",
                    err.code(),
                    err
                );
                Vec::new()
            }
        }
    }

    /// Loads the stored list, surfacing storage and decode errors.
    ///
    /// Returns `Ok(None)` when nothing has been saved yet.
    pub fn try_load(&self) -> StoreResult<Option<Vec<Task>>> {
        match self.kv.get(ITEMS_KEY)? {
            Some(bytes) => decode_tasks(&bytes).map(Some),
            None => Ok(None),
        }
    }

    /// Encodes and writes the full list in one atomic put.
    ///
    /// Failures are logged here; callers decide whether to surface them.
    pub fn save(&self, tasks: &[Task]) -> StoreResult<()> {
        let result = encode_tasks(tasks).and_then(|bytes| self.kv.put(ITEMS_KEY, &bytes));
        match &result {
            Ok(()) => debug!(
                "event=tasks_save module=store status=ok count={}",
                tasks.len()
            ),
            Err(err) => warn!(
                "event=tasks_save module=store status=error count={} error_code={} error={}",
                tasks.len(),
                err.code(),
                err
            ),
        }
        result
    }

    /// Drops the legacy completion array if present.
    ///
    /// Returns whether anything was removed. Failures are logged and reported
    /// as `false`.
    pub fn purge_legacy(&self) -> bool {
        match self.kv.remove(LEGACY_COMPLETED_KEY) {
            Ok(removed) => {
                if removed {
                    info!("event=legacy_purge module=store status=ok key={LEGACY_COMPLETED_KEY}");
                }
                removed
            }
            Err(err) => {
                warn!(
                    "event=legacy_purge module=store status=error error_code={} error={}",
                    err.code(),
                    err
                );
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{decode_tasks, encode_tasks};
    use crate::model::task::Task;

    #[test]
    fn encode_writes_named_fields_in_list_order() {
        let mut first = Task::new("Buy milk", "Shopping").unwrap();
        first.toggle();
        let second = Task::new("Write report", "Work").unwrap();

        let bytes = encode_tasks(&[first, second]).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(
            value,
            serde_json::json!([
                {"name": "Buy milk", "category": "Shopping", "completed": true},
                {"name": "Write report", "category": "Work", "completed": false}
            ])
        );
    }

    #[test]
    fn decode_ignores_unknown_fields_and_defaults_completion() {
        let bytes = br#"[
            {"name": "a", "category": "C1", "priority": 3},
            {"name": "b", "category": "C2", "completed": true, "note": null}
        ]"#;

        let tasks = decode_tasks(bytes).unwrap();
        assert_eq!(tasks.len(), 2);
        assert!(!tasks[0].is_completed());
        assert!(tasks[1].is_completed());
    }

    #[test]
    fn decode_accepts_legacy_completion_field_name() {
        let bytes = br#"[{"name": "a", "category": "C", "isCompleted": true}]"#;
        let tasks = decode_tasks(bytes).unwrap();
        assert!(tasks[0].is_completed());
    }

    #[test]
    fn decode_rejects_blank_fields_and_non_arrays() {
        assert!(decode_tasks(br#"[{"name": "  ", "category": "C"}]"#).is_err());
        assert!(decode_tasks(br#"[{"name": "a", "category": ""}]"#).is_err());
        assert!(decode_tasks(br#"{"name": "a", "category": "C"}"#).is_err());
        assert!(decode_tasks(b"\x00\x01garbage").is_err());
    }
}
