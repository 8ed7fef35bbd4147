//! Core domain logic for the to-do list app.
//! The host UI renders screens; this crate owns tasks, grouping and storage.

pub mod config;
pub mod db;
pub mod index;
pub mod logging;
pub mod model;
pub mod presenter;
pub mod repo;
pub mod store;

pub use config::{start_core, ConfigError, CoreConfig, StartupError};
pub use index::category_index::{CategoryIndex, CategorySection};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{Task, TaskValidationError};
pub use presenter::home::HomeRoute;
pub use presenter::list_presenter::{AddDialogResult, ListPresenter, TaskCell};
pub use repo::task_repo::{TaskChange, TaskObserver, TaskRepository};
pub use store::kv_store::{KvStore, SqliteKvStore, StoreError, StoreResult};
pub use store::task_store::{
    decode_tasks, encode_tasks, TaskStore, ITEMS_KEY, LEGACY_COMPLETED_KEY,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
