//! Authoritative task list with persistence and change notification.
//!
//! # Responsibility
//! - Own the ordered task list and its category index.
//! - Apply add/remove/toggle and persist after each one.
//! - Notify observers after every accepted mutation.
//!
//! # Invariants
//! - Each accepted mutation runs mutate -> persist -> rebuild index -> notify,
//!   synchronously, before the next call is accepted.
//! - A failed save never rolls back the in-memory list; the next successful
//!   save writes the full current list.
//! - Rejected input and out-of-range positions change nothing and emit no
//!   notification.
//! - Category sections keep their order across mutations; `hydrate` orders
//!   them by first appearance.
//! - This is the only writer of the `items` key.

use crate::index::category_index::CategoryIndex;
use crate::model::task::Task;
use crate::store::kv_store::KvStore;
use crate::store::task_store::TaskStore;
use log::debug;
use std::sync::mpsc::Sender;

/// Describes the mutation that just completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskChange {
    /// List replaced from storage.
    Hydrated { count: usize },
    /// Task appended at `index`.
    Added { index: usize },
    /// Task removed from `index`.
    Removed { index: usize },
    /// Task at `index` now has the given completion state.
    Toggled { index: usize, completed: bool },
}

/// Receives a signal after every task list change.
pub trait TaskObserver {
    fn tasks_changed(&self, change: TaskChange);
}

impl<F: Fn(TaskChange)> TaskObserver for F {
    fn tasks_changed(&self, change: TaskChange) {
        self(change)
    }
}

impl TaskObserver for Sender<TaskChange> {
    fn tasks_changed(&self, change: TaskChange) {
        // A dropped receiver just means no view is listening anymore.
        let _ = self.send(change);
    }
}

/// Owner of the authoritative task list.
pub struct TaskRepository<S: KvStore> {
    store: TaskStore<S>,
    tasks: Vec<Task>,
    index: CategoryIndex,
    observers: Vec<Box<dyn TaskObserver>>,
    last_save_ok: bool,
}

impl<S: KvStore> TaskRepository<S> {
    /// Creates an empty repository backed by `kv`. Call `hydrate` to load.
    pub fn new(kv: S) -> Self {
        Self {
            store: TaskStore::new(kv),
            tasks: Vec::new(),
            index: CategoryIndex::default(),
            observers: Vec::new(),
            last_save_ok: true,
        }
    }

    /// Registers an observer for all subsequent changes.
    pub fn subscribe(&mut self, observer: impl TaskObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Replaces the in-memory list with the stored one.
    ///
    /// Also drops the legacy completion array; completion is read only from
    /// each task record.
    pub fn hydrate(&mut self) {
        self.tasks = self.store.load();
        self.store.purge_legacy();
        // Section order restarts from first appearance in the loaded list.
        self.index = CategoryIndex::build(&self.tasks);
        self.notify(TaskChange::Hydrated {
            count: self.tasks.len(),
        });
    }

    /// Appends a new uncompleted task.
    ///
    /// Returns `None` without side effects when either field is blank after
    /// trimming.
    pub fn add(&mut self, name: &str, category: &str) -> Option<Task> {
        let task = match Task::new(name, category) {
            Ok(task) => task,
            Err(err) => {
                debug!("event=task_add module=repo status=rejected reason={err}");
                return None;
            }
        };

        self.tasks.push(task.clone());
        let index = self.tasks.len() - 1;
        self.commit(TaskChange::Added { index });
        Some(task)
    }

    /// Removes the task at `position`; returns it, or `None` when out of range.
    pub fn remove(&mut self, position: usize) -> Option<Task> {
        if position >= self.tasks.len() {
            debug!(
                "event=task_remove module=repo status=rejected position={} size={}",
                position,
                self.tasks.len()
            );
            return None;
        }

        let removed = self.tasks.remove(position);
        self.commit(TaskChange::Removed { index: position });
        Some(removed)
    }

    /// Flips completion of the task at `position`.
    ///
    /// Returns the new completion state, or `None` when out of range.
    pub fn toggle(&mut self, position: usize) -> Option<bool> {
        if position >= self.tasks.len() {
            debug!(
                "event=task_toggle module=repo status=rejected position={} size={}",
                position,
                self.tasks.len()
            );
            return None;
        }

        let completed = self.tasks[position].toggle();
        self.commit(TaskChange::Toggled {
            index: position,
            completed,
        });
        Some(completed)
    }

    /// Read-only view of the current list, in insertion order.
    pub fn snapshot(&self) -> &[Task] {
        &self.tasks
    }

    /// Grouped view, current as of the last mutation.
    pub fn index(&self) -> &CategoryIndex {
        &self.index
    }

    /// Task at display coordinates `(section, row)`.
    pub fn task_at(&self, section: usize, row: usize) -> Option<&Task> {
        self.index.task(&self.tasks, section, row)
    }

    /// Whether the most recent save succeeded. Starts `true`.
    pub fn persistence_healthy(&self) -> bool {
        self.last_save_ok
    }

    fn commit(&mut self, change: TaskChange) {
        let saved = self.store.save(&self.tasks).is_ok();
        if saved && !self.last_save_ok {
            debug!("event=tasks_save module=repo status=recovered");
        } else if !saved {
            debug!("event=tasks_save module=repo status=degraded");
        }
        self.last_save_ok = saved;

        self.index.rebuild(&self.tasks);
        self.notify(change);
    }

    fn notify(&self, change: TaskChange) {
        for observer in &self.observers {
            observer.tasks_changed(change);
        }
    }
}
