//! List screen presenter.
//!
//! # Responsibility
//! - Feed section/row/cell data to the list view.
//! - Turn add-dialog results, row selections and row deletions into
//!   repository mutations.
//!
//! # Invariants
//! - Coordinates are resolved against the index as of the last mutation.
//! - Invalid coordinates and blank dialog input are silent no-ops.

use crate::model::task::Task;
use crate::repo::task_repo::{TaskObserver, TaskRepository};
use crate::store::kv_store::KvStore;

/// Outcome of the two-field "new item" dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddDialogResult {
    Cancel,
    Done { item: String, category: String },
}

/// Display content of one list row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskCell {
    pub name: String,
    /// Whether the row shows a checkmark accessory.
    pub checked: bool,
}

impl From<&Task> for TaskCell {
    fn from(task: &Task) -> Self {
        Self {
            name: task.name().to_string(),
            checked: task.is_completed(),
        }
    }
}

/// Bridge between the list view and the task repository.
pub struct ListPresenter<S: KvStore> {
    repo: TaskRepository<S>,
}

impl<S: KvStore> ListPresenter<S> {
    pub fn new(repo: TaskRepository<S>) -> Self {
        Self { repo }
    }

    /// Registers the view's "data changed" listener.
    pub fn attach_view(&mut self, view: impl TaskObserver + 'static) {
        self.repo.subscribe(view);
    }

    /// Loads stored tasks for the first render.
    pub fn load(&mut self) {
        self.repo.hydrate();
    }

    pub fn section_count(&self) -> usize {
        self.repo.index().section_count()
    }

    /// Section header text (the category).
    pub fn section_title(&self, section: usize) -> Option<&str> {
        self.repo.index().category(section)
    }

    pub fn row_count(&self, section: usize) -> usize {
        self.repo.index().row_count(section)
    }

    pub fn cell(&self, section: usize, row: usize) -> Option<TaskCell> {
        self.repo.task_at(section, row).map(TaskCell::from)
    }

    /// Handles the add dialog closing.
    ///
    /// Returns the created task, or `None` on cancel or blank input.
    pub fn submit_add(&mut self, result: AddDialogResult) -> Option<Task> {
        match result {
            AddDialogResult::Cancel => None,
            AddDialogResult::Done { item, category } => self.add(&item, &category),
        }
    }

    /// Trims both fields and adds a task when neither is blank.
    pub fn add(&mut self, item: &str, category: &str) -> Option<Task> {
        let item = item.trim();
        let category = category.trim();
        if item.is_empty() || category.is_empty() {
            return None;
        }
        self.repo.add(item, category)
    }

    /// Toggles completion of the selected row; returns the new state.
    pub fn select_row(&mut self, section: usize, row: usize) -> Option<bool> {
        let position = self.repo.index().positional_index(section, row)?;
        self.repo.toggle(position)
    }

    /// Deletes the row at `(section, row)`; returns the removed task.
    pub fn delete_row(&mut self, section: usize, row: usize) -> Option<Task> {
        let position = self.repo.index().positional_index(section, row)?;
        self.repo.remove(position)
    }

    pub fn repository(&self) -> &TaskRepository<S> {
        &self.repo
    }
}
