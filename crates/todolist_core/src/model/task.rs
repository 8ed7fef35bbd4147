//! Task domain model.
//!
//! # Responsibility
//! - Define the unit of work shown by the list screen.
//! - Validate creation input and persisted records alike.
//!
//! # Invariants
//! - `name` and `category` are trimmed and non-empty; neither changes after
//!   creation.
//! - `completed` starts as `false` and only changes through `toggle`.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Validation failures for task text fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskValidationError {
    EmptyName,
    EmptyCategory,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "task name must not be empty"),
            Self::EmptyCategory => write!(f, "task category must not be empty"),
        }
    }
}

impl Error for TaskValidationError {}

/// A single to-do entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TaskRecord")]
pub struct Task {
    name: String,
    category: String,
    completed: bool,
}

impl Task {
    /// Creates an uncompleted task from raw user input.
    ///
    /// Both fields are trimmed before validation and storage.
    pub fn new(
        name: impl AsRef<str>,
        category: impl AsRef<str>,
    ) -> Result<Self, TaskValidationError> {
        let name = name.as_ref().trim();
        let category = category.as_ref().trim();
        if name.is_empty() {
            return Err(TaskValidationError::EmptyName);
        }
        if category.is_empty() {
            return Err(TaskValidationError::EmptyCategory);
        }

        Ok(Self {
            name: name.to_string(),
            category: category.to_string(),
            completed: false,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Flips completion state and returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.completed = !self.completed;
        self.completed
    }
}

/// Wire shape accepted when decoding a task.
///
/// Unknown fields are ignored. `isCompleted` is the field spelling used by
/// records written before `completed` existed.
#[derive(Deserialize)]
struct TaskRecord {
    name: String,
    category: String,
    #[serde(default, alias = "isCompleted")]
    completed: bool,
}

impl TryFrom<TaskRecord> for Task {
    type Error = TaskValidationError;

    fn try_from(record: TaskRecord) -> Result<Self, Self::Error> {
        let mut task = Task::new(record.name, record.category)?;
        task.completed = record.completed;
        Ok(task)
    }
}
