//! Derived views over the task list.

pub mod category_index;
