//! Category grouping of the task list.
//!
//! # Responsibility
//! - Group tasks into sections keyed by category text.
//! - Translate `(section, row)` display coordinates to task-list positions.
//!
//! # Invariants
//! - A freshly built index orders sections by first appearance in the list.
//! - `rebuild` keeps the existing order of categories still present,
//!   appends newly seen categories in first-appearance order, and drops
//!   categories left without tasks.
//! - Row order within a section follows task-list order.
//! - Sections hold positions, not copies, so every grouped task is the task
//!   stored in the list. Flattening all sections in order yields every
//!   position exactly once.
//! - Categories compare as whole, case-sensitive strings.

use crate::model::task::Task;
use std::collections::HashMap;

/// One category section of the grouped view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySection {
    category: String,
    positions: Vec<usize>,
}

impl CategorySection {
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Task-list positions of this section's rows, in row order.
    pub fn positions(&self) -> &[usize] {
        &self.positions
    }
}

/// Sectioned view of a task list. Recomputed after every list mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryIndex {
    sections: Vec<CategorySection>,
}

impl CategoryIndex {
    /// Builds the grouped view of `tasks` in first-appearance order.
    pub fn build(tasks: &[Task]) -> Self {
        let mut index = Self::default();
        index.rebuild(tasks);
        index
    }

    /// Regroups `tasks`, keeping the current order of surviving sections.
    pub fn rebuild(&mut self, tasks: &[Task]) {
        let mut sections: Vec<CategorySection> = std::mem::take(&mut self.sections)
            .into_iter()
            .map(|section| CategorySection {
                category: section.category,
                positions: Vec::new(),
            })
            .collect();
        let mut section_of: HashMap<String, usize> = sections
            .iter()
            .enumerate()
            .map(|(slot, section)| (section.category.clone(), slot))
            .collect();

        for (position, task) in tasks.iter().enumerate() {
            let slot = match section_of.get(task.category()) {
                Some(&slot) => slot,
                None => {
                    sections.push(CategorySection {
                        category: task.category().to_string(),
                        positions: Vec::new(),
                    });
                    section_of.insert(task.category().to_string(), sections.len() - 1);
                    sections.len() - 1
                }
            };
            sections[slot].positions.push(position);
        }

        sections.retain(|section| !section.positions.is_empty());
        self.sections = sections;
    }

    pub fn sections(&self) -> &[CategorySection] {
        &self.sections
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Category text of `section`, or `None` when out of range.
    pub fn category(&self, section: usize) -> Option<&str> {
        self.sections.get(section).map(CategorySection::category)
    }

    /// Row count of `section`; zero when out of range.
    pub fn row_count(&self, section: usize) -> usize {
        self.sections
            .get(section)
            .map_or(0, |section| section.positions.len())
    }

    /// Maps `(section, row)` to the task-list position used by mutations.
    pub fn positional_index(&self, section: usize, row: usize) -> Option<usize> {
        self.sections
            .get(section)
            .and_then(|section| section.positions.get(row))
            .copied()
    }

    /// Resolves `(section, row)` against the list this index was built from.
    pub fn task<'a>(&self, tasks: &'a [Task], section: usize, row: usize) -> Option<&'a Task> {
        self.positional_index(section, row)
            .and_then(|position| tasks.get(position))
    }
}

#[cfg(test)]
mod tests {
    use super::CategoryIndex;
    use crate::model::task::Task;

    fn tasks(pairs: &[(&str, &str)]) -> Vec<Task> {
        pairs
            .iter()
            .map(|(name, category)| Task::new(name, category).unwrap())
            .collect()
    }

    #[test]
    fn empty_list_has_no_sections() {
        let index = CategoryIndex::build(&[]);
        assert_eq!(index.section_count(), 0);
        assert_eq!(index.category(0), None);
        assert_eq!(index.row_count(0), 0);
        assert_eq!(index.positional_index(0, 0), None);
    }

    #[test]
    fn categories_are_case_sensitive() {
        let list = tasks(&[("a", "Work"), ("b", "work")]);
        let index = CategoryIndex::build(&list);
        assert_eq!(index.section_count(), 2);
        assert_eq!(index.category(0), Some("Work"));
        assert_eq!(index.category(1), Some("work"));
    }

    #[test]
    fn build_orders_sections_by_first_appearance() {
        let list = tasks(&[("b", "C2"), ("c", "C1"), ("d", "C2")]);
        let index = CategoryIndex::build(&list);
        assert_eq!(index.category(0), Some("C2"));
        assert_eq!(index.category(1), Some("C1"));
        assert_eq!(index.sections()[0].positions(), [0, 2]);
    }

    #[test]
    fn rebuild_keeps_section_order_when_first_task_of_category_goes() {
        let mut list = tasks(&[("a", "C1"), ("b", "C2"), ("c", "C1")]);
        let mut index = CategoryIndex::build(&list);

        list.remove(0);
        index.rebuild(&list);

        assert_eq!(index.category(0), Some("C1"));
        assert_eq!(index.sections()[0].positions(), [1]);
        assert_eq!(index.category(1), Some("C2"));
        assert_eq!(index.sections()[1].positions(), [0]);
    }

    #[test]
    fn rebuild_appends_new_categories_after_existing_ones() {
        let mut list = tasks(&[("a", "C2")]);
        let mut index = CategoryIndex::build(&list);

        list.insert(0, Task::new("z", "C9").unwrap());
        index.rebuild(&list);

        assert_eq!(index.category(0), Some("C2"));
        assert_eq!(index.category(1), Some("C9"));
        assert_eq!(index.positional_index(1, 0), Some(0));
    }

    #[test]
    fn rebuild_drops_sections_left_empty() {
        let mut index = CategoryIndex::build(&tasks(&[("a", "X"), ("b", "Y")]));
        index.rebuild(&tasks(&[("c", "Z")]));
        assert_eq!(index.section_count(), 1);
        assert_eq!(index.category(0), Some("Z"));
        assert_eq!(index.positional_index(0, 0), Some(0));
    }
}
