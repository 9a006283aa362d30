//! Search and filter projection
//!
//! A pure view over the task collection: the board never re-sorts or
//! mutates tasks, it only narrows them.

use crate::task::{Task, TaskPriority, TaskStatus};

/// Active search and filter selections.
///
/// `None` selectors match every task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilters {
    pub search: String,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
}

impl TaskFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search term
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Restrict to a single status
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Restrict to a single priority
    pub fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Whether a task passes the search term and both selectors.
    pub fn matches(&self, task: &Task) -> bool {
        self.matches_search(task)
            && self.status.map_or(true, |status| task.status == status)
            && self
                .priority
                .map_or(true, |priority| task.priority == priority)
    }

    /// Case-insensitive substring match against title, description, and
    /// each tag. An empty search term matches everything.
    fn matches_search(&self, task: &Task) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        task.title.to_lowercase().contains(&needle)
            || task
                .description
                .as_ref()
                .is_some_and(|description| description.to_lowercase().contains(&needle))
            || task
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&needle))
    }
}

/// Project the task collection through the active filters.
///
/// The result preserves the collection's order and borrows its records.
pub fn project<'a>(tasks: &'a [Task], filters: &TaskFilters) -> Vec<&'a Task> {
    tasks.iter().filter(|task| filters.matches(task)).collect()
}
