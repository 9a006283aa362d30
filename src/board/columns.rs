//! Status column grouping
//!
//! Columns are derived from the filtered projection, not the raw
//! collection, so column counts always reflect the active filters.

use std::collections::HashMap;

use crate::task::{Task, TaskStatus};

/// Fixed board column order.
pub const COLUMN_ORDER: [TaskStatus; 3] = [
    TaskStatus::Todo,
    TaskStatus::InProgress,
    TaskStatus::Done,
];

/// Tasks partitioned into the three status columns.
///
/// Every column is always present; an empty column yields an empty slice.
#[derive(Debug)]
pub struct StatusColumns<'a> {
    columns: HashMap<TaskStatus, Vec<&'a Task>>,
}

impl<'a> StatusColumns<'a> {
    /// Partition a filtered projection into columns.
    pub fn group(tasks: &[&'a Task]) -> Self {
        let mut columns: HashMap<TaskStatus, Vec<&'a Task>> = COLUMN_ORDER
            .iter()
            .map(|status| (*status, Vec::new()))
            .collect();
        for &task in tasks {
            if let Some(column) = columns.get_mut(&task.status) {
                column.push(task);
            }
        }
        Self { columns }
    }

    /// Tasks in the given column, in projection order.
    pub fn tasks(&self, status: TaskStatus) -> &[&'a Task] {
        self.columns
            .get(&status)
            .map(|tasks| tasks.as_slice())
            .unwrap_or(&[])
    }

    /// Number of tasks in the given column.
    pub fn count(&self, status: TaskStatus) -> usize {
        self.tasks(status).len()
    }

    /// Total tasks across all columns.
    pub fn total(&self) -> usize {
        COLUMN_ORDER.iter().map(|status| self.count(*status)).sum()
    }
}
