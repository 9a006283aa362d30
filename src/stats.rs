//! Dashboard aggregates
//!
//! Read-only statistics derived from the task collection. Chart rendering
//! lives outside this crate.

use chrono::NaiveDate;
use serde::Serialize;

use crate::due_date::is_overdue;
use crate::task::{Task, TaskPriority, TaskStatus};

/// Task counts per priority level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PriorityBreakdown {
    pub urgent: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

/// Aggregated view of the task collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub todo: usize,
    /// Completed share of all tasks, in percent. Zero when there are no
    /// tasks.
    pub completion_rate: f64,
    /// Tasks past their due date, excluding completed ones.
    pub overdue: usize,
    pub priority_breakdown: PriorityBreakdown,
}

impl TaskStats {
    /// Compute statistics for the collection as of the given date.
    pub fn compute(tasks: &[Task], today: NaiveDate) -> Self {
        let total = tasks.len();
        let completed = tasks
            .iter()
            .filter(|task| task.status == TaskStatus::Done)
            .count();
        let in_progress = tasks
            .iter()
            .filter(|task| task.status == TaskStatus::InProgress)
            .count();
        let todo = tasks
            .iter()
            .filter(|task| task.status == TaskStatus::Todo)
            .count();

        let completion_rate = if total > 0 {
            completed as f64 / total as f64 * 100.0
        } else {
            0.0
        };

        let overdue = tasks
            .iter()
            .filter(|task| task.status != TaskStatus::Done)
            .filter(|task| task.due_date.is_some_and(|due| is_overdue(due, today)))
            .count();

        let mut priority_breakdown = PriorityBreakdown::default();
        for task in tasks {
            match task.priority {
                TaskPriority::Urgent => priority_breakdown.urgent += 1,
                TaskPriority::High => priority_breakdown.high += 1,
                TaskPriority::Medium => priority_breakdown.medium += 1,
                TaskPriority::Low => priority_breakdown.low += 1,
            }
        }

        Self {
            total,
            completed,
            in_progress,
            todo,
            completion_rate,
            overdue,
            priority_breakdown,
        }
    }
}
