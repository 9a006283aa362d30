//! Drag-and-drop status transitions
//!
//! An explicit state machine for the drag gesture, independent of any
//! input-event API: drive it from pointer, keyboard, or touch events.
//! Drop zones contain nested elements whose enter/leave events fire
//! independently, so hover tracking uses a depth counter instead of a
//! boolean; the hover indicator only clears when the counter returns to
//! zero.

use uuid::Uuid;

use crate::task::{Task, TaskStatus};

/// Command to move a task into a new status column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusChange {
    pub id: Uuid,
    pub status: TaskStatus,
}

impl StatusChange {
    /// The toggle-complete affordance: a done task reopens, anything else
    /// completes. Issues the same command a drag would.
    pub fn toggle_complete(task: &Task) -> Self {
        let status = if task.status == TaskStatus::Done {
            TaskStatus::Todo
        } else {
            TaskStatus::Done
        };
        Self {
            id: task.id,
            status,
        }
    }
}

/// Observable drag gesture state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragState {
    Idle,
    Dragging,
    HoveringColumn(TaskStatus),
}

/// Tracks one drag gesture from pick-up to drop or cancellation.
#[derive(Debug, Default)]
pub struct DragController {
    dragged: Option<Task>,
    hover: Option<TaskStatus>,
    enter_depth: u32,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin dragging a task.
    pub fn drag_start(&mut self, task: Task) {
        self.dragged = Some(task);
        self.hover = None;
        self.enter_depth = 0;
    }

    /// Pointer entered a column drop zone or a nested element within it.
    pub fn drag_enter(&mut self, column: TaskStatus) {
        if self.dragged.is_none() {
            return;
        }
        self.enter_depth += 1;
        self.hover = Some(column);
    }

    /// Pointer left a drop zone element. The hover indicator only clears
    /// once every nested enter has been balanced by a leave.
    pub fn drag_leave(&mut self) {
        self.enter_depth = self.enter_depth.saturating_sub(1);
        if self.enter_depth == 0 {
            self.hover = None;
        }
    }

    /// Drop onto a column. Emits a status change when the column differs
    /// from the dragged task's current status; a drop onto its own column
    /// is a no-op. The gesture ends either way.
    pub fn drop_on(&mut self, column: TaskStatus) -> Option<StatusChange> {
        let dragged = self.dragged.take();
        self.hover = None;
        self.enter_depth = 0;

        let task = dragged?;
        (task.status != column).then(|| StatusChange {
            id: task.id,
            status: column,
        })
    }

    /// End the gesture. Always resets, including cancelled drags that
    /// never reached a drop zone.
    pub fn drag_end(&mut self) {
        self.dragged = None;
        self.hover = None;
        self.enter_depth = 0;
    }

    /// The task currently being dragged, if any.
    pub fn dragged_task(&self) -> Option<&Task> {
        self.dragged.as_ref()
    }

    /// The column currently highlighted as a drop target.
    pub fn hovered_column(&self) -> Option<TaskStatus> {
        self.hover
    }

    /// Current gesture state.
    pub fn state(&self) -> DragState {
        match (&self.dragged, self.hover) {
            (None, _) => DragState::Idle,
            (Some(_), None) => DragState::Dragging,
            (Some(_), Some(column)) => DragState::HoveringColumn(column),
        }
    }
}
