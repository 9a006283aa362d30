//! Board state engine
//!
//! The pieces that turn the task collection into an interactive board:
//! search/filter projection, status column grouping, drag transitions, and
//! the coordinator that keeps the collection in sync with the gateway.

mod columns;
mod coordinator;
mod drag;
mod filter;

pub use columns::{StatusColumns, COLUMN_ORDER};
pub use coordinator::TaskCoordinator;
pub use drag::{DragController, DragState, StatusChange};
pub use filter::{project, TaskFilters};
