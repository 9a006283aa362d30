//! Core library for the FlowFocus task board
//!
//! This crate contains the board state engine, including:
//! - The task model and in-memory task collection
//! - Search/filter projection and status column grouping
//! - The drag-and-drop status transition state machine
//! - Optimistic create/update/delete against a persistence gateway
//! - Dashboard statistics derived from the task collection

pub mod board;
pub mod due_date;
pub mod error;
pub mod notify;
pub mod stats;
pub mod task;

pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;
