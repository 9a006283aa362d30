//! Notification sink
//!
//! The board reports each mutation outcome as a human-readable message.
//! Presentation (toasts, status bars) lives outside this crate; sinks only
//! receive the outcome.

use std::sync::Mutex;

use tracing::{info, warn};

/// Outcome category of a reported notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Failure,
}

/// Receives mutation outcomes, fire-and-forget.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, kind: NotificationKind, message: &str);
}

/// Sink that forwards notifications to the log.
#[derive(Debug, Default)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn notify(&self, kind: NotificationKind, message: &str) {
        match kind {
            NotificationKind::Success => info!("{}", message),
            NotificationKind::Failure => warn!("{}", message),
        }
    }
}

/// A reported notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

/// Sink that queues notifications for a view layer to drain.
#[derive(Debug, Default)]
pub struct MemorySink {
    queue: Mutex<Vec<Notification>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take all queued notifications, oldest first.
    pub fn drain(&self) -> Vec<Notification> {
        self.queue
            .lock()
            .map(|mut queue| queue.drain(..).collect())
            .unwrap_or_default()
    }

    /// Number of queued notifications.
    pub fn len(&self) -> usize {
        self.queue.lock().map(|queue| queue.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl NotificationSink for MemorySink {
    fn notify(&self, kind: NotificationKind, message: &str) {
        if let Ok(mut queue) = self.queue.lock() {
            queue.push(Notification {
                kind,
                message: message.to_string(),
            });
        }
    }
}
