//! Task mutation coordination
//!
//! One writer for the task collection. Every mutation goes out to the
//! persistence gateway first and the collection only changes when the
//! gateway confirms, so a failed operation leaves the board exactly as it
//! was. Each operation reports exactly one outcome to the notification
//! sink.
//!
//! Mutations for different tasks may be in flight at once; each completion
//! only touches its own task's record. Two in-flight updates for the same
//! task are not ordered against each other: the last gateway response to
//! arrive wins, even when it answers the earlier request.

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::notify::{NotificationKind, NotificationSink};
use crate::task::{Task, TaskDraft, TaskGateway, TaskPatch, TaskStore};
use crate::{Error, Result};

use super::drag::StatusChange;

/// Coordinates the task collection, the persistence gateway, and the
/// notification sink.
#[derive(Clone)]
pub struct TaskCoordinator {
    store: Arc<RwLock<TaskStore>>,
    gateway: Arc<dyn TaskGateway>,
    notifier: Arc<dyn NotificationSink>,
}

impl TaskCoordinator {
    pub fn new(gateway: Arc<dyn TaskGateway>, notifier: Arc<dyn NotificationSink>) -> Self {
        Self {
            store: Arc::new(RwLock::new(TaskStore::new())),
            gateway,
            notifier,
        }
    }

    /// Load the persisted tasks into the collection at session start.
    pub async fn load(&self) -> Result<()> {
        match self.gateway.list().await {
            Ok(tasks) => {
                debug!("Loaded {} tasks", tasks.len());
                let mut store = self.store.write().await;
                *store = TaskStore::new();
                for task in tasks {
                    store.add(task);
                }
                Ok(())
            }
            Err(e) => {
                warn!("Failed to load tasks: {}", e);
                self.notify_failure("Failed to load tasks");
                Err(e)
            }
        }
    }

    /// Create a task. It joins the collection only once the gateway has
    /// confirmed it and assigned its id.
    pub async fn create_task(&self, mut draft: TaskDraft) -> Result<Task> {
        let title = draft.title.trim();
        if title.is_empty() {
            self.notify_failure("Failed to create task");
            return Err(Error::InvalidInput("Title cannot be empty".to_string()));
        }
        draft.title = title.to_string();

        match self.gateway.create(draft).await {
            Ok(task) => {
                self.store.write().await.add(task.clone());
                self.notify_success("Task created successfully!");
                Ok(task)
            }
            Err(e) => {
                warn!("Failed to create task: {}", e);
                self.notify_failure("Failed to create task");
                Err(e)
            }
        }
    }

    /// Apply a partial update. On success the gateway's returned record
    /// replaces the stored one; on failure the stored record is untouched.
    pub async fn update_task(&self, id: Uuid, mut patch: TaskPatch) -> Result<Task> {
        patch.updated_at.get_or_insert_with(Utc::now);

        match self.gateway.update(id, patch).await {
            Ok(task) => {
                self.store.write().await.replace(id, task.clone());
                self.notify_success("Task updated successfully!");
                Ok(task)
            }
            Err(e) => {
                warn!("Failed to update task {}: {}", id, e);
                self.notify_failure("Failed to update task");
                Err(e)
            }
        }
    }

    /// Delete a task. The record leaves the collection on confirmation.
    pub async fn delete_task(&self, id: Uuid) -> Result<()> {
        match self.gateway.delete(id).await {
            Ok(()) => {
                self.store.write().await.remove(id);
                self.notify_success("Task deleted successfully!");
                Ok(())
            }
            Err(e) => {
                warn!("Failed to delete task {}: {}", id, e);
                self.notify_failure("Failed to delete task");
                Err(e)
            }
        }
    }

    /// Apply a drag-issued status change.
    pub async fn apply(&self, change: StatusChange) -> Result<Task> {
        self.update_task(change.id, TaskPatch::new().with_status(change.status))
            .await
    }

    /// Toggle a task between done and todo.
    pub async fn toggle_complete(&self, id: Uuid) -> Result<Task> {
        let change = {
            let store = self.store.read().await;
            match store.get(id) {
                Some(task) => StatusChange::toggle_complete(task),
                None => {
                    self.notify_failure("Failed to update task");
                    return Err(Error::TaskNotFound(id.to_string()));
                }
            }
        };
        self.apply(change).await
    }

    /// Snapshot of the collection in board order.
    pub async fn tasks(&self) -> Vec<Task> {
        self.store.read().await.list().to_vec()
    }

    fn notify_success(&self, message: &str) {
        self.notifier.notify(NotificationKind::Success, message);
    }

    fn notify_failure(&self, message: &str) {
        self.notifier.notify(NotificationKind::Failure, message);
    }
}
