//! Persistence gateway contract
//!
//! The board consumes persistence through this interface and never assumes
//! a concrete backend. Ids are assigned by the gateway at creation time.

use async_trait::async_trait;
use uuid::Uuid;

use super::model::{Task, TaskDraft, TaskPatch};
use crate::Result;

/// Gateway interface for task persistence.
#[async_trait]
pub trait TaskGateway: Send + Sync {
    /// Fetch all persisted tasks.
    async fn list(&self) -> Result<Vec<Task>>;

    /// Persist a new task. The gateway assigns the id.
    async fn create(&self, draft: TaskDraft) -> Result<Task>;

    /// Apply a partial update and return the full updated record.
    async fn update(&self, id: Uuid, patch: TaskPatch) -> Result<Task>;

    /// Delete a task by id.
    async fn delete(&self, id: Uuid) -> Result<()>;
}
