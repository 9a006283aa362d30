//! File-backed persistence gateway
//!
//! Stores tasks as JSON in a file on disk, mirrored in memory. This is the
//! reference implementation of [`TaskGateway`] for running the board
//! against local storage.

use std::collections::HashMap;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use super::gateway::TaskGateway;
use super::model::{Task, TaskDraft, TaskPatch};
use crate::{Error, Result};

/// File-based task gateway using JSON
pub struct FileTaskGateway {
    /// Path to the JSON file
    path: PathBuf,
    /// In-memory cache of tasks
    cache: RwLock<HashMap<Uuid, Task>>,
}

impl FileTaskGateway {
    /// Open a gateway backed by the given file.
    ///
    /// If the file doesn't exist, it will be created on first write.
    pub async fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let cache = if path.exists() {
            let content = tokio::fs::read_to_string(&path).await?;
            let tasks: Vec<Task> = serde_json::from_str(&content)?;
            tasks.into_iter().map(|t| (t.id, t)).collect()
        } else {
            HashMap::new()
        };

        Ok(Self {
            path,
            cache: RwLock::new(cache),
        })
    }

    /// Persist the cache to disk
    async fn persist(&self) -> Result<()> {
        let cache = self.cache.read().await;
        let mut tasks: Vec<&Task> = cache.values().collect();
        tasks.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        let content = serde_json::to_string_pretty(&tasks)?;

        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(&self.path, content).await?;
        Ok(())
    }
}

#[async_trait]
impl TaskGateway for FileTaskGateway {
    async fn list(&self) -> Result<Vec<Task>> {
        let cache = self.cache.read().await;
        let mut tasks: Vec<Task> = cache.values().cloned().collect();
        // Oldest first, so a reloaded board keeps its append order
        tasks.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(tasks)
    }

    async fn create(&self, draft: TaskDraft) -> Result<Task> {
        let task = Task::from_draft(Uuid::new_v4(), draft);
        {
            let mut cache = self.cache.write().await;
            cache.insert(task.id, task.clone());
        }
        self.persist().await?;
        debug!("Created task {}", task.id);
        Ok(task)
    }

    async fn update(&self, id: Uuid, patch: TaskPatch) -> Result<Task> {
        let task = {
            let mut cache = self.cache.write().await;
            let Some(task) = cache.get_mut(&id) else {
                return Err(Error::TaskNotFound(id.to_string()));
            };
            patch.apply_to(task);
            task.clone()
        };
        self.persist().await?;
        debug!("Updated task {}", id);
        Ok(task)
    }

    async fn delete(&self, id: Uuid) -> Result<()> {
        let removed = {
            let mut cache = self.cache.write().await;
            cache.remove(&id).is_some()
        };
        if !removed {
            return Err(Error::TaskNotFound(id.to_string()));
        }
        self.persist().await?;
        debug!("Deleted task {}", id);
        Ok(())
    }
}
