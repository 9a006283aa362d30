//! In-memory task collection
//!
//! The store is the single source of truth for the board session. It keeps
//! tasks in insertion order, which is the order the board renders, and it
//! never talks to the persistence gateway itself; the coordinator does.

use uuid::Uuid;

use super::model::Task;

/// Ordered, id-unique collection of tasks.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All tasks in board order.
    pub fn list(&self) -> &[Task] {
        &self.tasks
    }

    /// Look up a task by id.
    pub fn get(&self, id: Uuid) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Append a task. If the id is already present the existing record is
    /// replaced in place, so ids stay unique.
    pub fn add(&mut self, task: Task) {
        match self.tasks.iter_mut().find(|existing| existing.id == task.id) {
            Some(existing) => *existing = task,
            None => self.tasks.push(task),
        }
    }

    /// Replace the record with the given id. Unknown ids are ignored.
    pub fn replace(&mut self, id: Uuid, task: Task) -> bool {
        match self.tasks.iter_mut().find(|existing| existing.id == id) {
            Some(existing) => {
                *existing = task;
                true
            }
            None => false,
        }
    }

    /// Remove the record with the given id. Unknown ids are ignored.
    pub fn remove(&mut self, id: Uuid) -> Option<Task> {
        let index = self.tasks.iter().position(|task| task.id == id)?;
        Some(self.tasks.remove(index))
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::{TaskDraft, TaskStatus};

    fn task(title: &str) -> Task {
        Task::from_draft(Uuid::new_v4(), TaskDraft::new(title))
    }

    #[test]
    fn test_add_preserves_order() {
        let mut store = TaskStore::new();
        store.add(task("first"));
        store.add(task("second"));
        store.add(task("third"));

        let titles: Vec<&str> = store.list().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_add_same_id_replaces_in_place() {
        let mut store = TaskStore::new();
        let a = task("a");
        let id = a.id;
        store.add(a.clone());
        store.add(task("b"));

        let mut replacement = a;
        replacement.title = "a2".to_string();
        store.add(replacement);

        assert_eq!(store.len(), 2);
        assert_eq!(store.get(id).unwrap().title, "a2");
        // Still in its original slot
        assert_eq!(store.list()[0].id, id);
    }

    #[test]
    fn test_replace_existing() {
        let mut store = TaskStore::new();
        let original = task("original");
        let id = original.id;
        store.add(original.clone());

        let mut updated = original;
        updated.status = TaskStatus::Done;
        assert!(store.replace(id, updated));
        assert_eq!(store.get(id).unwrap().status, TaskStatus::Done);
    }

    #[test]
    fn test_replace_unknown_id_is_noop() {
        let mut store = TaskStore::new();
        store.add(task("only"));

        let stray = task("stray");
        assert!(!store.replace(Uuid::new_v4(), stray));
        assert_eq!(store.len(), 1);
        assert_eq!(store.list()[0].title, "only");
    }

    #[test]
    fn test_remove() {
        let mut store = TaskStore::new();
        let doomed = task("doomed");
        let id = doomed.id;
        store.add(doomed);
        store.add(task("survivor"));

        let removed = store.remove(id);
        assert_eq!(removed.unwrap().title, "doomed");
        assert_eq!(store.len(), 1);
        assert!(store.get(id).is_none());
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut store = TaskStore::new();
        store.add(task("keep"));

        assert!(store.remove(Uuid::new_v4()).is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_ids_stay_unique() {
        let mut store = TaskStore::new();
        let a = task("a");
        store.add(a.clone());
        store.add(a.clone());
        store.add(a);

        assert_eq!(store.len(), 1);
    }
}
