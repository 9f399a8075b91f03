//! # API Facade
//!
//! [`TaskApi`] is the single entry point for every task operation,
//! regardless of the UI driving it. It dispatches to the command layer and
//! owns the store behind a mutex, so a shared `&TaskApi` guarantees
//! at-most-one in-flight load-mutate-save cycle per store — the
//! serialization boundary a concurrent host needs. Within one thread the
//! `&mut` discipline of the command layer already enforces this; the mutex
//! extends it across threads.
//!
//! The facade holds no business logic and performs no terminal I/O. It is
//! generic over [`DocumentStore`]: production uses `TaskApi<FileStore>`,
//! tests use `TaskApi<InMemoryStore>`.

use crate::commands::{self, ListFilter, TaskDraft, TaskPatch};
use crate::error::{Result, TaskpadError};
use crate::model::Task;
use crate::store::DocumentStore;
use std::sync::{Mutex, MutexGuard};

pub struct TaskApi<S: DocumentStore> {
    store: Mutex<S>,
}

impl<S: DocumentStore> TaskApi<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: Mutex::new(store),
        }
    }

    fn store(&self) -> Result<MutexGuard<'_, S>> {
        self.store
            .lock()
            .map_err(|_| TaskpadError::Store("task store mutex poisoned".to_string()))
    }

    pub fn add(&self, draft: TaskDraft) -> Result<Task> {
        commands::add::run(&mut *self.store()?, draft)
    }

    pub fn list(&self, filter: &ListFilter) -> Result<Vec<Task>> {
        commands::list::run(&*self.store()?, filter)
    }

    pub fn search(&self, query: &str) -> Result<Vec<Task>> {
        commands::search::run(&*self.store()?, query)
    }

    pub fn update(&self, id: &str, patch: &TaskPatch) -> Result<Task> {
        commands::update::run(&mut *self.store()?, id, patch)
    }

    pub fn complete(&self, id: &str) -> Result<Task> {
        commands::complete::run(&mut *self.store()?, id)
    }

    pub fn delete(&self, id: &str) -> Result<()> {
        commands::delete::run(&mut *self.store()?, id)
    }

    pub fn split(&self, parent_id: &str, descriptions: &[String]) -> Result<Vec<Task>> {
        commands::split::run(&mut *self.store()?, parent_id, descriptions)
    }

    /// Fetch a single task without mutating anything.
    pub fn get(&self, id: &str) -> Result<Option<Task>> {
        let document = self.store()?.load()?;
        Ok(document.find_by_id(id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn dispatches_through_the_command_layer() {
        let api = TaskApi::new(InMemoryStore::new());
        let task = api.add(TaskDraft::new("Via facade")).unwrap();

        assert_eq!(api.get(&task.id).unwrap().unwrap().description, "Via facade");
        assert_eq!(api.list(&ListFilter::default()).unwrap().len(), 1);

        let done = api.complete(&task.id).unwrap();
        assert!(done.completed);
        api.delete(&task.id).unwrap();
        assert!(api.get(&task.id).unwrap().is_none());
    }

    #[test]
    fn concurrent_adds_are_all_persisted() {
        let api = Arc::new(TaskApi::new(InMemoryStore::new()));

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let api = Arc::clone(&api);
                thread::spawn(move || {
                    api.add(TaskDraft::new(format!("Task {i}"))).unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        // Without the mutex these read-modify-write cycles would race and
        // drop writes; serialized, all eight land.
        assert_eq!(api.list(&ListFilter::default()).unwrap().len(), 8);
    }
}
