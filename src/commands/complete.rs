use crate::error::{Result, TaskpadError};
use crate::model::Task;
use crate::store::DocumentStore;

/// Move a task from inbox to completed. Only inbox tasks can be completed;
/// an already-completed id fails `TaskNotFound`.
pub fn run<S: DocumentStore>(store: &mut S, id: &str) -> Result<Task> {
    let mut document = store.load()?;
    let index = document
        .inbox
        .iter()
        .position(|t| t.id == id)
        .ok_or_else(|| TaskpadError::TaskNotFound(id.to_string()))?;

    let mut task = document.inbox.remove(index);
    task.completed = true;
    document.completed.push(task.clone());
    store.save(&document)?;
    Ok(task)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, TaskDraft};
    use crate::store::memory::InMemoryStore;

    #[test]
    fn moves_task_to_completed_end() {
        let mut store = InMemoryStore::new();
        let task = add::run(&mut store, TaskDraft::new("Ship release")).unwrap();
        add::run(&mut store, TaskDraft::new("Other")).unwrap();

        let done = run(&mut store, &task.id).unwrap();
        assert!(done.completed);
        assert_eq!(done.id, task.id);

        let doc = store.load().unwrap();
        assert_eq!(doc.inbox.len(), 1);
        assert_eq!(doc.completed.len(), 1);
        assert_eq!(doc.completed[0].id, task.id);
    }

    #[test]
    fn second_complete_fails_not_found() {
        let mut store = InMemoryStore::new();
        let task = add::run(&mut store, TaskDraft::new("Once")).unwrap();
        run(&mut store, &task.id).unwrap();

        let err = run(&mut store, &task.id).unwrap_err();
        assert!(matches!(err, TaskpadError::TaskNotFound(id) if id == task.id));
    }

    #[test]
    fn unknown_id_fails_not_found() {
        let mut store = InMemoryStore::new();
        let err = run(&mut store, "missing1").unwrap_err();
        assert!(matches!(err, TaskpadError::TaskNotFound(_)));
    }
}
