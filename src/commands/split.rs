use crate::error::{Result, TaskpadError};
use crate::model::Task;
use crate::store::DocumentStore;

/// Decompose one inbox task into subtasks. The parent is removed
/// permanently (it is replaced, not kept as a container); each new task
/// records the parent id and is appended to the inbox.
pub fn run<S: DocumentStore>(store: &mut S, parent_id: &str, descriptions: &[String]) -> Result<Vec<Task>> {
    let mut document = store.load()?;
    let index = document
        .inbox
        .iter()
        .position(|t| t.id == parent_id)
        .ok_or_else(|| TaskpadError::TaskNotFound(parent_id.to_string()))?;

    document.inbox.remove(index);

    let subtasks: Vec<Task> = descriptions
        .iter()
        .map(|description| Task::new_subtask(description, parent_id))
        .collect();
    document.inbox.extend(subtasks.iter().cloned());

    store.save(&document)?;
    Ok(subtasks)
}
