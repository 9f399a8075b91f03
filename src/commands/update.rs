use crate::commands::TaskPatch;
use crate::error::{Result, TaskpadError};
use crate::model::{is_due_token, Task};
use crate::store::DocumentStore;

/// Apply a sparse update to a task in either collection. Absent patch
/// fields are left untouched; the id and completion state never change
/// here.
pub fn run<S: DocumentStore>(store: &mut S, id: &str, patch: &TaskPatch) -> Result<Task> {
    let mut document = store.load()?;
    let task = document
        .find_by_id_mut(id)
        .ok_or_else(|| TaskpadError::TaskNotFound(id.to_string()))?;

    if let Some(description) = &patch.description {
        task.description = description.clone();
    }
    if let Some(priority) = patch.priority {
        task.priority = priority;
    }
    if let Some(tags) = &patch.tags {
        task.tags = tags.clone();
    }
    if let Some(due) = &patch.due {
        if let Some(due) = due {
            if !is_due_token(due) {
                return Err(TaskpadError::InvalidDue(due.clone()));
            }
        }
        task.due = due.clone();
    }

    let updated = task.clone();
    store.save(&document)?;
    Ok(updated)
}
