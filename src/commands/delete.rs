use crate::error::{Result, TaskpadError};
use crate::store::DocumentStore;

/// Remove a task permanently from whichever collection holds it.
pub fn run<S: DocumentStore>(store: &mut S, id: &str) -> Result<()> {
    let mut document = store.load()?;

    if let Some(index) = document.inbox.iter().position(|t| t.id == id) {
        document.inbox.remove(index);
    } else if let Some(index) = document.completed.iter().position(|t| t.id == id) {
        document.completed.remove(index);
    } else {
        return Err(TaskpadError::TaskNotFound(id.to_string()));
    }

    store.save(&document)?;
    Ok(())
}
