use crate::error::Result;
use crate::model::Task;
use crate::store::DocumentStore;

/// Case-insensitive substring match against descriptions only, across both
/// collections. No ranking: results come back in document order.
pub fn run<S: DocumentStore>(store: &S, query: &str) -> Result<Vec<Task>> {
    let document = store.load()?;
    let query = query.to_lowercase();
    Ok(document
        .all_tasks()
        .filter(|t| t.description.to_lowercase().contains(&query))
        .cloned()
        .collect())
}
