use crate::commands::TaskDraft;
use crate::error::Result;
use crate::model::Task;
use crate::store::DocumentStore;

pub fn run<S: DocumentStore>(store: &mut S, draft: TaskDraft) -> Result<Task> {
    let mut document = store.load()?;
    let task = Task::new(draft.description, draft.priority, draft.tags, draft.due)?;
    document.inbox.push(task.clone());
    store.save(&document)?;
    Ok(task)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Priority;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn appends_to_inbox_end() {
        let mut store = InMemoryStore::new();
        run(&mut store, TaskDraft::new("First")).unwrap();
        run(&mut store, TaskDraft::new("Second")).unwrap();

        let doc = store.load().unwrap();
        assert_eq!(doc.inbox.len(), 2);
        assert_eq!(doc.inbox[0].description, "First");
        assert_eq!(doc.inbox[1].description, "Second");
        assert!(doc.completed.is_empty());
    }

    #[test]
    fn returns_the_created_task() {
        let mut store = InMemoryStore::new();
        let task = run(
            &mut store,
            TaskDraft::new("Call Jordan")
                .with_priority(Priority::High)
                .with_tags(vec!["personal".into()])
                .with_due("2024-02-05T15:00"),
        )
        .unwrap();

        assert_eq!(task.description, "Call Jordan");
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.tags, vec!["personal"]);
        assert_eq!(task.due.as_deref(), Some("2024-02-05T15:00"));
        assert!(!task.completed);
        assert_eq!(store.load().unwrap().inbox[0], task);
    }

    #[test]
    fn bad_due_leaves_store_untouched() {
        let mut store = InMemoryStore::new();
        let err = run(&mut store, TaskDraft::new("Later").with_due("later")).unwrap_err();
        assert!(err.to_string().contains("later"));
        assert!(store.load().unwrap().is_empty());
    }
}
