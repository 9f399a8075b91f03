use crate::commands::{ListFilter, StatusFilter};
use crate::error::Result;
use crate::model::Task;
use crate::store::DocumentStore;

/// Filter the document. `status` narrows to one collection; otherwise the
/// inbox-then-completed union is filtered by tag membership and priority
/// equality, then truncated to `limit` without reordering.
pub fn run<S: DocumentStore>(store: &S, filter: &ListFilter) -> Result<Vec<Task>> {
    let document = store.load()?;

    let mut tasks: Vec<Task> = match filter.status {
        Some(StatusFilter::Open) => document.inbox,
        Some(StatusFilter::Completed) => document.completed,
        None => {
            let mut all = document.inbox;
            all.extend(document.completed);
            all
        }
    };

    if let Some(tag) = &filter.tag {
        tasks.retain(|t| t.tags.iter().any(|candidate| candidate == tag));
    }
    if let Some(priority) = filter.priority {
        tasks.retain(|t| t.priority == priority);
    }
    if let Some(limit) = filter.limit {
        tasks.truncate(limit);
    }

    Ok(tasks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add, complete, TaskDraft};
    use crate::model::Priority;
    use crate::store::memory::InMemoryStore;

    fn seeded_store() -> InMemoryStore {
        let mut store = InMemoryStore::new();
        add::run(
            &mut store,
            TaskDraft::new("Write report")
                .with_priority(Priority::High)
                .with_tags(vec!["work".into()]),
        )
        .unwrap();
        add::run(
            &mut store,
            TaskDraft::new("Buy groceries").with_tags(vec!["home".into()]),
        )
        .unwrap();
        let done = add::run(
            &mut store,
            TaskDraft::new("Send invoice")
                .with_priority(Priority::High)
                .with_tags(vec!["work".into()]),
        )
        .unwrap();
        complete::run(&mut store, &done.id).unwrap();
        store
    }

    #[test]
    fn no_filter_returns_union_in_inbox_then_completed_order() {
        let store = seeded_store();
        let tasks = run(&store, &ListFilter::default()).unwrap();
        assert_eq!(tasks.len(), 3);
        assert_eq!(tasks[0].description, "Write report");
        assert_eq!(tasks[1].description, "Buy groceries");
        assert_eq!(tasks[2].description, "Send invoice");
        assert!(tasks[2].completed);
    }

    #[test]
    fn status_narrows_to_one_collection() {
        let store = seeded_store();
        let open = run(
            &store,
            &ListFilter {
                status: Some(StatusFilter::Open),
                ..ListFilter::default()
            },
        )
        .unwrap();
        assert_eq!(open.len(), 2);
        assert!(open.iter().all(|t| !t.completed));

        let completed = run(
            &store,
            &ListFilter {
                status: Some(StatusFilter::Completed),
                ..ListFilter::default()
            },
        )
        .unwrap();
        assert_eq!(completed.len(), 1);
        assert!(completed[0].completed);
    }

    #[test]
    fn tag_filter_spans_both_collections() {
        let store = seeded_store();
        let tasks = run(
            &store,
            &ListFilter {
                tag: Some("work".into()),
                ..ListFilter::default()
            },
        )
        .unwrap();
        assert_eq!(tasks.len(), 2);
        assert!(tasks.iter().all(|t| t.tags.contains(&"work".to_string())));
    }

    #[test]
    fn filters_compose_and_limit_truncates() {
        let store = seeded_store();
        let tasks = run(
            &store,
            &ListFilter {
                tag: Some("work".into()),
                priority: Some(Priority::High),
                limit: Some(1),
                ..ListFilter::default()
            },
        )
        .unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].priority, Priority::High);
        assert!(tasks[0].tags.contains(&"work".to_string()));
        // first match in document order, not a reordering
        assert_eq!(tasks[0].description, "Write report");
    }

    #[test]
    fn limit_larger_than_result_is_harmless() {
        let store = seeded_store();
        let tasks = run(
            &store,
            &ListFilter {
                limit: Some(50),
                ..ListFilter::default()
            },
        )
        .unwrap();
        assert_eq!(tasks.len(), 3);
    }
}
