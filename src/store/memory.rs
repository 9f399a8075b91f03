use super::DocumentStore;
use crate::error::Result;
use crate::markdown::Document;

/// In-memory storage for testing. Does NOT persist data.
///
/// Holds the rendered document text rather than the parsed collections, so
/// every load/save cycle in a test goes through the markdown codec exactly
/// like the file store does.
#[derive(Default)]
pub struct InMemoryStore {
    content: Option<String>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The rendered document text, if anything has been saved yet.
    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }
}

impl DocumentStore for InMemoryStore {
    fn load(&self) -> Result<Document> {
        match &self.content {
            Some(content) => Document::parse(content),
            None => Ok(Document::new()),
        }
    }

    fn save(&mut self, document: &Document) -> Result<()> {
        self.content = Some(document.render());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Priority, Task};

    #[test]
    fn fresh_store_loads_empty() {
        let store = InMemoryStore::new();
        assert!(store.load().unwrap().is_empty());
        assert!(store.content().is_none());
    }

    #[test]
    fn save_goes_through_the_codec() {
        let mut store = InMemoryStore::new();
        let mut doc = Document::new();
        doc.inbox
            .push(Task::new("Check in", Priority::Medium, vec![], None).unwrap());
        store.save(&doc).unwrap();

        assert!(store.content().unwrap().contains("- [ ] Check in"));
        assert_eq!(store.load().unwrap(), doc);
    }
}
