use super::DocumentStore;
use crate::error::{Result, TaskpadError};
use crate::markdown::Document;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

pub const DOCUMENT_FILENAME: &str = "tasks.md";

/// File-backed storage: one document file per base directory.
///
/// No locking and no concurrency token: two processes racing on the same
/// file lose one write (last-writer-wins on the whole file). Within one
/// process, [`crate::api::TaskApi`] serializes cycles.
pub struct FileStore {
    base_dir: PathBuf,
}

impl FileStore {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn document_path(&self) -> PathBuf {
        self.base_dir.join(DOCUMENT_FILENAME)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.base_dir.exists() {
            fs::create_dir_all(&self.base_dir).map_err(TaskpadError::Io)?;
        }
        Ok(())
    }
}

impl DocumentStore for FileStore {
    fn load(&self) -> Result<Document> {
        self.ensure_dir()?;
        match fs::read_to_string(self.document_path()) {
            Ok(content) => Document::parse(&content),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(Document::new()),
            Err(err) => Err(TaskpadError::Io(err)),
        }
    }

    fn save(&mut self, document: &Document) -> Result<()> {
        self.ensure_dir()?;
        fs::write(self.document_path(), document.render()).map_err(TaskpadError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Priority, Task};

    #[test]
    fn missing_file_loads_as_empty_document() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nested").join("taskpad"));
        let doc = store.load().unwrap();
        assert!(doc.is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path());

        let mut doc = Document::new();
        doc.inbox.push(
            Task::new("Water plants", Priority::Low, vec!["home".into()], None).unwrap(),
        );
        store.save(&doc).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, doc);
    }

    #[test]
    fn save_replaces_previous_contents() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path());

        let mut doc = Document::new();
        doc.inbox
            .push(Task::new("First", Priority::Medium, vec![], None).unwrap());
        store.save(&doc).unwrap();

        let doc = Document::new();
        store.save(&doc).unwrap();

        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn saving_empty_then_reloading_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path());
        store.save(&Document::new()).unwrap();
        assert!(store.load().unwrap().is_empty());
        assert!(store.document_path().exists());
    }
}
