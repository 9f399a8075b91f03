//! Document codec: the whole file ⇄ two ordered task collections.

use super::line;
use crate::error::Result;
use crate::model::Task;

const PREAMBLE: &str = "# Taskpad";
const INBOX_HEADER: &str = "## Inbox";
const COMPLETED_HEADER: &str = "## Completed";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Inbox,
    Completed,
}

/// The full persisted state: open tasks (`inbox`) and closed tasks
/// (`completed`), both in file order. A task belongs to exactly one
/// collection at a time; the document is the sole source of truth and is
/// reconstructed from disk on every load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub inbox: Vec<Task>,
    pub completed: Vec<Task>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a whole document. Lines before the first recognized header, or
    /// under an unrecognized one, are ignored; within a section every line
    /// that decodes to a task is collected in file order.
    pub fn parse(content: &str) -> Result<Self> {
        let mut doc = Self::new();
        if content.trim().is_empty() {
            return Ok(doc);
        }

        let mut section = None;
        for raw in content.lines() {
            if raw.starts_with(INBOX_HEADER) {
                section = Some(Section::Inbox);
            } else if raw.starts_with(COMPLETED_HEADER) {
                section = Some(Section::Completed);
            } else if let Some(section) = section {
                if let Some(task) = line::decode(raw)? {
                    match section {
                        Section::Inbox => doc.inbox.push(task),
                        Section::Completed => doc.completed.push(task),
                    }
                }
            }
        }

        Ok(doc)
    }

    /// Render the whole document: preamble, inbox section, blank separator,
    /// completed section. One line per task, collection order preserved.
    pub fn render(&self) -> String {
        let mut out = format!("{PREAMBLE}\n\n{INBOX_HEADER}\n");
        for task in &self.inbox {
            out.push_str(&line::encode(task));
            out.push('\n');
        }
        out.push_str(&format!("\n{COMPLETED_HEADER}\n"));
        for task in &self.completed {
            out.push_str(&line::encode(task));
            out.push('\n');
        }
        out
    }

    /// Look up a task by id, inbox first.
    pub fn find_by_id(&self, id: &str) -> Option<&Task> {
        self.all_tasks().find(|t| t.id == id)
    }

    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Task> {
        self.inbox
            .iter_mut()
            .chain(self.completed.iter_mut())
            .find(|t| t.id == id)
    }

    /// All tasks in inbox-then-completed order.
    pub fn all_tasks(&self) -> impl Iterator<Item = &Task> {
        self.inbox.iter().chain(self.completed.iter())
    }

    pub fn len(&self) -> usize {
        self.inbox.len() + self.completed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inbox.is_empty() && self.completed.is_empty()
    }
}
