//! Business logic for each task operation.
//!
//! Every operation has the same shape: `load()` the document, locate and
//! mutate in memory, `save()` the document, return the affected record(s).
//! Commands take `&mut S` and never touch stdout/stderr; the CLI (or any
//! other UI) formats the returned values.

use crate::model::Priority;
use serde::Deserialize;
use std::str::FromStr;

pub mod add;
pub mod complete;
pub mod delete;
pub mod list;
pub mod search;
pub mod split;
pub mod update;

/// Fields for a task about to be created.
#[derive(Debug, Clone, Default)]
pub struct TaskDraft {
    pub description: String,
    pub priority: Priority,
    pub tags: Vec<String>,
    pub due: Option<String>,
}

impl TaskDraft {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..Self::default()
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_due(mut self, due: impl Into<String>) -> Self {
        self.due = Some(due.into());
        self
    }
}

/// A sparse update: only present fields are applied. `tags` replaces the
/// whole set; `due: Some(None)` clears the due date. There is deliberately
/// no `completed` field — completion state changes only through
/// [`complete`].
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub tags: Option<Vec<String>>,
    pub due: Option<Option<String>>,
}

impl TaskPatch {
    pub fn is_empty(&self) -> bool {
        self.description.is_none()
            && self.priority.is_none()
            && self.tags.is_none()
            && self.due.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    Open,
    Completed,
}

impl FromStr for StatusFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(StatusFilter::Open),
            "completed" => Ok(StatusFilter::Completed),
            other => Err(format!("invalid status: {other} (expected open or completed)")),
        }
    }
}

/// Filters for [`list`], all optional and composable. No filter at all
/// yields the inbox-then-completed union.
#[derive(Debug, Clone, Default)]
pub struct ListFilter {
    pub status: Option<StatusFilter>,
    pub tag: Option<String>,
    pub priority: Option<Priority>,
    pub limit: Option<usize>,
}
