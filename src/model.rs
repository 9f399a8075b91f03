use crate::error::{Result, TaskpadError};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const ID_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";
pub const ID_LEN: usize = 8;

/// Generate a fresh task identifier: 8 chars drawn from `[a-z0-9]`.
///
/// Collision resistance is statistical (36^8 values); the store does not
/// re-check uniqueness.
pub fn generate_id() -> String {
    let mut rng = rand::thread_rng();
    (0..ID_LEN)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = TaskpadError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            other => Err(TaskpadError::InvalidPriority(other.to_string())),
        }
    }
}

/// A single unit of work.
///
/// `description` must stay a single line (the file format is line-oriented);
/// the codec never re-validates this. `due` is an opaque lexical token of the
/// shape `YYYY-MM-DD` or `YYYY-MM-DDTHH:MM` — calendar validity is not
/// checked, by compatibility with hand-edited files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub description: String,
    pub completed: bool,
    pub priority: Priority,
    pub tags: Vec<String>,
    pub due: Option<String>,
    pub parent: Option<String>,
}

impl Task {
    /// Construct a new open task with a freshly generated id.
    pub fn new(
        description: impl Into<String>,
        priority: Priority,
        tags: Vec<String>,
        due: Option<String>,
    ) -> Result<Self> {
        if let Some(due) = &due {
            if !is_due_token(due) {
                return Err(TaskpadError::InvalidDue(due.clone()));
            }
        }
        Ok(Self {
            id: generate_id(),
            description: description.into(),
            completed: false,
            priority,
            tags,
            due,
            parent: None,
        })
    }

    /// Construct a child task produced by splitting `parent_id`.
    pub fn new_subtask(description: impl Into<String>, parent_id: &str) -> Self {
        Self {
            id: generate_id(),
            description: description.into(),
            completed: false,
            priority: Priority::Medium,
            tags: Vec::new(),
            due: None,
            parent: Some(parent_id.to_string()),
        }
    }
}

/// Whether `s` is exactly a due token: `YYYY-MM-DD` or `YYYY-MM-DDTHH:MM`.
///
/// Lexical shape only — `2024-13-99` passes. The decoder extracts due values
/// with the same pattern, so anything accepted here survives a round trip.
pub fn is_due_token(s: &str) -> bool {
    let bytes = s.as_bytes();
    let date_ok = |b: &[u8]| {
        b.len() == 10
            && b.iter().enumerate().all(|(i, c)| match i {
                4 | 7 => *c == b'-',
                _ => c.is_ascii_digit(),
            })
    };
    match bytes.len() {
        10 => date_ok(bytes),
        16 => {
            date_ok(&bytes[..10])
                && bytes[10] == b'T'
                && bytes[11].is_ascii_digit()
                && bytes[12].is_ascii_digit()
                && bytes[13] == b':'
                && bytes[14].is_ascii_digit()
                && bytes[15].is_ascii_digit()
        }
        _ => false,
    }
}
