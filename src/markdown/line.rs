//! Task line codec.
//!
//! Encoding is canonical: description first, then ` @due`, ` #tag`s in
//! order, ` !priority` (only when not medium), and the metadata comment
//! last. Decoding accepts tokens anywhere in the line and strips them in a
//! fixed order: metadata comment, priority, tags, due. Each pass removes
//! the first match (tags: all matches) and trims the remainder.

use crate::error::Result;
use crate::model::{generate_id, Priority, Task};
use once_cell::sync::Lazy;
use regex::Regex;

// Token classes are ASCII on purpose: the format predates this
// implementation and hand-written files rely on `#tag`/`!prio` words
// being `[0-9A-Za-z_]+`.
static TASK_LINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^- \[( |x)\] (.+)$").expect("valid pattern"));
static META_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"<!-- (.+?) -->$").expect("valid pattern"));
static PRIORITY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!([0-9A-Za-z_]+)").expect("valid pattern"));
static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"#([0-9A-Za-z_]+)").expect("valid pattern"));
static DUE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@(\d{4}-\d{2}-\d{2}(?:T\d{2}:\d{2})?)").expect("valid pattern"));

/// Encode one task as one markdown checklist line (no trailing newline).
pub fn encode(task: &Task) -> String {
    let checkbox = if task.completed { "[x]" } else { "[ ]" };
    let mut line = format!("- {} {}", checkbox, task.description);

    if let Some(due) = &task.due {
        line.push_str(&format!(" @{due}"));
    }
    for tag in &task.tags {
        line.push_str(&format!(" #{tag}"));
    }
    if task.priority != Priority::Medium {
        line.push_str(&format!(" !{}", task.priority));
    }

    let mut meta = format!("id:{}", task.id);
    if let Some(parent) = &task.parent {
        meta.push_str(&format!(" parent:{parent}"));
    }
    line.push_str(&format!(" <!-- {meta} -->"));

    line
}

/// Decode one line. `Ok(None)` means "not a task line" — headers, blank
/// lines, and prose are a normal negative result, not an error. A matching
/// line with an unknown `!word` priority token fails with `InvalidPriority`.
pub fn decode(line: &str) -> Result<Option<Task>> {
    let Some(caps) = TASK_LINE_RE.captures(line) else {
        return Ok(None);
    };
    let completed = caps.get(1).map(|m| m.as_str()) == Some("x");
    let mut content = caps.get(2).map_or("", |m| m.as_str()).to_string();

    // Pass 1: trailing metadata comment. Hand-written lines may omit it;
    // they get a freshly generated id.
    let mut id = None;
    let mut parent = None;
    if let Some(meta) = META_RE
        .captures(&content)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
    {
        content = META_RE.replace(&content, "").trim().to_string();
        for part in meta.split(' ') {
            if let Some(value) = part.strip_prefix("id:") {
                id = Some(value.to_string());
            } else if let Some(value) = part.strip_prefix("parent:") {
                parent = Some(value.to_string());
            }
        }
    }

    // Pass 2: first `!word` token is the priority. Later ones stay in the
    // description text.
    let mut priority = Priority::Medium;
    if let Some(word) = PRIORITY_RE
        .captures(&content)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
    {
        priority = word.parse()?;
        content = PRIORITY_RE.replace(&content, "").trim().to_string();
    }

    // Pass 3: every `#word` token is a tag, left to right.
    let tags: Vec<String> = TAG_RE
        .captures_iter(&content)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .collect();
    content = TAG_RE.replace_all(&content, "").trim().to_string();

    // Pass 4: first `@YYYY-MM-DD[THH:MM]` token is the due date.
    let mut due = None;
    if let Some(date) = DUE_RE
        .captures(&content)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
    {
        due = Some(date);
        content = DUE_RE.replace(&content, "").trim().to_string();
    }

    Ok(Some(Task {
        id: id.unwrap_or_else(generate_id),
        description: content.trim().to_string(),
        completed,
        priority,
        tags,
        due,
        parent,
    }))
}
