//! # Markdown Codec
//!
//! Bidirectional mapping between tasks and the on-disk text format.
//!
//! - [`line`]: one task ⇄ one markdown checklist line
//! - [`document`]: the whole file ⇄ a [`Document`] with its two ordered
//!   collections (`## Inbox`, `## Completed`)
//!
//! The grammar is deliberately loose: metadata tokens (`@due`, `#tag`,
//! `!priority`, the trailing `<!-- id:... -->` comment) are extracted from
//! anywhere in the line by a fixed sequence of find-and-strip passes. This
//! keeps hand-edited files working but means a description that itself
//! contains token-shaped text gets reinterpreted on the next load. See the
//! "Format caveats" section of the README.

pub mod document;
pub mod line;

pub use document::Document;
