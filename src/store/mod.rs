//! # Storage Layer
//!
//! The [`DocumentStore`] trait abstracts where the document text lives.
//! Every operation is a whole-document cycle: `load` reconstructs both
//! collections from the stored text, `save` serializes them back in full.
//! There is no incremental or indexed path — the document is small and the
//! full rewrite keeps the file human-editable.
//!
//! `save` takes `&mut self`, so exclusive access is a compile-time property
//! for direct users. Hosts that share a store across threads go through
//! [`crate::api::TaskApi`], which serializes whole load-mutate-save cycles
//! behind a mutex.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one `tasks.md` per base
//!   directory
//! - [`memory::InMemoryStore`]: testing; keeps the rendered text in memory
//!   so tests exercise the codec on every cycle

use crate::error::Result;
use crate::markdown::Document;

pub mod fs;
pub mod memory;

pub trait DocumentStore {
    /// Load the full document. A missing file is the normal first-run state
    /// and yields an empty document, not an error.
    fn load(&self) -> Result<Document>;

    /// Persist the full document, replacing any previous contents.
    fn save(&mut self, document: &Document) -> Result<()>;
}
