//! # Taskpad Architecture
//!
//! Taskpad is a **UI-agnostic task inbox library**: durable storage of task
//! records in one human-editable markdown file, with query, mutation, and
//! split (decomposition) operations. The bundled binary is just one thin
//! client of the library.
//!
//! ## The layers
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs, print.rs)                      │
//! │  - Parses arguments, formats output, handles terminal I/O    │
//! │  - The ONLY place that knows about stdout/stderr/exit codes  │
//! └──────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                          │
//! │  - Thin facade over commands                                 │
//! │  - Serializes load-mutate-save cycles behind a mutex         │
//! └──────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                               │
//! │  - One module per operation, pure load→mutate→save logic     │
//! │  - No I/O assumptions beyond the store trait                 │
//! └──────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Storage + Codec (store/, markdown/, model.rs)               │
//! │  - DocumentStore trait; FileStore (prod), InMemoryStore      │
//! │  - Markdown line/document codec with exact round-trip        │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular arguments, returns
//! `Result<T>`, never writes to stdout/stderr, never exits the process,
//! and never assumes a terminal. The same core could serve an HTTP API or
//! a tool-invocation protocol server unchanged — both would be pure
//! translation layers over [`api::TaskApi`].
//!
//! ## Concurrency model
//!
//! Every operation is a whole-document read-modify-write; there is no
//! incremental path and no cross-process locking. Within one process,
//! [`api::TaskApi`] guarantees at-most-one in-flight cycle per store. Two
//! *processes* racing on the same file lose a write (last-writer-wins), a
//! documented limitation of the format, not a bug this crate masks.
//!
//! ## Module Overview
//!
//! - [`api`]: the facade — entry point for all operations
//! - [`commands`]: business logic for each operation
//! - [`markdown`]: the line and document codec
//! - [`model`]: core data types (`Task`, `Priority`) and id generation
//! - [`store`]: storage abstraction and implementations
//! - [`config`]: base-directory resolution
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod markdown;
pub mod model;
pub mod store;
