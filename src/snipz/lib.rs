//! # Snipz Architecture
//!
//! Snipz is a **UI-agnostic snippet-store library** with a CLI client on top.
//! The CLI (`main.rs`, `args.rs`) is the only place that knows about
//! stdout/stderr, prompts, or exit codes; everything from [`api`] inward
//! takes plain Rust arguments and returns `Result` types.
//!
//! ```text
//! CLI (main.rs, args.rs)          argument parsing, prompts, rendering
//!        │
//! API facade (api.rs)             thin dispatch, generic over the store
//!        │
//! Commands (commands/*.rs)        one workflow per module, pure logic
//!        │
//! Storage (store/)                SnippetStore trait; FileStore / InMemoryStore
//! ```
//!
//! The leaf modules carry the actual mechanics:
//!
//! - [`model`]: the [`model::Snippet`] record and its merge/append rules
//! - [`codec`]: the one-line persisted encoding
//! - [`id`]: digest-derived identifiers
//! - [`matcher`]: category/tag search predicate
//! - [`editor`]: external editor round trip
//! - [`config`]: data-dir configuration
//! - [`error`]: error types
//!
//! Commands are tested against [`store::memory::InMemoryStore`]; the file
//! store has its own tests over temp dirs; `tests/` drives the binary
//! end-to-end.

pub mod api;
pub mod codec;
pub mod commands;
pub mod config;
pub mod editor;
pub mod error;
pub mod id;
pub mod matcher;
pub mod model;
pub mod store;
