//! # API facade
//!
//! Thin dispatch over the command layer, generic over the storage backend so
//! UIs and tests can run against `FileStore` or `InMemoryStore` alike. No
//! business logic lives here and nothing here touches stdout — commands
//! return structured [`CmdResult`]s and the caller decides how to render
//! them.

use crate::commands::{self, CmdResult};
use crate::error::Result;
use crate::model::Snippet;
use crate::store::SnippetStore;

pub struct SnipzApi<S: SnippetStore> {
    store: S,
}

impl<S: SnippetStore> SnipzApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn add(&mut self, snippet: Snippet) -> Result<CmdResult> {
        commands::add::run(&mut self.store, snippet)
    }

    pub fn update(&mut self, incoming: &Snippet) -> Result<CmdResult> {
        commands::update::run(&mut self.store, incoming)
    }

    pub fn append(&mut self, id: &str, extra: &str) -> Result<CmdResult> {
        commands::append::run(&mut self.store, id, extra)
    }

    pub fn remove(&mut self, id: &str) -> Result<CmdResult> {
        commands::remove::run(&mut self.store, id)
    }

    pub fn search(&self, category: &str, tag_query: &str) -> Result<CmdResult> {
        commands::search::run(&self.store, category, tag_query)
    }

    pub fn merge(&mut self, ids: &[String]) -> Result<CmdResult> {
        commands::merge::run(&mut self.store, ids)
    }

    /// Fetches the record an interactive edit starts from.
    pub fn get_snippet(&self, id: &str) -> Result<Snippet> {
        self.store.get_by_id(id)
    }

    /// Applies an interactive edit: add the edited record (fresh id), then
    /// remove the original.
    pub fn apply_edit(&mut self, original_id: &str, edited: Snippet) -> Result<CmdResult> {
        commands::edit::run(&mut self.store, original_id, edited)
    }

    pub fn list(&self) -> Result<CmdResult> {
        commands::list::run(&self.store)
    }
}
