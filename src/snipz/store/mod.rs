//! # Storage layer
//!
//! The [`SnippetStore`] trait abstracts persistence so the command layer can
//! run against different backends:
//!
//! - [`fs::FileStore`]: production flat-file storage, one encoded record per
//!   line (see [`crate::codec`]), full scan or full rewrite per operation.
//! - [`memory::InMemoryStore`]: in-memory storage for tests, same contract,
//!   no persistence.
//!
//! Every operation is synchronous and stateless between calls — there is no
//! cached index, no long-lived file handle, and no cross-process locking.
//! Two concurrent invocations against the same file can race; that is an
//! accepted limitation of the format, not something the store guards against.
//!
//! Scans never abort on a single bad line: malformed lines are reported as
//! [`ScanWarning`]s next to the results so callers (and tests) can see them,
//! while the rest of the store stays usable.

use crate::error::Result;
use crate::matcher;
use crate::model::Snippet;
use std::collections::{BTreeMap, BTreeSet};

pub mod fs;
pub mod memory;

/// A stored line that could not be decoded during a scan.
#[derive(Debug, Clone)]
pub struct ScanWarning {
    /// 1-based line number in the backing file.
    pub line: usize,
    pub reason: String,
}

/// Search results in file order, oldest-added first.
#[derive(Debug, Default)]
pub struct SearchResults {
    pub snippets: Vec<Snippet>,
    pub warnings: Vec<ScanWarning>,
}

/// Aggregate view over the whole store, used for the category/tag listings.
///
/// The distinct categories and tags are the key sets of the maps. Records
/// with an empty category (or no tags) still count toward `total` but do not
/// produce map entries.
#[derive(Debug, Default)]
pub struct StoreStats {
    pub total: usize,
    /// category -> tags appearing on records in that category
    pub category_tags: BTreeMap<String, BTreeSet<String>>,
    /// category -> number of records
    pub category_counts: BTreeMap<String, usize>,
    /// tag -> categories it appears under
    pub tag_categories: BTreeMap<String, BTreeSet<String>>,
    /// tag -> number of records carrying it
    pub tag_counts: BTreeMap<String, usize>,
    pub warnings: Vec<ScanWarning>,
}

impl StoreStats {
    pub fn collect<'a>(
        snippets: impl IntoIterator<Item = &'a Snippet>,
        warnings: Vec<ScanWarning>,
    ) -> Self {
        let mut stats = StoreStats {
            warnings,
            ..Default::default()
        };

        for snippet in snippets {
            stats.total += 1;

            if !snippet.category.is_empty() {
                *stats
                    .category_counts
                    .entry(snippet.category.clone())
                    .or_default() += 1;
                stats
                    .category_tags
                    .entry(snippet.category.clone())
                    .or_default()
                    .extend(snippet.tag_list().iter().map(|t| t.to_string()));
            }

            for tag in snippet.tag_list() {
                *stats.tag_counts.entry(tag.to_string()).or_default() += 1;
                if !snippet.category.is_empty() {
                    stats
                        .tag_categories
                        .entry(tag.to_string())
                        .or_default()
                        .insert(snippet.category.clone());
                } else {
                    stats.tag_categories.entry(tag.to_string()).or_default();
                }
            }
        }

        stats
    }
}

/// Abstract interface for snippet storage.
///
/// `add` assigns an id when the incoming record has none, and enforces the
/// two uniqueness invariants on every mutation path: no two records share an
/// id, and no two records share byte-identical content. `update` and
/// `append` are remove-then-add under the hood and go back through `add`'s
/// checks.
pub trait SnippetStore {
    /// Persist a new snippet, generating its id if empty. Returns the stored
    /// record with its assigned id.
    fn add(&mut self, snippet: Snippet) -> Result<Snippet>;

    /// Fetch the first record whose id starts with `id`. `id` must be at
    /// least [`crate::id::ID_LEN`] characters.
    fn get_by_id(&self, id: &str) -> Result<Snippet>;

    /// Merge non-empty fields of `incoming` into the stored record with the
    /// same id, keeping the id. Returns the merged record.
    fn update(&mut self, incoming: &Snippet) -> Result<Snippet>;

    /// Concatenate `extra` onto the record's content with exactly one
    /// separating newline. Returns the appended record.
    fn append(&mut self, id: &str, extra: &str) -> Result<Snippet>;

    /// Drop every record whose id starts with `id`.
    fn remove(&mut self, id: &str) -> Result<()>;

    /// Linear scan returning every record accepted by the matcher, in
    /// insertion order. An absent backing file is an empty store.
    fn search(&self, category: &str, tag_query: &str) -> Result<SearchResults>;

    /// Full-store aggregate counts for the category/tag listings.
    fn stats(&self) -> Result<StoreStats>;
}

pub(crate) fn snippet_matches(snippet: &Snippet, category: &str, tag_query: &str) -> bool {
    matcher::matches(&snippet.category, &snippet.tags, category, tag_query)
}
