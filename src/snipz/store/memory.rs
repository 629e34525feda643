use super::{SearchResults, SnippetStore, StoreStats};
use crate::error::{Result, SnipzError};
use crate::id::{self, ID_LEN};
use crate::model::Snippet;

/// In-memory storage for testing. Same contract as the file store —
/// insertion order, duplicate checks, prefix lookup — without persistence.
#[derive(Default)]
pub struct InMemoryStore {
    snippets: Vec<Snippet>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnippetStore for InMemoryStore {
    fn add(&mut self, mut snippet: Snippet) -> Result<Snippet> {
        if snippet.id.is_empty() {
            snippet.id = id::generate(&snippet)?;
        }

        for stored in &self.snippets {
            if stored.id == snippet.id {
                return Err(SnipzError::Duplicate(format!(
                    "id {} is already stored (same category and tags?)",
                    snippet.id
                )));
            }
            if stored.content == snippet.content {
                return Err(SnipzError::Duplicate(format!(
                    "identical content already stored under id {}",
                    stored.id
                )));
            }
        }

        self.snippets.push(snippet.clone());
        Ok(snippet)
    }

    fn get_by_id(&self, id: &str) -> Result<Snippet> {
        if id.len() < ID_LEN {
            return Err(SnipzError::Validation(format!("invalid id: {}", id)));
        }
        self.snippets
            .iter()
            .find(|s| s.id.starts_with(id))
            .cloned()
            .ok_or_else(|| SnipzError::NotFound(format!("no snippet with id {}", id)))
    }

    fn update(&mut self, incoming: &Snippet) -> Result<Snippet> {
        let stored = self.get_by_id(&incoming.id)?;
        let merged = stored.merged_with(incoming);
        self.remove(&incoming.id)?;
        self.add(merged)
    }

    fn append(&mut self, id: &str, extra: &str) -> Result<Snippet> {
        let stored = self.get_by_id(id)?;
        let appended = stored.with_appended(extra);
        self.remove(id)?;
        self.add(appended)
    }

    fn remove(&mut self, id: &str) -> Result<()> {
        if id.len() < ID_LEN {
            return Err(SnipzError::Validation(format!(
                "invalid id, too short: {}",
                id
            )));
        }
        self.snippets.retain(|s| !s.id.starts_with(id));
        Ok(())
    }

    fn search(&self, category: &str, tag_query: &str) -> Result<SearchResults> {
        Ok(SearchResults {
            snippets: self
                .snippets
                .iter()
                .filter(|s| super::snippet_matches(s, category, tag_query))
                .cloned()
                .collect(),
            warnings: Vec::new(),
        })
    }

    fn stats(&self) -> Result<StoreStats> {
        Ok(StoreStats::collect(&self.snippets, Vec::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mirrors_file_store_duplicate_checks() {
        let mut store = InMemoryStore::new();
        store
            .add(Snippet::new("go", "http", "", "body"))
            .unwrap();

        let err = store
            .add(Snippet::new("go", "http", "", "other body"))
            .unwrap_err();
        assert!(matches!(err, SnipzError::Duplicate(_)));

        let err = store
            .add(Snippet::new("rust", "tokio", "", "body"))
            .unwrap_err();
        assert!(matches!(err, SnipzError::Duplicate(_)));
    }

    #[test]
    fn search_keeps_insertion_order() {
        let mut store = InMemoryStore::new();
        store.add(Snippet::new("go", "a", "", "first")).unwrap();
        store.add(Snippet::new("go", "b", "", "second")).unwrap();

        let results = store.search("", "").unwrap();
        assert_eq!(results.snippets[0].content, "first");
        assert_eq!(results.snippets[1].content, "second");
    }
}
