/// A stored code snippet with its classification metadata.
///
/// The `id` is empty until the snippet is first persisted; the store assigns
/// it from the classification fields (see [`crate::id`]). `category` is a
/// single token that may encode a hierarchy with `-` (e.g. `backend-go`);
/// `tags` is a comma-joined list of free-form tokens. At least one of the two
/// must be non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snippet {
    pub id: String,
    pub category: String,
    pub tags: String,
    pub description: String,
    pub content: String,
}

impl Snippet {
    pub fn new(
        category: impl Into<String>,
        tags: impl Into<String>,
        description: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: String::new(),
            category: category.into(),
            tags: tags.into(),
            description: description.into(),
            content: content.into(),
        }
    }

    /// The individual tag tokens, with empty entries filtered out.
    pub fn tag_list(&self) -> Vec<&str> {
        self.tags
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect()
    }

    /// Field-merge rule used by update: non-empty incoming fields overwrite,
    /// empty incoming fields leave the stored value untouched. The id is
    /// always kept from `self`.
    pub fn merged_with(&self, incoming: &Snippet) -> Snippet {
        let mut merged = self.clone();
        if !incoming.category.is_empty() {
            merged.category = incoming.category.clone();
        }
        if !incoming.tags.is_empty() {
            merged.tags = incoming.tags.clone();
        }
        if !incoming.description.is_empty() {
            merged.description = incoming.description.clone();
        }
        if !incoming.content.is_empty() {
            merged.content = incoming.content.clone();
        }
        merged
    }

    /// Concatenates `extra` onto the content with exactly one separating
    /// newline, regardless of trailing/leading newlines on either side.
    pub fn with_appended(&self, extra: &str) -> Snippet {
        let mut appended = self.clone();
        appended.content = format!(
            "{}\n{}",
            self.content.trim_end_matches('\n'),
            extra.trim_start_matches('\n')
        );
        appended
    }
}
