use crate::commands::{add, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Snippet;
use crate::store::SnippetStore;

/// Applies the result of an interactive edit. The edited record is treated
/// as logically new: its id is cleared and regenerated from the (possibly
/// changed) classification. The new record is added first, then the original
/// is removed — the reverse of merge's ordering, kept that way on purpose.
/// A consequence worth knowing: an edit that changes neither classification
/// nor content regenerates the same id (or the same content) as the
/// still-present original and is rejected as a duplicate, aborting with the
/// store unchanged.
pub fn run<S: SnippetStore>(
    store: &mut S,
    original_id: &str,
    mut edited: Snippet,
) -> Result<CmdResult> {
    edited.id.clear();

    let mut result = add::run(store, edited)?;
    store.remove(original_id)?;

    result.add_message(CmdMessage::info(format!(
        "Replaced snippet {}",
        original_id
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SnipzError;
    use crate::store::memory::InMemoryStore;
    use crate::store::SnippetStore;

    #[test]
    fn reclassified_edit_replaces_the_record() {
        let mut store = InMemoryStore::new();
        let added = add::run(&mut store, Snippet::new("go", "http", "", "body")).unwrap();
        let original_id = added.affected[0].id.clone();

        let edited = Snippet::new("go", "http,client", "", "body reworked");
        let result = run(&mut store, &original_id, edited).unwrap();

        let new_id = result.affected[0].id.clone();
        assert_ne!(new_id, original_id);
        assert!(matches!(
            store.get_by_id(&original_id),
            Err(SnipzError::NotFound(_))
        ));
        assert_eq!(store.get_by_id(&new_id).unwrap().content, "body reworked");
    }

    #[test]
    fn unchanged_edit_is_rejected_and_store_is_untouched() {
        // add-before-remove: the untouched original is still present when
        // the edited copy goes through add's duplicate checks
        let mut store = InMemoryStore::new();
        let added = add::run(&mut store, Snippet::new("go", "http", "", "body")).unwrap();
        let original_id = added.affected[0].id.clone();

        let unchanged = Snippet::new("go", "http", "", "body");
        let err = run(&mut store, &original_id, unchanged).unwrap_err();
        assert!(matches!(err, SnipzError::Duplicate(_)));

        assert!(store.get_by_id(&original_id).is_ok());
        assert_eq!(store.search("", "").unwrap().snippets.len(), 1);
    }

    #[test]
    fn content_only_edit_with_same_classification_is_rejected() {
        // the regenerated id equals the original's id when category and tags
        // are unchanged, so even a content rewrite collides
        let mut store = InMemoryStore::new();
        let added = add::run(&mut store, Snippet::new("go", "http", "", "body")).unwrap();
        let original_id = added.affected[0].id.clone();

        let edited = Snippet::new("go", "http", "", "different body");
        let err = run(&mut store, &original_id, edited).unwrap_err();
        assert!(matches!(err, SnipzError::Duplicate(_)));
        assert!(store.get_by_id(&original_id).is_ok());
    }
}
