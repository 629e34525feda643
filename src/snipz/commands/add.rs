use crate::codec::DELIMITER;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, SnipzError};
use crate::model::Snippet;
use crate::store::SnippetStore;

/// Validated add. Content is trimmed and must be non-empty, the snippet must
/// carry a category or at least one tag, and neither classification field
/// may contain the persisted-format delimiter. All checks run before the
/// store is touched.
pub fn run<S: SnippetStore>(store: &mut S, snippet: Snippet) -> Result<CmdResult> {
    let snippet = validate(snippet)?;
    let stored = store.add(snippet)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Snippet added ({})",
        stored.id
    )));
    Ok(result.with_affected(vec![stored]))
}

fn validate(mut snippet: Snippet) -> Result<Snippet> {
    snippet.content = snippet.content.trim().to_string();
    if snippet.content.is_empty() {
        return Err(SnipzError::Validation(
            "content can not be empty".to_string(),
        ));
    }

    if snippet.category.is_empty() && snippet.tags.is_empty() {
        return Err(SnipzError::Validation(
            "category and tags can not both be empty".to_string(),
        ));
    }

    if snippet.category.contains(DELIMITER) || snippet.tags.contains(DELIMITER) {
        return Err(SnipzError::Validation(format!(
            "category and tags can not contain '{}'",
            DELIMITER
        )));
    }

    Ok(snippet)
}
