use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, SnipzError};
use crate::model::Snippet;
use crate::store::SnippetStore;

/// Field-merge update: non-empty incoming fields overwrite the stored
/// record, the id never changes. Requires a target id before touching the
/// store.
pub fn run<S: SnippetStore>(store: &mut S, incoming: &Snippet) -> Result<CmdResult> {
    if incoming.id.is_empty() {
        return Err(SnipzError::Validation("id is empty".to_string()));
    }

    let merged = store.update(incoming)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Snippet updated ({})",
        merged.id
    )));
    Ok(result.with_affected(vec![merged]))
}
