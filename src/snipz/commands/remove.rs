use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, SnipzError};
use crate::store::SnippetStore;

/// Removes a snippet by id. Confirmation is the caller's concern; by the
/// time this runs the decision has been made.
pub fn run<S: SnippetStore>(store: &mut S, id: &str) -> Result<CmdResult> {
    if id.is_empty() {
        return Err(SnipzError::Validation("id is empty".to_string()));
    }

    store.remove(id)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Snippet removed ({})", id)));
    Ok(result)
}
