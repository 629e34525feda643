use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, SnipzError};
use crate::store::SnippetStore;

pub fn run<S: SnippetStore>(store: &mut S, id: &str, extra: &str) -> Result<CmdResult> {
    if id.is_empty() {
        return Err(SnipzError::Validation("id is empty".to_string()));
    }
    if extra.trim().is_empty() {
        return Err(SnipzError::Validation(
            "nothing to append: content is empty".to_string(),
        ));
    }

    let appended = store.append(id, extra)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Snippet appended ({})",
        appended.id
    )));
    Ok(result.with_affected(vec![appended]))
}
