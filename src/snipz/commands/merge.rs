use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, SnipzError};
use crate::model::Snippet;
use crate::store::SnippetStore;

/// Merges the listed records into one. Every record is fetched and the
/// category uniformity check runs before any mutation, so a missing id or a
/// category mismatch leaves the store untouched. Sources are removed before
/// the merged record is added — the other way around, a degenerate
/// single-record merge would collide with its own source content.
pub fn run<S: SnippetStore>(store: &mut S, ids: &[String]) -> Result<CmdResult> {
    if ids.is_empty() {
        return Err(SnipzError::Validation("no ids to merge".to_string()));
    }

    let mut sources = Vec::with_capacity(ids.len());
    for id in ids {
        sources.push(store.get_by_id(id)?);
    }

    let category = sources[0].category.clone();
    for source in &sources {
        if source.category != category {
            return Err(SnipzError::CategoryMismatch(format!(
                "can not merge: {} is filed under '{}', expected '{}'",
                source.id, source.category, category
            )));
        }
    }

    let mut tags: Vec<String> = Vec::new();
    let mut descriptions = Vec::with_capacity(sources.len());
    let mut contents = Vec::with_capacity(sources.len());
    for source in &sources {
        for tag in source.tag_list() {
            if !tags.iter().any(|t| t == tag) {
                tags.push(tag.to_string());
            }
        }
        descriptions.push(source.description.clone());
        contents.push(source.content.clone());
    }

    let merged = Snippet::new(
        category,
        tags.join(","),
        descriptions.join("\n").trim().to_string(),
        contents.join("\n").trim().to_string(),
    );

    for id in ids {
        store.remove(id)?;
    }
    let stored = store.add(merged)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Merged {} snippets into {}",
        ids.len(),
        stored.id
    )));
    Ok(result.with_affected(vec![stored]))
}
