use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::SnippetStore;

/// Maximum number of records handed to the UI; the total match count is
/// reported separately.
pub const DISPLAY_LIMIT: usize = 10;

pub fn run<S: SnippetStore>(store: &S, category: &str, tag_query: &str) -> Result<CmdResult> {
    let results = store.search(category, tag_query)?;
    let total = results.snippets.len();

    let mut result = CmdResult::default();
    for warning in &results.warnings {
        result.add_message(CmdMessage::warning(format!(
            "skipped malformed line {}: {}",
            warning.line, warning.reason
        )));
    }

    if total > DISPLAY_LIMIT {
        result.add_message(CmdMessage::info(format!(
            "Found {} matching snippets, showing the first {}",
            total, DISPLAY_LIMIT
        )));
    } else {
        result.add_message(CmdMessage::info(format!(
            "Found {} matching snippets",
            total
        )));
    }

    Ok(result.with_listed(results.snippets.into_iter().take(DISPLAY_LIMIT).collect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::model::Snippet;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn empty_query_lists_everything_in_insertion_order() {
        let mut store = InMemoryStore::new();
        add::run(&mut store, Snippet::new("go", "a", "", "first")).unwrap();
        add::run(&mut store, Snippet::new("go", "b", "", "second")).unwrap();

        let result = run(&store, "", "").unwrap();
        assert_eq!(result.listed.len(), 2);
        assert_eq!(result.listed[0].content, "first");
        assert_eq!(result.listed[1].content, "second");
    }

    #[test]
    fn hierarchy_expansion_matches_coarse_queries() {
        let mut store = InMemoryStore::new();
        add::run(&mut store, Snippet::new("go-concurrency", "", "", "chan")).unwrap();
        add::run(
            &mut store,
            Snippet::new("go", "concurrency,testing", "", "mutex"),
        )
        .unwrap();
        add::run(&mut store, Snippet::new("python", "concurrency", "", "asyncio")).unwrap();

        let result = run(&store, "go", "concurrency").unwrap();
        assert_eq!(result.listed.len(), 2);
    }

    #[test]
    fn caps_listed_results_and_reports_total() {
        let mut store = InMemoryStore::new();
        for i in 0..12 {
            add::run(
                &mut store,
                Snippet::new("go", format!("tag{}", i), "", format!("body {}", i)),
            )
            .unwrap();
        }

        let result = run(&store, "go", "").unwrap();
        assert_eq!(result.listed.len(), DISPLAY_LIMIT);
        assert!(result
            .messages
            .iter()
            .any(|m| m.content.contains("Found 12")));
    }
}
