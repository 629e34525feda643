use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::SnippetStore;

/// Aggregate listing backing `list-categories` and `list-tags`. The command
/// returns the raw stats; turning them into either table is the UI's job.
pub fn run<S: SnippetStore>(store: &S) -> Result<CmdResult> {
    let stats = store.stats()?;

    let mut result = CmdResult::default();
    for warning in &stats.warnings {
        result.add_message(CmdMessage::warning(format!(
            "skipped malformed line {}: {}",
            warning.line, warning.reason
        )));
    }
    Ok(result.with_stats(stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::model::Snippet;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn returns_stats_for_rendering() {
        let mut store = InMemoryStore::new();
        add::run(&mut store, Snippet::new("go", "http,retry", "", "a")).unwrap();
        add::run(&mut store, Snippet::new("python", "http", "", "b")).unwrap();

        let result = run(&store).unwrap();
        let stats = result.stats.unwrap();
        assert_eq!(stats.total, 2);
        assert_eq!(stats.category_counts.len(), 2);
        assert_eq!(stats.tag_counts["http"], 2);
    }
}
