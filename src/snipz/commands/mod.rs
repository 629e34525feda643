use crate::model::Snippet;
use crate::store::StoreStats;

pub mod add;
pub mod append;
pub mod edit;
pub mod list;
pub mod merge;
pub mod remove;
pub mod search;
pub mod update;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Structured outcome of a command, rendered by whichever UI is driving the
/// library. Commands never print.
#[derive(Debug, Default)]
pub struct CmdResult {
    /// Records created or rewritten by a mutation.
    pub affected: Vec<Snippet>,
    /// Records selected by a query, capped for display.
    pub listed: Vec<Snippet>,
    /// Aggregate view for the category/tag listings.
    pub stats: Option<StoreStats>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected(mut self, snippets: Vec<Snippet>) -> Self {
        self.affected = snippets;
        self
    }

    pub fn with_listed(mut self, snippets: Vec<Snippet>) -> Self {
        self.listed = snippets;
        self
    }

    pub fn with_stats(mut self, stats: StoreStats) -> Self {
        self.stats = Some(stats);
        self
    }
}
