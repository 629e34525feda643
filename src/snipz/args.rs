use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "snipz", version)]
#[command(about = "A tag-aware code snippet store for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new snippet
    #[command(alias = "a")]
    Add {
        /// Category (a single token, optionally hierarchical: backend-go)
        #[arg(short, long)]
        category: Option<String>,

        /// Comma-joined tags (tag1,tag2)
        #[arg(short, long)]
        tags: Option<String>,

        /// Description
        #[arg(short = 'm', long)]
        description: Option<String>,

        /// Snippet content (remaining words, joined with spaces)
        #[arg(required = true, num_args = 1..)]
        content: Vec<String>,
    },

    /// Update fields of an existing snippet (empty flags leave fields as-is)
    #[command(alias = "u")]
    Update {
        /// Id of the snippet to update
        #[arg(short, long)]
        id: String,

        #[arg(short, long)]
        category: Option<String>,

        #[arg(short, long)]
        tags: Option<String>,

        #[arg(short = 'm', long)]
        description: Option<String>,

        /// Replacement content (omit to keep the stored content)
        #[arg(num_args = 0..)]
        content: Vec<String>,
    },

    /// Append content to an existing snippet
    Append {
        /// Id of the snippet to append to
        #[arg(short, long)]
        id: String,

        /// Content to append
        #[arg(required = true, num_args = 1..)]
        content: Vec<String>,
    },

    /// Merge two or more snippets of the same category into one
    Merge {
        /// Ids of the snippets to merge, in order
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },

    /// Search snippets by category and tags
    #[command(alias = "s")]
    Search {
        /// Category to match (hierarchy components match too)
        #[arg(short, long)]
        category: Option<String>,

        /// Comma-joined tag query, AND semantics
        #[arg(short, long)]
        tags: Option<String>,

        /// Tag words, comma-joined into the query when --tags is absent
        #[arg(num_args = 0..)]
        terms: Vec<String>,
    },

    /// Remove a snippet by id
    #[command(alias = "rm")]
    Remove {
        /// Id of the snippet to remove
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Edit a snippet in your editor (reclassifies under a fresh id)
    #[command(alias = "e")]
    Edit {
        /// Id of the snippet to edit
        id: String,
    },

    /// List categories with their record counts and tags
    #[command(name = "list-categories", alias = "list-c")]
    ListCategories,

    /// List tags with their record counts and categories
    #[command(name = "list-tags", alias = "list-t")]
    ListTags,
}
