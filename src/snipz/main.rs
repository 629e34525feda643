use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use snipz::api::SnipzApi;
use snipz::commands::{CmdMessage, MessageLevel};
use snipz::config::SnipzConfig;
use snipz::editor;
use snipz::error::Result;
use snipz::model::Snippet;
use snipz::store::fs::FileStore;
use snipz::store::StoreStats;
use std::io::Write;
use std::path::PathBuf;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: SnipzApi<FileStore>,
    config: SnipzConfig,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context()?;

    match cli.command {
        Commands::Add {
            category,
            tags,
            description,
            content,
        } => handle_add(&mut ctx, category, tags, description, content),
        Commands::Update {
            id,
            category,
            tags,
            description,
            content,
        } => handle_update(&mut ctx, id, category, tags, description, content),
        Commands::Append { id, content } => handle_append(&mut ctx, id, content),
        Commands::Merge { ids } => handle_merge(&mut ctx, ids),
        Commands::Search {
            category,
            tags,
            terms,
        } => handle_search(&mut ctx, category, tags, terms),
        Commands::Remove { id, yes } => handle_remove(&mut ctx, id, yes),
        Commands::Edit { id } => handle_edit(&mut ctx, id),
        Commands::ListCategories => handle_list_categories(&mut ctx),
        Commands::ListTags => handle_list_tags(&mut ctx),
    }
}

fn init_context() -> Result<AppContext> {
    let data_dir = match std::env::var_os("SNIPZ_HOME") {
        Some(dir) => PathBuf::from(dir),
        None => ProjectDirs::from("com", "snipz", "snipz")
            .expect("Could not determine data dir")
            .data_dir()
            .to_path_buf(),
    };

    let config = SnipzConfig::load(&data_dir).unwrap_or_default();
    let store = FileStore::new(config.store_path(&data_dir));

    Ok(AppContext {
        api: SnipzApi::new(store),
        config,
    })
}

fn handle_add(
    ctx: &mut AppContext,
    category: Option<String>,
    tags: Option<String>,
    description: Option<String>,
    content: Vec<String>,
) -> Result<()> {
    let snippet = Snippet::new(
        category.unwrap_or_default(),
        tags.unwrap_or_default(),
        description.unwrap_or_default(),
        content.join(" "),
    );
    let result = ctx.api.add(snippet)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_update(
    ctx: &mut AppContext,
    id: String,
    category: Option<String>,
    tags: Option<String>,
    description: Option<String>,
    content: Vec<String>,
) -> Result<()> {
    let mut incoming = Snippet::new(
        category.unwrap_or_default(),
        tags.unwrap_or_default(),
        description.unwrap_or_default(),
        content.join(" "),
    );
    incoming.id = id;

    let result = ctx.api.update(&incoming)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_append(ctx: &mut AppContext, id: String, content: Vec<String>) -> Result<()> {
    let result = ctx.api.append(&id, &content.join(" "))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_merge(ctx: &mut AppContext, ids: Vec<String>) -> Result<()> {
    let result = ctx.api.merge(&ids)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_search(
    ctx: &mut AppContext,
    category: Option<String>,
    tags: Option<String>,
    terms: Vec<String>,
) -> Result<()> {
    // bare words double as the tag query: `snipz search go retry` is
    // `snipz search -t go,retry`
    let tag_query = match tags {
        Some(tags) => tags,
        None => terms.join(","),
    };

    let result = ctx
        .api
        .search(&category.unwrap_or_default(), &tag_query)?;

    if result.listed.len() == 1 {
        // a single hit prints just the content, handy for piping
        print_warnings(&result.messages);
        println!("{}", result.listed[0].content);
    } else {
        print_full_snippets(&result.listed);
        print_messages(&result.messages);
    }
    Ok(())
}

fn handle_remove(ctx: &mut AppContext, id: String, yes: bool) -> Result<()> {
    if !yes && !confirm_removal(&id)? {
        println!("Aborted.");
        return Ok(());
    }

    let result = ctx.api.remove(&id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, id: String) -> Result<()> {
    let snippet = ctx.api.get_snippet(&id)?;
    let edited = editor::edit_snippet(&snippet, ctx.config.editor.as_deref())?;

    let result = ctx.api.apply_edit(&id, edited)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list_categories(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.list()?;
    print_messages(&result.messages);

    if let Some(stats) = &result.stats {
        if stats.total == 0 {
            println!("No snippets stored.");
            return Ok(());
        }
        print_table(
            ["INDEX", "CATEGORY", "RECORDS", "TAGS"],
            &category_rows(stats),
        );
    }
    Ok(())
}

fn handle_list_tags(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.list()?;
    print_messages(&result.messages);

    if let Some(stats) = &result.stats {
        if stats.total == 0 {
            println!("No snippets stored.");
            return Ok(());
        }
        print_table(["INDEX", "TAG", "RECORDS", "CATEGORIES"], &tag_rows(stats));
    }
    Ok(())
}

fn category_rows(stats: &StoreStats) -> Vec<[String; 4]> {
    stats
        .category_counts
        .iter()
        .enumerate()
        .map(|(i, (category, count))| {
            let tags = stats
                .category_tags
                .get(category)
                .map(|tags| tags.iter().cloned().collect::<Vec<_>>().join(","))
                .unwrap_or_default();
            [
                (i + 1).to_string(),
                category.clone(),
                count.to_string(),
                tags,
            ]
        })
        .collect()
}

fn tag_rows(stats: &StoreStats) -> Vec<[String; 4]> {
    stats
        .tag_counts
        .iter()
        .enumerate()
        .map(|(i, (tag, count))| {
            let categories = stats
                .tag_categories
                .get(tag)
                .map(|cates| cates.iter().cloned().collect::<Vec<_>>().join(","))
                .unwrap_or_default();
            [
                (i + 1).to_string(),
                tag.clone(),
                count.to_string(),
                categories,
            ]
        })
        .collect()
}

fn confirm_removal(id: &str) -> Result<bool> {
    print!("Remove snippet {}? yes|no: ", id);
    std::io::stdout().flush()?;

    let mut response = String::new();
    std::io::stdin().read_line(&mut response)?;
    let response = response.trim();
    Ok(response.eq_ignore_ascii_case("yes") || response.eq_ignore_ascii_case("y"))
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

fn print_warnings(messages: &[CmdMessage]) {
    for message in messages {
        if matches!(message.level, MessageLevel::Warning) {
            eprintln!("{}", message.content.yellow());
        }
    }
}

const RESULT_SEPARATOR: &str = "--------------------------------------------------------";

fn print_full_snippets(snippets: &[Snippet]) {
    for snippet in snippets {
        println!("{}", RESULT_SEPARATOR.dimmed());
        print!("{}", editor::to_buffer(snippet));
    }
    if !snippets.is_empty() {
        println!("{}", RESULT_SEPARATOR.dimmed());
    }
}

const COLUMN_GAP: usize = 2;

fn print_table(headers: [&str; 4], rows: &[[String; 4]]) {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.width());
        }
    }

    println!("{}", pad_row(&headers.map(str::to_string), &widths).bold());
    for row in rows {
        println!("{}", pad_row(row, &widths));
    }
}

fn pad_row(cells: &[String; 4], widths: &[usize]) -> String {
    let mut line = String::new();
    for (i, cell) in cells.iter().enumerate() {
        line.push_str(cell);
        if i < cells.len() - 1 {
            line.push_str(&" ".repeat(widths[i] - cell.width() + COLUMN_GAP));
        }
    }
    line
}
