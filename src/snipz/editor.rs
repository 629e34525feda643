//! External editor integration.
//!
//! A snippet is handed to the editor as a labeled block and parsed back
//! after the editor exits:
//!
//! ```text
//! Id:       qQn1...
//! Category: go
//! Tags:     http,retry
//! Desc:     retry with backoff
//! Content:  for i := 0; i < 3; i++ {
//!               try()
//!           }
//! ```
//!
//! Labels occupy a fixed 10-column field; continuation lines are indented by
//! the same width and attach to the most recent `Desc:`/`Content:` section
//! with the indent stripped, so multi-line text (and its inner indentation)
//! survives the round trip.

use crate::error::{Result, SnipzError};
use crate::model::Snippet;
use std::env;
use std::fs;
use std::path::Path;
use std::process::Command;

const LABEL_WIDTH: usize = 10;
const INDENT: &str = "          ";

const ID_LABEL: &str = "Id:";
const CATEGORY_LABEL: &str = "Category:";
const TAGS_LABEL: &str = "Tags:";
const DESC_LABEL: &str = "Desc:";
const CONTENT_LABEL: &str = "Content:";

/// Serializes a snippet to the editor buffer form.
pub fn to_buffer(snippet: &Snippet) -> String {
    let mut buffer = String::new();
    push_field(&mut buffer, ID_LABEL, &snippet.id);
    push_field(&mut buffer, CATEGORY_LABEL, &snippet.category);
    push_field(&mut buffer, TAGS_LABEL, &snippet.tags);
    push_section(&mut buffer, DESC_LABEL, &snippet.description);
    push_section(&mut buffer, CONTENT_LABEL, &snippet.content);
    buffer
}

fn push_field(buffer: &mut String, label: &str, value: &str) {
    buffer.push_str(&format!("{:<width$}{}\n", label, value, width = LABEL_WIDTH));
}

fn push_section(buffer: &mut String, label: &str, value: &str) {
    for (i, line) in value.split('\n').enumerate() {
        if i == 0 {
            push_field(buffer, label, line);
        } else {
            buffer.push_str(INDENT);
            buffer.push_str(line);
            buffer.push('\n');
        }
    }
}

/// Parses an editor buffer back into a snippet. Unknown-prefixed lines are
/// continuation lines of the most recent `Desc:`/`Content:` section; lines
/// before any section label are dropped.
pub fn from_buffer(buffer: &str) -> Snippet {
    enum Section {
        None,
        Desc,
        Content,
    }

    let mut snippet = Snippet::default();
    let mut section = Section::None;

    for line in buffer.lines() {
        if let Some(value) = line.strip_prefix(ID_LABEL) {
            snippet.id = value.trim().to_string();
            section = Section::None;
        } else if let Some(value) = line.strip_prefix(CATEGORY_LABEL) {
            snippet.category = value.trim().to_string();
            section = Section::None;
        } else if let Some(value) = line.strip_prefix(TAGS_LABEL) {
            snippet.tags = value.trim().to_string();
            section = Section::None;
        } else if let Some(value) = line.strip_prefix(DESC_LABEL) {
            snippet.description = value.trim_start().to_string();
            section = Section::Desc;
        } else if let Some(value) = line.strip_prefix(CONTENT_LABEL) {
            snippet.content = value.trim_start().to_string();
            section = Section::Content;
        } else {
            let continuation = line.strip_prefix(INDENT).unwrap_or_else(|| line.trim_start());
            match section {
                Section::Desc => {
                    snippet.description.push('\n');
                    snippet.description.push_str(continuation);
                }
                Section::Content => {
                    snippet.content.push('\n');
                    snippet.content.push_str(continuation);
                }
                Section::None => {}
            }
        }
    }

    snippet
}

/// Gets the editor command: an explicit preference first (config), then
/// $EDITOR, then $VISUAL, then common fallbacks.
pub fn get_editor(preferred: Option<&str>) -> Result<String> {
    if let Some(editor) = preferred {
        if !editor.is_empty() {
            return Ok(editor.to_string());
        }
    }

    for var in ["EDITOR", "VISUAL"] {
        if let Ok(editor) = env::var(var) {
            if !editor.is_empty() {
                return Ok(editor);
            }
        }
    }

    for fallback in ["vim", "vi", "nano"] {
        if Command::new("which")
            .arg(fallback)
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
        {
            return Ok(fallback.to_string());
        }
    }

    Err(SnipzError::Editor(
        "no editor found, set $EDITOR".to_string(),
    ))
}

/// Opens a file in the editor and blocks until it exits.
pub fn open_in_editor<P: AsRef<Path>>(editor: &str, file_path: P) -> Result<()> {
    let path = file_path.as_ref();
    let status = Command::new(editor)
        .arg(path)
        .status()
        .map_err(|e| SnipzError::Editor(format!("failed to launch '{}': {}", editor, e)))?;

    if !status.success() {
        return Err(SnipzError::Editor(format!(
            "'{}' exited with non-zero status",
            editor
        )));
    }
    Ok(())
}

/// Runs the full interactive edit: buffer out, editor, buffer back in.
/// Any failure here means the store has not been touched yet.
pub fn edit_snippet(snippet: &Snippet, preferred: Option<&str>) -> Result<Snippet> {
    let editor = get_editor(preferred)?;
    let temp_file = env::temp_dir().join(format!("snipz_edit_{}.txt", std::process::id()));

    fs::write(&temp_file, to_buffer(snippet))?;
    let edited = open_in_editor(&editor, &temp_file)
        .and_then(|()| fs::read_to_string(&temp_file).map_err(SnipzError::Io));
    let _ = fs::remove_file(&temp_file);

    Ok(from_buffer(&edited?))
}
