//! Record line codec.
//!
//! A snippet persists as a single delimited line:
//!
//! ```text
//! id|category|tags|desc_b64|content_b64
//! ```
//!
//! Description and content are base64-encoded before joining, so the encoded
//! fields can never contain a literal newline or the delimiter no matter what
//! text the snippet holds. Decoding is the exact inverse: a line that does
//! not split into five fields, or whose encoded fields do not decode, is a
//! [`SnipzError::MalformedRecord`].

use crate::error::{Result, SnipzError};
use crate::model::Snippet;
use base64::{engine::general_purpose, Engine as _};

/// Field delimiter of the persisted line format. Category and tags are
/// rejected on add if they contain it.
pub const DELIMITER: char = '|';

const FIELD_COUNT: usize = 5;

pub fn encode_line(snippet: &Snippet) -> String {
    let desc_b64 = general_purpose::STANDARD.encode(snippet.description.as_bytes());
    let content_b64 = general_purpose::STANDARD.encode(snippet.content.as_bytes());
    format!(
        "{}{d}{}{d}{}{d}{}{d}{}",
        snippet.id,
        snippet.category,
        snippet.tags,
        desc_b64,
        content_b64,
        d = DELIMITER
    )
}

pub fn decode_line(line: &str) -> Result<Snippet> {
    let fields: Vec<&str> = line.split(DELIMITER).collect();
    if fields.len() != FIELD_COUNT {
        return Err(SnipzError::MalformedRecord(format!(
            "expected {} fields, got {}: {}",
            FIELD_COUNT,
            fields.len(),
            line
        )));
    }

    let description = decode_field(fields[3], "description")?;
    let content = decode_field(fields[4], "content")?;

    Ok(Snippet {
        id: fields[0].to_string(),
        category: fields[1].to_string(),
        tags: fields[2].to_string(),
        description,
        content,
    })
}

fn decode_field(encoded: &str, name: &str) -> Result<String> {
    let bytes = general_purpose::STANDARD
        .decode(encoded)
        .map_err(|e| SnipzError::MalformedRecord(format!("{} is not valid base64: {}", name, e)))?;
    String::from_utf8(bytes)
        .map_err(|e| SnipzError::MalformedRecord(format!("{} is not valid UTF-8: {}", name, e)))
}
