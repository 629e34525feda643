//! Snippet identifier generation.
//!
//! An id is the SHA-256 digest of `category + tags`, encoded as standard
//! base64. It is a function of the classification fields only, never of the
//! content: two snippets filed under identical category and tags produce the
//! same id, which the store rejects as a duplicate on add. That collision is
//! the point — it pushes the author toward more specific tags instead of
//! letting near-identical classifications pile up.

use crate::error::{Result, SnipzError};
use crate::model::Snippet;
use base64::{engine::general_purpose, Engine as _};
use sha2::{Digest, Sha256};

/// Length of a generated id (base64 of a 32-byte digest). Lookups reject
/// anything shorter as structurally invalid.
pub const ID_LEN: usize = 44;

/// Derives an id for a snippet that does not have one yet.
///
/// Fails if the snippet already carries an id (ids are never regenerated for
/// existing records) or if category and tags are both empty (nothing to
/// derive from).
pub fn generate(snippet: &Snippet) -> Result<String> {
    if !snippet.id.is_empty() {
        return Err(SnipzError::Validation(format!(
            "snippet already has an id: {}",
            snippet.id
        )));
    }

    if snippet.category.is_empty() && snippet.tags.is_empty() {
        return Err(SnipzError::Validation(
            "can not derive an id: category and tags are both empty".to_string(),
        ));
    }

    let mut hasher = Sha256::new();
    hasher.update(snippet.category.as_bytes());
    hasher.update(snippet.tags.as_bytes());
    Ok(general_purpose::STANDARD.encode(hasher.finalize()))
}
