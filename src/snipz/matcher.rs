//! Category and tag matching for search.
//!
//! A stored snippet matches a query when both the category check and the tag
//! check pass. Hierarchical tokens (`go-concurrency`) are split on the
//! separator so a coarse request like `go` still finds them; comparison is
//! case-insensitive exact token equality, never substring containment.

use std::collections::HashSet;

/// Separator used inside hierarchical categories and tags.
pub const HIERARCHY_SEPARATOR: char = '-';

/// Decides whether a stored record satisfies the requested category and tag
/// query. Empty request parts match everything; requested tags combine with
/// AND semantics.
pub fn matches(
    stored_category: &str,
    stored_tags: &str,
    requested_category: &str,
    requested_tags: &str,
) -> bool {
    category_matches(stored_category, requested_category)
        && tags_match(stored_category, stored_tags, requested_tags)
}

fn category_matches(stored: &str, requested: &str) -> bool {
    if requested.is_empty() {
        return true;
    }
    let requested = requested.to_lowercase();
    // the full stored token counts alongside its components, same as in the
    // tag universe
    stored.to_lowercase() == requested
        || stored
            .split(HIERARCHY_SEPARATOR)
            .any(|component| component.to_lowercase() == requested)
}

fn tags_match(stored_category: &str, stored_tags: &str, requested: &str) -> bool {
    if requested.is_empty() {
        return true;
    }
    let universe = tag_universe(stored_category, stored_tags);
    requested
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .all(|tag| universe.contains(&tag.to_lowercase()))
}

/// The comparison universe for tag matching: every stored tag plus the stored
/// category (a category counts as a tag of its own records), with each
/// multi-component token additionally expanded into its components.
fn tag_universe(stored_category: &str, stored_tags: &str) -> HashSet<String> {
    let mut universe = HashSet::new();
    let tokens = stored_tags
        .split(',')
        .chain(std::iter::once(stored_category));

    for token in tokens {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        universe.insert(token.to_lowercase());
        for component in token.split(HIERARCHY_SEPARATOR) {
            if !component.is_empty() {
                universe.insert(component.to_lowercase());
            }
        }
    }
    universe
}
