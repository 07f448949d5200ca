//! Second parsing pass: matchers that run over one day's content to find
//! its structured shopping queries.

use std::sync::LazyLock;

use regex::Regex;
use tripwear_core::ProductQueries;

use crate::query::{normalize_query, strip_emphasis, strip_quotes};

/// Category used for the legacy single-line `Search Query:` form.
pub const GENERAL_CATEGORY: &str = "general";

/// A line that consists only of a "Product Searches" label, optionally
/// bolded or written as a markdown heading.
static PRODUCT_SEARCH_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(?:#{1,6}[ \t]*)?(?:\*\*|__)?[ \t]*product[ \t]+search(?:es)?[ \t]*(?:\*\*|__)?[ \t]*:?[ \t]*(?:\*\*|__)?$",
    )
    .expect("valid product search marker regex")
});

/// A `Search Query:` label at the start of a line (optionally bulleted or
/// emphasized) followed by the query on the same line.
static SEARCH_QUERY_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?mi)^[ \t]*(?:[-*+•][ \t]+)?(?:\*\*|__)?search[ \t]+query[ \t]*(?:\*\*|__)?[ \t]*:[ \t]*(?:\*\*|__)?([^\n]*)",
    )
    .expect("valid search query regex")
});

/// Extracts `category: query` pairs from every "Product Searches" block in
/// `content`.
///
/// A block starts on the line after its label and runs until a markdown
/// heading, an emphasized non-bullet line, or the end of the content.
/// Within a block, bullet lines containing a colon produce entries; other
/// lines are skipped. Repeated categories keep the last value.
///
/// Returns `None` when no block label is present at all.
#[must_use]
pub fn product_search_block(content: &str) -> Option<ProductQueries> {
    let mut found_block = false;
    let mut in_block = false;
    let mut queries = ProductQueries::new();

    for line in content.lines() {
        let trimmed = line.trim();

        if PRODUCT_SEARCH_MARKER.is_match(trimmed) {
            found_block = true;
            in_block = true;
            continue;
        }
        if !in_block || trimmed.is_empty() {
            continue;
        }

        match strip_bullet(trimmed) {
            Some(item) => {
                if let Some((category, query)) = parse_entry(item) {
                    queries.insert(category, query);
                }
            }
            None if ends_block(trimmed) => in_block = false,
            None => {}
        }
    }

    found_block.then_some(queries)
}

/// Finds the first `Search Query:` marker and returns its value.
#[must_use]
pub fn search_query_line(content: &str) -> Option<String> {
    let caps = SEARCH_QUERY_LINE.captures(content)?;
    let value = strip_quotes(strip_emphasis(caps.get(1)?.as_str()));
    (!value.is_empty()).then(|| value.to_string())
}

/// Returns the text after a list marker (`-`, `*`, `+`, `•`, or `1.` /
/// `1)`) followed by whitespace.
fn strip_bullet(line: &str) -> Option<&str> {
    let rest = if let Some(rest) = line.strip_prefix(['-', '*', '+', '•']) {
        rest
    } else {
        let digits = line.len() - line.trim_start_matches(|c: char| c.is_ascii_digit()).len();
        if digits == 0 {
            return None;
        }
        line[digits..].strip_prefix(['.', ')'])?
    };
    rest.starts_with(char::is_whitespace).then(|| rest.trim())
}

fn parse_entry(item: &str) -> Option<(String, String)> {
    let (category, value) = item.split_once(':')?;
    let category = strip_emphasis(category);
    let query = normalize_query(value);
    if category.is_empty() || query.is_empty() {
        return None;
    }
    Some((category.to_string(), query))
}

fn ends_block(line: &str) -> bool {
    line.starts_with('#') || line.starts_with("**") || line.starts_with("__")
}
