//! Normalization of individual shopping-query values.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// One complete quoted segment, straight or curly quotes.
static QUOTED_SEGMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"["“]([^"“”]*)["”]"#).expect("valid quoted segment regex")
});

static UNQUOTED_OR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s+or\s+").expect("valid alternation regex"));

const DOUBLE_QUOTES: &[char] = &['"', '“', '”', '`'];

/// Collapses one product-search value to a single query.
///
/// 1. A value wrapped entirely in quotes is unwrapped as-is, even if it
///    contains the word "or".
/// 2. Otherwise an `or` outside quotes splits the alternatives. If the part
///    before the first such `or` holds a quoted segment, the first quoted
///    segment wins (`"X" (note) or "Y"`, `"X", "Y" or "Z"` both give `X`);
///    else that part is used (`X or Y` gives `X`).
/// 3. Surrounding quotes and emphasis markers are stripped.
#[must_use]
pub fn normalize_query(raw: &str) -> String {
    let value = strip_emphasis(raw);

    if let Some(inner) = single_quoted(value) {
        return inner.trim().to_string();
    }

    let masked = mask_quoted(value);
    let Some(or) = UNQUOTED_OR.find(&masked) else {
        return strip_quotes(value).to_string();
    };
    let first = &value[..or.start()];
    match QUOTED_SEGMENT.captures(first) {
        Some(caps) => caps[1].trim().to_string(),
        None => strip_quotes(first).to_string(),
    }
}

/// Blanks out complete quoted segments with same-length filler, so byte
/// offsets still line up with `s` but an `or` inside quotes is ignored.
fn mask_quoted(s: &str) -> String {
    QUOTED_SEGMENT
        .replace_all(s, |caps: &Captures<'_>| "x".repeat(caps[0].len()))
        .into_owned()
}

/// Prepends `gender` to `query` unless the query already starts with it
/// (case-insensitive). Applying it twice never double-prefixes.
#[must_use]
pub fn prefix_gender(gender: &str, query: &str) -> String {
    let gender = gender.trim();
    let query = query.trim();
    if gender.is_empty()
        || query.is_empty()
        || query.to_lowercase().starts_with(&gender.to_lowercase())
    {
        return query.to_string();
    }
    format!("{gender} {query}")
}

/// Splits a comma-separated outfit query (the single-line `Search Query:`
/// form) into individual item keywords.
#[must_use]
pub fn shopping_terms(query: &str) -> Vec<String> {
    query
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Trims whitespace and markdown emphasis (`*`, `_`) from both ends.
pub(crate) fn strip_emphasis(s: &str) -> &str {
    s.trim().trim_matches(|c: char| c == '*' || c == '_').trim()
}

/// Trims surrounding double quotes, and a matched pair of single quotes.
pub(crate) fn strip_quotes(s: &str) -> &str {
    let s = s.trim().trim_matches(DOUBLE_QUOTES).trim();
    s.strip_prefix('\'')
        .and_then(|inner| inner.strip_suffix('\''))
        .map_or(s, str::trim)
}

/// Returns the inner text when `s` is exactly one quoted string.
fn single_quoted(s: &str) -> Option<&str> {
    let inner = s
        .strip_prefix(DOUBLE_QUOTES)?
        .strip_suffix(DOUBLE_QUOTES)?;
    (!inner.contains(DOUBLE_QUOTES)).then_some(inner)
}

#[cfg(test)]
mod tests {
    use super::*;

    // -----------------------------------------------------------------------
    // normalize_query
    // -----------------------------------------------------------------------

    #[test]
    fn quoted_alternation_takes_first() {
        assert_eq!(
            normalize_query(r#""moisture-wicking tank top" or "athletic shirt""#),
            "moisture-wicking tank top"
        );
    }

    #[test]
    fn three_quoted_alternatives_take_first() {
        assert_eq!(
            normalize_query(r#""linen shirt" OR "cotton tee" or "polo""#),
            "linen shirt"
        );
    }

    #[test]
    fn curly_quoted_alternation_takes_first() {
        assert_eq!(normalize_query("“rain shell” or “poncho”"), "rain shell");
    }

    #[test]
    fn single_quoted_value_keeps_inner_or() {
        assert_eq!(
            normalize_query(r#""black or navy chinos""#),
            "black or navy chinos"
        );
    }

    #[test]
    fn quoted_alternative_with_trailing_note_takes_quoted_text() {
        assert_eq!(
            normalize_query(r#""tank top" (moisture-wicking) or "athletic shirt""#),
            "tank top"
        );
    }

    #[test]
    fn comma_separated_quoted_alternatives_take_first() {
        assert_eq!(
            normalize_query(r#""linen shirt", "cotton tee" or "polo""#),
            "linen shirt"
        );
    }

    #[test]
    fn or_inside_first_quoted_alternative_is_kept() {
        assert_eq!(
            normalize_query(r#""black or navy chinos" or "khakis""#),
            "black or navy chinos"
        );
    }

    #[test]
    fn quoted_then_unquoted_alternative_takes_quoted() {
        assert_eq!(normalize_query(r#""rain shell" or poncho"#), "rain shell");
    }

    #[test]
    fn unquoted_alternation_takes_first_segment() {
        assert_eq!(
            normalize_query("trail runners or hiking boots"),
            "trail runners"
        );
    }

    #[test]
    fn plain_value_is_kept() {
        assert_eq!(
            normalize_query("  hiking boots waterproof "),
            "hiking boots waterproof"
        );
    }

    #[test]
    fn surrounding_quotes_are_stripped() {
        assert_eq!(normalize_query(r#""museum-casual blouse""#), "museum-casual blouse");
        assert_eq!(normalize_query("'straw tote'"), "straw tote");
    }

    #[test]
    fn leading_emphasis_is_stripped() {
        assert_eq!(normalize_query(r#"** "wide brim hat""#), "wide brim hat");
    }

    #[test]
    fn words_containing_or_are_not_split() {
        assert_eq!(normalize_query("corduroy shorts"), "corduroy shorts");
        assert_eq!(normalize_query("colorful scarf"), "colorful scarf");
    }

    #[test]
    fn apostrophes_inside_words_survive() {
        assert_eq!(normalize_query("women's rain jacket"), "women's rain jacket");
    }

    #[test]
    fn unbalanced_quotes_do_not_panic() {
        assert_eq!(normalize_query(r#""half quoted"#), "half quoted");
        assert_eq!(normalize_query(r#"""#), "");
    }

    // -----------------------------------------------------------------------
    // prefix_gender
    // -----------------------------------------------------------------------

    #[test]
    fn prefix_gender_prepends_with_single_space() {
        assert_eq!(prefix_gender("women's", "hiking boots"), "women's hiking boots");
    }

    #[test]
    fn prefix_gender_leaves_already_prefixed_query() {
        assert_eq!(
            prefix_gender("women's", "women's hiking boots"),
            "women's hiking boots"
        );
        assert_eq!(prefix_gender("female", "Female tank top"), "Female tank top");
    }

    #[test]
    fn prefix_gender_is_idempotent() {
        let once = prefix_gender("female", "female tank top");
        assert_eq!(prefix_gender("female", &once), "female tank top");
        let once = prefix_gender("male", "rain jacket");
        assert_eq!(prefix_gender("male", &once), once);
    }

    #[test]
    fn prefix_gender_blank_gender_is_noop() {
        assert_eq!(prefix_gender("  ", "sun hat"), "sun hat");
    }

    #[test]
    fn prefix_gender_empty_query_stays_empty() {
        assert_eq!(prefix_gender("female", ""), "");
    }

    // -----------------------------------------------------------------------
    // shopping_terms
    // -----------------------------------------------------------------------

    #[test]
    fn shopping_terms_split_and_trim() {
        assert_eq!(
            shopping_terms("tank top, leggings,, hiking boots "),
            vec!["tank top", "leggings", "hiking boots"]
        );
    }

    #[test]
    fn shopping_terms_empty_query() {
        assert!(shopping_terms("  ").is_empty());
    }
}
