//! Small text-matching primitives shared by the closet taxonomy and the
//! response parser.

/// Returns `true` if `term` occurs in `lower` as a whole word, optionally
/// followed by a plural `s` or `es`.
///
/// Both inputs must be pre-lowercased. A word boundary is any character
/// that is not alphanumeric, or the start/end of the string, so `"hat"`
/// matches `"sun hat,"` and `"hats"` but not `"that"`.
#[must_use]
pub fn contains_word(lower: &str, term: &str) -> bool {
    if term.is_empty() {
        return false;
    }

    let mut search_from = 0usize;
    while let Some(rel_pos) = lower[search_from..].find(term) {
        let abs_pos = search_from + rel_pos;
        let end = abs_pos + term.len();

        let before_ok = !lower[..abs_pos]
            .chars()
            .next_back()
            .is_some_and(char::is_alphanumeric);

        let rest = &lower[end..];
        let after_ok = ["es", "s", ""].iter().any(|suffix| {
            rest.strip_prefix(suffix)
                .is_some_and(|tail| !tail.chars().next().is_some_and(char::is_alphanumeric))
        });

        if before_ok && after_ok {
            return true;
        }

        // Advance past the first character of this occurrence.
        search_from = abs_pos
            + lower[abs_pos..]
                .chars()
                .next()
                .map_or(1, char::len_utf8);
    }
    false
}
