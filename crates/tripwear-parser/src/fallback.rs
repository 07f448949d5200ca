//! Keyword heuristics for unstructured recommendation text.

use tripwear_core::text::contains_word;
use tripwear_core::{FallbackVocabulary, ProductQueries};

/// Clothing nouns looked for when summarizing a whole outfit for an image search.
const INSPIRATION_ITEMS: &[&str] = &[
    "tank top",
    "shirt",
    "blouse",
    "sweater",
    "jacket",
    "coat",
    "jeans",
    "pants",
    "shorts",
    "skirt",
    "dress",
    "leggings",
    "sneakers",
    "boots",
    "sandals",
    "heels",
    "flats",
    "hat",
    "sunglasses",
    "scarf",
    "bag",
    "backpack",
];

const MAX_INSPIRATION_ITEMS: usize = 4;
const DEFAULT_INSPIRATION_QUERY: &str = "casual travel outfit";

/// Synthesizes one generic query per vocabulary category that has a
/// keyword hit in `content`.
///
/// Within a category the first keyword in table order wins, so more
/// specific phrases (`"hiking boots"`) should be listed before general ones
/// (`"boots"`). Categories without a hit are omitted.
#[must_use]
pub fn fallback_queries(vocabulary: &FallbackVocabulary, content: &str) -> ProductQueries {
    let lower = content.to_lowercase();
    vocabulary
        .categories
        .iter()
        .filter_map(|category| {
            category
                .keywords
                .iter()
                .find(|keyword| contains_word(&lower, &keyword.term))
                .map(|keyword| (category.label.as_str(), keyword.query.as_str()))
        })
        .collect()
}

/// Builds a short image-search query summarizing a day's whole outfit from
/// up to four recognizable clothing items.
#[must_use]
pub fn inspiration_query(content: &str) -> String {
    let lower = content.to_lowercase();
    let items: Vec<&str> = INSPIRATION_ITEMS
        .iter()
        .copied()
        .filter(|item| contains_word(&lower, item))
        .take(MAX_INSPIRATION_ITEMS)
        .collect();

    if items.is_empty() {
        DEFAULT_INSPIRATION_QUERY.to_string()
    } else {
        items.join(" ")
    }
}
