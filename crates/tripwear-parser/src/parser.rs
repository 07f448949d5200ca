use std::sync::LazyLock;

use tripwear_core::{DayOutfit, FallbackVocabulary, ProductQueries};

use crate::fallback::fallback_queries;
use crate::heading::find_headings;
use crate::query::prefix_gender;
use crate::sections::{product_search_block, search_query_line, GENERAL_CATEGORY};

static DEFAULT_PARSER: LazyLock<OutfitParser> = LazyLock::new(OutfitParser::new);

/// Parses `text` with the default vocabulary. See [`OutfitParser::parse`].
#[must_use]
pub fn parse(text: &str, gender: Option<&str>) -> Vec<DayOutfit> {
    DEFAULT_PARSER.parse(text, gender)
}

/// Which strategy produced a day's queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuerySource {
    ProductBlock,
    SearchQuery,
    Fallback,
}

/// Day-by-day outfit response parser.
///
/// Holds only the read-only fallback vocabulary, so a single instance can
/// be shared freely across threads.
#[derive(Debug, Clone, Default)]
pub struct OutfitParser {
    vocabulary: FallbackVocabulary,
}

impl OutfitParser {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_vocabulary(vocabulary: FallbackVocabulary) -> Self {
        Self { vocabulary }
    }

    #[must_use]
    pub fn vocabulary(&self) -> &FallbackVocabulary {
        &self.vocabulary
    }

    /// Splits a generated recommendation into ordered [`DayOutfit`] records.
    ///
    /// Never fails. Empty text yields no days; any other text without a
    /// recognizable day heading, whitespace included, yields a single
    /// `Day 1` built from the whole text. When `gender` is non-blank it is prefixed to
    /// every query that does not already start with it.
    #[must_use]
    pub fn parse(&self, text: &str, gender: Option<&str>) -> Vec<DayOutfit> {
        if text.is_empty() {
            return Vec::new();
        }
        let gender = gender.map(str::trim).filter(|g| !g.is_empty());

        let Some((style, headings)) = find_headings(text) else {
            tracing::debug!(
                len = text.len(),
                "no day headings found, treating response as a single day"
            );
            return vec![self.build_day(1, "Day 1".to_string(), text, gender)];
        };
        tracing::debug!(?style, days = headings.len(), "segmented outfit response");

        headings
            .iter()
            .enumerate()
            .map(|(idx, heading)| {
                let end = headings.get(idx + 1).map_or(text.len(), |next| next.start);
                let ordinal = u32::try_from(idx + 1).unwrap_or(u32::MAX);
                let day_number = heading.number().unwrap_or(ordinal);
                self.build_day(
                    day_number,
                    heading.label(),
                    &text[heading.end..end],
                    gender,
                )
            })
            .collect()
    }

    fn build_day(
        &self,
        day_number: u32,
        label: String,
        content: &str,
        gender: Option<&str>,
    ) -> DayOutfit {
        let content = content.trim();
        let (source, queries) = self.extract_queries(content);
        if queries.is_empty() {
            tracing::warn!(day_number, "no shopping queries could be derived for day");
        } else {
            tracing::debug!(day_number, ?source, count = queries.len(), "derived shopping queries");
        }

        let product_queries: ProductQueries = match gender {
            Some(gender) => queries
                .iter()
                .map(|(category, query)| (category, prefix_gender(gender, query)))
                .collect(),
            None => queries,
        };

        DayOutfit {
            day_number,
            label,
            content: content.to_string(),
            product_queries,
        }
    }

    /// Tries each query strategy in order; the first that yields at least
    /// one query wins.
    fn extract_queries(&self, content: &str) -> (QuerySource, ProductQueries) {
        if let Some(queries) = product_search_block(content).filter(|q| !q.is_empty()) {
            return (QuerySource::ProductBlock, queries);
        }
        if let Some(query) = search_query_line(content) {
            let queries = std::iter::once((GENERAL_CATEGORY, query)).collect();
            return (QuerySource::SearchQuery, queries);
        }
        (
            QuerySource::Fallback,
            fallback_queries(&self.vocabulary, content),
        )
    }
}

#[cfg(test)]
#[path = "parser_test.rs"]
mod tests;
