//! Fallback keyword vocabulary: the read-only table used to synthesize
//! generic shopping queries when a generated recommendation carries no
//! structured product section.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// One recognizable clothing noun and the generic query it produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FallbackKeyword {
    /// Lowercase word or phrase looked up in the day's text.
    pub term: String,
    /// Shopping query emitted when `term` is found.
    pub query: String,
}

/// A coarse outfit category (`"Top"`, `"Shoes"`, ...) and its keywords in
/// priority order. The first keyword found wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FallbackCategory {
    pub label: String,
    pub keywords: Vec<FallbackKeyword>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FallbackVocabulary {
    pub categories: Vec<FallbackCategory>,
}

const DEFAULT_TABLE: &[(&str, &[(&str, &str)])] = &[
    (
        "Top",
        &[
            ("swimsuit", "quick dry shirt swimwear"),
            ("swimwear", "quick dry shirt swimwear"),
            ("rash guard", "quick dry shirt swimwear"),
            ("tank top", "breathable tank top"),
            ("t-shirt", "cotton crew neck t-shirt"),
            ("blouse", "lightweight blouse"),
            ("sweater", "merino wool sweater"),
            ("hoodie", "zip up hoodie"),
            ("jacket", "packable lightweight jacket"),
            ("coat", "waterproof rain coat"),
            ("shirt", "quick dry shirt"),
        ],
    ),
    (
        "Bottom",
        &[
            ("leggings", "high waisted leggings"),
            ("shorts", "quick dry hiking shorts"),
            ("jeans", "straight leg jeans"),
            ("trousers", "linen trousers"),
            ("pants", "lightweight travel pants"),
            ("skirt", "midi skirt"),
            ("dress", "casual summer dress"),
        ],
    ),
    (
        "Shoes",
        &[
            ("hiking boots", "waterproof hiking boots"),
            ("sandals", "comfortable walking sandals"),
            ("sneakers", "white walking sneakers"),
            ("boots", "ankle boots"),
            ("heels", "block heels"),
            ("flats", "comfortable ballet flats"),
            ("loafers", "leather loafers"),
            ("shoes", "comfortable walking shoes"),
        ],
    ),
    (
        "Accessories",
        &[
            ("sun hat", "wide brim sun hat"),
            ("hat", "packable bucket hat"),
            ("sunglasses", "polarized sunglasses"),
            ("scarf", "lightweight scarf"),
            ("backpack", "small daypack backpack"),
            ("bag", "crossbody travel bag"),
            ("umbrella", "compact travel umbrella"),
        ],
    ),
];

impl Default for FallbackVocabulary {
    fn default() -> Self {
        let categories = DEFAULT_TABLE
            .iter()
            .map(|(label, keywords)| FallbackCategory {
                label: (*label).to_string(),
                keywords: keywords
                    .iter()
                    .map(|(term, query)| FallbackKeyword {
                        term: (*term).to_string(),
                        query: (*query).to_string(),
                    })
                    .collect(),
            })
            .collect();
        Self { categories }
    }
}

impl FallbackVocabulary {
    /// Parse and validate a vocabulary from YAML text.
    ///
    /// Terms are lowercased so lookups can run against lowercased text.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the YAML is malformed or fails validation.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let mut vocabulary: FallbackVocabulary = serde_yaml::from_str(yaml)?;
        for category in &mut vocabulary.categories {
            for keyword in &mut category.keywords {
                keyword.term = keyword.term.trim().to_lowercase();
            }
        }
        validate_vocabulary(&vocabulary)?;
        Ok(vocabulary)
    }

    /// Number of keywords across all categories.
    #[must_use]
    pub fn keyword_count(&self) -> usize {
        self.categories.iter().map(|c| c.keywords.len()).sum()
    }
}

/// Load and validate a fallback vocabulary from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_vocabulary(path: &Path) -> Result<FallbackVocabulary, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::VocabularyFileIo {
        path: path.display().to_string(),
        source: e,
    })?;
    FallbackVocabulary::from_yaml(&content)
}

fn validate_vocabulary(vocabulary: &FallbackVocabulary) -> Result<(), ConfigError> {
    if vocabulary.categories.is_empty() {
        return Err(ConfigError::Validation(
            "vocabulary must define at least one category".to_string(),
        ));
    }

    let mut seen_labels = HashSet::new();
    for category in &vocabulary.categories {
        let label = category.label.trim();
        if label.is_empty() {
            return Err(ConfigError::Validation(
                "category label must be non-empty".to_string(),
            ));
        }
        if !seen_labels.insert(label.to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate category label: '{label}'"
            )));
        }
        if category.keywords.is_empty() {
            return Err(ConfigError::Validation(format!(
                "category '{label}' has no keywords"
            )));
        }
        for keyword in &category.keywords {
            if keyword.term.is_empty() || keyword.query.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "category '{label}' has a keyword with an empty term or query"
                )));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "vocabulary_test.rs"]
mod tests;
