//! Closet inventory items and the fixed clothing taxonomy they are filed under.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::shopping::ShoppingResult;
use crate::text::contains_word;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClothingCategory {
    Top,
    Bottom,
    Shoe,
    Accessory,
    Outerwear,
    Dress,
    Other,
}

impl ClothingCategory {
    pub const ALL: [ClothingCategory; 7] = [
        ClothingCategory::Top,
        ClothingCategory::Bottom,
        ClothingCategory::Shoe,
        ClothingCategory::Accessory,
        ClothingCategory::Outerwear,
        ClothingCategory::Dress,
        ClothingCategory::Other,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ClothingCategory::Top => "top",
            ClothingCategory::Bottom => "bottom",
            ClothingCategory::Shoe => "shoe",
            ClothingCategory::Accessory => "accessory",
            ClothingCategory::Outerwear => "outerwear",
            ClothingCategory::Dress => "dress",
            ClothingCategory::Other => "other",
        }
    }
}

impl std::fmt::Display for ClothingCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClothingCategory {
    type Err = ClosetError;

    /// Accepts singular and plural spellings, e.g. `"tops"` or `"shoes"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "top" | "tops" => Ok(ClothingCategory::Top),
            "bottom" | "bottoms" => Ok(ClothingCategory::Bottom),
            "shoe" | "shoes" => Ok(ClothingCategory::Shoe),
            "accessory" | "accessories" | "jewelry" | "jewelries" | "bag" | "bags" => {
                Ok(ClothingCategory::Accessory)
            }
            "outerwear" => Ok(ClothingCategory::Outerwear),
            "dress" | "dresses" => Ok(ClothingCategory::Dress),
            "other" | "others" => Ok(ClothingCategory::Other),
            other => Err(ClosetError::UnknownCategory(other.to_string())),
        }
    }
}

/// Keyword groups checked in order; earlier groups win. Dresses come before
/// bottoms so "skirt dress" files as a dress, outerwear before tops so
/// "shirt jacket" files as outerwear.
const TAXONOMY: &[(ClothingCategory, &[&str])] = &[
    (
        ClothingCategory::Dress,
        &["dress", "gown", "frock", "sundress", "maxi", "romper", "jumpsuit"],
    ),
    (
        ClothingCategory::Outerwear,
        &[
            "jacket",
            "coat",
            "parka",
            "blazer",
            "windbreaker",
            "raincoat",
            "cardigan",
            "vest",
        ],
    ),
    (
        ClothingCategory::Shoe,
        &[
            "shoe", "sneaker", "boot", "sandal", "heel", "flat", "loafer", "slipper", "trainer",
        ],
    ),
    (
        ClothingCategory::Bottom,
        &[
            "pant", "jean", "short", "skirt", "legging", "trouser", "jogger", "chino",
        ],
    ),
    (
        ClothingCategory::Top,
        &[
            "t-shirt",
            "shirt",
            "tee",
            "blouse",
            "top",
            "sweater",
            "hoodie",
            "tank",
            "polo",
            "camisole",
            "sweatshirt",
        ],
    ),
    (
        ClothingCategory::Accessory,
        &[
            "hat",
            "cap",
            "sunglasses",
            "scarf",
            "bag",
            "backpack",
            "belt",
            "watch",
            "jewelry",
            "necklace",
            "bracelet",
            "earring",
            "glove",
            "umbrella",
        ],
    ),
];

/// Files an arbitrary product title under the closet taxonomy.
///
/// Matching is case-insensitive on whole words (plurals included). Titles
/// with no recognizable clothing noun are [`ClothingCategory::Other`].
#[must_use]
pub fn categorize_title(title: &str) -> ClothingCategory {
    let lower = title.to_lowercase();
    TAXONOMY
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| contains_word(&lower, k)))
        .map_or(ClothingCategory::Other, |(category, _)| *category)
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClosetError {
    #[error("unknown clothing category: {0}")]
    UnknownCategory(String),

    #[error("invalid closet item {field}: {reason}")]
    Validation { field: &'static str, reason: String },
}

/// An item a user saved from shopping results into their closet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClosetItem {
    pub title: String,
    pub item_type: ClothingCategory,
    pub price: Option<String>,
    pub image_url: Option<String>,
    /// Store or marketplace the item was found on.
    pub source: Option<String>,
}

impl ClosetItem {
    /// Builds a closet item, deriving `item_type` from the title.
    ///
    /// # Errors
    ///
    /// Returns [`ClosetError::Validation`] if a field is empty or too long.
    pub fn new(
        title: &str,
        price: Option<&str>,
        image_url: Option<&str>,
    ) -> Result<Self, ClosetError> {
        let item = Self {
            title: title.trim().to_string(),
            item_type: categorize_title(title),
            price: non_blank(price),
            image_url: non_blank(image_url),
            source: None,
        };
        item.validate()?;
        Ok(item)
    }

    #[must_use]
    pub fn with_source(mut self, source: &str) -> Self {
        self.source = non_blank(Some(source));
        self
    }

    /// Files a shopping result into the closet: its thumbnail becomes the
    /// item image and its merchant the item source.
    ///
    /// # Errors
    ///
    /// Returns [`ClosetError::Validation`] if the result has no title or a
    /// field is too long.
    pub fn from_result(result: &ShoppingResult) -> Result<Self, ClosetError> {
        let item = Self::new(
            result.title.as_deref().unwrap_or_default(),
            result.price.as_deref(),
            result.thumbnail.as_deref(),
        )?
        .with_source(result.source.as_deref().unwrap_or_default());
        item.validate()?;
        Ok(item)
    }

    /// # Errors
    ///
    /// Returns [`ClosetError::Validation`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ClosetError> {
        if self.title.is_empty() {
            return Err(ClosetError::Validation {
                field: "title",
                reason: "must be non-empty".to_string(),
            });
        }
        check_len("title", Some(&self.title), 100)?;
        check_len("price", self.price.as_deref(), 20)?;
        check_len("image_url", self.image_url.as_deref(), 300)?;
        check_len("source", self.source.as_deref(), 50)
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(ToString::to_string)
}

fn check_len(field: &'static str, value: Option<&str>, max: usize) -> Result<(), ClosetError> {
    match value {
        Some(v) if v.chars().count() > max => Err(ClosetError::Validation {
            field,
            reason: format!("must be at most {max} characters"),
        }),
        _ => Ok(()),
    }
}
