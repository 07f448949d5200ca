//! Shopping records returned by the external search collaborator and the
//! recommendation blob persisted against a trip.

use serde::{Deserialize, Serialize};

use crate::outfit::{DayOutfit, ProductQueries};

/// Builds the query string handed to the shopping collaborator.
#[must_use]
pub fn shopping_query(gender: Option<&str>, query: &str) -> String {
    format!("{} {}", gender.unwrap_or_default().trim(), query.trim())
        .trim()
        .to_string()
}

/// One product record as returned by the shopping search collaborator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingResult {
    pub title: Option<String>,
    /// Display price exactly as returned, e.g. `"$24.99"`.
    pub price: Option<String>,
    pub link: Option<String>,
    pub thumbnail: Option<String>,
    /// Merchant name.
    pub source: Option<String>,
}

impl ShoppingResult {
    /// Returns `true` if the result has a title, a price and a followable web link.
    #[must_use]
    pub fn is_purchasable(&self) -> bool {
        let present = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());
        let link_ok = self.link.as_deref().is_some_and(|link| {
            let link = link.trim();
            !link.to_lowercase().starts_with("javascript:") && link.contains("http")
        });
        present(&self.title) && present(&self.price) && link_ok
    }
}

/// Keeps only purchasable results, preserving order.
#[must_use]
pub fn purchasable(results: Vec<ShoppingResult>) -> Vec<ShoppingResult> {
    results.into_iter().filter(ShoppingResult::is_purchasable).collect()
}

/// Shopping results found for one item keyword of a day's outfit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingGroup {
    pub item: String,
    pub results: Vec<ShoppingResult>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecommendation {
    pub label: String,
    pub content: String,
    pub queries: ProductQueries,
    /// Overall outfit inspiration image, if one was found.
    pub image: Option<String>,
    #[serde(default)]
    pub shopping: Vec<ShoppingGroup>,
}

impl From<DayOutfit> for DayRecommendation {
    fn from(day: DayOutfit) -> Self {
        Self {
            label: day.label,
            content: day.content,
            queries: day.product_queries,
            image: None,
            shopping: Vec::new(),
        }
    }
}

/// The resolved recommendation stored as an opaque blob on a trip record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripRecommendation {
    pub days: Vec<DayRecommendation>,
}

impl TripRecommendation {
    /// # Errors
    ///
    /// Returns a `serde_json::Error` if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// # Errors
    ///
    /// Returns a `serde_json::Error` if `json` is not a valid blob.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl FromIterator<DayOutfit> for TripRecommendation {
    fn from_iter<I: IntoIterator<Item = DayOutfit>>(iter: I) -> Self {
        Self {
            days: iter.into_iter().map(DayRecommendation::from).collect(),
        }
    }
}
