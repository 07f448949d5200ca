//! Typed records produced from a generated trip recommendation.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One day of an outfit recommendation, as parsed from generated text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayOutfit {
    /// 1-based day number, taken from the heading when it carries a usable one.
    pub day_number: u32,
    /// Display label, e.g. `"Day 3 (Aug 2): Hiking in Denver"`.
    pub label: String,
    /// Raw text block for this day, without its heading.
    pub content: String,
    /// Shopping search query per outfit category, in source order.
    pub product_queries: ProductQueries,
}

/// Ordered category → search-query mapping.
///
/// Keys are unique. Inserting an existing category replaces its value but
/// keeps the position where the category first appeared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductQueries {
    entries: Vec<(String, String)>,
}

impl ProductQueries {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites `category`. Returns the previous value, if any.
    pub fn insert(
        &mut self,
        category: impl Into<String>,
        query: impl Into<String>,
    ) -> Option<String> {
        let category = category.into();
        let query = query.into();
        if let Some((_, existing)) = self.entries.iter_mut().find(|(k, _)| *k == category) {
            return Some(std::mem::replace(existing, query));
        }
        self.entries.push((category, query));
        None
    }

    #[must_use]
    pub fn get(&self, category: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == category)
            .map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn contains_key(&self, category: &str) -> bool {
        self.get(category).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(_, v)| v.as_str())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ProductQueries {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut queries = Self::new();
        for (k, v) in iter {
            queries.insert(k, v);
        }
        queries
    }
}

impl Serialize for ProductQueries {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

struct ProductQueriesVisitor;

impl<'de> Visitor<'de> for ProductQueriesVisitor {
    type Value = ProductQueries;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of category names to search queries")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut queries = ProductQueries::new();
        while let Some((k, v)) = access.next_entry::<String, String>()? {
            queries.insert(k, v);
        }
        Ok(queries)
    }
}

impl<'de> Deserialize<'de> for ProductQueries {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(ProductQueriesVisitor)
    }
}
