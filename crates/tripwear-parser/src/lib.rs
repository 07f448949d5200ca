//! Turns a generated day-by-day outfit recommendation into typed
//! [`DayOutfit`] records with normalized shopping queries.
//!
//! Parsing runs in two passes: [`heading`] locates day headings with an
//! ordered list of matchers, then each day's slice goes through the
//! independent matchers in [`sections`] and, failing those, [`fallback`].

pub mod fallback;
pub mod heading;
pub mod parser;
pub mod query;
pub mod sections;

pub use fallback::{fallback_queries, inspiration_query};
pub use parser::{parse, OutfitParser};
pub use query::{normalize_query, prefix_gender, shopping_terms};
pub use sections::GENERAL_CATEGORY;
pub use tripwear_core::{DayOutfit, FallbackVocabulary, ProductQueries};
