pub mod app_config;
pub mod closet;
pub mod config;
pub mod outfit;
pub mod shopping;
pub mod text;
pub mod trip;
pub mod vocabulary;

pub use app_config::{AppConfig, Environment};
pub use closet::{categorize_title, ClosetError, ClosetItem, ClothingCategory};
pub use config::{load_app_config, load_app_config_from_env};
pub use outfit::{DayOutfit, ProductQueries};
pub use shopping::{
    purchasable, shopping_query, DayRecommendation, ShoppingGroup, ShoppingResult,
    TripRecommendation,
};
pub use trip::{build_prompt, TripError, TripProfile};
pub use vocabulary::{load_vocabulary, FallbackCategory, FallbackKeyword, FallbackVocabulary};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read vocabulary file {path}: {source}")]
    VocabularyFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse vocabulary file: {0}")]
    VocabularyFileParse(#[from] serde_yaml::Error),

    #[error("vocabulary validation failed: {0}")]
    Validation(String),
}
