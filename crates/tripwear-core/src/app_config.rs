use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    /// Fallback tracing filter used when `RUST_LOG` is not set.
    pub log_level: String,
    /// Optional YAML override for the fallback keyword vocabulary.
    pub vocabulary_path: Option<PathBuf>,
    /// Gender applied to shopping queries when the caller supplies none.
    pub default_gender: Option<String>,
    pub max_input_bytes: usize,
}
