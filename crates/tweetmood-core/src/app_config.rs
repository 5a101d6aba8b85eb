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

/// Process-wide settings, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Pre-fitted TF-IDF vectorizer artifact (JSON).
    pub vectorizer_path: PathBuf,
    /// Pre-fitted binary linear model artifact (JSON).
    pub model_path: PathBuf,
    /// Optional stop-word list; `None` means the built-in English list.
    pub stopwords_path: Option<PathBuf>,
    pub sources_path: PathBuf,
    /// Upper bound for a single endpoint attempt.
    pub fetch_timeout_secs: u64,
    pub user_agent: String,
    pub default_count: u32,
}
