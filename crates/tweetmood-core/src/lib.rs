pub mod app_config;
pub mod config;
pub mod error;
pub mod sources;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::ConfigError;
pub use sources::{load_sources, SourceConfig, SourcesFile};
