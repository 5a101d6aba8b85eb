use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can drive it with a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let env = parse_environment(&or_default("TWEETMOOD_ENV", "development"))?;
    let log_level = or_default("TWEETMOOD_LOG_LEVEL", "info");

    let vectorizer_path = PathBuf::from(or_default(
        "TWEETMOOD_VECTORIZER_PATH",
        "./artifacts/vectorizer.json",
    ));
    let model_path = PathBuf::from(or_default(
        "TWEETMOOD_MODEL_PATH",
        "./artifacts/model.json",
    ));
    let stopwords_path = lookup("TWEETMOOD_STOPWORDS_PATH")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from);
    let sources_path = PathBuf::from(or_default(
        "TWEETMOOD_SOURCES_PATH",
        "./config/sources.yaml",
    ));

    let fetch_timeout_secs = parse_u64("TWEETMOOD_FETCH_TIMEOUT_SECS", "10")?;
    if fetch_timeout_secs == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "TWEETMOOD_FETCH_TIMEOUT_SECS".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }

    let user_agent = or_default("TWEETMOOD_USER_AGENT", "tweetmood/0.1 (sentiment-cli)");

    let default_count = parse_u32("TWEETMOOD_DEFAULT_COUNT", "5")?;
    if default_count == 0 {
        return Err(ConfigError::InvalidEnvVar {
            var: "TWEETMOOD_DEFAULT_COUNT".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }

    Ok(AppConfig {
        env,
        log_level,
        vectorizer_path,
        model_path,
        stopwords_path,
        sources_path,
        fetch_timeout_secs,
        user_agent,
        default_count,
    })
}

/// Parse a string into an `Environment` variant.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "TWEETMOOD_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}
