use std::fmt;
use std::time::Duration;

use thiserror::Error;

use crate::sources::SourceEndpoint;

/// The vectorizer, model, or stop-word list could not be loaded.
///
/// Fatal for classification: no [`crate::Classifier`] exists without both
/// artifacts, so callers report this once and refuse every classify request.
#[derive(Debug, Error)]
pub enum ArtifactLoadError {
    #[error("failed to read {artifact} artifact {path}: {source}")]
    Io {
        artifact: &'static str,
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to deserialize {artifact} artifact {path}: {source}")]
    Parse {
        artifact: &'static str,
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid {artifact} artifact: {reason}")]
    Invalid {
        artifact: &'static str,
        reason: String,
    },

    #[error("vectorizer produces {vectorizer} features but model expects {model}")]
    DimensionMismatch { vectorizer: usize, model: usize },

    #[error("failed to read stop-word list {path}: {source}")]
    StopWords {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// A single endpoint failed. Recovered by [`crate::ResilientFetcher`].
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("rate limited by {url} (retry after {retry_after_secs}s)")]
    RateLimited { url: String, retry_after_secs: u64 },

    #[error("user feed not found: {url}")]
    NotFound { url: String },

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("RSS parse error: {0}")]
    Xml(#[from] quick_xml::Error),
}

/// The endpoint list handed to [`crate::SourceRegistry::new`] is unusable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("source registry must contain at least one endpoint")]
    Empty,

    #[error("duplicate endpoint name: '{0}'")]
    DuplicateName(String),
}

/// Request rejected before any endpoint is contacted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("item count must be between 1 and {max}, got {count}")]
    InvalidCount { count: i64, max: usize },

    #[error("invalid username '{username}': {reason}")]
    InvalidUsername {
        username: String,
        reason: &'static str,
    },
}

/// Why one endpoint did not produce items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptFailure {
    Source(String),
    TimedOut(Duration),
    Empty,
}

impl fmt::Display for AttemptFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttemptFailure::Source(message) => f.write_str(message),
            AttemptFailure::TimedOut(after) => {
                write!(f, "timed out after {}ms", after.as_millis())
            }
            AttemptFailure::Empty => f.write_str("empty result"),
        }
    }
}

/// One tried endpoint and the reason it was passed over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceAttempt {
    pub endpoint: SourceEndpoint,
    pub failure: AttemptFailure,
}

impl fmt::Display for SourceAttempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}): {}",
            self.endpoint.name, self.endpoint.base_url, self.failure
        )
    }
}

/// Terminal outcome of a failed fetch.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),

    #[error("all {} sources exhausted: {}", .0.len(), join_attempts(.0))]
    AllSourcesExhausted(Vec<SourceAttempt>),
}

impl FetchError {
    /// Per-endpoint breakdown, empty for input errors.
    #[must_use]
    pub fn attempts(&self) -> &[SourceAttempt] {
        match self {
            FetchError::AllSourcesExhausted(attempts) => attempts,
            FetchError::InvalidInput(_) => &[],
        }
    }
}

fn join_attempts(attempts: &[SourceAttempt]) -> String {
    attempts
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoint(name: &str) -> SourceEndpoint {
        SourceEndpoint::new(name, format!("https://{name}.example"))
    }

    #[test]
    fn empty_failure_displays_empty_result() {
        assert_eq!(AttemptFailure::Empty.to_string(), "empty result");
    }

    #[test]
    fn timeout_failure_displays_millis() {
        let failure = AttemptFailure::TimedOut(Duration::from_millis(1500));
        assert_eq!(failure.to_string(), "timed out after 1500ms");
    }

    #[test]
    fn exhausted_lists_every_endpoint_in_order() {
        let err = FetchError::AllSourcesExhausted(vec![
            SourceAttempt {
                endpoint: endpoint("first"),
                failure: AttemptFailure::Source("HTTP error: connection refused".to_string()),
            },
            SourceAttempt {
                endpoint: endpoint("second"),
                failure: AttemptFailure::Empty,
            },
        ]);
        assert_eq!(
            err.to_string(),
            "all 2 sources exhausted: first (https://first.example): HTTP error: connection refused; \
             second (https://second.example): empty result"
        );
        assert_eq!(err.attempts().len(), 2);
    }

    #[test]
    fn invalid_input_has_no_attempts() {
        let err = FetchError::from(InputError::InvalidCount { count: 0, max: 100 });
        assert!(err.attempts().is_empty());
        assert_eq!(
            err.to_string(),
            "invalid input: item count must be between 1 and 100, got 0"
        );
    }
}
