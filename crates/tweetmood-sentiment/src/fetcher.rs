//! Ordered fallback across content sources.
//!
//! Endpoints are tried one at a time in registry order. The first endpoint
//! that returns at least one item wins and the rest are never contacted.
//! Errors, timeouts and empty results are recorded and the next endpoint is
//! tried; only when every endpoint has been passed over does the caller see
//! [`FetchError::AllSourcesExhausted`], with one entry per endpoint.

use std::time::Duration;

use crate::error::{AttemptFailure, FetchError, SourceAttempt};
use crate::input::{validate_count, validate_username};
use crate::sources::{ContentSource, SourceRegistry};
use crate::types::RawItem;

/// Sequential first-success-wins fetcher over a [`SourceRegistry`].
#[derive(Debug)]
pub struct ResilientFetcher<S> {
    registry: SourceRegistry<S>,
    attempt_timeout: Duration,
}

impl<S: ContentSource> ResilientFetcher<S> {
    /// `attempt_timeout` bounds each endpoint attempt, so the worst case for
    /// one fetch is `registry.len() * attempt_timeout`.
    #[must_use]
    pub fn new(registry: SourceRegistry<S>, attempt_timeout: Duration) -> Self {
        Self {
            registry,
            attempt_timeout,
        }
    }

    #[must_use]
    pub fn registry(&self) -> &SourceRegistry<S> {
        &self.registry
    }

    /// Fetch up to `count` recent items for `username`.
    ///
    /// Input is validated before any endpoint is contacted. Each endpoint gets
    /// exactly one attempt.
    ///
    /// # Errors
    ///
    /// - [`FetchError::InvalidInput`] for a non-positive or oversized `count`
    ///   or a malformed username.
    /// - [`FetchError::AllSourcesExhausted`] when no endpoint produced items.
    pub async fn fetch(&self, username: &str, count: i64) -> Result<Vec<RawItem>, FetchError> {
        let count = validate_count(count)?;
        let username = validate_username(username)?;

        let mut attempts = Vec::with_capacity(self.registry.len());

        for source in self.registry.iter() {
            let endpoint = source.endpoint();
            let outcome =
                tokio::time::timeout(self.attempt_timeout, source.get_items(username, count))
                    .await;

            let failure = match outcome {
                Ok(Ok(mut items)) if !items.is_empty() => {
                    items.truncate(count);
                    tracing::info!(
                        endpoint = %endpoint.name,
                        username,
                        count = items.len(),
                        skipped_failures = attempts.len(),
                        "fetched items"
                    );
                    return Ok(items);
                }
                Ok(Ok(_)) => AttemptFailure::Empty,
                Ok(Err(e)) => AttemptFailure::Source(e.to_string()),
                Err(_) => AttemptFailure::TimedOut(self.attempt_timeout),
            };

            tracing::warn!(
                endpoint = %endpoint.name,
                base_url = %endpoint.base_url,
                username,
                reason = %failure,
                "source attempt failed; trying next source"
            );
            attempts.push(SourceAttempt {
                endpoint: endpoint.clone(),
                failure,
            });
        }

        tracing::warn!(
            username,
            tried = attempts.len(),
            "all sources exhausted"
        );
        Err(FetchError::AllSourcesExhausted(attempts))
    }
}
