//! Sentiment pipeline orchestration.

use crate::classifier::Classifier;
use crate::error::FetchError;
use crate::fetcher::ResilientFetcher;
use crate::normalize::normalize;
use crate::sources::ContentSource;
use crate::stopwords::StopWords;
use crate::types::{ClassifiedItem, Sentiment};

/// Classify one piece of text: normalize, then classify. Never fails.
#[must_use]
pub fn classify_text(text: &str, stop_words: &StopWords, classifier: &Classifier) -> Sentiment {
    let tokens = normalize(text, stop_words);
    classifier.classify(&tokens)
}

/// Fetch up to `count` posts for `username` and classify each one.
///
/// Results keep the fetch order exactly. Items whose text normalizes to
/// nothing are still classified, never dropped.
///
/// # Errors
///
/// Propagates [`FetchError`] from the fetcher untouched; there are no
/// partial results.
pub async fn classify_user<S: ContentSource>(
    fetcher: &ResilientFetcher<S>,
    username: &str,
    count: i64,
    stop_words: &StopWords,
    classifier: &Classifier,
) -> Result<Vec<ClassifiedItem>, FetchError> {
    let items = fetcher.fetch(username, count).await?;

    let classified: Vec<ClassifiedItem> = items
        .into_iter()
        .map(|item| {
            let sentiment = classify_text(&item.text, stop_words, classifier);
            ClassifiedItem { item, sentiment }
        })
        .collect();

    let summary = summarize(&classified);
    tracing::info!(
        username,
        items = classified.len(),
        positive = summary.positive,
        negative = summary.negative,
        "classified user items"
    );

    Ok(classified)
}

/// Positive/negative tally over a batch of classified items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SentimentSummary {
    pub positive: usize,
    pub negative: usize,
}

#[must_use]
pub fn summarize(items: &[ClassifiedItem]) -> SentimentSummary {
    items
        .iter()
        .fold(SentimentSummary::default(), |mut acc, item| {
            match item.sentiment {
                Sentiment::Positive => acc.positive += 1,
                Sentiment::Negative => acc.negative += 1,
            }
            acc
        })
}
