//! Command handlers: build the collaborators each command needs, run it,
//! and render the result.

use std::fmt::Write as _;
use std::time::Duration;

use anyhow::Context;
use tweetmood_core::AppConfig;
use tweetmood_sentiment::{
    classify_text, classify_user, summarize, ClassifiedItem, Classifier, FetchError,
    NitterSource, ResilientFetcher, SourceAttempt, SourceEndpoint, SourceRegistry, StopWords,
};

/// Load both artifacts. A failure here is reported once and nothing is
/// classified.
fn load_classifier(config: &AppConfig) -> anyhow::Result<Classifier> {
    Classifier::load(&config.vectorizer_path, &config.model_path)
        .context("cannot classify: sentiment model artifacts failed to load")
}

fn load_stop_words(config: &AppConfig) -> anyhow::Result<StopWords> {
    match &config.stopwords_path {
        Some(path) => Ok(StopWords::from_file(path)?),
        None => Ok(StopWords::english()),
    }
}

fn load_endpoints(config: &AppConfig) -> anyhow::Result<Vec<SourceEndpoint>> {
    let sources_file = tweetmood_core::load_sources(&config.sources_path).with_context(|| {
        format!(
            "failed to load sources from {}",
            config.sources_path.display()
        )
    })?;
    Ok(sources_file
        .sources
        .into_iter()
        .map(|s| SourceEndpoint::new(s.name, s.base_url))
        .collect())
}

pub(crate) fn build_fetcher(config: &AppConfig) -> anyhow::Result<ResilientFetcher<NitterSource>> {
    let timeout = Duration::from_secs(config.fetch_timeout_secs);
    let client = NitterSource::http_client(timeout, &config.user_agent)?;
    let sources: Vec<NitterSource> = load_endpoints(config)?
        .into_iter()
        .map(|endpoint| NitterSource::new(client.clone(), endpoint))
        .collect();
    let registry = SourceRegistry::new(sources)?;
    Ok(ResilientFetcher::new(registry, timeout))
}

pub(crate) fn run_text(config: &AppConfig, text: &str) -> anyhow::Result<()> {
    let classifier = load_classifier(config)?;
    let stop_words = load_stop_words(config)?;

    let sentiment = classify_text(text, &stop_words, &classifier);
    println!("Sentiment: {sentiment}");
    Ok(())
}

pub(crate) async fn run_user(
    config: &AppConfig,
    username: &str,
    count: i64,
    json: bool,
) -> anyhow::Result<()> {
    let classifier = load_classifier(config)?;
    let stop_words = load_stop_words(config)?;
    let fetcher = build_fetcher(config)?;

    let items = match classify_user(&fetcher, username, count, &stop_words, &classifier).await {
        Ok(items) => items,
        Err(FetchError::AllSourcesExhausted(attempts)) => {
            eprint!("{}", render_breakdown(username, &attempts));
            anyhow::bail!("no source returned posts for '{username}'");
        }
        Err(e) => return Err(e.into()),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&items)?);
    } else {
        print!("{}", render_items(&items));
    }
    Ok(())
}

/// Endpoints in the order `user` will try them, after registry validation.
pub(crate) fn list_endpoints(config: &AppConfig) -> anyhow::Result<Vec<SourceEndpoint>> {
    let fetcher = build_fetcher(config)?;
    Ok(fetcher.registry().endpoints().cloned().collect())
}

pub(crate) fn run_sources(config: &AppConfig) -> anyhow::Result<()> {
    let endpoints = list_endpoints(config)?;
    print!("{}", render_endpoints(&endpoints));
    Ok(())
}

/// One `[Label] text` line per item followed by a tally.
pub(crate) fn render_items(items: &[ClassifiedItem]) -> String {
    let mut out = String::new();
    for classified in items {
        let _ = writeln!(out, "[{}] {}", classified.sentiment, classified.item.text);
    }
    let summary = summarize(items);
    let _ = writeln!(
        out,
        "\n{} posts: {} positive, {} negative",
        items.len(),
        summary.positive,
        summary.negative
    );
    out
}

pub(crate) fn render_breakdown(username: &str, attempts: &[SourceAttempt]) -> String {
    let mut out = format!(
        "could not fetch posts for '{username}'; all {} sources failed:\n",
        attempts.len()
    );
    for (i, attempt) in attempts.iter().enumerate() {
        let _ = writeln!(out, "  {}. {attempt}", i + 1);
    }
    out
}

pub(crate) fn render_endpoints(endpoints: &[SourceEndpoint]) -> String {
    let width = endpoints.iter().map(|e| e.name.len()).max().unwrap_or(0);
    let mut out = String::new();
    for (i, endpoint) in endpoints.iter().enumerate() {
        let _ = writeln!(
            out,
            "{}. {:<width$}  {}",
            i + 1,
            endpoint.name,
            endpoint.base_url
        );
    }
    out
}
