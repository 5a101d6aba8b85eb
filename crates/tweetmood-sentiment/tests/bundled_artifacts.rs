//! The demo artifacts shipped under `artifacts/` load and agree with each other.

use std::path::PathBuf;

use tweetmood_sentiment::{classify_text, Classifier, Sentiment, StopWords};

fn artifact(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../artifacts")
        .join(name)
}

fn bundled_classifier() -> Classifier {
    Classifier::load(&artifact("vectorizer.json"), &artifact("model.json"))
        .expect("bundled artifacts should load")
}

#[test]
fn bundled_artifacts_have_matching_dimensions() {
    let classifier = bundled_classifier();
    assert!(classifier.dimension() > 0);
}

#[test]
fn bundled_classifier_separates_obvious_cases() {
    let classifier = bundled_classifier();
    let stop_words = StopWords::english();

    assert_eq!(
        classify_text("I love this, what a great day!", &stop_words, &classifier),
        Sentiment::Positive
    );
    assert_eq!(
        classify_text("Ugh, this is the worst. So annoying.", &stop_words, &classifier),
        Sentiment::Negative
    );
}
