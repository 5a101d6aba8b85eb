use chrono::{DateTime, FixedOffset};
use serde::Serialize;

/// Binary sentiment label. There is no neutral value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
}

impl Sentiment {
    /// Map a model label to a sentiment: `0` is negative, anything else positive.
    #[must_use]
    pub fn from_label(label: i64) -> Self {
        if label == 0 {
            Sentiment::Negative
        } else {
            Sentiment::Positive
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "Positive"),
            Sentiment::Negative => write!(f, "Negative"),
        }
    }
}

/// Optional details a source may attach to a post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ItemMetadata {
    /// Link to the post on the source instance.
    pub url: Option<String>,
    pub author: Option<String>,
    pub published: Option<DateTime<FixedOffset>>,
}

/// A fetched post before classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawItem {
    pub text: String,
    #[serde(flatten)]
    pub metadata: ItemMetadata,
}

impl RawItem {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            metadata: ItemMetadata::default(),
        }
    }
}

/// A fetched post paired with its sentiment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedItem {
    #[serde(flatten)]
    pub item: RawItem,
    pub sentiment: Sentiment,
}
