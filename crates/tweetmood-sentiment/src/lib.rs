//! Sentiment classification for short posts.
//!
//! Normalizes text, scores it with a pre-fitted TF-IDF vectorizer and a
//! binary linear model, and fetches recent posts for a username from a
//! priority-ordered list of Nitter-compatible instances, falling back to
//! the next instance when one fails or comes back empty.

pub mod classifier;
pub mod error;
pub mod fetcher;
pub mod input;
pub mod model;
pub mod normalize;
pub mod pipeline;
pub mod sources;
pub mod stopwords;
pub mod types;
pub mod vectorizer;

pub use classifier::Classifier;
pub use error::{
    ArtifactLoadError, AttemptFailure, FetchError, InputError, RegistryError, SourceAttempt,
    SourceError,
};
pub use fetcher::ResilientFetcher;
pub use input::MAX_FETCH_COUNT;
pub use model::LinearModel;
pub use normalize::normalize;
pub use pipeline::{classify_text, classify_user, summarize, SentimentSummary};
pub use sources::{ContentSource, NitterSource, SourceEndpoint, SourceRegistry};
pub use stopwords::StopWords;
pub use types::{ClassifiedItem, ItemMetadata, RawItem, Sentiment};
pub use vectorizer::{FeatureVector, TfidfVectorizer};
