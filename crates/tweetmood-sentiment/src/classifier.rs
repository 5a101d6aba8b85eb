//! Binary sentiment classifier over normalized tokens.

use std::path::Path;

use crate::error::ArtifactLoadError;
use crate::model::LinearModel;
use crate::types::Sentiment;
use crate::vectorizer::TfidfVectorizer;

/// A fitted (vectorizer, model) pair.
///
/// Only constructible when both artifacts loaded and agree on the feature
/// dimension, so every `Classifier` can classify. Immutable after
/// construction; share it by reference or `Arc`.
#[derive(Debug, Clone)]
pub struct Classifier {
    vectorizer: TfidfVectorizer,
    model: LinearModel,
}

impl Classifier {
    /// # Errors
    ///
    /// Returns [`ArtifactLoadError::DimensionMismatch`] if the vectorizer and
    /// model disagree on the number of features.
    pub fn new(
        vectorizer: TfidfVectorizer,
        model: LinearModel,
    ) -> Result<Self, ArtifactLoadError> {
        if vectorizer.dimension() != model.dimension() {
            return Err(ArtifactLoadError::DimensionMismatch {
                vectorizer: vectorizer.dimension(),
                model: model.dimension(),
            });
        }
        Ok(Self { vectorizer, model })
    }

    /// Load both artifacts. All-or-nothing: any failure yields no classifier.
    ///
    /// # Errors
    ///
    /// Returns [`ArtifactLoadError`] if either artifact is missing, malformed,
    /// or the two are incompatible.
    pub fn load(vectorizer_path: &Path, model_path: &Path) -> Result<Self, ArtifactLoadError> {
        let vectorizer = TfidfVectorizer::load(vectorizer_path)?;
        let model = LinearModel::load(model_path)?;
        let classifier = Self::new(vectorizer, model)?;
        tracing::info!(
            features = classifier.vectorizer.dimension(),
            vectorizer = %vectorizer_path.display(),
            model = %model_path.display(),
            "classifier artifacts loaded"
        );
        Ok(classifier)
    }

    /// Number of features shared by the vectorizer and the model.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.vectorizer.dimension()
    }

    /// Classify normalized tokens.
    ///
    /// Tokens are joined with single spaces before vectorizing. Empty input
    /// vectorizes to the zero vector and still gets a label.
    #[must_use]
    pub fn classify<S: AsRef<str>>(&self, tokens: &[S]) -> Sentiment {
        let document = tokens
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<&str>>()
            .join(" ");
        let features = self.vectorizer.transform(&document);
        Sentiment::from_label(self.model.predict(&features))
    }
}
