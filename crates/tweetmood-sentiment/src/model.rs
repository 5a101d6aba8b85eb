//! Pre-fitted binary linear model (logistic regression / linear SVM weights).

use std::path::Path;

use serde::Deserialize;

use crate::error::ArtifactLoadError;
use crate::vectorizer::FeatureVector;

const ARTIFACT: &str = "model";

#[derive(Debug, Deserialize)]
struct ModelArtifact {
    coef: Vec<f64>,
    intercept: f64,
    #[serde(default = "default_classes")]
    classes: Vec<i64>,
}

fn default_classes() -> Vec<i64> {
    vec![0, 1]
}

/// Binary linear classifier: `classes[1]` when `coef · x + intercept > 0`,
/// `classes[0]` otherwise.
#[derive(Debug, Clone)]
pub struct LinearModel {
    coef: Vec<f64>,
    intercept: f64,
    classes: [i64; 2],
}

impl LinearModel {
    /// # Errors
    ///
    /// Returns [`ArtifactLoadError::Invalid`] if the weights are empty or non-finite.
    pub fn new(coef: Vec<f64>, intercept: f64) -> Result<Self, ArtifactLoadError> {
        Self::from_artifact(ModelArtifact {
            coef,
            intercept,
            classes: default_classes(),
        })
    }

    /// Load the artifact from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ArtifactLoadError`] if the file is missing, malformed, or inconsistent.
    pub fn load(path: &Path) -> Result<Self, ArtifactLoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| ArtifactLoadError::Io {
            artifact: ARTIFACT,
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_json_with_path(&content, &path.display().to_string())
    }

    /// Parse the artifact from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`ArtifactLoadError`] if the JSON is malformed or inconsistent.
    pub fn from_json(json: &str) -> Result<Self, ArtifactLoadError> {
        Self::from_json_with_path(json, "<inline>")
    }

    fn from_json_with_path(json: &str, path: &str) -> Result<Self, ArtifactLoadError> {
        let artifact: ModelArtifact =
            serde_json::from_str(json).map_err(|e| ArtifactLoadError::Parse {
                artifact: ARTIFACT,
                path: path.to_string(),
                source: e,
            })?;
        Self::from_artifact(artifact)
    }

    fn from_artifact(artifact: ModelArtifact) -> Result<Self, ArtifactLoadError> {
        let invalid = |reason: String| ArtifactLoadError::Invalid {
            artifact: ARTIFACT,
            reason,
        };

        if artifact.coef.is_empty() {
            return Err(invalid("coef is empty".to_string()));
        }
        if !artifact.intercept.is_finite() || artifact.coef.iter().any(|c| !c.is_finite()) {
            return Err(invalid("weights must be finite".to_string()));
        }
        let classes: [i64; 2] = match artifact.classes.as_slice() {
            &[a, b] if a != b => [a, b],
            other => {
                return Err(invalid(format!(
                    "expected two distinct classes, got {other:?}"
                )))
            }
        };

        Ok(Self {
            coef: artifact.coef,
            intercept: artifact.intercept,
            classes,
        })
    }

    /// Number of features the model expects.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.coef.len()
    }

    #[must_use]
    pub fn decision(&self, features: &FeatureVector) -> f64 {
        features.dot(&self.coef) + self.intercept
    }

    /// Predict the raw class label for one feature vector.
    #[must_use]
    pub fn predict(&self, features: &FeatureVector) -> i64 {
        if self.decision(features) > 0.0 {
            self.classes[1]
        } else {
            self.classes[0]
        }
    }
}
