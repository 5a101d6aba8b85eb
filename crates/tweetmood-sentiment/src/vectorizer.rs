//! Pre-fitted TF-IDF vectorizer.
//!
//! The artifact is a JSON document exported from a fitted TF-IDF vectorizer:
//!
//! ```json
//! {
//!   "vocabulary": {"love": 0, "hate": 1},
//!   "idf": [1.2, 1.4],
//!   "ngram_range": [1, 1],
//!   "sublinear_tf": false,
//!   "norm": "l2"
//! }
//! ```
//!
//! `ngram_range`, `sublinear_tf` and `norm` are optional and default to the
//! values shown. `"norm": null` disables normalization.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use regex::Regex;
use serde::Deserialize;

use crate::error::ArtifactLoadError;

const ARTIFACT: &str = "vectorizer";

/// Default TF-IDF token pattern: runs of two or more word characters.
const TOKEN_PATTERN: &str = r"(?u)\b\w\w+\b";

/// Longest n-gram an artifact may request.
const MAX_NGRAM: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Norm {
    L1,
    L2,
}

#[allow(clippy::unnecessary_wraps)]
fn default_norm() -> Option<Norm> {
    Some(Norm::L2)
}

fn default_ngram_range() -> (usize, usize) {
    (1, 1)
}

#[derive(Debug, Deserialize)]
struct VectorizerArtifact {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
    #[serde(default = "default_ngram_range")]
    ngram_range: (usize, usize),
    #[serde(default)]
    sublinear_tf: bool,
    #[serde(default = "default_norm")]
    norm: Option<Norm>,
}

/// Sparse feature vector with a fixed dimension.
///
/// `entries` are `(index, weight)` pairs sorted by index, zero weights omitted.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    dim: usize,
    entries: Vec<(usize, f64)>,
}

impl FeatureVector {
    #[must_use]
    pub fn dim(&self) -> usize {
        self.dim
    }

    #[must_use]
    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    /// Dot product with a dense weight vector. Indices past `weights` count as zero.
    #[must_use]
    pub fn dot(&self, weights: &[f64]) -> f64 {
        self.entries
            .iter()
            .filter_map(|&(i, w)| weights.get(i).map(|c| c * w))
            .sum()
    }
}

/// Immutable TF-IDF transform loaded from a fitted artifact.
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
    ngram_range: (usize, usize),
    sublinear_tf: bool,
    norm: Option<Norm>,
    token_pattern: Regex,
}

impl TfidfVectorizer {
    /// Build a unigram, L2-normalized vectorizer from a vocabulary and idf weights.
    ///
    /// # Errors
    ///
    /// Returns [`ArtifactLoadError::Invalid`] if the vocabulary and weights disagree.
    pub fn new(
        vocabulary: HashMap<String, usize>,
        idf: Vec<f64>,
    ) -> Result<Self, ArtifactLoadError> {
        Self::from_artifact(VectorizerArtifact {
            vocabulary,
            idf,
            ngram_range: default_ngram_range(),
            sublinear_tf: false,
            norm: default_norm(),
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
        let artifact: VectorizerArtifact =
            serde_json::from_str(json).map_err(|e| ArtifactLoadError::Parse {
                artifact: ARTIFACT,
                path: path.to_string(),
                source: e,
            })?;
        Self::from_artifact(artifact)
    }

    fn from_artifact(artifact: VectorizerArtifact) -> Result<Self, ArtifactLoadError> {
        let invalid = |reason: String| ArtifactLoadError::Invalid {
            artifact: ARTIFACT,
            reason,
        };

        let dim = artifact.vocabulary.len();
        if dim == 0 {
            return Err(invalid("vocabulary is empty".to_string()));
        }
        if artifact.idf.len() != dim {
            return Err(invalid(format!(
                "idf has {} weights for {dim} vocabulary terms",
                artifact.idf.len()
            )));
        }
        if let Some(bad) = artifact.idf.iter().find(|w| !w.is_finite()) {
            return Err(invalid(format!("idf contains non-finite weight {bad}")));
        }

        let mut seen = HashSet::with_capacity(dim);
        for (term, &index) in &artifact.vocabulary {
            if index >= dim {
                return Err(invalid(format!(
                    "term '{term}' has index {index} outside 0..{dim}"
                )));
            }
            if !seen.insert(index) {
                return Err(invalid(format!("index {index} is assigned twice")));
            }
        }

        let (min_n, max_n) = artifact.ngram_range;
        if min_n == 0 || min_n > max_n {
            return Err(invalid(format!(
                "ngram_range ({min_n}, {max_n}) must satisfy 1 <= min <= max"
            )));
        }
        if max_n > MAX_NGRAM {
            return Err(invalid(format!(
                "ngram_range upper bound {max_n} exceeds {MAX_NGRAM}"
            )));
        }

        let token_pattern = Regex::new(TOKEN_PATTERN)
            .map_err(|e| invalid(format!("token pattern failed to compile: {e}")))?;

        Ok(Self {
            vocabulary: artifact.vocabulary,
            idf: artifact.idf,
            ngram_range: artifact.ngram_range,
            sublinear_tf: artifact.sublinear_tf,
            norm: artifact.norm,
            token_pattern,
        })
    }

    /// Number of features every transformed vector has.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.idf.len()
    }

    /// Transform one document into a TF-IDF feature vector.
    ///
    /// Unknown terms are ignored; a document with no known terms (including
    /// the empty string) yields the zero vector.
    #[must_use]
    pub fn transform(&self, document: &str) -> FeatureVector {
        let lowered = document.to_lowercase();
        let tokens: Vec<&str> = self
            .token_pattern
            .find_iter(&lowered)
            .map(|m| m.as_str())
            .collect();

        let mut counts: HashMap<usize, f64> = HashMap::new();
        let (min_n, max_n) = self.ngram_range;
        for n in min_n..=max_n {
            for window in tokens.windows(n) {
                let gram = window.join(" ");
                if let Some(&index) = self.vocabulary.get(&gram) {
                    *counts.entry(index).or_insert(0.0) += 1.0;
                }
            }
        }

        let mut entries: Vec<(usize, f64)> = counts
            .into_iter()
            .map(|(index, tf)| {
                let tf = if self.sublinear_tf { 1.0 + tf.ln() } else { tf };
                (index, tf * self.idf[index])
            })
            .filter(|&(_, w)| w != 0.0)
            .collect();
        entries.sort_unstable_by_key(|&(index, _)| index);

        let magnitude = match self.norm {
            Some(Norm::L2) => entries.iter().map(|&(_, w)| w * w).sum::<f64>().sqrt(),
            Some(Norm::L1) => entries.iter().map(|&(_, w)| w.abs()).sum(),
            None => 1.0,
        };
        if magnitude > 0.0 {
            for entry in &mut entries {
                entry.1 /= magnitude;
            }
        }

        FeatureVector {
            dim: self.dimension(),
            entries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "vocabulary": {"love": 0, "hate": 1, "not": 2, "not good": 3, "good": 4},
        "idf": [1.0, 1.0, 2.0, 3.0, 1.5],
        "ngram_range": [1, 2],
        "norm": null
    }"#;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn empty_document_is_zero_vector_with_full_dimension() {
        let v = TfidfVectorizer::from_json(SAMPLE).unwrap();
        let features = v.transform("");
        assert!(features.is_zero());
        assert_eq!(features.dim(), 5);
    }

    #[test]
    fn counts_unigrams_and_bigrams() {
        let v = TfidfVectorizer::from_json(SAMPLE).unwrap();
        let features = v.transform("not good not good love");
        assert_eq!(
            features.entries(),
            &[(0, 1.0), (2, 4.0), (3, 6.0), (4, 3.0)]
        );
    }

    #[test]
    fn single_character_tokens_are_ignored() {
        let mut vocabulary = HashMap::new();
        vocabulary.insert("a".to_string(), 0);
        vocabulary.insert("ok".to_string(), 1);
        let v = TfidfVectorizer::new(vocabulary, vec![1.0, 1.0]).unwrap();
        assert_eq!(v.transform("a ok").entries(), &[(1, 1.0)]);
    }

    #[test]
    fn l2_norm_gives_unit_length() {
        let mut vocabulary = HashMap::new();
        vocabulary.insert("love".to_string(), 0);
        vocabulary.insert("hate".to_string(), 1);
        let v = TfidfVectorizer::new(vocabulary, vec![3.0, 4.0]).unwrap();
        let features = v.transform("love hate");
        let entries = features.entries();
        assert!(close(entries[0].1, 0.6));
        assert!(close(entries[1].1, 0.8));
    }

    #[test]
    fn sublinear_tf_uses_log_counts() {
        let json = r#"{"vocabulary": {"wow": 0}, "idf": [1.0], "sublinear_tf": true, "norm": null}"#;
        let v = TfidfVectorizer::from_json(json).unwrap();
        let features = v.transform("wow wow wow");
        assert!(close(features.entries()[0].1, 1.0 + 3f64.ln()));
    }

    #[test]
    fn dot_product_uses_sparse_entries() {
        let v = TfidfVectorizer::from_json(SAMPLE).unwrap();
        let features = v.transform("love hate");
        assert!(close(features.dot(&[2.0, -1.0, 0.0, 0.0, 0.0]), 1.0));
    }

    #[test]
    fn rejects_idf_length_mismatch() {
        let json = r#"{"vocabulary": {"love": 0, "hate": 1}, "idf": [1.0]}"#;
        let err = TfidfVectorizer::from_json(json).unwrap_err();
        assert!(matches!(err, ArtifactLoadError::Invalid { .. }), "got {err:?}");
    }

    #[test]
    fn rejects_out_of_range_index() {
        let json = r#"{"vocabulary": {"love": 0, "hate": 5}, "idf": [1.0, 1.0]}"#;
        assert!(matches!(
            TfidfVectorizer::from_json(json),
            Err(ArtifactLoadError::Invalid { .. })
        ));
    }

    #[test]
    fn rejects_bad_ngram_range() {
        let json = r#"{"vocabulary": {"love": 0}, "idf": [1.0], "ngram_range": [2, 1]}"#;
        assert!(matches!(
            TfidfVectorizer::from_json(json),
            Err(ArtifactLoadError::Invalid { .. })
        ));
    }

    #[test]
    fn rejects_oversized_ngram_range() {
        let json =
            r#"{"vocabulary": {"love": 0}, "idf": [1.0], "ngram_range": [1, 1000000000]}"#;
        let err = TfidfVectorizer::from_json(json).unwrap_err();
        assert!(
            matches!(err, ArtifactLoadError::Invalid { ref reason, .. } if reason.contains("exceeds 10")),
            "got {err:?}"
        );
    }

    #[test]
    fn accepts_ngram_range_at_cap() {
        let json = r#"{"vocabulary": {"love": 0}, "idf": [1.0], "ngram_range": [1, 10]}"#;
        assert!(TfidfVectorizer::from_json(json).is_ok());
    }

    #[test]
    fn malformed_json_is_parse_error() {
        assert!(matches!(
            TfidfVectorizer::from_json("{not json"),
            Err(ArtifactLoadError::Parse { .. })
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(
            TfidfVectorizer::load(Path::new("/no/such/vectorizer.json")),
            Err(ArtifactLoadError::Io { .. })
        ));
    }
}
