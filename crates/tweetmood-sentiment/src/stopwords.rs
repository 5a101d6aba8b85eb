//! Stop-word sets used by the normalizer.

use std::collections::HashSet;
use std::path::Path;

use crate::error::ArtifactLoadError;

/// English stop-words, matching the NLTK `stopwords` corpus the artifacts
/// were trained against.
const ENGLISH: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't",
    "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn",
    "wouldn't",
];

/// Immutable set of words the normalizer drops.
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// The built-in English list.
    #[must_use]
    pub fn english() -> Self {
        Self::from_words(ENGLISH.iter().copied())
    }

    /// Build a set from arbitrary words. Entries are trimmed and lowercased.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Read one word per line. Blank lines and `#` comments are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ArtifactLoadError::StopWords`] if the file cannot be read.
    pub fn from_file(path: &Path) -> Result<Self, ArtifactLoadError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ArtifactLoadError::StopWords {
                path: path.display().to_string(),
                source: e,
            })?;

        Ok(Self::from_words(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.starts_with('#')),
        ))
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_list_has_full_corpus() {
        let stop_words = StopWords::english();
        assert_eq!(stop_words.len(), 179);
        assert!(stop_words.contains("the"));
        assert!(stop_words.contains("don"));
        assert!(!stop_words.contains("love"));
    }

    #[test]
    fn from_words_lowercases_and_skips_blanks() {
        let stop_words = StopWords::from_words(["This", " ", "  And "]);
        assert_eq!(stop_words.len(), 2);
        assert!(stop_words.contains("this"));
        assert!(stop_words.contains("and"));
    }

    #[test]
    fn from_file_ignores_comments() {
        let path = std::env::temp_dir().join(format!(
            "tweetmood-stopwords-{}.txt",
            std::process::id()
        ));
        std::fs::write(&path, "# custom list\nfoo\n\nBar\n").unwrap();
        let stop_words = StopWords::from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(stop_words.len(), 2);
        assert!(stop_words.contains("bar"));
    }

    #[test]
    fn from_file_missing_is_load_error() {
        let result = StopWords::from_file(Path::new("/no/such/stopwords.txt"));
        assert!(matches!(result, Err(ArtifactLoadError::StopWords { .. })));
    }
}
