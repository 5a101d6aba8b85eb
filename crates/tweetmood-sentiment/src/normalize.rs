//! Text normalization ahead of vectorization.

use crate::stopwords::StopWords;

/// Turn raw text into lowercase alphabetic tokens with stop-words removed.
///
/// Every character outside `A-Z`/`a-z` acts as a separator, so digits,
/// punctuation, emoji and non-ASCII letters never reach the vectorizer.
/// Token order is preserved. Empty or all-punctuation input yields an empty
/// vector.
#[must_use]
pub fn normalize(text: &str, stop_words: &StopWords) -> Vec<String> {
    let cleaned: String = text
        .chars()
        .map(|c| {
            if c.is_ascii_alphabetic() {
                c.to_ascii_lowercase()
            } else {
                ' '
            }
        })
        .collect();

    cleaned
        .split_whitespace()
        .filter(|token| !stop_words.contains(token))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn none() -> StopWords {
        StopWords::default()
    }

    #[test]
    fn lowercases_and_splits_on_punctuation() {
        let tokens = normalize("I LOVE this!!!", &none());
        assert_eq!(tokens, ["i", "love", "this"]);
    }

    #[test]
    fn drops_stop_words_keeping_order() {
        let stop_words = StopWords::from_words(["this", "i"]);
        let tokens = normalize("I LOVE this, and hate that", &stop_words);
        assert_eq!(tokens, ["love", "and", "hate", "that"]);
    }

    #[test]
    fn no_alphabetic_characters_yields_empty() {
        for text in ["", "   ", "!!!", "123 456", "@#$%^&*()", "\u{1F600}\u{1F44D}"] {
            assert!(normalize(text, &none()).is_empty(), "input {text:?}");
        }
    }

    #[test]
    fn non_ascii_letters_are_separators() {
        assert_eq!(normalize("café naïve", &none()), ["caf", "na", "ve"]);
    }

    #[test]
    fn urls_and_mentions_split_into_words() {
        let tokens = normalize("@alice see https://t.co/x1", &none());
        assert_eq!(tokens, ["alice", "see", "https", "t", "co", "x"]);
    }

    #[test]
    fn idempotent_on_joined_output() {
        let stop_words = StopWords::english();
        for text in [
            "I LOVE this!!!",
            "Don't stop me now -- I'm having such a good time",
            "",
            "Worst. Service. EVER!!! 0/10",
        ] {
            let once = normalize(text, &stop_words);
            let twice = normalize(&once.join(" "), &stop_words);
            assert_eq!(once, twice, "input {text:?}");
        }
    }

    #[test]
    fn contractions_are_dropped_with_english_list() {
        let tokens = normalize("I don't like it", &StopWords::english());
        assert_eq!(tokens, ["like"]);
    }
}
