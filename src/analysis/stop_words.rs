//! Stop word sources.
//!
//! The classifier receives its stop words as a plain set of strings at
//! construction time. Where that set comes from is the business of a
//! [`StopWordSource`], keyed by a language identifier. The crate ships a
//! built-in English list; applications with other lists (files, databases,
//! remote services) implement the trait themselves.
//!
//! # Examples
//!
//! ```
//! use fast_bayes::analysis::stop_words::{BuiltinStopWords, StopWordSource};
//!
//! let words = BuiltinStopWords.stop_words("english").unwrap();
//! assert!(words.contains("the"));
//! assert!(BuiltinStopWords.stop_words("klingon").is_err());
//! ```

use std::collections::HashSet;
use std::sync::LazyLock;

use crate::error::{BayesError, Result};

/// Language used when none is configured.
pub const DEFAULT_LANGUAGE: &str = "english";

const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
    "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each", "few", "for",
    "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers", "herself",
    "him", "himself", "his", "how", "i", "if", "in", "into", "is", "it", "its", "itself", "just",
    "me", "more", "most", "my", "myself", "no", "nor", "not", "now", "of", "off", "on", "once",
    "only", "or", "other", "our", "ours", "ourselves", "out", "over", "own", "same", "she",
    "should", "so", "some", "such", "than", "that", "the", "their", "theirs", "them",
    "themselves", "then", "there", "these", "they", "this", "those", "through", "to", "too",
    "under", "until", "up", "very", "was", "we", "were", "what", "when", "where", "which",
    "while", "who", "whom", "why", "will", "with", "would", "you", "your", "yours", "yourself",
    "yourselves",
];

/// Built-in English stop words as a HashSet.
pub static ENGLISH_STOP_WORDS_SET: LazyLock<HashSet<String>> =
    LazyLock::new(|| ENGLISH_STOP_WORDS.iter().map(|&s| s.to_string()).collect());

/// A provider of stop word sets keyed by language identifier.
pub trait StopWordSource: Send + Sync {
    /// Return the stop words for `language`.
    fn stop_words(&self, language: &str) -> Result<HashSet<String>>;
}

/// Stop word lists compiled into the crate.
///
/// Recognizes `"english"` and `"en"` (case-insensitive).
#[derive(Clone, Copy, Debug, Default)]
pub struct BuiltinStopWords;

impl StopWordSource for BuiltinStopWords {
    fn stop_words(&self, language: &str) -> Result<HashSet<String>> {
        match language.to_ascii_lowercase().as_str() {
            "english" | "en" => Ok(ENGLISH_STOP_WORDS_SET.clone()),
            other => Err(BayesError::stop_words(format!(
                "no built-in stop words for language '{other}'"
            ))),
        }
    }
}

/// A fixed set of stop words returned for every language.
///
/// Useful for tests and for callers that already hold their list in memory.
#[derive(Clone, Debug, Default)]
pub struct StaticStopWords {
    words: HashSet<String>,
}

impl StaticStopWords {
    /// Create a source from any list of words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        StaticStopWords {
            words: words.into_iter().map(|s| s.into()).collect(),
        }
    }

    /// A source with no stop words at all.
    pub fn empty() -> Self {
        Self::default()
    }
}

impl StopWordSource for StaticStopWords {
    fn stop_words(&self, _language: &str) -> Result<HashSet<String>> {
        Ok(self.words.clone())
    }
}
