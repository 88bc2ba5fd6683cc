//! Stop filter implementation.
//!
//! Removes tokens whose text is a member of a stop word set. Matching is
//! exact: no case folding happens here or anywhere else in the pipeline.
//!
//! # Examples
//!
//! ```
//! use fast_bayes::analysis::token_filter::Filter;
//! use fast_bayes::analysis::token_filter::stop::StopFilter;
//! use fast_bayes::analysis::token::Token;
//!
//! let filter = StopFilter::from_words(vec!["the"]);
//! let tokens = vec![Token::new("the", 0), Token::new("quick", 1)];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(result.len(), 1);
//! assert_eq!(result[0].text, "quick");
//! ```

use std::collections::HashSet;
use std::sync::Arc;

use crate::analysis::stop_words::ENGLISH_STOP_WORDS_SET;
use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that removes stop words from the token stream.
#[derive(Clone, Debug)]
pub struct StopFilter {
    /// The set of stop words to remove
    stop_words: Arc<HashSet<String>>,
}

impl StopFilter {
    /// Create a new stop filter with the built-in English stop words.
    pub fn new() -> Self {
        Self::with_stop_words(ENGLISH_STOP_WORDS_SET.clone())
    }

    /// Create a new stop filter with custom stop words.
    pub fn with_stop_words(stop_words: HashSet<String>) -> Self {
        StopFilter {
            stop_words: Arc::new(stop_words),
        }
    }

    /// Create a new stop filter from a list of stop words.
    ///
    /// ```
    /// use fast_bayes::analysis::token_filter::stop::StopFilter;
    ///
    /// let filter = StopFilter::from_words(vec!["foo", "bar", "baz"]);
    /// assert_eq!(filter.len(), 3);
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stop_words = words.into_iter().map(|s| s.into()).collect();
        Self::with_stop_words(stop_words)
    }

    /// Check if a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Default for StopFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let kept: Vec<Token> = tokens
            .filter(|token| !self.is_stop_word(&token.text))
            .collect();

        Ok(Box::new(kept.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_filter() {
        let filter = StopFilter::from_words(vec!["the", "and", "or"]);
        let tokens = vec![
            Token::new("hello", 0),
            Token::new("the", 1),
            Token::new("world", 2),
            Token::new("and", 3),
            Token::new("test", 4),
        ];

        let result: Vec<Token> = filter
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .collect();

        assert_eq!(result.len(), 3);
        assert_eq!(result[0].text, "hello");
        assert_eq!(result[1].text, "world");
        assert_eq!(result[2].text, "test");
        assert_eq!(result[2].position, 4);
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let filter = StopFilter::new();
        assert!(filter.is_stop_word("the"));
        assert!(!filter.is_stop_word("The"));
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let filter = StopFilter::with_stop_words(HashSet::new());
        assert!(filter.is_empty());

        let tokens = vec![Token::new("the", 0)];
        let result: Vec<Token> = filter
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .collect();
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(StopFilter::new().name(), "stop");
    }
}
