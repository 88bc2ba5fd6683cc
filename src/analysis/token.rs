//! Token types for text analysis.
//!
//! A [`Token`] is the unit that flows through the analysis pipeline: a term,
//! its position in the source text and an occurrence weight. The weight is
//! 1 for plain tokens and carries an explicit repeat count for encoded
//! tokens such as `refund%%5`.
//!
//! # Examples
//!
//! ```
//! use fast_bayes::analysis::token::Token;
//!
//! let token = Token::new("hello", 0);
//! assert_eq!(token.text, "hello");
//! assert_eq!(token.position, 0);
//! assert_eq!(token.weight, 1);
//!
//! let token = Token::new("refund", 1).with_weight(5);
//! assert_eq!(token.weight, 5);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A token represents a single term after tokenization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the original token stream (0-based)
    pub position: usize,

    /// Number of occurrences this token stands for (at least 1)
    pub weight: u64,
}

impl Token {
    /// Create a new token with the given text and position and a weight of 1.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
            weight: 1,
        }
    }

    /// Set the occurrence weight for this token.
    pub fn with_weight(mut self, weight: u64) -> Self {
        self.weight = weight;
        self
    }

    /// Clone this token with updated text, keeping position and weight.
    pub fn with_text<S: Into<String>>(&self, text: S) -> Self {
        Token {
            text: text.into(),
            position: self.position,
            weight: self.weight,
        }
    }

    /// Length of the token text in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A token stream represents a sequence of tokens from the analysis pipeline.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;
