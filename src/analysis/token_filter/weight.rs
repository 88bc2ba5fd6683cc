//! Occurrence weight decoding.
//!
//! A raw token may carry an explicit repeat count after a separator, e.g.
//! `cat%%3` stands for three occurrences of `cat`. When the suffix is not a
//! positive integer the raw token is kept verbatim with weight 1.
//!
//! # Examples
//!
//! ```
//! use fast_bayes::analysis::token::Token;
//! use fast_bayes::analysis::token_filter::Filter;
//! use fast_bayes::analysis::token_filter::weight::WeightFilter;
//!
//! let filter = WeightFilter::new();
//! let tokens = vec![Token::new("refund%%5", 0), Token::new("cat%%x", 1)];
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(result[0].text, "refund");
//! assert_eq!(result[0].weight, 5);
//! assert_eq!(result[1].text, "cat%%x");
//! assert_eq!(result[1].weight, 1);
//! ```

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Default separator between a term and its occurrence count.
pub const DEFAULT_WEIGHT_SEPARATOR: &str = "%%";

/// A filter that decodes `term<separator>count` tokens into weighted terms.
#[derive(Clone, Debug)]
pub struct WeightFilter {
    separator: String,
}

impl WeightFilter {
    /// Create a weight filter using the default `%%` separator.
    pub fn new() -> Self {
        Self::with_separator(DEFAULT_WEIGHT_SEPARATOR)
    }

    /// Create a weight filter with a custom separator.
    pub fn with_separator<S: Into<String>>(separator: S) -> Self {
        WeightFilter {
            separator: separator.into(),
        }
    }

    /// Get the separator.
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Decode a single token.
    ///
    /// The count is taken after the last separator occurrence. A count that
    /// does not parse, or parses to zero, leaves the token untouched.
    pub fn decode(&self, token: Token) -> Token {
        let Some((term, count)) = token.text.rsplit_once(self.separator.as_str()) else {
            return token;
        };

        match count.parse::<u64>() {
            Ok(weight) if weight > 0 => token.with_text(term).with_weight(weight),
            _ => {
                tracing::debug!(
                    token = %token.text,
                    "malformed weight suffix, keeping raw token as term"
                );
                token.with_weight(1)
            }
        }
    }
}

impl Default for WeightFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for WeightFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let decoded: Vec<Token> = tokens.map(|token| self.decode(token)).collect();
        Ok(Box::new(decoded.into_iter()))
    }

    fn name(&self) -> &'static str {
        "weight"
    }
}
