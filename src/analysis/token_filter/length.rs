//! Minimum length filter.

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Default minimum term length, in characters.
pub const DEFAULT_MIN_TERM_LENGTH: usize = 2;

/// A filter that drops tokens whose text is shorter than a minimum length.
///
/// Length is measured in characters, not bytes.
#[derive(Clone, Debug)]
pub struct LengthFilter {
    min_length: usize,
}

impl LengthFilter {
    /// Create a length filter with the default minimum of 2 characters.
    pub fn new() -> Self {
        Self::with_min_length(DEFAULT_MIN_TERM_LENGTH)
    }

    /// Create a length filter with a custom minimum.
    pub fn with_min_length(min_length: usize) -> Self {
        LengthFilter { min_length }
    }

    /// Get the minimum length.
    pub fn min_length(&self) -> usize {
        self.min_length
    }
}

impl Default for LengthFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for LengthFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let kept: Vec<Token> = tokens
            .filter(|token| token.char_len() >= self.min_length)
            .collect();
        Ok(Box::new(kept.into_iter()))
    }

    fn name(&self) -> &'static str {
        "length"
    }
}
