//! Token filter implementations for token transformation.
//!
//! Filters receive the token stream produced by a tokenizer and decode,
//! rewrite or drop tokens.
//!
//! # Available Filters
//!
//! - [`weight::WeightFilter`] - Decodes `term%%count` occurrence weights
//! - [`length::LengthFilter`] - Drops terms shorter than a minimum length
//! - [`stop::StopFilter`] - Removes stop words
//!
//! # Filter Chaining
//!
//! ```text
//! Tokenizer → Weight → Length → Stop Words → Model
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
///
/// The trait requires `Send + Sync` to allow use in concurrent contexts.
///
/// # Examples
///
/// ```
/// use fast_bayes::analysis::token::{Token, TokenStream};
/// use fast_bayes::analysis::token_filter::Filter;
/// use fast_bayes::error::Result;
///
/// struct ReverseFilter;
///
/// impl Filter for ReverseFilter {
///     fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
///         let reversed: Vec<Token> = tokens
///             .map(|mut t| {
///                 t.text = t.text.chars().rev().collect();
///                 t
///             })
///             .collect();
///         Ok(Box::new(reversed.into_iter()))
///     }
///
///     fn name(&self) -> &'static str {
///         "reverse"
///     }
/// }
/// ```
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod length;
pub mod stop;
pub mod weight;
