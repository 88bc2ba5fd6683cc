//! Analyzer trait definition.
//!
//! An analyzer is the complete text processing pipeline that turns raw text
//! into the tokens the classifier counts and scores:
//!
//! ```text
//! Raw Text → Analyzer → Token Stream → Classifier
//!             ↓
//!         Tokenizer
//!             ↓
//!         Filter 1 .. Filter N
//! ```
//!
//! # Available Implementations
//!
//! - [`BayesAnalyzer`](bayes::BayesAnalyzer) - whitespace split, weight
//!   decoding, minimum length and stop word removal
//!
//! # Examples
//!
//! ```
//! use fast_bayes::analysis::analyzer::Analyzer;
//! use fast_bayes::analysis::analyzer::bayes::BayesAnalyzer;
//!
//! let analyzer = BayesAnalyzer::new(["the"]);
//! let tokens: Vec<_> = analyzer.analyze("the cat%%3 sat").unwrap().collect();
//!
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[0].text, "cat");
//! assert_eq!(tokens[0].weight, 3);
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
///
/// The trait requires `Send + Sync` so a single analyzer can serve both
/// learning and scoring from any thread.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and logging).
    fn name(&self) -> &'static str;
}

pub mod bayes;
