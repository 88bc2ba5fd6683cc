//! Text analysis for the classifier.
//!
//! Tokenization, occurrence weight decoding, and term filtering. The same
//! pipeline feeds both learning and scoring.

pub mod analyzer;
pub mod stop_words;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
