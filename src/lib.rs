//! # fast-bayes
//!
//! An incremental multinomial Naive Bayes text classifier.
//!
//! ## Features
//!
//! - Learns one labeled observation at a time
//! - Whitespace tokenization with `term%%count` occurrence weights
//! - Stop word and minimum length filtering shared by learning and scoring
//! - Laplace-smoothed log-likelihood scoring
//! - Best-label and all-label score output
//! - Lock-protected handle for concurrent use

pub mod analysis;
pub mod classifier;
pub mod error;

pub mod prelude {
    pub use crate::analysis::stop_words::{BuiltinStopWords, StaticStopWords, StopWordSource};
    pub use crate::classifier::{
        ClassifierConfig, LabelScore, ModelStats, NaiveBayesClassifier, SharedClassifier,
        TrainingSample,
    };
    pub use crate::error::{BayesError, Result};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
