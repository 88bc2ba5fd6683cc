//! Naive Bayes text classification.
//!
//! # Architecture
//!
//! - [`TermStatistics`]: owns the per-label and per-term counters
//! - [`NaiveBayesClassifier`]: runs the analyzer and scores labels from the
//!   counters
//! - [`SharedClassifier`]: read/write locked handle for multi-threaded use
//! - [`ClassifierConfig`]: smoothing, term length, weight separator, language
//!
//! # Example
//!
//! ```
//! use fast_bayes::classifier::{self, ClassifierConfig};
//!
//! # fn main() -> fast_bayes::error::Result<()> {
//! let mut classifier = classifier::new_classifier(ClassifierConfig::default())?;
//! classifier.observe("refund%%3 please", "billing")?;
//! classifier.observe("password reset link", "account")?;
//!
//! assert_eq!(classifier.best_label("refund")?, "billing");
//! println!("{}", classifier.score_dump("reset my password")?);
//! # Ok(())
//! # }
//! ```

pub mod config;
mod core;
pub mod naive_bayes;
pub mod shared;
pub mod stats;
mod types;

pub use config::ClassifierConfig;
pub use self::core::{load_samples, new_classifier, render_scores, train};
pub use naive_bayes::NaiveBayesClassifier;
pub use shared::SharedClassifier;
pub use stats::TermStatistics;
pub use types::{LabelScore, ModelStats, TrainingSample};
