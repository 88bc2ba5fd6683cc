//! Configuration for the Naive Bayes classifier.

use serde::{Deserialize, Serialize};

use crate::analysis::stop_words::DEFAULT_LANGUAGE;
use crate::analysis::token_filter::length::DEFAULT_MIN_TERM_LENGTH;
use crate::analysis::token_filter::weight::DEFAULT_WEIGHT_SEPARATOR;
use crate::error::{BayesError, Result};

/// Default additive smoothing constant.
pub const DEFAULT_SMOOTHING: f64 = 1e-14;

/// Configuration for [`NaiveBayesClassifier`](super::NaiveBayesClassifier).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Additive smoothing constant applied to every term count.
    pub smoothing: f64,
    /// Terms with fewer characters than this are dropped.
    pub min_term_length: usize,
    /// Separator between a term and its encoded occurrence count.
    pub weight_separator: String,
    /// Language identifier handed to the stop word source.
    pub language: String,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            smoothing: DEFAULT_SMOOTHING,
            min_term_length: DEFAULT_MIN_TERM_LENGTH,
            weight_separator: DEFAULT_WEIGHT_SEPARATOR.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl ClassifierConfig {
    /// Set the smoothing constant.
    pub fn with_smoothing(mut self, smoothing: f64) -> Self {
        self.smoothing = smoothing;
        self
    }

    /// Set the minimum term length.
    pub fn with_min_term_length(mut self, min_term_length: usize) -> Self {
        self.min_term_length = min_term_length;
        self
    }

    /// Set the weight separator.
    pub fn with_weight_separator<S: Into<String>>(mut self, separator: S) -> Self {
        self.weight_separator = separator.into();
        self
    }

    /// Set the stop word language.
    pub fn with_language<S: Into<String>>(mut self, language: S) -> Self {
        self.language = language.into();
        self
    }

    /// Check that the configuration can drive a classifier.
    pub fn validate(&self) -> Result<()> {
        if !self.smoothing.is_finite() || self.smoothing <= 0.0 {
            return Err(BayesError::invalid_config(format!(
                "smoothing must be a positive finite number, got {}",
                self.smoothing
            )));
        }
        if self.weight_separator.is_empty() {
            return Err(BayesError::invalid_config(
                "weight separator must not be empty",
            ));
        }
        Ok(())
    }
}
