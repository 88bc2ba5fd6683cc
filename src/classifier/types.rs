//! Common types for the classifier.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A labeled text used for training.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingSample {
    /// Document text.
    pub text: String,
    /// Label the text is recorded under.
    pub label: String,
}

impl TrainingSample {
    /// Create a new training sample.
    pub fn new<T: Into<String>, L: Into<String>>(text: T, label: L) -> Self {
        TrainingSample {
            text: text.into(),
            label: label.into(),
        }
    }
}

/// Log-probability score of one label for a scored text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelScore {
    /// The label.
    pub label: String,
    /// Natural-log score: log prior plus the log likelihood of every term.
    pub score: f64,
}

impl fmt::Display for LabelScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.label, self.score)
    }
}

/// Snapshot of model size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ModelStats {
    /// Observations recorded.
    pub total_documents: u64,
    /// Distinct labels observed.
    pub label_count: usize,
    /// Distinct terms observed.
    pub vocabulary_size: usize,
}
