//! Thread-safe handle around a classifier.
//!
//! Observations take the write lock; scoring takes the read lock. A scoring
//! pass therefore reads document counts, term counts, totals and vocabulary
//! size from one consistent state, never from the middle of an observation.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::classifier::naive_bayes::NaiveBayesClassifier;
use crate::classifier::types::{LabelScore, ModelStats, TrainingSample};
use crate::error::Result;

/// A cloneable, lock-protected [`NaiveBayesClassifier`].
#[derive(Debug, Clone)]
pub struct SharedClassifier {
    inner: Arc<RwLock<NaiveBayesClassifier>>,
}

impl SharedClassifier {
    /// Wrap a classifier for shared use.
    pub fn new(classifier: NaiveBayesClassifier) -> Self {
        SharedClassifier {
            inner: Arc::new(RwLock::new(classifier)),
        }
    }

    /// Record `text` as one observation of `label`.
    pub fn observe(&self, text: &str, label: &str) -> Result<()> {
        self.inner.write().observe(text, label)
    }

    /// Record every sample under a single write lock.
    pub fn observe_all(&self, samples: impl IntoIterator<Item = TrainingSample>) -> Result<usize> {
        self.inner.write().observe_all(samples)
    }

    /// See [`NaiveBayesClassifier::best_label`].
    pub fn best_label(&self, text: &str) -> Result<String> {
        self.inner.read().best_label(text)
    }

    /// See [`NaiveBayesClassifier::score_all`].
    pub fn score_all(&self, text: &str) -> Result<Vec<LabelScore>> {
        self.inner.read().score_all(text)
    }

    /// See [`NaiveBayesClassifier::score_dump`].
    pub fn score_dump(&self, text: &str) -> Result<String> {
        self.inner.read().score_dump(text)
    }

    /// Current model size.
    pub fn stats(&self) -> ModelStats {
        self.inner.read().stats()
    }

    /// Run `f` against the classifier under the read lock.
    pub fn with_read<R>(&self, f: impl FnOnce(&NaiveBayesClassifier) -> R) -> R {
        let guard = self.inner.read();
        f(&*guard)
    }
}

impl From<NaiveBayesClassifier> for SharedClassifier {
    fn from(classifier: NaiveBayesClassifier) -> Self {
        Self::new(classifier)
    }
}
