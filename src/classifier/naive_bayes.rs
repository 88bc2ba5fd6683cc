//! Incremental multinomial Naive Bayes classifier.

use std::collections::HashSet;

use rayon::prelude::*;

use crate::analysis::analyzer::bayes::BayesAnalyzer;
use crate::analysis::stop_words::StopWordSource;
use crate::analysis::token::Token;
use crate::classifier::config::ClassifierConfig;
use crate::classifier::core::render_scores;
use crate::classifier::stats::TermStatistics;
use crate::classifier::types::{LabelScore, ModelStats, TrainingSample};
use crate::error::{BayesError, Result};

/// Multinomial Naive Bayes text classifier that learns one observation at a
/// time.
///
/// Learning honors encoded token weights (`cat%%3` counts three times).
/// Scoring does not: every token of the scored text contributes its log
/// likelihood exactly once.
///
/// # Examples
///
/// ```
/// use fast_bayes::classifier::{ClassifierConfig, NaiveBayesClassifier};
///
/// let mut classifier =
///     NaiveBayesClassifier::with_stop_words(ClassifierConfig::default(), Default::default())
///         .unwrap();
/// classifier.observe("buy cheap pills", "spam").unwrap();
/// classifier.observe("meeting agenda tomorrow", "ham").unwrap();
///
/// assert_eq!(classifier.best_label("cheap pills").unwrap(), "spam");
/// ```
#[derive(Debug, Clone)]
pub struct NaiveBayesClassifier {
    config: ClassifierConfig,
    analyzer: BayesAnalyzer,
    stats: TermStatistics,
}

impl NaiveBayesClassifier {
    /// Create a classifier, fetching stop words for `config.language` from
    /// `source`.
    pub fn new(config: ClassifierConfig, source: &dyn StopWordSource) -> Result<Self> {
        let stop_words = source.stop_words(&config.language)?;
        Self::with_stop_words(config, stop_words)
    }

    /// Create a classifier with an explicit stop word set.
    pub fn with_stop_words(config: ClassifierConfig, stop_words: HashSet<String>) -> Result<Self> {
        config.validate()?;

        tracing::debug!(
            language = %config.language,
            stop_words = stop_words.len(),
            smoothing = config.smoothing,
            "creating naive bayes classifier"
        );

        let analyzer = BayesAnalyzer::from_config(&config, stop_words);
        let stats = TermStatistics::new(config.smoothing);

        Ok(NaiveBayesClassifier {
            config,
            analyzer,
            stats,
        })
    }

    /// Record `text` as one observation of `label`.
    pub fn observe(&mut self, text: &str, label: &str) -> Result<()> {
        let tokens = self.analyzer.tokens(text)?;
        let new_terms = self.stats.record_observation(label, &tokens);

        tracing::debug!(
            label,
            tokens = tokens.len(),
            new_terms,
            vocabulary = self.stats.vocabulary_size(),
            "recorded observation"
        );

        Ok(())
    }

    /// Record every sample in order. Returns the number of samples observed.
    pub fn observe_all(
        &mut self,
        samples: impl IntoIterator<Item = TrainingSample>,
    ) -> Result<usize> {
        let mut observed = 0;
        for sample in samples {
            self.observe(&sample.text, &sample.label)?;
            observed += 1;
        }
        Ok(observed)
    }

    /// Score every known label against `text`, in ascending label order.
    pub fn score_all(&self, text: &str) -> Result<Vec<LabelScore>> {
        self.ensure_trained()?;
        let tokens = self.analyzer.tokens(text)?;

        Ok(self
            .stats
            .labels()
            .map(|label| LabelScore {
                label: label.to_string(),
                score: self.score_label(label, &tokens),
            })
            .collect())
    }

    /// Return the highest scoring label for `text`.
    ///
    /// Labels are visited in ascending order and a score equal to the best so
    /// far replaces it, so ties go to the greatest label.
    pub fn best_label(&self, text: &str) -> Result<String> {
        self.ensure_trained()?;
        let tokens = self.analyzer.tokens(text)?;

        let mut best_label = None;
        let mut best_score = f64::NEG_INFINITY;
        for label in self.stats.labels() {
            let score = self.score_label(label, &tokens);
            if score >= best_score {
                best_score = score;
                best_label = Some(label);
            }
        }

        best_label
            .map(str::to_string)
            .ok_or(BayesError::NoLabelsObserved)
    }

    /// Classify many texts in parallel.
    pub fn best_labels<S>(&self, texts: &[S]) -> Result<Vec<String>>
    where
        S: AsRef<str> + Sync,
    {
        texts
            .par_iter()
            .map(|text| self.best_label(text.as_ref()))
            .collect()
    }

    /// Score every label and render the result as space-separated
    /// `label:score` pairs.
    pub fn score_dump(&self, text: &str) -> Result<String> {
        Ok(render_scores(&self.score_all(text)?))
    }

    /// Current model size.
    pub fn stats(&self) -> ModelStats {
        ModelStats {
            total_documents: self.stats.total_document_count(),
            label_count: self.stats.label_count(),
            vocabulary_size: self.stats.vocabulary_size(),
        }
    }

    /// Read access to the underlying counters.
    pub fn statistics(&self) -> &TermStatistics {
        &self.stats
    }

    /// The analyzer shared by learning and scoring.
    pub fn analyzer(&self) -> &BayesAnalyzer {
        &self.analyzer
    }

    /// The configuration this classifier was built with.
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    fn ensure_trained(&self) -> Result<()> {
        if self.stats.is_empty() {
            return Err(BayesError::NoLabelsObserved);
        }
        Ok(())
    }

    fn score_label(&self, label: &str, tokens: &[Token]) -> f64 {
        let score = tokens.iter().fold(
            self.stats.prior_probability(label).ln(),
            |score, token| score + self.stats.term_likelihood(&token.text, label).ln(),
        );

        tracing::trace!(label, score, "scored label");
        score
    }
}
