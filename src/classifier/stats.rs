//! Frequency statistics backing the classifier.
//!
//! [`TermStatistics`] owns every counter the model learns from:
//!
//! - documents observed per label and in total
//! - weighted term occurrences per label, and their per-label sum
//! - the global vocabulary
//!
//! Counters only grow. The store is written by
//! [`record_observation`](TermStatistics::record_observation) and read by the
//! probability estimators.

use std::collections::BTreeMap;

use ahash::{AHashMap, AHashSet};

use crate::analysis::token::Token;
use crate::classifier::config::DEFAULT_SMOOTHING;

/// Counters for a single label.
#[derive(Debug, Clone, Default)]
struct LabelStats {
    /// Observations recorded under this label.
    document_count: u64,
    /// Sum of all term counts for this label.
    total_words: u64,
    term_counts: AHashMap<String, u64>,
}

/// Per-label and per-term frequency counters.
#[derive(Debug, Clone)]
pub struct TermStatistics {
    /// Keyed by label; ordered so labels iterate ascending.
    labels: BTreeMap<String, LabelStats>,
    total_document_count: u64,
    vocabulary: AHashSet<String>,
    smoothing: f64,
}

impl Default for TermStatistics {
    fn default() -> Self {
        Self::new(DEFAULT_SMOOTHING)
    }
}

impl TermStatistics {
    /// Create an empty store using the given smoothing constant.
    pub fn new(smoothing: f64) -> Self {
        TermStatistics {
            labels: BTreeMap::new(),
            total_document_count: 0,
            vocabulary: AHashSet::new(),
            smoothing,
        }
    }

    /// Record one observation of `tokens` under `label`.
    ///
    /// Every token adds its weight to the label's term and total counters.
    /// Counters saturate at `u64::MAX`: a weight is clamped to the room left
    /// in the label total, so the total stays equal to the sum of its term
    /// counts and no counter ever decreases.
    /// Returns how many terms were new to the vocabulary.
    pub fn record_observation(&mut self, label: &str, tokens: &[Token]) -> usize {
        let entry = self.labels.entry(label.to_string()).or_default();
        entry.document_count = entry.document_count.saturating_add(1);
        self.total_document_count = self.total_document_count.saturating_add(1);

        let mut new_terms = 0;
        for token in tokens {
            // term counts never exceed the total, so this cannot overflow either
            let weight = token.weight.min(u64::MAX - entry.total_words);
            *entry.term_counts.entry(token.text.clone()).or_insert(0) += weight;
            entry.total_words += weight;

            if !self.vocabulary.contains(&token.text) {
                self.vocabulary.insert(token.text.clone());
                new_terms += 1;
            }
        }

        new_terms
    }

    /// Fraction of all observations recorded under `label`.
    ///
    /// Returns 0.0 for an unknown label or an empty store.
    pub fn prior_probability(&self, label: &str) -> f64 {
        if self.total_document_count == 0 {
            return 0.0;
        }
        self.document_count(label) as f64 / self.total_document_count as f64
    }

    /// Smoothed relative frequency of `term` among the occurrences recorded
    /// under `label`:
    ///
    /// ```text
    /// (count(label, term) + ε) / (total_words(label) + ε · |vocabulary|)
    /// ```
    ///
    /// The result is strictly positive for any term. An empty vocabulary is
    /// counted as size 1 so the ratio stays finite.
    pub fn term_likelihood(&self, term: &str, label: &str) -> f64 {
        let count = self.term_count(label, term) as f64;
        let total = self.class_total_words(label) as f64;
        let vocabulary = self.vocabulary.len().max(1) as f64;

        (count + self.smoothing) / (total + self.smoothing * vocabulary)
    }

    /// Labels with at least one observation, in ascending order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.labels.keys().map(|label| label.as_str())
    }

    /// Observations recorded under `label`.
    pub fn document_count(&self, label: &str) -> u64 {
        self.labels
            .get(label)
            .map(|entry| entry.document_count)
            .unwrap_or(0)
    }

    /// Observations recorded across all labels.
    pub fn total_document_count(&self) -> u64 {
        self.total_document_count
    }

    /// Weighted occurrences of `term` under `label`.
    pub fn term_count(&self, label: &str, term: &str) -> u64 {
        self.labels
            .get(label)
            .and_then(|entry| entry.term_counts.get(term))
            .copied()
            .unwrap_or(0)
    }

    /// Sum of all weighted term occurrences under `label`.
    pub fn class_total_words(&self, label: &str) -> u64 {
        self.labels
            .get(label)
            .map(|entry| entry.total_words)
            .unwrap_or(0)
    }

    /// Number of distinct terms observed under any label.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Number of labels observed.
    pub fn label_count(&self) -> usize {
        self.labels.len()
    }

    /// True until the first observation is recorded.
    pub fn is_empty(&self) -> bool {
        self.total_document_count == 0
    }

    /// The smoothing constant.
    pub fn smoothing(&self) -> f64 {
        self.smoothing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(words: &[(&str, u64)]) -> Vec<Token> {
        words
            .iter()
            .enumerate()
            .map(|(i, (w, weight))| Token::new(*w, i).with_weight(*weight))
            .collect()
    }

    #[test]
    fn test_record_observation_counts() {
        let mut stats = TermStatistics::default();
        let new_terms = stats.record_observation("L1", &tokens(&[("a", 3)]));

        assert_eq!(new_terms, 1);
        assert_eq!(stats.term_count("L1", "a"), 3);
        assert_eq!(stats.class_total_words("L1"), 3);
        assert_eq!(stats.document_count("L1"), 1);
        assert_eq!(stats.total_document_count(), 1);
        assert_eq!(stats.vocabulary_size(), 1);
    }

    #[test]
    fn test_repeated_observation_doubles_counters() {
        let mut stats = TermStatistics::default();
        let doc = tokens(&[("cheap", 1), ("pills", 2)]);

        stats.record_observation("spam", &doc);
        let vocabulary_after_first = stats.vocabulary_size();
        let new_terms = stats.record_observation("spam", &doc);

        assert_eq!(new_terms, 0);
        assert_eq!(stats.document_count("spam"), 2);
        assert_eq!(stats.term_count("spam", "cheap"), 2);
        assert_eq!(stats.term_count("spam", "pills"), 4);
        assert_eq!(stats.class_total_words("spam"), 6);
        assert_eq!(stats.vocabulary_size(), vocabulary_after_first);
    }

    #[test]
    fn test_vocabulary_is_shared_across_labels() {
        let mut stats = TermStatistics::default();
        stats.record_observation("ham", &tokens(&[("meeting", 1)]));
        stats.record_observation("spam", &tokens(&[("meeting", 1), ("pills", 1)]));

        assert_eq!(stats.vocabulary_size(), 2);
        assert_eq!(stats.term_count("ham", "pills"), 0);
    }

    #[test]
    fn test_empty_observation_counts_document() {
        let mut stats = TermStatistics::default();
        stats.record_observation("empty", &[]);

        assert_eq!(stats.document_count("empty"), 1);
        assert_eq!(stats.class_total_words("empty"), 0);
        assert_eq!(stats.labels().collect::<Vec<_>>(), vec!["empty"]);
    }

    #[test]
    fn test_invariants_hold() {
        let mut stats = TermStatistics::default();
        stats.record_observation("b", &tokens(&[("x1", 2), ("x2", 1)]));
        stats.record_observation("a", &tokens(&[("x1", 1)]));
        stats.record_observation("b", &tokens(&[("x3", 4)]));

        let summed: u64 = stats.labels().map(|l| stats.document_count(l)).sum();
        assert_eq!(summed, stats.total_document_count());

        for label in stats.labels() {
            let words: u64 = ["x1", "x2", "x3"]
                .iter()
                .map(|t| stats.term_count(label, t))
                .sum();
            assert_eq!(words, stats.class_total_words(label));
        }
        assert_eq!(stats.vocabulary_size(), 3);
    }

    #[test]
    fn test_labels_ascending() {
        let mut stats = TermStatistics::default();
        for label in ["zeta", "alpha", "Mid"] {
            stats.record_observation(label, &[]);
        }
        assert_eq!(
            stats.labels().collect::<Vec<_>>(),
            vec!["Mid", "alpha", "zeta"]
        );
        assert_eq!(stats.label_count(), 3);
    }

    #[test]
    fn test_priors_sum_to_one() {
        let mut stats = TermStatistics::default();
        for (label, n) in [("a", 3), ("b", 1), ("c", 5)] {
            for _ in 0..n {
                stats.record_observation(label, &tokens(&[("term", 1)]));
            }
        }

        let sum: f64 = stats.labels().map(|l| stats.prior_probability(l)).sum();
        assert!((sum - 1.0).abs() < 1e-12);
        assert!((stats.prior_probability("a") - 3.0 / 9.0).abs() < 1e-12);
        assert_eq!(stats.prior_probability("missing"), 0.0);
    }

    #[test]
    fn test_prior_on_empty_store() {
        let stats = TermStatistics::default();
        assert!(stats.is_empty());
        assert_eq!(stats.prior_probability("any"), 0.0);
    }

    #[test]
    fn test_unseen_term_likelihood_positive_and_below_one() {
        let mut stats = TermStatistics::default();
        stats.record_observation("spam", &tokens(&[("cheap", 1), ("pills", 1)]));
        stats.record_observation("ham", &tokens(&[("agenda", 1)]));

        let p = stats.term_likelihood("agenda", "spam");
        assert!(p > 0.0);
        assert!(p < 1.0);
        assert!(p.ln().is_finite());

        let never_seen = stats.term_likelihood("unicorn", "ham");
        assert!(never_seen > 0.0 && never_seen < 1.0);
    }

    #[test]
    fn test_seen_term_likelihood() {
        let mut stats = TermStatistics::new(1.0);
        stats.record_observation("spam", &tokens(&[("cheap", 3), ("pills", 1)]));

        // (3 + 1) / (4 + 1 * 2)
        assert!((stats.term_likelihood("cheap", "spam") - 4.0 / 6.0).abs() < 1e-12);
        // (0 + 1) / (4 + 1 * 2)
        assert!((stats.term_likelihood("other", "spam") - 1.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_likelihood_with_empty_vocabulary_is_finite() {
        let mut stats = TermStatistics::default();
        stats.record_observation("blank", &[]);

        let p = stats.term_likelihood("anything", "blank");
        assert_eq!(p, 1.0);
    }

    #[test]
    fn test_huge_weights_saturate_without_breaking_totals() {
        let mut stats = TermStatistics::default();
        stats.record_observation("A", &tokens(&[("cat", u64::MAX)]));
        stats.record_observation("A", &tokens(&[("cat", 2)]));

        assert_eq!(stats.term_count("A", "cat"), u64::MAX);
        assert_eq!(stats.class_total_words("A"), u64::MAX);
        assert_eq!(stats.document_count("A"), 2);

        stats.record_observation("B", &tokens(&[("cat", u64::MAX - 1), ("dog", 2)]));
        let summed = stats.term_count("B", "cat") + stats.term_count("B", "dog");
        assert_eq!(summed, stats.class_total_words("B"));
        assert_eq!(stats.class_total_words("B"), u64::MAX);
        assert_eq!(stats.vocabulary_size(), 2);

        let p = stats.term_likelihood("cat", "A");
        assert!(p > 0.0 && p.is_finite());
    }

    #[test]
    fn test_smoothing_accessor() {
        assert_eq!(TermStatistics::default().smoothing(), 1e-14);
        assert_eq!(TermStatistics::new(0.25).smoothing(), 0.25);
    }
}
