//! Helper functions for building classifiers and presenting their output.

use std::path::Path;

use crate::analysis::stop_words::{BuiltinStopWords, StopWordSource};
use crate::classifier::config::ClassifierConfig;
use crate::classifier::naive_bayes::NaiveBayesClassifier;
use crate::classifier::types::{LabelScore, TrainingSample};
use crate::error::Result;

/// Load training samples from a JSON file holding an array of
/// `{"text": .., "label": ..}` objects.
pub fn load_samples<P: AsRef<Path>>(path: P) -> Result<Vec<TrainingSample>> {
    let content = std::fs::read_to_string(path)?;
    let samples: Vec<TrainingSample> = serde_json::from_str(&content)?;
    Ok(samples)
}

/// Create a classifier using the built-in stop word lists.
pub fn new_classifier(config: ClassifierConfig) -> Result<NaiveBayesClassifier> {
    NaiveBayesClassifier::new(config, &BuiltinStopWords)
}

/// Create a classifier and train it on `samples`.
pub fn train(
    config: ClassifierConfig,
    source: &dyn StopWordSource,
    samples: impl IntoIterator<Item = TrainingSample>,
) -> Result<NaiveBayesClassifier> {
    let mut classifier = NaiveBayesClassifier::new(config, source)?;
    classifier.observe_all(samples)?;
    Ok(classifier)
}

/// Render scores as space-separated `label:score` pairs.
pub fn render_scores(scores: &[LabelScore]) -> String {
    scores
        .iter()
        .map(|score| score.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
