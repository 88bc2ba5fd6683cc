//! The analyzer used by the Naive Bayes classifier.
//!
//! Applies, in order:
//! 1. [`WhitespaceTokenizer`]: split on whitespace runs
//! 2. [`WeightFilter`]: decode `term%%count` weights
//! 3. [`LengthFilter`]: drop terms under the minimum length
//! 4. [`StopFilter`]: drop stop words
//!
//! The classifier runs the same instance over training and query text, so
//! a term dropped while learning is dropped while scoring too.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::analysis::token_filter::length::LengthFilter;
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::token_filter::weight::WeightFilter;
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;
use crate::classifier::config::ClassifierConfig;
use crate::error::Result;

/// Whitespace tokenizer followed by weight, length and stop word filters.
#[derive(Clone)]
pub struct BayesAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    filters: Vec<Arc<dyn Filter>>,
}

impl fmt::Debug for BayesAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BayesAnalyzer")
            .field("tokenizer", &self.tokenizer.name())
            .field(
                "filters",
                &self.filters.iter().map(|f| f.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl BayesAnalyzer {
    /// Create an analyzer with default settings and the given stop words.
    pub fn new<I, S>(stop_words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stop_words = stop_words.into_iter().map(|s| s.into()).collect();
        Self::from_config(&ClassifierConfig::default(), stop_words)
    }

    /// Create an analyzer from a classifier configuration and a stop word set.
    pub fn from_config(config: &ClassifierConfig, stop_words: HashSet<String>) -> Self {
        BayesAnalyzer {
            tokenizer: Arc::new(WhitespaceTokenizer::new()),
            filters: vec![
                Arc::new(WeightFilter::with_separator(config.weight_separator.clone())),
                Arc::new(LengthFilter::with_min_length(config.min_term_length)),
                Arc::new(StopFilter::with_stop_words(stop_words)),
            ],
        }
    }

    /// Analyze `text` and collect the surviving tokens in input order.
    pub fn tokens(&self, text: &str) -> Result<Vec<Token>> {
        Ok(self.analyze(text)?.collect())
    }
}

impl Analyzer for BayesAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = self.tokenizer.tokenize(text)?;

        for filter in &self.filters {
            tokens = filter.filter(tokens)?;
        }

        Ok(tokens)
    }

    fn name(&self) -> &'static str {
        "bayes"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn test_full_pipeline() {
        let analyzer = BayesAnalyzer::new(["the", "and"]);
        let tokens = analyzer
            .tokens("the refund%%5 x and cat%%oops  dog")
            .unwrap();

        assert_eq!(texts(&tokens), vec!["refund", "cat%%oops", "dog"]);
        assert_eq!(tokens[0].weight, 5);
        assert_eq!(tokens[1].weight, 1);
        assert_eq!(tokens[2].weight, 1);
    }

    #[test]
    fn test_length_checked_after_decoding() {
        let analyzer = BayesAnalyzer::new(Vec::<String>::new());
        let tokens = analyzer.tokens("a%%9 ab%%2").unwrap();

        assert_eq!(texts(&tokens), vec!["ab"]);
        assert_eq!(tokens[0].weight, 2);
    }

    #[test]
    fn test_stop_word_checked_after_decoding() {
        let analyzer = BayesAnalyzer::new(["the"]);
        assert!(analyzer.tokens("the%%4").unwrap().is_empty());
    }

    #[test]
    fn test_deterministic() {
        let analyzer = BayesAnalyzer::new(["is"]);
        let first = analyzer.tokens("spam is spam%%2 eggs").unwrap();
        let second = analyzer.tokens("spam is spam%%2 eggs").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_config_drives_pipeline() {
        let config = ClassifierConfig::default()
            .with_min_term_length(1)
            .with_weight_separator("#");
        let analyzer = BayesAnalyzer::from_config(&config, HashSet::new());
        let tokens = analyzer.tokens("a#3 b%%2").unwrap();

        assert_eq!(texts(&tokens), vec!["a", "b%%2"]);
        assert_eq!(tokens[0].weight, 3);
    }

    #[test]
    fn test_debug_lists_stages() {
        let analyzer = BayesAnalyzer::new(["the"]);
        let debug = format!("{analyzer:?}");
        assert!(debug.contains("whitespace"));
        assert!(debug.contains("weight"));
        assert!(debug.contains("length"));
        assert!(debug.contains("stop"));
        assert_eq!(analyzer.name(), "bayes");
    }
}
