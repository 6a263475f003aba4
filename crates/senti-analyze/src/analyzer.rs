//! Analyzer selection and dispatch.

use tracing::debug;

use senti_model::{AnalyzerOptions, Result, ScanError, ScoredColumn};

use crate::stars::EmbeddedStarRater;
use crate::{lexicon, pattern, stars};

/// The three interchangeable sentiment backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalyzerKind {
    /// Valence lexicon with negation, intensifier, and exclamation heuristics.
    Lexicon,
    /// Pattern lexicon producing polarity and subjectivity.
    Pattern,
    /// Star-rating classifier normalized onto the shared polarity scale.
    StarModel,
}

impl AnalyzerKind {
    /// Map the interactive "1"/"2"/"3" choice to an analyzer.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::InvalidAnalyzer`] for any other input.
    pub fn from_choice(choice: &str) -> Result<Self> {
        match choice.trim() {
            "1" => Ok(AnalyzerKind::Lexicon),
            "2" => Ok(AnalyzerKind::Pattern),
            "3" => Ok(AnalyzerKind::StarModel),
            other => Err(ScanError::InvalidAnalyzer {
                choice: other.to_string(),
            }),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AnalyzerKind::Lexicon => "lexicon",
            AnalyzerKind::Pattern => "pattern",
            AnalyzerKind::StarModel => "star model",
        }
    }

    /// Score `texts` with this analyzer. Every output vector is index-aligned
    /// with `texts`; empty input yields empty output.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Analysis`] when the star backend fails on an
    /// entry; the lexicon and pattern analyzers cannot fail.
    pub fn score(&self, texts: &[&str], options: &AnalyzerOptions) -> Result<ScoredColumn> {
        debug!(analyzer = self.name(), rows = texts.len(), "scoring column");
        match self {
            AnalyzerKind::Lexicon => Ok(lexicon::score_texts(texts, options)),
            AnalyzerKind::Pattern => Ok(pattern::score_texts(texts, options)),
            AnalyzerKind::StarModel => stars::score_texts(&EmbeddedStarRater::new(), texts, options),
        }
    }
}
