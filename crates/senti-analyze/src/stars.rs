//! Star-rating classifier adapter.
//!
//! Wraps a 1-5 star backend behind the [`StarRater`] capability and maps its
//! ratings onto the shared polarity scale with `(stars - 3) / 2`, so ratings
//! below three stars come out negative and above three positive.

use tracing::debug;

use senti_model::{AnalyzerOptions, Label, Result, ScanError, ScoredColumn, StarRating};

use crate::lexicon::Lexicon;

/// Capability interface over a star-rating classifier backend.
pub trait StarRater {
    /// Rate one non-empty text.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Analysis`] when the backend cannot process the
    /// entry.
    fn rate(&self, text: &str) -> Result<StarRating>;
}

/// Deterministic in-process rater: bins a lexicon valence score into stars
/// and reports a coverage-based confidence.
pub struct EmbeddedStarRater {
    lexicon: Lexicon,
}

impl Default for EmbeddedStarRater {
    fn default() -> Self {
        Self::new()
    }
}

impl EmbeddedStarRater {
    pub fn new() -> Self {
        Self {
            lexicon: Lexicon::new(),
        }
    }
}

impl StarRater for EmbeddedStarRater {
    fn rate(&self, text: &str) -> Result<StarRating> {
        let score = self.lexicon.analyze(text);
        let stars = if score.compound < -0.6 {
            1
        } else if score.compound < -0.2 {
            2
        } else if score.compound <= 0.2 {
            3
        } else if score.compound <= 0.6 {
            4
        } else {
            5
        };
        let total = text.split_whitespace().count();
        let coverage = if total == 0 {
            0.0
        } else {
            (score.matched as f64 / total as f64).min(1.0)
        };
        let confidence = (0.3 + 0.4 * coverage + 0.3 * score.compound.abs()).min(0.95);
        Ok(StarRating { stars, confidence })
    }
}

/// Score `texts` through `rater`. Blank entries never reach the backend and
/// score neutral; any backend error aborts the whole call with no partial
/// result.
pub fn score_texts<S: StarRater>(
    rater: &S,
    texts: &[&str],
    options: &AnalyzerOptions,
) -> Result<ScoredColumn> {
    let mut polarities = Vec::with_capacity(texts.len());
    for text in texts {
        if text.trim().is_empty() {
            polarities.push(0.0);
            continue;
        }
        let rating = rater.rate(text)?;
        if !(1..=5).contains(&rating.stars) {
            return Err(ScanError::analysis(format!(
                "star rater returned {} stars, expected 1 to 5",
                rating.stars
            )));
        }
        polarities.push((f64::from(rating.stars) - 3.0) / 2.0);
    }
    let labels: Vec<Label> = polarities
        .iter()
        .map(|polarity| Label::from_polarity(*polarity, &options.thresholds))
        .collect();
    debug!(rows = texts.len(), "star ratings normalized");
    Ok(ScoredColumn {
        polarities,
        labels,
        subjectivity: None,
    })
}
