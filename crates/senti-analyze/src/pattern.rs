//! Pattern analyzer producing polarity and subjectivity.
//!
//! Each lexicon entry carries a (polarity, subjectivity) pair; a text scores
//! the arithmetic mean over its matched words. A negation word multiplies the
//! next matched polarity by [`NEGATION_MULTIPLIER`] while the subjectivity is
//! kept as-is.

use std::collections::{HashMap, HashSet};

use senti_model::{AnalyzerOptions, Label, ScoredColumn};

use crate::token;

/// Word entries as (word, polarity in [-1, 1], subjectivity in [0, 1]).
const ENTRIES: &[(&str, f64, f64)] = &[
    ("amazing", 0.6, 0.9),
    ("awesome", 1.0, 1.0),
    ("beautiful", 0.85, 1.0),
    ("best", 1.0, 0.3),
    ("comfortable", 0.55, 0.75),
    ("decent", 0.35, 0.6),
    ("easy", 0.43, 0.83),
    ("excellent", 1.0, 1.0),
    ("fantastic", 0.4, 0.9),
    ("fine", 0.42, 0.78),
    ("good", 0.7, 0.6),
    ("great", 0.8, 0.75),
    ("happy", 0.8, 1.0),
    ("helpful", 0.55, 0.6),
    ("love", 0.5, 0.6),
    ("nice", 0.6, 1.0),
    ("okay", 0.5, 0.5),
    ("perfect", 1.0, 1.0),
    ("pleased", 0.6, 0.8),
    ("reliable", 0.6, 0.5),
    ("wonderful", 1.0, 1.0),
    ("annoying", -0.67, 0.8),
    ("avoid", -0.4, 0.3),
    ("awful", -1.0, 1.0),
    ("bad", -0.7, 0.67),
    ("broken", -0.4, 0.7),
    ("cheap", -0.4, 0.7),
    ("disappointed", -0.65, 0.75),
    ("disappointing", -0.6, 0.7),
    ("frustrating", -0.7, 0.8),
    ("hate", -0.8, 0.9),
    ("horrible", -1.0, 1.0),
    ("poor", -0.4, 0.6),
    ("sad", -0.5, 1.0),
    ("slow", -0.3, 0.4),
    ("terrible", -1.0, 1.0),
    ("useless", -0.5, 0.4),
    ("waste", -0.5, 0.4),
    ("worst", -1.0, 0.3),
    ("wrong", -0.5, 0.5),
];

/// Polarity multiplier for a matched word that follows a negation.
const NEGATION_MULTIPLIER: f64 = -0.5;

pub struct PatternLexicon {
    entries: HashMap<&'static str, (f64, f64)>,
    negations: HashSet<&'static str>,
}

impl Default for PatternLexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternLexicon {
    pub fn new() -> Self {
        Self {
            entries: ENTRIES
                .iter()
                .map(|(word, polarity, subjectivity)| (*word, (*polarity, *subjectivity)))
                .collect(),
            negations: token::NEGATIONS.iter().copied().collect(),
        }
    }

    /// Mean (polarity, subjectivity) over matched words; (0.0, 0.0) when
    /// nothing matches.
    pub fn assess(&self, text: &str) -> (f64, f64) {
        let mut polarity_sum = 0.0;
        let mut subjectivity_sum = 0.0;
        let mut matched = 0usize;
        let mut negate_next = false;

        for raw in text.split_whitespace() {
            let word = token::normalize(raw);
            if word.is_empty() {
                continue;
            }
            if self.negations.contains(word.as_str()) {
                negate_next = true;
                continue;
            }
            if let Some((polarity, subjectivity)) = self.entries.get(word.as_str()) {
                let polarity = if negate_next {
                    polarity * NEGATION_MULTIPLIER
                } else {
                    *polarity
                };
                negate_next = false;
                polarity_sum += polarity;
                subjectivity_sum += subjectivity;
                matched += 1;
            } else {
                negate_next = false;
            }
        }

        if matched == 0 {
            (0.0, 0.0)
        } else {
            (
                polarity_sum / matched as f64,
                subjectivity_sum / matched as f64,
            )
        }
    }
}

/// Score every entry; `subjectivity` is always present for this analyzer and
/// index-aligned with `texts`.
pub fn score_texts(texts: &[&str], options: &AnalyzerOptions) -> ScoredColumn {
    let lexicon = PatternLexicon::new();
    let mut polarities = Vec::with_capacity(texts.len());
    let mut subjectivity = Vec::with_capacity(texts.len());
    for text in texts {
        let (polarity, subjective) = lexicon.assess(text);
        polarities.push(polarity);
        subjectivity.push(subjective);
    }
    let labels: Vec<Label> = polarities
        .iter()
        .map(|polarity| Label::from_polarity(*polarity, &options.thresholds))
        .collect();
    ScoredColumn {
        polarities,
        labels,
        subjectivity: Some(subjectivity),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matched_words_average() {
        let lexicon = PatternLexicon::new();
        let (polarity, subjectivity) = lexicon.assess("great and reliable");
        assert!((polarity - 0.7).abs() < 1e-9);
        assert!((subjectivity - 0.625).abs() < 1e-9);
    }

    #[test]
    fn no_match_scores_zero() {
        let lexicon = PatternLexicon::new();
        assert_eq!(lexicon.assess("shipped in a plain box"), (0.0, 0.0));
        assert_eq!(lexicon.assess(""), (0.0, 0.0));
    }

    #[test]
    fn negation_halves_and_flips_polarity() {
        let lexicon = PatternLexicon::new();
        let (plain, plain_subjectivity) = lexicon.assess("great");
        let (negated, negated_subjectivity) = lexicon.assess("not great");
        assert!((negated - plain * NEGATION_MULTIPLIER).abs() < 1e-9);
        assert_eq!(plain_subjectivity, negated_subjectivity);
    }

    #[test]
    fn batch_scoring_carries_subjectivity() {
        let options = AnalyzerOptions::default();
        let scored = score_texts(&["great product", "terrible, avoid", ""], &options);
        let subjectivity = scored.subjectivity.as_ref().expect("subjectivity present");
        assert_eq!(subjectivity.len(), 3);
        assert_eq!(scored.labels[0], Label::Positive);
        assert_eq!(scored.labels[1], Label::Negative);
        assert_eq!(scored.labels[2], Label::Neutral);
        assert_eq!(subjectivity[2], 0.0);
    }
}
