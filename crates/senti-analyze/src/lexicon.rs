//! Lexicon compound-score analyzer.
//!
//! Scores a text from a fixed valence lexicon with negation, intensifier, and
//! trailing-exclamation heuristics, then normalizes the raw sum onto (-1, 1).

use std::collections::{HashMap, HashSet};

use tracing::trace;

use senti_model::{AnalyzerOptions, Label, ScoredColumn};

use crate::token;

/// Word valences on a roughly -4..4 scale, general review vocabulary.
const VALENCES: &[(&str, f64)] = &[
    ("amazing", 2.8),
    ("awesome", 3.1),
    ("beautiful", 2.9),
    ("best", 3.2),
    ("comfortable", 1.7),
    ("decent", 1.2),
    ("easy", 1.9),
    ("enjoy", 2.2),
    ("enjoyed", 2.2),
    ("excellent", 3.2),
    ("fantastic", 2.9),
    ("fine", 0.8),
    ("good", 1.9),
    ("great", 3.1),
    ("happy", 2.7),
    ("helpful", 1.9),
    ("impressed", 2.3),
    ("love", 3.2),
    ("loved", 2.9),
    ("nice", 1.8),
    ("okay", 0.9),
    ("perfect", 2.9),
    ("pleased", 2.1),
    ("recommend", 1.6),
    ("reliable", 1.9),
    ("satisfied", 2.0),
    ("smooth", 1.3),
    ("solid", 1.5),
    ("wonderful", 2.7),
    ("works", 1.4),
    ("annoying", -2.0),
    ("avoid", -1.9),
    ("awful", -3.0),
    ("bad", -2.5),
    ("broken", -2.2),
    ("cheap", -1.1),
    ("defective", -2.4),
    ("disappointed", -2.3),
    ("disappointing", -2.2),
    ("fail", -2.3),
    ("failed", -2.3),
    ("flimsy", -1.8),
    ("frustrating", -2.3),
    ("hate", -2.7),
    ("hated", -2.6),
    ("horrible", -3.0),
    ("misleading", -2.2),
    ("noisy", -1.5),
    ("poor", -2.3),
    ("problem", -1.6),
    ("refund", -1.5),
    ("slow", -1.2),
    ("terrible", -3.1),
    ("useless", -2.4),
    ("waste", -2.4),
    ("worst", -3.4),
    ("wrong", -1.6),
];

/// Multipliers applied to the next matched word.
const INTENSIFIERS: &[(&str, f64)] = &[
    ("absolutely", 1.7),
    ("extremely", 2.0),
    ("highly", 1.5),
    ("incredibly", 1.8),
    ("pretty", 1.3),
    ("quite", 1.2),
    ("really", 1.4),
    ("slightly", 0.5),
    ("somewhat", 0.7),
    ("super", 1.7),
    ("totally", 1.6),
    ("very", 1.5),
];

/// Raw-sum normalization constant; keeps one strong word well inside the
/// open interval (-1, 1).
const NORMALIZATION_ALPHA: f64 = 15.0;
/// Emphasis added per trailing exclamation mark, in the direction of the sum.
const EXCLAMATION_BOOST: f64 = 0.292;
const MAX_EXCLAMATIONS: usize = 3;

/// Outcome of scoring one text against the lexicon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LexiconScore {
    /// Normalized polarity in (-1, 1); 0.0 when nothing matched.
    pub compound: f64,
    /// Number of lexicon words that contributed to the sum.
    pub matched: usize,
}

/// Fixed valence lexicon with negation and intensifier word lists.
pub struct Lexicon {
    valences: HashMap<&'static str, f64>,
    negations: HashSet<&'static str>,
    intensifiers: HashMap<&'static str, f64>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl Lexicon {
    pub fn new() -> Self {
        Self {
            valences: VALENCES.iter().copied().collect(),
            negations: token::NEGATIONS.iter().copied().collect(),
            intensifiers: INTENSIFIERS.iter().copied().collect(),
        }
    }

    /// Score one text. A negation flips the next matched word, an intensifier
    /// scales it, and both reset on any unmatched word. Trailing exclamation
    /// marks amplify the sentence sum before normalization, capped at
    /// [`MAX_EXCLAMATIONS`].
    pub fn analyze(&self, text: &str) -> LexiconScore {
        let mut sum = 0.0;
        let mut matched = 0usize;
        let mut negate_next = false;
        let mut intensity = 1.0;

        for raw in text.split_whitespace() {
            let word = token::normalize(raw);
            if word.is_empty() {
                continue;
            }
            if self.negations.contains(word.as_str()) {
                negate_next = true;
                continue;
            }
            if let Some(multiplier) = self.intensifiers.get(word.as_str()) {
                intensity = *multiplier;
                continue;
            }
            if let Some(valence) = self.valences.get(word.as_str()) {
                let mut valence = *valence;
                if negate_next {
                    valence = -valence;
                    negate_next = false;
                }
                sum += valence * intensity;
                intensity = 1.0;
                matched += 1;
            } else {
                negate_next = false;
                intensity = 1.0;
            }
        }

        if matched == 0 || sum == 0.0 {
            return LexiconScore {
                compound: 0.0,
                matched,
            };
        }
        let marks = text
            .trim_end()
            .chars()
            .rev()
            .take_while(|c| *c == '!')
            .count()
            .min(MAX_EXCLAMATIONS);
        sum += sum.signum() * EXCLAMATION_BOOST * marks as f64;
        let compound = sum / (sum * sum + NORMALIZATION_ALPHA).sqrt();
        trace!(compound, matched, "lexicon score");
        LexiconScore { compound, matched }
    }

    /// Normalized polarity only.
    pub fn compound(&self, text: &str) -> f64 {
        self.analyze(text).compound
    }
}

/// Score every entry with a fresh lexicon; outputs are index-aligned with
/// `texts` and empty input yields empty output.
pub fn score_texts(texts: &[&str], options: &AnalyzerOptions) -> ScoredColumn {
    let lexicon = Lexicon::new();
    let polarities: Vec<f64> = texts.iter().map(|text| lexicon.compound(text)).collect();
    let labels: Vec<Label> = polarities
        .iter()
        .map(|polarity| Label::from_polarity(*polarity, &options.thresholds))
        .collect();
    ScoredColumn {
        polarities,
        labels,
        subjectivity: None,
    }
}
