//! Configuration for column detection and sentiment labeling.

use serde::{Deserialize, Serialize};

/// Heuristic thresholds for classifying a column as text-like.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DetectorOptions {
    /// A column qualifies when the fraction of its non-missing values that
    /// are text strictly exceeds this.
    pub min_text_fraction: f64,

    /// Mean character count of non-missing text entries must strictly exceed
    /// this. Filters out short categorical codes such as "M"/"F".
    pub min_avg_len: f64,
}

impl Default for DetectorOptions {
    fn default() -> Self {
        Self {
            min_text_fraction: 0.5,
            min_avg_len: 5.0,
        }
    }
}

impl DetectorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_min_text_fraction(mut self, fraction: f64) -> Self {
        self.min_text_fraction = fraction;
        self
    }

    pub fn with_min_avg_len(mut self, len: f64) -> Self {
        self.min_avg_len = len;
        self
    }
}

/// Cutoffs mapping a polarity score to a categorical label.
///
/// Every analyzer uses the same rule: `polarity >= positive` is Positive,
/// `polarity <= negative` is Negative, anything between is Neutral.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelThresholds {
    pub positive: f64,
    pub negative: f64,
}

impl Default for LabelThresholds {
    fn default() -> Self {
        Self {
            positive: 0.05,
            negative: -0.05,
        }
    }
}

/// Options threaded through every analyzer invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyzerOptions {
    pub thresholds: LabelThresholds,
}

impl AnalyzerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_thresholds(mut self, thresholds: LabelThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }
}
