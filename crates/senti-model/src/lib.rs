pub mod error;
pub mod options;
pub mod profile;
pub mod score;
pub mod table;

pub use error::{Result, ScanError};
pub use options::{AnalyzerOptions, DetectorOptions, LabelThresholds};
pub use profile::ColumnProfile;
pub use score::{Label, ScoredColumn, StarRating};
pub use table::{CellValue, Table};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scored_column_serializes() {
        let scored = ScoredColumn {
            polarities: vec![0.5, -0.5],
            labels: vec![Label::Positive, Label::Negative],
            subjectivity: Some(vec![0.6, 0.4]),
        };
        let json = serde_json::to_string(&scored).expect("serialize scored column");
        let round: ScoredColumn = serde_json::from_str(&json).expect("deserialize scored column");
        assert_eq!(round, scored);
    }

    #[test]
    fn default_options_match_documented_constants() {
        let detector = DetectorOptions::default();
        assert_eq!(detector.min_text_fraction, 0.5);
        assert_eq!(detector.min_avg_len, 5.0);

        let thresholds = LabelThresholds::default();
        assert_eq!(thresholds.positive, 0.05);
        assert_eq!(thresholds.negative, -0.05);
    }

    #[test]
    fn errors_render_user_messages() {
        let error = ScanError::InvalidColumn {
            name: "rating".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "column `rating` is not one of the detected text columns"
        );
        assert_eq!(ScanError::NoTextColumns.to_string(), "no text columns found");
    }
}
