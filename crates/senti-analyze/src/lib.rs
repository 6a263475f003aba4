//! Text-column detection and the three sentiment analyzers.

pub mod analyzer;
pub mod detect;
pub mod lexicon;
pub mod pattern;
pub mod stars;
mod token;

pub use analyzer::AnalyzerKind;
pub use detect::detect_text_columns;
pub use stars::{EmbeddedStarRater, StarRater};
