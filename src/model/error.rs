use thiserror::Error;

use crate::model::structures::metric::Metric;

/// Failures that abort a scoring run. Nothing is written when one
/// of these is returned.
#[derive(Debug, Error, PartialEq)]
pub enum ScoringError {
    #[error("Crew {symbol} is missing from the {metric} series")]
    MissingMetric { symbol: String, metric: Metric },

    #[error("Crew {symbol} appears more than once in {source_name}")]
    DuplicateSymbol { symbol: String, source_name: String },

    #[error("Crew {symbol} has a non-finite {metric} score")]
    NonFiniteScore { symbol: String, metric: Metric },

    #[error("Crew {symbol} is invalid: {reason}")]
    InvalidCrew { symbol: String, reason: String },

    #[error("No weight configured for the {metric} factor")]
    MissingWeight { metric: Metric }
}
