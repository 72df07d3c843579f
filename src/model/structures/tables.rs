use serde::{Deserialize, Serialize};

use crate::model::collections::Collection;

/// A value computed outside the engine for one crew member
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExternalScore {
    pub symbol: String,
    pub score: f64
}

impl ExternalScore {
    pub fn new(symbol: impl Into<String>, score: f64) -> ExternalScore {
        ExternalScore {
            symbol: symbol.into(),
            score
        }
    }
}

/// Supporting tables loaded alongside the roster.
///
/// The five series are produced by the quipment optimizer, the collection
/// buff aggregator, the antimatter seat table, the main cast table and the
/// ship battle scorer respectively.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ScoringTables {
    #[serde(default)]
    pub collections: Vec<Collection>,
    pub quipment: Vec<ExternalScore>,
    pub collections_value: Vec<ExternalScore>,
    pub am_seating: Vec<ExternalScore>,
    pub main_cast: Vec<ExternalScore>,
    pub ship: Vec<ExternalScore>
}
