use indexmap::IndexMap;

use crate::model::{
    constants::{UNRANKED_RANK, UNRANKED_SCORE},
    structures::{grade::Grade, metric::Metric, rarity::Rarity}
};

/// The per-run accumulator entry for a single crew member.
#[derive(Debug, Clone, PartialEq)]
pub struct CrewRecord {
    pub symbol: String,
    pub max_rarity: Rarity,
    pub raw: IndexMap<Metric, f64>,
    pub normalized: IndexMap<Metric, f64>,
    pub composite: f64,
    /// Global min-balanced composite, 0-100
    pub overall: f64,
    /// Blended bucket score, 0-100
    pub rarity_overall: f64,
    pub overall_rank: i32,
    pub overall_grade: Grade
}

impl CrewRecord {
    pub fn new(symbol: impl Into<String>, max_rarity: Rarity) -> CrewRecord {
        CrewRecord {
            symbol: symbol.into(),
            max_rarity,
            raw: IndexMap::new(),
            normalized: IndexMap::new(),
            composite: 0.0,
            overall: UNRANKED_SCORE,
            rarity_overall: UNRANKED_SCORE,
            overall_rank: UNRANKED_RANK,
            overall_grade: Grade::Unranked
        }
    }
}
