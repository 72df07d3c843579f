use indexmap::IndexMap;
use strum::IntoEnumIterator;

use crate::model::{
    bucket_ranker::rank_buckets,
    composite::composite_score,
    config::ScoringConfig,
    error::ScoringError,
    structures::{
        crew::CrewProfile,
        crew_record::CrewRecord,
        metric::{Metric, MetricScore},
        rank_scores::RankScores
    }
};

/// Accumulates every metric for the scored roster, keyed by crew symbol.
/// Each stage hands over complete series; records are only touched here.
pub struct ScoreTracker {
    // Roster order is preserved until ranking
    records: IndexMap<String, CrewRecord>
}

impl ScoreTracker {
    pub fn new(roster: &[CrewProfile]) -> ScoreTracker {
        let records = roster
            .iter()
            .map(|c| (c.symbol.clone(), CrewRecord::new(c.symbol.clone(), c.max_rarity)))
            .collect();

        ScoreTracker { records }
    }

    /// Merges a raw series and its normalized counterpart. Every tracked
    /// crew member must be present in the normalized series.
    pub fn insert_series(
        &mut self,
        metric: Metric,
        raw: &[MetricScore],
        normalized: &[MetricScore]
    ) -> Result<(), ScoringError> {
        for m in raw {
            if let Some(record) = self.records.get_mut(&m.symbol) {
                record.raw.insert(metric, m.score);
            }
        }

        for m in normalized {
            if let Some(record) = self.records.get_mut(&m.symbol) {
                record.normalized.insert(metric, m.score);
            }
        }

        match self.records.values().find(|r| !r.normalized.contains_key(&metric)) {
            Some(missing) => Err(ScoringError::MissingMetric {
                symbol: missing.symbol.clone(),
                metric
            }),
            None => Ok(())
        }
    }

    /// Computes the composite score of every record
    pub fn update_composites(&mut self, config: &ScoringConfig) -> Result<(), ScoringError> {
        for record in self.records.values_mut() {
            record.composite = composite_score(&record.symbol, &record.normalized, config)?;
        }

        Ok(())
    }

    /// Runs the rarity bucket ranking over all records
    pub fn rank(&mut self, config: &ScoringConfig) {
        rank_buckets(&mut self.records, config);
    }

    pub fn get_record(&self, symbol: &str) -> Option<&CrewRecord> {
        self.records.get(symbol)
    }

    pub fn get_scores(&self, symbol: &str) -> Option<RankScores> {
        self.get_record(symbol).map(RankScores::from)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records that have every metric, in roster order
    pub fn complete_records(&self) -> impl Iterator<Item = &CrewRecord> {
        self.records
            .values()
            .filter(|r| Metric::iter().all(|m| r.normalized.contains_key(&m)))
    }
}
