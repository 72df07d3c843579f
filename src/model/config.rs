use indexmap::IndexMap;

use crate::model::{constants::*, structures::metric::Metric};

/// Every tunable constant of a scoring run.
///
/// The values here are pinned for compatibility with previously
/// published scores. Changing any of them should bump `version`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringConfig {
    pub version: u32,
    pub weights: IndexMap<Metric, f64>,
    /// Weight of the linear component in the bucket score
    pub bucket_linear_weight: f64,
    /// Weight of the percentile component in the bucket score
    pub bucket_percentile_weight: f64,
    /// Score given to every element of a series with no spread
    pub degenerate_score: f64,
    /// Length of one velocity time unit, in milliseconds
    pub velocity_time_unit_ms: f64
}

impl Default for ScoringConfig {
    fn default() -> Self {
        let weights = IndexMap::from([
            (Metric::AmSeating, WEIGHT_AM_SEATING),
            (Metric::MainCast, WEIGHT_MAIN_CAST),
            (Metric::Collections, WEIGHT_COLLECTIONS),
            (Metric::Gauntlet, WEIGHT_GAUNTLET),
            (Metric::PotentialCols, WEIGHT_POTENTIAL_COLS),
            (Metric::Quipment, WEIGHT_QUIPMENT),
            (Metric::Ship, WEIGHT_SHIP),
            (Metric::Shuttle, WEIGHT_SHUTTLE),
            (Metric::SkillRarity, WEIGHT_SKILL_RARITY),
            (Metric::Trait, WEIGHT_TRAIT),
            (Metric::TertiaryRarity, WEIGHT_TERTIARY_RARITY),
            (Metric::Velocity, WEIGHT_VELOCITY),
            (Metric::Voyage, WEIGHT_VOYAGE)
        ]);

        ScoringConfig {
            version: CONFIG_VERSION,
            weights,
            bucket_linear_weight: BUCKET_LINEAR_WEIGHT,
            bucket_percentile_weight: BUCKET_PERCENTILE_WEIGHT,
            degenerate_score: DEGENERATE_SERIES_SCORE,
            velocity_time_unit_ms: MILLISECONDS_PER_DAY
        }
    }
}

impl ScoringConfig {
    pub fn weight(&self, metric: Metric) -> Option<f64> {
        self.weights.get(&metric).copied()
    }
}
