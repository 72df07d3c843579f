use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter};

use crate::model::structures::rarity::Rarity;

/// The thirteen factors that feed the composite score.
#[derive(
    Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, AsRefStr, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Metric {
    AmSeating,
    MainCast,
    Collections,
    Gauntlet,
    PotentialCols,
    Quipment,
    Ship,
    Shuttle,
    SkillRarity,
    Trait,
    TertiaryRarity,
    Velocity,
    Voyage
}

/// How a raw series is rescaled into 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NormalizeOptions {
    /// Lower raw scores map to higher normalized scores
    pub inverse: bool,
    /// Use the smallest raw score as the floor instead of zero
    pub min_balance: bool
}

impl NormalizeOptions {
    pub const LINEAR: NormalizeOptions = NormalizeOptions {
        inverse: false,
        min_balance: false
    };
    pub const INVERSE: NormalizeOptions = NormalizeOptions {
        inverse: true,
        min_balance: false
    };
    pub const MIN_BALANCED: NormalizeOptions = NormalizeOptions {
        inverse: false,
        min_balance: true
    };
}

impl Metric {
    /// Skill order rarity is a "how common" ratio, so it is inverted.
    /// Every other raw factor already grows with desirability.
    pub fn normalize_options(&self) -> NormalizeOptions {
        match self {
            Metric::SkillRarity | Metric::TertiaryRarity => NormalizeOptions::INVERSE,
            _ => NormalizeOptions::LINEAR
        }
    }
}

/// One `(symbol, rarity, score)` triple.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricScore {
    pub symbol: String,
    pub rarity: Rarity,
    pub score: f64
}

impl MetricScore {
    pub fn new(symbol: impl Into<String>, rarity: Rarity, score: f64) -> MetricScore {
        MetricScore {
            symbol: symbol.into(),
            rarity,
            score
        }
    }
}

/// The interchange type between metric producers and the normalizer
pub type MetricSeries = Vec<MetricScore>;

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_metric_count() {
        assert_eq!(Metric::iter().count(), 13);
    }

    #[test]
    fn test_metric_names() {
        assert_eq!(Metric::AmSeating.to_string(), "am_seating");
        assert_eq!(Metric::TertiaryRarity.as_ref(), "tertiary_rarity");
        assert_eq!(serde_json::to_string(&Metric::PotentialCols).unwrap(), "\"potential_cols\"");
    }

    #[test]
    fn test_inverse_metrics() {
        let inverted = Metric::iter()
            .filter(|m| m.normalize_options().inverse)
            .collect::<Vec<_>>();

        assert_eq!(inverted, vec![Metric::SkillRarity, Metric::TertiaryRarity]);
        assert!(Metric::iter().all(|m| !m.normalize_options().min_balance));
    }
}
