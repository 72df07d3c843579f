use serde::{Deserialize, Serialize};

use crate::model::{
    constants::{UNRANKED_RANK, UNRANKED_SCORE},
    structures::{crew_record::CrewRecord, grade::Grade, metric::Metric}
};

/// The `ranks.scores` record written back onto each roster entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RankScores {
    #[serde(rename = "trait")]
    pub trait_: f64,
    pub collections: f64,
    pub potential_cols: f64,
    pub velocity: f64,
    pub skill_rarity: f64,
    pub tertiary_rarity: f64,
    pub gauntlet: f64,
    pub voyage: f64,
    pub shuttle: f64,
    pub quipment: f64,
    pub am_seating: f64,
    pub main_cast: f64,
    pub ship: f64,
    pub overall: f64,
    pub rarity_overall: f64,
    pub overall_rank: i32,
    pub overall_grade: Grade
}

impl RankScores {
    /// Placeholder for roster entries that never reached the ranker
    pub fn unranked() -> RankScores {
        RankScores {
            trait_: 0.0,
            collections: 0.0,
            potential_cols: 0.0,
            velocity: 0.0,
            skill_rarity: 0.0,
            tertiary_rarity: 0.0,
            gauntlet: 0.0,
            voyage: 0.0,
            shuttle: 0.0,
            quipment: 0.0,
            am_seating: 0.0,
            main_cast: 0.0,
            ship: 0.0,
            overall: UNRANKED_SCORE,
            rarity_overall: UNRANKED_SCORE,
            overall_rank: UNRANKED_RANK,
            overall_grade: Grade::Unranked
        }
    }
}

impl From<&CrewRecord> for RankScores {
    fn from(record: &CrewRecord) -> Self {
        let score = |metric: Metric| record.normalized.get(&metric).copied().unwrap_or_default();

        RankScores {
            trait_: score(Metric::Trait),
            collections: score(Metric::Collections),
            potential_cols: score(Metric::PotentialCols),
            velocity: score(Metric::Velocity),
            skill_rarity: score(Metric::SkillRarity),
            tertiary_rarity: score(Metric::TertiaryRarity),
            gauntlet: score(Metric::Gauntlet),
            voyage: score(Metric::Voyage),
            shuttle: score(Metric::Shuttle),
            quipment: score(Metric::Quipment),
            am_seating: score(Metric::AmSeating),
            main_cast: score(Metric::MainCast),
            ship: score(Metric::Ship),
            overall: record.overall,
            rarity_overall: record.rarity_overall,
            overall_rank: record.overall_rank,
            overall_grade: record.overall_grade
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::structures::rarity::Rarity;

    #[test]
    fn test_unranked_sentinels() {
        let scores = RankScores::unranked();

        assert_eq!(scores.overall, -1.0);
        assert_eq!(scores.overall_rank, -1);
        assert_eq!(scores.overall_grade, Grade::Unranked);
    }

    #[test]
    fn test_serialized_field_names() {
        let mut record = CrewRecord::new("a", Rarity::Rare);
        record.normalized.insert(Metric::Trait, 42.0);
        record.overall_rank = 3;
        record.overall_grade = Grade::BPlus;

        let value = serde_json::to_value(RankScores::from(&record)).unwrap();

        assert_eq!(value["trait"], 42.0);
        assert_eq!(value["overall_rank"], 3);
        assert_eq!(value["overall_grade"], "B+");
        assert!(value.get("trait_").is_none());
    }
}
