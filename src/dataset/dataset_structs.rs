use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::model::structures::{
    crew::{derive_skill_order, CrewProfile},
    rank_scores::RankScores,
    rarity::Rarity,
    skill::{BaseSkill, Skill}
};

/// A roster entry as stored in the dataset. Fields the engine does not
/// know about are carried through untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CrewEntry {
    pub symbol: String,
    pub max_rarity: Rarity,
    #[serde(default)]
    pub traits: Vec<String>,
    #[serde(default)]
    pub base_skills: IndexMap<Skill, BaseSkill>,
    /// Derived from `base_skills` when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skill_order: Option<Vec<Skill>>,
    pub date_added: DateTime<Utc>,
    #[serde(default)]
    pub ranks: Ranks,
    #[serde(flatten)]
    pub extra: Map<String, Value>
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Ranks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scores: Option<RankScores>,
    #[serde(flatten)]
    pub extra: Map<String, Value>
}

impl CrewEntry {
    pub fn to_profile(&self) -> CrewProfile {
        CrewProfile {
            symbol: self.symbol.clone(),
            max_rarity: self.max_rarity,
            traits: self.traits.clone(),
            base_skills: self.base_skills.clone(),
            skill_order: self
                .skill_order
                .clone()
                .unwrap_or_else(|| derive_skill_order(&self.base_skills)),
            date_added: self.date_added
        }
    }
}
