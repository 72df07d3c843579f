use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use itertools::Itertools;

use crate::model::structures::{
    rarity::Rarity,
    skill::{BaseSkill, Skill}
};

/// The read-only view of a roster member that the scorers work from.
#[derive(Debug, Clone, PartialEq)]
pub struct CrewProfile {
    pub symbol: String,
    pub max_rarity: Rarity,
    pub traits: Vec<String>,
    pub base_skills: IndexMap<Skill, BaseSkill>,
    /// Skills from highest to lowest core value
    pub skill_order: Vec<Skill>,
    pub date_added: DateTime<Utc>
}

impl CrewProfile {
    /// Crew without any base skill are not playable and are never ranked
    pub fn is_scored(&self) -> bool {
        !self.base_skills.is_empty()
    }

    /// Sum of the core values over the skill order
    pub fn power_level(&self) -> f64 {
        self.skill_order
            .iter()
            .filter_map(|s| self.base_skills.get(s))
            .map(|s| s.core)
            .sum()
    }

    pub fn skill(&self, position: usize) -> Option<&BaseSkill> {
        self.skill_order.get(position).and_then(|s| self.base_skills.get(s))
    }

    /// `(primary, secondary, tertiary)` if the crew has exactly three skills
    pub fn triple(&self) -> Option<(Skill, Skill, Skill)> {
        match self.skill_order.as_slice() {
            [a, b, c] => Some((*a, *b, *c)),
            _ => None
        }
    }
}

/// Orders skills by core value descending. Equal values keep the
/// declaration order of [`Skill`].
pub fn derive_skill_order(base_skills: &IndexMap<Skill, BaseSkill>) -> Vec<Skill> {
    base_skills
        .iter()
        .sorted_by(|(s1, b1), (s2, b2)| b2.core.total_cmp(&b1.core).then_with(|| s1.cmp(s2)))
        .map(|(s, _)| *s)
        .collect()
}
