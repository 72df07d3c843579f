use chrono::{DateTime, Duration, TimeZone, Utc};
use indexmap::IndexMap;

use crate::model::{
    collections::Collection,
    structures::{
        crew::{derive_skill_order, CrewProfile},
        rarity::Rarity,
        skill::{BaseSkill, Skill},
        tables::{ExternalScore, ScoringTables}
    }
};

/// Release date of every generated crew with a day offset of 0
pub fn base_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2016, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Builds a crew member from core values. Proficiency ranges are derived
/// as 10% and 20% of the core value; the skill order follows the cores.
pub fn generate_crew(
    symbol: &str,
    max_rarity: Rarity,
    skills: &[(Skill, f64)],
    traits: &[&str],
    days_after_base: i64
) -> CrewProfile {
    let base_skills: IndexMap<Skill, BaseSkill> = skills
        .iter()
        .map(|(skill, core)| (*skill, BaseSkill::new(*core, core * 0.1, core * 0.2)))
        .collect();

    CrewProfile {
        symbol: symbol.to_string(),
        max_rarity,
        traits: traits.iter().map(|t| t.to_string()).collect(),
        skill_order: derive_skill_order(&base_skills),
        base_skills,
        date_added: base_date() + Duration::days(days_after_base)
    }
}

/// Builds a crew member with explicit base skills
pub fn generate_crew_with_ranges(symbol: &str, max_rarity: Rarity, skills: &[(Skill, BaseSkill)]) -> CrewProfile {
    let base_skills: IndexMap<Skill, BaseSkill> = skills.iter().copied().collect();

    CrewProfile {
        symbol: symbol.to_string(),
        max_rarity,
        traits: Vec::new(),
        skill_order: derive_skill_order(&base_skills),
        base_skills,
        date_added: base_date()
    }
}

pub fn generate_collection(name: &str, crew: &[&str]) -> Collection {
    Collection {
        name: name.to_string(),
        crew: crew.iter().map(|c| c.to_string()).collect()
    }
}

/// Builds the five external series for a roster. `score` receives the crew
/// index and the series index (0 = quipment, 1 = collections value,
/// 2 = antimatter seating, 3 = main cast, 4 = ship).
pub fn generate_tables<F>(roster: &[CrewProfile], score: F) -> ScoringTables
where
    F: Fn(usize, usize) -> f64
{
    let series = |idx: usize| -> Vec<ExternalScore> {
        roster
            .iter()
            .enumerate()
            .map(|(i, crew)| ExternalScore::new(crew.symbol.clone(), score(i, idx)))
            .collect()
    };

    ScoringTables {
        collections: Vec::new(),
        quipment: series(0),
        collections_value: series(1),
        am_seating: series(2),
        main_cast: series(3),
        ship: series(4)
    }
}
