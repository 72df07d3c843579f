use itertools::Itertools;

use crate::model::{
    constants::SHUTTLE_SECONDARY_FACTOR,
    structures::{
        crew::CrewProfile,
        metric::{MetricScore, MetricSeries}
    }
};

/// Expected voyage contribution: core plus mean proficiency, over every skill
pub fn voyage_power(crew: &CrewProfile) -> f64 {
    crew.base_skills.values().map(|s| s.voyage_value()).sum()
}

/// Gauntlet rolls use a crew's best pair of skills, so only the two highest
/// mean proficiencies count.
pub fn gauntlet_power(crew: &CrewProfile) -> f64 {
    crew.base_skills
        .values()
        .map(|s| s.average_proficiency())
        .sorted_by(|a, b| b.total_cmp(a))
        .take(2)
        .sum()
}

/// Shuttle missions use the primary skill plus a quarter of the secondary
pub fn shuttle_power(crew: &CrewProfile) -> f64 {
    let primary = crew.skill(0).map(|s| s.core).unwrap_or_default();
    let secondary = crew.skill(1).map(|s| s.core).unwrap_or_default();

    primary + secondary * SHUTTLE_SECONDARY_FACTOR
}

fn series(roster: &[CrewProfile], power: fn(&CrewProfile) -> f64) -> MetricSeries {
    roster
        .iter()
        .map(|crew| MetricScore::new(crew.symbol.clone(), crew.max_rarity, power(crew)))
        .collect()
}

pub fn voyage_series(roster: &[CrewProfile]) -> MetricSeries {
    series(roster, voyage_power)
}

pub fn gauntlet_series(roster: &[CrewProfile]) -> MetricSeries {
    series(roster, gauntlet_power)
}

pub fn shuttle_series(roster: &[CrewProfile]) -> MetricSeries {
    series(roster, shuttle_power)
}
