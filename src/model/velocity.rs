use std::collections::HashMap;

use itertools::Itertools;

use crate::model::structures::{
    crew::CrewProfile,
    metric::{MetricScore, MetricSeries},
    skill::Skill
};

/// Raw power-growth velocity for every crew member.
///
/// Crew are grouped into cohorts sharing the exact same skill order and every
/// member of a cohort receives the cohort's velocity.
pub fn velocity_series(roster: &[CrewProfile], time_unit_ms: f64) -> MetricSeries {
    let mut cohorts: HashMap<&[Skill], Vec<&CrewProfile>> = HashMap::new();
    for crew in roster {
        cohorts.entry(crew.skill_order.as_slice()).or_default().push(crew);
    }

    let velocities: HashMap<&[Skill], f64> = cohorts
        .iter()
        .map(|(order, cohort)| (*order, cohort_velocity(cohort, time_unit_ms)))
        .collect();

    roster
        .iter()
        .map(|crew| {
            let raw = velocities
                .get(crew.skill_order.as_slice())
                .copied()
                .unwrap_or_default();

            MetricScore::new(crew.symbol.clone(), crew.max_rarity, raw)
        })
        .collect()
}

/// # Cohort velocity
///
/// The cohort is ordered by release date. A cohort of one has no peer to
/// compare against, so its power level is used directly.
///
/// Otherwise each consecutive pair contributes:
/// - `|pdiff|` when both were released at the same instant
/// - `pdiff / tdiff` when the later crew is stronger
/// - nothing when the later crew is weaker or equal
///
/// where `tdiff` is measured in units of `time_unit_ms`.
pub fn cohort_velocity(cohort: &[&CrewProfile], time_unit_ms: f64) -> f64 {
    if cohort.len() == 1 {
        return cohort[0].power_level();
    }

    cohort
        .iter()
        .sorted_by(|a, b| a.date_added.cmp(&b.date_added).then_with(|| a.symbol.cmp(&b.symbol)))
        .tuple_windows()
        .filter_map(|(prev, cur)| {
            let tdiff = (cur.date_added - prev.date_added).num_milliseconds() as f64 / time_unit_ms;
            let pdiff = cur.power_level() - prev.power_level();

            if tdiff == 0.0 {
                Some(pdiff.abs())
            } else if pdiff > 0.0 {
                Some(pdiff / tdiff)
            } else {
                None
            }
        })
        .sum()
}
