use std::collections::HashMap;

use crate::model::structures::{
    crew::CrewProfile,
    metric::{MetricScore, MetricSeries}
};

/// Number of crew holding each trait
pub fn trait_counts(roster: &[CrewProfile]) -> HashMap<&str, usize> {
    let mut counts = HashMap::new();
    for crew in roster {
        for t in &crew.traits {
            *counts.entry(t.as_str()).or_insert(0) += 1;
        }
    }

    counts
}

/// Raw trait rarity for every crew member:
///
/// `(1 / Σ traitCount[t]) / |traits|`
///
/// Fewer and rarer traits give a larger value. Crew without traits score 0.
pub fn trait_rarity_series(roster: &[CrewProfile]) -> MetricSeries {
    let counts = trait_counts(roster);

    roster
        .iter()
        .map(|crew| {
            let trait_sum: usize = crew
                .traits
                .iter()
                .map(|t| counts.get(t.as_str()).copied().unwrap_or_default())
                .sum();

            let raw = if trait_sum == 0 {
                0.0
            } else {
                (1.0 / trait_sum as f64) / crew.traits.len() as f64
            };

            MetricScore::new(crew.symbol.clone(), crew.max_rarity, raw)
        })
        .collect()
}
