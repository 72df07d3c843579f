use std::collections::HashMap;

use crate::model::structures::{
    crew::CrewProfile,
    metric::{MetricScore, MetricSeries},
    rarity::Rarity,
    skill::Skill
};

/// Raw value for crew that do not have exactly three skills
const NO_TRIPLE_RATIO: f64 = 1.0;

fn buckets(roster: &[CrewProfile]) -> HashMap<Rarity, Vec<&CrewProfile>> {
    let mut buckets: HashMap<Rarity, Vec<&CrewProfile>> = HashMap::new();
    for crew in roster {
        buckets.entry(crew.max_rarity).or_default().push(crew);
    }

    buckets
}

/// Shared driver: for each crew with a skill triple, the fraction of its
/// rarity bucket whose triple satisfies `matches`.
fn ratio_series<F>(roster: &[CrewProfile], matches: F) -> MetricSeries
where
    F: Fn((Skill, Skill, Skill), (Skill, Skill, Skill)) -> bool
{
    let buckets = buckets(roster);

    roster
        .iter()
        .map(|crew| {
            let bucket = buckets.get(&crew.max_rarity).map(Vec::as_slice).unwrap_or_default();

            let raw = match crew.triple() {
                Some(target) if !bucket.is_empty() => {
                    let count = bucket
                        .iter()
                        .filter_map(|peer| peer.triple())
                        .filter(|peer| matches(target, *peer))
                        .count();

                    count as f64 / bucket.len() as f64
                }
                _ => NO_TRIPLE_RATIO
            };

            MetricScore::new(crew.symbol.clone(), crew.max_rarity, raw)
        })
        .collect()
}

/// How common a crew's skill order is within its rarity. The top two skills
/// may appear in either order; the third must match exactly.
pub fn skill_order_rarity_series(roster: &[CrewProfile]) -> MetricSeries {
    ratio_series(roster, |(a1, b1, c1), (a2, b2, c2)| {
        let top_two = (a1 == a2 && b1 == b2) || (a1 == b2 && b1 == a2);
        top_two && c1 == c2
    })
}

/// How common a crew's third skill is within its rarity.
pub fn tertiary_rarity_series(roster: &[CrewProfile]) -> MetricSeries {
    ratio_series(roster, |(_, _, c1), (_, _, c2)| c1 == c2)
}
