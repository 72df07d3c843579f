use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::structures::{
    crew::CrewProfile,
    metric::{MetricScore, MetricSeries}
};

/// An in-game collection and the crew that count towards it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Collection {
    pub name: String,
    #[serde(default)]
    pub crew: Vec<String>
}

/// Raw `potential_cols`: the number of collections listing each crew member.
/// A collection that lists the same crew twice counts once.
pub fn potential_collections_series(roster: &[CrewProfile], collections: &[Collection]) -> MetricSeries {
    let mut memberships: HashMap<&str, usize> = HashMap::new();
    for collection in collections {
        let mut members = collection.crew.iter().map(String::as_str).collect::<Vec<_>>();
        members.sort_unstable();
        members.dedup();

        for symbol in members {
            *memberships.entry(symbol).or_insert(0) += 1;
        }
    }

    roster
        .iter()
        .map(|crew| {
            let count = memberships.get(crew.symbol.as_str()).copied().unwrap_or_default();
            MetricScore::new(crew.symbol.clone(), crew.max_rarity, count as f64)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        model::structures::{rarity::Rarity, skill::Skill},
        utils::test_utils::{generate_collection, generate_crew}
    };

    #[test]
    fn test_membership_counts() {
        let roster = vec![
            generate_crew("a", Rarity::Rare, &[(Skill::Command, 1.0)], &[], 0),
            generate_crew("b", Rarity::Rare, &[(Skill::Command, 1.0)], &[], 0),
            generate_crew("c", Rarity::Rare, &[(Skill::Command, 1.0)], &[], 0),
        ];
        let collections = vec![
            generate_collection("Delta Quadrant", &["a", "b"]),
            generate_collection("Mirror, Mirror", &["a", "a", "unknown"]),
        ];

        let series = potential_collections_series(&roster, &collections);

        assert_eq!(series[0].score, 2.0);
        assert_eq!(series[1].score, 1.0);
        assert_eq!(series[2].score, 0.0);
    }

    #[test]
    fn test_crew_list_defaults_to_empty() {
        let collection: Collection = serde_json::from_str(r#"{ "name": "Empty" }"#).unwrap();

        assert!(collection.crew.is_empty());
    }
}
