use std::sync::Once;

use crew_datascore::{
    model::{
        collections::Collection,
        structures::{crew::CrewProfile, rarity::Rarity, skill::Skill, tables::ScoringTables}
    },
    utils::test_utils::{generate_collection, generate_crew, generate_tables}
};
use itertools::Itertools;
use rand::{
    seq::{IndexedRandom, SliceRandom},
    Rng, SeedableRng
};
use rand_chacha::ChaCha8Rng;
use strum::IntoEnumIterator;

static INIT: Once = Once::new();

/// Initialize test environment with RUST_LOG=WARN
pub fn init_test_env() {
    INIT.call_once(|| {
        std::env::set_var("RUST_LOG", "warn");
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    });
}

const TRAITS: [&str; 8] = [
    "human",
    "vulcan",
    "starfleet",
    "klingon",
    "romulan",
    "android",
    "federation",
    "maquis"
];

/// A reproducible roster of `size` crew spread across every rarity,
/// with matching external tables and a handful of collections
pub fn random_roster(seed: u64, size: usize) -> (Vec<CrewProfile>, ScoringTables) {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let rarities = Rarity::iter().collect_vec();
    let skills = Skill::iter().collect_vec();

    let roster = (0..size)
        .map(|i| {
            let rarity = rarities[i % rarities.len()];
            let skill_count = rng.random_range(1..=3);

            let mut pool = skills.clone();
            pool.shuffle(&mut rng);
            let crew_skills = pool
                .into_iter()
                .take(skill_count)
                .map(|s| (s, rng.random_range(100..2000) as f64))
                .collect_vec();

            let trait_count = rng.random_range(0..=3);
            let crew_traits = TRAITS.choose_multiple(&mut rng, trait_count).copied().collect_vec();

            generate_crew(
                &format!("crew_{}", i),
                rarity,
                &crew_skills,
                &crew_traits,
                rng.random_range(0..3000)
            )
        })
        .collect_vec();

    let external = (0..size * 5).map(|_| rng.random_range(0.0..1000.0)).collect_vec();
    let mut tables = generate_tables(&roster, |crew, series| external[crew * 5 + series]);
    tables.collections = random_collections(&mut rng, &roster);

    (roster, tables)
}

fn random_collections(rng: &mut ChaCha8Rng, roster: &[CrewProfile]) -> Vec<Collection> {
    (0..4)
        .map(|i| {
            let members = roster
                .iter()
                .filter(|_| rng.random_bool(0.3))
                .map(|c| c.symbol.as_str())
                .collect_vec();

            generate_collection(&format!("collection_{}", i), &members)
        })
        .collect()
}
