pub mod crew;
pub mod crew_record;
pub mod grade;
pub mod metric;
pub mod rank_scores;
pub mod rarity;
pub mod skill;
pub mod tables;
