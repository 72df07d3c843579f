//! Crew scoring: metric producers feed the normalizer, the tracker merges
//! the normalized series, and the bucket ranker produces ranks and grades.
pub mod bucket_ranker;
pub mod collections;
pub mod composite;
pub mod config;
pub mod constants;
pub mod error;
pub mod normalizer;
pub mod pipeline;
pub mod score_tracker;
pub mod skill_power;
pub mod skill_rarity;
pub mod structures;
pub mod trait_rarity;
pub mod velocity;

pub use pipeline::score_roster;
