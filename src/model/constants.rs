// Composite weights
pub const WEIGHT_AM_SEATING: f64 = 0.5;
pub const WEIGHT_MAIN_CAST: f64 = 0.15;
pub const WEIGHT_COLLECTIONS: f64 = 0.5;
pub const WEIGHT_GAUNTLET: f64 = 1.59;
pub const WEIGHT_POTENTIAL_COLS: f64 = 0.15;
pub const WEIGHT_QUIPMENT: f64 = 0.85;
pub const WEIGHT_SHIP: f64 = 1.25;
pub const WEIGHT_SHUTTLE: f64 = 1.0;
pub const WEIGHT_SKILL_RARITY: f64 = 2.0;
pub const WEIGHT_TRAIT: f64 = 0.25;
pub const WEIGHT_TERTIARY_RARITY: f64 = 0.3;
pub const WEIGHT_VELOCITY: f64 = 0.2;
pub const WEIGHT_VOYAGE: f64 = 7.0;
// Bucket scoring: (linear * 2 + percentile) / 3
pub const BUCKET_LINEAR_WEIGHT: f64 = 2.0;
pub const BUCKET_PERCENTILE_WEIGHT: f64 = 1.0;
// Normalization
pub const NORMALIZED_MAX: f64 = 100.0;
pub const NORMALIZED_PRECISION: i32 = 4;
pub const DEGENERATE_SERIES_SCORE: f64 = 50.0;
// Skill power
pub const SHUTTLE_SECONDARY_FACTOR: f64 = 0.25;
pub const MILLISECONDS_PER_DAY: f64 = 86_400_000.0;
// Sentinels for crew that were not ranked
pub const UNRANKED_SCORE: f64 = -1.0;
pub const UNRANKED_RANK: i32 = -1;
pub const CONFIG_VERSION: u32 = 1;
