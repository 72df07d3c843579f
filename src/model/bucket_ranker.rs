use indexmap::IndexMap;
use strum::IntoEnumIterator;
use tracing::{debug, warn};

use crate::model::{
    config::ScoringConfig,
    constants::NORMALIZED_MAX,
    normalizer::{compare_descending, normalize_with_fallback},
    structures::{
        crew_record::CrewRecord,
        grade::Grade,
        metric::{MetricScore, NormalizeOptions},
        rarity::Rarity
    }
};

/// # Rarity bucket ranking
///
/// 1. Composite scores are normalized across the whole roster with a
///    min-balanced floor, giving `overall`.
/// 2. Each rarity bucket is ordered by `overall` and re-scored as
///    `(linear * 2 + percentile) / 3`, giving `rarity_overall`.
/// 3. Members are ranked `1..N` by `rarity_overall` and graded.
///
/// Records must already carry their composite score.
pub fn rank_buckets(records: &mut IndexMap<String, CrewRecord>, config: &ScoringConfig) {
    update_overall(records, config);

    for rarity in Rarity::iter() {
        let bucket: Vec<&mut CrewRecord> = records.values_mut().filter(|r| r.max_rarity == rarity).collect();

        if bucket.is_empty() {
            warn!("No crew with rarity {}, skipping bucket", rarity.stars());
            continue;
        }

        debug!("Ranking {} crew with rarity {}", bucket.len(), rarity.stars());
        rank_bucket(bucket, config);
    }
}

fn update_overall(records: &mut IndexMap<String, CrewRecord>, config: &ScoringConfig) {
    let composites: Vec<MetricScore> = records
        .values()
        .map(|r| MetricScore::new(r.symbol.clone(), r.max_rarity, r.composite))
        .collect();

    let normalized = normalize_with_fallback(&composites, NormalizeOptions::MIN_BALANCED, config.degenerate_score);

    for m in normalized {
        if let Some(record) = records.get_mut(&m.symbol) {
            record.overall = m.score;
        }
    }
}

fn rank_bucket(mut bucket: Vec<&mut CrewRecord>, config: &ScoringConfig) {
    bucket.sort_by(|a, b| compare_descending(a.overall, &a.symbol, b.overall, &b.symbol));

    let best = bucket[0].overall;
    let total = bucket.len() as i32;
    let weight_sum = config.bucket_linear_weight + config.bucket_percentile_weight;

    for (i, record) in bucket.iter_mut().enumerate() {
        let linear = linear_score(record.overall, best);
        let percentile = percentile(i as i32 + 1, total);

        record.rarity_overall =
            (linear * config.bucket_linear_weight + percentile * config.bucket_percentile_weight) / weight_sum;
    }

    bucket.sort_by(|a, b| compare_descending(a.rarity_overall, &a.symbol, b.rarity_overall, &b.symbol));

    for (i, record) in bucket.iter_mut().enumerate() {
        record.overall_rank = i as i32 + 1;
        record.overall_grade = Grade::from_fraction(record.rarity_overall / NORMALIZED_MAX);
    }
}

/// Score relative to the best in the bucket. A best score of zero means
/// every member is tied with it.
fn linear_score(score: f64, best: f64) -> f64 {
    if best == 0.0 {
        NORMALIZED_MAX
    } else {
        score / best * NORMALIZED_MAX
    }
}

/// `P = ((N - rank + 1) / N) * 100` for a 1-based `rank`
///
/// The top of the bucket sits at 100 and the bottom at `100 / N`.
fn percentile(rank: i32, total: i32) -> f64 {
    let n = total - (rank - 1); // Members at or below this position
    n as f64 / total as f64 * NORMALIZED_MAX
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn record(symbol: &str, rarity: Rarity, composite: f64) -> (String, CrewRecord) {
        let mut record = CrewRecord::new(symbol, rarity);
        record.composite = composite;
        (symbol.to_string(), record)
    }

    fn ranked(records: Vec<(String, CrewRecord)>) -> IndexMap<String, CrewRecord> {
        let mut records: IndexMap<String, CrewRecord> = records.into_iter().collect();
        rank_buckets(&mut records, &ScoringConfig::default());
        records
    }

    #[test]
    fn test_percentile() {
        assert_eq!(percentile(1, 1), 100.0);
        assert_abs_diff_eq!(percentile(1, 2), 100.0, epsilon = 0.0001);
        assert_abs_diff_eq!(percentile(2, 2), 50.0, epsilon = 0.0001);
        assert_abs_diff_eq!(percentile(4, 4), 25.0, epsilon = 0.0001);
        assert_abs_diff_eq!(percentile(2, 10), 90.0, epsilon = 0.0001);
    }

    #[test]
    fn test_overall_is_min_balanced() {
        let records = ranked(vec![
            record("a", Rarity::Legendary, 80.0),
            record("b", Rarity::Legendary, 40.0),
            record("c", Rarity::Common, 20.0),
        ]);

        assert_eq!(records["a"].overall, 100.0);
        assert_eq!(records["b"].overall, 33.3333);
        assert_eq!(records["c"].overall, 0.0);
    }

    #[test]
    fn test_bucket_scores() {
        let records = ranked(vec![
            record("a", Rarity::Legendary, 80.0),
            record("b", Rarity::Legendary, 50.0),
            record("c", Rarity::Legendary, 20.0),
        ]);

        // overall: a = 100, b = 50, c = 0
        assert_eq!(records["a"].rarity_overall, 100.0);
        // linear 50, percentile 2/3
        assert_abs_diff_eq!(records["b"].rarity_overall, (50.0 + 50.0 + 200.0 / 3.0) / 3.0, epsilon = 1e-9);
        // linear 0, percentile 1/3
        assert_abs_diff_eq!(records["c"].rarity_overall, (100.0 / 3.0) / 3.0, epsilon = 1e-9);

        assert_eq!(records["a"].overall_rank, 1);
        assert_eq!(records["b"].overall_rank, 2);
        assert_eq!(records["c"].overall_rank, 3);

        assert_eq!(records["a"].overall_grade, Grade::APlus);
        assert_eq!(records["b"].overall_grade, Grade::F);
        assert_eq!(records["c"].overall_grade, Grade::F);
    }

    #[test]
    fn test_ranks_are_per_bucket() {
        let records = ranked(vec![
            record("a", Rarity::Legendary, 80.0),
            record("b", Rarity::Rare, 60.0),
            record("c", Rarity::Legendary, 40.0),
            record("d", Rarity::Rare, 20.0),
        ]);

        assert_eq!(records["a"].overall_rank, 1);
        assert_eq!(records["c"].overall_rank, 2);
        assert_eq!(records["b"].overall_rank, 1);
        assert_eq!(records["d"].overall_rank, 2);

        // Best of its bucket scores 100 even though it is not the global best
        assert_eq!(records["b"].rarity_overall, 100.0);
    }

    #[test]
    fn test_bucket_of_zeroes() {
        let records = ranked(vec![
            record("a", Rarity::Legendary, 80.0),
            record("b", Rarity::Common, 20.0),
        ]);

        // "b" is the global floor and alone in its bucket
        assert_eq!(records["b"].overall, 0.0);
        assert_eq!(records["b"].rarity_overall, 100.0);
        assert_eq!(records["b"].overall_rank, 1);
    }

    #[test]
    fn test_ties_rank_by_symbol() {
        let records = ranked(vec![
            record("z", Rarity::Legendary, 50.0),
            record("m", Rarity::Legendary, 50.0),
            record("a", Rarity::Legendary, 10.0),
        ]);

        assert_eq!(records["m"].overall_rank, 1);
        assert_eq!(records["z"].overall_rank, 2);
        assert_eq!(records["a"].overall_rank, 3);
    }

    #[test]
    fn test_degenerate_composites() {
        let records = ranked(vec![
            record("a", Rarity::Legendary, 5.0),
            record("b", Rarity::Legendary, 5.0),
        ]);

        assert_eq!(records["a"].overall, 50.0);
        assert_eq!(records["b"].overall, 50.0);
        assert_eq!(records["a"].rarity_overall, 100.0);
        assert_abs_diff_eq!(records["b"].rarity_overall, 250.0 / 3.0, epsilon = 1e-9);
    }
}
