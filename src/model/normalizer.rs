use std::cmp::Ordering;

use tracing::warn;

use crate::model::{
    constants::{DEGENERATE_SERIES_SCORE, NORMALIZED_MAX, NORMALIZED_PRECISION},
    structures::metric::{MetricScore, MetricSeries, NormalizeOptions}
};

/// Rescales a series into 0-100 using [`DEGENERATE_SERIES_SCORE`] for
/// series without any spread.
pub fn normalize(series: &[MetricScore], options: NormalizeOptions) -> MetricSeries {
    normalize_with_fallback(series, options, DEGENERATE_SERIES_SCORE)
}

/// # Min-max normalization
///
/// The series is sorted by raw score descending. The best score becomes the
/// ceiling. The floor is zero, or the worst score when `min_balance` is set
/// or when the worst score is negative.
///
/// - linear: `(score - floor) / (max - floor) * 100`
/// - inverse: `(1 - (score - floor) / (max - floor)) * 100`
///
/// Values are rounded to 4 decimal places and the result is returned sorted
/// by the new score, descending. When `max == floor` every element receives
/// `fallback` instead.
pub fn normalize_with_fallback(series: &[MetricScore], options: NormalizeOptions, fallback: f64) -> MetricSeries {
    if series.is_empty() {
        return Vec::new();
    }

    let mut sorted = series.to_vec();
    sort_descending(&mut sorted);

    let max = sorted[0].score;
    let worst = sorted[sorted.len() - 1].score;
    let floor = if options.min_balance { worst } else { worst.min(0.0) };
    let scale = max - floor;

    let mut result: MetricSeries = if scale == 0.0 {
        warn!(
            "Series of {} scores has no spread (all {}), using {} for every entry",
            sorted.len(),
            max,
            fallback
        );

        sorted
            .into_iter()
            .map(|m| MetricScore { score: fallback, ..m })
            .collect()
    } else {
        sorted
            .into_iter()
            .map(|m| {
                let fraction = (m.score - floor) / scale;
                let value = if options.inverse {
                    (1.0 - fraction) * NORMALIZED_MAX
                } else {
                    fraction * NORMALIZED_MAX
                };

                MetricScore {
                    score: round_to(value, NORMALIZED_PRECISION),
                    ..m
                }
            })
            .collect()
    };

    sort_descending(&mut result);
    result
}

/// Sorts by score descending, equal scores by symbol ascending
pub fn sort_descending(series: &mut [MetricScore]) {
    series.sort_by(|a, b| compare_descending(a.score, &a.symbol, b.score, &b.symbol));
}

pub fn compare_descending(a_score: f64, a_symbol: &str, b_score: f64, b_symbol: &str) -> Ordering {
    b_score.total_cmp(&a_score).then_with(|| a_symbol.cmp(b_symbol))
}

pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
