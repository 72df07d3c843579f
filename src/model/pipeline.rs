use std::collections::{HashMap, HashSet};

use indexmap::IndexMap;
use strum::IntoEnumIterator;
use tracing::{debug, info, info_span, warn};

use crate::{
    model::{
        collections::potential_collections_series,
        config::ScoringConfig,
        error::ScoringError,
        normalizer::normalize_with_fallback,
        score_tracker::ScoreTracker,
        skill_power::{gauntlet_series, shuttle_series, voyage_series},
        skill_rarity::{skill_order_rarity_series, tertiary_rarity_series},
        structures::{
            crew::CrewProfile,
            metric::{Metric, MetricScore, MetricSeries},
            rank_scores::RankScores,
            tables::{ExternalScore, ScoringTables}
        },
        trait_rarity::trait_rarity_series,
        velocity::velocity_series
    },
    utils::progress_utils::progress_bar
};

/// # Scoring run
///
/// Steps:
/// 1. Validate the roster. Crew without base skills are not playable and are
///    left unranked.
/// 2. Produce the thirteen raw series for the playable crew and normalize each
///    with its own policy.
/// 3. Merge everything into the tracker, compute composites, rank buckets.
///
/// Returns one [`RankScores`] per roster entry, in roster order. Any error
/// aborts the whole run.
pub fn score_roster(
    roster: &[CrewProfile],
    tables: &ScoringTables,
    config: &ScoringConfig
) -> Result<IndexMap<String, RankScores>, ScoringError> {
    validate_roster(roster)?;

    let scored: Vec<CrewProfile> = roster.iter().filter(|c| c.is_scored()).cloned().collect();
    info!(
        "Scoring {} of {} crew (config v{})",
        scored.len(),
        roster.len(),
        config.version
    );

    let raw_series = raw_series(&scored, tables, config)?;

    let mut tracker = ScoreTracker::new(&scored);
    let bar = progress_bar(raw_series.len() as u64, "Normalizing metrics".to_string());
    for (metric, raw) in &raw_series {
        let _span = info_span!("normalize", metric = %metric).entered();

        let normalized = normalize_with_fallback(raw, metric.normalize_options(), config.degenerate_score);
        debug!("Normalized {} scores", normalized.len());
        tracker.insert_series(*metric, raw, &normalized)?;

        if let Some(bar) = &bar {
            bar.inc(1);
        }
    }
    if let Some(bar) = bar {
        bar.finish_and_clear();
    }

    tracker.update_composites(config)?;
    tracker.rank(config);
    info!("Ranked {} crew", tracker.len());

    Ok(roster
        .iter()
        .map(|c| {
            let scores = tracker.get_scores(&c.symbol).unwrap_or_else(RankScores::unranked);
            (c.symbol.clone(), scores)
        })
        .collect())
}

/// Builds every raw series, in [`Metric`] declaration order
fn raw_series(
    scored: &[CrewProfile],
    tables: &ScoringTables,
    config: &ScoringConfig
) -> Result<IndexMap<Metric, MetricSeries>, ScoringError> {
    let mut series = IndexMap::new();

    for metric in Metric::iter() {
        let raw = match metric {
            Metric::AmSeating => external_series(metric, &tables.am_seating, scored)?,
            Metric::MainCast => external_series(metric, &tables.main_cast, scored)?,
            Metric::Collections => external_series(metric, &tables.collections_value, scored)?,
            Metric::Quipment => external_series(metric, &tables.quipment, scored)?,
            Metric::Ship => external_series(metric, &tables.ship, scored)?,
            Metric::Gauntlet => gauntlet_series(scored),
            Metric::PotentialCols => potential_collections_series(scored, &tables.collections),
            Metric::Shuttle => shuttle_series(scored),
            Metric::SkillRarity => skill_order_rarity_series(scored),
            Metric::Trait => trait_rarity_series(scored),
            Metric::TertiaryRarity => tertiary_rarity_series(scored),
            Metric::Velocity => velocity_series(scored, config.velocity_time_unit_ms),
            Metric::Voyage => voyage_series(scored)
        };

        if let Some(bad) = raw.iter().find(|m| !m.score.is_finite()) {
            return Err(ScoringError::NonFiniteScore {
                symbol: bad.symbol.clone(),
                metric
            });
        }

        series.insert(metric, raw);
    }

    Ok(series)
}

/// Looks up an externally computed value for every scored crew member.
/// Entries for crew outside the scored roster are ignored.
fn external_series(
    metric: Metric,
    entries: &[ExternalScore],
    scored: &[CrewProfile]
) -> Result<MetricSeries, ScoringError> {
    let mut lookup: HashMap<&str, f64> = HashMap::with_capacity(entries.len());
    for entry in entries {
        if lookup.insert(entry.symbol.as_str(), entry.score).is_some() {
            return Err(ScoringError::DuplicateSymbol {
                symbol: entry.symbol.clone(),
                source_name: format!("the {} series", metric)
            });
        }
    }

    let series = scored
        .iter()
        .map(|crew| {
            let score = lookup
                .get(crew.symbol.as_str())
                .copied()
                .ok_or_else(|| ScoringError::MissingMetric {
                    symbol: crew.symbol.clone(),
                    metric
                })?;

            Ok(MetricScore::new(crew.symbol.clone(), crew.max_rarity, score))
        })
        .collect::<Result<MetricSeries, ScoringError>>()?;

    let ignored = entries.len() - series.len();
    if ignored > 0 {
        warn!("Ignoring {} {} entries for crew outside the scored roster", ignored, metric);
    }

    Ok(series)
}

/// Rejects rosters the scorers cannot make sense of
pub fn validate_roster(roster: &[CrewProfile]) -> Result<(), ScoringError> {
    let mut seen = HashSet::with_capacity(roster.len());

    for crew in roster {
        if !seen.insert(crew.symbol.as_str()) {
            return Err(ScoringError::DuplicateSymbol {
                symbol: crew.symbol.clone(),
                source_name: "the roster".to_string()
            });
        }

        let invalid = |reason: String| ScoringError::InvalidCrew {
            symbol: crew.symbol.clone(),
            reason
        };

        if let Some(skill) = crew.skill_order.iter().find(|s| !crew.base_skills.contains_key(*s)) {
            return Err(invalid(format!(
                "skill order names {} which has no base skill",
                skill.as_ref()
            )));
        }

        let unique: HashSet<_> = crew.skill_order.iter().collect();
        if unique.len() != crew.skill_order.len() {
            return Err(invalid("skill order repeats a skill".to_string()));
        }

        if let Some((skill, _)) = crew.base_skills.iter().find(|(_, b)| !b.is_finite()) {
            return Err(invalid(format!("{} has a non-finite value", skill.as_ref())));
        }
    }

    Ok(())
}
