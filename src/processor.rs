use tracing::info;

use crate::{
    args::Args,
    dataset::{
        dataset_structs::CrewEntry,
        loader::{apply_scores, load_roster, load_tables, save_roster, DatasetError}
    },
    model::{
        config::ScoringConfig,
        pipeline::score_roster,
        structures::{crew::CrewProfile, tables::ScoringTables}
    }
};

/// Outcome of a batch run
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub total: usize,
    pub ranked: usize,
    pub written: bool
}

/// Loads the datasets, scores the roster and writes it back.
/// Nothing is written unless every step succeeds.
pub fn run(args: &Args) -> Result<RunSummary, DatasetError> {
    let mut roster = load_roster(&args.roster)?;
    let tables = load_tables(&args.tables)?;

    let summary = score_entries(&mut roster, &tables, &ScoringConfig::default())?;

    if args.dry_run {
        info!("Dry run, skipping write to {}", args.output_path().display());
        return Ok(summary);
    }

    save_roster(args.output_path(), &roster)?;
    Ok(RunSummary { written: true, ..summary })
}

/// Scores roster entries in place
pub fn score_entries(
    roster: &mut [CrewEntry],
    tables: &ScoringTables,
    config: &ScoringConfig
) -> Result<RunSummary, DatasetError> {
    let profiles: Vec<CrewProfile> = roster.iter().map(CrewEntry::to_profile).collect();
    let scores = score_roster(&profiles, tables, config)?;

    apply_scores(roster, &scores);

    let ranked = scores.values().filter(|s| s.overall_rank > 0).count();
    info!("{} of {} crew ranked", ranked, roster.len());

    Ok(RunSummary {
        total: roster.len(),
        ranked,
        written: false
    })
}
