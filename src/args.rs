use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Clone, Debug)]
#[command(
    display_name = "Crew Datascore",
    long_about = "Scores and ranks every crew member of a roster dataset and writes the results back onto it"
)]
pub struct Args {
    /// Roster dataset: a JSON array of crew entries
    #[arg(short, long, env = "ROSTER_PATH", help = "Path to the roster JSON file")]
    pub roster: PathBuf,

    /// Supporting tables: collections plus the externally computed
    /// quipment, collection value, antimatter seating, main cast and ship series
    #[arg(short, long, env = "TABLES_PATH", help = "Path to the scoring tables JSON file")]
    pub tables: PathBuf,

    /// Where to write the enriched roster. Defaults to overwriting the roster.
    #[arg(short, long, env = "OUTPUT_PATH")]
    pub output: Option<PathBuf>,

    /// Computes and logs the results without writing anything
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub dry_run: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(
        short,
        long,
        env = "RUST_LOG",
        default_value = "info",
        value_parser = ["trace", "debug", "info", "warn", "error"],
        help = "Sets the logging verbosity"
    )]
    pub log_level: String
}

impl Args {
    pub fn output_path(&self) -> &PathBuf {
        self.output.as_ref().unwrap_or(&self.roster)
    }
}
