use std::{
    fs::{self, File},
    io::{BufReader, BufWriter, Write},
    path::{Path, PathBuf}
};

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use crate::{
    dataset::dataset_structs::CrewEntry,
    model::{
        error::ScoringError,
        structures::{rank_scores::RankScores, tables::ScoringTables}
    }
};

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error
    },

    #[error("Failed to parse {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error
    },

    #[error("Scoring failed: {0}")]
    Scoring(#[from] ScoringError)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, DatasetError> {
    let file = File::open(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source
    })?;

    serde_json::from_reader(BufReader::new(file)).map_err(|source| DatasetError::Json {
        path: path.to_path_buf(),
        source
    })
}

pub fn load_roster(path: &Path) -> Result<Vec<CrewEntry>, DatasetError> {
    info!("Loading roster from {}", path.display());
    let roster: Vec<CrewEntry> = read_json(path)?;
    info!("Loaded {} crew", roster.len());

    Ok(roster)
}

pub fn load_tables(path: &Path) -> Result<ScoringTables, DatasetError> {
    info!("Loading scoring tables from {}", path.display());
    read_json(path)
}

/// Copies each crew member's scores onto its `ranks.scores` record
pub fn apply_scores(roster: &mut [CrewEntry], scores: &IndexMap<String, RankScores>) {
    for entry in roster.iter_mut() {
        match scores.get(&entry.symbol) {
            Some(s) => entry.ranks.scores = Some(s.clone()),
            None => {
                warn!("No scores for {}, marking unranked", entry.symbol);
                entry.ranks.scores = Some(RankScores::unranked());
            }
        }
    }
}

/// Writes the roster to a sibling temporary file, then renames it over
/// `path`. A failed write leaves the existing dataset untouched.
pub fn save_roster(path: &Path, roster: &[CrewEntry]) -> Result<(), DatasetError> {
    let tmp_path = temp_path(path);
    let io_err = |source| DatasetError::Io {
        path: tmp_path.clone(),
        source
    };

    let result = File::create(&tmp_path).map_err(io_err).and_then(|file| {
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, roster).map_err(|source| DatasetError::Json {
            path: tmp_path.clone(),
            source
        })?;
        writer.flush().map_err(io_err)
    });

    if let Err(e) = result {
        let _ = fs::remove_file(&tmp_path);
        return Err(e);
    }

    fs::rename(&tmp_path, path).map_err(|source| {
        let _ = fs::remove_file(&tmp_path);
        DatasetError::Io {
            path: path.to_path_buf(),
            source
        }
    })?;

    info!("Saved {} crew to {}", roster.len(), path.display());
    Ok(())
}

fn temp_path(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "roster.json".to_string());

    path.with_file_name(format!(".{}.{}.tmp", file_name, Uuid::new_v4()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::structures::grade::Grade;

    #[test]
    fn test_temp_path_is_sibling() {
        let path = Path::new("/data/crew.json");
        let tmp = temp_path(path);

        assert_eq!(tmp.parent(), Some(Path::new("/data")));
        let name = tmp.file_name().unwrap().to_string_lossy();
        assert!(name.starts_with(".crew.json."));
        assert!(name.ends_with(".tmp"));
    }

    #[test]
    fn test_missing_file() {
        let err = load_roster(Path::new("/definitely/not/here.json")).unwrap_err();

        assert!(matches!(err, DatasetError::Io { .. }));
    }

    #[test]
    fn test_apply_scores_marks_missing_unranked() {
        let mut roster: Vec<CrewEntry> = serde_json::from_str(
            r#"[{ "symbol": "a", "max_rarity": 1, "date_added": "2016-01-01T00:00:00Z" }]"#
        )
        .unwrap();

        apply_scores(&mut roster, &IndexMap::new());

        let scores = roster[0].ranks.scores.as_ref().unwrap();
        assert_eq!(scores.overall_grade, Grade::Unranked);
        assert_eq!(scores.overall_rank, -1);
    }
}
