use thiserror::Error;

use crate::services::capacity_plot::CapacityPlotError;
use crate::services::scenario_yaml::ScenarioFileError;
use crate::services::snapshot_json::SnapshotError;

#[derive(Error, Debug)]
pub enum CommandError {
    #[error(transparent)]
    Scenario(#[from] ScenarioFileError),
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
    #[error(transparent)]
    Plot(#[from] CapacityPlotError),
    #[error("invalid export date: {0} (expected YYYY-MM-DD)")]
    InvalidExportDate(String),
    #[error("failed to read snapshot {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("snapshot metrics differ from recomputed metrics")]
    SnapshotMismatch,
    #[error("failed to serialize report json: {0}")]
    SerializeJson(#[source] serde_json::Error),
    #[error("failed to serialize report yaml: {0}")]
    SerializeYaml(#[source] serde_yaml::Error),
    #[error("failed to write {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
}

pub fn write_output(path: &str, contents: &[u8]) -> Result<(), CommandError> {
    std::fs::write(path, contents).map_err(|source| CommandError::Write {
        path: path.to_string(),
        source,
    })
}
