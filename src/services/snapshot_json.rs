use std::io::Write;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::scenario::Scenario;
use crate::services::capacity::compute_metrics;
use crate::services::metrics_types::CapacityMetrics;

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("failed to encode snapshot json: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("failed to parse snapshot json: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("failed to write snapshot: {0}")]
    Write(#[from] std::io::Error),
}

/// Full input snapshot together with the metrics derived from it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub exported_on: NaiveDate,
    pub inputs: Scenario,
    pub metrics: CapacityMetrics,
}

pub fn build_snapshot(inputs: Scenario, exported_on: NaiveDate) -> Snapshot {
    let metrics = compute_metrics(&inputs);
    Snapshot {
        exported_on,
        inputs,
        metrics,
    }
}

pub fn serialize_snapshot_to_json<W: Write>(
    writer: &mut W,
    snapshot: &Snapshot,
) -> Result<(), SnapshotError> {
    let json = serde_json::to_string_pretty(snapshot).map_err(SnapshotError::Encode)?;
    writer.write_all(json.as_bytes())?;
    writer.write_all(b"\n")?;
    Ok(())
}

pub fn deserialize_snapshot_from_json_str(input: &str) -> Result<Snapshot, SnapshotError> {
    serde_json::from_str(input).map_err(SnapshotError::Parse)
}
