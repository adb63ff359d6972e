use tracing::warn;

use crate::commands::command_error::CommandError;
use crate::services::capacity::compute_metrics;
use crate::services::snapshot_json::deserialize_snapshot_from_json_str;

pub fn verify_command(input: &str) -> Result<(), CommandError> {
    let contents = std::fs::read_to_string(input).map_err(|source| CommandError::Read {
        path: input.to_string(),
        source,
    })?;
    let snapshot = deserialize_snapshot_from_json_str(&contents)?;

    if compute_metrics(&snapshot.inputs) != snapshot.metrics {
        warn!(path = input, "snapshot metrics are stale");
        return Err(CommandError::SnapshotMismatch);
    }
    println!("Snapshot metrics reproduced from {input}");
    Ok(())
}
