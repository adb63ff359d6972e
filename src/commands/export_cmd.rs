use chrono::NaiveDate;

use crate::commands::command_error::{write_output, CommandError};
use crate::commands::compute_cmd::load_scenario;
use crate::services::snapshot_json::{build_snapshot, serialize_snapshot_to_json};

pub fn export_command(
    input: &str,
    output: &str,
    days: Option<f64>,
    exported_on: &str,
) -> Result<(), CommandError> {
    let exported_on = NaiveDate::parse_from_str(exported_on, "%Y-%m-%d")
        .map_err(|_| CommandError::InvalidExportDate(exported_on.to_string()))?;
    let scenario = load_scenario(input, days)?;
    let snapshot = build_snapshot(scenario, exported_on);

    let mut buffer = Vec::new();
    serialize_snapshot_to_json(&mut buffer, &snapshot)?;
    write_output(output, &buffer)?;
    println!("Snapshot written to {output}");
    Ok(())
}
