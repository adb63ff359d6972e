use tracing::info;

use crate::commands::base_commands::OutputFormat;
use crate::commands::command_error::{write_output, CommandError};
use crate::commands::report_format::format_capacity_report;
use crate::domain::scenario::Scenario;
use crate::services::capacity::compute_metrics;
use crate::services::metrics_types::CapacityMetrics;
use crate::services::numeric::safe;
use crate::services::scenario_yaml::load_scenario_from_file;

/// Loads the scenario at `input`, applying a window override when given.
pub fn load_scenario(input: &str, days: Option<f64>) -> Result<Scenario, CommandError> {
    let mut scenario = load_scenario_from_file(input)?;
    if let Some(days) = days {
        info!(days, "overriding scenario window");
        scenario.window.days = safe(days);
    }
    Ok(scenario)
}

pub fn render_metrics(
    metrics: &CapacityMetrics,
    format: OutputFormat,
) -> Result<String, CommandError> {
    match format {
        OutputFormat::Text => Ok(format_capacity_report(metrics)),
        OutputFormat::Json => {
            serde_json::to_string_pretty(metrics).map_err(CommandError::SerializeJson)
        }
        OutputFormat::Yaml => serde_yaml::to_string(metrics).map_err(CommandError::SerializeYaml),
    }
}

pub fn compute_command(
    input: &str,
    output: Option<&str>,
    format: OutputFormat,
    days: Option<f64>,
) -> Result<(), CommandError> {
    let scenario = load_scenario(input, days)?;
    let metrics = compute_metrics(&scenario);
    info!(
        ceiling = metrics.ceiling.deals_per_week,
        binding_stage = ?metrics.ceiling.binding_stage,
        "computed capacity metrics"
    );
    let rendered = render_metrics(&metrics, format)?;

    match output {
        Some(path) => {
            write_output(path, rendered.as_bytes())?;
            println!("Capacity report written to {path}");
        }
        None => println!("{rendered}"),
    }
    Ok(())
}
