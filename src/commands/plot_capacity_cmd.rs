use crate::commands::command_error::CommandError;
use crate::commands::compute_cmd::load_scenario;
use crate::services::capacity::compute_metrics;
use crate::services::capacity_plot::plot_capacity_png;

pub fn plot_capacity_command(input: &str, output: &str) -> Result<(), CommandError> {
    let scenario = load_scenario(input, None)?;
    let metrics = compute_metrics(&scenario);
    plot_capacity_png(output, &metrics)?;
    println!("Capacity chart written to {output}");
    Ok(())
}
