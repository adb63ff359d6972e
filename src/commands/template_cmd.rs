use crate::commands::command_error::{write_output, CommandError};
use crate::services::scenario_yaml::{default_scenario, serialize_scenario_to_yaml};

pub fn template_command(output: &str) -> Result<(), CommandError> {
    let mut buffer = Vec::new();
    serialize_scenario_to_yaml(&mut buffer, &default_scenario()).map_err(|source| {
        CommandError::Write {
            path: output.to_string(),
            source,
        }
    })?;
    write_output(output, &buffer)?;
    println!("Scenario template written to {output}");
    Ok(())
}
