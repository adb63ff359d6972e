use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;
use tracing::info;

use crate::domain::backlog::BacklogItem;
use crate::domain::headcount::HeadcountRow;
use crate::domain::offer::Offer;
use crate::domain::scenario::{Scenario, Window};
use crate::domain::stage::{Stage, StageConfig};

#[derive(Error, Debug)]
pub enum ScenarioFileError {
    #[error("failed to read scenario file {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse scenario yaml {path}: {source}")]
    ParseYaml {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("failed to parse scenario json {path}: {source}")]
    ParseJson {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Loads a scenario from `path`. Files ending in `.json` are read as JSON
/// (an exported snapshot is accepted and its `inputs` are used), anything
/// else as YAML.
pub fn load_scenario_from_file(path: &str) -> Result<Scenario, ScenarioFileError> {
    let file_path = Path::new(path);
    let contents = std::fs::read_to_string(file_path).map_err(|source| ScenarioFileError::Read {
        path: file_path.to_path_buf(),
        source,
    })?;

    let is_json = file_path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let scenario = if is_json {
        deserialize_scenario_from_json_str(&contents).map_err(|source| {
            ScenarioFileError::ParseJson {
                path: file_path.to_path_buf(),
                source,
            }
        })?
    } else {
        deserialize_scenario_from_yaml_str(&contents).map_err(|source| {
            ScenarioFileError::ParseYaml {
                path: file_path.to_path_buf(),
                source,
            }
        })?
    };

    info!(
        path,
        stages = scenario.stages.len(),
        offers = scenario.offers.len(),
        "loaded scenario"
    );
    Ok(scenario)
}

pub fn deserialize_scenario_from_yaml_str(input: &str) -> Result<Scenario, serde_yaml::Error> {
    serde_yaml::from_str(input)
}

/// JSON input is either an exported snapshot, whose `inputs` object is the
/// scenario, or a bare scenario object.
pub fn deserialize_scenario_from_json_str(input: &str) -> Result<Scenario, serde_json::Error> {
    let mut document: Value = serde_json::from_str(input)?;
    let inputs = document
        .as_object_mut()
        .and_then(|object| object.remove("inputs"));
    let scenario = match inputs {
        Some(inputs) => inputs,
        None => document,
    };
    serde_json::from_value(scenario)
}

pub fn serialize_scenario_to_yaml<W: Write>(writer: &mut W, scenario: &Scenario) -> io::Result<()> {
    let yaml = serde_yaml::to_string(scenario).map_err(io::Error::other)?;
    writer.write_all(yaml.as_bytes())
}

/// Starting point for a new scenario: the booked, show and proposal stages,
/// with only proposal staffed.
pub fn default_scenario() -> Scenario {
    let row = |stage: Stage, unit: &str, owner: &str| StageConfig {
        unit: unit.to_string(),
        owner: owner.to_string(),
        utilization: 0.85,
        yield_rate: 1.0,
        ..StageConfig::new(stage)
    };

    let stages = vec![
        row(Stage::Booked, "meetings", "SDR"),
        row(Stage::Show, "meetings", "AE"),
        StageConfig {
            fte: 1.0,
            focus_hours: 20.0,
            std_rate: 1.0,
            yield_rate: 0.95,
            ..row(Stage::Proposal, "proposals", "AE")
        },
    ];
    let backlog = stages
        .iter()
        .map(|config| BacklogItem {
            stage: config.stage,
            units: 0.0,
        })
        .collect();

    Scenario {
        name: "Default".to_string(),
        window: Window::default(),
        offers: vec![Offer {
            name: "Core".to_string(),
            asp: 5000.0,
            gross_margin: 0.7,
            share: 1.0,
        }],
        headcount: vec![HeadcountRow {
            role: "AE".to_string(),
            fte: 1.0,
            contractors: 0.0,
            focus_hours: 20.0,
            utilization: 0.85,
        }],
        stages,
        backlog,
        ..Scenario::default()
    }
}
