use crate::domain::offer::Offer;
use crate::domain::scenario::Scenario;
use crate::domain::stage::{Stage, StageConfig};

pub fn staffed_stage(
    stage: Stage,
    fte: f64,
    focus_hours: f64,
    utilization: f64,
    std_rate: f64,
    yield_rate: f64,
) -> StageConfig {
    StageConfig {
        stage,
        unit: "units".to_string(),
        owner: "Team".to_string(),
        fte,
        focus_hours,
        utilization,
        std_rate,
        yield_rate,
    }
}

// Unstaffed rows still carry the dashboard's default utilization and yield.
pub fn unstaffed_stage(stage: Stage) -> StageConfig {
    staffed_stage(stage, 0.0, 0.0, 0.85, 0.0, 1.0)
}

pub fn offer(name: &str, asp: f64, gross_margin: f64, share: f64) -> Offer {
    Offer {
        name: name.to_string(),
        asp,
        gross_margin,
        share,
    }
}

pub fn scenario_with_stages(stages: Vec<StageConfig>) -> Scenario {
    Scenario {
        name: "Test".to_string(),
        stages,
        ..Scenario::default()
    }
}
