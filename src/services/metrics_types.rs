use serde::{Deserialize, Serialize};

use crate::domain::stage::Stage;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UtilizationFlag {
    Healthy,
    Constraint,
}

impl UtilizationFlag {
    pub fn label(self) -> &'static str {
        match self {
            UtilizationFlag::Healthy => "Healthy",
            UtilizationFlag::Constraint => "Constraint",
        }
    }
}

/// Display hint for queued work; it does not feed any other calculation.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BacklogHint {
    WithinOneWeek,
    OverOneWeek,
}

impl BacklogHint {
    pub fn label(self) -> &'static str {
        match self {
            BacklogHint::WithinOneWeek => "<=1 week",
            BacklogHint::OverOneWeek => ">1 week",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StageConversion {
    pub from: Stage,
    pub to: Stage,
    pub rate: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StageMetrics {
    pub stage: Stage,
    pub weekly_capacity: f64,
    pub downstream_conversion: f64,
    pub deals_per_week: f64,
    pub utilization: f64,
    pub utilization_flag: UtilizationFlag,
    pub backlog_units: f64,
    pub backlog_weeks: f64,
    pub backlog_hint: BacklogHint,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ThroughputCeiling {
    pub deals_per_week: f64,
    pub binding_stage: Option<Stage>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WindowProjection {
    pub days: f64,
    pub weeks: f64,
    pub deals: f64,
    pub revenue: f64,
    pub gross_profit: f64,
    pub rfte_ceiling: f64,
    pub activated_accounts: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CashAdequacy {
    pub gross_profit_per_day: f64,
    pub gross_profit_30d: f64,
    pub ratio: f64,
    pub flagged: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CapacityMetrics {
    pub weighted_asp: f64,
    pub weighted_gross_margin: f64,
    pub total_fte: f64,
    pub total_contractors: f64,
    pub team_focus_hours: f64,
    pub sales_cycle_days: f64,
    pub conversions: Vec<StageConversion>,
    pub stages: Vec<StageMetrics>,
    pub ceiling: ThroughputCeiling,
    pub projection: WindowProjection,
    pub cash: CashAdequacy,
}
