use std::fmt;

use serde::{Deserialize, Serialize};

use crate::services::numeric::lenient;

/// Pipeline stages in funnel order. Everything up to and including
/// [`Stage::CloseWon`] is pre-close.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Awareness,
    Lead,
    Qualified,
    Booked,
    Show,
    Proposal,
    CloseWon,
    Onboarding,
    Aha,
    Delivery,
    #[serde(alias = "expansion")]
    Renewal,
}

impl Stage {
    pub const ALL: [Stage; 11] = [
        Stage::Awareness,
        Stage::Lead,
        Stage::Qualified,
        Stage::Booked,
        Stage::Show,
        Stage::Proposal,
        Stage::CloseWon,
        Stage::Onboarding,
        Stage::Aha,
        Stage::Delivery,
        Stage::Renewal,
    ];

    pub fn is_pre_close(self) -> bool {
        self <= Stage::CloseWon
    }

    pub fn label(self) -> &'static str {
        match self {
            Stage::Awareness => "Awareness",
            Stage::Lead => "Lead",
            Stage::Qualified => "Qualified",
            Stage::Booked => "Booked",
            Stage::Show => "Show",
            Stage::Proposal => "Proposal",
            Stage::CloseWon => "Close Won",
            Stage::Onboarding => "Onboarding",
            Stage::Aha => "Aha",
            Stage::Delivery => "Delivery",
            Stage::Renewal => "Renewal/Expansion",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Staffing and efficiency assumptions for one pipeline stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageConfig {
    pub stage: Stage,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub owner: String,
    #[serde(default, deserialize_with = "lenient")]
    pub fte: f64,
    #[serde(default, deserialize_with = "lenient")]
    pub focus_hours: f64,
    #[serde(default, deserialize_with = "lenient")]
    pub utilization: f64,
    /// Units processed per focused hour.
    #[serde(default, deserialize_with = "lenient")]
    pub std_rate: f64,
    #[serde(rename = "yield", default, deserialize_with = "lenient")]
    pub yield_rate: f64,
}

impl StageConfig {
    pub fn new(stage: Stage) -> Self {
        Self {
            stage,
            unit: String::new(),
            owner: String::new(),
            fte: 0.0,
            focus_hours: 0.0,
            utilization: 0.0,
            std_rate: 0.0,
            yield_rate: 0.0,
        }
    }
}
