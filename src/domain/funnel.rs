use serde::{Deserialize, Serialize};

use crate::domain::stage::Stage;
use crate::services::numeric::lenient;

/// Raw counts observed per pre-close stage over the analysis window.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FunnelCounts {
    #[serde(deserialize_with = "lenient")]
    pub awareness: f64,
    #[serde(deserialize_with = "lenient")]
    pub lead: f64,
    #[serde(deserialize_with = "lenient")]
    pub qualified: f64,
    #[serde(deserialize_with = "lenient")]
    pub booked: f64,
    #[serde(deserialize_with = "lenient")]
    pub show: f64,
    #[serde(deserialize_with = "lenient")]
    pub proposal: f64,
    #[serde(deserialize_with = "lenient")]
    pub close_won: f64,
}

impl FunnelCounts {
    /// Observed count for a stage; `None` past close, where nothing is counted.
    pub fn count(&self, stage: Stage) -> Option<f64> {
        match stage {
            Stage::Awareness => Some(self.awareness),
            Stage::Lead => Some(self.lead),
            Stage::Qualified => Some(self.qualified),
            Stage::Booked => Some(self.booked),
            Stage::Show => Some(self.show),
            Stage::Proposal => Some(self.proposal),
            Stage::CloseWon => Some(self.close_won),
            Stage::Onboarding | Stage::Aha | Stage::Delivery | Stage::Renewal => None,
        }
    }
}

/// Lag between stages in days plus the quality rates observed in the funnel.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CycleQuality {
    #[serde(deserialize_with = "lenient")]
    pub lead_to_booked_days: f64,
    #[serde(deserialize_with = "lenient")]
    pub booked_to_show_days: f64,
    #[serde(deserialize_with = "lenient")]
    pub show_to_proposal_days: f64,
    #[serde(deserialize_with = "lenient")]
    pub proposal_to_close_days: f64,
    #[serde(deserialize_with = "lenient")]
    pub no_show_rate: f64,
    #[serde(deserialize_with = "lenient")]
    pub proposal_win_rate: f64,
}

impl CycleQuality {
    pub fn sales_cycle_days(&self) -> f64 {
        self.lead_to_booked_days
            + self.booked_to_show_days
            + self.show_to_proposal_days
            + self.proposal_to_close_days
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PostCloseRates {
    #[serde(deserialize_with = "lenient")]
    pub activation_rate: f64,
    #[serde(deserialize_with = "lenient")]
    pub renewal_rate: f64,
    #[serde(deserialize_with = "lenient")]
    pub expansion_rate: f64,
}
