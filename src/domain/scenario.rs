use serde::{Deserialize, Serialize};

use crate::domain::backlog::BacklogItem;
use crate::domain::cash::Cash;
use crate::domain::funnel::{CycleQuality, FunnelCounts, PostCloseRates};
use crate::domain::headcount::HeadcountRow;
use crate::domain::offer::Offer;
use crate::domain::stage::StageConfig;
use crate::services::numeric::{lenient, safe};

pub const DEFAULT_WINDOW_DAYS: f64 = 90.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Window {
    #[serde(default = "default_window_days", deserialize_with = "lenient")]
    pub days: f64,
}

impl Window {
    pub fn weeks(&self) -> f64 {
        safe(self.days / 7.0)
    }
}

impl Default for Window {
    fn default() -> Self {
        Self {
            days: DEFAULT_WINDOW_DAYS,
        }
    }
}

fn default_window_days() -> f64 {
    DEFAULT_WINDOW_DAYS
}

/// Complete input snapshot the calculator works from.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub name: String,
    pub window: Window,
    pub offers: Vec<Offer>,
    pub headcount: Vec<HeadcountRow>,
    pub stages: Vec<StageConfig>,
    pub funnel: FunnelCounts,
    pub cycle: CycleQuality,
    pub post_close: PostCloseRates,
    pub backlog: Vec<BacklogItem>,
    pub cash: Cash,
}
