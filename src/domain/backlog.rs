use serde::{Deserialize, Serialize};

use crate::domain::stage::Stage;
use crate::services::numeric::lenient;

/// Units queued in front of a stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BacklogItem {
    pub stage: Stage,
    #[serde(default, deserialize_with = "lenient")]
    pub units: f64,
}
