use serde::{Deserialize, Serialize};

use crate::services::numeric::lenient;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Cash {
    /// Customer acquisition cost.
    #[serde(deserialize_with = "lenient")]
    pub cac: f64,
    /// Days sales outstanding.
    #[serde(deserialize_with = "lenient")]
    pub dso_days: f64,
    #[serde(deserialize_with = "lenient")]
    pub payback_days: f64,
    #[serde(deserialize_with = "lenient")]
    pub prepay_share: f64,
}
