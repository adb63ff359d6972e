use serde::{Deserialize, Serialize};

use crate::services::numeric::lenient;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HeadcountRow {
    #[serde(default)]
    pub role: String,
    #[serde(default, deserialize_with = "lenient")]
    pub fte: f64,
    #[serde(default, deserialize_with = "lenient")]
    pub contractors: f64,
    #[serde(default, deserialize_with = "lenient")]
    pub focus_hours: f64,
    #[serde(default, deserialize_with = "lenient")]
    pub utilization: f64,
}
