use serde::{Deserialize, Serialize};

use crate::services::numeric::lenient;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Offer {
    #[serde(default)]
    pub name: String,
    /// Average selling price.
    #[serde(default, deserialize_with = "lenient")]
    pub asp: f64,
    #[serde(default, deserialize_with = "lenient")]
    pub gross_margin: f64,
    /// Share of revenue carried by this offer. Shares across offers are
    /// not required to sum to one.
    #[serde(default, deserialize_with = "lenient")]
    pub share: f64,
}
