pub mod capacity;
pub mod capacity_plot;
pub mod metrics_types;
pub mod numeric;
pub mod scenario_yaml;
pub mod snapshot_json;
