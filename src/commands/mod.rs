pub mod base_commands;
pub mod command_error;
pub mod compute_cmd;
pub mod export_cmd;
pub mod plot_capacity_cmd;
pub mod report_format;
pub mod template_cmd;
pub mod verify_cmd;
