pub mod base_commands;
pub mod completions_cmd;
pub mod report_format;
pub mod run_once_cmd;
pub mod simulate_cmd;
