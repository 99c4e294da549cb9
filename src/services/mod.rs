pub mod config_yaml;
pub mod event_log_csv;
pub mod histogram;
pub mod monte_carlo;
pub mod percentiles;
pub mod single_run;
pub mod stage_breakdown;
pub mod statistics;
pub mod summary_report;
pub mod timeline_plot;
