//! Monte Carlo model of a canteen duty rotation: fill every tray, carry the
//! trays out in batches, then top each one up with rice.
//!
//! [`simulate`] produces one run with its event log; [`run`] repeats it and
//! summarizes the sample.

pub mod domain;
pub mod services;

#[cfg(test)]
pub(crate) mod test_support;

pub use domain::configuration::{Configuration, ConfigurationError};
pub use domain::stage::{EventRecord, Stage};
pub use domain::status::StatusCategory;
pub use services::monte_carlo::{run, run_unseeded, MonteCarloError, SampleSummary};
pub use services::single_run::{simulate, simulate_unseeded, RunResult};
