use rand::Rng;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::domain::configuration::{Configuration, ConfigurationError};
use crate::domain::stage::EventRecord;
use crate::domain::status::StatusCategory;
use crate::services::percentiles::{quartiles, Quartiles};
use crate::services::single_run::{simulate, RunResult};
use crate::services::statistics;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MonteCarloError {
    #[error(transparent)]
    InvalidConfiguration(#[from] ConfigurationError),
}

/// Outcome of one aggregator invocation.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SampleSummary {
    pub trial_count: usize,
    pub unit_count: usize,
    /// Total minutes per trial, in trial order.
    pub samples: Vec<f64>,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    pub std_dev: f64,
    pub quartiles: Quartiles,
    /// Single-run efficiency of the representative run.
    pub efficiency_percent: f64,
    /// Aggregate score derived from the sample mean.
    pub performance_score: f64,
    pub status: StatusCategory,
    /// The last trial, retained for detailed display.
    pub representative: RunResult,
}

impl SampleSummary {
    pub fn event_log(&self) -> &[EventRecord] {
        &self.representative.event_log
    }
}

pub fn run_unseeded(config: &Configuration) -> Result<SampleSummary, MonteCarloError> {
    let mut rng = rand::thread_rng();
    run(config, &mut rng)
}

/// Runs `trial_count` independent simulations in order and summarizes
/// their total durations.
pub fn run<R: Rng + ?Sized>(
    config: &Configuration,
    rng: &mut R,
) -> Result<SampleSummary, MonteCarloError> {
    config.validate()?;

    let mut samples = Vec::with_capacity(config.trial_count);
    let mut representative = simulate(config, rng);
    samples.push(representative.total_minutes);
    for _ in 1..config.trial_count {
        representative = simulate(config, rng);
        samples.push(representative.total_minutes);
    }

    let mean = statistics::mean(&samples);
    let summary = SampleSummary {
        trial_count: config.trial_count,
        unit_count: config.unit_count(),
        mean,
        min: statistics::min(&samples),
        max: statistics::max(&samples),
        std_dev: statistics::population_std_dev(&samples),
        quartiles: quartiles(&samples),
        efficiency_percent: statistics::efficiency_percent(representative.total_minutes),
        performance_score: statistics::performance_score(mean),
        status: StatusCategory::classify(mean),
        representative,
        samples,
    };
    debug!(
        trial_count = summary.trial_count,
        mean = summary.mean,
        std_dev = summary.std_dev,
        status = %summary.status,
        "monte carlo run finished"
    );
    Ok(summary)
}
