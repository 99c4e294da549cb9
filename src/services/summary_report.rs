use serde::Serialize;

use crate::domain::configuration::Configuration;
use crate::domain::status::StatusCategory;
use crate::services::monte_carlo::SampleSummary;
use crate::services::percentiles::Quartiles;
use crate::services::stage_breakdown::{stage_breakdown, StageShare};

#[derive(Serialize, Debug, Clone)]
pub struct ConfigurationEcho {
    pub station_count: usize,
    pub workers_per_station: usize,
    pub unit_count: usize,
    pub start_hour: u32,
    pub trial_count: usize,
}

#[derive(Serialize, Debug, Clone)]
pub struct RepresentativeRun {
    pub total_minutes: f64,
    /// Wall-clock finish as `HH:MM`.
    pub finish_time: String,
    pub efficiency_percent: f64,
    pub stages: Vec<StageShare>,
}

#[derive(Serialize, Debug, Clone)]
pub struct SummaryReport {
    pub configuration: ConfigurationEcho,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    pub std_dev: f64,
    pub quartiles: Quartiles,
    pub performance_score: f64,
    pub status: StatusCategory,
    pub representative_run: RepresentativeRun,
    pub samples: Vec<f64>,
}

impl SummaryReport {
    pub fn new(config: &Configuration, summary: &SampleSummary) -> Self {
        let representative = &summary.representative;
        Self {
            configuration: ConfigurationEcho {
                station_count: config.station_count,
                workers_per_station: config.workers_per_station,
                unit_count: config.unit_count(),
                start_hour: config.start_hour,
                trial_count: config.trial_count,
            },
            mean: summary.mean,
            min: summary.min,
            max: summary.max,
            std_dev: summary.std_dev,
            quartiles: summary.quartiles,
            performance_score: summary.performance_score,
            status: summary.status,
            representative_run: RepresentativeRun {
                total_minutes: representative.total_minutes,
                finish_time: config
                    .finish_time(representative.total_minutes)
                    .format("%H:%M")
                    .to_string(),
                efficiency_percent: summary.efficiency_percent,
                stages: stage_breakdown(&representative.event_log),
            },
            samples: summary.samples.clone(),
        }
    }
}
