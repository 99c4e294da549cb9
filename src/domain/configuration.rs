use chrono::{Duration, NaiveTime};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Input for one simulation invocation.
///
/// Only [`Configuration::unit_count`] reaches the engine. `start_hour` and
/// `animation_delay` are carried for the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    pub station_count: usize,
    pub workers_per_station: usize,
    pub start_hour: u32,
    pub trial_count: usize,
    pub animation_delay: f64,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            station_count: 60,
            workers_per_station: 3,
            start_hour: 7,
            trial_count: 200,
            animation_delay: 0.005,
        }
    }
}

impl Configuration {
    pub fn new(station_count: usize, workers_per_station: usize, trial_count: usize) -> Self {
        Self {
            station_count,
            workers_per_station,
            trial_count,
            ..Self::default()
        }
    }

    pub fn with_start_hour(mut self, start_hour: u32) -> Self {
        self.start_hour = start_hour;
        self
    }

    pub fn with_animation_delay(mut self, animation_delay: f64) -> Self {
        self.animation_delay = animation_delay;
        self
    }

    /// Total number of trays to service: stations times workers per station.
    ///
    /// Saturates instead of overflowing; [`Configuration::validate`] rejects
    /// configurations whose product does not fit.
    pub fn unit_count(&self) -> usize {
        self.station_count.saturating_mul(self.workers_per_station)
    }

    /// Checks the fields the engine depends on.
    ///
    /// # Errors
    /// - `trial_count`, `station_count` or `workers_per_station` is zero.
    /// - The unit count overflows `usize`.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.trial_count < 1 {
            return Err(ConfigurationError::InvalidConfiguration(
                "trial count must be greater than zero".to_string(),
            ));
        }
        if self.station_count < 1 {
            return Err(ConfigurationError::InvalidConfiguration(
                "station count must be greater than zero".to_string(),
            ));
        }
        if self.workers_per_station < 1 {
            return Err(ConfigurationError::InvalidConfiguration(
                "workers per station must be greater than zero".to_string(),
            ));
        }
        if self
            .station_count
            .checked_mul(self.workers_per_station)
            .is_none()
        {
            return Err(ConfigurationError::InvalidConfiguration(
                "unit count overflows".to_string(),
            ));
        }
        Ok(())
    }

    /// Checks the display-only start hour. The engine never reads it, so
    /// only the presentation layer calls this.
    pub fn validate_start_hour(&self) -> Result<(), ConfigurationError> {
        if self.start_hour > 23 {
            return Err(ConfigurationError::InvalidConfiguration(format!(
                "start hour must be between 0 and 23, got {}",
                self.start_hour
            )));
        }
        Ok(())
    }

    /// Wall-clock time at which a run of `total_minutes` finishes when it
    /// starts at `start_hour:00`. Wraps past midnight.
    pub fn finish_time(&self, total_minutes: f64) -> NaiveTime {
        let start = NaiveTime::from_hms_opt(self.start_hour.min(23), 0, 0).unwrap_or_default();
        let elapsed = Duration::milliseconds((total_minutes.max(0.0) * 60_000.0).round() as i64);
        let (finish, _) = start.overflowing_add_signed(elapsed);
        finish
    }
}
