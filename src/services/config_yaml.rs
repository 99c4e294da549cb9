use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::domain::configuration::{Configuration, ConfigurationError};

#[derive(Error, Debug)]
pub enum ConfigYamlError {
    #[error("failed to read configuration file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse configuration file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error(transparent)]
    Invalid(#[from] ConfigurationError),
}

/// Every field is optional; missing fields fall back to
/// [`Configuration::default`].
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigurationRecord {
    station_count: Option<usize>,
    workers_per_station: Option<usize>,
    start_hour: Option<u32>,
    trial_count: Option<usize>,
    animation_delay: Option<f64>,
}

impl ConfigurationRecord {
    fn into_configuration(self) -> Configuration {
        let defaults = Configuration::default();
        Configuration {
            station_count: self.station_count.unwrap_or(defaults.station_count),
            workers_per_station: self
                .workers_per_station
                .unwrap_or(defaults.workers_per_station),
            start_hour: self.start_hour.unwrap_or(defaults.start_hour),
            trial_count: self.trial_count.unwrap_or(defaults.trial_count),
            animation_delay: self.animation_delay.unwrap_or(defaults.animation_delay),
        }
    }
}

pub fn deserialize_configuration_from_yaml_str(
    yaml: &str,
) -> Result<Configuration, serde_yaml::Error> {
    // An empty document deserializes to unit, not to an empty mapping.
    if yaml.trim().is_empty() {
        return Ok(Configuration::default());
    }
    let record: ConfigurationRecord = serde_yaml::from_str(yaml)?;
    Ok(record.into_configuration())
}

/// Loads and validates a configuration file.
pub fn load_configuration_from_yaml_file<P: AsRef<Path>>(
    path: P,
) -> Result<Configuration, ConfigYamlError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigYamlError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config =
        deserialize_configuration_from_yaml_str(&contents).map_err(|source| {
            ConfigYamlError::Parse {
                path: path.to_path_buf(),
                source,
            }
        })?;
    config.validate()?;
    config.validate_start_hour()?;
    Ok(config)
}
