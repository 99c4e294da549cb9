use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use piket::domain::configuration::Configuration;
use piket::services::config_yaml::{load_configuration_from_yaml_file, ConfigYamlError};

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

/// Duty rotation parameters. Flags override values from `--config`.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigurationArgs {
    /// Optional configuration YAML file
    #[arg(short, long)]
    pub config: Option<String>,
    /// Number of stations (tables)
    #[arg(long)]
    pub stations: Option<usize>,
    /// Workers per station
    #[arg(short, long)]
    pub workers: Option<usize>,
    /// Hour of day the duty starts (0-23)
    #[arg(long)]
    pub start_hour: Option<u32>,
    /// Seed for a reproducible random source
    #[arg(long)]
    pub seed: Option<u64>,
}

impl ConfigurationArgs {
    /// Builds the configuration from the optional file, then applies flag
    /// overrides and validates the result.
    pub fn resolve(&self, trials: Option<usize>) -> Result<Configuration, ConfigYamlError> {
        let mut config = match &self.config {
            Some(path) => load_configuration_from_yaml_file(path)?,
            None => Configuration::default(),
        };
        if let Some(stations) = self.stations {
            config.station_count = stations;
        }
        if let Some(workers) = self.workers {
            config.workers_per_station = workers;
        }
        if let Some(start_hour) = self.start_hour {
            config.start_hour = start_hour;
        }
        if let Some(trials) = trials {
            config.trial_count = trials;
        }
        config.validate()?;
        config.validate_start_hour()?;
        Ok(config)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the Monte Carlo simulation and write the summary, event log and charts
    Simulate {
        #[command(flatten)]
        configuration: ConfigurationArgs,
        /// Number of Monte Carlo trials
        #[arg(short = 'n', long)]
        trials: Option<usize>,
        /// Output YAML file
        #[arg(short, long)]
        output: String,
    },
    /// Simulate a single duty run and print its timing
    RunOnce {
        #[command(flatten)]
        configuration: ConfigurationArgs,
        /// Optional CSV file for the event log
        #[arg(long)]
        csv: Option<String>,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
