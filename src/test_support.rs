use rand::rngs::mock::StepRng;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::domain::configuration::Configuration;

pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

// Every uniform draw from this source lands on its lower bound.
pub fn minimum_draws_rng() -> StepRng {
    StepRng::new(0, 0)
}

/// A configuration for one simulated run.
pub fn single_run_config(stations: usize, workers: usize) -> Configuration {
    Configuration::new(stations, workers, 1)
}

/// Ten stations with two workers each: 20 trays.
pub fn twenty_tray_config(trials: usize) -> Configuration {
    Configuration::new(10, 2, trials)
}
