use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::commands::base_commands::Commands;
use crate::commands::report_format::format_run_lines;
use piket::services::event_log_csv::write_event_log_csv_file;
use piket::services::single_run::{simulate, simulate_unseeded};
use piket::services::stage_breakdown::stage_breakdown;
use piket::services::statistics::efficiency_percent;
use piket::services::summary_report::RepresentativeRun;

pub fn run_once_command(cmd: Commands) {
    if let Commands::RunOnce { configuration, csv } = cmd {
        let config = match configuration.resolve(None) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load configuration: {e:?}");
                return;
            }
        };

        let result = match configuration.seed {
            Some(seed) => simulate(&config, &mut StdRng::seed_from_u64(seed)),
            None => simulate_unseeded(&config),
        };
        let run = RepresentativeRun {
            total_minutes: result.total_minutes,
            finish_time: config.finish_time(result.total_minutes).format("%H:%M").to_string(),
            efficiency_percent: efficiency_percent(result.total_minutes),
            stages: stage_breakdown(&result.event_log),
        };

        println!("Trays processed: {}", config.unit_count());
        for line in format_run_lines(&run) {
            println!("{line}");
        }

        if let Some(path) = csv {
            match write_event_log_csv_file(&path, &result.event_log) {
                Ok(()) => println!("Event log written to {path}"),
                Err(e) => eprintln!("Failed to write event log: {e:?}"),
            }
        }
    }
}
