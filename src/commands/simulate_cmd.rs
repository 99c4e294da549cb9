use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::commands::base_commands::Commands;
use crate::commands::report_format::format_summary_report;
use piket::services::event_log_csv::write_event_log_csv_file;
use piket::services::histogram::write_histogram_png;
use piket::services::monte_carlo::{run, run_unseeded};
use piket::services::summary_report::SummaryReport;
use piket::services::timeline_plot::write_timeline_png;

pub fn simulate_command(cmd: Commands) {
    if let Commands::Simulate {
        configuration,
        trials,
        output,
    } = cmd
    {
        let config = match configuration.resolve(trials) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load configuration: {e:?}");
                return;
            }
        };

        info!(
            units = config.unit_count(),
            trials = config.trial_count,
            seed = ?configuration.seed,
            "starting monte carlo simulation"
        );
        let result = match configuration.seed {
            Some(seed) => run(&config, &mut StdRng::seed_from_u64(seed)),
            None => run_unseeded(&config),
        };
        let summary = match result {
            Ok(summary) => summary,
            Err(e) => {
                eprintln!("Failed to run simulation: {e:?}");
                return;
            }
        };
        let report = SummaryReport::new(&config, &summary);

        let yaml = match serde_yaml::to_string(&report) {
            Ok(contents) => contents,
            Err(e) => {
                eprintln!("Failed to serialize simulation summary: {e:?}");
                return;
            }
        };
        if let Err(e) = std::fs::write(&output, yaml) {
            eprintln!("Failed to write simulation summary: {e:?}");
            return;
        }

        let csv_path = format!("{output}.csv");
        if let Err(e) = write_event_log_csv_file(&csv_path, summary.event_log()) {
            eprintln!("Failed to write event log: {e:?}");
        }

        let histogram_path = format!("{output}.png");
        if let Err(e) = write_histogram_png(&histogram_path, &summary.samples) {
            eprintln!("Failed to write simulation histogram: {e:?}");
        }

        let timeline_path = format!("{output}.timeline.png");
        if let Err(e) = write_timeline_png(&timeline_path, summary.event_log()) {
            eprintln!("Failed to write timeline plot: {e:?}");
        }
        info!(output = %output, "simulation artifacts written");

        println!("{}", format_summary_report(&report));
        println!("Simulation summary for {} trials written to {output}", config.trial_count);
        println!("Event log written to {csv_path}");
        println!("Simulation histogram written to {histogram_path}");
        println!("Timeline plot written to {timeline_path}");
    }
}
