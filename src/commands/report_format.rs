use piket::domain::status::StatusCategory;
use piket::services::summary_report::{RepresentativeRun, SummaryReport};

pub fn status_message(status: StatusCategory) -> &'static str {
    match status {
        StatusCategory::HighlyEfficient => "System is highly efficient",
        StatusCategory::ModeratelyEfficient => "System is moderately efficient",
        StatusCategory::Inefficient => "System is inefficient",
    }
}

pub fn format_summary_report(report: &SummaryReport) -> String {
    let config = &report.configuration;
    let mut lines = Vec::new();
    lines.push("Duty Simulation Report".to_string());
    lines.push(format!(
        "Stations: {} | Workers per station: {} | Trays: {}",
        config.station_count, config.workers_per_station, config.unit_count
    ));
    lines.push(format!("Start: {:02}:00", config.start_hour));
    lines.push(format!("Trials: {}", config.trial_count));
    lines.push(String::new());
    lines.extend(format_run_lines(&report.representative_run));
    lines.push(String::new());
    lines.push("Statistics (minutes):".to_string());
    lines.push("Mean | Min | Max | Std Dev".to_string());
    lines.push("-----|-----|-----|--------".to_string());
    lines.push(format!(
        "{:.2} | {:.2} | {:.2} | {:.2}",
        report.mean, report.min, report.max, report.std_dev
    ));
    lines.push(format!(
        "Quartiles: P25 {:.2} | Median {:.2} | P75 {:.2}",
        report.quartiles.p25, report.quartiles.median, report.quartiles.p75
    ));
    lines.push(format!("Performance score: {:.1}/100", report.performance_score));
    lines.push(format!(
        "Status: {} ({})",
        report.status,
        status_message(report.status)
    ));

    lines.join("\n")
}

pub fn format_run_lines(run: &RepresentativeRun) -> Vec<String> {
    let mut lines = vec![
        format!("Total time: {:.2} minutes", run.total_minutes),
        format!("Finish time: {}", run.finish_time),
        format!("Efficiency: {:.1}%", run.efficiency_percent),
        "Stage | Steps | Share | Minutes".to_string(),
        "------|-------|-------|--------".to_string(),
    ];
    for share in &run.stages {
        lines.push(format!(
            "{} | {} | {:.1}% | {:.2}",
            share.stage,
            share.records,
            share.share * 100.0,
            share.minutes
        ));
    }
    lines
}
