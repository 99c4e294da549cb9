use plotters::prelude::*;
use thiserror::Error;

use crate::domain::stage::{EventRecord, Stage};

#[derive(Error, Debug)]
pub enum TimelinePlotError {
    #[error("event log is empty")]
    EmptyLog,
    #[error("failed to render timeline plot: {0}")]
    Plot(String),
}

fn stage_color(stage: Stage) -> RGBColor {
    match stage {
        Stage::Fill => RGBColor(30, 122, 204),
        Stage::Transport => RGBColor(230, 126, 34),
        Stage::Replenish => RGBColor(39, 174, 96),
    }
}

/// Plots cumulative minutes against step index, one colored series per stage.
pub fn write_timeline_png(
    output_path: &str,
    event_log: &[EventRecord],
) -> Result<(), TimelinePlotError> {
    let last = event_log.last().ok_or(TimelinePlotError::EmptyLog)?;
    let max_x = event_log.len() as i32;
    let max_y = last.cumulative_minutes.max(1.0) * 1.05;

    let root = BitMapBackend::new(output_path, (900, 600)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| TimelinePlotError::Plot(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Progress Kumulatif", ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(65)
        .build_cartesian_2d(0..max_x, 0.0..max_y)
        .map_err(|e| TimelinePlotError::Plot(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Step")
        .y_desc("Cumulative minutes")
        .label_style(("sans-serif", 18))
        .axis_desc_style(("sans-serif", 22))
        .draw()
        .map_err(|e| TimelinePlotError::Plot(e.to_string()))?;

    for stage in Stage::ALL {
        let color = stage_color(stage);
        let points: Vec<(i32, f64)> = event_log
            .iter()
            .enumerate()
            .filter(|(_, record)| record.stage == stage)
            .map(|(step, record)| (step as i32, record.cumulative_minutes))
            .collect();
        if points.is_empty() {
            continue;
        }
        chart
            .draw_series(LineSeries::new(points, color.stroke_width(2)))
            .map_err(|e| TimelinePlotError::Plot(e.to_string()))?
            .label(stage.label())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(|e| TimelinePlotError::Plot(e.to_string()))?;

    root.present()
        .map_err(|e| TimelinePlotError::Plot(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::configuration::Configuration;
    use crate::services::single_run::simulate;
    use crate::test_support::seeded_rng;
    use predicates::prelude::*;

    #[test]
    fn write_timeline_png_writes_file() {
        let run = simulate(&Configuration::new(3, 2, 1), &mut seeded_rng(8));
        let output = assert_fs::NamedTempFile::new("timeline.png").unwrap();

        write_timeline_png(output.path().to_str().unwrap(), &run.event_log).unwrap();

        assert!(predicate::path::exists().eval(output.path()));
        assert!(std::fs::metadata(output.path()).unwrap().len() > 0);
    }

    #[test]
    fn write_timeline_png_rejects_empty_log() {
        let output = assert_fs::NamedTempFile::new("empty.png").unwrap();
        let error = write_timeline_png(output.path().to_str().unwrap(), &[])
            .expect_err("expected empty log error");
        assert!(matches!(error, TimelinePlotError::EmptyLog));
    }
}
