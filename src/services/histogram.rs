use plotters::prelude::*;
use thiserror::Error;

pub const HISTOGRAM_BINS: usize = 30;

#[derive(Error, Debug)]
pub enum HistogramError {
    #[error("failed to render histogram: {0}")]
    Render(String),
}

/// Counts `values` into `bins` equal-width buckets spanning `[min, max]`.
/// The maximum lands in the last bucket. Returns the bucket width with the
/// counts; a sample with no spread gets a width of 1 and a single bucket
/// holding everything.
pub fn bin_counts(values: &[f64], bins: usize) -> (f64, Vec<usize>) {
    let bins = bins.max(1);
    if values.is_empty() {
        return (1.0, vec![0; bins]);
    }
    let min_value = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max_value = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max_value - min_value;
    if range <= f64::EPSILON {
        let mut counts = vec![0; bins];
        counts[0] = values.len();
        return (1.0, counts);
    }

    let width = range / bins as f64;
    let mut counts = vec![0; bins];
    for value in values {
        let bucket = (((value - min_value) / width) as usize).min(bins - 1);
        counts[bucket] += 1;
    }
    (width, counts)
}

pub fn write_histogram_png(output_path: &str, samples: &[f64]) -> Result<(), HistogramError> {
    if samples.is_empty() {
        return Ok(());
    }

    let min_value = samples.iter().copied().fold(f64::INFINITY, f64::min);
    let (bin_width, counts) = bin_counts(samples, HISTOGRAM_BINS);
    let max_count = counts.iter().copied().max().unwrap_or(1);

    let root = BitMapBackend::new(output_path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| HistogramError::Render(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Distribusi Waktu", ("sans-serif", 30))
        .x_label_area_size(55)
        .y_label_area_size(65)
        .build_cartesian_2d(0..counts.len() as i32, 0..(max_count + 1))
        .map_err(|e| HistogramError::Render(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("Total duration in minutes")
        .y_desc("Frequency")
        .label_style(("sans-serif", 18))
        .axis_desc_style(("sans-serif", 22))
        .x_labels(10)
        .x_label_formatter(&|bucket| format!("{:.1}", min_value + *bucket as f64 * bin_width))
        .draw()
        .map_err(|e| HistogramError::Render(e.to_string()))?;

    let bar_color = RGBColor(30, 122, 204);
    let bar_style = ShapeStyle::from(&bar_color).filled();
    chart
        .draw_series(counts.iter().enumerate().map(|(bucket, count)| {
            let bucket = bucket as i32;
            Rectangle::new([(bucket, 0), (bucket + 1, *count)], bar_style)
        }))
        .map_err(|e| HistogramError::Render(e.to_string()))?;

    root.present()
        .map_err(|e| HistogramError::Render(e.to_string()))?;
    Ok(())
}
