use serde::Serialize;

/// Nearest-rank percentile over a slice sorted in ascending order.
///
/// Percentiles at or below 0 pick the first element, at or above 100 the
/// last; anything in between rounds `p/100 * (len - 1)` to an index.
pub fn value_sorted<T: Copy>(sorted_values: &[T], percentile: f64) -> Option<T> {
    let last = sorted_values.len().checked_sub(1)?;
    let index = if percentile <= 0.0 {
        0
    } else if percentile >= 100.0 {
        last
    } else {
        ((percentile / 100.0) * last as f64).round() as usize
    };
    sorted_values.get(index).copied()
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct Quartiles {
    pub p25: f64,
    pub median: f64,
    pub p75: f64,
}

/// Box-plot quartiles of an unsorted sample. The input order is preserved.
pub fn quartiles(values: &[f64]) -> Quartiles {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    Quartiles {
        p25: value_sorted(&sorted, 25.0).unwrap_or(0.0),
        median: value_sorted(&sorted, 50.0).unwrap_or(0.0),
        p75: value_sorted(&sorted, 75.0).unwrap_or(0.0),
    }
}
