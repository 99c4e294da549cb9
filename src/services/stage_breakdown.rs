use serde::Serialize;

use crate::domain::stage::{EventRecord, Stage};

/// Record count of one stage and its share of the whole log.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct StageShare {
    pub stage: Stage,
    pub records: usize,
    pub share: f64,
    /// Minutes spent in this stage.
    pub minutes: f64,
}

/// Per-stage counts in stage order. Stages without records are kept with a
/// zero count.
pub fn stage_breakdown(event_log: &[EventRecord]) -> Vec<StageShare> {
    let total = event_log.len();
    Stage::ALL
        .iter()
        .map(|stage| {
            let records = event_log.iter().filter(|r| r.stage == *stage).count();
            let share = if total == 0 {
                0.0
            } else {
                records as f64 / total as f64
            };
            StageShare {
                stage: *stage,
                records,
                share,
                minutes: stage_minutes(event_log, *stage),
            }
        })
        .collect()
}

/// The log is cumulative, so a stage's time is the step from the last record
/// before it to its own last record.
fn stage_minutes(event_log: &[EventRecord], stage: Stage) -> f64 {
    let mut previous = 0.0;
    let mut start = None;
    let mut end = None;
    for record in event_log {
        if record.stage == stage {
            start.get_or_insert(previous);
            end = Some(record.cumulative_minutes);
        }
        previous = record.cumulative_minutes;
    }
    match (start, end) {
        (Some(start), Some(end)) => end - start,
        _ => 0.0,
    }
}
