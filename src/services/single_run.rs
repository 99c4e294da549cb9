use rand::Rng;
use rand_distr::{Distribution, Uniform};
use serde::Serialize;
use tracing::debug;

use crate::domain::configuration::Configuration;
use crate::domain::stage::{EventRecord, Stage};

const SECONDS_PER_MINUTE: f64 = 60.0;
const PER_UNIT_SECONDS: (f64, f64) = (30.0, 60.0);
const TRANSPORT_SECONDS: (f64, f64) = (20.0, 60.0);
const TRANSPORT_BATCH: (i64, i64) = (4, 7);
/// Upper bound on the records reserved up front; longer logs grow on demand.
const MAX_RESERVED_RECORDS: usize = 1 << 20;

/// One realization of a duty run.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RunResult {
    pub total_minutes: f64,
    pub event_log: Vec<EventRecord>,
}

impl RunResult {
    pub fn stage_records(&self, stage: Stage) -> impl Iterator<Item = &EventRecord> {
        self.event_log
            .iter()
            .filter(move |record| record.stage == stage)
    }

    /// Number of batches carried during the transport stage.
    pub fn transport_batches(&self) -> usize {
        self.stage_records(Stage::Transport).count()
    }
}

/// Accumulates elapsed seconds and logs one record per step.
struct RunLog {
    elapsed_seconds: f64,
    event_log: Vec<EventRecord>,
}

impl RunLog {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            elapsed_seconds: 0.0,
            event_log: Vec::with_capacity(capacity),
        }
    }

    fn record(&mut self, stage: Stage, seconds: f64) {
        self.elapsed_seconds += seconds;
        self.event_log.push(EventRecord {
            stage,
            cumulative_minutes: self.elapsed_seconds / SECONDS_PER_MINUTE,
        });
    }

    fn finish(self) -> RunResult {
        RunResult {
            total_minutes: self.elapsed_seconds / SECONDS_PER_MINUTE,
            event_log: self.event_log,
        }
    }
}

/// Records one run is expected to log: two per unit plus at most one
/// transport batch per four units, capped at [`MAX_RESERVED_RECORDS`].
fn log_capacity(unit_count: usize) -> usize {
    unit_count
        .saturating_mul(2)
        .saturating_add(unit_count.div_ceil(4))
        .min(MAX_RESERVED_RECORDS)
}

/// Simulates one duty run with thread-local randomness.
pub fn simulate_unseeded(config: &Configuration) -> RunResult {
    let mut rng = rand::thread_rng();
    simulate(config, &mut rng)
}

/// Simulates one duty run: fill every tray, carry them out in batches of
/// 4 to 7, then top up every tray with rice.
///
/// The caller is responsible for a configuration with at least one unit;
/// a zero unit count yields an empty log and a zero total.
pub fn simulate<R: Rng + ?Sized>(config: &Configuration, rng: &mut R) -> RunResult {
    let unit_count = config.unit_count();
    let per_unit = Uniform::new(PER_UNIT_SECONDS.0, PER_UNIT_SECONDS.1);
    let transport = Uniform::new(TRANSPORT_SECONDS.0, TRANSPORT_SECONDS.1);
    let batch = Uniform::new_inclusive(TRANSPORT_BATCH.0, TRANSPORT_BATCH.1);

    debug!(unit_count, "starting duty run");
    let mut log = RunLog::with_capacity(log_capacity(unit_count));

    for _ in 0..unit_count {
        log.record(Stage::Fill, per_unit.sample(rng));
    }

    // The final batch may overshoot; only the loop condition reads the counter.
    let mut remaining = i64::try_from(unit_count).unwrap_or(i64::MAX);
    while remaining > 0 {
        let carried = batch.sample(rng);
        log.record(Stage::Transport, transport.sample(rng));
        remaining -= carried;
    }

    for _ in 0..unit_count {
        log.record(Stage::Replenish, per_unit.sample(rng));
    }

    let result = log.finish();
    debug!(
        unit_count,
        transport_batches = result.transport_batches(),
        total_minutes = result.total_minutes,
        "simulated duty run"
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{minimum_draws_rng, seeded_rng, single_run_config};
    use tracing_test::traced_test;

    fn bounds_for(unit_count: usize) -> (f64, f64) {
        let units = unit_count as f64;
        let min_batches = unit_count.div_ceil(7) as f64;
        let max_batches = unit_count.div_ceil(4) as f64;
        let lower = (units * 2.0 * 30.0 + min_batches * 20.0) / 60.0;
        let upper = (units * 2.0 * 60.0 + max_batches * 60.0) / 60.0;
        (lower, upper)
    }

    #[test]
    fn log_capacity_matches_expected_record_count() {
        assert_eq!(log_capacity(0), 0);
        assert_eq!(log_capacity(1), 3);
        assert_eq!(log_capacity(20), 45);
    }

    #[test]
    fn log_capacity_saturates_for_huge_unit_counts() {
        assert_eq!(log_capacity(usize::MAX), MAX_RESERVED_RECORDS);
        assert_eq!(log_capacity(usize::MAX / 2 + 1), MAX_RESERVED_RECORDS);
    }

    #[test]
    #[traced_test]
    fn simulate_logs_run_start_and_finish() {
        simulate(&single_run_config(2, 1), &mut minimum_draws_rng());
        assert!(logs_contain("starting duty run"));
        assert!(logs_contain("simulated duty run"));
    }

    #[test]
    fn simulate_produces_stage_records_in_order() {
        let config = single_run_config(10, 2);
        let mut rng = seeded_rng(7);
        let run = simulate(&config, &mut rng);

        assert_eq!(run.stage_records(Stage::Fill).count(), 20);
        assert_eq!(run.stage_records(Stage::Replenish).count(), 20);
        assert!(run.event_log[..20].iter().all(|r| r.stage == Stage::Fill));

        let batches = run.transport_batches();
        assert!(batches >= 3 && batches <= 5, "unexpected batch count {batches}");
        let transport = &run.event_log[20..20 + batches];
        assert!(transport.iter().all(|r| r.stage == Stage::Transport));
        assert!(run.event_log[20 + batches..]
            .iter()
            .all(|r| r.stage == Stage::Replenish));
        assert_eq!(run.event_log.len(), 40 + batches);
    }

    #[test]
    fn simulate_log_is_non_decreasing_and_ends_at_total() {
        let config = single_run_config(13, 3);
        let mut rng = seeded_rng(99);
        for _ in 0..20 {
            let run = simulate(&config, &mut rng);
            assert!(run
                .event_log
                .windows(2)
                .all(|pair| pair[0].cumulative_minutes <= pair[1].cumulative_minutes));
            let last = run.event_log.last().unwrap();
            assert_eq!(last.cumulative_minutes, run.total_minutes);
        }
    }

    #[test]
    fn simulate_total_stays_within_draw_bounds() {
        let mut rng = seeded_rng(2024);
        for (stations, workers) in [(1, 1), (3, 1), (10, 2), (60, 3), (100, 5)] {
            let config = single_run_config(stations, workers);
            let (lower, upper) = bounds_for(config.unit_count());
            for _ in 0..10 {
                let run = simulate(&config, &mut rng);
                assert!(run.total_minutes >= lower, "{} < {lower}", run.total_minutes);
                assert!(run.total_minutes < upper, "{} >= {upper}", run.total_minutes);
                let batches = run.transport_batches();
                assert!(batches >= config.unit_count().div_ceil(7));
                assert!(batches <= config.unit_count().div_ceil(4));
            }
        }
    }

    #[test]
    fn simulate_with_minimum_draws_uses_lower_bounds() {
        // Every draw lands on its lower bound: 30s per tray, 20s per batch of 4.
        let config = single_run_config(10, 2);
        let run = simulate(&config, &mut minimum_draws_rng());

        assert_eq!(run.transport_batches(), 5);
        let expected_seconds = 20.0 * 30.0 + 5.0 * 20.0 + 20.0 * 30.0;
        assert!((run.total_minutes - expected_seconds / 60.0).abs() < 1e-9);
        assert!((run.event_log[0].cumulative_minutes - 0.5).abs() < 1e-9);
    }

    #[test]
    fn simulate_single_unit_carries_one_batch() {
        let config = single_run_config(1, 1);
        let run = simulate(&config, &mut seeded_rng(1));
        assert_eq!(run.event_log.len(), 3);
        assert_eq!(run.transport_batches(), 1);
        assert!(run.total_minutes > 0.0);
    }

    #[test]
    fn simulate_is_deterministic_for_equal_seeds() {
        let config = single_run_config(10, 2);
        let first = simulate(&config, &mut seeded_rng(42));
        let second = simulate(&config, &mut seeded_rng(42));
        assert_eq!(first, second);
        assert_eq!(first.total_minutes.to_bits(), second.total_minutes.to_bits());
    }

    #[test]
    fn simulate_unseeded_produces_full_log() {
        let config = single_run_config(2, 2);
        let run = simulate_unseeded(&config);
        assert_eq!(run.stage_records(Stage::Fill).count(), 4);
        assert!(run.total_minutes > 0.0);
    }
}
