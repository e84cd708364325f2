//! Runs the whole field of sorters concurrently against independent copies
//! of one source sequence.

use std::time::{Duration, Instant};

use futures::future::join_all;

use crate::race::{roster, Probe, RaceTimes, Snapshot, Sorter, Stepper, TimedStepper};

/// Watches a race: every snapshot and time report, tagged with the emitting
/// algorithm's name. Both methods default to doing nothing, so observers
/// implement only what they care about.
///
/// Callbacks run synchronously on the racing task and must return promptly,
/// otherwise the whole field stalls.
pub trait RaceObserver: Send + Sync {
    fn on_snapshot(&self, algorithm: &'static str, snapshot: &Snapshot) {
        let _ = (algorithm, snapshot);
    }

    fn on_time_report(&self, algorithm: &'static str, elapsed: Duration) {
        let _ = (algorithm, elapsed);
    }
}

/// An observer that watches nothing.
pub struct Silent;

impl RaceObserver for Silent {}

/// What one sorter produced in a finished race.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub algorithm: &'static str,
    pub sorted: Vec<u32>,
    pub elapsed: Duration,
}

/// A finished race: per-algorithm results in lane order, plus the
/// wall-clock duration of the whole batch.
#[derive(Debug)]
pub struct RaceSummary {
    results: Vec<RunResult>,
    total: Duration,
}

impl RaceSummary {
    pub fn results(&self) -> &[RunResult] {
        &self.results
    }

    pub fn total(&self) -> Duration {
        self.total
    }
}

/// Coordinates a race between instrumented sorters.
///
/// Owns the roster (all six classics by default), the stepper that paces
/// them, and the [`RaceTimes`] table their reports land in. All sorters run
/// cooperatively interleaved on the calling task: every [`Probe::step`]
/// yields, each sorter owns an exclusive copy of the source, and nothing is
/// shared between lanes but the timing table.
///
/// Re-running a race upserts the same table, so only the latest time per
/// algorithm persists.
pub struct Race {
    sorters: Vec<Box<dyn Sorter>>,
    stepper: Box<dyn Stepper>,
    delay: Duration,
    times: RaceTimes,
}

impl Race {
    /// A race over the full roster, pacing sorters with [`TimedStepper`]
    /// and the given delay between steps.
    pub fn new(delay: Duration) -> Self {
        Self {
            sorters: roster(),
            stepper: Box::new(TimedStepper),
            delay,
            times: RaceTimes::new(),
        }
    }

    /// Replaces the stepper, e.g. with
    /// [`InstantStepper`](crate::race::InstantStepper) for deterministic
    /// fast-forward runs.
    pub fn with_stepper(mut self, stepper: Box<dyn Stepper>) -> Self {
        self.stepper = stepper;
        self
    }

    /// Replaces the roster.
    pub fn with_sorters(mut self, sorters: Vec<Box<dyn Sorter>>) -> Self {
        self.sorters = sorters;
        self
    }

    /// Names of the algorithms in the roster, in lane order.
    pub fn algorithms(&self) -> Vec<&'static str> {
        self.sorters.iter().map(|sorter| sorter.name()).collect()
    }

    /// The timing table reports land in.
    pub fn times(&self) -> &RaceTimes {
        &self.times
    }

    /// Races every sorter against an independent copy of `source`.
    ///
    /// Resolves only once every sorter has finished (its completion
    /// snapshot has fired). Within one lane, snapshots and time reports
    /// arrive strictly in emission order; across lanes the interleaving is
    /// unspecified.
    pub async fn run(&self, source: &[u32], observer: &dyn RaceObserver) -> RaceSummary {
        let times = &self.times;
        let started = Instant::now();

        let lanes = self.sorters.iter().map(|sorter| {
            let name = sorter.name();
            let copy = source.to_vec();
            let probe = Probe::new(
                self.stepper.as_ref(),
                self.delay,
                Box::new(move |snapshot: &Snapshot| observer.on_snapshot(name, snapshot)),
                Box::new(move |elapsed: Duration| {
                    times.record(name, elapsed);
                    observer.on_time_report(name, elapsed);
                }),
            );

            async move {
                let sorted = sorter.sort(copy, &probe).await;
                RunResult {
                    algorithm: name,
                    sorted,
                    elapsed: Duration::ZERO,
                }
            }
        });

        let mut results = join_all(lanes).await;
        let total = started.elapsed();

        for result in &mut results {
            result.elapsed = times.elapsed(result.algorithm).unwrap_or_default();
        }

        RaceSummary { results, total }
    }
}
