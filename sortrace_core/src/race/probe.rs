//! The instrumentation seam between a running sorter and whoever is watching
//! it: snapshots of the working sequence, elapsed-time reports, and the
//! cooperative pause that lets concurrently racing sorters interleave.

use std::time::{Duration, Instant};

use async_trait::async_trait;

/// A point-in-time view of a sorter's working sequence.
///
/// `active` holds the indices currently being compared or moved; `settled`
/// holds the indices known to be in final sorted position. In-progress
/// snapshots carry an empty `settled` set. The one completion snapshot a
/// sorter emits at the end carries an empty `active` set and every index
/// settled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    values: Vec<u32>,
    active: Vec<usize>,
    settled: Vec<usize>,
}

impl Snapshot {
    /// A mid-sort view with the given indices highlighted as active.
    pub fn in_progress(values: &[u32], active: &[usize]) -> Self {
        debug_assert!(active.iter().all(|&at| at < values.len()));
        Self {
            values: values.to_vec(),
            active: active.to_vec(),
            settled: Vec::new(),
        }
    }

    /// The final view of a finished sort, with every index settled.
    pub fn complete(values: &[u32]) -> Self {
        Self {
            values: values.to_vec(),
            active: Vec::new(),
            settled: (0..values.len()).collect(),
        }
    }

    pub fn values(&self) -> &[u32] {
        &self.values
    }

    pub fn active(&self) -> &[usize] {
        &self.active
    }

    pub fn settled(&self) -> &[usize] {
        &self.settled
    }

    /// Whether this is the completion snapshot of a finished sort.
    pub fn is_complete(&self) -> bool {
        self.settled.len() == self.values.len()
    }
}

/// Receives every snapshot a sorter emits.
pub type SnapshotHook<'a> = Box<dyn Fn(&Snapshot) + Send + Sync + 'a>;

/// Receives elapsed time since the sorter's run started.
pub type TimeHook<'a> = Box<dyn Fn(Duration) + Send + Sync + 'a>;

/// A cooperative-yield primitive.
///
/// `pause` suspends the calling sorter for at least `delay` without blocking
/// the other sorters scheduled on the same task. A zero delay still yields
/// control at least once.
#[async_trait]
pub trait Stepper: Send + Sync {
    async fn pause(&self, delay: Duration);
}

/// The real-time stepper: sleeps on the tokio timer, yielding immediately
/// for a zero delay.
pub struct TimedStepper;

#[async_trait]
impl Stepper for TimedStepper {
    async fn pause(&self, delay: Duration) {
        if delay.is_zero() {
            tokio::task::yield_now().await;
        } else {
            tokio::time::sleep(delay).await;
        }
    }
}

/// A stepper that ignores the delay and yields exactly once per pause.
///
/// Substituting this for [`TimedStepper`] keeps the interleaving behavior
/// of a race while making it run as fast as the callbacks allow, which is
/// what tests want.
pub struct InstantStepper;

#[async_trait]
impl Stepper for InstantStepper {
    async fn pause(&self, _delay: Duration) {
        tokio::task::yield_now().await;
    }
}

/// What a sorter reports through while it runs.
///
/// Bundles the snapshot and time hooks with a [`Stepper`], the per-step
/// delay, and the instant the run started. Sorters call [`step`](Self::step)
/// at every comparison or swap, [`report`](Self::report) at pass boundaries
/// and [`finish`](Self::finish) exactly once at the end.
pub struct Probe<'a> {
    stepper: &'a dyn Stepper,
    delay: Duration,
    started: Instant,
    on_snapshot: SnapshotHook<'a>,
    on_time: TimeHook<'a>,
}

impl<'a> Probe<'a> {
    pub fn new(
        stepper: &'a dyn Stepper,
        delay: Duration,
        on_snapshot: SnapshotHook<'a>,
        on_time: TimeHook<'a>,
    ) -> Self {
        Self {
            stepper,
            delay,
            started: Instant::now(),
            on_snapshot,
            on_time,
        }
    }

    /// A probe that discards everything, for callers that only want the
    /// sorted result.
    pub fn muted() -> Probe<'static> {
        Probe::new(
            &InstantStepper,
            Duration::ZERO,
            Box::new(|_| {}),
            Box::new(|_| {}),
        )
    }

    /// Emits an in-progress snapshot, then pauses so the other racers get a
    /// turn.
    pub async fn step(&self, values: &[u32], active: &[usize]) {
        let snapshot = Snapshot::in_progress(values, active);
        (self.on_snapshot)(&snapshot);
        self.stepper.pause(self.delay).await;
    }

    /// Reports the time elapsed since this probe was created.
    pub fn report(&self) {
        (self.on_time)(self.started.elapsed());
    }

    /// Final time report followed by the completion snapshot. No pause.
    pub fn finish(&self, values: &[u32]) {
        self.report();
        (self.on_snapshot)(&Snapshot::complete(values));
    }
}
