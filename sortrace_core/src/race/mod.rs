//! Six classic sorting algorithms instrumented to yield their intermediate
//! states at a caller-controlled pace, raced against independent copies of one
//! shared field.
//!
//! Every sorter implements the [`Sorter`] trait and reports through a
//! [`Probe`]: one [`Snapshot`] per textbook comparison or swap, a cooperative
//! pause after each snapshot, and an elapsed-time report at every pass or
//! phase boundary. The [`Race`] coordinator drives all six concurrently on a
//! single task, feeds their reports into a shared [`RaceTimes`] table and
//! resolves once the whole field has finished.
//!
//! # Example
//!
//! ```
//! use sortrace_core::race::{BubbleSorter, Probe, Sorter};
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let sorted = BubbleSorter.sort(vec![1, 3, 2, 5, 4], &Probe::muted()).await;
//! assert_eq!(sorted, vec![1, 2, 3, 4, 5]);
//! # });
//! ```
//!
//! Or race the full roster:
//!
//! ```
//! use std::time::Duration;
//! use sortrace_core::race::{Race, Silent};
//!
//! # tokio::runtime::Runtime::new().unwrap().block_on(async {
//! let race = Race::new(Duration::ZERO);
//! let summary = race.run(&[5, 3, 8, 1], &Silent).await;
//!
//! for result in summary.results() {
//!     assert_eq!(result.sorted, vec![1, 3, 5, 8]);
//! }
//! assert_eq!(race.times().rank().len(), 6);
//! # });
//! ```

mod coordinator;
mod probe;
mod sorters;
mod timing;

#[cfg(feature = "display")]
pub mod display;

pub use coordinator::{Race, RaceObserver, RaceSummary, RunResult, Silent};
pub use probe::{InstantStepper, Probe, Snapshot, SnapshotHook, Stepper, TimeHook, TimedStepper};
pub use timing::{ordinal, RaceTimes};

pub use sorters::bubble_sorter::BubbleSorter;
pub use sorters::heap_sorter::HeapSorter;
pub use sorters::insertion_sorter::InsertionSorter;
pub use sorters::merge_sorter::MergeSorter;
pub use sorters::quick_sorter::QuickSorter;
pub use sorters::selection_sorter::SelectionSorter;
pub use sorters::roster;

use async_trait::async_trait;
use rand::Rng;

/// Smallest value a generated field may contain.
pub const LOWEST_VALUE: u32 = 10;

/// Largest value a generated field may contain.
pub const HIGHEST_VALUE: u32 = 99;

/// Default number of elements in a generated field.
pub const FIELD_SIZE: usize = 25;

/// A sorting algorithm instrumented to report its progress.
///
/// Implementations must produce an ascending permutation of the input and
/// report through the given [`Probe`]: a snapshot (followed by a cooperative
/// pause) at every textbook comparison or swap, a time report at every outer
/// pass or phase boundary, and a final [`Probe::finish`] once done. An empty
/// input is returned unchanged without touching the probe.
#[async_trait]
pub trait Sorter: Send + Sync {
    /// Display name of the algorithm, used as its identity in reports.
    fn name(&self) -> &'static str;

    async fn sort(&self, sequence: Vec<u32>, probe: &Probe<'_>) -> Vec<u32>;
}

/// Generates a random field of [`LOWEST_VALUE`]..=[`HIGHEST_VALUE`] values.
pub fn random_sequence(len: usize) -> Vec<u32> {
    random_sequence_from(&mut rand::thread_rng(), len)
}

/// Same as [`random_sequence`], but drawing from the given generator so that
/// fields can be reproduced from a seed.
pub fn random_sequence_from<R: Rng>(rng: &mut R, len: usize) -> Vec<u32> {
    (0..len)
        .map(|_| rng.gen_range(LOWEST_VALUE..=HIGHEST_VALUE))
        .collect()
}
