use async_trait::async_trait;

use crate::race::{Probe, Sorter};

/// An implementation of [Bubble Sort](https://en.wikipedia.org/wiki/Bubble_sort)
/// instrumented for racing.
///
/// # Usage
///```
/// use sortrace_core::race::{BubbleSorter, Probe, Sorter};
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let sorted = BubbleSorter.sort(vec![1, 5, 4, 2, 3], &Probe::muted()).await;
/// assert_eq!(sorted, vec![1, 2, 3, 4, 5]);
/// # });
///```
/// # Explanation
///
/// Bubble sort, sometimes referred to as sinking sort,
/// is a simple sorting algorithm that repeatedly steps
/// through the list, compares adjacent elements and swaps
/// them if they are in the wrong order, so that larger
/// elements "bubble" towards the end on every pass.
///
/// # Instrumentation
///
/// The racing variant always runs its full `n - 1` passes (no early exit on
/// an already-sorted pass), so the number of emitted snapshots depends only
/// on the field length: one snapshot per adjacent comparison, whether or not
/// it swapped, and one time report per pass.
#[derive(Default)]
pub struct BubbleSorter;

#[async_trait]
impl Sorter for BubbleSorter {
    fn name(&self) -> &'static str {
        "Bubble Sort"
    }

    async fn sort(&self, mut sequence: Vec<u32>, probe: &Probe<'_>) -> Vec<u32> {
        if sequence.is_empty() {
            return sequence;
        }

        let n = sequence.len();
        for pass in 0..n - 1 {
            for at in 0..n - 1 - pass {
                if sequence[at] > sequence[at + 1] {
                    sequence.swap(at, at + 1);
                }
                probe.step(&sequence, &[at, at + 1]).await;
            }
            probe.report();
        }

        probe.finish(&sequence);
        sequence
    }
}
