use async_trait::async_trait;
use futures::future::{BoxFuture, FutureExt};

use crate::race::{Probe, Sorter};

/// An implementation of [Quick Sort](https://en.wikipedia.org/wiki/Quicksort)
/// instrumented for racing.
///
/// # Usage
///```
/// use sortrace_core::race::{Probe, QuickSorter, Sorter};
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let sorted = QuickSorter.sort(vec![1, 5, 4, 2, 3], &Probe::muted()).await;
/// assert_eq!(sorted, vec![1, 2, 3, 4, 5]);
/// # });
///```
/// # Explanation
///
/// Quicksort partitions the field around a pivot so that smaller elements
/// end up on its left and larger ones on its right, then recursively sorts
/// both sides. This variant uses the Lomuto scheme with the last element of
/// the range as the pivot: a single scan swaps each smaller element into the
/// next open slot, snapshotting the swap slot, the scan position and the
/// pivot on every placement. A time report fires as each partitioned range
/// finishes recursing.
///
/// Recursion depth is O(log n) for balanced partitions, but the fixed
/// last-element pivot degrades to O(n) depth on already-sorted or
/// reverse-sorted input.
pub struct QuickSorter;

#[async_trait]
impl Sorter for QuickSorter {
    fn name(&self) -> &'static str {
        "Quick Sort"
    }

    async fn sort(&self, mut sequence: Vec<u32>, probe: &Probe<'_>) -> Vec<u32> {
        if sequence.is_empty() {
            return sequence;
        }

        let high = sequence.len() - 1;
        sort_range(&mut sequence, 0, high, probe).await;

        probe.finish(&sequence);
        sequence
    }
}

fn sort_range<'a>(
    values: &'a mut [u32],
    low: usize,
    high: usize,
    probe: &'a Probe<'a>,
) -> BoxFuture<'a, ()> {
    async move {
        if low < high {
            let pivot_at = partition(&mut *values, low, high, probe).await;
            if pivot_at > low {
                sort_range(&mut *values, low, pivot_at - 1, probe).await;
            }
            sort_range(&mut *values, pivot_at + 1, high, probe).await;
            probe.report();
        }
    }
    .boxed()
}

async fn partition(values: &mut [u32], low: usize, high: usize, probe: &Probe<'_>) -> usize {
    let pivot = values[high];
    let mut slot = low;

    for scan in low..high {
        if values[scan] < pivot {
            values.swap(slot, scan);
            probe.step(values, &[slot, scan, high]).await;
            slot += 1;
        }
    }

    values.swap(slot, high);
    slot
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::race::{InstantStepper, Snapshot};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    async fn run(input: &[u32]) -> Vec<u32> {
        QuickSorter.sort(input.to_vec(), &Probe::muted()).await
    }

    async fn run_traced(input: &[u32]) -> (Vec<u32>, Vec<Snapshot>, usize) {
        let snapshots = Arc::new(Mutex::new(Vec::new()));
        let reports = Arc::new(AtomicUsize::new(0));

        let probe = Probe::new(
            &InstantStepper,
            Duration::ZERO,
            Box::new({
                let snapshots = Arc::clone(&snapshots);
                move |snapshot: &Snapshot| snapshots.lock().unwrap().push(snapshot.clone())
            }),
            Box::new({
                let reports = Arc::clone(&reports);
                move |_| {
                    reports.fetch_add(1, Ordering::SeqCst);
                }
            }),
        );

        let sorted = QuickSorter.sort(input.to_vec(), &probe).await;
        let trace = snapshots.lock().unwrap().clone();
        (sorted, trace, reports.load(Ordering::SeqCst))
    }

    #[tokio::test]
    async fn arbitrary_array() {
        assert_eq!(run(&[1, 5, 4, 2, 3]).await, vec![1, 2, 3, 4, 5]);
    }

    #[tokio::test]
    async fn sorted_array() {
        let input = (1..10).collect::<Vec<_>>();
        assert_eq!(run(&input).await, input);
    }

    // Reverse-sorted input drives the last-element pivot into its
    // worst-case O(n) recursion depth.
    #[tokio::test]
    async fn very_unsorted() {
        let input = (1..=200).rev().collect::<Vec<_>>();
        assert_eq!(run(&input).await, (1..=200).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn duplicates() {
        assert_eq!(run(&[4, 2, 2, 4]).await, vec![2, 2, 4, 4]);
    }

    #[tokio::test]
    async fn simple_edge_cases() {
        assert_eq!(run(&[1]).await, vec![1]);
        assert_eq!(run(&[1, 2]).await, vec![1, 2]);
        assert_eq!(run(&[2, 1]).await, vec![1, 2]);
        assert_eq!(run(&[3, 1, 2]).await, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn empty_input_touches_nothing() {
        let (sorted, trace, reports) = run_traced(&[]).await;
        assert!(sorted.is_empty());
        assert!(trace.is_empty());
        assert_eq!(reports, 0);
    }

    // Only placement swaps snapshot: the first partition of [5,3,8,1] places
    // nothing (pivot 1 is the minimum), the second places the 3 once. Time
    // reports fire for the two non-trivial ranges plus the final one.
    #[tokio::test]
    async fn exact_step_count() {
        let (sorted, trace, reports) = run_traced(&[5, 3, 8, 1]).await;

        assert_eq!(sorted, vec![1, 3, 5, 8]);
        assert_eq!(trace.iter().filter(|s| !s.is_complete()).count(), 1);
        assert_eq!(reports, 2 + 1);
    }

    #[tokio::test]
    async fn snapshot_counts_are_deterministic() {
        let input = [42u32, 17, 93, 10, 55, 21, 77, 68];
        let (_, first, first_reports) = run_traced(&input).await;
        let (_, second, second_reports) = run_traced(&input).await;

        assert_eq!(first.len(), second.len());
        assert_eq!(first_reports, second_reports);
    }

    #[tokio::test]
    async fn final_snapshot_settles_every_index() {
        let (_, trace, _) = run_traced(&[5, 3, 8, 1]).await;

        let last = trace.last().unwrap();
        assert!(last.is_complete());
        assert_eq!(last.settled(), &[0, 1, 2, 3]);
    }
}
