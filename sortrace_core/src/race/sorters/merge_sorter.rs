use async_trait::async_trait;
use futures::future::{BoxFuture, FutureExt};

use crate::race::{Probe, Sorter};

/// An implementation of [Merge Sort](https://en.wikipedia.org/wiki/Merge_sort)
/// instrumented for racing.
///
/// # Usage
///```
/// use sortrace_core::race::{MergeSorter, Probe, Sorter};
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let sorted = MergeSorter.sort(vec![1, 5, 4, 2, 3], &Probe::muted()).await;
/// assert_eq!(sorted, vec![1, 2, 3, 4, 5]);
/// # });
///```
/// # Explanation
///
/// Merge sort recursively halves the range, then merges the two sorted
/// halves. The merge stages its output in a scratch buffer (comparisons emit
/// no snapshots) and writes it back into the source positions left to right,
/// snapshotting the single written index after each write. A time report
/// fires as each merge completes.
///
/// While a merge is writing back, the field transiently holds duplicates of
/// values that are about to be overwritten, so mid-merge snapshots are not
/// permutations of the input. The multiset is restored by the time each
/// merge finishes.
pub struct MergeSorter;

#[async_trait]
impl Sorter for MergeSorter {
    fn name(&self) -> &'static str {
        "Merge Sort"
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
            let mid = low + (high - low) / 2;
            sort_range(&mut *values, low, mid, probe).await;
            sort_range(&mut *values, mid + 1, high, probe).await;
            merge(&mut *values, low, mid, high, probe).await;
            probe.report();
        }
    }
    .boxed()
}

async fn merge(values: &mut [u32], low: usize, mid: usize, high: usize, probe: &Probe<'_>) {
    let mut staged = Vec::with_capacity(high - low + 1);
    let (mut left, mut right) = (low, mid + 1);

    while left <= mid && right <= high {
        if values[left] <= values[right] {
            staged.push(values[left]);
            left += 1;
        } else {
            staged.push(values[right]);
            right += 1;
        }
    }
    while left <= mid {
        staged.push(values[left]);
        left += 1;
    }
    while right <= high {
        staged.push(values[right]);
        right += 1;
    }

    for (offset, value) in staged.into_iter().enumerate() {
        let at = low + offset;
        values[at] = value;
        probe.step(values, &[at]).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::race::{InstantStepper, Snapshot};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    async fn run(input: &[u32]) -> Vec<u32> {
        MergeSorter.sort(input.to_vec(), &Probe::muted()).await
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

        let sorted = MergeSorter.sort(input.to_vec(), &probe).await;
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

    // Every merge writes its whole range back, so the snapshot count is a
    // function of the field length alone: merging (0,1), (2,3) and (0..4)
    // writes 2 + 2 + 4 positions. One report per merge plus the final one.
    #[tokio::test]
    async fn exact_step_count() {
        let (sorted, trace, reports) = run_traced(&[5, 3, 8, 1]).await;

        assert_eq!(sorted, vec![1, 3, 5, 8]);
        assert_eq!(trace.iter().filter(|s| !s.is_complete()).count(), 8);
        assert_eq!(reports, 3 + 1);
    }

    #[tokio::test]
    async fn snapshots_mark_the_written_index() {
        let (_, trace, _) = run_traced(&[2, 1]).await;

        let written: Vec<_> = trace
            .iter()
            .filter(|s| !s.is_complete())
            .map(|s| s.active().to_vec())
            .collect();
        assert_eq!(written, vec![vec![0], vec![1]]);
    }

    #[tokio::test]
    async fn final_snapshot_settles_every_index() {
        let (_, trace, _) = run_traced(&[5, 3, 8, 1]).await;

        let last = trace.last().unwrap();
        assert!(last.is_complete());
        assert_eq!(last.settled(), &[0, 1, 2, 3]);
    }
}
