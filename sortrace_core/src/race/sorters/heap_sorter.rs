use async_trait::async_trait;
use futures::future::{BoxFuture, FutureExt};

use crate::race::{Probe, Sorter};

/// An implementation of [Heap Sort](https://en.wikipedia.org/wiki/Heapsort)
/// instrumented for racing.
///
/// Builds a max-heap by sifting down from the last parent to the root, then
/// repeatedly swaps the root with the last unsorted element and restores the
/// heap. Every swap snapshots the swapped pair, in both the build and the
/// extraction phase; a time report fires once per extraction.
pub struct HeapSorter;

#[async_trait]
impl Sorter for HeapSorter {
    fn name(&self) -> &'static str {
        "Heap Sort"
    }

    async fn sort(&self, mut sequence: Vec<u32>, probe: &Probe<'_>) -> Vec<u32> {
        if sequence.is_empty() {
            return sequence;
        }

        let n = sequence.len();
        for root in (0..n / 2).rev() {
            sift_down(&mut sequence, n, root, probe).await;
        }

        for end in (1..n).rev() {
            sequence.swap(0, end);
            probe.step(&sequence, &[0, end]).await;
            sift_down(&mut sequence, end, 0, probe).await;
            probe.report();
        }

        probe.finish(&sequence);
        sequence
    }
}

fn sift_down<'a>(
    values: &'a mut [u32],
    heap: usize,
    root: usize,
    probe: &'a Probe<'a>,
) -> BoxFuture<'a, ()> {
    async move {
        let mut largest = root;
        let left = 2 * root + 1;
        let right = 2 * root + 2;

        if left < heap && values[left] > values[largest] {
            largest = left;
        }
        if right < heap && values[right] > values[largest] {
            largest = right;
        }

        if largest != root {
            values.swap(root, largest);
            probe.step(values, &[root, largest]).await;
            sift_down(&mut *values, heap, largest, probe).await;
        }
    }
    .boxed()
}
