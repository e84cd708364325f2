use async_trait::async_trait;

use crate::race::{Probe, Sorter};

/// An implementation of [Selection Sort](https://en.wikipedia.org/wiki/Selection_sort)
/// instrumented for racing.
///
/// # Usage
///```
/// use sortrace_core::race::{Probe, SelectionSorter, Sorter};
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let sorted = SelectionSorter.sort(vec![1, 5, 4, 2, 3], &Probe::muted()).await;
/// assert_eq!(sorted, vec![1, 2, 3, 4, 5]);
/// # });
///```
/// # Explanation
///
/// Selection sort repeatedly scans the unsorted remainder for its smallest
/// element and swaps it to the front boundary. Every comparison snapshots
/// the scan triple (boundary, scan position, current minimum); a landed swap
/// adds one extra snapshot of the swapped pair. A time report fires once per
/// boundary.
pub struct SelectionSorter;

#[async_trait]
impl Sorter for SelectionSorter {
    fn name(&self) -> &'static str {
        "Selection Sort"
    }

    async fn sort(&self, mut sequence: Vec<u32>, probe: &Probe<'_>) -> Vec<u32> {
        if sequence.is_empty() {
            return sequence;
        }

        for unsorted in 0..sequence.len() {
            let mut smallest_in_rest = unsorted;
            for scan in (unsorted + 1)..sequence.len() {
                if sequence[scan] < sequence[smallest_in_rest] {
                    smallest_in_rest = scan;
                }
                probe
                    .step(&sequence, &[unsorted, scan, smallest_in_rest])
                    .await;
            }
            if unsorted != smallest_in_rest {
                sequence.swap(unsorted, smallest_in_rest);
                probe.step(&sequence, &[unsorted, smallest_in_rest]).await;
            }
            probe.report();
        }

        probe.finish(&sequence);
        sequence
    }
}
