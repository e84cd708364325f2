use async_trait::async_trait;

use crate::race::{Probe, Sorter};

/// An implementation of [Insertion Sort](https://en.wikipedia.org/wiki/Insertion_sort)
/// instrumented for racing.
///
/// # Explanation
///
/// Insertion sort grows a sorted prefix one element at a time: each element
/// from index 1 onwards is swapped leftwards while it is strictly smaller
/// than its predecessor. Every swap emits a snapshot of the swapped pair,
/// and a time report fires once per element processed.
///
/// # Usage
///```
/// use sortrace_core::race::{InsertionSorter, Probe, Sorter};
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let sorted = InsertionSorter.sort(vec![1, 5, 4, 2, 3], &Probe::muted()).await;
/// assert_eq!(sorted, vec![1, 2, 3, 4, 5]);
/// # });
///```
pub struct InsertionSorter;

#[async_trait]
impl Sorter for InsertionSorter {
    fn name(&self) -> &'static str {
        "Insertion Sort"
    }

    async fn sort(&self, mut sequence: Vec<u32>, probe: &Probe<'_>) -> Vec<u32> {
        if sequence.is_empty() {
            return sequence;
        }

        for unsorted in 1..sequence.len() {
            let mut at = unsorted;
            while at > 0 && sequence[at] < sequence[at - 1] {
                sequence.swap(at, at - 1);
                probe.step(&sequence, &[at, at - 1]).await;
                at -= 1;
            }
            probe.report();
        }

        probe.finish(&sequence);
        sequence
    }
}
