pub mod bubble_sorter;
pub mod heap_sorter;
pub mod insertion_sorter;
pub mod merge_sorter;
pub mod quick_sorter;
pub mod selection_sorter;

use super::Sorter;

/// The full starting field, in lane order: every algorithm a [`Race`]
/// runs by default.
///
/// [`Race`]: crate::race::Race
pub fn roster() -> Vec<Box<dyn Sorter>> {
    vec![
        Box::new(bubble_sorter::BubbleSorter),
        Box::new(quick_sorter::QuickSorter),
        Box::new(merge_sorter::MergeSorter),
        Box::new(insertion_sorter::InsertionSorter),
        Box::new(selection_sorter::SelectionSorter),
        Box::new(heap_sorter::HeapSorter),
    ]
}
