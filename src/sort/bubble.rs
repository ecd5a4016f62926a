use super::SortAlgorithm;

/// Quadratic iterative sort: repeated adjacent-pair compare-and-swap passes
/// over a working copy, O(1) scratch beyond it.
///
/// A pass that performs no swap terminates early, so an already-sorted input
/// costs a single O(n) pass. Swapping only on strictly-greater keys keeps the
/// sort stable.
pub struct BubbleSort;

impl SortAlgorithm for BubbleSort {
    fn sort_by_key<T, K, F>(&self, items: &[T], key: F) -> Vec<T>
    where
        T: Clone,
        K: Ord,
        F: Fn(&T) -> K,
    {
        let mut arr = items.to_vec();
        let n = arr.len();
        if n < 2 {
            return arr;
        }

        for pass in 0..n {
            let mut swapped = false;
            // Everything past n - pass - 1 has already bubbled into place.
            for j in 0..n - pass - 1 {
                if key(&arr[j]) > key(&arr[j + 1]) {
                    arr.swap(j, j + 1);
                    swapped = true;
                }
            }
            if !swapped {
                break;
            }
        }

        arr
    }
}
