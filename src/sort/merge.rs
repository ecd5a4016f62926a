use super::SortAlgorithm;

/// Divide-and-conquer sort: split at the midpoint, sort each half
/// recursively, merge by repeated head comparison.
///
/// Guarantees O(n log n) comparisons regardless of input order, at the cost
/// of an O(n) auxiliary buffer per merge. Taking from the left run on equal
/// keys keeps the sort stable.
pub struct MergeSort;

impl SortAlgorithm for MergeSort {
    fn sort_by_key<T, K, F>(&self, items: &[T], key: F) -> Vec<T>
    where
        T: Clone,
        K: Ord,
        F: Fn(&T) -> K,
    {
        sort_recursive(items, &key)
    }
}

fn sort_recursive<T, K, F>(items: &[T], key: &F) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: Fn(&T) -> K,
{
    if items.len() < 2 {
        return items.to_vec();
    }

    let mid = items.len() / 2;
    let left = sort_recursive(&items[..mid], key);
    let right = sort_recursive(&items[mid..], key);
    merge(&left, &right, key)
}

fn merge<T, K, F>(left: &[T], right: &[T], key: &F) -> Vec<T>
where
    T: Clone,
    K: Ord,
    F: Fn(&T) -> K,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut i = 0;
    let mut j = 0;

    while i < left.len() && j < right.len() {
        // `<=` takes the left element on ties, preserving stability.
        if key(&left[i]) <= key(&right[j]) {
            merged.push(left[i].clone());
            i += 1;
        } else {
            merged.push(right[j].clone());
            j += 1;
        }
    }

    merged.extend_from_slice(&left[i..]);
    merged.extend_from_slice(&right[j..]);
    merged
}
