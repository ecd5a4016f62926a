//! Sorting engine: two interchangeable stable sorting strategies behind a
//! single-operation capability trait.
//!
//! Both variants sort ascending by a caller-supplied key and preserve the
//! relative order of equal keys, so compound orderings compose naturally
//! through tuple keys and `std::cmp::Reverse`.

pub mod bubble;
pub mod merge;

pub use bubble::BubbleSort;
pub use merge::MergeSort;

/// The contract every sorting strategy satisfies: one operation taking a
/// sequence and a key function, returning a new ascending, stably-ordered
/// sequence.
pub trait SortAlgorithm {
    fn sort_by_key<T, K, F>(&self, items: &[T], key: F) -> Vec<T>
    where
        T: Clone,
        K: Ord,
        F: Fn(&T) -> K;
}

/// Algorithm selector, for callers that choose a strategy at runtime
/// (CLI flags, configuration) rather than through generics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// Quadratic iterative variant ([`BubbleSort`]).
    Bubble,
    /// Divide-and-conquer variant ([`MergeSort`]).
    Merge,
}

impl Algorithm {
    pub fn sort_by_key<T, K, F>(&self, items: &[T], key: F) -> Vec<T>
    where
        T: Clone,
        K: Ord,
        F: Fn(&T) -> K,
    {
        match self {
            Algorithm::Bubble => BubbleSort.sort_by_key(items, key),
            Algorithm::Merge => MergeSort.sort_by_key(items, key),
        }
    }
}
