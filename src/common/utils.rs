use crate::common::time_point::Timestamp;

/// Outcome of an ordered-index search: either the exact index of the target,
/// or the index at which it would have to be inserted to keep the sequence
/// ascending.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SearchResult {
    Found(usize),
    InsertAt(usize),
}

impl SearchResult {
    /// The found index or the insertion point, whichever this result carries.
    pub fn index(&self) -> usize {
        match *self {
            SearchResult::Found(i) => i,
            SearchResult::InsertAt(i) => i,
        }
    }

    pub fn is_found(&self) -> bool {
        match *self {
            SearchResult::Found(_) => true,
            SearchResult::InsertAt(_) => false,
        }
    }
}

/// Binary search over an ascending timestamp slice.
///
/// The slice holds finite timestamps only; the target may be infinite (range
/// bounds are searched too) but must not be NaN.
pub fn binary_search(timestamps: &[Timestamp], target: Timestamp) -> SearchResult {
    let mut low = 0;
    let mut high = timestamps.len();
    while low < high {
        let mid = (low + high) / 2;
        if timestamps[mid] < target {
            low = mid + 1;
        } else if timestamps[mid] > target {
            high = mid;
        } else {
            return SearchResult::Found(mid);
        }
    }
    SearchResult::InsertAt(low)
}
