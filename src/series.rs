use crate::common::time_point::{is_valid_time_range, is_valid_timestamp, Sample, Timestamp};
use crate::common::utils::{binary_search, SearchResult};
use crate::interpolate::Interpolator;
use crate::{Result, SparselineErr};

///
/// An ordered collection of irregularly-sampled values. Timestamps are kept in
/// a vec of their own, parallel to the value vec, so that searches only ever
/// touch the timestamp sequence.
///
/// Invariant: `timestamps` is strictly ascending, duplicate-free and finite;
/// both vecs always have the same length. Inserting at an existing timestamp
/// overwrites the value in place.
///
pub struct SampleSeries<T> {
    timestamps: Vec<Timestamp>,
    values: Vec<T>,
}

impl<T> SampleSeries<T> {
    pub fn new() -> SampleSeries<T> {
        SampleSeries {
            timestamps: Vec::new(),
            values: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    pub fn timestamps(&self) -> &[Timestamp] {
        &self.timestamps
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Insert a single sample. An existing sample at the same timestamp is
    /// overwritten; the series stays the same size.
    pub fn insert(&mut self, timestamp: Timestamp, value: T) -> Result<()> {
        if !is_valid_timestamp(timestamp) {
            return Err(SparselineErr::InvalidTimestamp(timestamp));
        }
        match binary_search(&self.timestamps, timestamp) {
            SearchResult::Found(i) => {
                self.values[i] = value;
            }
            SearchResult::InsertAt(i) => {
                self.timestamps.insert(i, timestamp);
                self.values.insert(i, value);
            }
        }
        Ok(())
    }

    /// Insert a batch of samples. The batch does not have to be sorted, but
    /// sorted (or nearly sorted) input is inserted much faster: after each
    /// positioned insert, input entries that land directly after it in sorted
    /// order are drained in without another search. A duplicate timestamp
    /// never takes the drain path, so later batch entries overwrite earlier
    /// ones just like repeated single inserts.
    ///
    /// All validation happens before the first insert; a failed call leaves
    /// the series untouched.
    pub fn insert_many(&mut self, timestamps: Vec<Timestamp>, values: Vec<T>) -> Result<()> {
        if timestamps.len() != values.len() {
            return Err(SparselineErr::LengthMismatch(
                timestamps.len(),
                values.len(),
            ));
        }
        for &timestamp in timestamps.iter() {
            if !is_valid_timestamp(timestamp) {
                return Err(SparselineErr::InvalidTimestamp(timestamp));
            }
        }

        let mut input = timestamps.into_iter().zip(values.into_iter()).peekable();
        while let Some((timestamp, value)) = input.next() {
            let mut last = match binary_search(&self.timestamps, timestamp) {
                SearchResult::Found(i) => {
                    self.values[i] = value;
                    i
                }
                SearchResult::InsertAt(i) => {
                    self.timestamps.insert(i, timestamp);
                    self.values.insert(i, value);
                    i
                }
            };
            // drain input entries that belong right after the last insert
            loop {
                let next_fits = match input.peek() {
                    Some(&(next_timestamp, _)) => {
                        next_timestamp > self.timestamps[last]
                            && (last + 1 >= self.timestamps.len()
                                || next_timestamp < self.timestamps[last + 1])
                    }
                    None => false,
                };
                if !next_fits {
                    break;
                }
                if let Some((next_timestamp, next_value)) = input.next() {
                    self.timestamps.insert(last + 1, next_timestamp);
                    self.values.insert(last + 1, next_value);
                    last += 1;
                }
            }
        }
        Ok(())
    }

    /// Remove every sample inside `[from, to]`. With `keep_boundary_samples`
    /// set, a sample sitting exactly on a bound is preserved.
    pub fn remove_range(
        &mut self,
        from: Timestamp,
        to: Timestamp,
        keep_boundary_samples: bool,
    ) -> Result<()> {
        if !is_valid_time_range(from, to) {
            return Err(SparselineErr::InvalidRange(from, to));
        }
        let from_search = binary_search(&self.timestamps, from);
        let mut start = from_search.index();
        if keep_boundary_samples && from_search.is_found() {
            start += 1;
        }
        let to_search = binary_search(&self.timestamps, to);
        let mut end = match to_search {
            SearchResult::Found(i) => i + 1,
            SearchResult::InsertAt(i) => i,
        };
        if keep_boundary_samples && to_search.is_found() {
            end -= 1;
        }
        if end > start {
            self.timestamps.drain(start..end);
            self.values.drain(start..end);
        }
        Ok(())
    }

    /// Remove every sample outside `[from, to]`, bounds included. Two prunes,
    /// the second running against the already-pruned series.
    pub fn remove_outside_range(
        &mut self,
        from: Timestamp,
        to: Timestamp,
        keep_boundary_samples: bool,
    ) -> Result<()> {
        if !is_valid_time_range(from, to) {
            return Err(SparselineErr::InvalidRange(from, to));
        }
        self.remove_range(std::f64::NEG_INFINITY, from, keep_boundary_samples)?;
        self.remove_range(to, std::f64::INFINITY, keep_boundary_samples)?;
        Ok(())
    }

    /// Value at `timestamp`. An exact sample wins; otherwise the interpolator
    /// is consulted with the insertion point the search produced. A miss the
    /// interpolator will not fill is a normal outcome, not an error.
    pub fn get_value<I>(&self, timestamp: Timestamp, interpolator: &I) -> Option<T>
    where
        T: Clone,
        I: Interpolator<T> + ?Sized,
    {
        if timestamp.is_nan() {
            return None;
        }
        match binary_search(&self.timestamps, timestamp) {
            SearchResult::Found(i) => Some(self.values[i].clone()),
            SearchResult::InsertAt(i) => interpolator.interpolate(self, timestamp, i),
        }
    }

    /// Independent copy of the stored values, in timestamp order.
    pub fn snapshot(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.values.clone()
    }

    /// Independent copy of the stored samples, in timestamp order.
    pub fn samples(&self) -> Vec<Sample<T>>
    where
        T: Clone,
    {
        self.timestamps
            .iter()
            .zip(self.values.iter())
            .map(|(&timestamp, value)| Sample::new(timestamp, value.clone()))
            .collect()
    }
}

impl<T> Default for SampleSeries<T> {
    fn default() -> SampleSeries<T> {
        SampleSeries::new()
    }
}
