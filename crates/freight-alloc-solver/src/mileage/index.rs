// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use freight_alloc_core::prelude::Miles;
use freight_alloc_model::prelude::{Stop, StopSequence};
use std::{collections::BTreeMap, ops::Bound};

/// Incoming leg length per stop, keyed by sequence number.
///
/// Stops sharing a sequence number are merged by adding their legs, so a
/// range lookup sees exactly the sum over all stops in that range.
#[derive(Debug, Clone, Default)]
pub struct StopIndex {
    legs: BTreeMap<StopSequence, Miles>,
}

impl StopIndex {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_stops<'a, I>(stops: I) -> Self
    where
        I: IntoIterator<Item = &'a Stop>,
    {
        let mut legs: BTreeMap<StopSequence, Miles> = BTreeMap::new();
        for stop in stops {
            *legs.entry(stop.sequence()).or_default() += stop.miles_from_previous();
        }
        Self { legs }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.legs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    /// Miles ridden by goods loaded at `pickup` and unloaded at `drop_off`:
    /// the legs arriving at every stop in `(pickup, drop_off]`. Empty or
    /// reversed ranges ride nothing.
    #[inline]
    pub fn traveled_miles(&self, pickup: StopSequence, drop_off: StopSequence) -> Miles {
        if pickup >= drop_off {
            return Miles::zero();
        }
        self.legs
            .range((Bound::Excluded(pickup), Bound::Included(drop_off)))
            .map(|(_, miles)| *miles)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[inline]
    fn seq(n: u32) -> StopSequence {
        StopSequence::new(n)
    }

    fn stop(n: u32, miles: f64) -> Stop {
        Stop::new(seq(n), format!("stop-{n}"), Miles::new(miles))
    }

    fn index(stops: &[Stop]) -> StopIndex {
        StopIndex::from_stops(stops)
    }

    #[test]
    fn test_empty_index() {
        let idx = StopIndex::new();
        assert!(idx.is_empty());
        assert_eq!(idx.len(), 0);
        assert!(idx.traveled_miles(seq(1), seq(5)).is_zero());
    }

    #[test]
    fn test_orders_by_sequence_not_input() {
        let idx = index(&[stop(3, 123.0), stop(1, 0.0), stop(2, 425.0)]);
        assert_eq!(idx.len(), 3);
        assert_eq!(idx.traveled_miles(seq(1), seq(2)), Miles::new(425.0));
        assert_eq!(idx.traveled_miles(seq(2), seq(3)), Miles::new(123.0));
        assert!(idx.traveled_miles(seq(3), seq(4)).is_zero());
    }

    #[test]
    fn test_traveled_miles_is_half_open() {
        let idx = index(&[stop(1, 0.0), stop(2, 425.0), stop(3, 123.0)]);
        assert_eq!(idx.traveled_miles(seq(1), seq(3)), Miles::new(548.0));
        assert_eq!(idx.traveled_miles(seq(1), seq(2)), Miles::new(425.0));
        assert_eq!(idx.traveled_miles(seq(2), seq(3)), Miles::new(123.0));
    }

    #[test]
    fn test_first_stop_miles_count_only_when_inside_range() {
        let idx = index(&[stop(1, 50.0), stop(2, 10.0)]);
        assert_eq!(idx.traveled_miles(seq(1), seq(2)), Miles::new(10.0));
        assert_eq!(idx.traveled_miles(seq(0), seq(2)), Miles::new(60.0));
    }

    #[test]
    fn test_gaps_and_unknown_bounds() {
        let idx = index(&[stop(10, 0.0), stop(20, 5.0), stop(30, 7.0)]);
        assert_eq!(idx.traveled_miles(seq(15), seq(25)), Miles::new(5.0));
        assert_eq!(idx.traveled_miles(seq(10), seq(99)), Miles::new(12.0));
        assert!(idx.traveled_miles(seq(30), seq(40)).is_zero());
    }

    #[test]
    fn test_reversed_and_empty_ranges_ride_nothing() {
        let idx = index(&[stop(1, 0.0), stop(2, 425.0), stop(3, 123.0)]);
        assert!(idx.traveled_miles(seq(2), seq(2)).is_zero());
        assert!(idx.traveled_miles(seq(3), seq(2)).is_zero());
    }

    #[test]
    fn test_duplicate_sequences_are_added() {
        let idx = index(&[stop(1, 0.0), stop(2, 4.0), stop(2, 6.0)]);
        assert_eq!(idx.len(), 2);
        assert_eq!(idx.traveled_miles(seq(1), seq(2)), Miles::new(10.0));
    }

    #[test]
    fn test_negative_legs_propagate() {
        let idx = index(&[stop(1, 0.0), stop(2, -425.0), stop(3, -123.0)]);
        assert_eq!(idx.traveled_miles(seq(1), seq(3)), Miles::new(-548.0));
    }
}
