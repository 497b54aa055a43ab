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

use crate::common::{Identifier, IdentifierMarkerName};
use freight_alloc_core::prelude::Miles;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StopSequenceMarker;

impl IdentifierMarkerName for StopSequenceMarker {
    const NAME: &'static str = "StopSeq";
}

/// Position of a stop on the route. Sequence numbers, not the order stops
/// are listed in, define the shipment's geography.
pub type StopSequence = Identifier<u32, StopSequenceMarker>;

#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    sequence: StopSequence,
    address: String,
    miles_from_previous: Miles,
}

impl Stop {
    #[inline]
    pub fn new(
        sequence: StopSequence,
        address: impl Into<String>,
        miles_from_previous: Miles,
    ) -> Self {
        Self {
            sequence,
            address: address.into(),
            miles_from_previous,
        }
    }

    #[inline]
    pub fn sequence(&self) -> StopSequence {
        self.sequence
    }

    #[inline]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Length of the leg that ends at this stop.
    #[inline]
    pub fn miles_from_previous(&self) -> Miles {
        self.miles_from_previous
    }
}

impl std::fmt::Display for Stop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Stop({}, {:?}, {})",
            self.sequence.value(),
            self.address,
            self.miles_from_previous
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[inline]
    fn seq(n: u32) -> StopSequence {
        StopSequence::new(n)
    }

    #[test]
    fn test_accessors() {
        let s = Stop::new(seq(2), "Bob's House", Miles::new(425.0));
        assert_eq!(s.sequence(), seq(2));
        assert_eq!(s.address(), "Bob's House");
        assert_eq!(s.miles_from_previous(), Miles::new(425.0));
    }

    #[test]
    fn test_display() {
        let s = Stop::new(seq(3), "World of Coca-Cola", Miles::new(123.0));
        assert_eq!(s.to_string(), "Stop(3, \"World of Coca-Cola\", Miles(123))");

        let back = Stop::new(seq(2), "Bob's Burgers", Miles::new(-425.0));
        assert_eq!(back.to_string(), "Stop(2, \"Bob's Burgers\", Miles(-425))");
    }

    #[test]
    fn test_sequence_display() {
        assert_eq!(seq(1).to_string(), "StopSeq(1)");
    }
}
