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

use crate::shipment::{
    err::DuplicateStopSequenceError,
    item::LineItem,
    ship::{Shipment, ShipmentIdentifier},
    stop::{Stop, StopSequence},
};
use std::collections::BTreeSet;

/// Assembles a [`Shipment`] piece by piece.
///
/// Unlike [`Shipment::new`], the builder refuses stops that share a sequence
/// number. The first clash is remembered and reported by [`Self::build`].
#[derive(Debug, Clone)]
pub struct ShipmentBuilder {
    id: ShipmentIdentifier,
    stops: Vec<Stop>,
    line_items: Vec<LineItem>,
    seen: BTreeSet<StopSequence>,
    duplicate: Option<StopSequence>,
}

impl ShipmentBuilder {
    #[inline]
    pub fn new(id: ShipmentIdentifier) -> Self {
        Self {
            id,
            stops: Vec::new(),
            line_items: Vec::new(),
            seen: BTreeSet::new(),
            duplicate: None,
        }
    }

    #[inline]
    pub fn with_capacities(id: ShipmentIdentifier, stops: usize, line_items: usize) -> Self {
        Self {
            id,
            stops: Vec::with_capacity(stops),
            line_items: Vec::with_capacity(line_items),
            seen: BTreeSet::new(),
            duplicate: None,
        }
    }

    #[inline]
    pub fn with_stops<I>(mut self, stops: I) -> Self
    where
        I: IntoIterator<Item = Stop>,
    {
        self.stops.clear();
        self.seen.clear();
        self.duplicate = None;
        self.extend_stops(stops);
        self
    }

    #[inline]
    pub fn with_line_items<I>(mut self, line_items: I) -> Self
    where
        I: IntoIterator<Item = LineItem>,
    {
        self.line_items.clear();
        self.line_items.extend(line_items);
        self
    }

    #[inline]
    pub fn add_stop(&mut self, stop: Stop) -> &mut Self {
        let sequence = stop.sequence();
        if !self.seen.insert(sequence) && self.duplicate.is_none() {
            self.duplicate = Some(sequence);
        }
        self.stops.push(stop);
        self
    }

    #[inline]
    pub fn extend_stops<I>(&mut self, stops: I) -> &mut Self
    where
        I: IntoIterator<Item = Stop>,
    {
        for stop in stops {
            self.add_stop(stop);
        }
        self
    }

    #[inline]
    pub fn add_line_item(&mut self, line_item: LineItem) -> &mut Self {
        self.line_items.push(line_item);
        self
    }

    #[inline]
    pub fn extend_line_items<I>(&mut self, it: I) -> &mut Self
    where
        I: IntoIterator<Item = LineItem>,
    {
        self.line_items.extend(it);
        self
    }

    #[inline]
    pub fn build(self) -> Result<Shipment, DuplicateStopSequenceError> {
        if let Some(sequence) = self.duplicate {
            return Err(DuplicateStopSequenceError::new(sequence));
        }
        Ok(Shipment::new(self.id, self.stops, self.line_items))
    }
}
