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

use crate::{
    common::{Identifier, IdentifierMarkerName},
    shipment::{
        item::{LineItem, OrderIdentifier},
        stop::{Stop, StopSequence},
    },
};
use freight_alloc_core::prelude::Weight;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShipmentIdentifierMarker;

impl IdentifierMarkerName for ShipmentIdentifierMarker {
    const NAME: &'static str = "ShipmentId";
}

pub type ShipmentIdentifier = Identifier<u64, ShipmentIdentifierMarker>;

/// One truck run carrying the goods of one or more orders.
///
/// Stops and line items are kept exactly as given: neither their order nor
/// their consistency is checked here. Each allocator validates what it needs.
#[derive(Debug, Clone, PartialEq)]
pub struct Shipment {
    id: ShipmentIdentifier,
    stops: Vec<Stop>,
    line_items: Vec<LineItem>,
}

impl Shipment {
    #[inline]
    pub fn new<S, L>(id: ShipmentIdentifier, stops: S, line_items: L) -> Self
    where
        S: IntoIterator<Item = Stop>,
        L: IntoIterator<Item = LineItem>,
    {
        Self {
            id,
            stops: stops.into_iter().collect(),
            line_items: line_items.into_iter().collect(),
        }
    }

    #[inline]
    pub fn id(&self) -> ShipmentIdentifier {
        self.id
    }

    #[inline]
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    #[inline]
    pub fn line_items(&self) -> &[LineItem] {
        &self.line_items
    }

    #[inline]
    pub fn iter_stops(&self) -> impl Iterator<Item = &Stop> {
        self.stops.iter()
    }

    #[inline]
    pub fn iter_line_items(&self) -> impl Iterator<Item = &LineItem> {
        self.line_items.iter()
    }

    #[inline]
    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    #[inline]
    pub fn line_item_count(&self) -> usize {
        self.line_items.len()
    }

    /// Smallest sequence number among the stops, i.e. where the route starts.
    #[inline]
    pub fn first_stop_sequence(&self) -> Option<StopSequence> {
        self.stops.iter().map(Stop::sequence).min()
    }

    #[inline]
    pub fn order_ids(&self) -> BTreeSet<OrderIdentifier> {
        self.line_items.iter().map(LineItem::order_id).collect()
    }

    #[inline]
    pub fn total_weight(&self) -> Weight {
        self.line_items.iter().map(LineItem::weight).sum()
    }
}
