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
    shipment::stop::StopSequence,
};
use freight_alloc_core::prelude::Weight;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OrderIdentifierMarker;

impl IdentifierMarkerName for OrderIdentifierMarker {
    const NAME: &'static str = "OrderId";
}

pub type OrderIdentifier = Identifier<u64, OrderIdentifierMarker>;

/// Goods of one order, loaded at `pickup` and unloaded at `drop_off`.
///
/// Several line items may belong to the same order. Description and quantity
/// are carried for reporting only; no allocator looks at them.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    order_id: OrderIdentifier,
    description: String,
    quantity: u32,
    weight: Weight,
    pickup: StopSequence,
    drop_off: StopSequence,
}

impl LineItem {
    #[inline]
    pub fn new(
        order_id: OrderIdentifier,
        description: impl Into<String>,
        quantity: u32,
        weight: Weight,
        pickup: StopSequence,
        drop_off: StopSequence,
    ) -> Self {
        Self {
            order_id,
            description: description.into(),
            quantity,
            weight,
            pickup,
            drop_off,
        }
    }

    #[inline]
    pub fn order_id(&self) -> OrderIdentifier {
        self.order_id
    }

    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[inline]
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    #[inline]
    pub fn weight(&self) -> Weight {
        self.weight
    }

    #[inline]
    pub fn pickup(&self) -> StopSequence {
        self.pickup
    }

    #[inline]
    pub fn drop_off(&self) -> StopSequence {
        self.drop_off
    }

    /// Whether the goods are dropped off strictly after they are picked up.
    #[inline]
    pub fn is_forward(&self) -> bool {
        self.pickup < self.drop_off
    }
}

impl std::fmt::Display for LineItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LineItem({}, {:?} x{}, {}, {} -> {})",
            self.order_id,
            self.description,
            self.quantity,
            self.weight,
            self.pickup.value(),
            self.drop_off.value()
        )
    }
}
