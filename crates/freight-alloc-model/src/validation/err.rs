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
    item::{LineItem, OrderIdentifier},
    ship::ShipmentIdentifier,
    stop::{Stop, StopSequence},
};
use freight_alloc_core::prelude::Weight;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoLineItemsError {
    shipment_id: ShipmentIdentifier,
}

impl NoLineItemsError {
    #[inline]
    pub fn new(shipment_id: ShipmentIdentifier) -> Self {
        Self { shipment_id }
    }

    #[inline]
    pub fn shipment_id(&self) -> ShipmentIdentifier {
        self.shipment_id
    }
}

impl std::fmt::Display for NoLineItemsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Shipment {} has no line items", self.shipment_id)
    }
}

impl std::error::Error for NoLineItemsError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NoStopsError {
    shipment_id: ShipmentIdentifier,
}

impl NoStopsError {
    #[inline]
    pub fn new(shipment_id: ShipmentIdentifier) -> Self {
        Self { shipment_id }
    }

    #[inline]
    pub fn shipment_id(&self) -> ShipmentIdentifier {
        self.shipment_id
    }
}

impl std::fmt::Display for NoStopsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Shipment {} has no stops", self.shipment_id)
    }
}

impl std::error::Error for NoStopsError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SingleStopError {
    shipment_id: ShipmentIdentifier,
    sequence: StopSequence,
}

impl SingleStopError {
    #[inline]
    pub fn new(shipment_id: ShipmentIdentifier, sequence: StopSequence) -> Self {
        Self {
            shipment_id,
            sequence,
        }
    }

    #[inline]
    pub fn shipment_id(&self) -> ShipmentIdentifier {
        self.shipment_id
    }

    #[inline]
    pub fn sequence(&self) -> StopSequence {
        self.sequence
    }
}

impl std::fmt::Display for SingleStopError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Cannot allocate shipment {} by mileage with only one stop ({})",
            self.shipment_id, self.sequence
        )
    }
}

impl std::error::Error for SingleStopError {}

#[derive(Debug, Clone, PartialEq)]
pub struct NonPositiveWeightError {
    order_id: OrderIdentifier,
    description: String,
    weight: Weight,
}

impl NonPositiveWeightError {
    #[inline]
    pub fn new(order_id: OrderIdentifier, description: impl Into<String>, weight: Weight) -> Self {
        Self {
            order_id,
            description: description.into(),
            weight,
        }
    }

    #[inline]
    pub fn from_line_item(line_item: &LineItem) -> Self {
        Self::new(
            line_item.order_id(),
            line_item.description(),
            line_item.weight(),
        )
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
    pub fn weight(&self) -> Weight {
        self.weight
    }
}

impl std::fmt::Display for NonPositiveWeightError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Invalid weight {} on line item {:?} of order {}",
            self.weight, self.description, self.order_id
        )
    }
}

impl std::error::Error for NonPositiveWeightError {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ZeroLegDistanceError {
    sequence: StopSequence,
    address: String,
}

impl ZeroLegDistanceError {
    #[inline]
    pub fn new(sequence: StopSequence, address: impl Into<String>) -> Self {
        Self {
            sequence,
            address: address.into(),
        }
    }

    #[inline]
    pub fn from_stop(stop: &Stop) -> Self {
        Self::new(stop.sequence(), stop.address())
    }

    #[inline]
    pub fn sequence(&self) -> StopSequence {
        self.sequence
    }

    #[inline]
    pub fn address(&self) -> &str {
        &self.address
    }
}

impl std::fmt::Display for ZeroLegDistanceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Intermediate stop {} with zero distance from previous stop: {}",
            self.sequence, self.address
        )
    }
}

impl std::error::Error for ZeroLegDistanceError {}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InvalidStopRangeError {
    order_id: OrderIdentifier,
    description: String,
    pickup: StopSequence,
    drop_off: StopSequence,
}

impl InvalidStopRangeError {
    #[inline]
    pub fn new(
        order_id: OrderIdentifier,
        description: impl Into<String>,
        pickup: StopSequence,
        drop_off: StopSequence,
    ) -> Self {
        Self {
            order_id,
            description: description.into(),
            pickup,
            drop_off,
        }
    }

    #[inline]
    pub fn from_line_item(line_item: &LineItem) -> Self {
        Self::new(
            line_item.order_id(),
            line_item.description(),
            line_item.pickup(),
            line_item.drop_off(),
        )
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
    pub fn pickup(&self) -> StopSequence {
        self.pickup
    }

    #[inline]
    pub fn drop_off(&self) -> StopSequence {
        self.drop_off
    }
}

impl std::fmt::Display for InvalidStopRangeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Invalid pickup/drop-off sequence {} -> {} in line item {:?} of order {}",
            self.pickup, self.drop_off, self.description, self.order_id
        )
    }
}

impl std::error::Error for InvalidStopRangeError {}

/// The one way an allocation can fail: the shipment does not satisfy the
/// preconditions of the chosen allocation basis.
#[derive(Debug, Clone, PartialEq)]
pub enum InvalidShipmentError {
    NoLineItems(NoLineItemsError),
    NoStops(NoStopsError),
    SingleStop(SingleStopError),
    NonPositiveWeight(NonPositiveWeightError),
    ZeroLegDistance(ZeroLegDistanceError),
    InvalidStopRange(InvalidStopRangeError),
}

impl std::fmt::Display for InvalidShipmentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidShipmentError::NoLineItems(e) => write!(f, "invalid shipment: {e}"),
            InvalidShipmentError::NoStops(e) => write!(f, "invalid shipment: {e}"),
            InvalidShipmentError::SingleStop(e) => write!(f, "invalid shipment: {e}"),
            InvalidShipmentError::NonPositiveWeight(e) => write!(f, "invalid shipment: {e}"),
            InvalidShipmentError::ZeroLegDistance(e) => write!(f, "invalid shipment: {e}"),
            InvalidShipmentError::InvalidStopRange(e) => write!(f, "invalid shipment: {e}"),
        }
    }
}

impl std::error::Error for InvalidShipmentError {}

impl From<NoLineItemsError> for InvalidShipmentError {
    fn from(e: NoLineItemsError) -> Self {
        Self::NoLineItems(e)
    }
}

impl From<NoStopsError> for InvalidShipmentError {
    fn from(e: NoStopsError) -> Self {
        Self::NoStops(e)
    }
}

impl From<SingleStopError> for InvalidShipmentError {
    fn from(e: SingleStopError) -> Self {
        Self::SingleStop(e)
    }
}

impl From<NonPositiveWeightError> for InvalidShipmentError {
    fn from(e: NonPositiveWeightError) -> Self {
        Self::NonPositiveWeight(e)
    }
}

impl From<ZeroLegDistanceError> for InvalidShipmentError {
    fn from(e: ZeroLegDistanceError) -> Self {
        Self::ZeroLegDistance(e)
    }
}

impl From<InvalidStopRangeError> for InvalidShipmentError {
    fn from(e: InvalidStopRangeError) -> Self {
        Self::InvalidStopRange(e)
    }
}
