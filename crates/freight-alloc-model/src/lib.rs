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

pub mod allocation;
pub mod common;
pub mod shipment;
pub mod validation;

pub mod prelude {
    pub use crate::allocation::AllocationResult;
    pub use crate::common::{Identifier, IdentifierMarkerName};
    pub use crate::shipment::builder::ShipmentBuilder;
    pub use crate::shipment::err::DuplicateStopSequenceError;
    pub use crate::shipment::item::{LineItem, OrderIdentifier};
    pub use crate::shipment::ship::{Shipment, ShipmentIdentifier};
    pub use crate::shipment::stop::{Stop, StopSequence};
    pub use crate::validation::ShipmentValidator;
    pub use crate::validation::err::{
        InvalidShipmentError, InvalidStopRangeError, NoLineItemsError, NoStopsError,
        NonPositiveWeightError, SingleStopError, ZeroLegDistanceError,
    };
}
