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

pub mod err;

use crate::{
    shipment::ship::Shipment,
    validation::err::{
        InvalidShipmentError, InvalidStopRangeError, NoLineItemsError, NoStopsError,
        NonPositiveWeightError, SingleStopError, ZeroLegDistanceError,
    },
};

/// Precondition checks shared by the allocators. Each rule stops at the first
/// offending stop or line item.
#[derive(Debug, Clone)]
pub struct ShipmentValidator;

impl ShipmentValidator {
    #[inline]
    pub fn validate_has_line_items(shipment: &Shipment) -> Result<(), NoLineItemsError> {
        if shipment.line_items().is_empty() {
            return Err(NoLineItemsError::new(shipment.id()));
        }
        Ok(())
    }

    #[inline]
    pub fn validate_has_stops(shipment: &Shipment) -> Result<(), NoStopsError> {
        if shipment.stops().is_empty() {
            return Err(NoStopsError::new(shipment.id()));
        }
        Ok(())
    }

    /// A mileage split needs at least one leg, hence two stops.
    #[inline]
    pub fn validate_multiple_stops(shipment: &Shipment) -> Result<(), SingleStopError> {
        match shipment.stops() {
            [only] => Err(SingleStopError::new(shipment.id(), only.sequence())),
            _ => Ok(()),
        }
    }

    #[inline]
    pub fn validate_positive_weights(shipment: &Shipment) -> Result<(), NonPositiveWeightError> {
        match shipment
            .iter_line_items()
            .find(|li| !li.weight().is_positive())
        {
            Some(li) => Err(NonPositiveWeightError::from_line_item(li)),
            None => Ok(()),
        }
    }

    /// Every stop after the first in sequence order must be reached by a
    /// non-zero leg. The first stop has no incoming leg and is not checked.
    /// Negative legs pass.
    #[inline]
    pub fn validate_nonzero_legs(shipment: &Shipment) -> Result<(), ZeroLegDistanceError> {
        let Some(first) = shipment.first_stop_sequence() else {
            return Ok(());
        };
        match shipment
            .iter_stops()
            .find(|s| s.sequence() > first && s.miles_from_previous().is_zero())
        {
            Some(stop) => Err(ZeroLegDistanceError::from_stop(stop)),
            None => Ok(()),
        }
    }

    #[inline]
    pub fn validate_stop_ranges(shipment: &Shipment) -> Result<(), InvalidStopRangeError> {
        match shipment.iter_line_items().find(|li| !li.is_forward()) {
            Some(li) => Err(InvalidStopRangeError::from_line_item(li)),
            None => Ok(()),
        }
    }

    /// Rules for splitting by weight. Stops are not looked at.
    pub fn validate_weight_basis(shipment: &Shipment) -> Result<(), InvalidShipmentError> {
        Self::validate_has_line_items(shipment)?;
        Self::validate_positive_weights(shipment)?;
        Ok(())
    }

    /// Rules for splitting by traveled mileage.
    pub fn validate_mileage_basis(shipment: &Shipment) -> Result<(), InvalidShipmentError> {
        Self::validate_has_stops(shipment)?;
        Self::validate_has_line_items(shipment)?;
        Self::validate_multiple_stops(shipment)?;
        Self::validate_nonzero_legs(shipment)?;
        Self::validate_stop_ranges(shipment)?;
        Ok(())
    }
}
