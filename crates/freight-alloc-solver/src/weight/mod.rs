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

use crate::framework::{
    allocator::CostAllocator, basis::AllocationBasis, ledger::CostLedger,
};
use freight_alloc_core::prelude::{Cost, proportional_share};
use freight_alloc_model::prelude::{
    AllocationResult, InvalidShipmentError, Shipment, ShipmentValidator,
};

/// Splits the invoice by line-item weight. Stops are never consulted, so a
/// shipment with zero or one stop is fine here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WeightAllocator;

impl WeightAllocator {
    #[inline]
    pub fn new() -> Self {
        Self
    }
}

impl std::fmt::Display for WeightAllocator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl CostAllocator for WeightAllocator {
    #[inline]
    fn name(&self) -> &'static str {
        "WeightAllocator"
    }

    #[inline]
    fn basis(&self) -> AllocationBasis {
        AllocationBasis::Weight
    }

    #[inline]
    fn validate(&self, shipment: &Shipment) -> Result<(), InvalidShipmentError> {
        ShipmentValidator::validate_weight_basis(shipment)
    }

    #[tracing::instrument(
        level = "debug",
        name = "Weight Allocation",
        skip_all,
        fields(shipment = %shipment.id(), items = shipment.line_item_count())
    )]
    fn allocate(
        &self,
        shipment: &Shipment,
        total_invoiced: Cost,
    ) -> Result<AllocationResult, InvalidShipmentError> {
        self.validate(shipment)?;

        let total_weight = shipment.total_weight();
        let mut ledger = CostLedger::new(shipment.id());
        for item in shipment.iter_line_items() {
            let cost = proportional_share(
                item.weight().value(),
                total_weight.value(),
                total_invoiced,
            );
            let running = ledger.record(item.order_id(), cost);
            tracing::trace!(
                "{} pays {:.4} of {} ({} so far for {})",
                item,
                cost,
                total_weight,
                running,
                item.order_id()
            );
        }

        tracing::debug!(
            "Weight: split {:.2} over {} orders by {}",
            total_invoiced,
            ledger.len(),
            total_weight
        );
        Ok(ledger.into_result())
    }
}
