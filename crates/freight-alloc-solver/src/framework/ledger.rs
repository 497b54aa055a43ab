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

use freight_alloc_core::prelude::Cost;
use freight_alloc_model::prelude::{AllocationResult, OrderIdentifier, ShipmentIdentifier};
use std::collections::BTreeMap;

/// Running per-order totals while an allocation walks the line items.
#[derive(Debug, Clone)]
pub struct CostLedger {
    shipment_id: ShipmentIdentifier,
    costs: BTreeMap<OrderIdentifier, Cost>,
}

impl CostLedger {
    #[inline]
    pub fn new(shipment_id: ShipmentIdentifier) -> Self {
        Self {
            shipment_id,
            costs: BTreeMap::new(),
        }
    }

    #[inline]
    pub fn shipment_id(&self) -> ShipmentIdentifier {
        self.shipment_id
    }

    /// Adds `cost` to the order's running total, opening the entry if needed.
    #[inline]
    pub fn record(&mut self, order_id: OrderIdentifier, cost: Cost) -> Cost {
        let entry = self.costs.entry(order_id).or_insert(0.0);
        *entry += cost;
        *entry
    }

    #[inline]
    pub fn get(&self, order_id: OrderIdentifier) -> Option<Cost> {
        self.costs.get(&order_id).copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.costs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    #[inline]
    pub fn into_result(self) -> AllocationResult {
        AllocationResult::new(self.shipment_id, self.costs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[inline]
    fn oid(n: u64) -> OrderIdentifier {
        OrderIdentifier::new(n)
    }

    #[test]
    fn test_record_sums_per_order() {
        let mut ledger = CostLedger::new(ShipmentIdentifier::new(1));
        assert!(ledger.is_empty());

        assert_eq!(ledger.record(oid(1), 10.0), 10.0);
        assert_eq!(ledger.record(oid(2), 2.5), 2.5);
        assert_eq!(ledger.record(oid(1), 5.0), 15.0);

        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.get(oid(1)), Some(15.0));
        assert_eq!(ledger.get(oid(3)), None);
    }

    #[test]
    fn test_zero_cost_still_opens_entry() {
        let mut ledger = CostLedger::new(ShipmentIdentifier::new(1));
        ledger.record(oid(4), 0.0);
        let result = ledger.into_result();
        assert_eq!(result.get(oid(4)), Some(0.0));
    }

    #[test]
    fn test_into_result_keeps_shipment() {
        let mut ledger = CostLedger::new(ShipmentIdentifier::new(9));
        ledger.record(oid(1), 1.0);
        assert_eq!(ledger.shipment_id(), ShipmentIdentifier::new(9));

        let result = ledger.into_result();
        assert_eq!(result.shipment_id(), ShipmentIdentifier::new(9));
        assert_eq!(result.len(), 1);
    }
}
