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

use crate::shipment::{item::OrderIdentifier, ship::ShipmentIdentifier};
use freight_alloc_core::prelude::Cost;
use std::collections::BTreeMap;

/// Share of a shipment's invoice carried by each of its orders.
#[derive(Debug, Clone, PartialEq)]
pub struct AllocationResult {
    shipment_id: ShipmentIdentifier,
    costs: BTreeMap<OrderIdentifier, Cost>,
}

impl AllocationResult {
    #[inline]
    pub fn new(shipment_id: ShipmentIdentifier, costs: BTreeMap<OrderIdentifier, Cost>) -> Self {
        Self { shipment_id, costs }
    }

    #[inline]
    pub fn shipment_id(&self) -> ShipmentIdentifier {
        self.shipment_id
    }

    #[inline]
    pub fn costs(&self) -> &BTreeMap<OrderIdentifier, Cost> {
        &self.costs
    }

    #[inline]
    pub fn into_costs(self) -> BTreeMap<OrderIdentifier, Cost> {
        self.costs
    }

    #[inline]
    pub fn get(&self, order_id: OrderIdentifier) -> Option<Cost> {
        self.costs.get(&order_id).copied()
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (OrderIdentifier, Cost)> + '_ {
        self.costs.iter().map(|(id, cost)| (*id, *cost))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.costs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    /// Sum over all orders; matches the invoiced amount up to rounding.
    #[inline]
    pub fn total(&self) -> Cost {
        self.costs.values().sum()
    }
}

impl std::fmt::Display for AllocationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:", self.shipment_id)?;
        for (id, cost) in &self.costs {
            write!(f, " {}={:.2}", id, cost)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[inline]
    fn oid(n: u64) -> OrderIdentifier {
        OrderIdentifier::new(n)
    }

    fn result() -> AllocationResult {
        let mut costs = BTreeMap::new();
        costs.insert(oid(2), 493.74);
        costs.insert(oid(1), 740.60);
        AllocationResult::new(ShipmentIdentifier::new(1), costs)
    }

    #[test]
    fn test_lookup_and_len() {
        let r = result();
        assert_eq!(r.shipment_id(), ShipmentIdentifier::new(1));
        assert_eq!(r.len(), 2);
        assert!(!r.is_empty());
        assert_eq!(r.get(oid(1)), Some(740.60));
        assert_eq!(r.get(oid(3)), None);
    }

    #[test]
    fn test_iter_is_ordered_by_order_id() {
        let ids: Vec<_> = result().iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![oid(1), oid(2)]);
    }

    #[test]
    fn test_total() {
        assert!((result().total() - 1234.34).abs() < 1e-9);
        let empty = AllocationResult::new(ShipmentIdentifier::new(2), BTreeMap::new());
        assert!(empty.is_empty());
        assert_eq!(empty.total(), 0.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            result().to_string(),
            "ShipmentId(1): OrderId(1)=740.60 OrderId(2)=493.74"
        );
    }

    #[test]
    fn test_into_costs() {
        let costs = result().into_costs();
        assert_eq!(costs.len(), 2);
    }
}
