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

pub mod index;

use crate::{
    framework::{allocator::CostAllocator, basis::AllocationBasis, ledger::CostLedger},
    mileage::index::StopIndex,
};
use freight_alloc_core::prelude::{Cost, Miles, proportional_share};
use freight_alloc_model::prelude::{
    AllocationResult, InvalidShipmentError, Shipment, ShipmentValidator,
};

/// Splits the invoice by the miles each line item's goods rode.
///
/// An item rides every leg arriving at a stop in `(pickup, drop_off]`. The
/// denominator is the sum of those per-item miles, so a leg shared by three
/// items is counted three times. Negative legs are not rejected and simply
/// take part in the arithmetic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MileageAllocator;

impl MileageAllocator {
    #[inline]
    pub fn new() -> Self {
        Self
    }
}

impl std::fmt::Display for MileageAllocator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl CostAllocator for MileageAllocator {
    #[inline]
    fn name(&self) -> &'static str {
        "MileageAllocator"
    }

    #[inline]
    fn basis(&self) -> AllocationBasis {
        AllocationBasis::Mileage
    }

    #[inline]
    fn validate(&self, shipment: &Shipment) -> Result<(), InvalidShipmentError> {
        ShipmentValidator::validate_mileage_basis(shipment)
    }

    #[tracing::instrument(
        level = "debug",
        name = "Mileage Allocation",
        skip_all,
        fields(
            shipment = %shipment.id(),
            stops = shipment.stop_count(),
            items = shipment.line_item_count()
        )
    )]
    fn allocate(
        &self,
        shipment: &Shipment,
        total_invoiced: Cost,
    ) -> Result<AllocationResult, InvalidShipmentError> {
        self.validate(shipment)?;

        let index = StopIndex::from_stops(shipment.iter_stops());
        let traveled: Vec<Miles> = shipment
            .iter_line_items()
            .map(|item| index.traveled_miles(item.pickup(), item.drop_off()))
            .collect();
        let total_miles: Miles = traveled.iter().sum();

        let mut ledger = CostLedger::new(shipment.id());
        for (item, miles) in shipment.iter_line_items().zip(traveled) {
            let cost = proportional_share(miles.value(), total_miles.value(), total_invoiced);
            let running = ledger.record(item.order_id(), cost);
            tracing::trace!(
                "{} rode {} of {} and pays {:.4} ({} so far for {})",
                item,
                miles,
                total_miles,
                cost,
                running,
                item.order_id()
            );
        }

        tracing::debug!(
            "Mileage: split {:.2} over {} orders by {} across {} stops",
            total_invoiced,
            ledger.len(),
            total_miles,
            index.len()
        );
        Ok(ledger.into_result())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use freight_alloc_core::prelude::Weight;
    use freight_alloc_model::prelude::{
        LineItem, OrderIdentifier, ShipmentIdentifier, Stop, StopSequence,
    };

    const TOLERANCE: f64 = 0.01;
    const TOTAL: f64 = 1234.34;

    #[inline]
    fn seq(n: u32) -> StopSequence {
        StopSequence::new(n)
    }

    #[inline]
    fn oid(n: u64) -> OrderIdentifier {
        OrderIdentifier::new(n)
    }

    fn stop(n: u32, address: &str, miles: f64) -> Stop {
        Stop::new(seq(n), address, Miles::new(miles))
    }

    fn item(order: u64, desc: &str, pickup: u32, drop_off: u32) -> LineItem {
        LineItem::new(
            oid(order),
            desc,
            10,
            Weight::new(100.0),
            seq(pickup),
            seq(drop_off),
        )
    }

    fn reference_stops() -> Vec<Stop> {
        vec![
            stop(1, "Warehouse", 0.0),
            stop(2, "Bob's Burgers", 425.0),
            stop(3, "World of Coca-Cola", 123.0),
        ]
    }

    fn reference_items() -> Vec<LineItem> {
        vec![
            item(1, "tigers", 1, 3),
            item(1, "lions", 1, 2),
            item(2, "bears", 2, 3),
        ]
    }

    fn shipment(stops: Vec<Stop>, items: Vec<LineItem>) -> Shipment {
        Shipment::new(ShipmentIdentifier::new(1), stops, items)
    }

    fn allocate(stops: Vec<Stop>, items: Vec<LineItem>) -> AllocationResult {
        MileageAllocator::new()
            .allocate(&shipment(stops, items), TOTAL)
            .unwrap()
    }

    fn reject(stops: Vec<Stop>, items: Vec<LineItem>) -> InvalidShipmentError {
        MileageAllocator::new()
            .allocate(&shipment(stops, items), TOTAL)
            .unwrap_err()
    }

    fn assert_cost(result: &AllocationResult, order: u64, expected: f64) {
        let actual = result.get(oid(order)).expect("order missing from result");
        assert!(
            (actual - expected).abs() < TOLERANCE,
            "order {order}: expected {expected}, got {actual}"
        );
    }

    fn assert_reference_split(result: &AllocationResult) {
        assert_eq!(result.len(), 2);
        assert_cost(result, 1, 1095.82);
        assert_cost(result, 2, 138.53);
    }

    #[test]
    fn test_splits_by_traveled_miles() {
        let result = allocate(reference_stops(), reference_items());
        assert_reference_split(&result);
        assert!((result.total() - TOTAL).abs() < TOLERANCE);
    }

    #[test]
    fn test_sums_line_items_of_same_order() {
        let mut items = reference_items();
        items.push(item(2, "ohmy", 2, 3));
        let result = allocate(reference_stops(), items);
        assert_cost(&result, 1, 985.24);
        assert_cost(&result, 2, 249.10);
    }

    #[test]
    fn test_uncovered_trailing_stop_changes_nothing() {
        let mut stops = reference_stops();
        stops.push(stop(4, "Zoo Atlanta", 123.0));
        assert_reference_split(&allocate(stops, reference_items()));
    }

    #[test]
    fn test_negated_legs_give_same_split() {
        let stops = vec![
            stop(1, "Warehouse", 0.0),
            stop(2, "Bob's Burgers", -425.0),
            stop(3, "World of Coca-Cola", -123.0),
        ];
        assert_reference_split(&allocate(stops, reference_items()));
    }

    #[test]
    fn test_stop_input_order_is_irrelevant() {
        let stops = vec![
            stop(2, "Bob's Burgers", 425.0),
            stop(3, "World of Coca-Cola", 123.0),
            stop(1, "Warehouse", 0.0),
        ];
        assert_reference_split(&allocate(stops, reference_items()));
    }

    #[test]
    fn test_first_stop_may_carry_miles() {
        let stops = vec![
            stop(1, "Warehouse", 999.0),
            stop(2, "Bob's Burgers", 425.0),
            stop(3, "World of Coca-Cola", 123.0),
        ];
        assert_reference_split(&allocate(stops, reference_items()));
    }

    #[test]
    fn test_sequence_numbers_need_not_start_at_one() {
        let stops = vec![
            stop(10, "Warehouse", 0.0),
            stop(20, "Bob's Burgers", 425.0),
            stop(30, "World of Coca-Cola", 123.0),
        ];
        let items = vec![
            item(1, "tigers", 10, 30),
            item(1, "lions", 10, 20),
            item(2, "bears", 20, 30),
        ];
        assert_reference_split(&allocate(stops, items));
    }

    #[test]
    fn test_zero_total_gives_zero() {
        let result = MileageAllocator::new()
            .allocate(&shipment(reference_stops(), reference_items()), 0.0)
            .unwrap();
        assert_eq!(result.get(oid(1)), Some(0.0));
        assert_eq!(result.get(oid(2)), Some(0.0));
    }

    #[test]
    fn test_single_item_takes_everything() {
        let result = allocate(reference_stops(), vec![item(9, "bears", 2, 3)]);
        assert_eq!(result.len(), 1);
        assert_cost(&result, 9, TOTAL);
    }

    #[test]
    fn test_rejects_single_stop() {
        let err = reject(vec![stop(1, "Warehouse", 0.0)], reference_items());
        assert!(matches!(err, InvalidShipmentError::SingleStop(_)));
    }

    #[test]
    fn test_rejects_no_stops() {
        let err = reject(vec![], reference_items());
        assert!(matches!(err, InvalidShipmentError::NoStops(_)));
    }

    #[test]
    fn test_rejects_no_line_items() {
        let err = reject(reference_stops(), vec![]);
        assert!(matches!(err, InvalidShipmentError::NoLineItems(_)));
    }

    #[test]
    fn test_rejects_pickup_equal_to_drop_off() {
        let err = reject(reference_stops(), vec![item(1, "tigers", 2, 2)]);
        assert!(matches!(err, InvalidShipmentError::InvalidStopRange(_)));
    }

    #[test]
    fn test_rejects_pickup_after_drop_off() {
        let err = reject(reference_stops(), vec![item(1, "tigers", 3, 2)]);
        assert!(matches!(err, InvalidShipmentError::InvalidStopRange(_)));
    }

    #[test]
    fn test_rejects_zero_legs() {
        let stops = vec![
            stop(1, "Warehouse", 0.0),
            stop(2, "Bob's Burgers", 0.0),
            stop(3, "World of Coca-Cola", 0.0),
        ];
        let err = reject(stops, reference_items());
        assert!(matches!(err, InvalidShipmentError::ZeroLegDistance(_)));
    }

    #[test]
    fn test_identity() {
        let allocator = MileageAllocator::new();
        assert_eq!(allocator.name(), "MileageAllocator");
        assert_eq!(allocator.basis(), AllocationBasis::Mileage);
        assert_eq!(allocator.to_string(), "MileageAllocator");
    }
}
