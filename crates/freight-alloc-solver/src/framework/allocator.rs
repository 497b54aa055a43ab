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

use crate::framework::basis::AllocationBasis;
use freight_alloc_core::prelude::Cost;
use freight_alloc_model::prelude::{AllocationResult, InvalidShipmentError, Shipment};

/// Splits a shipment's invoiced amount across the orders it carries.
///
/// Implementations are stateless: the same shipment and amount always give
/// the same result, and a failed validation never yields a partial one.
pub trait CostAllocator: Send + Sync {
    fn name(&self) -> &'static str;

    fn basis(&self) -> AllocationBasis;

    /// Runs this allocator's preconditions without computing anything.
    fn validate(&self, shipment: &Shipment) -> Result<(), InvalidShipmentError>;

    /// Costs per order. The sum matches `total_invoiced` up to rounding and
    /// every order appearing on a line item gets an entry.
    fn allocate(
        &self,
        shipment: &Shipment,
        total_invoiced: Cost,
    ) -> Result<AllocationResult, InvalidShipmentError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use freight_alloc_core::prelude::{Miles, Weight};
    use freight_alloc_model::prelude::{
        LineItem, OrderIdentifier, ShipmentIdentifier, Stop, StopSequence,
    };
    use rand::{Rng, SeedableRng, seq::SliceRandom};
    use rand_chacha::ChaCha8Rng;

    const TOLERANCE: f64 = 0.01;

    /// A valid shipment for both bases: distinct sequence numbers starting at
    /// one, positive legs after the first stop, forward pickup/drop-off pairs.
    fn random_shipment(rng: &mut ChaCha8Rng, id: u64) -> Shipment {
        let stop_count: u32 = rng.random_range(2..9);
        let stops: Vec<Stop> = (1..=stop_count)
            .map(|n| {
                let miles = if n == 1 {
                    0.0
                } else {
                    rng.random_range(1.0..500.0)
                };
                Stop::new(StopSequence::new(n), format!("stop-{n}"), Miles::new(miles))
            })
            .collect();

        let item_count: usize = rng.random_range(1..12);
        let items: Vec<LineItem> = (0..item_count)
            .map(|i| {
                let pickup = rng.random_range(1..stop_count);
                let drop_off = rng.random_range(pickup + 1..=stop_count);
                LineItem::new(
                    OrderIdentifier::new(rng.random_range(1..5)),
                    format!("item-{i}"),
                    rng.random_range(1..20),
                    Weight::new(rng.random_range(0.5..300.0)),
                    StopSequence::new(pickup),
                    StopSequence::new(drop_off),
                )
            })
            .collect();

        Shipment::new(ShipmentIdentifier::new(id), stops, items)
    }

    #[test]
    fn test_costs_are_conserved() {
        let mut rng = ChaCha8Rng::seed_from_u64(0xF2E1_0001);
        for id in 0..200 {
            let shipment = random_shipment(&mut rng, id);
            let total: f64 = rng.random_range(0.0..10_000.0);
            for basis in AllocationBasis::ALL {
                let result = basis.allocator().allocate(&shipment, total).unwrap();
                assert!(
                    (result.total() - total).abs() < TOLERANCE,
                    "{basis} allocation of shipment {id} sums to {} instead of {total}",
                    result.total()
                );
            }
        }
    }

    #[test]
    fn test_every_order_gets_an_entry() {
        let mut rng = ChaCha8Rng::seed_from_u64(0xF2E1_0002);
        for id in 0..100 {
            let shipment = random_shipment(&mut rng, id);
            for basis in AllocationBasis::ALL {
                let result = basis.allocator().allocate(&shipment, 1000.0).unwrap();
                let keys: Vec<_> = result.iter().map(|(order, _)| order).collect();
                let expected: Vec<_> = shipment.order_ids().into_iter().collect();
                assert_eq!(keys, expected);
                assert_eq!(result.shipment_id(), shipment.id());
            }
        }
    }

    #[test]
    fn test_zero_total_gives_zero_everywhere() {
        let mut rng = ChaCha8Rng::seed_from_u64(0xF2E1_0003);
        for id in 0..50 {
            let shipment = random_shipment(&mut rng, id);
            for basis in AllocationBasis::ALL {
                let result = basis.allocator().allocate(&shipment, 0.0).unwrap();
                assert!(result.iter().all(|(_, cost)| cost == 0.0));
            }
        }
    }

    #[test]
    fn test_single_line_item_takes_everything() {
        let mut rng = ChaCha8Rng::seed_from_u64(0xF2E1_0004);
        for id in 0..50 {
            let shipment = random_shipment(&mut rng, id);
            let first = shipment.line_items()[0].clone();
            let single = Shipment::new(shipment.id(), shipment.stops().to_vec(), vec![first.clone()]);
            for basis in AllocationBasis::ALL {
                let result = basis.allocator().allocate(&single, 1234.34).unwrap();
                assert_eq!(result.len(), 1);
                let cost = result.get(first.order_id()).unwrap();
                assert!((cost - 1234.34).abs() < TOLERANCE);
            }
        }
    }

    #[test]
    fn test_stop_order_does_not_matter() {
        let mut rng = ChaCha8Rng::seed_from_u64(0xF2E1_0005);
        for id in 0..100 {
            let shipment = random_shipment(&mut rng, id);
            let mut stops = shipment.stops().to_vec();
            stops.shuffle(&mut rng);
            let shuffled =
                Shipment::new(shipment.id(), stops, shipment.line_items().to_vec());

            for basis in AllocationBasis::ALL {
                let allocator = basis.allocator();
                let a = allocator.allocate(&shipment, 777.0).unwrap();
                let b = allocator.allocate(&shuffled, 777.0).unwrap();
                assert_eq!(a, b, "{basis} allocation changed after shuffling stops");
            }
        }
    }

    #[test]
    fn test_validate_agrees_with_allocate() {
        let empty = Shipment::new(ShipmentIdentifier::new(1), vec![], vec![]);
        for basis in AllocationBasis::ALL {
            let allocator = basis.allocator();
            let validated = allocator.validate(&empty).unwrap_err();
            let allocated = allocator.allocate(&empty, 10.0).unwrap_err();
            assert_eq!(validated, allocated);
        }
    }

    #[test]
    fn test_allocators_are_shareable_across_threads() {
        let mut rng = ChaCha8Rng::seed_from_u64(0xF2E1_0006);
        let shipment = random_shipment(&mut rng, 1);
        let allocator = AllocationBasis::Mileage.allocator();
        let expected = allocator.allocate(&shipment, 500.0).unwrap();

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| allocator.allocate(&shipment, 500.0).unwrap()))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }
}
