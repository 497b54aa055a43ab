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

use chrono::{DateTime, Utc};
use freight_alloc_core::prelude::{Cost, Miles, Weight};
use freight_alloc_model::prelude::*;
use freight_alloc_solver::prelude::{AllocationBasis, ParseAllocationBasisError};
use serde::Serialize;
use std::{collections::BTreeMap, time::Instant};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;

const BASIS_ENV: &str = "FREIGHT_ALLOC_BASIS";
const TOTAL_INVOICED: Cost = 1234.34;

/* ------------------------- logging ------------------------- */

fn enable_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr)
        .init();
}

/* ------------------------- configuration ------------------------- */

/// Comma separated bases, e.g. `weight,mileage`. Blank entries are skipped
/// and an empty list selects every basis.
fn parse_bases(raw: &str) -> Result<Vec<AllocationBasis>, ParseAllocationBasisError> {
    let mut bases = Vec::new();
    for part in raw.split(',').filter(|p| !p.trim().is_empty()) {
        let basis: AllocationBasis = part.parse()?;
        if !bases.contains(&basis) {
            bases.push(basis);
        }
    }
    if bases.is_empty() {
        bases.extend(AllocationBasis::ALL);
    }
    Ok(bases)
}

fn selected_bases() -> Vec<AllocationBasis> {
    let Ok(raw) = std::env::var(BASIS_ENV) else {
        return AllocationBasis::ALL.to_vec();
    };
    match parse_bases(&raw) {
        Ok(bases) => bases,
        Err(e) => {
            tracing::warn!("Ignoring {}: {}; running every basis", BASIS_ENV, e);
            AllocationBasis::ALL.to_vec()
        }
    }
}

/* ------------------------- shipment ------------------------- */

fn reference_shipment() -> Result<Shipment, DuplicateStopSequenceError> {
    let seq = StopSequence::new;
    let mut builder = ShipmentBuilder::with_capacities(ShipmentIdentifier::new(1), 3, 3);
    builder
        .add_stop(Stop::new(seq(1), "Warehouse", Miles::new(0.0)))
        .add_stop(Stop::new(seq(2), "Bob's Burgers", Miles::new(425.0)))
        .add_stop(Stop::new(seq(3), "World of Coca-Cola", Miles::new(123.0)))
        .add_line_item(LineItem::new(
            OrderIdentifier::new(1),
            "tigers",
            10,
            Weight::new(100.0),
            seq(1),
            seq(3),
        ))
        .add_line_item(LineItem::new(
            OrderIdentifier::new(1),
            "lions",
            10,
            Weight::new(125.0),
            seq(1),
            seq(2),
        ))
        .add_line_item(LineItem::new(
            OrderIdentifier::new(2),
            "bears",
            5,
            Weight::new(150.0),
            seq(2),
            seq(3),
        ));
    builder.build()
}

/* ------------------------- run ------------------------- */

#[derive(Serialize)]
struct RunRecord {
    basis: AllocationBasis,
    allocator: &'static str,
    shipment_id: u64,
    total_invoiced: Cost,
    start_ts: DateTime<Utc>,
    end_ts: DateTime<Utc>,
    runtime_us: u128,
    costs: Option<BTreeMap<u64, Cost>>,
    error: Option<String>,
}

fn run(basis: AllocationBasis, shipment: &Shipment) -> RunRecord {
    let allocator = basis.allocator();
    tracing::info!(
        "Allocating {:.2} of {} by {} with {} stops and {} line items",
        TOTAL_INVOICED,
        shipment.id(),
        basis,
        shipment.stop_count(),
        shipment.line_item_count()
    );

    let start_ts = Utc::now();
    let t0 = Instant::now();
    let outcome = allocator.allocate(shipment, TOTAL_INVOICED);
    let runtime = t0.elapsed();
    let end_ts = Utc::now();

    let (costs, error) = match outcome {
        Ok(result) => {
            tracing::info!("Finished {}: {} in {:?}", allocator.name(), result, runtime);
            let costs = result
                .iter()
                .map(|(order, cost)| (order.into_inner(), cost))
                .collect();
            (Some(costs), None)
        }
        Err(e) => {
            tracing::error!("Failed {}: {}", allocator.name(), e);
            (None, Some(e.to_string()))
        }
    };

    RunRecord {
        basis,
        allocator: allocator.name(),
        shipment_id: shipment.id().into_inner(),
        total_invoiced: TOTAL_INVOICED,
        start_ts,
        end_ts,
        runtime_us: runtime.as_micros(),
        costs,
        error,
    }
}

fn main() {
    enable_tracing();

    let shipment = match reference_shipment() {
        Ok(shipment) => shipment,
        Err(e) => {
            tracing::error!("Could not build the reference shipment: {}", e);
            std::process::exit(1);
        }
    };

    let records: Vec<RunRecord> = selected_bases()
        .into_iter()
        .map(|basis| run(basis, &shipment))
        .collect();

    match serde_json::to_string_pretty(&records) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            tracing::error!("Failed to serialize run records: {}", e);
            std::process::exit(1);
        }
    }
}
