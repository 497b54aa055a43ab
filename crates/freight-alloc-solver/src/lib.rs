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

//! Splits the invoiced cost of a shipment across the orders it carries.
//!
//! Two bases are available:
//! - [`weight::WeightAllocator`]: each line item pays in proportion to its
//!   weight. Stops are ignored.
//! - [`mileage::MileageAllocator`]: each line item pays in proportion to the
//!   miles its goods rode, i.e. the legs arriving at stops in
//!   `(pickup, drop_off]`.
//!
//! Both implement [`framework::allocator::CostAllocator`]; pick one directly
//! or through [`framework::basis::AllocationBasis::allocator`].

pub mod framework;
pub mod mileage;
pub mod weight;

pub mod prelude {
    pub use crate::framework::allocator::CostAllocator;
    pub use crate::framework::basis::{AllocationBasis, ParseAllocationBasisError};
    pub use crate::framework::ledger::CostLedger;
    pub use crate::mileage::MileageAllocator;
    pub use crate::mileage::index::StopIndex;
    pub use crate::weight::WeightAllocator;
}
