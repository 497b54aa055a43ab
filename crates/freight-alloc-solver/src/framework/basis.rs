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

use crate::{
    framework::allocator::CostAllocator, mileage::MileageAllocator, weight::WeightAllocator,
};
use serde::{Deserialize, Serialize};

/// What a shipment's invoice is split by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AllocationBasis {
    Weight,
    Mileage,
}

impl AllocationBasis {
    pub const ALL: [AllocationBasis; 2] = [AllocationBasis::Weight, AllocationBasis::Mileage];

    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            AllocationBasis::Weight => "weight",
            AllocationBasis::Mileage => "mileage",
        }
    }

    #[inline]
    pub fn allocator(&self) -> Box<dyn CostAllocator> {
        match self {
            AllocationBasis::Weight => Box::new(WeightAllocator::new()),
            AllocationBasis::Mileage => Box::new(MileageAllocator::new()),
        }
    }
}

impl std::fmt::Display for AllocationBasis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParseAllocationBasisError {
    input: String,
}

impl ParseAllocationBasisError {
    #[inline]
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
        }
    }

    #[inline]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl std::fmt::Display for ParseAllocationBasisError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Unknown allocation basis {:?} (expected \"weight\" or \"mileage\")",
            self.input
        )
    }
}

impl std::error::Error for ParseAllocationBasisError {}

impl std::str::FromStr for AllocationBasis {
    type Err = ParseAllocationBasisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "weight" => Ok(AllocationBasis::Weight),
            "mileage" | "miles" => Ok(AllocationBasis::Mileage),
            _ => Err(ParseAllocationBasisError::new(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_names() {
        for basis in AllocationBasis::ALL {
            assert_eq!(basis.as_str().parse::<AllocationBasis>(), Ok(basis));
            assert_eq!(basis.to_string(), basis.as_str());
        }
    }

    #[test]
    fn test_parse_is_lenient_on_case_and_whitespace() {
        assert_eq!(" Weight ".parse::<AllocationBasis>(), Ok(AllocationBasis::Weight));
        assert_eq!("MILES".parse::<AllocationBasis>(), Ok(AllocationBasis::Mileage));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "volume".parse::<AllocationBasis>().unwrap_err();
        assert_eq!(err.input(), "volume");
        assert_eq!(
            err.to_string(),
            "Unknown allocation basis \"volume\" (expected \"weight\" or \"mileage\")"
        );
    }

    #[test]
    fn test_allocator_matches_basis() {
        for basis in AllocationBasis::ALL {
            assert_eq!(basis.allocator().basis(), basis);
        }
    }
}
