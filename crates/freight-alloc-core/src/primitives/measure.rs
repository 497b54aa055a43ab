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

use num_traits::Zero;
use std::{
    iter::Sum,
    ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign},
};

pub trait MarkerName {
    const NAME: &'static str;
}

/// A scalar tagged with the unit it measures, so that weights and distances
/// cannot be mixed up when shares are computed.
#[repr(transparent)]
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Measure<T, U>(T, core::marker::PhantomData<U>);

impl<T, U> Measure<T, U> {
    #[inline]
    pub const fn new(value: T) -> Self {
        Measure(value, core::marker::PhantomData)
    }

    #[inline]
    pub fn zero() -> Self
    where
        T: Zero,
    {
        Measure::new(T::zero())
    }

    #[inline]
    pub const fn value(self) -> T
    where
        T: Copy,
    {
        self.0
    }

    #[inline]
    pub fn is_zero(&self) -> bool
    where
        T: Zero,
    {
        self.0.is_zero()
    }

    #[inline]
    pub fn is_positive(&self) -> bool
    where
        T: Zero + PartialOrd,
    {
        self.0 > T::zero()
    }
}

impl<T: std::fmt::Display, U: MarkerName> std::fmt::Display for Measure<T, U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", U::NAME, self.0)
    }
}

impl<T, U> Zero for Measure<T, U>
where
    T: Zero,
{
    #[inline]
    fn zero() -> Self {
        Measure::new(T::zero())
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl<T, U> Default for Measure<T, U>
where
    T: Zero,
{
    #[inline]
    fn default() -> Self {
        Measure::new(T::zero())
    }
}

impl<T, U> From<T> for Measure<T, U> {
    #[inline]
    fn from(v: T) -> Self {
        Measure::new(v)
    }
}

impl<T, U> Add for Measure<T, U>
where
    T: Add<Output = T>,
{
    type Output = Measure<T, U>;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Measure::new(self.0 + rhs.0)
    }
}

impl<T, U> AddAssign for Measure<T, U>
where
    T: AddAssign,
{
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl<T, U> Sub for Measure<T, U>
where
    T: Sub<Output = T>,
{
    type Output = Measure<T, U>;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Measure::new(self.0 - rhs.0)
    }
}

impl<T, U> SubAssign for Measure<T, U>
where
    T: SubAssign,
{
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl<T, U> Neg for Measure<T, U>
where
    T: Neg<Output = T>,
{
    type Output = Measure<T, U>;

    #[inline]
    fn neg(self) -> Self::Output {
        Measure::new(-self.0)
    }
}

impl<T, U> Mul<T> for Measure<T, U>
where
    T: Mul<Output = T>,
{
    type Output = Measure<T, U>;

    #[inline]
    fn mul(self, rhs: T) -> Self::Output {
        Measure::new(self.0 * rhs)
    }
}

impl<T, U> Div<T> for Measure<T, U>
where
    T: Div<Output = T>,
{
    type Output = Measure<T, U>;

    #[inline]
    fn div(self, rhs: T) -> Self::Output {
        Measure::new(self.0 / rhs)
    }
}

impl<T, U> Sum for Measure<T, U>
where
    T: Zero + Add<Output = T>,
{
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Measure::zero(), |acc, m| acc + m)
    }
}

impl<'a, T, U> Sum<&'a Measure<T, U>> for Measure<T, U>
where
    T: Zero + Add<Output = T> + Copy,
    U: 'a,
{
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Measure::zero(), |acc, m| acc + Measure::new(m.0))
    }
}
