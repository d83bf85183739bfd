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

use crate::num::precision;

/// A numeric type that can serve as the bounds and step of a stepped range.
///
/// The trait binds a type to its additive identity, its default unit step,
/// and the advance operation that moves a value forward by a step. Integer
/// types advance by plain addition; float types additionally round the
/// result to a caller-captured fractional digit count so repeated advances
/// stay on the decimal grid the range was constructed with.
///
/// # Examples
///
/// ```rust
/// # use gnomon_core::num::step::StepValue;
///
/// assert_eq!(4i32.advance(2, None), 6);
/// assert_eq!(0.04f64.advance(0.02, Some(2)), 0.06);
/// ```
pub trait StepValue: Copy + PartialOrd + Sized {
    /// The additive identity for the type.
    const ZERO: Self;

    /// The default distance between consecutive values.
    const UNIT: Self;

    /// Returns the number of fractional digits needed to render `self`
    /// exactly, or `None` for types with no fractional part.
    fn fraction_digits(self) -> Option<u32>;

    /// Moves `self` forward by `step`, rounding the result to `digits`
    /// fractional digits when a digit count is given.
    fn advance(self, step: Self, digits: Option<u32>) -> Self;
}

macro_rules! step_int_impl {
    ($t:ty) => {
        impl StepValue for $t {
            const ZERO: Self = 0;
            const UNIT: Self = 1;

            #[inline(always)]
            fn fraction_digits(self) -> Option<u32> {
                None
            }

            #[inline(always)]
            fn advance(self, step: Self, _digits: Option<u32>) -> Self {
                self + step
            }
        }
    };
}

step_int_impl!(u8);
step_int_impl!(u16);
step_int_impl!(u32);
step_int_impl!(u64);
step_int_impl!(usize);
step_int_impl!(u128);

step_int_impl!(i8);
step_int_impl!(i16);
step_int_impl!(i32);
step_int_impl!(i64);
step_int_impl!(isize);
step_int_impl!(i128);

macro_rules! step_float_impl {
    ($t:ty) => {
        impl StepValue for $t {
            const ZERO: Self = 0.0;
            const UNIT: Self = 1.0;

            #[inline(always)]
            fn fraction_digits(self) -> Option<u32> {
                Some(precision::fraction_digits(self))
            }

            #[inline]
            fn advance(self, step: Self, digits: Option<u32>) -> Self {
                let moved = self + step;
                match digits {
                    Some(d) => precision::round_to(moved, d),
                    None => moved,
                }
            }
        }
    };
}

step_float_impl!(f32);
step_float_impl!(f64);
