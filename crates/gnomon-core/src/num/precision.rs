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

//! # Precision Inference
//!
//! Helpers for deriving and applying a fractional digit count. A stepped
//! range over floats captures, at construction, the largest number of
//! fractional digits any of its parameters needs when rendered in decimal,
//! and rounds every subsequent advance back to that many digits. The two
//! halves of that policy live here, isolated from the range itself.
//!
//! The digit count is inferred from the value's shortest decimal rendering
//! (the `Display` output), not from its binary representation. Values whose
//! shortest rendering is long — the classic `0.1 + 0.2` artifacts — infer
//! correspondingly many digits; the heuristic reproduces the source
//! behavior and makes no stronger guarantee for non-terminating fractions.

use num_traits::Float;
use std::fmt::Display;

/// Returns the number of digits after the decimal point in the shortest
/// decimal rendering of `value`.
///
/// Integer-valued inputs render without a decimal point and report zero.
///
/// # Examples
///
/// ```rust
/// # use gnomon_core::num::precision::fraction_digits;
///
/// assert_eq!(fraction_digits(0.02), 2);
/// assert_eq!(fraction_digits(1.375), 3);
/// assert_eq!(fraction_digits(5.0), 0);
/// assert_eq!(fraction_digits(42), 0);
/// ```
pub fn fraction_digits<T: Display>(value: T) -> u32 {
    let rendered = value.to_string();
    match rendered.find('.') {
        Some(dot) => (rendered.len() - dot - 1) as u32,
        None => 0,
    }
}

/// Rounds `value` to `digits` digits after the decimal point.
///
/// # Examples
///
/// ```rust
/// # use gnomon_core::num::precision::round_to;
///
/// assert_eq!(round_to(0.06999999999999999, 2), 0.07);
/// assert_eq!(round_to(1.2349, 2), 1.23);
/// assert_eq!(round_to(-0.005, 1), -0.0);
/// ```
#[inline]
pub fn round_to<T: Float>(value: T, digits: u32) -> T {
    let ten = T::from(10).expect("10 is representable in every float type");
    let factor = ten.powi(digits as i32);
    (value * factor).round() / factor
}
