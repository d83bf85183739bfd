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

//! # Gnomon Core
//!
//! Numeric foundations and generic range primitives for the Gnomon
//! interval toolkit. This crate consolidates the building blocks that the
//! calendar-facing crates and downstream consumers share: stepped closed
//! intervals over numeric types and the per-type arithmetic they bind to.
//!
//! ## Modules
//!
//! - `math`: The `SteppedRange<T>` closed interval `[min, max]` with
//!   normalized bounds, a lazy ascending value sequence, sequence-aware
//!   equality, and string joining.
//! - `num`: Per-type numeric plumbing: the `StepValue` trait that binds a
//!   type to its unit step and advance operation, and the isolated
//!   fractional-precision helpers used to stabilize floating-point steps.
//!
//! ## Purpose
//!
//! These primitives let higher-level code enumerate evenly spaced values
//! over any primitive numeric type without re-deriving rounding or bound
//! normalization logic at every call site.
//!
//! Refer to each module for detailed APIs and examples.

pub mod math;
pub mod num;
