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

//! # Numeric Foundations
//!
//! Traits and utilities for the numeric types that stepped ranges operate
//! over. This module consolidates per-type constants, the advance operation
//! that moves a value forward by a step, and the fractional-precision
//! helpers that keep floating-point sequences free of accumulated drift.
//!
//! ## Submodules
//!
//! - `step`: The `StepValue` trait binding a numeric type to its additive
//!   identity, unit step, fraction-digit probe, and advance operation,
//!   implemented for all primitive integer types and `f32`/`f64`.
//! - `precision`: Isolated precision inference: counting the fractional
//!   digits of a value's decimal rendering and rounding to a digit count.
//!
//! ## Motivation
//!
//! Enumerating evenly spaced fractional values by repeated addition
//! accumulates representation error. Capturing a digit count up front and
//! rounding every advance keeps the produced sequence on the grid the
//! caller actually wrote down.
//!
//! Refer to each submodule for detailed APIs and examples.

pub mod precision;
pub mod step;
