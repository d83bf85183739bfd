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

//! # Math Primitives
//!
//! Interval structures over ordered numeric types. The module currently
//! focuses on closed stepped ranges, designed to integrate cleanly with
//! Rust's iterator ecosystem.
//!
//! ## Submodules
//!
//! - `range`: A generic `[min, max]` interval that also defines an
//!   ascending, evenly stepped value sequence, with normalized bound
//!   order, sequence-aware equality, separator joining, and iteration
//!   support (`Iterator`, `FusedIterator`, `IntoIterator`).
//!
//! ## Motivation
//!
//! Parameter sweeps and schedule grids routinely need "every value from A
//! to B in steps of S" with both endpoints honored. A dedicated closed
//! range type keeps the endpoint and rounding rules in one place instead
//! of scattering them across ad hoc loops.
//!
//! Refer to the `range` module for detailed APIs and examples.

pub mod range;
