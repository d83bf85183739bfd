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

//! # Gnomon Time
//!
//! **Calendar interval value types for the Gnomon toolkit.**
//!
//! This crate defines the two calendar-facing interval types:
//!
//! * **`date_span`**: `DateSpan`, a closed, day-granularity interval over
//!   calendar dates with combination, intersection, adjacency,
//!   partitioning, enumeration, and sampling operations.
//! * **`window`**: `TimeWindow`, a closed interval over date+time instants
//!   with containment queries, extension/shortening, and a canonical
//!   string encoding.
//!
//! ## Design Philosophy
//!
//! 1.  **Value semantics**: Every type is an immutable `Copy` value; every
//!     transformation returns a new value and no operation can observe
//!     another's effects.
//! 2.  **Fail-Fast**: Constructors validate eagerly and return `Result`,
//!     so no invalid interval is ever materialized.
//! 3.  **Naive instants**: All dates and times are `chrono` naive values;
//!     there is no time-zone or holiday-calendar arithmetic anywhere.
//! 4.  **Injected randomness**: Sampling operations take the random source
//!     as an explicit parameter, keeping them deterministic under test.

pub mod date_span;
pub mod window;
