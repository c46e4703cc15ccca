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

//! # timerange
//!
//! Immutable time ranges and boundary-aware containment tests.
//!
//! A [`Range`](range::Range) is a `start`/`end` pair of instants. Whether an
//! instant belongs to it depends on which endpoints the caller counts, so the
//! crate offers one predicate per convention instead of baking one into the
//! type:
//!
//! - `closed_contains`: `[start, end]`
//! - `open_contains`: `(start, end)`
//! - `left_closed_right_open_contains`: `[start, end)`
//! - `left_open_right_closed_contains`: `(start, end]`
//!
//! ## Modules
//!
//! - `range`: the `Range` type, its validating constructors and the
//!   containment predicates. Instants default to `chrono::DateTime<Utc>`
//!   but any `Ord + Copy` type works.
//! - `boundary`: the `Boundary` enum for choosing a convention at run time
//!   and converting a range into `std::ops::Bound` pairs.
//!
//! ## Example
//!
//! ```rust
//! use chrono::{DateTime, TimeDelta};
//! use timerange::{Boundary, Range};
//!
//! let start = DateTime::UNIX_EPOCH;
//! let end = start + TimeDelta::hours(1);
//! let billing_period = Range::new(start, end);
//!
//! assert!(billing_period.left_closed_right_open_contains(start));
//! assert!(!billing_period.contains(end, Boundary::LeftClosedRightOpen));
//! ```

pub mod boundary;
pub mod range;

pub use boundary::Boundary;
pub use range::{InvalidRangeError, Range};
