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

//! # Time Ranges
//!
//! An immutable interval between two instants, with containment tests for
//! every combination of included and excluded endpoints.
//!
//! The predicates agree on the interior of a range and differ only at the
//! endpoints. A degenerate range, whose start equals its end, is the one
//! place where they diverge beyond that: only closed containment matches the
//! single point, the other three conventions match nothing.

use crate::boundary::Boundary;
use chrono::{DateTime, Utc};
use std::ops::Bound;

/// An interval between a `start` and an `end` instant.
///
/// The type carries no boundary convention of its own; each containment test
/// states which endpoints it includes.
///
/// # Invariants
///
/// `start` must be less than or equal to `end`. [`Range::new`] and
/// [`Range::try_new`] enforce this, [`Range::new_unchecked`] and
/// [`Default`] do not.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Range<T = DateTime<Utc>>
where
    T: Ord + Copy,
{
    start: T,
    end: T,
}

/// Error returned when a range would end before it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidRangeError<T> {
    /// The rejected start.
    pub start: T,
    /// The rejected end, which precedes `start`.
    pub end: T,
}

impl<T> std::fmt::Display for InvalidRangeError<T>
where
    T: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Invalid range: end {} is before start {}",
            self.end, self.start
        )
    }
}

impl<T> std::error::Error for InvalidRangeError<T> where T: std::fmt::Debug + std::fmt::Display {}

impl<T> Range<T>
where
    T: Ord + Copy,
{
    /// Creates a new `Range` from `start` to `end`.
    ///
    /// # Panics
    ///
    /// Panics if `end` is before `start`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chrono::{DateTime, TimeDelta};
    /// # use timerange::range::Range;
    ///
    /// let start = DateTime::UNIX_EPOCH;
    /// let end = start + TimeDelta::seconds(1);
    /// let range = Range::new(start, end);
    /// assert_eq!(range.start(), start);
    /// assert_eq!(range.end(), end);
    /// ```
    #[inline]
    pub fn new(start: T, end: T) -> Self {
        assert!(
            start <= end,
            "Invalid range: end must not be before start"
        );
        Self { start, end }
    }

    /// Creates a new `Range` if `end` is not before `start`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chrono::{DateTime, TimeDelta};
    /// # use timerange::range::Range;
    ///
    /// let t0 = DateTime::UNIX_EPOCH;
    /// let t1 = t0 + TimeDelta::seconds(1);
    /// assert!(Range::try_new(t0, t1).is_ok());
    /// assert!(Range::try_new(t1, t0).is_err());
    /// ```
    #[inline]
    pub fn try_new(start: T, end: T) -> Result<Self, InvalidRangeError<T>> {
        if start <= end {
            Ok(Self { start, end })
        } else {
            Err(InvalidRangeError { start, end })
        }
    }

    /// Creates a new `Range` without checking the ordering in release builds.
    ///
    /// The caller must ensure `start <= end`. A range that ends before it
    /// starts never matches its interior; each predicate then only matches
    /// the endpoints it includes.
    #[inline]
    pub fn new_unchecked(start: T, end: T) -> Self {
        debug_assert!(
            start <= end,
            "Invalid range: end must not be before start"
        );
        Self { start, end }
    }

    /// Returns the start of the range.
    #[inline]
    pub const fn start(&self) -> T {
        self.start
    }

    /// Returns the end of the range.
    #[inline]
    pub const fn end(&self) -> T {
        self.end
    }

    /// Consumes the range and returns `(start, end)`.
    #[inline]
    pub fn into_inner(self) -> (T, T) {
        (self.start, self.end)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.start == self.end
    }

    // Strict interior; never true for an empty range.
    #[inline]
    fn interior_contains(&self, t: T) -> bool {
        !self.is_empty() && self.start < t && t < self.end
    }

    /// Returns `true` if `t` lies in `[start, end]`.
    ///
    /// This is the only predicate that matches the point of an empty range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chrono::{DateTime, TimeDelta};
    /// # use timerange::range::Range;
    ///
    /// let t0 = DateTime::UNIX_EPOCH;
    /// let t1 = t0 + TimeDelta::seconds(1);
    /// let range = Range::new(t0, t1);
    /// assert!(range.closed_contains(t0));
    /// assert!(range.closed_contains(t1));
    /// assert!(!range.closed_contains(t1 + TimeDelta::nanoseconds(1)));
    ///
    /// assert!(Range::new(t0, t0).closed_contains(t0));
    /// ```
    #[inline]
    pub fn closed_contains(&self, t: T) -> bool {
        self.start == t || self.interior_contains(t) || t == self.end
    }

    /// Returns `true` if `t` lies in `(start, end)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chrono::{DateTime, TimeDelta};
    /// # use timerange::range::Range;
    ///
    /// let t0 = DateTime::UNIX_EPOCH;
    /// let range = Range::new(t0, t0 + TimeDelta::seconds(1));
    /// assert!(!range.open_contains(t0));
    /// assert!(range.open_contains(t0 + TimeDelta::nanoseconds(1)));
    /// ```
    #[inline]
    pub fn open_contains(&self, t: T) -> bool {
        self.interior_contains(t)
    }

    /// Returns `true` if `t` lies in `[start, end)`.
    ///
    /// An empty range contains nothing, not even its start.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chrono::{DateTime, TimeDelta};
    /// # use timerange::range::Range;
    ///
    /// let t0 = DateTime::UNIX_EPOCH;
    /// let t1 = t0 + TimeDelta::seconds(1);
    /// let range = Range::new(t0, t1);
    /// assert!(range.left_closed_right_open_contains(t0));
    /// assert!(!range.left_closed_right_open_contains(t1));
    ///
    /// assert!(!Range::new(t0, t0).left_closed_right_open_contains(t0));
    /// ```
    #[inline]
    pub fn left_closed_right_open_contains(&self, t: T) -> bool {
        (!self.is_empty() && self.start == t) || self.interior_contains(t)
    }

    /// Returns `true` if `t` lies in `(start, end]`.
    ///
    /// An empty range contains nothing, not even its end.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chrono::{DateTime, TimeDelta};
    /// # use timerange::range::Range;
    ///
    /// let t0 = DateTime::UNIX_EPOCH;
    /// let t1 = t0 + TimeDelta::seconds(1);
    /// let range = Range::new(t0, t1);
    /// assert!(!range.left_open_right_closed_contains(t0));
    /// assert!(range.left_open_right_closed_contains(t1));
    /// ```
    #[inline]
    pub fn left_open_right_closed_contains(&self, t: T) -> bool {
        self.interior_contains(t) || (!self.is_empty() && t == self.end)
    }

    /// Returns `true` if `t` is contained under the given `boundary`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chrono::{DateTime, TimeDelta};
    /// # use timerange::boundary::Boundary;
    /// # use timerange::range::Range;
    ///
    /// let t0 = DateTime::UNIX_EPOCH;
    /// let t1 = t0 + TimeDelta::seconds(1);
    /// let range = Range::new(t0, t1);
    /// assert!(range.contains(t1, Boundary::Closed));
    /// assert!(!range.contains(t1, Boundary::LeftClosedRightOpen));
    /// ```
    #[inline]
    pub fn contains(&self, t: T, boundary: Boundary) -> bool {
        match boundary {
            Boundary::Closed => self.closed_contains(t),
            Boundary::Open => self.open_contains(t),
            Boundary::LeftClosedRightOpen => self.left_closed_right_open_contains(t),
            Boundary::LeftOpenRightClosed => self.left_open_right_closed_contains(t),
        }
    }

    /// Returns the range as a pair of `std::ops::Bound`s under `boundary`.
    ///
    /// The pair implements `RangeBounds<T>` and selects the same instants as
    /// [`Range::contains`]. Note that `BTreeMap::range` panics on an empty
    /// range with both ends excluded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use std::collections::BTreeMap;
    /// # use timerange::boundary::Boundary;
    /// # use timerange::range::Range;
    ///
    /// let events: BTreeMap<i64, &str> = [(0, "a"), (5, "b"), (10, "c")].into();
    /// let window = Range::new(0_i64, 10);
    /// let hits: Vec<_> = events
    ///     .range(window.bounds(Boundary::LeftClosedRightOpen))
    ///     .map(|(_, v)| *v)
    ///     .collect();
    /// assert_eq!(hits, vec!["a", "b"]);
    /// ```
    #[inline]
    pub fn bounds(&self, boundary: Boundary) -> (Bound<T>, Bound<T>) {
        boundary.wrap(self.start, self.end)
    }
}

impl<T> std::fmt::Debug for Range<T>
where
    T: Ord + Copy + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Range")
            .field("start", &self.start)
            .field("end", &self.end)
            .finish()
    }
}

impl<T> std::fmt::Display for Range<T>
where
    T: Ord + Copy + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl<T> TryFrom<(T, T)> for Range<T>
where
    T: Ord + Copy,
{
    type Error = InvalidRangeError<T>;

    #[inline]
    fn try_from((start, end): (T, T)) -> Result<Self, Self::Error> {
        Self::try_new(start, end)
    }
}

impl<T> From<Range<T>> for (T, T)
where
    T: Ord + Copy,
{
    #[inline]
    fn from(range: Range<T>) -> Self {
        range.into_inner()
    }
}
