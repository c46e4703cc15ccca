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

//! Endpoint conventions for containment tests.

use std::ops::Bound;

/// Which endpoints of a range take part in a containment test.
///
/// The variants correspond one-to-one to the containment predicates on
/// [`Range`](crate::range::Range), which makes it possible to pick the
/// convention at run time, e.g. from a schedule definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Boundary {
    /// `[start, end]`: both endpoints included.
    Closed,
    /// `(start, end)`: both endpoints excluded.
    Open,
    /// `[start, end)`: start included, end excluded.
    LeftClosedRightOpen,
    /// `(start, end]`: start excluded, end included.
    LeftOpenRightClosed,
}

impl Boundary {
    /// All boundary conventions.
    pub const ALL: [Boundary; 4] = [
        Boundary::Closed,
        Boundary::Open,
        Boundary::LeftClosedRightOpen,
        Boundary::LeftOpenRightClosed,
    ];

    /// Returns `true` if the start of a range is included.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use timerange::boundary::Boundary;
    ///
    /// assert!(Boundary::LeftClosedRightOpen.includes_start());
    /// assert!(!Boundary::LeftOpenRightClosed.includes_start());
    /// ```
    #[inline]
    pub const fn includes_start(self) -> bool {
        matches!(self, Boundary::Closed | Boundary::LeftClosedRightOpen)
    }

    /// Returns `true` if the end of a range is included.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use timerange::boundary::Boundary;
    ///
    /// assert!(Boundary::LeftOpenRightClosed.includes_end());
    /// assert!(!Boundary::LeftClosedRightOpen.includes_end());
    /// ```
    #[inline]
    pub const fn includes_end(self) -> bool {
        matches!(self, Boundary::Closed | Boundary::LeftOpenRightClosed)
    }

    /// Wraps `start` and `end` in the `std::ops::Bound` matching this convention.
    #[inline]
    pub(crate) fn wrap<T>(self, start: T, end: T) -> (Bound<T>, Bound<T>) {
        let start = if self.includes_start() {
            Bound::Included(start)
        } else {
            Bound::Excluded(start)
        };
        let end = if self.includes_end() {
            Bound::Included(end)
        } else {
            Bound::Excluded(end)
        };
        (start, end)
    }
}

impl std::fmt::Display for Boundary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Boundary::Closed => "[]",
            Boundary::Open => "()",
            Boundary::LeftClosedRightOpen => "[)",
            Boundary::LeftOpenRightClosed => "(]",
        };
        f.write_str(s)
    }
}
