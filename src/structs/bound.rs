//! Ordering of range bounds on the coordinate line.

use std::cmp::Ordering;

/// The side of a range a bound delimits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    Lower,
    Upper,
}

/// One end of a non-empty range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Bound {
    pub(crate) coordinate: f64,
    pub(crate) inclusive: bool,
    pub(crate) side: Side,
}

impl Bound {
    #[inline]
    pub(crate) const fn lower(coordinate: f64, inclusive: bool) -> Self {
        Self { coordinate, inclusive, side: Side::Lower }
    }

    #[inline]
    pub(crate) const fn upper(coordinate: f64, inclusive: bool) -> Self {
        Self { coordinate, inclusive, side: Side::Upper }
    }

    /// Where the bound sits relative to its coordinate: an exclusive lower
    /// bound starts just after it, an exclusive upper bound ends just before it.
    #[inline]
    const fn offset(self) -> i8 {
        match (self.inclusive, self.side) {
            (true, _) => 0,
            (false, Side::Lower) => 1,
            (false, Side::Upper) => -1,
        }
    }

    /// Whether `self`, an upper bound, and `lower` meet without overlapping or
    /// leaving a gap.
    #[inline]
    pub(crate) fn touches(self, lower: Self) -> bool {
        self.coordinate == lower.coordinate && self.inclusive != lower.inclusive
    }

    /// The bound delimiting the opposite side at the same coordinate, covering
    /// exactly the points this bound leaves out.
    #[inline]
    pub(crate) const fn complement(self) -> Self {
        let side = match self.side {
            Side::Lower => Side::Upper,
            Side::Upper => Side::Lower,
        };
        Self { coordinate: self.coordinate, inclusive: !self.inclusive, side }
    }
}

/// Orders two bounds of non-empty ranges, whose coordinates are never NaN.
pub(crate) fn compare(a: Bound, b: Bound) -> Ordering {
    // Infinite ends carry no endpoint, so their inclusivity is irrelevant.
    if a.coordinate.is_infinite() && a.coordinate == b.coordinate {
        return Ordering::Equal;
    }
    match a.coordinate.partial_cmp(&b.coordinate) {
        Some(Ordering::Equal) | None => a.offset().cmp(&b.offset()),
        Some(ordering) => ordering,
    }
}
