//! Continuous range implementation.

use std::cmp::Ordering;

use super::{
    Flags,
    bound::{self, Bound},
};
use crate::{Adapter, errors::Error};

/// A contiguous, possibly empty and possibly unbounded, interval of a value
/// domain.
///
/// The range stores its bounds as `f64` coordinates obtained through the
/// adapter `A`, using the infinities for unbounded ends. All comparisons and
/// set operations are performed on these coordinates and follow the semantics
/// of PostgreSQL's continuous range types.
///
/// # Examples
///
/// ```
/// use pg_ranged::NumRange;
/// # fn main() -> Result<(), pg_ranged::errors::Error> {
/// let range: NumRange = "(1,2]".parse()?;
/// assert!(range.contains_point(&2.0));
/// assert!(!range.contains_point(&1.0));
/// assert_eq!(range.union(&"(2,3)".parse()?)?.to_string(), "(1,3)");
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Range<A> {
    /// Coordinate of the lower bound, `-inf` if unbounded and NaN if empty.
    lower: f64,
    /// Coordinate of the upper bound, `+inf` if unbounded and NaN if empty.
    upper: f64,
    /// Emptiness and inclusivity of the bounds.
    flags: Flags,
    /// Conversion between domain values and coordinates.
    adapter: A,
}

impl<A: Adapter> Range<A> {
    /// Creates a new range between two domain values.
    ///
    /// When `flags` is [`Flags::EMPTY`] the values are ignored and the empty
    /// range is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use pg_ranged::{Flags, NumAdapter, NumRange};
    /// # fn main() -> Result<(), pg_ranged::errors::Error> {
    /// let range = NumRange::new(1.0, 2.0, Flags::CLOSED, NumAdapter)?;
    /// assert_eq!(range.to_string(), "[1,2]");
    /// assert!(NumRange::new(2.0, 1.0, Flags::CLOSED, NumAdapter).is_err());
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// * `Error::InvalidBounds` if the lower value maps past the upper one.
    /// * `Error::InvalidBoundValue` if either value maps to NaN.
    /// * `Error::MisplacedInfinity` if the lower value maps to `+inf` or the
    ///   upper one to `-inf`.
    pub fn new(lower: A::Value, upper: A::Value, flags: Flags, adapter: A) -> Result<Self, Error> {
        if flags.is_empty() {
            return Ok(Self::empty(adapter));
        }
        let lower = adapter.to_coordinate(&lower);
        let upper = adapter.to_coordinate(&upper);
        Self::from_coordinates(lower, upper, flags, adapter)
    }

    /// Creates a new range directly from bound coordinates.
    ///
    /// An infinite end is always exclusive, whatever `flags` says.
    ///
    /// # Errors
    ///
    /// * `Error::InvalidBounds` if `lower > upper`.
    /// * `Error::InvalidBoundValue` if either coordinate is NaN.
    /// * `Error::MisplacedInfinity` if `lower` is `+inf` or `upper` is `-inf`.
    pub fn from_coordinates(
        lower: f64,
        upper: f64,
        flags: Flags,
        adapter: A,
    ) -> Result<Self, Error> {
        if flags.is_empty() {
            return Ok(Self::empty(adapter));
        }
        if let Some(nan) = [lower, upper].into_iter().find(|coordinate| coordinate.is_nan()) {
            return Err(Error::InvalidBoundValue(nan.to_string()));
        }
        if lower == f64::INFINITY || upper == f64::NEG_INFINITY {
            return Err(Error::MisplacedInfinity);
        }
        if lower > upper {
            return Err(Error::InvalidBounds { lower, upper });
        }
        let flags = Flags::new(
            flags.lower_inclusive() && lower.is_finite(),
            flags.upper_inclusive() && upper.is_finite(),
        );
        Ok(Self { lower, upper, flags, adapter })
    }

    #[inline]
    #[must_use]
    /// Creates the empty range.
    pub const fn empty(adapter: A) -> Self {
        Self { lower: f64::NAN, upper: f64::NAN, flags: Flags::EMPTY, adapter }
    }

    #[inline]
    #[must_use]
    /// Creates the range covering the whole domain, `(,)`.
    pub const fn unbounded(adapter: A) -> Self {
        Self { lower: f64::NEG_INFINITY, upper: f64::INFINITY, flags: Flags::OPEN, adapter }
    }

    /// Returns a copy of this range with the lower bound replaced.
    ///
    /// An empty range stays empty.
    ///
    /// # Errors
    ///
    /// Same as [`Range::new`].
    pub fn with_lower(&self, lower: A::Value) -> Result<Self, Error> {
        let lower = self.adapter.to_coordinate(&lower);
        Self::from_coordinates(lower, self.upper, self.flags, self.adapter.clone())
    }

    /// Returns a copy of this range with the upper bound replaced.
    ///
    /// An empty range stays empty.
    ///
    /// # Errors
    ///
    /// Same as [`Range::new`].
    pub fn with_upper(&self, upper: A::Value) -> Result<Self, Error> {
        let upper = self.adapter.to_coordinate(&upper);
        Self::from_coordinates(self.lower, upper, self.flags, self.adapter.clone())
    }

    #[inline]
    #[must_use]
    /// Returns whether the range contains nothing.
    pub const fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    #[inline]
    #[must_use]
    /// Returns the flags of the range.
    pub const fn flags(&self) -> Flags {
        self.flags
    }

    #[inline]
    #[must_use]
    /// Returns whether the lower bound belongs to the range.
    pub const fn lower_inclusive(&self) -> bool {
        self.flags.lower_inclusive()
    }

    #[inline]
    #[must_use]
    /// Returns whether the upper bound belongs to the range.
    pub const fn upper_inclusive(&self) -> bool {
        self.flags.upper_inclusive()
    }

    #[inline]
    #[must_use]
    /// Returns the raw lower coordinate, NaN for the empty range.
    pub const fn lower_coordinate(&self) -> f64 {
        self.lower
    }

    #[inline]
    #[must_use]
    /// Returns the raw upper coordinate, NaN for the empty range.
    pub const fn upper_coordinate(&self) -> f64 {
        self.upper
    }

    #[inline]
    #[must_use]
    /// Returns whether the range has no lower bound.
    pub fn lower_infinite(&self) -> bool {
        !self.is_empty() && self.lower == f64::NEG_INFINITY
    }

    #[inline]
    #[must_use]
    /// Returns whether the range has no upper bound.
    pub fn upper_infinite(&self) -> bool {
        !self.is_empty() && self.upper == f64::INFINITY
    }

    /// Returns the lower bound as a domain value, if the range is not empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use pg_ranged::NumRange;
    /// # fn main() -> Result<(), pg_ranged::errors::Error> {
    /// let range: NumRange = "(1,2]".parse()?;
    /// assert_eq!(range.lower_value(), Some(1.0));
    /// assert_eq!("empty".parse::<NumRange>()?.lower_value(), None);
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn lower_value(&self) -> Option<A::Value> {
        (!self.is_empty()).then(|| self.adapter.from_coordinate(self.lower))
    }

    /// Returns the upper bound as a domain value, if the range is not empty.
    #[must_use]
    pub fn upper_value(&self) -> Option<A::Value> {
        (!self.is_empty()).then(|| self.adapter.from_coordinate(self.upper))
    }

    #[inline]
    #[must_use]
    /// Returns the adapter of the range.
    pub const fn adapter(&self) -> &A {
        &self.adapter
    }

    #[inline]
    fn lower_bound(&self) -> Bound {
        Bound::lower(self.lower, self.lower_inclusive())
    }

    #[inline]
    fn upper_bound(&self) -> Bound {
        Bound::upper(self.upper, self.upper_inclusive())
    }

    /// Builds a range sharing this range's adapter, collapsing inverted and
    /// zero-width half-open results to the empty range.
    fn between(&self, lower: Bound, upper: Bound) -> Self {
        let adapter = self.adapter.clone();
        let degenerate = lower.coordinate == upper.coordinate && !(lower.inclusive && upper.inclusive);
        if lower.coordinate > upper.coordinate || degenerate {
            return Self::empty(adapter);
        }
        let flags = Flags::new(
            lower.inclusive && lower.coordinate.is_finite(),
            upper.inclusive && upper.coordinate.is_finite(),
        );
        Self { lower: lower.coordinate, upper: upper.coordinate, flags, adapter }
    }

    /// Returns whether this range does not reach further left than `other`.
    ///
    /// False if either range is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use pg_ranged::NumRange;
    /// # fn main() -> Result<(), pg_ranged::errors::Error> {
    /// let range: NumRange = "(1,2]".parse()?;
    /// assert!(range.not_extends_left_of(&"[1,2]".parse()?));
    /// assert!(!range.not_extends_left_of(&"(1.1,2]".parse()?));
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn not_extends_left_of(&self, other: &Self) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && bound::compare(self.lower_bound(), other.lower_bound()).is_ge()
    }

    /// Returns whether this range does not reach further right than `other`.
    ///
    /// False if either range is empty.
    #[must_use]
    pub fn not_extends_right_of(&self, other: &Self) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && bound::compare(self.upper_bound(), other.upper_bound()).is_le()
    }

    /// Returns whether every point of `other` lies in this range.
    ///
    /// Every range contains the empty range; the empty range contains nothing
    /// else.
    #[must_use]
    pub fn contains_range(&self, other: &Self) -> bool {
        other.is_empty() || (other.not_extends_left_of(self) && other.not_extends_right_of(self))
    }

    /// Returns whether the value lies in this range.
    ///
    /// # Examples
    ///
    /// ```
    /// use pg_ranged::NumRange;
    /// # fn main() -> Result<(), pg_ranged::errors::Error> {
    /// let range: NumRange = "(1,2]".parse()?;
    /// assert!(range.contains_point(&1.1));
    /// assert!(!range.contains_point(&f64::NAN));
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn contains_point(&self, point: &A::Value) -> bool {
        if self.is_empty() {
            return false;
        }
        let coordinate = self.adapter.to_coordinate(point);
        let above_lower =
            coordinate > self.lower || (coordinate == self.lower && self.lower_inclusive());
        let below_upper =
            coordinate < self.upper || (coordinate == self.upper && self.upper_inclusive());
        above_lower && below_upper
    }

    /// Returns whether this range ends before `other` starts.
    ///
    /// False if either range is empty.
    #[must_use]
    pub fn strictly_left_of(&self, other: &Self) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && bound::compare(self.upper_bound(), other.lower_bound()).is_lt()
    }

    /// Returns whether this range starts after `other` ends.
    ///
    /// False if either range is empty.
    #[must_use]
    pub fn strictly_right_of(&self, other: &Self) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && bound::compare(self.lower_bound(), other.upper_bound()).is_gt()
    }

    /// Returns whether the two ranges share at least one point.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && !(self.strictly_left_of(other) || self.strictly_right_of(other))
    }

    /// Returns whether the two ranges meet at a single coordinate without
    /// sharing a point or leaving one out.
    ///
    /// # Examples
    ///
    /// ```
    /// use pg_ranged::NumRange;
    /// # fn main() -> Result<(), pg_ranged::errors::Error> {
    /// let range: NumRange = "(1,2]".parse()?;
    /// assert!(range.adjacent_to(&"(2,3)".parse()?));
    /// assert!(!range.adjacent_to(&"[2,3)".parse()?));
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn adjacent_to(&self, other: &Self) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && (self.upper_bound().touches(other.lower_bound())
                || other.upper_bound().touches(self.lower_bound()))
    }

    /// Returns the smallest range covering both ranges.
    ///
    /// # Errors
    ///
    /// `Error::DisjointRanges` if the ranges neither overlap nor are adjacent.
    pub fn union(&self, other: &Self) -> Result<Self, Error> {
        if other.is_empty() {
            return Ok(self.clone());
        }
        if self.is_empty() {
            return Ok(other.clone());
        }
        if !self.overlaps(other) && !self.adjacent_to(other) {
            log::trace!(
                "Refusing union of disjoint ranges ({}, {}) and ({}, {})",
                self.lower,
                self.upper,
                other.lower,
                other.upper
            );
            return Err(Error::DisjointRanges);
        }
        // Equal bounds share their inclusivity, so ties may keep either side.
        let lower = match bound::compare(self.lower_bound(), other.lower_bound()) {
            Ordering::Greater => other.lower_bound(),
            _ => self.lower_bound(),
        };
        let upper = match bound::compare(self.upper_bound(), other.upper_bound()) {
            Ordering::Less => other.upper_bound(),
            _ => self.upper_bound(),
        };
        Ok(self.between(lower, upper))
    }

    /// Returns the range of points lying in both ranges.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        if !self.overlaps(other) {
            return Self::empty(self.adapter.clone());
        }
        let lower = match bound::compare(self.lower_bound(), other.lower_bound()) {
            Ordering::Less => other.lower_bound(),
            _ => self.lower_bound(),
        };
        let upper = match bound::compare(self.upper_bound(), other.upper_bound()) {
            Ordering::Greater => other.upper_bound(),
            _ => self.upper_bound(),
        };
        self.between(lower, upper)
    }

    /// Returns the points of this range that do not lie in `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pg_ranged::{NumRange, errors::Error};
    /// # fn main() -> Result<(), Error> {
    /// let range: NumRange = "(1,2]".parse()?;
    /// assert_eq!(range.difference(&"(1.5,3)".parse()?)?.to_string(), "(1,1.5]");
    /// assert_eq!(range.difference(&"(1.1,1.3)".parse()?), Err(Error::NonContiguousDifference));
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// `Error::NonContiguousDifference` if `other` lies strictly inside this
    /// range, which would leave two pieces.
    pub fn difference(&self, other: &Self) -> Result<Self, Error> {
        if !self.overlaps(other) {
            return Ok(self.clone());
        }
        match (
            bound::compare(self.lower_bound(), other.lower_bound()),
            bound::compare(self.upper_bound(), other.upper_bound()),
        ) {
            (Ordering::Less, Ordering::Greater) => {
                log::trace!(
                    "Refusing difference: ({}, {}) lies inside ({}, {})",
                    other.lower,
                    other.upper,
                    self.lower,
                    self.upper
                );
                Err(Error::NonContiguousDifference)
            }
            (Ordering::Less, _) => {
                Ok(self.between(self.lower_bound(), other.lower_bound().complement()))
            }
            (_, Ordering::Greater) => {
                Ok(self.between(other.upper_bound().complement(), self.upper_bound()))
            }
            _ => Ok(Self::empty(self.adapter.clone())),
        }
    }
}

impl<A> PartialEq for Range<A> {
    fn eq(&self, other: &Self) -> bool {
        if self.flags.is_empty() || other.flags.is_empty() {
            return self.flags.is_empty() && other.flags.is_empty();
        }
        self.lower == other.lower && self.upper == other.upper && self.flags == other.flags
    }
}

impl<A> Eq for Range<A> {}

impl<A: Adapter + Default> Default for Range<A> {
    #[inline]
    fn default() -> Self {
        Self::empty(A::default())
    }
}

impl<A: Adapter + Default> TryFrom<(A::Value, A::Value, Flags)> for Range<A> {
    type Error = Error;

    #[inline]
    fn try_from((lower, upper, flags): (A::Value, A::Value, Flags)) -> Result<Self, Self::Error> {
        Self::new(lower, upper, flags, A::default())
    }
}
