//! Ranges of primitive integers.

use core::{fmt, marker::PhantomData};

use num_traits::{NumCast, PrimInt};

use crate::{Adapter, Literal, Range};

/// Adapter for any primitive integer type.
///
/// The type's maximum maps to `+inf`; for signed types the minimum maps to
/// `-inf`. Coordinates are `f64`, so integers beyond 2^53 lose precision.
/// Values whose coordinate would round onto a sentinel map to NaN, so ranges
/// using them are rejected with `Error::InvalidBoundValue`.
///
/// Bound literals are read as decimal numbers and truncated toward zero.
pub struct IntAdapter<N> {
    _marker: PhantomData<fn() -> N>,
}

/// A range of integers. No canonicalization happens: `[1,3)` and `[1,2]`
/// remain distinct values.
///
/// # Examples
///
/// ```
/// use pg_ranged::IntRange;
/// # fn main() -> Result<(), pg_ranged::errors::Error> {
/// let range: IntRange<i32> = "[1,10)".parse()?;
/// assert!(range.contains_point(&9));
/// assert!(!range.contains_point(&10));
/// assert_eq!(range.upper_value(), Some(10));
/// # Ok(())
/// # }
/// ```
pub type IntRange<N = i64> = Range<IntAdapter<N>>;

impl<N> IntAdapter<N> {
    #[inline]
    #[must_use]
    /// Creates a new integer adapter.
    pub const fn new() -> Self {
        Self { _marker: PhantomData }
    }
}

impl<N> Default for IntAdapter<N> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<N> Clone for IntAdapter<N> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<N> Copy for IntAdapter<N> {}

impl<N> fmt::Debug for IntAdapter<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntAdapter").finish()
    }
}

impl<N: PrimInt> IntAdapter<N> {
    #[inline]
    fn has_lower_sentinel() -> bool {
        N::min_value() < N::zero()
    }

    #[inline]
    fn is_sentinel(value: N) -> bool {
        value == N::max_value() || (Self::has_lower_sentinel() && value == N::min_value())
    }
}

impl<N: PrimInt> Adapter for IntAdapter<N> {
    type Value = N;

    fn to_coordinate(&self, value: &N) -> f64 {
        if *value == N::max_value() {
            f64::INFINITY
        } else if Self::has_lower_sentinel() && *value == N::min_value() {
            f64::NEG_INFINITY
        } else {
            value
                .to_f64()
                .filter(|coordinate| {
                    <N as NumCast>::from(*coordinate).is_some_and(|back| !Self::is_sentinel(back))
                })
                .unwrap_or(f64::NAN)
        }
    }

    fn from_coordinate(&self, coordinate: f64) -> N {
        if coordinate == f64::INFINITY {
            return N::max_value();
        }
        if coordinate == f64::NEG_INFINITY {
            return N::min_value();
        }
        <N as NumCast>::from(coordinate.trunc()).unwrap_or_else(|| {
            if coordinate < 0.0 { N::min_value() } else { N::max_value() }
        })
    }
}

impl<N: PrimInt + fmt::Display> Literal for IntAdapter<N> {
    fn parse_coordinate(&self, literal: &str) -> Option<f64> {
        let coordinate = literal.parse::<f64>().ok()?.trunc();
        if coordinate.is_infinite() {
            return Some(coordinate);
        }
        <N as NumCast>::from(coordinate).map(|value| self.to_coordinate(&value))
    }

    #[inline]
    fn write_value(&self, value: &N, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{value}")
    }
}
