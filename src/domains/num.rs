//! Ranges of floating point numbers.

use core::fmt;

use crate::{Adapter, Literal, Range};

/// The identity adapter over `f64`.
///
/// Literals use Rust's float syntax, so `infinity` and `-inf` are accepted and
/// behave like blank bounds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct NumAdapter;

/// A range of `f64` values, like PostgreSQL's `numrange`.
///
/// # Examples
///
/// ```
/// use pg_ranged::NumRange;
/// # fn main() -> Result<(), pg_ranged::errors::Error> {
/// let range: NumRange = "[0.5,)".parse()?;
/// assert!(range.contains_point(&1e300));
/// # Ok(())
/// # }
/// ```
pub type NumRange = Range<NumAdapter>;

impl Adapter for NumAdapter {
    type Value = f64;

    #[inline]
    fn to_coordinate(&self, value: &f64) -> f64 {
        *value
    }

    #[inline]
    fn from_coordinate(&self, coordinate: f64) -> f64 {
        coordinate
    }
}

impl Literal for NumAdapter {
    #[inline]
    fn parse_coordinate(&self, literal: &str) -> Option<f64> {
        literal.parse().ok()
    }

    #[inline]
    fn write_value(&self, value: &f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{value}")
    }
}
