//! Traits connecting a value domain to the coordinate space of [`Range`].
//!
//! [`Range`]: crate::Range

use core::fmt;

/// Maps the values of a domain onto `f64` coordinates and back.
///
/// Both conversions must be pure and inverse to each other on finite
/// coordinates. The domain's maximum and minimum sentinels, if it has any,
/// must map to `f64::INFINITY` and `f64::NEG_INFINITY` so that unbounded range
/// ends behave the same way in every domain.
///
/// # Examples
///
/// ```
/// use pg_ranged::{Adapter, Flags, Range};
///
/// #[derive(Clone, Copy, Debug, Default)]
/// struct Celsius;
///
/// impl Adapter for Celsius {
///     type Value = i16;
///
///     fn to_coordinate(&self, value: &i16) -> f64 {
///         f64::from(*value)
///     }
///
///     fn from_coordinate(&self, coordinate: f64) -> i16 {
///         coordinate as i16
///     }
/// }
///
/// # fn main() -> Result<(), pg_ranged::errors::Error> {
/// let room = Range::new(18, 24, Flags::CLOSED, Celsius)?;
/// assert!(room.contains_point(&21));
/// assert_eq!(room.upper_value(), Some(24));
/// # Ok(())
/// # }
/// ```
pub trait Adapter: Clone {
    /// The type of the values delimiting the range.
    type Value;

    /// Projects a value onto the coordinate line.
    fn to_coordinate(&self, value: &Self::Value) -> f64;

    /// Maps a coordinate back onto a value of the domain.
    fn from_coordinate(&self, coordinate: f64) -> Self::Value;
}

/// Text input and output of bare bound values.
///
/// The range parser splits a literal such as `[1,2)` into its bound
/// substrings and hands each non-blank substring to
/// [`parse_coordinate`](Literal::parse_coordinate). Finite bounds are rendered
/// back through [`write_value`](Literal::write_value).
pub trait Literal: Adapter {
    /// Parses a bare bound literal, returning `None` if it is not a value of
    /// this domain.
    fn parse_coordinate(&self, literal: &str) -> Option<f64>;

    /// Writes a bound value in the form accepted by
    /// [`parse_coordinate`](Literal::parse_coordinate).
    ///
    /// # Errors
    ///
    /// Propagates errors of the underlying formatter.
    fn write_value(&self, value: &Self::Value, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}
