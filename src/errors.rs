//! Submodule providing the errors which may occur when building, parsing or
//! combining ranges.

/// Error enumeration associated with the `Range` type.
///
/// # Examples
///
/// ```
/// use pg_ranged::{NumRange, errors::Error};
/// let err = "(1,0)".parse::<NumRange>().unwrap_err();
/// assert!(matches!(err, Error::InvalidBounds { .. }));
/// ```
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Lower bound `{lower}` is greater than upper bound `{upper}`")]
    /// The lower bound coordinate is greater than the upper bound coordinate.
    InvalidBounds {
        /// Coordinate of the offending lower bound.
        lower: f64,
        /// Coordinate of the offending upper bound.
        upper: f64,
    },
    #[error("Unbounded range ends cannot be inclusive")]
    /// An infinite bound was marked as inclusive.
    UnboundedClosed,
    #[error("Malformed range literal `{0}`")]
    /// The literal does not have the shape `empty` or `[lower,upper]`.
    MalformedLiteral(String),
    #[error("Invalid bound value `{0}`")]
    /// A bound could not be converted into a coordinate.
    InvalidBoundValue(String),
    #[error("Lower bound cannot be +infinity and upper bound cannot be -infinity")]
    /// An infinite bound was placed on the wrong side of the range.
    MisplacedInfinity,
    #[error("Union of disjoint ranges is not a single range")]
    /// The ranges neither overlap nor touch.
    DisjointRanges,
    #[error("Difference of ranges is not a single range")]
    /// Subtracting the range would split the minuend in two.
    NonContiguousDifference,
}
