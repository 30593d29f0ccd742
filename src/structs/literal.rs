//! Text form of ranges, following PostgreSQL's range literal syntax.

use core::{fmt, str::FromStr};

use super::{Flags, Range};
use crate::{Literal, errors::Error};

/// The literal of the empty range.
const EMPTY: &str = "empty";

impl<A: Literal> Range<A> {
    /// Parses a range literal such as `[1,2)`, `(,5]` or `empty`.
    ///
    /// A blank bound stands for an unbounded end. Bounds that are equal with at
    /// least one side exclusive produce the empty range.
    ///
    /// # Examples
    ///
    /// ```
    /// use pg_ranged::{NumAdapter, NumRange, errors::Error};
    /// # fn main() -> Result<(), Error> {
    /// let range = NumRange::parse_with("[1,)", NumAdapter)?;
    /// assert!(range.upper_infinite());
    /// assert!(NumRange::parse_with("[1,1)", NumAdapter)?.is_empty());
    /// assert_eq!(NumRange::parse_with("[,]", NumAdapter), Err(Error::UnboundedClosed));
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    ///
    /// * `Error::MalformedLiteral` if the literal is not bracketed or does not
    ///   hold exactly one comma.
    /// * `Error::InvalidBoundValue` if a bound is not a value of the domain.
    /// * `Error::UnboundedClosed` if an unbounded end is inclusive.
    /// * `Error::MisplacedInfinity` if the lower bound is `+inf` or the upper
    ///   bound is `-inf`.
    /// * `Error::InvalidBounds` if the lower bound is greater than the upper.
    pub fn parse_with(literal: &str, adapter: A) -> Result<Self, Error> {
        Self::parse_literal(literal, adapter)
            .inspect_err(|err| log::debug!("Rejected range literal {literal:?}: {err}"))
    }

    fn parse_literal(literal: &str, adapter: A) -> Result<Self, Error> {
        let trimmed = literal.trim();
        if trimmed.eq_ignore_ascii_case(EMPTY) {
            return Ok(Self::empty(adapter));
        }

        let malformed = || Error::MalformedLiteral(literal.to_owned());
        let (lower_inclusive, rest) = match trimmed.as_bytes().first() {
            Some(b'[') => (true, &trimmed[1..]),
            Some(b'(') => (false, &trimmed[1..]),
            _ => return Err(malformed()),
        };
        let (upper_inclusive, inner) = match rest.as_bytes().last() {
            Some(b']') => (true, &rest[..rest.len() - 1]),
            Some(b')') => (false, &rest[..rest.len() - 1]),
            _ => return Err(malformed()),
        };
        let (lower_literal, upper_literal) = inner.split_once(',').ok_or_else(malformed)?;
        if upper_literal.contains(',') {
            return Err(malformed());
        }

        let lower = parse_bound(&adapter, lower_literal, f64::NEG_INFINITY)?;
        let upper = parse_bound(&adapter, upper_literal, f64::INFINITY)?;

        if (lower == f64::NEG_INFINITY && lower_inclusive)
            || (upper == f64::INFINITY && upper_inclusive)
        {
            return Err(Error::UnboundedClosed);
        }
        if lower == f64::INFINITY || upper == f64::NEG_INFINITY {
            return Err(Error::MisplacedInfinity);
        }
        if lower == upper && !(lower_inclusive && upper_inclusive) {
            return Ok(Self::empty(adapter));
        }
        Self::from_coordinates(lower, upper, Flags::new(lower_inclusive, upper_inclusive), adapter)
    }

    /// Writes a bound coordinate, leaving unbounded ends blank.
    fn write_bound(&self, coordinate: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if coordinate.is_infinite() {
            return Ok(());
        }
        self.adapter().write_value(&self.adapter().from_coordinate(coordinate), f)
    }
}

/// Parses one side of a range literal, mapping a blank side to `unbounded`.
fn parse_bound<A: Literal>(adapter: &A, literal: &str, unbounded: f64) -> Result<f64, Error> {
    let literal = literal.trim();
    if literal.is_empty() {
        return Ok(unbounded);
    }
    match adapter.parse_coordinate(literal) {
        Some(coordinate) if !coordinate.is_nan() => Ok(coordinate),
        _ => Err(Error::InvalidBoundValue(literal.to_owned())),
    }
}

impl<A: Literal> fmt::Display for Range<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str(EMPTY);
        }
        f.write_str(if self.lower_inclusive() { "[" } else { "(" })?;
        self.write_bound(self.lower_coordinate(), f)?;
        f.write_str(",")?;
        self.write_bound(self.upper_coordinate(), f)?;
        f.write_str(if self.upper_inclusive() { "]" } else { ")" })
    }
}

impl<A: Literal + Default> FromStr for Range<A> {
    type Err = Error;

    #[inline]
    fn from_str(literal: &str) -> Result<Self, Self::Err> {
        Self::parse_with(literal, A::default())
    }
}

#[cfg(feature = "serde")]
impl<A: Literal> serde::Serialize for Range<A> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de, A: Literal + Default> serde::Deserialize<'de> for Range<A> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let literal = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        literal.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{IntRange, NumAdapter, NumRange};

    #[test]
    fn test_parse() -> Result<(), Error> {
        let range: NumRange = "(1,2]".parse()?;
        assert_eq!(range.lower_coordinate(), 1.0);
        assert_eq!(range.upper_coordinate(), 2.0);
        assert!(!range.lower_inclusive());
        assert!(range.upper_inclusive());
        assert_eq!(range.to_string(), "(1,2]");

        let unbounded: NumRange = "(,)".parse()?;
        assert_eq!(unbounded, NumRange::unbounded(NumAdapter));
        assert!(unbounded.lower_infinite());
        assert!(unbounded.upper_infinite());
        assert_eq!(unbounded.to_string(), "(,)");

        assert_eq!(" [ -1.5 , 3e2 ) ".parse::<NumRange>()?.to_string(), "[-1.5,300)");
        Ok(())
    }

    #[test]
    fn test_parse_empty() -> Result<(), Error> {
        for literal in ["empty", "EMPTY", " empty ", "(0,0)", "[0,0)", "(0,0]"] {
            assert!(literal.parse::<NumRange>()?.is_empty(), "{literal} should be empty");
        }
        let point: NumRange = "[0,0]".parse()?;
        assert!(!point.is_empty());
        assert!(point.contains_point(&0.0));
        assert_eq!(NumRange::default().to_string(), "empty");
        Ok(())
    }

    #[test]
    fn test_parse_rejects() {
        for literal in ["", "foo", "(,", "1,2", "[1,2", "(1;2)", "(1,2,3)", "()", "["] {
            let err = literal.parse::<NumRange>().unwrap_err();
            assert!(matches!(err, Error::MalformedLiteral(_)), "{literal:?} gave {err:?}");
        }
        assert!(matches!("(1,0)".parse::<NumRange>(), Err(Error::InvalidBounds { .. })));
        assert_eq!("[,]".parse::<NumRange>(), Err(Error::UnboundedClosed));
        assert_eq!("[-inf,1)".parse::<NumRange>(), Err(Error::UnboundedClosed));
        assert_eq!("(inf,)".parse::<NumRange>(), Err(Error::MisplacedInfinity));
        assert_eq!("(,-infinity)".parse::<NumRange>(), Err(Error::MisplacedInfinity));
        assert_eq!("(a,1)".parse::<NumRange>(), Err(Error::InvalidBoundValue("a".to_owned())));
        assert_eq!("(1,NaN)".parse::<NumRange>(), Err(Error::InvalidBoundValue("NaN".to_owned())));
    }

    #[test]
    fn test_explicit_infinity_is_unbounded() -> Result<(), Error> {
        let range: NumRange = "(-infinity,infinity)".parse()?;
        assert_eq!(range, "(,)".parse()?);
        assert_eq!(range.to_string(), "(,)");
        Ok(())
    }

    #[test]
    fn test_round_trip() -> Result<(), Error> {
        for literal in ["(1,2]", "[0.1,0.30000000000000004)", "(,5]", "[-3,)", "(,)", "empty"] {
            let range: NumRange = literal.parse()?;
            assert_eq!(range.to_string(), literal);
            assert_eq!(range.to_string().parse::<NumRange>()?, range);
        }
        Ok(())
    }

    #[test]
    fn test_int_literals_truncate() -> Result<(), Error> {
        let range: IntRange = "(1.2,2.35]".parse()?;
        assert_eq!(range.lower_value(), Some(1));
        assert_eq!(range.upper_value(), Some(2));
        assert!(!range.lower_inclusive());
        assert!(range.upper_inclusive());
        assert_eq!(range.to_string(), "(1,2]");
        Ok(())
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde() -> Result<(), Box<dyn std::error::Error>> {
        let range: NumRange = "[1,2.5)".parse()?;
        let text = ron::to_string(&range)?;
        assert_eq!(text, "\"[1,2.5)\"");
        let back: NumRange = ron::from_str(&text)?;
        assert_eq!(back, range);
        assert!(ron::from_str::<NumRange>("\"[2,1)\"").is_err());
        Ok(())
    }
}
