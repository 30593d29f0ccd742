//! Ranges of calendar dates.

use core::fmt;

use chrono::{DateTime, NaiveDate, NaiveTime};

use crate::{Adapter, Literal, Range};

/// Adapter for [`NaiveDate`] values.
///
/// Coordinates are the milliseconds between the Unix epoch and midnight UTC of
/// the date. [`NaiveDate::MAX`] and [`NaiveDate::MIN`] stand for the unbounded
/// ends. Bound literals follow a `strftime` format, and `infinity` or
/// `-infinity` may be written for an unbounded end.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DateAdapter {
    /// The `strftime` format of bound literals.
    format: &'static str,
}

/// A range of calendar dates, like PostgreSQL's `daterange` without the
/// canonicalization.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use pg_ranged::{DateAdapter, DateRange};
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let range: DateRange = "[02-01-2024,03-01-2024)".parse()?;
/// let leap_day = NaiveDate::from_ymd_opt(2024, 2, 29).ok_or("invalid date")?;
/// assert!(range.contains_point(&leap_day));
///
/// let iso = DateRange::parse_with("[2024-02-01,)", DateAdapter::with_format("%Y-%m-%d"))?;
/// assert_eq!(iso.to_string(), "[2024-02-01,)");
/// # Ok(())
/// # }
/// ```
pub type DateRange = Range<DateAdapter>;

impl DateAdapter {
    /// The literal format used by [`DateAdapter::default`], `MM-DD-YYYY`.
    pub const DEFAULT_FORMAT: &'static str = "%m-%d-%Y";

    #[inline]
    #[must_use]
    /// Creates an adapter reading and writing dates in the given format.
    pub const fn with_format(format: &'static str) -> Self {
        Self { format }
    }

    #[inline]
    #[must_use]
    /// Returns the literal format of the adapter.
    pub const fn format(&self) -> &'static str {
        self.format
    }
}

impl Default for DateAdapter {
    #[inline]
    fn default() -> Self {
        Self::with_format(Self::DEFAULT_FORMAT)
    }
}

impl Adapter for DateAdapter {
    type Value = NaiveDate;

    fn to_coordinate(&self, value: &NaiveDate) -> f64 {
        if *value == NaiveDate::MAX {
            f64::INFINITY
        } else if *value == NaiveDate::MIN {
            f64::NEG_INFINITY
        } else {
            value.and_time(NaiveTime::MIN).and_utc().timestamp_millis() as f64
        }
    }

    fn from_coordinate(&self, coordinate: f64) -> NaiveDate {
        if coordinate == f64::INFINITY {
            return NaiveDate::MAX;
        }
        if coordinate == f64::NEG_INFINITY {
            return NaiveDate::MIN;
        }
        DateTime::from_timestamp_millis(coordinate as i64).map_or_else(
            || if coordinate < 0.0 { NaiveDate::MIN } else { NaiveDate::MAX },
            |datetime| datetime.date_naive(),
        )
    }
}

impl Literal for DateAdapter {
    fn parse_coordinate(&self, literal: &str) -> Option<f64> {
        if literal.eq_ignore_ascii_case("infinity") {
            return Some(f64::INFINITY);
        }
        if literal.eq_ignore_ascii_case("-infinity") {
            return Some(f64::NEG_INFINITY);
        }
        NaiveDate::parse_from_str(literal, self.format).ok().map(|date| self.to_coordinate(&date))
    }

    #[inline]
    fn write_value(&self, value: &NaiveDate, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", value.format(self.format))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap_or_else(|| panic!("{year}-{month}-{day}"))
    }

    #[test]
    fn test_parse() -> Result<(), Error> {
        let range: DateRange = "(10-07-2001,02-14-2025)".parse()?;
        assert_eq!(range.lower_value(), Some(date(2001, 10, 7)));
        assert_eq!(range.upper_value(), Some(date(2025, 2, 14)));
        assert_eq!(range.lower_coordinate(), 1_002_412_800_000.0);
        assert_eq!(range.to_string(), "(10-07-2001,02-14-2025)");
        Ok(())
    }

    #[test]
    fn test_coordinates_round_trip() {
        let adapter = DateAdapter::default();
        for day in [date(1970, 1, 1), date(1969, 12, 31), date(2400, 2, 29)] {
            assert_eq!(adapter.from_coordinate(adapter.to_coordinate(&day)), day);
        }
        assert_eq!(adapter.to_coordinate(&date(1970, 1, 2)), 86_400_000.0);
    }

    #[test]
    fn test_sentinels() {
        let adapter = DateAdapter::default();
        assert_eq!(adapter.to_coordinate(&NaiveDate::MAX), f64::INFINITY);
        assert_eq!(adapter.to_coordinate(&NaiveDate::MIN), f64::NEG_INFINITY);
        assert_eq!(adapter.from_coordinate(f64::INFINITY), NaiveDate::MAX);
        assert_eq!(adapter.from_coordinate(f64::NEG_INFINITY), NaiveDate::MIN);
    }

    #[test]
    fn test_infinity_literals() -> Result<(), Error> {
        let range: DateRange = "(-infinity,01-01-2000]".parse()?;
        assert!(range.lower_infinite());
        assert_eq!(range.to_string(), "(,01-01-2000]");
        assert_eq!("[infinity,)".parse::<DateRange>(), Err(Error::MisplacedInfinity));
        Ok(())
    }

    #[test]
    fn test_algebra() -> Result<(), Error> {
        let january: DateRange = "[01-01-2024,02-01-2024)".parse()?;
        let february: DateRange = "[02-01-2024,03-01-2024)".parse()?;
        assert!(january.adjacent_to(&february));
        assert_eq!(january.union(&february)?.to_string(), "[01-01-2024,03-01-2024)");
        assert!(january.intersection(&february).is_empty());
        Ok(())
    }

    #[test]
    fn test_custom_format() -> Result<(), Error> {
        let adapter = DateAdapter::with_format("%Y-%m-%d");
        assert_eq!(adapter.format(), "%Y-%m-%d");
        let range = DateRange::parse_with("[2024-01-01,2024-12-31]", adapter)?;
        assert!(range.contains_point(&date(2024, 6, 1)));
        assert!(matches!(
            DateRange::parse_with("[01-01-2024,)", adapter),
            Err(Error::InvalidBoundValue(_))
        ));
        Ok(())
    }
}
