//! Continuous ranges with the semantics of PostgreSQL's range types.
//!
//! A [`Range`] is a possibly empty, possibly unbounded interval over any value
//! domain that can be projected onto `f64` coordinates through an
//! [`Adapter`]. The crate ships adapters for floats ([`NumRange`]), primitive
//! integers ([`IntRange`]) and, with the `chrono` feature, calendar dates
//! (`DateRange`).
//!
//! # Examples
//!
//! ```
//! use pg_ranged::{NumRange, errors::Error};
//! # fn main() -> Result<(), Error> {
//! let range: NumRange = "(1,2]".parse()?;
//! assert!(range.contains_range(&"(1,2)".parse()?));
//! assert!(range.adjacent_to(&"(2,3)".parse()?));
//! assert_eq!(range.union(&"(2,3)".parse()?)?.to_string(), "(1,3)");
//! assert_eq!(range.union(&"(3,4)".parse()?), Err(Error::DisjointRanges));
//! # Ok(())
//! # }
//! ```

mod adapter;
mod domains;
pub mod errors;
mod structs;

pub use adapter::{Adapter, Literal};
#[cfg(feature = "chrono")]
pub use domains::{DateAdapter, DateRange};
pub use domains::{IntAdapter, IntRange, NumAdapter, NumRange};
pub use structs::{Flags, Range};
