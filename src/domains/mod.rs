//! Adapters for commonly used value domains.

#[cfg(feature = "chrono")]
mod date;
mod int;
mod num;

#[cfg(feature = "chrono")]
pub use date::{DateAdapter, DateRange};
pub use int::{IntAdapter, IntRange};
pub use num::{NumAdapter, NumRange};
