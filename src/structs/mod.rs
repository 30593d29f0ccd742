//! Submodule providing the range data structures.

mod bound;
mod flags;
mod literal;
mod range;

pub use flags::Flags;
pub use range::Range;
