//! Submodule providing the `Flags` struct.

use std::{
    hash::{Hash, Hasher},
    ops::BitOr,
};

/// The emptiness and bound inclusivity of a range.
///
/// An empty flag set never reports an inclusive bound, whichever way it was
/// built.
///
/// # Examples
///
/// ```
/// use pg_ranged::Flags;
/// let flags = Flags::LOWER_INCLUSIVE | Flags::UPPER_INCLUSIVE;
/// assert_eq!(flags, Flags::CLOSED);
/// assert!(!(Flags::EMPTY | Flags::CLOSED).lower_inclusive());
/// ```
#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Flags {
    /// Whether the range contains nothing.
    empty: bool,
    /// Whether the lower bound belongs to the range.
    lower_inclusive: bool,
    /// Whether the upper bound belongs to the range.
    upper_inclusive: bool,
}

impl Flags {
    /// The flags of the empty range.
    pub const EMPTY: Self = Self { empty: true, lower_inclusive: false, upper_inclusive: false };
    /// Both bounds excluded, `(a,b)`.
    pub const OPEN: Self = Self::new(false, false);
    /// Both bounds included, `[a,b]`.
    pub const CLOSED: Self = Self::new(true, true);
    /// Only the lower bound included, `[a,b)`.
    pub const LOWER_INCLUSIVE: Self = Self::new(true, false);
    /// Only the upper bound included, `(a,b]`.
    pub const UPPER_INCLUSIVE: Self = Self::new(false, true);

    #[inline]
    #[must_use]
    /// Creates the flags of a non-empty range.
    pub const fn new(lower_inclusive: bool, upper_inclusive: bool) -> Self {
        Self { empty: false, lower_inclusive, upper_inclusive }
    }

    #[inline]
    #[must_use]
    /// Returns whether the flags describe the empty range.
    pub const fn is_empty(self) -> bool {
        self.empty
    }

    #[inline]
    #[must_use]
    /// Returns whether the lower bound is included.
    pub const fn lower_inclusive(self) -> bool {
        !self.empty && self.lower_inclusive
    }

    #[inline]
    #[must_use]
    /// Returns whether the upper bound is included.
    pub const fn upper_inclusive(self) -> bool {
        !self.empty && self.upper_inclusive
    }

    #[inline]
    #[must_use]
    /// Returns a copy with the lower inclusivity replaced.
    ///
    /// Empty flags are returned unchanged.
    pub const fn with_lower_inclusive(self, lower_inclusive: bool) -> Self {
        if self.empty {
            return Self::EMPTY;
        }
        Self { lower_inclusive, ..self }
    }

    #[inline]
    #[must_use]
    /// Returns a copy with the upper inclusivity replaced.
    ///
    /// Empty flags are returned unchanged.
    pub const fn with_upper_inclusive(self, upper_inclusive: bool) -> Self {
        if self.empty {
            return Self::EMPTY;
        }
        Self { upper_inclusive, ..self }
    }
}

impl PartialEq for Flags {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.empty == other.empty
            && self.lower_inclusive() == other.lower_inclusive()
            && self.upper_inclusive() == other.upper_inclusive()
    }
}

impl Eq for Flags {}

impl Hash for Flags {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.empty.hash(state);
        self.lower_inclusive().hash(state);
        self.upper_inclusive().hash(state);
    }
}

impl BitOr for Flags {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        if self.empty || rhs.empty {
            return Self::EMPTY;
        }
        Self::new(
            self.lower_inclusive || rhs.lower_inclusive,
            self.upper_inclusive || rhs.upper_inclusive,
        )
    }
}
