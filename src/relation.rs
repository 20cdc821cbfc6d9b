//!
//! Causal relations between two clocks, as an OR-able flag set.
//!
//! A relation always describes the *other* clock from the point of view of
//! the receiver: `a.compare(&b, Relation::DESCENDANT)` asks whether `b` has
//! seen everything `a` has, and more.

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign, Not};

/// A set of causal relations.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Relation(u8);

impl Relation {
    /// No relation at all; `compare` against it is always false.
    pub const NONE: Relation = Relation(0);
    /// Both clocks carry the same actors with the same counters.
    pub const EQUAL: Relation = Relation(1 << 0); // 0b0001
    /// The other clock is strictly behind the receiver.
    pub const ANCESTOR: Relation = Relation(1 << 1); // 0b0010
    /// The other clock is strictly ahead of the receiver.
    pub const DESCENDANT: Relation = Relation(1 << 2); // 0b0100
    /// The clocks hold divergent histories.
    pub const CONCURRENT: Relation = Relation(1 << 3); // 0b1000
    /// Every relation.
    pub const ALL: Relation = Relation(0b1111);

    /// Raw flag bits.
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Builds a set from raw bits, dropping anything outside the four flags.
    #[inline]
    pub const fn from_bits_truncate(bits: u8) -> Relation {
        Relation(bits & Self::ALL.0)
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True if every flag in `other` is also in `self`.
    #[inline]
    pub const fn contains(self, other: Relation) -> bool {
        (self.0 & other.0) == other.0
    }

    /// True if the two sets share at least one flag.
    #[inline]
    pub const fn intersects(self, other: Relation) -> bool {
        (self.0 & other.0) != 0
    }
}

impl BitOr for Relation {
    type Output = Relation;

    #[inline]
    fn bitor(self, rhs: Relation) -> Relation {
        Relation(self.0 | rhs.0)
    }
}

impl BitOrAssign for Relation {
    #[inline]
    fn bitor_assign(&mut self, rhs: Relation) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Relation {
    type Output = Relation;

    #[inline]
    fn bitand(self, rhs: Relation) -> Relation {
        Relation(self.0 & rhs.0)
    }
}

/// Complement within the four relations, so `!Relation::EQUAL` asks for
/// "anything but equal".
impl Not for Relation {
    type Output = Relation;

    #[inline]
    fn not(self) -> Relation {
        Relation(!self.0 & Self::ALL.0)
    }
}

impl fmt::Debug for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [(Relation, &str); 4] = [
            (Relation::EQUAL, "EQUAL"),
            (Relation::ANCESTOR, "ANCESTOR"),
            (Relation::DESCENDANT, "DESCENDANT"),
            (Relation::CONCURRENT, "CONCURRENT"),
        ];
        if self.is_empty() {
            return f.write_str("NONE");
        }
        let mut first = true;
        for (flag, name) in NAMES {
            if self.contains(flag) {
                if !first {
                    f.write_str(" | ")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}
