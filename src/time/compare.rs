//! Causal comparison of two clocks in a single pass.
//!
//! The engine walks the other clock's entries once, looking each one up in
//! the receiver. It keeps a tentative verdict about the other clock that can
//! only move from `Equal` to `Ancestor`/`Descendant`, and from there only to
//! concurrency. As soon as the verdict leaves the requested set the walk
//! stops.

use super::vector::VClock;
use crate::relation::Relation;

/// What the walk believes about the other clock so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tentative {
    Equal,
    Ancestor,
    Descendant,
}

impl Tentative {
    fn relation(self) -> Relation {
        match self {
            Tentative::Equal => Relation::EQUAL,
            Tentative::Ancestor => Relation::ANCESTOR,
            Tentative::Descendant => Relation::DESCENDANT,
        }
    }
}

/// How the walk ended.
enum Verdict {
    /// The walk finished (or hit concurrency) with this exact relation.
    Is(Relation),
    /// The relation left the requested set before the walk could finish.
    NotWanted,
}

impl VClock {
    /// Returns true if `other`, seen from this clock, stands in one of the
    /// `wanted` relations.
    ///
    /// Relations are OR-able, so `a.compare(&b, Relation::EQUAL |
    /// Relation::DESCENDANT)` asks whether `b` has seen at least everything
    /// `a` has. Actors missing from a clock count as zero.
    pub fn compare(&self, other: &VClock, wanted: Relation) -> bool {
        match self.classify(other, wanted) {
            Verdict::Is(actual) => wanted.intersects(actual),
            Verdict::NotWanted => false,
        }
    }

    /// The single relation in which `other` stands to this clock.
    pub fn relation(&self, other: &VClock) -> Relation {
        match self.classify(other, Relation::ALL) {
            Verdict::Is(actual) => actual,
            // Every relation is wanted, so the walk never bails out early.
            Verdict::NotWanted => Relation::CONCURRENT,
        }
    }

    fn classify(&self, other: &VClock, wanted: Relation) -> Verdict {
        let ours = self.entries.len();
        let theirs = other.entries.len();

        // A longer clock can never be behind a shorter one.
        let mut state = if ours > theirs {
            if !wanted.intersects(Relation::ANCESTOR | Relation::CONCURRENT) {
                return Verdict::NotWanted;
            }
            Tentative::Ancestor
        } else if ours < theirs {
            if !wanted.intersects(Relation::DESCENDANT | Relation::CONCURRENT) {
                return Verdict::NotWanted;
            }
            Tentative::Descendant
        } else {
            Tentative::Equal
        };

        // Number of actors `other` may hold that we lack while still being a
        // descendant. Every such actor must be paid for by the size gap.
        let mut unmatched_budget = theirs.saturating_sub(ours);

        for entry in &other.entries {
            let Some(i) = self.find(entry.actor.as_bytes()) else {
                match state {
                    Tentative::Descendant if unmatched_budget > 0 => {
                        unmatched_budget -= 1;
                        continue;
                    }
                    _ => return Verdict::Is(Relation::CONCURRENT),
                }
            };

            let mine = self.entries[i].counter;
            state = match (state, entry.counter.cmp(&mine)) {
                (_, std::cmp::Ordering::Equal) => state,
                (Tentative::Equal, std::cmp::Ordering::Greater) => {
                    if !wanted.intersects(Relation::DESCENDANT | Relation::CONCURRENT) {
                        return Verdict::NotWanted;
                    }
                    Tentative::Descendant
                }
                (Tentative::Equal, std::cmp::Ordering::Less) => {
                    if !wanted.intersects(Relation::ANCESTOR | Relation::CONCURRENT) {
                        return Verdict::NotWanted;
                    }
                    Tentative::Ancestor
                }
                (Tentative::Descendant, std::cmp::Ordering::Greater) => state,
                (Tentative::Ancestor, std::cmp::Ordering::Less) => state,
                (Tentative::Ancestor, std::cmp::Ordering::Greater)
                | (Tentative::Descendant, std::cmp::Ordering::Less) => {
                    return Verdict::Is(Relation::CONCURRENT);
                }
            };
        }

        Verdict::Is(state.relation())
    }
}

/// Causal equality: same actors with the same counters, in any order.
/// Update times do not take part.
impl PartialEq for VClock {
    fn eq(&self, other: &VClock) -> bool {
        self.compare(other, Relation::EQUAL)
    }
}

impl Eq for VClock {}
