//! Vector clock state: per-actor entries, updates and merges.
//!
//! Entries live in a flat vector in insertion order. Clocks usually hold a
//! handful of actors, so lookups are linear scans; the storage order is also
//! the order the binary encoding writes entries in.

use crate::error::ReprError;
use crate::primitives::{ActorId, Entry};

/// A vector clock.
///
/// `Clone` produces a fully independent snapshot: actor ids are owned
/// buffers and nothing is shared with the original.
#[derive(Clone, Default, Debug, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "VClockRepr", into = "VClockRepr")]
pub struct VClock {
    /// Set once any entry was given a non-zero time; switches the wire format.
    pub(crate) has_timestamps: bool,
    pub(crate) entries: Vec<Entry>,
}

impl VClock {
    /// Creates an empty clock, the identity for `merge`.
    pub fn new() -> Self {
        VClock::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the clock carries update times (and encodes them).
    pub fn has_timestamps(&self) -> bool {
        self.has_timestamps
    }

    /// Entries in storage order.
    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    pub fn get(&self, actor: impl AsRef<[u8]>) -> Option<&Entry> {
        self.find(actor.as_ref()).map(|i| &self.entries[i])
    }

    /// The counter recorded for `actor`, 0 when the actor is absent.
    pub fn counter(&self, actor: impl AsRef<[u8]>) -> u64 {
        self.get(actor).map_or(0, Entry::counter)
    }

    /// Increments `actor`'s counter by one, adding the actor if it is new.
    ///
    /// `when` is an optional update time in any unit the caller likes (0
    /// means "no time"). It is kept per actor for truncation and only ever
    /// moves forward, even if updates arrive out of order.
    pub fn update(&mut self, actor: impl AsRef<[u8]>, when: u64) {
        self.update_item(actor.as_ref(), 1, when);
    }

    /// The latest update time recorded across all actors, or 0.
    pub fn last_update(&self) -> u64 {
        self.entries.iter().map(Entry::last_update).max().unwrap_or(0)
    }

    /// Merges `other` into this clock so that it becomes a descendant of (or
    /// equal to) `other`.
    ///
    /// Every actor ends up with the larger of the two counters, and actors
    /// only `other` knows are copied over with their update time. Merging
    /// the same clock twice is a no-op the second time.
    pub fn merge(&mut self, other: &VClock) {
        let before = self.entries.len();
        for theirs in &other.entries {
            match self.find(theirs.actor.as_bytes()) {
                Some(i) => {
                    let ours = &mut self.entries[i];
                    ours.counter = ours.counter.max(theirs.counter);
                    ours.last_update = ours.last_update.max(theirs.last_update);
                }
                None => self.entries.push(theirs.clone()),
            }
        }
        self.has_timestamps |= other.has_timestamps;

        let added = self.entries.len() - before;
        if added > 0 {
            tracing::trace!(added, total = self.entries.len(), "vclock merge added actors");
        }
    }

    pub(crate) fn find(&self, actor: &[u8]) -> Option<usize> {
        self.entries.iter().position(|e| e.actor.as_bytes() == actor)
    }

    /// Adds `ticks` to `actor`, appending a fresh entry if it is unknown.
    /// Decoding goes through here too, so repeated actors are summed.
    pub(crate) fn update_item(&mut self, actor: &[u8], ticks: u64, when: u64) {
        if when > 0 {
            self.has_timestamps = true;
        }
        match self.find(actor) {
            Some(i) => self.entries[i].advance(ticks, when),
            None => self.entries.push(Entry::new(ActorId::from(actor), ticks, when)),
        }
    }
}

impl<'a> IntoIterator for &'a VClock {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// --- Structured representation ----------------------------------------------

/// Serde shape of a clock. Deserialised input is checked against the clock
/// invariants before it becomes a `VClock`.
#[derive(serde::Serialize, serde::Deserialize)]
struct VClockRepr {
    #[serde(default)]
    has_timestamps: bool,
    #[serde(default)]
    entries: Vec<Entry>,
}

impl From<VClock> for VClockRepr {
    fn from(vc: VClock) -> Self {
        VClockRepr { has_timestamps: vc.has_timestamps, entries: vc.entries }
    }
}

impl TryFrom<VClockRepr> for VClock {
    type Error = ReprError;

    fn try_from(repr: VClockRepr) -> Result<Self, Self::Error> {
        let mut vc = VClock { has_timestamps: repr.has_timestamps, entries: Vec::with_capacity(repr.entries.len()) };
        for entry in repr.entries {
            if entry.counter == 0 {
                return Err(ReprError::ZeroCounter(entry.actor));
            }
            if vc.find(entry.actor.as_bytes()).is_some() {
                return Err(ReprError::DuplicateActor(entry.actor));
            }
            if entry.last_update > 0 {
                vc.has_timestamps = true;
            }
            vc.entries.push(entry);
        }
        Ok(vc)
    }
}
