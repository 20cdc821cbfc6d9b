use std::fmt;

// --- Actor identifiers ------------------------------------------------------

/// Opaque identifier of one contributor to a clock.
///
/// The clock owns its copy of the bytes, so mutating the buffer an id was
/// built from never reaches back into a clock. Uniqueness across a
/// deployment is up to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct ActorId(#[serde(with = "serde_bytes")] pub Vec<u8>);

impl ActorId {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for ActorId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<&[u8]> for ActorId {
    fn from(bytes: &[u8]) -> Self {
        ActorId(bytes.to_vec())
    }
}

impl<const N: usize> From<&[u8; N]> for ActorId {
    fn from(bytes: &[u8; N]) -> Self {
        ActorId(bytes.to_vec())
    }
}

impl From<Vec<u8>> for ActorId {
    fn from(bytes: Vec<u8>) -> Self {
        ActorId(bytes)
    }
}

impl From<&str> for ActorId {
    fn from(s: &str) -> Self {
        ActorId(s.as_bytes().to_vec())
    }
}

impl From<uuid::Uuid> for ActorId {
    fn from(id: uuid::Uuid) -> Self {
        ActorId(id.as_bytes().to_vec())
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match std::str::from_utf8(&self.0) {
            Ok(s) if s.chars().all(|c| !c.is_control()) => f.write_str(s),
            _ => {
                for b in &self.0 {
                    write!(f, "{b:02x}")?;
                }
                Ok(())
            }
        }
    }
}

// --- Clock entries ----------------------------------------------------------

/// One actor's slot in a [`VClock`](crate::VClock).
///
/// `counter` is at least 1 for every stored entry. `last_update` is the
/// caller-supplied time of the latest update, 0 when none was given.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Entry {
    pub(crate) actor: ActorId,
    pub(crate) counter: u64,
    #[serde(default)]
    pub(crate) last_update: u64,
}

impl Entry {
    pub(crate) fn new(actor: ActorId, counter: u64, last_update: u64) -> Self {
        Entry { actor, counter, last_update }
    }

    pub fn actor(&self) -> &ActorId {
        &self.actor
    }

    pub fn counter(&self) -> u64 {
        self.counter
    }

    pub fn last_update(&self) -> u64 {
        self.last_update
    }

    /// Adds `ticks` and moves `last_update` forward to `when` if it is later.
    pub(crate) fn advance(&mut self, ticks: u64, when: u64) {
        self.counter = self.counter.saturating_add(ticks);
        self.last_update = self.last_update.max(when);
    }
}
