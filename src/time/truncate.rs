//! Bounded pruning of old actor entries.

use super::vector::VClock;
use crate::primitives::Entry;

/// Retention rules for [`VClock::truncate`].
///
/// Times are compared against the `when` values handed to
/// [`VClock::update`]. Zero disables `keep_after` and `cut_above_n`; the
/// all-zero default keeps every entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TruncatePolicy {
    /// Always keep at least this many of the most recently updated entries.
    pub keep_min_n: usize,
    /// Always keep entries updated strictly after this time.
    pub keep_after: u64,
    /// Drop the oldest entries beyond this count.
    pub cut_above_n: usize,
    /// Entries updated strictly before this time may be dropped.
    pub cut_before: u64,
}

impl TruncatePolicy {
    pub fn with_keep_min_n(mut self, n: usize) -> Self {
        self.keep_min_n = n;
        self
    }

    pub fn with_keep_after(mut self, when: u64) -> Self {
        self.keep_after = when;
        self
    }

    pub fn with_cut_above_n(mut self, n: usize) -> Self {
        self.cut_above_n = n;
        self
    }

    pub fn with_cut_before(mut self, when: u64) -> Self {
        self.cut_before = when;
        self
    }

    /// Whether the entry at `rank` (0 = most recently updated) survives.
    fn keeps(&self, rank: usize, last_update: u64) -> bool {
        rank < self.keep_min_n
            || (self.keep_after > 0 && last_update > self.keep_after)
            || ((self.cut_above_n == 0 || rank < self.cut_above_n) && last_update >= self.cut_before)
    }

    /// Cheap scan for anything the policy could drop, without sorting.
    ///
    /// An entry whose time is within `keep_after`, or that is recent enough
    /// while the clock is under `cut_above_n`, survives at any rank.
    fn may_drop_any(&self, entries: &[Entry]) -> bool {
        if entries.len() <= self.keep_min_n {
            return false;
        }
        let over_size = self.cut_above_n != 0 && entries.len() > self.cut_above_n;
        entries.iter().any(|e| {
            let protected = self.keep_after > 0 && e.last_update > self.keep_after;
            !protected && (e.last_update < self.cut_before || over_size)
        })
    }
}

impl VClock {
    /// Returns a pruned copy of this clock; the receiver is left untouched.
    ///
    /// Entries are ranked by update time, most recent first, with ties kept
    /// in storage order. An entry is kept if it ranks within `keep_min_n`,
    /// was updated after `keep_after`, or ranks within `cut_above_n` and was
    /// not updated before `cut_before`.
    pub fn truncate(&self, policy: &TruncatePolicy) -> VClock {
        if !policy.may_drop_any(&self.entries) {
            let mut kept = self.clone();
            // Same flag the rebuilt clock would get from its entries.
            kept.has_timestamps = kept.entries.iter().any(|e| e.last_update > 0);
            return kept;
        }

        let mut ranked: Vec<&Entry> = self.entries.iter().collect();
        // Stable, so equal times keep their storage order.
        ranked.sort_by(|a, b| b.last_update.cmp(&a.last_update));

        let mut truncated = VClock::new();
        truncated.entries.reserve(ranked.len());
        for (rank, entry) in ranked.into_iter().enumerate() {
            if policy.keeps(rank, entry.last_update) {
                truncated.update_item(entry.actor.as_bytes(), entry.counter, entry.last_update);
            }
        }

        tracing::debug!(
            before = self.entries.len(),
            after = truncated.entries.len(),
            ?policy,
            "vclock truncated"
        );
        truncated
    }
}
