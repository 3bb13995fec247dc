//! Deferred transitions against the session clock.
//!
//! Nothing in the engine blocks. A flip's animation delay and a power-up's
//! expiry are pending entries in this queue, drained by the session's
//! `tick()` once their due time has passed. An entry always fires on the
//! first tick at or after its due time; there is no cancellation — dropping
//! the session discards whatever is still queued.

use smallvec::SmallVec;

use crate::catalog::PowerUpKind;
use crate::core::Timestamp;

/// A transition waiting for its due time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Deferred {
    /// Resolve an in-flight flip.
    ///
    /// The power-up effects that apply were captured when the flip was
    /// requested, so a power-up lapsing mid-flight does not change an
    /// already-started flip.
    ResolveFlip {
        started_at: Timestamp,
        duration_ms: u64,
        double: bool,
        lucky: bool,
    },

    /// A power-up's active window ended.
    ExpirePowerUp(PowerUpKind),
}

#[derive(Clone, Copy, Debug)]
struct Pending {
    due_at: Timestamp,
    seq: u64,
    event: Deferred,
}

/// Ordered queue of deferred transitions.
///
/// Entries drain in `(due_at, insertion order)` order, so two events due at
/// the same instant fire in the order they were scheduled.
#[derive(Clone, Debug, Default)]
pub struct Scheduler {
    // At most one in-flight flip plus one expiry per power-up, so the
    // queue stays inline in the common case
    pending: SmallVec<[Pending; 8]>,
    next_seq: u64,
}

impl Scheduler {
    /// Create an empty scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an event to fire at `due_at`.
    pub fn schedule(&mut self, due_at: Timestamp, event: Deferred) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(Pending { due_at, seq, event });
    }

    /// Remove and return every event due at or before `now`, in firing order.
    pub fn due(&mut self, now: Timestamp) -> Vec<Deferred> {
        let mut fired: Vec<Pending> = Vec::new();
        let mut remaining = SmallVec::new();

        for entry in self.pending.drain(..) {
            if entry.due_at <= now {
                fired.push(entry);
            } else {
                remaining.push(entry);
            }
        }
        self.pending = remaining;

        fired.sort_by_key(|p| (p.due_at, p.seq));
        fired.into_iter().map(|p| p.event).collect()
    }

    /// Number of pending events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Check if nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
