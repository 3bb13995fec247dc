//! Clock abstraction for timer-driven transitions.
//!
//! Every transition that depends on time (flip resolution, power-up expiry,
//! challenge upkeep, combo windows) reads the current time through [`Clock`]
//! rather than calling the system clock directly. Production code uses
//! [`SystemClock`]; tests use [`ManualClock`] and advance it explicitly, so
//! time-dependent behavior is simulated without real delays.

use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};

/// A point in time, in milliseconds since the Unix epoch.
///
/// Zero doubles as "never" for power-up activation bookkeeping, matching
/// the epoch-zero sentinel in the original widget.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(pub u64);

impl Timestamp {
    /// Create a timestamp from epoch milliseconds.
    #[must_use]
    pub const fn from_millis(millis: u64) -> Self {
        Self(millis)
    }

    /// Epoch milliseconds.
    #[must_use]
    pub const fn as_millis(self) -> u64 {
        self.0
    }

    /// Milliseconds elapsed since `earlier`, saturating at zero.
    #[must_use]
    pub const fn millis_since(self, earlier: Timestamp) -> u64 {
        self.0.saturating_sub(earlier.0)
    }

    /// This timestamp shifted forward by `millis`.
    #[must_use]
    pub const fn plus_millis(self, millis: u64) -> Self {
        Self(self.0 + millis)
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "t+{}ms", self.0)
    }
}

/// Source of the current time.
pub trait Clock {
    /// The current time.
    fn now(&self) -> Timestamp;
}

/// Wall-clock time.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        let elapsed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        Timestamp(elapsed.as_millis() as u64)
    }
}

/// A manually advanced clock for tests.
///
/// Cloning yields a handle onto the same underlying time, so a test can
/// hand one handle to the session and keep another to advance time:
///
/// ```
/// use flipcore::core::{Clock, ManualClock};
///
/// let clock = ManualClock::new(1_000);
/// let handle = clock.clone();
/// handle.advance(750);
/// assert_eq!(clock.now().as_millis(), 1_750);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    millis: Rc<Cell<u64>>,
}

impl ManualClock {
    /// Create a clock starting at the given epoch milliseconds.
    #[must_use]
    pub fn new(start_millis: u64) -> Self {
        Self {
            millis: Rc::new(Cell::new(start_millis)),
        }
    }

    /// Move time forward by `millis`.
    pub fn advance(&self, millis: u64) {
        self.millis.set(self.millis.get() + millis);
    }

    /// Jump to an absolute time. Panics if this would move time backwards.
    pub fn set(&self, timestamp: Timestamp) {
        assert!(
            timestamp.as_millis() >= self.millis.get(),
            "ManualClock cannot move backwards"
        );
        self.millis.set(timestamp.as_millis());
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        Timestamp(self.millis.get())
    }
}
