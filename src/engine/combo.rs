//! Combo multiplier.
//!
//! A purely presentational score over flip cadence: flipping again within
//! the combo window bumps the multiplier (capped), pausing resets it to 1.
//! It is a projection over flip start times with no gameplay effect.

use serde::{Deserialize, Serialize};

use crate::core::Timestamp;

/// Cadence-based multiplier, recomputed when a flip starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComboMeter {
    multiplier: u32,
    last_flip_started_at: Option<Timestamp>,
}

impl Default for ComboMeter {
    fn default() -> Self {
        Self {
            multiplier: 1,
            last_flip_started_at: None,
        }
    }
}

impl ComboMeter {
    /// A fresh meter at multiplier 1.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a flip starting at `now`.
    ///
    /// Within `window_ms` of the previous flip's start the multiplier climbs
    /// to at most `cap`; otherwise it resets to 1. Returns the new value.
    pub fn on_flip_started(&mut self, now: Timestamp, window_ms: u64, cap: u32) -> u32 {
        let within_window = self
            .last_flip_started_at
            .is_some_and(|prev| now.millis_since(prev) < window_ms);

        self.multiplier = if within_window {
            (self.multiplier + 1).min(cap)
        } else {
            1
        };
        self.last_flip_started_at = Some(now);
        self.multiplier
    }

    /// The current multiplier.
    #[must_use]
    pub fn multiplier(&self) -> u32 {
        self.multiplier
    }
}
