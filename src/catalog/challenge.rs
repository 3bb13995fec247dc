//! Daily challenge definitions and per-period state.
//!
//! Challenges are 24-hour-scoped objectives. Progress is recomputed from the
//! flip history by the engine; this module only holds the catalog data and
//! the period bookkeeping (progress, completion, expiry, period start).
//!
//! When a challenge's expiry passes, the next upkeep pass resets it
//! completely: progress to zero, completion cleared, a fresh 24 h expiry,
//! and a new period start so the rolling windows forget older flips.

use serde::{Deserialize, Serialize};

use crate::core::Timestamp;

/// The defined daily challenges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChallengeKind {
    /// Flip 20 coins inside a rolling 30-second window.
    SpeedDemon,
    /// Get an exact 50/50 split over the 30 most recent flips.
    PerfectBalance,
}

impl ChallengeKind {
    /// All challenge kinds, in display order.
    pub const ALL: [ChallengeKind; 2] = [ChallengeKind::SpeedDemon, ChallengeKind::PerfectBalance];
}

impl std::fmt::Display for ChallengeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChallengeKind::SpeedDemon => write!(f, "speed_demon"),
            ChallengeKind::PerfectBalance => write!(f, "perfect_balance"),
        }
    }
}

/// Static challenge definition.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChallengeDef {
    /// Which challenge this is.
    pub kind: ChallengeKind,

    /// Display name.
    pub name: String,

    /// Display description.
    pub description: String,

    /// Progress threshold at which the challenge completes.
    pub target: u32,

    /// Display text for the reward.
    pub reward: String,
}

impl ChallengeDef {
    /// Create a new challenge definition.
    pub fn new(
        kind: ChallengeKind,
        name: impl Into<String>,
        description: impl Into<String>,
        target: u32,
        reward: impl Into<String>,
    ) -> Self {
        assert!(target > 0, "Challenge target must be positive");
        Self {
            kind,
            name: name.into(),
            description: description.into(),
            target,
            reward: reward.into(),
        }
    }
}

/// Mutable per-period challenge state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeState {
    /// Progress toward the target within the current period.
    pub progress: u32,

    /// Whether the challenge completed this period. Monotone until reset.
    pub completed: bool,

    /// When the current period ends.
    pub expires_at: Timestamp,

    /// When the current period began. Rolling windows ignore flips
    /// recorded before this point.
    pub period_start: Timestamp,
}

impl ChallengeState {
    /// A fresh period starting at `now`.
    #[must_use]
    pub fn new(now: Timestamp, lifetime_ms: u64) -> Self {
        Self {
            progress: 0,
            completed: false,
            expires_at: now.plus_millis(lifetime_ms),
            period_start: now,
        }
    }

    /// Whether the period has lapsed at `now`.
    #[must_use]
    pub fn expired(&self, now: Timestamp) -> bool {
        now > self.expires_at
    }

    /// Begin a new period at `now`, discarding all prior progress.
    pub fn reset(&mut self, now: Timestamp, lifetime_ms: u64) {
        *self = Self::new(now, lifetime_ms);
    }

    /// Apply a recomputed progress value.
    ///
    /// Completion fires once per period, on the call where progress first
    /// reaches the target while `complete` holds. Progress itself may move
    /// down (a rolling window ages out), but completion never reverts
    /// within a period.
    pub fn update(&mut self, progress: u32, complete: bool, target: u32) -> bool {
        self.progress = progress.min(target);
        if !self.completed && complete && self.progress >= target {
            self.completed = true;
            return true;
        }
        false
    }
}

/// The daily-challenge catalog of the original widget.
#[must_use]
pub fn standard_challenges() -> Vec<ChallengeDef> {
    vec![
        ChallengeDef::new(
            ChallengeKind::SpeedDemon,
            "Speed Demon",
            "Flip 20 coins in under 30 seconds",
            20,
            "Unlock Time Warp power-up",
        ),
        ChallengeDef::new(
            ChallengeKind::PerfectBalance,
            "Perfect Balance",
            "Get exactly 50% heads and 50% tails in 30 flips",
            30,
            "Unlock Lucky Streak power-up",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY_MS: u64 = 24 * 60 * 60 * 1_000;

    #[test]
    fn test_standard_catalog() {
        let defs = standard_challenges();
        assert_eq!(defs.len(), 2);

        let speed = defs
            .iter()
            .find(|d| d.kind == ChallengeKind::SpeedDemon)
            .unwrap();
        assert_eq!(speed.target, 20);
    }

    #[test]
    fn test_fresh_period() {
        let now = Timestamp::from_millis(1_000);
        let state = ChallengeState::new(now, DAY_MS);

        assert_eq!(state.progress, 0);
        assert!(!state.completed);
        assert_eq!(state.period_start, now);
        assert_eq!(state.expires_at, now.plus_millis(DAY_MS));
    }

    #[test]
    fn test_expiry_boundary() {
        let state = ChallengeState::new(Timestamp::from_millis(0), DAY_MS);

        // expires_at itself is still in-period; expiry is strictly after
        assert!(!state.expired(Timestamp::from_millis(DAY_MS)));
        assert!(state.expired(Timestamp::from_millis(DAY_MS + 1)));
    }

    #[test]
    fn test_reset_discards_completion() {
        let mut state = ChallengeState::new(Timestamp::from_millis(0), DAY_MS);
        state.update(20, true, 20);
        assert!(state.completed);

        let later = Timestamp::from_millis(DAY_MS + 5_000);
        state.reset(later, DAY_MS);

        assert_eq!(state.progress, 0);
        assert!(!state.completed);
        assert_eq!(state.period_start, later);
        assert_eq!(state.expires_at, later.plus_millis(DAY_MS));
    }

    #[test]
    fn test_completion_fires_once() {
        let mut state = ChallengeState::new(Timestamp::from_millis(0), DAY_MS);

        assert!(!state.update(10, false, 20));
        assert!(state.update(20, true, 20));
        assert!(!state.update(20, true, 20));
        assert!(state.completed);
    }

    #[test]
    fn test_progress_can_recede_but_completion_holds() {
        let mut state = ChallengeState::new(Timestamp::from_millis(0), DAY_MS);
        state.update(20, true, 20);

        // Rolling window aged out; completion stays
        state.update(3, false, 20);
        assert_eq!(state.progress, 3);
        assert!(state.completed);
    }
}
