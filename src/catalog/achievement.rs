//! Achievement definitions and per-session progress.
//!
//! An [`AchievementDef`] is static catalog data: a display name, a target,
//! and the metric its progress is derived from. The mutable part lives in
//! [`AchievementState`], which only ever moves forward: progress is clamped
//! to be non-decreasing and `unlocked` flips to true exactly once.
//!
//! Progress is never incremented in place. The evaluator recomputes it from
//! current session state after every flip, so evaluation is idempotent and
//! order-independent.

use serde::{Deserialize, Serialize};

/// Unique identifier for an achievement definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AchievementId(pub u32);

impl AchievementId {
    /// Create a new achievement ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for AchievementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Achievement({})", self.0)
    }
}

/// IDs of the standard achievement catalog.
pub const FIRST_FLIP: AchievementId = AchievementId::new(0);
pub const STREAK_MASTER: AchievementId = AchievementId::new(1);
pub const FLIP_ENTHUSIAST: AchievementId = AchievementId::new(2);
pub const PERFECT_BALANCE: AchievementId = AchievementId::new(3);
pub const SPEED_FLIPPER: AchievementId = AchievementId::new(4);
pub const COIN_COLLECTOR: AchievementId = AchievementId::new(5);

/// The session metric an achievement's progress is derived from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AchievementMetric {
    /// Total resolved flips this session.
    TotalFlips,
    /// Length of the current streak.
    CurrentStreak,
    /// Number of heads/tails alternations.
    Alternations,
    /// Total flips, counted only while accumulated flip time is within
    /// the speed window.
    SpeedFlips,
    /// Number of coin styles whose unlock threshold has been reached.
    StylesUnlocked,
}

/// Static achievement definition.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AchievementDef {
    /// Unique identifier.
    pub id: AchievementId,

    /// Display name.
    pub name: String,

    /// Display description.
    pub description: String,

    /// Progress threshold at which the achievement unlocks.
    pub target: u32,

    /// Metric the progress formula reads.
    pub metric: AchievementMetric,
}

impl AchievementDef {
    /// Create a new achievement definition.
    pub fn new(
        id: AchievementId,
        name: impl Into<String>,
        description: impl Into<String>,
        target: u32,
        metric: AchievementMetric,
    ) -> Self {
        assert!(target > 0, "Achievement target must be positive");
        Self {
            id,
            name: name.into(),
            description: description.into(),
            target,
            metric,
        }
    }
}

/// Mutable per-session achievement progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementState {
    /// Current progress toward the target. Non-decreasing within a session.
    pub progress: u32,

    /// Whether the achievement has unlocked. Never reverts.
    pub unlocked: bool,
}

impl AchievementState {
    /// Apply a recomputed progress value.
    ///
    /// Progress is clamped to `[previous, target]`, keeping it monotone even
    /// when the underlying formula is not (the speed metric stops matching
    /// once the window closes). Returns `true` exactly once, on the call
    /// where progress first reaches the target.
    pub fn advance(&mut self, recomputed: u32, target: u32) -> bool {
        self.progress = self.progress.max(recomputed.min(target));
        if !self.unlocked && self.progress >= target {
            self.unlocked = true;
            return true;
        }
        false
    }
}

/// The achievement catalog of the original widget.
///
/// The coin-collector target is the style-catalog size and is filled in by
/// [`Catalog::standard`](super::Catalog::standard), which knows both tables.
#[must_use]
pub fn standard_achievements(style_count: u32) -> Vec<AchievementDef> {
    vec![
        AchievementDef::new(
            FIRST_FLIP,
            "First Flip",
            "Flip your first coin",
            1,
            AchievementMetric::TotalFlips,
        ),
        AchievementDef::new(
            STREAK_MASTER,
            "Streak Master",
            "Get a streak of 5",
            5,
            AchievementMetric::CurrentStreak,
        ),
        AchievementDef::new(
            FLIP_ENTHUSIAST,
            "Flip Enthusiast",
            "Flip 50 coins",
            50,
            AchievementMetric::TotalFlips,
        ),
        AchievementDef::new(
            PERFECT_BALANCE,
            "Perfect Balance",
            "Get 10 alternating heads and tails",
            10,
            AchievementMetric::Alternations,
        ),
        AchievementDef::new(
            SPEED_FLIPPER,
            "Speed Flipper",
            "Flip 10 coins in under 30 seconds",
            10,
            AchievementMetric::SpeedFlips,
        ),
        AchievementDef::new(
            COIN_COLLECTOR,
            "Coin Collector",
            "Unlock all coin styles",
            style_count,
            AchievementMetric::StylesUnlocked,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog() {
        let defs = standard_achievements(9);
        assert_eq!(defs.len(), 6);

        let streak = defs.iter().find(|d| d.id == STREAK_MASTER).unwrap();
        assert_eq!(streak.target, 5);
        assert_eq!(streak.metric, AchievementMetric::CurrentStreak);

        let collector = defs.iter().find(|d| d.id == COIN_COLLECTOR).unwrap();
        assert_eq!(collector.target, 9);
    }

    #[test]
    fn test_unique_ids() {
        let defs = standard_achievements(9);
        for (i, a) in defs.iter().enumerate() {
            for b in &defs[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_advance_unlocks_once() {
        let mut state = AchievementState::default();

        assert!(!state.advance(3, 5));
        assert_eq!(state.progress, 3);
        assert!(!state.unlocked);

        // Reaching the target unlocks exactly once
        assert!(state.advance(5, 5));
        assert!(state.unlocked);

        // Repeated evaluation never re-fires
        assert!(!state.advance(5, 5));
        assert!(state.unlocked);
    }

    #[test]
    fn test_progress_is_monotone() {
        let mut state = AchievementState::default();
        state.advance(4, 10);
        state.advance(2, 10);
        assert_eq!(state.progress, 4);
    }

    #[test]
    fn test_progress_clamped_to_target() {
        let mut state = AchievementState::default();
        state.advance(100, 10);
        assert_eq!(state.progress, 10);
        assert!(state.unlocked);
    }

    #[test]
    #[should_panic(expected = "must be positive")]
    fn test_zero_target_panics() {
        let _ = AchievementDef::new(
            AchievementId::new(99),
            "Bad",
            "",
            0,
            AchievementMetric::TotalFlips,
        );
    }
}
