//! Achievement evaluation.
//!
//! Runs after every completed flip. Progress is a pure function of the
//! current session state — nothing is incremented in place — so evaluation
//! is idempotent and order-independent across calls. Unlocking is monotone:
//! an achievement fires its unlock exactly once and never reverts.

use rustc_hash::FxHashMap;

use crate::catalog::{AchievementDef, AchievementId, AchievementMetric, AchievementState};

/// The session values achievement formulas read.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MetricSnapshot {
    /// Total resolved flips.
    pub total_flips: u32,

    /// Current streak length.
    pub current_streak: u32,

    /// Heads/tails alternation count.
    pub alternations: u32,

    /// Accumulated flip-animation time, in seconds.
    pub total_flip_secs: f64,

    /// Styles whose unlock threshold has been reached.
    pub styles_unlocked: u32,

    /// The speed window achievements measure against, in seconds.
    pub speed_window_secs: f64,
}

/// Recompute one metric's raw progress from the snapshot.
#[must_use]
pub fn progress_for(metric: AchievementMetric, snap: &MetricSnapshot) -> u32 {
    match metric {
        AchievementMetric::TotalFlips => snap.total_flips,
        AchievementMetric::CurrentStreak => snap.current_streak,
        AchievementMetric::Alternations => snap.alternations,
        AchievementMetric::SpeedFlips => {
            if snap.total_flip_secs > 0.0 && snap.total_flip_secs <= snap.speed_window_secs {
                snap.total_flips
            } else {
                0
            }
        }
        AchievementMetric::StylesUnlocked => snap.styles_unlocked,
    }
}

/// Re-evaluate every achievement against the snapshot.
///
/// Returns the IDs that newly unlocked on this pass, in catalog order.
pub fn evaluate(
    defs: &[AchievementDef],
    states: &mut FxHashMap<AchievementId, AchievementState>,
    snap: &MetricSnapshot,
) -> Vec<AchievementId> {
    let mut newly_unlocked = Vec::new();

    for def in defs {
        let state = states.entry(def.id).or_default();
        let progress = progress_for(def.metric, snap);
        if state.advance(progress, def.target) {
            newly_unlocked.push(def.id);
        }
    }

    newly_unlocked
}
