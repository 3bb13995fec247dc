//! Daily challenge evaluation.
//!
//! Challenges are recomputed from the flip history after every resolved
//! flip, scoped to the current challenge period: flips recorded before the
//! period started (i.e. before the last expiry reset) never count toward
//! the new period. Like achievements, evaluation is a pure function of the
//! history, so replaying the same flips yields the same progress.

use im::Vector;

use crate::catalog::ChallengeKind;
use crate::core::{FlipOutcome, Timestamp};

/// One resolved flip in the session history.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlipRecord {
    pub outcome: FlipOutcome,
    pub resolved_at: Timestamp,
}

/// Recomputed progress for one challenge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChallengeProgress {
    pub progress: u32,
    pub complete: bool,
}

/// Flips within the last `window_ms` of `now`: the speed-demon count.
///
/// Progress is the raw count; completion is reaching `target` flips that
/// are all inside the window. The count naturally recedes as old flips
/// fall out of the window.
fn speed_demon(
    history: &Vector<FlipRecord>,
    now: Timestamp,
    period_start: Timestamp,
    window_ms: u64,
    target: u32,
) -> ChallengeProgress {
    let count = history
        .iter()
        .filter(|record| {
            record.resolved_at >= period_start && now.millis_since(record.resolved_at) <= window_ms
        })
        .count() as u32;

    ChallengeProgress {
        progress: count.min(target),
        complete: count >= target,
    }
}

/// Heads/tails balance over the most recent `window` flips of the period.
///
/// Progress counts the flips gathered toward a full window; completion
/// requires a full window split exactly evenly between heads and tails.
fn perfect_balance(
    history: &Vector<FlipRecord>,
    period_start: Timestamp,
    window: u32,
    target: u32,
) -> ChallengeProgress {
    let in_period: Vec<FlipOutcome> = history
        .iter()
        .filter(|record| record.resolved_at >= period_start)
        .map(|record| record.outcome)
        .collect();

    let window = window as usize;
    let start = in_period.len().saturating_sub(window);
    let recent = &in_period[start..];

    let heads = recent
        .iter()
        .filter(|o| **o == FlipOutcome::Heads)
        .count();
    let tails = recent.len() - heads;

    ChallengeProgress {
        progress: (recent.len() as u32).min(target),
        complete: recent.len() == window && heads == tails,
    }
}

/// Recompute one challenge's progress from the flip history.
pub fn evaluate(
    kind: ChallengeKind,
    history: &Vector<FlipRecord>,
    now: Timestamp,
    period_start: Timestamp,
    speed_window_ms: u64,
    balance_window: u32,
    target: u32,
) -> ChallengeProgress {
    match kind {
        ChallengeKind::SpeedDemon => speed_demon(history, now, period_start, speed_window_ms, target),
        ChallengeKind::PerfectBalance => perfect_balance(history, period_start, balance_window, target),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPEED_WINDOW_MS: u64 = 30_000;
    const BALANCE_WINDOW: u32 = 30;

    fn record(outcome: FlipOutcome, at_ms: u64) -> FlipRecord {
        FlipRecord {
            outcome,
            resolved_at: Timestamp::from_millis(at_ms),
        }
    }

    fn alternating(count: usize, start_ms: u64, step_ms: u64) -> Vector<FlipRecord> {
        (0..count)
            .map(|i| {
                let outcome = if i % 2 == 0 {
                    FlipOutcome::Heads
                } else {
                    FlipOutcome::Tails
                };
                record(outcome, start_ms + i as u64 * step_ms)
            })
            .collect()
    }

    #[test]
    fn test_speed_demon_counts_window_only() {
        // 10 flips spread over 90s: only the last few fall in the window
        let history = alternating(10, 0, 10_000);
        let now = Timestamp::from_millis(90_000);

        let result = speed_demon(&history, now, Timestamp::from_millis(0), SPEED_WINDOW_MS, 20);
        assert_eq!(result.progress, 4); // flips at 60s, 70s, 80s, 90s-window edge
        assert!(!result.complete);
    }

    #[test]
    fn test_speed_demon_completes_at_target() {
        let history = alternating(20, 0, 1_000);
        let now = Timestamp::from_millis(19_000);

        let result = speed_demon(&history, now, Timestamp::from_millis(0), SPEED_WINDOW_MS, 20);
        assert_eq!(result.progress, 20);
        assert!(result.complete);
    }

    #[test]
    fn test_speed_demon_progress_recedes() {
        let history = alternating(5, 0, 1_000);

        let fresh = speed_demon(
            &history,
            Timestamp::from_millis(4_000),
            Timestamp::from_millis(0),
            SPEED_WINDOW_MS,
            20,
        );
        assert_eq!(fresh.progress, 5);

        // Much later, everything has aged out
        let stale = speed_demon(
            &history,
            Timestamp::from_millis(120_000),
            Timestamp::from_millis(0),
            SPEED_WINDOW_MS,
            20,
        );
        assert_eq!(stale.progress, 0);
    }

    #[test]
    fn test_speed_demon_ignores_previous_period() {
        let history = alternating(20, 0, 1_000);
        let now = Timestamp::from_millis(19_000);

        // Period restarted after the 15th flip
        let result = speed_demon(
            &history,
            now,
            Timestamp::from_millis(15_000),
            SPEED_WINDOW_MS,
            20,
        );
        assert_eq!(result.progress, 5);
        assert!(!result.complete);
    }

    #[test]
    fn test_perfect_balance_needs_full_window() {
        let history = alternating(10, 0, 1_000);
        let result = perfect_balance(&history, Timestamp::from_millis(0), BALANCE_WINDOW, 30);
        assert_eq!(result.progress, 10);
        assert!(!result.complete);
    }

    #[test]
    fn test_perfect_balance_alternating_completes() {
        let history = alternating(30, 0, 1_000);
        let result = perfect_balance(&history, Timestamp::from_millis(0), BALANCE_WINDOW, 30);
        assert_eq!(result.progress, 30);
        assert!(result.complete);
    }

    #[test]
    fn test_perfect_balance_lopsided_window_incomplete() {
        let history: Vector<FlipRecord> = (0..30)
            .map(|i| record(FlipOutcome::Heads, i * 1_000))
            .collect();
        let result = perfect_balance(&history, Timestamp::from_millis(0), BALANCE_WINDOW, 30);
        assert_eq!(result.progress, 30);
        assert!(!result.complete);
    }

    #[test]
    fn test_perfect_balance_uses_most_recent_window() {
        // 15 straight heads, then 30 alternating: the trailing window balances
        let mut history: Vector<FlipRecord> = (0..15)
            .map(|i| record(FlipOutcome::Heads, i * 1_000))
            .collect();
        for flip in alternating(30, 15_000, 1_000) {
            history.push_back(flip);
        }

        let result = perfect_balance(&history, Timestamp::from_millis(0), BALANCE_WINDOW, 30);
        assert!(result.complete);
    }

    #[test]
    fn test_evaluate_dispatches_by_kind() {
        let history = alternating(30, 0, 500);
        let now = Timestamp::from_millis(14_500);
        let start = Timestamp::from_millis(0);

        let speed = evaluate(
            ChallengeKind::SpeedDemon,
            &history,
            now,
            start,
            SPEED_WINDOW_MS,
            BALANCE_WINDOW,
            20,
        );
        assert!(speed.complete);

        let balance = evaluate(
            ChallengeKind::PerfectBalance,
            &history,
            now,
            start,
            SPEED_WINDOW_MS,
            BALANCE_WINDOW,
            30,
        );
        assert!(balance.complete);
    }
}
