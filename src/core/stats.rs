//! Session statistics.
//!
//! [`SessionStats`] is the explicit aggregate behind the widget's stat
//! panels: per-outcome counts, the current and longest streak, alternation
//! count, and accumulated flip-animation time. It owns the pure transition
//! applied once per resolved outcome.
//!
//! ## Invariants
//!
//! - `count(Heads) + count(Tails) == total_flips()` at all times
//! - `longest_streak() >= current_streak()` and is non-decreasing
//! - `last_outcome()` is `None` only before the first resolved outcome

use serde::{Deserialize, Serialize};

use super::outcome::FlipOutcome;

/// Mutable per-session flip statistics.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionStats {
    heads: u32,
    tails: u32,
    current_streak: u32,
    longest_streak: u32,
    last_outcome: Option<FlipOutcome>,
    alternations: u32,
    total_flip_secs: f64,
}

impl SessionStats {
    /// Fresh statistics: all counters zero, no last outcome.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one resolved outcome.
    ///
    /// Updates counts, recomputes the streak run, tracks the longest streak,
    /// and counts an alternation when the outcome differs from the previous
    /// one. Flip duration is accumulated separately via
    /// [`add_flip_duration`](Self::add_flip_duration) because a double flip
    /// records two outcomes against a single animation.
    pub fn record(&mut self, outcome: FlipOutcome) {
        match outcome {
            FlipOutcome::Heads => self.heads += 1,
            FlipOutcome::Tails => self.tails += 1,
        }

        if self.last_outcome == Some(outcome) {
            self.current_streak += 1;
        } else {
            if self.last_outcome.is_some() {
                self.alternations += 1;
            }
            self.current_streak = 1;
        }
        self.longest_streak = self.longest_streak.max(self.current_streak);
        self.last_outcome = Some(outcome);
    }

    /// Accumulate one flip animation's duration.
    pub fn add_flip_duration(&mut self, seconds: f64) {
        self.total_flip_secs += seconds;
    }

    /// Count for one outcome.
    #[must_use]
    pub fn count(&self, outcome: FlipOutcome) -> u32 {
        match outcome {
            FlipOutcome::Heads => self.heads,
            FlipOutcome::Tails => self.tails,
        }
    }

    /// Total resolved outcomes this session.
    #[must_use]
    pub fn total_flips(&self) -> u32 {
        self.heads + self.tails
    }

    /// Length of the run of identical outcomes ending at the last flip.
    #[must_use]
    pub fn current_streak(&self) -> u32 {
        self.current_streak
    }

    /// Longest streak observed this session.
    #[must_use]
    pub fn longest_streak(&self) -> u32 {
        self.longest_streak
    }

    /// The most recent outcome, `None` before the first flip.
    #[must_use]
    pub fn last_outcome(&self) -> Option<FlipOutcome> {
        self.last_outcome
    }

    /// Times a flip differed from the one immediately before it.
    #[must_use]
    pub fn alternations(&self) -> u32 {
        self.alternations
    }

    /// Accumulated flip-animation time, in seconds.
    ///
    /// This is the sum of per-flip durations, not wall-clock elapsed time.
    #[must_use]
    pub fn total_flip_seconds(&self) -> f64 {
        self.total_flip_secs
    }

    /// Fraction of flips that were heads, or 0 before the first flip.
    #[must_use]
    pub fn heads_ratio(&self) -> f64 {
        if self.total_flips() == 0 {
            0.0
        } else {
            f64::from(self.heads) / f64::from(self.total_flips())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use FlipOutcome::{Heads, Tails};

    fn record_all(stats: &mut SessionStats, outcomes: &[FlipOutcome]) {
        for &o in outcomes {
            stats.record(o);
        }
    }

    #[test]
    fn test_fresh_stats() {
        let stats = SessionStats::new();
        assert_eq!(stats.total_flips(), 0);
        assert_eq!(stats.current_streak(), 0);
        assert_eq!(stats.longest_streak(), 0);
        assert_eq!(stats.last_outcome(), None);
        assert_eq!(stats.alternations(), 0);
        assert_eq!(stats.heads_ratio(), 0.0);
    }

    #[test]
    fn test_counts_sum_to_total() {
        let mut stats = SessionStats::new();
        record_all(&mut stats, &[Heads, Tails, Tails, Heads, Heads, Heads]);

        assert_eq!(stats.count(Heads), 4);
        assert_eq!(stats.count(Tails), 2);
        assert_eq!(stats.total_flips(), 6);
    }

    #[test]
    fn test_streak_run() {
        let mut stats = SessionStats::new();
        record_all(&mut stats, &[Heads, Heads, Heads]);

        assert_eq!(stats.current_streak(), 3);
        assert_eq!(stats.longest_streak(), 3);
        assert_eq!(stats.alternations(), 0);

        stats.record(Tails);
        assert_eq!(stats.current_streak(), 1);
        assert_eq!(stats.longest_streak(), 3);
        assert_eq!(stats.alternations(), 1);
    }

    #[test]
    fn test_alternating_sequence() {
        let mut stats = SessionStats::new();
        record_all(&mut stats, &[Heads, Tails, Heads, Tails]);

        assert_eq!(stats.alternations(), 3);
        assert_eq!(stats.current_streak(), 1);
        assert_eq!(stats.longest_streak(), 1);
    }

    #[test]
    fn test_first_flip_is_not_an_alternation() {
        let mut stats = SessionStats::new();
        stats.record(Tails);
        assert_eq!(stats.alternations(), 0);
        assert_eq!(stats.current_streak(), 1);
    }

    #[test]
    fn test_duration_accumulates() {
        let mut stats = SessionStats::new();
        stats.add_flip_duration(0.75);
        stats.add_flip_duration(0.375);
        assert!((stats.total_flip_seconds() - 1.125).abs() < 1e-9);
    }

    #[test]
    fn test_heads_ratio() {
        let mut stats = SessionStats::new();
        record_all(&mut stats, &[Heads, Heads, Tails, Tails]);
        assert!((stats.heads_ratio() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_serde_roundtrip() {
        let mut stats = SessionStats::new();
        record_all(&mut stats, &[Heads, Tails, Tails]);

        let json = serde_json::to_string(&stats).unwrap();
        let back: SessionStats = serde_json::from_str(&json).unwrap();
        assert_eq!(stats, back);
    }
}
