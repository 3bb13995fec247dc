//! Engine configuration.
//!
//! All tunable timing and threshold values live in [`EngineConfig`] rather
//! than being scattered as magic numbers through the transition code. The
//! defaults reproduce the original widget's behavior; tests shrink the
//! windows to keep scenarios short.

use serde::{Deserialize, Serialize};

/// Tunable engine parameters.
///
/// ## Defaults
///
/// | Parameter | Default |
/// |-----------|---------|
/// | flip duration | 750 ms (375 ms under time warp) |
/// | combo window / cap | 2 000 ms / 5 |
/// | particle / celebration streak | 3 / 5 |
/// | lucky-streak bias | 0.75 |
/// | challenge upkeep interval | 60 s |
/// | challenge lifetime | 24 h |
/// | speed window | 30 s |
/// | balance window | 30 flips |
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Nominal flip animation duration, in milliseconds.
    pub flip_duration_ms: u64,

    /// Maximum gap between flip starts that still extends the combo.
    pub combo_window_ms: u64,

    /// Upper bound on the combo multiplier.
    pub combo_cap: u32,

    /// Streak length at which the particle burst fires.
    pub particle_streak: u32,

    /// Streak length at which confetti, dance, and the streak sound fire.
    pub celebration_streak: u32,

    /// Probability that a lucky-streak draw repeats the last outcome.
    pub lucky_bias: f64,

    /// Interval between daily-challenge upkeep passes.
    pub upkeep_interval_ms: u64,

    /// How long a challenge lives before it expires and resets.
    pub challenge_lifetime_ms: u64,

    /// Rolling window for the speed-demon challenge.
    pub speed_window_ms: u64,

    /// Number of most-recent flips inspected by the perfect-balance challenge.
    pub balance_window: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            flip_duration_ms: 750,
            combo_window_ms: 2_000,
            combo_cap: 5,
            particle_streak: 3,
            celebration_streak: 5,
            lucky_bias: 0.75,
            upkeep_interval_ms: 60_000,
            challenge_lifetime_ms: 24 * 60 * 60 * 1_000,
            speed_window_ms: 30_000,
            balance_window: 30,
        }
    }
}

impl EngineConfig {
    /// Configuration with the original widget's values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the nominal flip duration (builder pattern).
    #[must_use]
    pub fn with_flip_duration_ms(mut self, millis: u64) -> Self {
        assert!(millis > 0, "Flip duration must be positive");
        self.flip_duration_ms = millis;
        self
    }

    /// Set the combo window (builder pattern).
    #[must_use]
    pub fn with_combo_window_ms(mut self, millis: u64) -> Self {
        self.combo_window_ms = millis;
        self
    }

    /// Set the lucky-streak bias (builder pattern).
    #[must_use]
    pub fn with_lucky_bias(mut self, probability: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&probability),
            "Bias must be a probability"
        );
        self.lucky_bias = probability;
        self
    }

    /// Set the challenge lifetime (builder pattern).
    #[must_use]
    pub fn with_challenge_lifetime_ms(mut self, millis: u64) -> Self {
        self.challenge_lifetime_ms = millis;
        self
    }

    /// Set the upkeep interval (builder pattern).
    #[must_use]
    pub fn with_upkeep_interval_ms(mut self, millis: u64) -> Self {
        self.upkeep_interval_ms = millis;
        self
    }

    /// The flip duration for the current power-up state.
    ///
    /// Time warp halves the animation, revealing results sooner.
    #[must_use]
    pub fn flip_duration_for(&self, time_warp_active: bool) -> u64 {
        if time_warp_active {
            self.flip_duration_ms / 2
        } else {
            self.flip_duration_ms
        }
    }
}
