//! Power-up definitions and activation state.
//!
//! Power-ups are time-limited modifiers to flip behavior. The static side
//! ([`PowerUpDef`]) carries display data plus the duration/cooldown pair;
//! the mutable side ([`PowerUpState`]) tracks whether the effect is live and
//! when it was last activated.
//!
//! Activation is guarded, not fallible: an attempt during cooldown or while
//! already active is a silent no-op surfaced to the UI as a disabled button,
//! never an error.

use serde::{Deserialize, Serialize};

use crate::core::Timestamp;

/// The three defined power-ups.
///
/// Their effects are wired into the flip transition:
/// - `DoubleFlip`: one request resolves two independent draws
/// - `LuckyStreak`: draws are biased toward repeating the last outcome
/// - `TimeWarp`: the flip animation is halved, revealing results sooner
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerUpKind {
    DoubleFlip,
    LuckyStreak,
    TimeWarp,
}

impl PowerUpKind {
    /// All power-up kinds, in display order.
    pub const ALL: [PowerUpKind; 3] = [
        PowerUpKind::DoubleFlip,
        PowerUpKind::LuckyStreak,
        PowerUpKind::TimeWarp,
    ];
}

impl std::fmt::Display for PowerUpKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PowerUpKind::DoubleFlip => write!(f, "double_flip"),
            PowerUpKind::LuckyStreak => write!(f, "lucky_streak"),
            PowerUpKind::TimeWarp => write!(f, "time_warp"),
        }
    }
}

/// Static power-up definition.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PowerUpDef {
    /// Which power-up this is.
    pub kind: PowerUpKind,

    /// Display name.
    pub name: String,

    /// Display description.
    pub description: String,

    /// Display icon (emoji in the original widget).
    pub icon: String,

    /// How long the effect stays active after activation.
    pub duration_ms: u64,

    /// Minimum gap between activations, measured from activation time.
    pub cooldown_ms: u64,
}

impl PowerUpDef {
    /// Create a new power-up definition.
    ///
    /// Every defined instance has `duration < cooldown`; the constructor
    /// enforces it so an active effect can never mask an open cooldown.
    pub fn new(
        kind: PowerUpKind,
        name: impl Into<String>,
        description: impl Into<String>,
        icon: impl Into<String>,
        duration_ms: u64,
        cooldown_ms: u64,
    ) -> Self {
        assert!(duration_ms > 0, "Duration must be positive");
        assert!(
            duration_ms < cooldown_ms,
            "Duration must be shorter than cooldown"
        );
        Self {
            kind,
            name: name.into(),
            description: description.into(),
            icon: icon.into(),
            duration_ms,
            cooldown_ms,
        }
    }
}

/// Mutable per-session power-up state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerUpState {
    /// Whether the effect is currently live.
    pub active: bool,

    /// When the power-up was last activated. `None` means never.
    pub last_activated_at: Option<Timestamp>,
}

impl PowerUpState {
    /// Whether activation is permitted at `now` for the given cooldown.
    ///
    /// Permitted when the power-up is not active and either was never
    /// activated or its cooldown has fully elapsed.
    #[must_use]
    pub fn can_activate(&self, now: Timestamp, cooldown_ms: u64) -> bool {
        if self.active {
            return false;
        }
        match self.last_activated_at {
            None => true,
            Some(at) => now.millis_since(at) >= cooldown_ms,
        }
    }

    /// Record an activation at `now`.
    pub fn activate(&mut self, now: Timestamp) {
        self.active = true;
        self.last_activated_at = Some(now);
    }

    /// Record the effect's expiry. Cooldown bookkeeping is untouched.
    pub fn expire(&mut self) {
        self.active = false;
    }
}

/// The power-up catalog of the original widget.
#[must_use]
pub fn standard_power_ups() -> Vec<PowerUpDef> {
    vec![
        PowerUpDef::new(
            PowerUpKind::DoubleFlip,
            "Double Flip",
            "Flip two coins at once for 30 seconds",
            "\u{26a1}",
            30_000,
            60_000,
        ),
        PowerUpDef::new(
            PowerUpKind::LuckyStreak,
            "Lucky Streak",
            "Increased chance of continuing streaks for 20 seconds",
            "\u{1f340}",
            20_000,
            90_000,
        ),
        PowerUpDef::new(
            PowerUpKind::TimeWarp,
            "Time Warp",
            "Reduce flip animation time by 50% for 15 seconds",
            "\u{231b}",
            15_000,
            45_000,
        ),
    ]
}
