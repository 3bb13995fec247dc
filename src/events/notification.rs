//! Outbound notifications for the presentation layer.
//!
//! The engine never touches the DOM, audio elements, or animation code.
//! When a transition produces a side effect the user should see or hear,
//! the engine pushes a [`Notification`] and the presentation layer decides
//! how to render it: play a sound file, pop a toast, spawn particles.
//!
//! ## Design Philosophy
//!
//! Notifications describe *what happened*, not *how to render it*. Sound
//! cues are named identifiers; playback, volume, and asset loading are
//! external responsibilities, and an asset that fails to load degrades to
//! silence rather than interrupting gameplay.

use serde::{Deserialize, Serialize};

use crate::catalog::AchievementId;
use crate::core::FlipOutcome;

/// Named sound cues the audio subsystem maps to assets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundCue {
    /// Fired the instant a flip begins.
    FlipStart,
    /// Looping cue while the coin is in the air.
    Spinning,
    /// A flip resolved to heads.
    Heads,
    /// A flip resolved to tails.
    Tails,
    /// A celebration-length streak continued.
    Streak,
    /// An achievement unlocked (also used for power-up activation).
    Achievement,
}

impl SoundCue {
    /// The result cue for an outcome.
    #[must_use]
    pub const fn for_outcome(outcome: FlipOutcome) -> Self {
        match outcome {
            FlipOutcome::Heads => SoundCue::Heads,
            FlipOutcome::Tails => SoundCue::Tails,
        }
    }
}

/// Celebration dance styles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DanceKind {
    Victory,
    Robot,
    Disco,
    Moonwalk,
    Breakdance,
    Floss,
}

impl DanceKind {
    /// The dance the original widget picks for a long streak.
    #[must_use]
    pub const fn for_outcome(outcome: FlipOutcome) -> Self {
        match outcome {
            FlipOutcome::Heads => DanceKind::Victory,
            FlipOutcome::Tails => DanceKind::Robot,
        }
    }
}

/// One notification event for the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notification {
    /// Play a named sound cue. Suppressed entirely while sound is disabled.
    Audio(SoundCue),

    /// An achievement unlocked (fires at most once per achievement).
    AchievementUnlocked {
        id: AchievementId,
        name: String,
        description: String,
    },

    /// Streak reached the particle threshold; render a burst.
    ParticleBurst { streak: u32, outcome: FlipOutcome },

    /// Streak reached the celebration threshold; render confetti.
    Confetti { streak: u32, outcome: FlipOutcome },

    /// Streak reached the celebration threshold; play a dance.
    Dance { kind: DanceKind },

    /// Show a transient message.
    Toast { title: String, body: Option<String> },
}

impl Notification {
    /// A toast with only a title.
    pub fn toast(title: impl Into<String>) -> Self {
        Notification::Toast {
            title: title.into(),
            body: None,
        }
    }

    /// A toast with a title and body.
    pub fn toast_with(title: impl Into<String>, body: impl Into<String>) -> Self {
        Notification::Toast {
            title: title.into(),
            body: Some(body.into()),
        }
    }

    /// Whether this notification is an audio cue.
    #[must_use]
    pub fn is_audio(&self) -> bool {
        matches!(self, Notification::Audio(_))
    }
}
