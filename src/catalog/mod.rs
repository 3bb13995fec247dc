//! Static definition catalogs and their per-session state records.
//!
//! ## Key Types
//!
//! - `AchievementDef` / `AchievementState`: unlockable milestones with
//!   recomputed, monotone progress
//! - `PowerUpDef` / `PowerUpState`: time-limited flip modifiers with
//!   cooldowns
//! - `ChallengeDef` / `ChallengeState`: 24-hour objectives with rolling
//!   windows and automatic expiry reset
//! - `CoinStyleDef` / `StyleCatalog`: cosmetic skins gated by flip count
//!
//! Definitions are seeded once when a session opens and never mutate;
//! only the paired state records change.

pub mod achievement;
pub mod challenge;
pub mod powerup;
pub mod style;

pub use achievement::{
    standard_achievements, AchievementDef, AchievementId, AchievementMetric, AchievementState,
};
pub use challenge::{standard_challenges, ChallengeDef, ChallengeKind, ChallengeState};
pub use powerup::{standard_power_ups, PowerUpDef, PowerUpKind, PowerUpState};
pub use style::{CoinStyleDef, CoinStyleId, StyleCatalog};

/// The full static catalog a session is seeded with.
#[derive(Clone, Debug)]
pub struct Catalog {
    /// Achievement definitions.
    pub achievements: Vec<AchievementDef>,

    /// Power-up definitions.
    pub power_ups: Vec<PowerUpDef>,

    /// Daily challenge definitions.
    pub challenges: Vec<ChallengeDef>,

    /// Coin style definitions.
    pub styles: StyleCatalog,
}

impl Catalog {
    /// The catalog of the original widget.
    #[must_use]
    pub fn standard() -> Self {
        let styles = StyleCatalog::standard();
        Self {
            achievements: standard_achievements(styles.len() as u32),
            power_ups: standard_power_ups(),
            challenges: standard_challenges(),
            styles,
        }
    }

    /// Look up a power-up definition.
    #[must_use]
    pub fn power_up(&self, kind: PowerUpKind) -> Option<&PowerUpDef> {
        self.power_ups.iter().find(|p| p.kind == kind)
    }

    /// Look up a challenge definition.
    #[must_use]
    pub fn challenge(&self, kind: ChallengeKind) -> Option<&ChallengeDef> {
        self.challenges.iter().find(|c| c.kind == kind)
    }

    /// Look up an achievement definition.
    #[must_use]
    pub fn achievement(&self, id: AchievementId) -> Option<&AchievementDef> {
        self.achievements.iter().find(|a| a.id == id)
    }
}
