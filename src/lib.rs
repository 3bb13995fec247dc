//! # flipcore
//!
//! The session-scoped state engine behind a browser coin-flip game.
//!
//! ## Design Principles
//!
//! 1. **Engine-Owned State**: The presentation layer holds no game state.
//!    It calls entry points on [`GameSession`], reads snapshots, and drains
//!    notification events.
//!
//! 2. **Injectable Time and Randomness**: Every timer goes through the
//!    [`Clock`] trait and every outcome through [`FlipRng`], so tests replay
//!    exact scenarios with a manual clock and a fixed seed.
//!
//! 3. **Recompute, Don't Increment**: Achievement and challenge progress
//!    are pure functions of session state, re-derived after every flip.
//!    Evaluation is idempotent; unlocks and completions fire exactly once.
//!
//! ## Architecture
//!
//! - **Deferred Transitions**: A flip request schedules its resolution;
//!   `tick()` drains whatever has come due. Nothing blocks.
//!
//! - **Persistent History**: The flip history is an `im` vector, so
//!   snapshots of it are O(1) clones.
//!
//! ## Modules
//!
//! - `core`: Outcomes, statistics, RNG, clock, configuration
//! - `catalog`: Achievement, power-up, challenge, and style definitions
//! - `events`: Notification events for the presentation layer
//! - `engine`: The session facade, scheduler, and evaluators
//! - `server`: Optional static-file host for the widget (feature `server`)

pub mod catalog;
pub mod core;
pub mod engine;
pub mod events;

#[cfg(feature = "server")]
pub mod server;

// Re-export commonly used types
pub use crate::core::{
    Clock, EngineConfig, FlipOutcome, FlipRng, ManualClock, SessionStats, SystemClock, Timestamp,
};

pub use crate::catalog::{
    AchievementDef, AchievementId, AchievementMetric, AchievementState, Catalog, ChallengeDef,
    ChallengeKind, ChallengeState, CoinStyleDef, CoinStyleId, PowerUpDef, PowerUpKind, PowerUpState,
    StyleCatalog,
};

pub use crate::events::{DanceKind, Notification, SoundCue};

pub use crate::engine::{
    Activation, ComboMeter, FlipRecord, FlipRequest, GameSession, MetricSnapshot, StyleSelection,
};
