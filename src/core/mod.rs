//! Core engine types: outcomes, RNG, clock, statistics, configuration.
//!
//! This module contains the fundamental building blocks the rest of the
//! engine is assembled from. Nothing here knows about catalogs, power-ups,
//! or notifications.

pub mod clock;
pub mod config;
pub mod outcome;
pub mod rng;
pub mod stats;

pub use clock::{Clock, ManualClock, SystemClock, Timestamp};
pub use config::EngineConfig;
pub use outcome::FlipOutcome;
pub use rng::FlipRng;
pub use stats::SessionStats;
