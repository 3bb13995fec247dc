//! The session engine.
//!
//! ## Key Components
//!
//! - [`GameSession`]: the facade owning all per-session state
//! - [`Scheduler`]: deferred flip resolutions and power-up expiries
//! - [`ComboMeter`]: the cadence-based multiplier
//! - [`achievements`] / [`challenges`]: recompute-from-state evaluators

pub mod achievements;
pub mod challenges;
pub mod combo;
pub mod scheduler;
pub mod session;

pub use achievements::MetricSnapshot;
pub use challenges::{ChallengeProgress, FlipRecord};
pub use combo::ComboMeter;
pub use scheduler::{Deferred, Scheduler};
pub use session::{Activation, FlipRequest, GameSession, StyleSelection};
