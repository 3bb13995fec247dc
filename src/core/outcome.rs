//! Flip outcomes.
//!
//! A coin resolves to one of two faces. The engine treats the two faces
//! symmetrically; only the presentation layer assigns imagery to them.

use serde::{Deserialize, Serialize};

/// The face a flip resolved to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlipOutcome {
    Heads,
    Tails,
}

impl FlipOutcome {
    /// The other face.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            FlipOutcome::Heads => FlipOutcome::Tails,
            FlipOutcome::Tails => FlipOutcome::Heads,
        }
    }

    /// Both faces, in display order.
    pub const ALL: [FlipOutcome; 2] = [FlipOutcome::Heads, FlipOutcome::Tails];
}

impl std::fmt::Display for FlipOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FlipOutcome::Heads => write!(f, "heads"),
            FlipOutcome::Tails => write!(f, "tails"),
        }
    }
}
