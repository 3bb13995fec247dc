//! Deterministic random outcome source.
//!
//! Flip outcomes must be reproducible in tests, so the engine never calls an
//! ambient RNG. All draws go through [`FlipRng`]:
//!
//! - **Deterministic**: the same seed produces the identical outcome sequence
//! - **Fair by default**: heads and tails each at probability 0.5
//! - **Biasable**: the lucky-streak power-up skews a draw toward one face
//!
//! ```
//! use flipcore::core::FlipRng;
//!
//! let mut a = FlipRng::new(42);
//! let mut b = FlipRng::new(42);
//! assert_eq!(a.draw_fair(), b.draw_fair());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::outcome::FlipOutcome;

/// Deterministic RNG for flip draws.
///
/// Uses ChaCha8 for speed while keeping high-quality randomness.
#[derive(Clone, Debug)]
pub struct FlipRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl FlipRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from OS entropy, for live sessions.
    #[must_use]
    pub fn from_entropy() -> Self {
        let seed = rand::thread_rng().gen();
        Self::new(seed)
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draw a fair outcome: heads or tails at probability 0.5 each.
    pub fn draw_fair(&mut self) -> FlipOutcome {
        if self.inner.gen_bool(0.5) {
            FlipOutcome::Heads
        } else {
            FlipOutcome::Tails
        }
    }

    /// Draw an outcome biased toward `favored` with the given probability.
    ///
    /// `probability` is clamped to [0, 1]. A probability of 0.5 is a fair
    /// draw; 1.0 always produces `favored`.
    pub fn draw_biased(&mut self, favored: FlipOutcome, probability: f64) -> FlipOutcome {
        let p = probability.clamp(0.0, 1.0);
        if self.inner.gen_bool(p) {
            favored
        } else {
            favored.opposite()
        }
    }

    /// Generate a random boolean with the given probability of `true`.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }
}
