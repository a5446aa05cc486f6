//! Deterministic shuffling for the shrine pool.
//!
//! The pool never touches a global RNG. It shuffles through a
//! [`ShuffleSource`], which a match owns and tests can replace. The default
//! source is [`GameRng`], a seeded ChaCha8 stream: same seed, same pool order.
//!
//! ```
//! use gods_gauntlet::core::{GameRng, ShuffleSource};
//! use gods_gauntlet::deities::Deity;
//!
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//! let mut left = Deity::ALL;
//! let mut right = Deity::ALL;
//!
//! a.try_shuffle(&mut left).unwrap();
//! b.try_shuffle(&mut right).unwrap();
//! assert_eq!(left, right);
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::error::ShuffleError;
use crate::deities::Deity;

/// Source of shuffled permutations for the shrine pool.
///
/// Implementations must leave `cards` a permutation of its input on success.
/// On failure the pool falls back to canonical order, so the contents of
/// `cards` after an error are ignored.
pub trait ShuffleSource {
    /// Shuffle the cards in place.
    fn try_shuffle(&mut self, cards: &mut [Deity]) -> Result<(), ShuffleError>;
}

impl<S: ShuffleSource + ?Sized> ShuffleSource for Box<S> {
    fn try_shuffle(&mut self, cards: &mut [Deity]) -> Result<(), ShuffleError> {
        (**self).try_shuffle(cards)
    }
}

/// Seeded ChaCha8 RNG. The default shuffle source of a match.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }
}

impl ShuffleSource for GameRng {
    fn try_shuffle(&mut self, cards: &mut [Deity]) -> Result<(), ShuffleError> {
        self.shuffle(cards);
        Ok(())
    }
}
