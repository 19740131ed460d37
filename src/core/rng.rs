//! Seedable randomness for computer move selection.
//!
//! The only random decision in the engine is the computer's opening cell.
//! It draws from a `GameRng` passed in by the caller, never from a global
//! source, so a fixed seed replays the same game.
//!
//! ```
//! use chroma_clash::core::GameRng;
//!
//! let cells = [(1, 1), (1, 2), (2, 1), (2, 2)];
//! let a = GameRng::new(42).choose(&cells).copied();
//! let b = GameRng::new(42).choose(&cells).copied();
//!
//! assert_eq!(a, b);
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// ChaCha8 stream that remembers its seed.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed from the operating system. The seed is kept, so the game can be
    /// replayed with [`GameRng::new`].
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Pick one element uniformly. `None` for an empty slice.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.inner)
    }
}
