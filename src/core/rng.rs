//! Deterministic dice randomness.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the identical roll sequence
//! - **Injectable**: The engine rolls through the [`DiceSource`] trait, so
//!   tests substitute a scripted sequence for real randomness
//! - **Serializable**: O(1) state capture and restore via [`DiceRngState`]
//!
//! ## Usage
//!
//! ```
//! use shutbox::{DiceRng, DiceSource, ScriptedDice};
//!
//! let mut rng = DiceRng::new(42);
//! let face = rng.roll_die(6);
//! assert!((1..=6).contains(&face));
//!
//! // Scripted dice replay a fixed sequence.
//! let mut scripted = ScriptedDice::new([3, 4]);
//! assert_eq!(scripted.roll_die(6), 3);
//! assert_eq!(scripted.roll_die(6), 4);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Source of individual die faces.
///
/// The engine only ever asks for one face at a time, so a source needs no
/// knowledge of the board or the turn. `faces` is always at least 1.
pub trait DiceSource {
    /// Produce a face in `1..=faces`.
    fn roll_die(&mut self, faces: u8) -> u8;
}

/// Seedable dice RNG.
///
/// Uses ChaCha8 for speed while keeping high-quality randomness, and keeps
/// the seed around so the stream position can be captured and restored.
#[derive(Clone, Debug)]
pub struct DiceRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl DiceRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Capture the current state for later restore.
    #[must_use]
    pub fn state(&self) -> DiceRngState {
        DiceRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore an RNG from a captured state.
    ///
    /// The restored RNG continues the sequence exactly where the capture
    /// left off.
    #[must_use]
    pub fn from_state(state: &DiceRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl DiceSource for DiceRng {
    fn roll_die(&mut self, faces: u8) -> u8 {
        self.inner.gen_range(1..=faces)
    }
}

/// Serializable RNG state.
///
/// Uses the ChaCha8 word position for O(1) capture regardless of how many
/// faces have been drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceRngState {
    /// Original seed.
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter).
    pub word_pos: u128,
}

/// Dice that replay a fixed sequence of faces.
///
/// Intended for tests and replays: every call to [`DiceSource::roll_die`]
/// pops the next scripted face, ignoring the requested face count.
///
/// Panics once the script is exhausted; scripts must cover every die the
/// driven scenario rolls.
#[derive(Clone, Debug)]
pub struct ScriptedDice {
    faces: VecDeque<u8>,
}

impl ScriptedDice {
    /// Create a script from a sequence of faces.
    #[must_use]
    pub fn new(faces: impl IntoIterator<Item = u8>) -> Self {
        Self {
            faces: faces.into_iter().collect(),
        }
    }

    /// Number of faces left in the script.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.faces.len()
    }
}

impl DiceSource for ScriptedDice {
    fn roll_die(&mut self, _faces: u8) -> u8 {
        self.faces.pop_front().expect("dice script exhausted")
    }
}
