//! A resolved dice roll.

use serde::{Deserialize, Serialize};

use super::rng::DiceSource;

/// The pair of die faces for the current turn.
///
/// Immutable once produced; the sum is always derived from the faces and
/// can never go stale.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Roll {
    /// First die face.
    pub die1: u8,
    /// Second die face.
    pub die2: u8,
}

impl Roll {
    /// Create a roll from two known faces.
    #[must_use]
    pub const fn new(die1: u8, die2: u8) -> Self {
        Self { die1, die2 }
    }

    /// Draw two independent faces in `1..=faces` from a dice source.
    #[must_use]
    pub fn random(dice: &mut impl DiceSource, faces: u8) -> Self {
        Self {
            die1: dice.roll_die(faces),
            die2: dice.roll_die(faces),
        }
    }

    /// Sum of both faces — the elimination target for the turn.
    #[must_use]
    pub const fn sum(self) -> u8 {
        self.die1 + self.die2
    }
}

impl std::fmt::Display for Roll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} + {} = {}", self.die1, self.die2, self.sum())
    }
}
