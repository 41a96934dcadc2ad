//! Board configuration.
//!
//! The rules never hardcode the board shape: the classic game closes
//! twelve tiles with two six-sided dice, but nine- and ten-tile variants
//! exist and the engine plays them with the same rules. Configuration
//! happens at build time via [`GameBuilder`](crate::GameBuilder).

use serde::{Deserialize, Serialize};

/// Shape of the board and dice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Highest tile value; the board holds tiles `1..=highest_tile`.
    pub highest_tile: u8,
    /// Faces per die. Two dice are always rolled.
    pub die_faces: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            highest_tile: 12,
            die_faces: 6,
        }
    }
}

impl GameConfig {
    /// The classic twelve-tile, 2d6 board.
    #[must_use]
    pub fn classic() -> Self {
        Self::default()
    }

    /// Largest sum two dice can produce.
    #[must_use]
    pub const fn max_roll(&self) -> u8 {
        self.die_faces * 2
    }
}
