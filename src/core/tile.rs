//! Tiles and the tile rack.
//!
//! ## Tile identity
//!
//! A tile IS its value: the board holds one tile per value in
//! `1..=highest`, and a value never changes once the rack is built. Only
//! the status moves, from `Available` to `Eliminated` and back on reset.
//!
//! ## TileRack
//!
//! Vec-backed storage with O(1) access by value (value 1 lives at index 0).

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Whether a tile is still in play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileStatus {
    /// The tile can still be eliminated.
    Available,
    /// The tile has been eliminated this game.
    Eliminated,
}

/// One numbered tile: its fixed value and current status.
///
/// Snapshot view handed to the display layer; the rack is the owner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    /// Fixed value, unique on the board.
    pub value: u8,
    /// Current status.
    pub status: TileStatus,
}

/// The full board of tiles.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileRack {
    statuses: Vec<TileStatus>,
}

impl TileRack {
    /// Create a rack with every tile in `1..=highest` available.
    #[must_use]
    pub fn new(highest: u8) -> Self {
        Self {
            statuses: vec![TileStatus::Available; highest as usize],
        }
    }

    /// The highest tile value on the board.
    #[must_use]
    pub fn highest(&self) -> u8 {
        self.statuses.len() as u8
    }

    /// Status of the tile carrying `value`, or `None` for a value with no
    /// tile on this board.
    #[must_use]
    pub fn status(&self, value: u8) -> Option<TileStatus> {
        if value == 0 {
            return None;
        }
        self.statuses.get(value as usize - 1).copied()
    }

    /// Check whether the tile carrying `value` is still available.
    #[must_use]
    pub fn is_available(&self, value: u8) -> bool {
        self.status(value) == Some(TileStatus::Available)
    }

    /// Eliminate the tile carrying `value`.
    ///
    /// Returns `true` if the tile was available and is now eliminated,
    /// `false` for unknown or already-eliminated values (no mutation).
    pub fn eliminate(&mut self, value: u8) -> bool {
        if !self.is_available(value) {
            return false;
        }
        self.statuses[value as usize - 1] = TileStatus::Eliminated;
        true
    }

    /// Return every tile to `Available`.
    pub fn reset(&mut self) {
        self.statuses.fill(TileStatus::Available);
    }

    /// Values of the tiles still available, ascending.
    #[must_use]
    pub fn available_values(&self) -> SmallVec<[u8; 12]> {
        self.statuses
            .iter()
            .enumerate()
            .filter(|(_, &status)| status == TileStatus::Available)
            .map(|(index, _)| index as u8 + 1)
            .collect()
    }

    /// Number of tiles still available.
    #[must_use]
    pub fn available_count(&self) -> usize {
        self.statuses
            .iter()
            .filter(|&&status| status == TileStatus::Available)
            .count()
    }

    /// Check whether every tile is eliminated (the winning board).
    #[must_use]
    pub fn all_eliminated(&self) -> bool {
        self.statuses
            .iter()
            .all(|&status| status == TileStatus::Eliminated)
    }

    /// Iterate over all tiles in value order.
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.statuses.iter().enumerate().map(|(index, &status)| Tile {
            value: index as u8 + 1,
            status,
        })
    }
}
