//! The error taxonomy.
//!
//! Every rules violation is an [`IllegalAction`]: an operation invoked in
//! a phase that forbids it, or against a tile that cannot be eliminated.
//! Illegal actions never mutate game state and never abort the program;
//! the event dispatcher surfaces them to the display as a status notice.

use thiserror::Error;

use crate::core::Phase;

/// A rejected operation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum IllegalAction {
    /// Rolling requested while the roll control is disabled.
    #[error("rolling is not available while {phase}")]
    RollDisabled {
        /// Phase the request arrived in.
        phase: Phase,
    },

    /// `complete_roll` called with no roll in flight.
    #[error("no roll is in flight while {phase}")]
    NoRollInFlight {
        /// Phase the request arrived in.
        phase: Phase,
    },

    /// Elimination requested outside the resolving phase.
    #[error("tiles cannot be eliminated while {phase}")]
    EliminationClosed {
        /// Phase the request arrived in.
        phase: Phase,
    },

    /// Elimination requested after the selection already matched the roll.
    #[error("the roll is already matched; roll again instead")]
    TurnMatched,

    /// No tile on this board carries the requested value.
    #[error("no tile carries the value {value}")]
    UnknownTile {
        /// The requested value.
        value: u8,
    },

    /// The tile was already eliminated in an earlier turn or click.
    #[error("tile {value} is already eliminated")]
    TileUnavailable {
        /// The requested value.
        value: u8,
    },

    /// Eliminating the tile would push the selection past the roll sum.
    #[error("eliminating {value} would overshoot the roll sum {target}")]
    OvershootsRoll {
        /// The requested value.
        value: u8,
        /// The roll sum the selection must reach exactly.
        target: u8,
    },
}
