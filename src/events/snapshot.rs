//! The state snapshot handed to the display.

use serde::{Deserialize, Serialize};

use crate::core::{Phase, Roll, Tile};

/// Everything a display needs to render the board.
///
/// Produced after every handled event. The engine never exposes live
/// references to its internals across the boundary; a snapshot is a plain
/// value the display can keep, diff, or serialize.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Current phase.
    pub phase: Phase,
    /// Every tile with its status, in value order.
    pub tiles: Vec<Tile>,
    /// The latest roll, if any.
    pub roll: Option<Roll>,
    /// Whether the roll control should be active.
    pub roll_enabled: bool,
    /// The status line to show.
    pub status: StatusMessage,
}

/// The human-readable status line.
///
/// Rendered through `Display`; the strings are the fixed vocabulary of the
/// game and displays should not re-word them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusMessage {
    /// Nothing to report (fresh board).
    Idle,
    /// The dice are in the air.
    Rolling,
    /// The dice settled on this roll.
    Rolled(Roll),
    /// This value was just eliminated.
    Eliminated(u8),
    /// The selection matched the roll; rolling is open.
    RollAgain,
    /// The selection is still short of the roll.
    KeepEliminating,
    /// No subset of the remaining tiles reaches this target.
    NoMoves(u8),
    /// Every tile is eliminated.
    Win,
    /// The requested elimination was rejected.
    InvalidElimination,
}

impl std::fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            StatusMessage::Idle => Ok(()),
            StatusMessage::Rolling => f.write_str("Rolling..."),
            StatusMessage::Rolled(roll) => write!(f, "Rolled: {}", roll),
            StatusMessage::Eliminated(value) => write!(f, "Eliminated: {}", value),
            StatusMessage::RollAgain => f.write_str("You can roll again!"),
            StatusMessage::KeepEliminating => {
                f.write_str("You can keep eliminating numbers!")
            }
            StatusMessage::NoMoves(target) => {
                write!(f, "No valid moves left that sum to {}! You lose!", target)
            }
            StatusMessage::Win => f.write_str("You win!"),
            StatusMessage::InvalidElimination => {
                f.write_str("Invalid elimination! Cannot eliminate this number.")
            }
        }
    }
}
