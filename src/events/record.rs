//! Inbound events and the transition log.

use serde::{Deserialize, Serialize};

use crate::core::Roll;

use super::snapshot::StatusMessage;

/// An event arriving from the input layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputEvent {
    /// The roll control was activated.
    RollRequested,
    /// The tile carrying this value was clicked.
    TileClicked(u8),
    /// The reset control was activated.
    ResetRequested,
}

/// A state transition the engine performed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameEvent {
    /// A roll was started; the dice have not settled.
    RollStarted,
    /// The dice settled on this roll.
    RollCompleted(Roll),
    /// The tile carrying this value was eliminated.
    TileEliminated(u8),
    /// The selection matched the roll sum; rolling is enabled again.
    RollRearmed,
    /// Every tile is eliminated.
    GameWon,
    /// No subset of the remaining tiles reaches the target.
    GameLost {
        /// The unreachable roll sum.
        target: u8,
    },
    /// The board returned to its initial state.
    BoardReset,
}

impl GameEvent {
    /// The status line announcing this transition.
    ///
    /// Lets a display narrate every transition in order; the engine's own
    /// status field only keeps the last word on each input event.
    #[must_use]
    pub fn message(&self) -> StatusMessage {
        match *self {
            GameEvent::RollStarted => StatusMessage::Rolling,
            GameEvent::RollCompleted(roll) => StatusMessage::Rolled(roll),
            GameEvent::TileEliminated(value) => StatusMessage::Eliminated(value),
            GameEvent::RollRearmed => StatusMessage::RollAgain,
            GameEvent::GameWon => StatusMessage::Win,
            GameEvent::GameLost { target } => StatusMessage::NoMoves(target),
            GameEvent::BoardReset => StatusMessage::Idle,
        }
    }
}

/// A recorded transition with its position in the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// The transition.
    pub event: GameEvent,
    /// 1-based position in the game's transition sequence.
    pub sequence: u32,
}
