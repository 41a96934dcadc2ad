//! Turn phase progression.

use serde::{Deserialize, Serialize};

/// Phase of the turn state machine.
///
/// The game starts in `AwaitingRoll` and moves through `Rolling` into
/// `Resolving` once a roll is produced. `Won` and `Lost` are terminal
/// until a reset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No roll in flight; the player may roll.
    AwaitingRoll,
    /// A roll was requested but the dice have not settled yet.
    Rolling,
    /// A roll is on the table; the player eliminates tiles against it.
    Resolving,
    /// No subset of the remaining tiles reaches the roll sum.
    Lost,
    /// Every tile is eliminated.
    Won,
}

impl Phase {
    /// Check whether the game has ended.
    ///
    /// Terminal phases only leave via [`reset`](crate::GameEngine::reset).
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Phase::Lost | Phase::Won)
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::AwaitingRoll => "awaiting a roll",
            Phase::Rolling => "rolling",
            Phase::Resolving => "resolving",
            Phase::Lost => "lost",
            Phase::Won => "won",
        };
        f.write_str(name)
    }
}
