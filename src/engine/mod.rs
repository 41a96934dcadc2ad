//! The rules engine: the turn state machine and the reachability check
//! that decides when a board is stuck.

pub mod game;
pub mod reachability;

pub use game::{GameBuilder, GameEngine};
pub use reachability::can_reach;
