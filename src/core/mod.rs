//! Core value types: tiles, rolls, dice, selection, phases, configuration.
//!
//! Everything here is a plain value the engine composes; none of it knows
//! about the turn state machine.

pub mod config;
pub mod phase;
pub mod rng;
pub mod roll;
pub mod selection;
pub mod tile;

pub use config::GameConfig;
pub use phase::Phase;
pub use rng::{DiceRng, DiceRngState, DiceSource, ScriptedDice};
pub use roll::Roll;
pub use selection::SelectionBuffer;
pub use tile::{Tile, TileRack, TileStatus};
