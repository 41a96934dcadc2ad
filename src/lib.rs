//! # shutbox
//!
//! A single-player Shut the Box rules engine.
//!
//! Twelve numbered tiles, two dice: each turn the player rolls and must
//! eliminate tiles whose values sum exactly to the roll. Eliminating every
//! tile wins; a roll no subset of the remaining tiles can reach loses.
//!
//! ## Design Principles
//!
//! 1. **Display-Agnostic**: The engine owns no widgets, colors, or timers.
//!    A display layer feeds [`InputEvent`]s in and renders the [`Snapshot`]
//!    that comes back.
//!
//! 2. **Deterministic**: Dice randomness arrives through the [`DiceSource`]
//!    trait. A seeded [`DiceRng`] replays identical games from identical
//!    seeds; [`ScriptedDice`] pins every roll in tests.
//!
//! 3. **Errors Are Values**: Illegal actions are rejected as
//!    [`IllegalAction`] without mutating state, never panics.
//!
//! ## Modules
//!
//! - `core`: tiles, rolls, dice, selection, phases, configuration
//! - `engine`: the turn state machine and subset-sum reachability
//! - `events`: the Display/Input boundary (events, snapshots, status lines)
//! - `error`: the `IllegalAction` taxonomy
//!
//! ## Example
//!
//! ```
//! use shutbox::{GameEngine, Phase, ScriptedDice};
//!
//! let mut game = GameEngine::builder().build_with(ScriptedDice::new([3, 4]));
//!
//! game.roll_dice().unwrap();
//! assert_eq!(game.phase(), Phase::Resolving);
//!
//! // 7 matches the roll exactly, so rolling opens back up.
//! game.eliminate(7).unwrap();
//! assert!(game.roll_enabled());
//! ```

pub mod core;
pub mod engine;
pub mod error;
pub mod events;

// Re-export commonly used types
pub use crate::core::{
    DiceRng, DiceRngState, DiceSource, GameConfig, Phase, Roll, ScriptedDice, SelectionBuffer,
    Tile, TileRack, TileStatus,
};

pub use crate::engine::{can_reach, GameBuilder, GameEngine};

pub use crate::error::IllegalAction;

pub use crate::events::{EventRecord, GameEvent, InputEvent, Snapshot, StatusMessage};
