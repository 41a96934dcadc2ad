//! The Display/Input boundary.
//!
//! The engine owns no widgets and no timers. A display layer feeds
//! [`InputEvent`]s in through [`GameEngine::handle`](crate::GameEngine::handle)
//! and renders the [`Snapshot`] that comes back; nothing else crosses the
//! boundary.
//!
//! ## The two-phase roll
//!
//! A roll request only starts the roll: `handle(RollRequested)` returns a
//! snapshot in the `Rolling` phase with the "Rolling..." status, and the
//! display holds it for however long its animation lasts before calling
//! [`complete_roll`](crate::GameEngine::complete_roll) to settle the dice.
//! The delay is thereby a pure presentation concern and tests drive both
//! halves synchronously.
//!
//! ## The event log
//!
//! Every accepted transition is also recorded as a [`GameEvent`] in an
//! append-only history, so a display can narrate each step (or a test can
//! replay a whole game) instead of diffing snapshots.

pub mod record;
pub mod snapshot;

pub use record::{EventRecord, GameEvent, InputEvent};
pub use snapshot::{Snapshot, StatusMessage};
