//! The game engine: turn state machine, legality checks, transitions.

use im::Vector;

use crate::core::{
    DiceRng, DiceSource, GameConfig, Phase, Roll, SelectionBuffer, TileRack, TileStatus,
};
use crate::error::IllegalAction;
use crate::events::{EventRecord, GameEvent, InputEvent, Snapshot, StatusMessage};

use super::reachability::can_reach;

/// Builder for a [`GameEngine`].
///
/// Defaults to the classic twelve-tile, 2d6 board.
#[derive(Clone, Debug, Default)]
pub struct GameBuilder {
    config: GameConfig,
}

impl GameBuilder {
    /// Start from the classic configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the highest tile value; the board holds tiles `1..=n`.
    #[must_use]
    pub fn highest_tile(mut self, n: u8) -> Self {
        assert!((2..=24).contains(&n), "Highest tile must be 2-24");
        self.config.highest_tile = n;
        self
    }

    /// Set the number of faces per die.
    #[must_use]
    pub fn die_faces(mut self, n: u8) -> Self {
        assert!((2..=12).contains(&n), "Die faces must be 2-12");
        self.config.die_faces = n;
        self
    }

    /// Build with a seeded RNG as the dice source.
    #[must_use]
    pub fn build(self, seed: u64) -> GameEngine<DiceRng> {
        self.build_with(DiceRng::new(seed))
    }

    /// Build with any dice source, e.g. [`ScriptedDice`](crate::ScriptedDice).
    #[must_use]
    pub fn build_with<D: DiceSource>(self, dice: D) -> GameEngine<D> {
        GameEngine {
            config: self.config,
            rack: TileRack::new(self.config.highest_tile),
            dice,
            roll: None,
            selection: SelectionBuffer::new(),
            phase: Phase::AwaitingRoll,
            roll_enabled: true,
            status: StatusMessage::Idle,
            history: Vector::new(),
            sequence: 0,
        }
    }
}

/// The Shut the Box rules engine.
///
/// Owns all game state and performs every transition synchronously; one
/// event is processed to completion before the next is accepted. The
/// display layer drives it through [`handle`](GameEngine::handle) (or the
/// individual operations) and renders the returned [`Snapshot`].
///
/// ## Rolling is a two-step operation
///
/// [`begin_roll`](GameEngine::begin_roll) puts the dice in the air and
/// [`complete_roll`](GameEngine::complete_roll) settles them, so a display
/// can hold its rolling animation between the two without the engine ever
/// touching a clock. While the dice are in the air, rolling and
/// elimination are both rejected. [`roll_dice`](GameEngine::roll_dice)
/// chains both steps for callers without an animation.
#[derive(Clone, Debug)]
pub struct GameEngine<D: DiceSource = DiceRng> {
    config: GameConfig,
    rack: TileRack,
    dice: D,
    roll: Option<Roll>,
    selection: SelectionBuffer,
    phase: Phase,
    roll_enabled: bool,
    status: StatusMessage,
    history: Vector<EventRecord>,
    sequence: u32,
}

impl GameEngine<DiceRng> {
    /// Create a classic-board engine with a seeded RNG.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        GameBuilder::new().build(seed)
    }

    /// Start configuring an engine.
    #[must_use]
    pub fn builder() -> GameBuilder {
        GameBuilder::new()
    }
}

impl<D: DiceSource> GameEngine<D> {
    // === Accessors ===

    /// The board configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The latest roll, if any.
    #[must_use]
    pub fn roll(&self) -> Option<Roll> {
        self.roll
    }

    /// The tile rack.
    #[must_use]
    pub fn rack(&self) -> &TileRack {
        &self.rack
    }

    /// Values eliminated against the current roll, in click order.
    #[must_use]
    pub fn selection(&self) -> &SelectionBuffer {
        &self.selection
    }

    /// Whether a roll request would be accepted right now.
    #[must_use]
    pub fn roll_enabled(&self) -> bool {
        self.roll_enabled
    }

    /// The latest status line.
    #[must_use]
    pub fn status(&self) -> StatusMessage {
        self.status
    }

    /// Every transition performed since the engine was built.
    #[must_use]
    pub fn history(&self) -> &Vector<EventRecord> {
        &self.history
    }

    /// Build the display snapshot for the current state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            phase: self.phase,
            tiles: self.rack.tiles().collect(),
            roll: self.roll,
            roll_enabled: self.roll_enabled,
            status: self.status,
        }
    }

    // === Operations ===

    /// Put the dice in the air.
    ///
    /// Legal whenever rolling is enabled: on a fresh board, or after the
    /// selection matched the previous roll.
    pub fn begin_roll(&mut self) -> Result<(), IllegalAction> {
        if !self.roll_enabled {
            return Err(IllegalAction::RollDisabled { phase: self.phase });
        }
        self.phase = Phase::Rolling;
        self.roll_enabled = false;
        self.status = StatusMessage::Rolling;
        self.record(GameEvent::RollStarted);
        Ok(())
    }

    /// Settle the dice and open the turn.
    ///
    /// Draws two faces from the dice source, clears the selection, and
    /// checks reachability over the still-available tiles: if no subset
    /// reaches the new sum the game is lost on the spot, otherwise the
    /// player may start eliminating. Tiles eliminated in earlier turns
    /// stay eliminated.
    pub fn complete_roll(&mut self) -> Result<(), IllegalAction> {
        if self.phase != Phase::Rolling {
            return Err(IllegalAction::NoRollInFlight { phase: self.phase });
        }
        let roll = Roll::random(&mut self.dice, self.config.die_faces);
        self.roll = Some(roll);
        self.selection.clear();
        self.status = StatusMessage::Rolled(roll);
        self.record(GameEvent::RollCompleted(roll));
        log::debug!(
            "rolled {} with {} tiles available",
            roll,
            self.rack.available_count()
        );

        if self.can_make_move() {
            self.phase = Phase::Resolving;
        } else {
            self.lose(roll.sum());
        }
        Ok(())
    }

    /// Roll in one step: [`begin_roll`](Self::begin_roll) then
    /// [`complete_roll`](Self::complete_roll).
    pub fn roll_dice(&mut self) -> Result<(), IllegalAction> {
        self.begin_roll()?;
        self.complete_roll()
    }

    /// Eliminate the tile carrying `value` against the current roll.
    ///
    /// Legal only while resolving an unmatched roll, on an available tile,
    /// and only if the selection stays within the roll sum. A rejected
    /// elimination mutates nothing.
    ///
    /// On success the tile is gone for the rest of the game, and the turn
    /// advances: all tiles eliminated wins outright; a selection matching
    /// the roll sum re-enables rolling; anything less keeps the turn open.
    /// Reachability of the full roll sum over the remaining tiles is then
    /// re-checked, and failing it loses the game even when the selection
    /// just matched.
    pub fn eliminate(&mut self, value: u8) -> Result<(), IllegalAction> {
        let roll = match (self.phase, self.roll) {
            (Phase::Resolving, Some(roll)) => roll,
            _ => return Err(IllegalAction::EliminationClosed { phase: self.phase }),
        };
        if self.roll_enabled {
            return Err(IllegalAction::TurnMatched);
        }
        match self.rack.status(value) {
            None => return Err(IllegalAction::UnknownTile { value }),
            Some(TileStatus::Eliminated) => {
                return Err(IllegalAction::TileUnavailable { value })
            }
            Some(TileStatus::Available) => {}
        }
        let target = roll.sum();
        if self.selection.sum() + u16::from(value) > u16::from(target) {
            return Err(IllegalAction::OvershootsRoll { value, target });
        }

        self.rack.eliminate(value);
        self.selection.push(value);
        self.record(GameEvent::TileEliminated(value));

        if self.rack.all_eliminated() {
            self.phase = Phase::Won;
            self.roll_enabled = false;
            self.status = StatusMessage::Win;
            self.record(GameEvent::GameWon);
            log::debug!("all tiles eliminated");
            return Ok(());
        }

        if self.selection.sum() == u16::from(target) {
            self.roll_enabled = true;
            self.status = StatusMessage::RollAgain;
            self.record(GameEvent::RollRearmed);
        } else {
            self.status = StatusMessage::KeepEliminating;
        }

        // Reference rules: the re-check runs against the full roll sum,
        // not the remainder, and applies even right after a match.
        if !self.can_make_move() {
            self.lose(target);
        }
        Ok(())
    }

    /// Check whether some non-empty subset of the available tiles sums
    /// exactly to the current roll.
    ///
    /// `false` with no roll on the table or an empty rack.
    #[must_use]
    pub fn can_make_move(&self) -> bool {
        match self.roll {
            Some(roll) => can_reach(&self.rack.available_values(), roll.sum()),
            None => false,
        }
    }

    /// Return to the initial state: all tiles available, no roll, empty
    /// selection, rolling enabled.
    ///
    /// Legal from any phase.
    pub fn reset(&mut self) {
        self.rack.reset();
        self.selection.clear();
        self.roll = None;
        self.phase = Phase::AwaitingRoll;
        self.roll_enabled = true;
        self.status = StatusMessage::Idle;
        self.record(GameEvent::BoardReset);
        log::debug!("board reset");
    }

    /// Dispatch an input event and return the resulting snapshot.
    ///
    /// This is the display contract: a rejected roll request leaves the
    /// state untouched (the control was disabled anyway), and a rejected
    /// tile click surfaces the invalid-elimination notice without touching
    /// game state.
    pub fn handle(&mut self, event: InputEvent) -> Snapshot {
        match event {
            InputEvent::RollRequested => {
                if let Err(err) = self.begin_roll() {
                    log::debug!("roll request ignored: {}", err);
                }
            }
            InputEvent::TileClicked(value) => {
                if let Err(err) = self.eliminate(value) {
                    log::debug!("tile click rejected: {}", err);
                    self.status = StatusMessage::InvalidElimination;
                }
            }
            InputEvent::ResetRequested => self.reset(),
        }
        self.snapshot()
    }

    fn lose(&mut self, target: u8) {
        self.phase = Phase::Lost;
        self.roll_enabled = false;
        self.status = StatusMessage::NoMoves(target);
        self.record(GameEvent::GameLost { target });
        log::debug!(
            "no subset of {:?} reaches {}",
            self.rack.available_values(),
            target
        );
    }

    fn record(&mut self, event: GameEvent) {
        self.sequence += 1;
        self.history.push_back(EventRecord {
            event,
            sequence: self.sequence,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScriptedDice;

    fn scripted(faces: &[u8]) -> GameEngine<ScriptedDice> {
        GameEngine::builder().build_with(ScriptedDice::new(faces.iter().copied()))
    }

    #[test]
    fn test_initial_state() {
        let engine = GameEngine::new(42);

        assert_eq!(engine.phase(), Phase::AwaitingRoll);
        assert_eq!(engine.roll(), None);
        assert!(engine.roll_enabled());
        assert!(engine.selection().is_empty());
        assert_eq!(engine.status(), StatusMessage::Idle);
        assert_eq!(engine.rack().available_count(), 12);
        assert!(engine.history().is_empty());
    }

    #[test]
    fn test_begin_roll_enters_rolling() {
        let mut engine = scripted(&[3, 4]);

        engine.begin_roll().unwrap();

        assert_eq!(engine.phase(), Phase::Rolling);
        assert!(!engine.roll_enabled());
        assert_eq!(engine.status(), StatusMessage::Rolling);

        // Both controls are dead while the dice are in the air
        assert_eq!(
            engine.begin_roll(),
            Err(IllegalAction::RollDisabled {
                phase: Phase::Rolling
            })
        );
        assert_eq!(
            engine.eliminate(5),
            Err(IllegalAction::EliminationClosed {
                phase: Phase::Rolling
            })
        );
    }

    #[test]
    fn test_complete_roll_requires_rolling_phase() {
        let mut engine = GameEngine::new(42);

        assert_eq!(
            engine.complete_roll(),
            Err(IllegalAction::NoRollInFlight {
                phase: Phase::AwaitingRoll
            })
        );
    }

    #[test]
    fn test_complete_roll_opens_the_turn() {
        let mut engine = scripted(&[3, 4]);

        engine.begin_roll().unwrap();
        engine.complete_roll().unwrap();

        let roll = engine.roll().unwrap();
        assert_eq!(roll, Roll::new(3, 4));
        assert_eq!(engine.phase(), Phase::Resolving);
        assert!(!engine.roll_enabled());
        assert_eq!(engine.status(), StatusMessage::Rolled(roll));
        assert!(engine.can_make_move());
    }

    #[test]
    fn test_first_roll_on_full_board_never_loses() {
        // Every sum 2..=12 has a matching tile on a fresh board
        for seed in 0..20 {
            let mut engine = GameEngine::new(seed);
            engine.roll_dice().unwrap();
            assert_eq!(engine.phase(), Phase::Resolving);
        }
    }

    #[test]
    fn test_eliminate_requires_resolving() {
        let mut engine = GameEngine::new(42);

        assert_eq!(
            engine.eliminate(5),
            Err(IllegalAction::EliminationClosed {
                phase: Phase::AwaitingRoll
            })
        );
        assert!(engine.rack().is_available(5));
    }

    #[test]
    fn test_exact_match_rearms_and_preserves_selection() {
        let mut engine = scripted(&[3, 4, 1, 2]);
        engine.roll_dice().unwrap();

        engine.eliminate(7).unwrap();

        assert_eq!(engine.phase(), Phase::Resolving);
        assert!(engine.roll_enabled());
        assert_eq!(engine.status(), StatusMessage::RollAgain);
        // The buffer survives the match...
        assert_eq!(engine.selection().values(), &[7]);

        // ...and clears on the next roll
        engine.roll_dice().unwrap();
        assert!(engine.selection().is_empty());
        assert_eq!(engine.roll(), Some(Roll::new(1, 2)));
        // The tile stays eliminated across turns
        assert!(!engine.rack().is_available(7));
    }

    #[test]
    fn test_partial_elimination_keeps_turn_open() {
        let mut engine = scripted(&[6, 6]);
        engine.roll_dice().unwrap();

        engine.eliminate(4).unwrap();

        assert_eq!(engine.status(), StatusMessage::KeepEliminating);
        assert!(!engine.roll_enabled());
        assert_eq!(engine.selection().sum(), 4);

        engine.eliminate(8).unwrap();

        assert_eq!(engine.status(), StatusMessage::RollAgain);
        assert!(engine.roll_enabled());
        assert_eq!(engine.selection().sum(), 12);
    }

    #[test]
    fn test_unknown_tile_rejected() {
        let mut engine = scripted(&[3, 4]);
        engine.roll_dice().unwrap();

        assert_eq!(
            engine.eliminate(0),
            Err(IllegalAction::UnknownTile { value: 0 })
        );
        assert_eq!(
            engine.eliminate(13),
            Err(IllegalAction::UnknownTile { value: 13 })
        );
        assert!(engine.selection().is_empty());
    }

    #[test]
    fn test_eliminated_tile_rejected_next_turn() {
        let mut engine = scripted(&[6, 6, 6, 6]);
        engine.roll_dice().unwrap();
        engine.eliminate(12).unwrap();
        engine.roll_dice().unwrap();

        let before = engine.snapshot();
        assert_eq!(
            engine.eliminate(12),
            Err(IllegalAction::TileUnavailable { value: 12 })
        );
        assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn test_elimination_after_match_rejected() {
        let mut engine = scripted(&[3, 4]);
        engine.roll_dice().unwrap();
        engine.eliminate(7).unwrap();

        assert_eq!(engine.eliminate(3), Err(IllegalAction::TurnMatched));
        assert!(engine.rack().is_available(3));
    }

    #[test]
    fn test_overshoot_rejected() {
        let mut engine = scripted(&[1, 2]);
        engine.roll_dice().unwrap();

        engine.eliminate(1).unwrap();
        assert_eq!(
            engine.eliminate(12),
            Err(IllegalAction::OvershootsRoll {
                value: 12,
                target: 3
            })
        );
        assert!(engine.rack().is_available(12));

        engine.eliminate(2).unwrap();
        assert!(engine.roll_enabled());
    }

    #[test]
    fn test_win_on_last_tile() {
        let mut engine = GameEngine::builder()
            .highest_tile(3)
            .build_with(ScriptedDice::new([1, 2, 1, 2]));

        engine.roll_dice().unwrap();
        engine.eliminate(1).unwrap();
        engine.eliminate(2).unwrap();
        assert!(engine.roll_enabled());

        engine.roll_dice().unwrap();
        engine.eliminate(3).unwrap();

        assert_eq!(engine.phase(), Phase::Won);
        assert_eq!(engine.status(), StatusMessage::Win);
        assert!(!engine.roll_enabled());

        // Terminal until reset
        assert_eq!(
            engine.begin_roll(),
            Err(IllegalAction::RollDisabled { phase: Phase::Won })
        );
        assert_eq!(
            engine.eliminate(1),
            Err(IllegalAction::EliminationClosed { phase: Phase::Won })
        );
    }

    #[test]
    fn test_loss_when_roll_unreachable() {
        let mut engine = GameEngine::builder()
            .highest_tile(4)
            .build_with(ScriptedDice::new([5, 6]));

        engine.roll_dice().unwrap();

        assert_eq!(engine.phase(), Phase::Lost);
        assert_eq!(engine.status(), StatusMessage::NoMoves(11));
        assert!(!engine.roll_enabled());
        assert_eq!(
            engine.begin_roll(),
            Err(IllegalAction::RollDisabled { phase: Phase::Lost })
        );
    }

    #[test]
    fn test_lost_mid_selection_against_full_target() {
        // The re-check runs against the full roll sum over the remaining
        // tiles. Eliminating 2 toward a 6 leaves {1, 3, 4}, which has no
        // subset summing to 6, so the game is lost mid-selection.
        let mut engine = GameEngine::builder()
            .highest_tile(4)
            .build_with(ScriptedDice::new([3, 3]));

        engine.roll_dice().unwrap();
        engine.eliminate(2).unwrap();

        assert_eq!(engine.phase(), Phase::Lost);
        assert_eq!(engine.status(), StatusMessage::NoMoves(6));
    }

    #[test]
    fn test_lost_after_exact_match_when_remainder_unreachable() {
        // 4 then 2 matches the 6 exactly, but the remaining {1, 3} cannot
        // reach 6, so the earned re-roll is immediately revoked.
        let mut engine = GameEngine::builder()
            .highest_tile(4)
            .build_with(ScriptedDice::new([3, 3]));

        engine.roll_dice().unwrap();
        engine.eliminate(4).unwrap();
        assert_eq!(engine.status(), StatusMessage::KeepEliminating);

        engine.eliminate(2).unwrap();

        assert_eq!(engine.phase(), Phase::Lost);
        assert!(!engine.roll_enabled());
        assert_eq!(engine.status(), StatusMessage::NoMoves(6));

        // The history keeps both sides of the story
        let events: Vec<GameEvent> =
            engine.history().iter().map(|record| record.event).collect();
        assert!(events.contains(&GameEvent::RollRearmed));
        assert_eq!(events.last(), Some(&GameEvent::GameLost { target: 6 }));
    }

    #[test]
    fn test_can_make_move_without_roll() {
        let engine = GameEngine::new(42);
        assert!(!engine.can_make_move());
    }

    #[test]
    fn test_reset_restores_fresh_state() {
        let fresh = scripted(&[]).snapshot();

        // From mid-resolution
        let mut engine = scripted(&[3, 4]);
        engine.roll_dice().unwrap();
        engine.eliminate(3).unwrap();
        engine.reset();
        assert_eq!(engine.snapshot(), fresh);

        // From a loss
        let mut engine = GameEngine::builder()
            .highest_tile(4)
            .build_with(ScriptedDice::new([5, 6]));
        engine.roll_dice().unwrap();
        assert_eq!(engine.phase(), Phase::Lost);
        engine.reset();
        assert_eq!(engine.phase(), Phase::AwaitingRoll);
        assert!(engine.roll_enabled());
        assert_eq!(engine.rack().available_count(), 4);

        // From the initial state
        let mut engine = scripted(&[]);
        engine.reset();
        assert_eq!(engine.snapshot(), fresh);
    }

    #[test]
    fn test_handle_tile_click_rejection_sets_notice() {
        let mut engine = scripted(&[]);

        let snapshot = engine.handle(InputEvent::TileClicked(5));

        assert_eq!(snapshot.status, StatusMessage::InvalidElimination);
        assert_eq!(snapshot.phase, Phase::AwaitingRoll);
        assert_eq!(engine.rack().available_count(), 12);
        assert!(engine.history().is_empty());
    }

    #[test]
    fn test_handle_roll_request_ignored_when_disabled() {
        let mut engine = scripted(&[3, 4]);
        engine.roll_dice().unwrap();

        let before = engine.snapshot();
        let snapshot = engine.handle(InputEvent::RollRequested);

        assert_eq!(snapshot, before);
    }

    #[test]
    fn test_handle_drives_the_two_phase_roll() {
        let mut engine = scripted(&[2, 5]);

        let rolling = engine.handle(InputEvent::RollRequested);
        assert_eq!(rolling.phase, Phase::Rolling);
        assert_eq!(rolling.status, StatusMessage::Rolling);
        assert_eq!(rolling.roll, None);

        engine.complete_roll().unwrap();
        let resolving = engine.snapshot();
        assert_eq!(resolving.phase, Phase::Resolving);
        assert_eq!(resolving.roll, Some(Roll::new(2, 5)));
    }

    #[test]
    fn test_handle_reset() {
        let mut engine = scripted(&[3, 4]);
        engine.roll_dice().unwrap();

        let snapshot = engine.handle(InputEvent::ResetRequested);

        assert_eq!(snapshot.phase, Phase::AwaitingRoll);
        assert!(snapshot.roll_enabled);
        assert_eq!(snapshot.roll, None);
        assert_eq!(snapshot.status, StatusMessage::Idle);
    }

    #[test]
    fn test_history_sequence_increments() {
        let mut engine = scripted(&[3, 4]);
        engine.roll_dice().unwrap();
        engine.eliminate(7).unwrap();

        let records: Vec<EventRecord> = engine.history().iter().copied().collect();
        let events: Vec<GameEvent> = records.iter().map(|record| record.event).collect();

        assert_eq!(
            events,
            vec![
                GameEvent::RollStarted,
                GameEvent::RollCompleted(Roll::new(3, 4)),
                GameEvent::TileEliminated(7),
                GameEvent::RollRearmed,
            ]
        );
        for (index, record) in records.iter().enumerate() {
            assert_eq!(record.sequence, index as u32 + 1);
        }
    }

    #[test]
    fn test_same_seed_same_game() {
        let mut engine1 = GameEngine::new(1234);
        let mut engine2 = GameEngine::new(1234);

        engine1.roll_dice().unwrap();
        engine2.roll_dice().unwrap();

        assert_eq!(engine1.snapshot(), engine2.snapshot());
        assert_eq!(engine1.roll(), engine2.roll());
    }
}
