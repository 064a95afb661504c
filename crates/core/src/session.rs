use crate::{resolve, Event, EventBus, GameConfig, Move, RngState, RoundRecord, SessionLedger};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("no move selected")]
    NoMoveSelected,
}

/// Owned game session: config, randomness, ledger, and the pending player
/// selection. Callers hold this explicitly; there is no ambient state.
#[derive(Debug)]
pub struct Session {
    pub config: GameConfig,
    pub rng: RngState,
    pub ledger: SessionLedger,
    selected: Option<Move>,
}

impl Session {
    pub fn new(config: GameConfig, seed: u64) -> Self {
        Self {
            config,
            rng: RngState::from_seed(seed),
            ledger: SessionLedger::new(),
            selected: None,
        }
    }

    pub fn selected(&self) -> Option<Move> {
        self.selected
    }

    /// Stores the pending player move. The selection persists across rounds
    /// until replaced or the session is reset.
    pub fn select_move(&mut self, player: Move, events: &mut EventBus) {
        self.selected = Some(player);
        events.push(Event::MoveSelected { player });
    }

    /// Resolves one round against a fresh random computer move. Fails
    /// without touching any state when no move is selected.
    pub fn play_round(&mut self, events: &mut EventBus) -> Result<RoundRecord, SessionError> {
        let player = self.selected.ok_or(SessionError::NoMoveSelected)?;
        Ok(self.resolve_round(player, events))
    }

    /// Validated path for auto-play and scripted moves: selects and plays in
    /// one step, so it cannot fail.
    pub fn play_move(&mut self, player: Move, events: &mut EventBus) -> RoundRecord {
        self.selected = Some(player);
        self.resolve_round(player, events)
    }

    fn resolve_round(&mut self, player: Move, events: &mut EventBus) -> RoundRecord {
        let computer = self.rng.draw_move();
        let outcome = resolve(player, computer);
        let record = self
            .ledger
            .record(player, computer, outcome, self.config.history_cap);
        events.push(Event::RoundResolved {
            round: record.round,
            player,
            computer,
            outcome,
            player_score: self.ledger.player_score,
            computer_score: self.ledger.computer_score,
        });
        record
    }

    /// Clears tallies, history, and the pending selection.
    pub fn reset(&mut self, events: &mut EventBus) {
        self.ledger.reset();
        self.selected = None;
        events.push(Event::SessionReset);
    }
}
