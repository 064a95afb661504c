use crate::{Move, Outcome};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// One resolved round. Immutable once created; discarded only via history
/// eviction or a ledger reset.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundRecord {
    pub round: u32,
    pub player: Move,
    pub computer: Move,
    pub outcome: Outcome,
}

/// Cumulative tallies plus a bounded newest-first log of recent rounds.
///
/// Invariants: wins + losses + draws == round, player_score == wins,
/// computer_score == losses, history.len() never exceeds the cap.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionLedger {
    pub player_score: u32,
    pub computer_score: u32,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub round: u32,
    history: VecDeque<RoundRecord>,
}

impl SessionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(
        &mut self,
        player: Move,
        computer: Move,
        outcome: Outcome,
        cap: usize,
    ) -> RoundRecord {
        self.round += 1;
        match outcome {
            Outcome::Win => {
                self.wins += 1;
                self.player_score += 1;
            }
            Outcome::Lose => {
                self.losses += 1;
                self.computer_score += 1;
            }
            Outcome::Draw => self.draws += 1,
        }
        let record = RoundRecord {
            round: self.round,
            player,
            computer,
            outcome,
        };
        self.history.push_front(record);
        while self.history.len() > cap {
            let _ = self.history.pop_back();
        }
        record
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Most recent record, if any round has been played.
    pub fn latest(&self) -> Option<&RoundRecord> {
        self.history.front()
    }

    /// Newest-first, at most the configured cap.
    pub fn history(&self) -> impl Iterator<Item = &RoundRecord> {
        self.history.iter()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }
}
