use crate::{Move, Outcome};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Event {
    MoveSelected {
        player: Move,
    },
    RoundResolved {
        round: u32,
        player: Move,
        computer: Move,
        outcome: Outcome,
        player_score: u32,
        computer_score: u32,
    },
    SessionReset,
    AutoPlayStarted { period_ms: u64 },
    AutoPlayStopped,
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }
}
