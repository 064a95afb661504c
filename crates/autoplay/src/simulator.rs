use crate::{AutoplayConfig, RoundTrace, SessionReport};
use roshambo_core::{EventBus, GameConfig, Session};
use std::thread;
use std::time::Duration;

/// Drives a session without any presentation attached: a fresh random
/// player move against a fresh random computer move each round, the same
/// path the interactive auto-play mode takes.
#[derive(Debug)]
pub struct Simulator {
    pub session: Session,
    pub events: EventBus,
}

impl Simulator {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            events: EventBus::default(),
        }
    }

    pub fn from_config(config: &AutoplayConfig) -> Self {
        Self::new(Session::new(GameConfig::default(), config.seed))
    }

    pub fn step(&mut self) -> RoundTrace {
        let player = self.session.rng.draw_move();
        let record = self.session.play_move(player, &mut self.events);
        RoundTrace::from_record(
            &record,
            self.session.ledger.player_score,
            self.session.ledger.computer_score,
        )
    }

    pub fn run(&mut self, config: &AutoplayConfig) -> SessionReport {
        let mut trace = Vec::with_capacity(config.rounds as usize);
        for step in 0..config.rounds {
            if config.period_ms > 0 && step > 0 {
                thread::sleep(Duration::from_millis(config.period_ms));
            }
            trace.push(self.step());
        }
        let ledger = &self.session.ledger;
        SessionReport {
            seed: config.seed,
            rounds: ledger.round,
            wins: ledger.wins,
            losses: ledger.losses,
            draws: ledger.draws,
            player_score: ledger.player_score,
            computer_score: ledger.computer_score,
            trace,
        }
    }
}

pub fn run_simulation(config: &AutoplayConfig) -> SessionReport {
    Simulator::from_config(config).run(config)
}
