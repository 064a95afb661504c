use crate::AutoplayError;
use roshambo_core::{Move, Outcome, RoundRecord};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundTrace {
    pub round: u32,
    pub player: Move,
    pub computer: Move,
    pub outcome: Outcome,
    pub player_score_after: u32,
    pub computer_score_after: u32,
}

impl RoundTrace {
    pub fn from_record(record: &RoundRecord, player_score: u32, computer_score: u32) -> Self {
        Self {
            round: record.round,
            player: record.player,
            computer: record.computer,
            outcome: record.outcome,
            player_score_after: player_score,
            computer_score_after: computer_score,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionReport {
    pub seed: u64,
    pub rounds: u32,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub player_score: u32,
    pub computer_score: u32,
    pub trace: Vec<RoundTrace>,
}

impl SessionReport {
    pub fn summary_line(&self) -> String {
        format!(
            "rounds={} score={}-{} wins={} losses={} draws={}",
            self.rounds, self.player_score, self.computer_score, self.wins, self.losses, self.draws
        )
    }
}

pub fn write_report(report: &SessionReport, path: &Path) -> Result<(), AutoplayError> {
    let body = serde_json::to_string_pretty(report)?;
    fs::write(path, body)?;
    Ok(())
}
