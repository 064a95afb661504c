use serde::{Deserialize, Serialize};

/// The only recognized tunables: how many recent rounds the ledger keeps
/// and how often auto-play fires.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameConfig {
    pub history_cap: usize,
    pub auto_play_period_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            history_cap: 10,
            auto_play_period_ms: 1500,
        }
    }
}
