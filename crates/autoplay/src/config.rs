#[derive(Debug, Clone, Copy)]
pub struct AutoplayConfig {
    pub seed: u64,
    pub rounds: u32,
    /// Delay between rounds. Zero runs the simulation flat out; the
    /// interactive UI uses the session default of 1500ms instead.
    pub period_ms: u64,
}

impl Default for AutoplayConfig {
    fn default() -> Self {
        Self {
            seed: 0xC0FFEE,
            rounds: 20,
            period_ms: 0,
        }
    }
}
