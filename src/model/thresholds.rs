/// Tunable knobs of the scoring run. The benchmark ranges themselves live in
/// the schema; this only covers windowing and gating.
#[derive(Debug, Clone)]
pub struct ScoringProfile {
    pub window_days: usize,
    pub backfill_lookback_days: u64,
    pub min_pillars: usize,
}

impl ScoringProfile {
    pub fn default_v1() -> Self {
        Self {
            window_days: 30,
            backfill_lookback_days: 7,
            min_pillars: 2,
        }
    }

    pub fn with_window(mut self, window_days: usize, backfill_lookback_days: u64) -> Self {
        self.window_days = window_days.max(1);
        self.backfill_lookback_days = backfill_lookback_days;
        self
    }
}

impl Default for ScoringProfile {
    fn default() -> Self {
        Self::default_v1()
    }
}
