use serde::{Deserialize, Serialize};

use crate::decimal::Money;

/// engine configuration shared by the payoff and growth calculators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// hard iteration cap: a schedule that has not paid off after this many
    /// periods terminates with an error (600 monthly periods is 50 years)
    pub max_periods: u32,
    /// balance at or below this amount counts as paid off; the residue is
    /// folded into the final payment
    pub payoff_epsilon: Money,
    /// how many schedule entries / trace points to record for display;
    /// totals always cover the full run
    pub display_periods: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_periods: 600,
            payoff_epsilon: Money::from_minor(1, 2),
            display_periods: 60,
        }
    }
}

impl EngineConfig {
    pub fn with_max_periods(mut self, max_periods: u32) -> Self {
        self.max_periods = max_periods;
        self
    }

    pub fn with_display_periods(mut self, display_periods: usize) -> Self {
        self.display_periods = display_periods;
        self
    }
}
