pub mod engine;
pub mod payment;

use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::decimal::{Money, Rate};
use crate::errors::{ProjectionError, Result};

pub use engine::PayoffEngine;
pub use payment::fixed_payment_for_term;

/// how the per-period payment is determined
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PaymentStrategy {
    /// the same payment every period
    Fixed { payment: Money },
    /// payment derived once from a target period count via the closed-form
    /// annuity payment formula
    FixedTerm { periods: u32 },
    /// revolving-credit minimum payment: a share of the current balance,
    /// never less than a fixed floor
    PercentOfBalance { rate_of_balance: Rate, floor: Money },
}

/// a principal, the rate per period, and a payment strategy
///
/// Validation happens here, once; the payoff loop assumes a well-formed plan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaymentPlan {
    principal: Money,
    periodic_rate: Rate,
    strategy: PaymentStrategy,
}

impl PaymentPlan {
    pub fn new(principal: Money, periodic_rate: Rate, strategy: PaymentStrategy) -> Result<Self> {
        if !principal.is_positive() {
            return Err(ProjectionError::InvalidInput {
                message: format!("principal must be positive, got {}", principal),
            });
        }
        if periodic_rate.is_negative() {
            return Err(ProjectionError::InvalidInput {
                message: format!("periodic rate must not be negative, got {}", periodic_rate),
            });
        }
        match strategy {
            PaymentStrategy::Fixed { payment } => {
                if !payment.is_positive() {
                    return Err(ProjectionError::InvalidInput {
                        message: format!("payment must be positive, got {}", payment),
                    });
                }
            }
            PaymentStrategy::FixedTerm { periods } => {
                if periods == 0 {
                    return Err(ProjectionError::InvalidInput {
                        message: "target period count must be positive".to_string(),
                    });
                }
            }
            PaymentStrategy::PercentOfBalance {
                rate_of_balance,
                floor,
            } => {
                if rate_of_balance.is_negative() || rate_of_balance.is_zero() {
                    return Err(ProjectionError::InvalidInput {
                        message: format!(
                            "balance percentage must be positive, got {}",
                            rate_of_balance
                        ),
                    });
                }
                if floor.is_negative() {
                    return Err(ProjectionError::InvalidInput {
                        message: format!("payment floor must not be negative, got {}", floor),
                    });
                }
            }
        }
        Ok(Self {
            principal,
            periodic_rate,
            strategy,
        })
    }

    pub fn principal(&self) -> Money {
        self.principal
    }

    pub fn periodic_rate(&self) -> Rate {
        self.periodic_rate
    }

    pub fn strategy(&self) -> PaymentStrategy {
        self.strategy
    }
}

/// one period of a payoff schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub period: u32,
    pub payment: Money,
    pub interest_portion: Money,
    pub principal_portion: Money,
    pub remaining_balance: Money,
}

/// a completed payoff run
///
/// `entries` is capped for display; the summary fields always cover the
/// full run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationResult {
    pub entries: Vec<ScheduleEntry>,
    pub periods_to_payoff: u32,
    pub total_paid: Money,
    pub total_interest: Money,
}

impl AmortizationResult {
    /// principal retired over the run
    pub fn total_principal(&self) -> Money {
        self.total_paid - self.total_interest
    }
}

/// run a payoff schedule with the default engine configuration
pub fn amortize(plan: &PaymentPlan) -> Result<AmortizationResult> {
    PayoffEngine::new(EngineConfig::default()).amortize(plan)
}
