use thiserror::Error;

use crate::decimal::Money;
use crate::schedule::AmortizationResult;

#[derive(Error, Debug)]
pub enum ProjectionError {
    /// the proposed payment does not exceed one period's accrued interest,
    /// so the schedule cannot make progress
    #[error("payment {payment} does not cover periodic interest {interest_due}")]
    InsufficientPayment {
        payment: Money,
        interest_due: Money,
        periods_completed: u32,
    },

    /// the iteration cap was reached before payoff; the partial schedule and
    /// running totals are preserved for display
    #[error("payoff not reached within {max_periods} periods: remaining balance {remaining_balance}")]
    ExceededMaximumTerm {
        max_periods: u32,
        remaining_balance: Money,
        partial: Box<AmortizationResult>,
    },

    #[error("invalid input: {message}")]
    InvalidInput {
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, ProjectionError>;
