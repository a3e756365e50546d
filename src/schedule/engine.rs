use rust_decimal::Decimal;

use crate::config::EngineConfig;
use crate::decimal::Money;
use crate::errors::{ProjectionError, Result};
use crate::schedule::payment::fixed_payment_for_term;
use crate::schedule::{AmortizationResult, PaymentPlan, PaymentStrategy, ScheduleEntry};

/// per-period payment rule, resolved from the strategy before the loop runs
#[derive(Clone, Copy)]
enum ScheduledPayment {
    Level(Money),
    ShareOfBalance { rate: Decimal, floor: Money },
}

/// walks a payoff schedule period by period until the balance clears, the
/// payment stalls, or the iteration cap is reached
pub struct PayoffEngine {
    config: EngineConfig,
}

impl PayoffEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn amortize(&self, plan: &PaymentPlan) -> Result<AmortizationResult> {
        let rate = plan.periodic_rate().as_decimal();

        let scheduled = match plan.strategy() {
            PaymentStrategy::Fixed { payment } => ScheduledPayment::Level(payment),
            PaymentStrategy::FixedTerm { periods } => ScheduledPayment::Level(
                fixed_payment_for_term(plan.principal(), plan.periodic_rate(), periods),
            ),
            PaymentStrategy::PercentOfBalance {
                rate_of_balance,
                floor,
            } => ScheduledPayment::ShareOfBalance {
                rate: rate_of_balance.as_decimal(),
                floor,
            },
        };

        let mut balance = plan.principal();
        let mut entries = Vec::new();
        let mut total_paid = Money::ZERO;
        let mut total_interest = Money::ZERO;
        let mut period = 0u32;

        while balance.is_positive() {
            if period == self.config.max_periods {
                return Err(ProjectionError::ExceededMaximumTerm {
                    max_periods: self.config.max_periods,
                    remaining_balance: balance,
                    partial: Box::new(AmortizationResult {
                        entries,
                        periods_to_payoff: period,
                        total_paid,
                        total_interest,
                    }),
                });
            }
            period += 1;

            let interest = Money::from_decimal(balance.as_decimal() * rate);
            let payment_due = match scheduled {
                ScheduledPayment::Level(payment) => payment,
                ScheduledPayment::ShareOfBalance { rate, floor } => (balance * rate).max(floor),
            };

            // the stall check comes before the balance moves
            let mut principal_portion = payment_due - interest;
            if !principal_portion.is_positive() {
                return Err(ProjectionError::InsufficientPayment {
                    payment: payment_due,
                    interest_due: interest,
                    periods_completed: period - 1,
                });
            }

            // the final payment shrinks so the balance never goes negative
            principal_portion = principal_portion.min(balance);
            balance -= principal_portion;

            // fold sub-epsilon residue into the final payment
            if !balance.is_zero() && balance <= self.config.payoff_epsilon {
                principal_portion += balance;
                balance = Money::ZERO;
            }

            let payment = interest + principal_portion;
            total_paid += payment;
            total_interest += interest;

            if entries.len() < self.config.display_periods {
                entries.push(ScheduleEntry {
                    period,
                    payment,
                    interest_portion: interest,
                    principal_portion,
                    remaining_balance: balance,
                });
            }
        }

        Ok(AmortizationResult {
            entries,
            periods_to_payoff: period,
            total_paid,
            total_interest,
        })
    }
}
