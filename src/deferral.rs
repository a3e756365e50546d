use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{ProjectionError, Result};

/// a span during which no payments are due but simple interest accrues
///
/// Deferred-payment instruments chain stages: a study or build period
/// followed by a grace period, each applied to the previous stage's
/// adjusted principal before the payoff schedule starts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeferralStage {
    annual_rate: Rate,
    years: Decimal,
}

impl DeferralStage {
    pub fn new(annual_rate: Rate, years: Decimal) -> Result<Self> {
        if annual_rate.is_negative() {
            return Err(ProjectionError::InvalidInput {
                message: format!("annual rate must not be negative, got {}", annual_rate),
            });
        }
        if years.is_sign_negative() && !years.is_zero() {
            return Err(ProjectionError::InvalidInput {
                message: format!("deferral span must not be negative, got {} years", years),
            });
        }
        Ok(Self { annual_rate, years })
    }

    pub fn annual_rate(&self) -> Rate {
        self.annual_rate
    }

    pub fn years(&self) -> Decimal {
        self.years
    }

    /// apply simple interest over the whole span: principal * (1 + r * t)
    pub fn accrue(&self, principal: Money) -> DeferralOutcome {
        let interest_accrued =
            principal * (self.annual_rate.as_decimal() * self.years);
        DeferralOutcome {
            principal_before: principal,
            interest_accrued,
            adjusted_principal: principal + interest_accrued,
        }
    }
}

/// result of one deferral stage
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeferralOutcome {
    pub principal_before: Money,
    pub interest_accrued: Money,
    pub adjusted_principal: Money,
}

/// run a principal through a sequence of deferral stages, each stage
/// accruing on the previous stage's adjusted principal
pub fn accrue_deferral(principal: Money, stages: &[DeferralStage]) -> Money {
    stages
        .iter()
        .fold(principal, |balance, stage| stage.accrue(balance).adjusted_principal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_single_stage_accrual() {
        let stage = DeferralStage::new(Rate::from_decimal(dec!(0.095)), dec!(4)).unwrap();
        let outcome = stage.accrue(Money::from_major(50_000));

        assert_eq!(outcome.principal_before, Money::from_major(50_000));
        assert_eq!(outcome.interest_accrued, Money::from_major(19_000));
        assert_eq!(outcome.adjusted_principal, Money::from_major(69_000));
    }

    #[test]
    fn test_course_then_grace_period() {
        // four years of study deferral followed by a half-year grace period
        let course = DeferralStage::new(Rate::from_decimal(dec!(0.095)), dec!(4)).unwrap();
        let grace = DeferralStage::new(Rate::from_decimal(dec!(0.095)), dec!(0.5)).unwrap();

        let accrued = accrue_deferral(Money::from_major(50_000), &[course, grace]);

        // 50000 * (1 + 0.095*4) * (1 + 0.095*0.5)
        assert_eq!(accrued, Money::from_str_exact("72277.5").unwrap());
    }

    #[test]
    fn test_zero_span_is_noop() {
        let stage = DeferralStage::new(Rate::from_decimal(dec!(0.095)), Decimal::ZERO).unwrap();
        let outcome = stage.accrue(Money::from_major(50_000));

        assert_eq!(outcome.interest_accrued, Money::ZERO);
        assert_eq!(outcome.adjusted_principal, Money::from_major(50_000));
    }

    #[test]
    fn test_empty_stage_list() {
        let accrued = accrue_deferral(Money::from_major(1000), &[]);
        assert_eq!(accrued, Money::from_major(1000));
    }

    #[test]
    fn test_validation() {
        assert!(DeferralStage::new(Rate::from_decimal(dec!(-0.01)), dec!(1)).is_err());
        assert!(DeferralStage::new(Rate::from_decimal(dec!(0.05)), dec!(-1)).is_err());
        assert!(DeferralStage::new(Rate::ZERO, Decimal::ZERO).is_ok());
    }
}
