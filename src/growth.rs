use rust_decimal::{Decimal, MathematicalOps};
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::decimal::{Money, Rate};
use crate::errors::{ProjectionError, Result};
use crate::rate::compound_factor;

/// an initial lump sum, a periodic contribution, and a horizon in periods
///
/// Validation happens here, once; projection itself cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthPlan {
    initial_principal: Money,
    contribution: Money,
    periodic_rate: Rate,
    periods: u32,
}

impl GrowthPlan {
    pub fn new(
        initial_principal: Money,
        contribution: Money,
        periodic_rate: Rate,
        periods: u32,
    ) -> Result<Self> {
        if initial_principal.is_negative() {
            return Err(ProjectionError::InvalidInput {
                message: format!(
                    "initial principal must not be negative, got {}",
                    initial_principal
                ),
            });
        }
        if contribution.is_negative() {
            return Err(ProjectionError::InvalidInput {
                message: format!("contribution must not be negative, got {}", contribution),
            });
        }
        if periodic_rate.is_negative() {
            return Err(ProjectionError::InvalidInput {
                message: format!("periodic rate must not be negative, got {}", periodic_rate),
            });
        }
        if periods == 0 {
            return Err(ProjectionError::InvalidInput {
                message: "period count must be positive".to_string(),
            });
        }
        Ok(Self {
            initial_principal,
            contribution,
            periodic_rate,
            periods,
        })
    }

    pub fn initial_principal(&self) -> Money {
        self.initial_principal
    }

    pub fn contribution(&self) -> Money {
        self.contribution
    }

    pub fn periodic_rate(&self) -> Rate {
        self.periodic_rate
    }

    pub fn periods(&self) -> u32 {
        self.periods
    }
}

/// one period of a growth trace
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthPoint {
    pub period: u32,
    pub contribution: Money,
    pub growth: Money,
    pub balance: Money,
}

/// future value of a lump sum plus an ordinary annuity of contributions
///
/// `trace` is capped for display; the summary fields always cover the full
/// horizon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthProjection {
    pub final_value: Money,
    pub total_contributed: Money,
    pub total_growth: Money,
    pub trace: Vec<GrowthPoint>,
}

impl GrowthProjection {
    /// compound annual growth rate over the horizon,
    /// (final / contributed)^(1/years) - 1
    ///
    /// Undefined when nothing was contributed or the horizon is not
    /// positive; reported as `None` rather than a clamped guess.
    pub fn annualized_return(&self, years: Decimal) -> Option<Rate> {
        if !self.total_contributed.is_positive() || years <= Decimal::ZERO {
            return None;
        }
        let ratio = self.final_value.as_decimal() / self.total_contributed.as_decimal();
        let annualized = ratio.powd(Decimal::ONE / years) - Decimal::ONE;
        Some(Rate::from_decimal(annualized))
    }
}

/// projects lump-sum and contribution-stream growth over a fixed horizon
pub struct GrowthProjector {
    config: EngineConfig,
}

impl GrowthProjector {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn project(&self, plan: &GrowthPlan) -> GrowthProjection {
        let r = plan.periodic_rate().as_decimal();
        let n = plan.periods();
        let factor = compound_factor(r, n);

        let lump_sum = plan.initial_principal() * factor;
        // ordinary annuity: contributions land at period end
        let contribution_stream = if r.is_zero() {
            plan.contribution() * Decimal::from(n)
        } else {
            plan.contribution() * ((factor - Decimal::ONE) / r)
        };

        let final_value = lump_sum + contribution_stream;
        let total_contributed =
            plan.initial_principal() + plan.contribution() * Decimal::from(n);
        let total_growth = final_value - total_contributed;

        let trace = self.trace(plan);

        GrowthProjection {
            final_value,
            total_contributed,
            total_growth,
            trace,
        }
    }

    fn trace(&self, plan: &GrowthPlan) -> Vec<GrowthPoint> {
        let r = plan.periodic_rate().as_decimal();
        let shown = (plan.periods() as usize).min(self.config.display_periods);

        let mut trace = Vec::with_capacity(shown);
        let mut balance = plan.initial_principal();
        for period in 1..=shown as u32 {
            let growth = balance * r;
            balance += growth + plan.contribution();
            trace.push(GrowthPoint {
                period,
                contribution: plan.contribution(),
                growth,
                balance,
            });
        }
        trace
    }
}

/// project growth with the default engine configuration
pub fn project(plan: &GrowthPlan) -> GrowthProjection {
    GrowthProjector::new(EngineConfig::default()).project(plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn monthly_plan() -> GrowthPlan {
        // 10,000 lump sum plus 500/month at 8% APR over 10 years
        GrowthPlan::new(
            Money::from_major(10_000),
            Money::from_major(500),
            Rate::from_decimal(dec!(0.08)).per_period(12),
            120,
        )
        .unwrap()
    }

    #[test]
    fn test_lump_sum_plus_annuity() {
        let projection = project(&monthly_plan());

        assert_eq!(projection.total_contributed, Money::from_major(70_000));
        assert!(projection.final_value > Money::from_major(113_000));
        assert!(projection.final_value < Money::from_major(114_400));
    }

    #[test]
    fn test_growth_conservation() {
        let projection = project(&monthly_plan());
        assert_eq!(
            projection.final_value,
            projection.total_contributed + projection.total_growth
        );
    }

    #[test]
    fn test_zero_rate_projection() {
        let plan = GrowthPlan::new(
            Money::from_major(1000),
            Money::from_major(100),
            Rate::ZERO,
            12,
        )
        .unwrap();
        let projection = project(&plan);

        assert_eq!(projection.final_value, Money::from_major(2200));
        assert_eq!(projection.total_growth, Money::ZERO);
    }

    #[test]
    fn test_trace_matches_closed_form() {
        let plan = GrowthPlan::new(
            Money::from_major(1000),
            Money::from_major(100),
            Rate::from_decimal(dec!(0.01)),
            12,
        )
        .unwrap();
        let projection = project(&plan);

        assert_eq!(projection.trace.len(), 12);

        // first period: one period of growth on the lump sum, then the contribution
        let first = &projection.trace[0];
        assert_eq!(first.growth, Money::from_major(10));
        assert_eq!(first.balance, Money::from_major(1110));

        // walking the trace lands on the closed-form final value
        let last = projection.trace.last().unwrap();
        let drift = (last.balance - projection.final_value).abs();
        assert!(drift < Money::from_decimal(dec!(0.0001)));
    }

    #[test]
    fn test_trace_is_monotonic() {
        let projection = project(&monthly_plan());
        for window in projection.trace.windows(2) {
            assert!(window[1].balance >= window[0].balance);
        }
    }

    #[test]
    fn test_trace_cap_does_not_affect_totals() {
        let full = project(&monthly_plan());
        let capped = GrowthProjector::new(EngineConfig::default().with_display_periods(6))
            .project(&monthly_plan());

        assert_eq!(capped.trace.len(), 6);
        assert_eq!(capped.final_value, full.final_value);
        assert_eq!(capped.total_growth, full.total_growth);
    }

    #[test]
    fn test_annualized_return() {
        // lump sum only: annualized return is the effective annual yield
        let plan = GrowthPlan::new(
            Money::from_major(10_000),
            Money::ZERO,
            Rate::from_decimal(dec!(0.08)).per_period(12),
            120,
        )
        .unwrap();
        let projection = project(&plan);

        let annualized = projection.annualized_return(dec!(10)).unwrap();
        assert!(annualized.as_decimal() > dec!(0.0829));
        assert!(annualized.as_decimal() < dec!(0.0831));
    }

    #[test]
    fn test_annualized_return_undefined() {
        let plan = GrowthPlan::new(Money::ZERO, Money::ZERO, Rate::ZERO, 12).unwrap();
        let projection = project(&plan);
        assert!(projection.annualized_return(dec!(1)).is_none());

        let projection = project(&monthly_plan());
        assert!(projection.annualized_return(Decimal::ZERO).is_none());
    }

    #[test]
    fn test_plan_validation() {
        assert!(GrowthPlan::new(
            -Money::from_major(1),
            Money::ZERO,
            Rate::ZERO,
            12
        )
        .is_err());
        assert!(GrowthPlan::new(
            Money::ZERO,
            -Money::from_major(1),
            Rate::ZERO,
            12
        )
        .is_err());
        assert!(GrowthPlan::new(
            Money::ZERO,
            Money::ZERO,
            Rate::from_decimal(dec!(-0.01)),
            12
        )
        .is_err());
        assert!(GrowthPlan::new(Money::ZERO, Money::ZERO, Rate::ZERO, 0).is_err());
    }

    #[test]
    fn test_idempotent_projection() {
        let a = project(&monthly_plan());
        let b = project(&monthly_plan());
        assert_eq!(a, b);
    }
}
