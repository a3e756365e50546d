use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::Rate;
use crate::errors::{ProjectionError, Result};

/// compounding frequency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompoundingFrequency {
    Annual,
    SemiAnnual,
    Quarterly,
    Monthly,
    Weekly,
    Daily,
}

impl CompoundingFrequency {
    /// get number of compounding periods per year
    pub fn periods_per_year(&self) -> u32 {
        match self {
            CompoundingFrequency::Annual => 1,
            CompoundingFrequency::SemiAnnual => 2,
            CompoundingFrequency::Quarterly => 4,
            CompoundingFrequency::Monthly => 12,
            CompoundingFrequency::Weekly => 52,
            CompoundingFrequency::Daily => 365,
        }
    }
}

/// an annual nominal rate paired with its compounding frequency
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateSpec {
    pub annual_rate: Rate,
    pub frequency: CompoundingFrequency,
}

impl RateSpec {
    pub fn new(annual_rate: Rate, frequency: CompoundingFrequency) -> Result<Self> {
        if annual_rate.is_negative() {
            return Err(ProjectionError::InvalidInput {
                message: format!("annual rate must not be negative, got {}", annual_rate),
            });
        }
        Ok(Self {
            annual_rate,
            frequency,
        })
    }

    /// rate applicable to a single compounding period
    pub fn periodic_rate(&self) -> Rate {
        self.annual_rate.per_period(self.frequency.periods_per_year())
    }

    /// whole period count for a duration, rounded to the nearest period;
    /// use as a loop bound
    pub fn periods(&self, years: Decimal) -> u32 {
        (years * Decimal::from(self.frequency.periods_per_year()))
            .round()
            .to_u32()
            .unwrap_or(0)
    }

    /// un-rounded period count for a duration; use as an exponent when the
    /// horizon does not fall on a period boundary
    pub fn exact_periods(&self, years: Decimal) -> Decimal {
        years * Decimal::from(self.frequency.periods_per_year())
    }

    /// effective annual yield: (1 + r/n)^n - 1
    pub fn effective_annual_yield(&self) -> Rate {
        let n = self.frequency.periods_per_year();
        let factor = compound_factor(self.periodic_rate().as_decimal(), n);
        Rate::from_decimal(factor - Decimal::ONE)
    }
}

/// calculate (1 + rate)^periods using iteration
pub(crate) fn compound_factor(rate: Decimal, periods: u32) -> Decimal {
    let mut factor = Decimal::ONE;
    let base = Decimal::ONE + rate;
    for _ in 0..periods {
        factor *= base;
    }
    factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_periodic_rate() {
        let rates = RateSpec::new(
            Rate::from_decimal(dec!(0.1899)),
            CompoundingFrequency::Monthly,
        )
        .unwrap();
        assert_eq!(rates.periodic_rate().as_decimal(), dec!(0.015825));

        let rates = RateSpec::new(
            Rate::from_decimal(dec!(0.08)),
            CompoundingFrequency::Quarterly,
        )
        .unwrap();
        assert_eq!(rates.periodic_rate().as_decimal(), dec!(0.02));
    }

    #[test]
    fn test_negative_rate_rejected() {
        let result = RateSpec::new(
            Rate::from_decimal(dec!(-0.01)),
            CompoundingFrequency::Monthly,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_period_counts() {
        let rates = RateSpec::new(
            Rate::from_decimal(dec!(0.05)),
            CompoundingFrequency::Monthly,
        )
        .unwrap();

        assert_eq!(rates.periods(dec!(2.5)), 30);
        assert_eq!(rates.periods(dec!(10)), 120);
        // 20 days is 0.0548 years: rounds to one monthly period
        assert_eq!(rates.periods(dec!(0.0548)), 1);

        // fractional horizon kept exact for exponent use
        assert_eq!(rates.exact_periods(dec!(1.25)), dec!(15.00));
    }

    #[test]
    fn test_effective_annual_yield() {
        let rates = RateSpec::new(
            Rate::from_decimal(dec!(0.18)),
            CompoundingFrequency::Monthly,
        )
        .unwrap();
        let apy = rates.effective_annual_yield();
        assert!(apy.as_percentage() > dec!(19.5));
        assert!(apy.as_percentage() < dec!(19.6));

        let daily = RateSpec::new(
            Rate::from_decimal(dec!(0.18)),
            CompoundingFrequency::Daily,
        )
        .unwrap();
        let apy = daily.effective_annual_yield();
        assert!(apy.as_percentage() > dec!(19.7));
        assert!(apy.as_percentage() < dec!(19.8));
    }

    #[test]
    fn test_compound_factor() {
        assert_eq!(compound_factor(dec!(0.10), 2), dec!(1.21));
        assert_eq!(compound_factor(dec!(0.05), 0), Decimal::ONE);
    }
}
