use rust_decimal::Decimal;

use crate::decimal::{Money, Rate};
use crate::rate::compound_factor;

/// fixed payment that retires a principal over an exact period count
///
/// Standard annuity payment formula, P * r * (1+r)^n / ((1+r)^n - 1),
/// with a plain division fallback at zero rate.
pub fn fixed_payment_for_term(principal: Money, periodic_rate: Rate, periods: u32) -> Money {
    if periods == 0 {
        return principal;
    }

    let r = periodic_rate.as_decimal();
    if r.is_zero() {
        return principal / Decimal::from(periods);
    }

    let factor = compound_factor(r, periods);
    let numerator = principal.as_decimal() * r * factor;
    let denominator = factor - Decimal::ONE;

    Money::from_decimal(numerator / denominator)
}
