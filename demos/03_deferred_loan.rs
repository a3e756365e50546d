/// education loan: simple interest accrues through the course and grace
/// periods, then the adjusted principal amortizes
use loan_projection_rs::{
    accrue_deferral, amortize, DeferralStage, Money, PaymentPlan, PaymentStrategy, Rate,
};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let borrowed = Money::from_major(50_000);
    let annual_rate = Rate::from_decimal(dec!(0.095));

    // interest accrues without payments for a 4-year course and a
    // 6-month grace period
    let course = DeferralStage::new(annual_rate, dec!(4))?;
    let grace = DeferralStage::new(annual_rate, dec!(0.5))?;
    let adjusted = accrue_deferral(borrowed, &[course, grace]);

    println!("borrowed:           {}", borrowed);
    println!("owed at repayment:  {}", adjusted.round_dp(2));

    // repay the adjusted principal over 10 years
    let plan = PaymentPlan::new(
        adjusted,
        annual_rate.per_period(12),
        PaymentStrategy::FixedTerm { periods: 120 },
    )?;
    let result = amortize(&plan)?;

    println!("monthly payment:    {}", result.entries[0].payment.round_dp(2));
    println!("total paid:         {}", result.total_paid.round_dp(2));
    println!("total interest:     {}", result.total_interest.round_dp(2));

    Ok(())
}
