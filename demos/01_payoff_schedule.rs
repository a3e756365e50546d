/// derive a fixed payment from a target term and print the schedule
use loan_projection_rs::{amortize, Money, PaymentPlan, PaymentStrategy, Rate};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 20,000 personal loan at 9% APR, repaid over 24 months
    let plan = PaymentPlan::new(
        Money::from_major(20_000),
        Rate::from_decimal(dec!(0.09)).per_period(12),
        PaymentStrategy::FixedTerm { periods: 24 },
    )?;

    let result = amortize(&plan)?;

    println!("period | payment   | interest | principal | balance");
    for entry in &result.entries {
        println!(
            "{:>6} | {:>9} | {:>8} | {:>9} | {}",
            entry.period,
            entry.payment.round_dp(2),
            entry.interest_portion.round_dp(2),
            entry.principal_portion.round_dp(2),
            entry.remaining_balance.round_dp(2),
        );
    }

    println!();
    println!("total interest over the term: {}", result.total_interest.round_dp(2));

    Ok(())
}
