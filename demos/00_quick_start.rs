/// quick start - minimal example to get started
use loan_projection_rs::{amortize, Money, PaymentPlan, PaymentStrategy, Rate};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // pay off a 5,000 card balance at 18.99% APR with 150/month
    let plan = PaymentPlan::new(
        Money::from_major(5_000),
        Rate::from_decimal(dec!(0.1899)).per_period(12),
        PaymentStrategy::Fixed {
            payment: Money::from_major(150),
        },
    )?;

    let result = amortize(&plan)?;

    println!("months to payoff: {}", result.periods_to_payoff);
    println!("total paid:       {}", result.total_paid.round_dp(2));
    println!("total interest:   {}", result.total_interest.round_dp(2));

    Ok(())
}
