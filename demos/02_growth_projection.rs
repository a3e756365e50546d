/// project retirement savings growth from a lump sum and monthly contributions
use loan_projection_rs::{project, GrowthPlan, Money, Rate};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 10,000 starting balance, 500/month, 8% APR, 10 years
    let plan = GrowthPlan::new(
        Money::from_major(10_000),
        Money::from_major(500),
        Rate::from_decimal(dec!(0.08)).per_period(12),
        120,
    )?;

    let projection = project(&plan);

    println!("final value:       {}", projection.final_value.round_dp(2));
    println!("total contributed: {}", projection.total_contributed.round_dp(2));
    println!("total growth:      {}", projection.total_growth.round_dp(2));

    if let Some(annualized) = projection.annualized_return(dec!(10)) {
        println!("annualized return: {}%", annualized.as_percentage().round_dp(2));
    }

    println!();
    println!("first year, month by month:");
    for point in projection.trace.iter().take(12) {
        println!(
            "  month {:>2}: growth {:>7}, balance {}",
            point.period,
            point.growth.round_dp(2),
            point.balance.round_dp(2),
        );
    }

    Ok(())
}
