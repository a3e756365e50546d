/// results serialize for a presentation layer to render
use loan_projection_rs::{
    EngineConfig, Money, PaymentPlan, PaymentStrategy, PayoffEngine, Rate,
};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let plan = PaymentPlan::new(
        Money::from_major(5_000),
        Rate::from_decimal(dec!(0.1899)).per_period(12),
        PaymentStrategy::Fixed {
            payment: Money::from_major(250),
        },
    )?;

    // keep the serialized schedule short
    let engine = PayoffEngine::new(EngineConfig::default().with_display_periods(6));
    let result = engine.amortize(&plan)?;

    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
