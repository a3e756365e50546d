pub mod config;
pub mod decimal;
pub mod deferral;
pub mod errors;
pub mod growth;
pub mod rate;
pub mod schedule;

// re-export key types
pub use config::EngineConfig;
pub use decimal::{Money, Rate};
pub use deferral::{accrue_deferral, DeferralOutcome, DeferralStage};
pub use errors::{ProjectionError, Result};
pub use growth::{project, GrowthPlan, GrowthPoint, GrowthProjection, GrowthProjector};
pub use rate::{CompoundingFrequency, RateSpec};
pub use schedule::{
    amortize, fixed_payment_for_term, AmortizationResult, PaymentPlan, PaymentStrategy,
    PayoffEngine, ScheduleEntry,
};

// re-export external dependencies that users will need
pub use rust_decimal::Decimal;
