pub mod models;
pub mod services;

pub use models::{PlanBuilder, PlanConfig, Plans, PlansBuilder};
pub use services::quota;
pub use services::quota::QuotaUsage;
