pub mod plan;

pub use plan::{PlanBuilder, PlanConfig, Plans, PlansBuilder};
