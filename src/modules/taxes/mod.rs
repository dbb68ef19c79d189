pub mod models;
pub mod services;

pub use models::{TaxCalculation, TaxContext, TaxRate};
pub use services::country_classifier;
pub use services::TaxCalculator;
