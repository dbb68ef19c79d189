//! Billcraft invoicing core library
//!
//! This library provides the computation core for the Billcraft invoicing and
//! quotation application: tax calculation, country tax classification,
//! currency formatting, document totals, and subscription quota checks.
//!
//! All monetary values use [`rust_decimal::Decimal`]; the library performs no
//! I/O and every operation is a synchronous pure function.

pub mod core;
pub mod modules;

// Re-export commonly used types
pub use crate::core::{format_tax_amount, AppError, Currency, Locale, Result};
pub use modules::invoices;
pub use modules::subscriptions;
pub use modules::taxes;
