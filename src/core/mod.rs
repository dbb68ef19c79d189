pub mod currency;
pub mod error;
pub mod locale;

pub use currency::{format_tax_amount, Currency};
pub use error::{AppError, Result};
pub use locale::Locale;
