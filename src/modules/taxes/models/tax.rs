use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};

/// A stored tax rate, owned by the persistence layer. This module only reads
/// it; the rate is a percentage (20 means 20%).
///
/// Upstream stores serialize the rate either as a JSON number or as a decimal
/// string; `rust_decimal`'s serde support accepts both.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxRate {
    pub id: Option<i64>,
    pub country_code: String,
    pub rate: Decimal,
    pub name: String,
    #[serde(default)]
    pub is_default: bool,
}

impl TaxRate {
    pub fn new(country_code: impl Into<String>, rate: Decimal, name: impl Into<String>) -> Self {
        Self {
            id: None,
            country_code: country_code.into(),
            rate,
            name: name.into(),
            is_default: false,
        }
    }

    /// Validate a stored rate: 0–100 percent with at most 4 decimal places.
    ///
    /// The calculation path never calls this; it applies whatever rate it is
    /// given. Rate management uses it before persisting.
    pub fn validate(&self) -> Result<()> {
        if self.rate < Decimal::ZERO {
            return Err(AppError::validation("Tax rate cannot be negative"));
        }

        if self.rate > Decimal::ONE_HUNDRED {
            return Err(AppError::validation("Tax rate cannot exceed 100 percent"));
        }

        if self.rate.scale() > 4 {
            return Err(AppError::validation(
                "Tax rate cannot have more than 4 decimal places",
            ));
        }

        Ok(())
    }
}

/// Per-calculation tax inputs. Immutable value, never persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaxContext {
    /// ISO-3166 alpha-2 country code
    pub country_code: String,

    /// Pre-resolved stored rate, if the caller looked one up
    #[serde(default)]
    pub tax_rate: Option<TaxRate>,

    /// Exempt transactions always resolve to a zero rate
    #[serde(default)]
    pub is_exempt: bool,

    /// Caller-supplied override percentage; zero is a valid override
    #[serde(default)]
    pub custom_rate: Option<Decimal>,
}

impl TaxContext {
    pub fn for_country(country_code: impl Into<String>) -> Self {
        Self {
            country_code: country_code.into(),
            ..Self::default()
        }
    }

    pub fn with_tax_rate(mut self, tax_rate: TaxRate) -> Self {
        self.tax_rate = Some(tax_rate);
        self
    }

    pub fn with_custom_rate(mut self, rate: Decimal) -> Self {
        self.custom_rate = Some(rate);
        self
    }

    pub fn exempt(mut self) -> Self {
        self.is_exempt = true;
        self
    }
}

/// Result of a tax calculation. Recomputed on every call; no identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxCalculation {
    /// Subtotal minus discount, floored at zero
    pub taxable_amount: Decimal,
    pub tax_amount: Decimal,
    pub total_amount: Decimal,
    /// The percentage actually applied, after precedence resolution
    pub effective_rate: Decimal,
}
