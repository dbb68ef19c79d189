// A line item represents a single product or service on an invoice or
// quotation. Line items share the document's currency; the subtotal is
// quantity × unit_price, unrounded — rounding happens once at the document
// level.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{AppError, Result};

/// A single line on an invoice or quotation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    /// Description of the product or service
    pub description: String,

    /// Quantity of items
    pub quantity: i32,

    /// Price per unit
    pub unit_price: Decimal,
}

impl LineItem {
    /// Create a new line item with validation
    ///
    /// # Arguments
    /// * `description` - Product/service description (max 255 chars)
    /// * `quantity` - Must be positive
    /// * `unit_price` - Must be non-negative
    pub fn new(description: impl Into<String>, quantity: i32, unit_price: Decimal) -> Result<Self> {
        let description = description.into();

        Self::validate_description(&description)?;
        Self::validate_quantity(quantity)?;
        Self::validate_unit_price(unit_price)?;

        Ok(Self {
            description,
            quantity,
            unit_price,
        })
    }

    /// Line subtotal: quantity × unit_price, unrounded
    pub fn subtotal(&self) -> Decimal {
        Decimal::from(self.quantity) * self.unit_price
    }

    fn validate_description(description: &str) -> Result<()> {
        if description.trim().is_empty() {
            return Err(AppError::validation("Line item description cannot be empty"));
        }

        if description.len() > 255 {
            return Err(AppError::validation(
                "Line item description cannot exceed 255 characters",
            ));
        }

        Ok(())
    }

    fn validate_quantity(quantity: i32) -> Result<()> {
        if quantity <= 0 {
            return Err(AppError::validation(format!(
                "Quantity must be positive, got: {}",
                quantity
            )));
        }

        Ok(())
    }

    fn validate_unit_price(unit_price: Decimal) -> Result<()> {
        if unit_price < Decimal::ZERO {
            return Err(AppError::validation(format!(
                "Unit price must be non-negative, got: {}",
                unit_price
            )));
        }

        Ok(())
    }
}
