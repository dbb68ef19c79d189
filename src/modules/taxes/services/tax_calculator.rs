use rust_decimal::Decimal;
use tracing::debug;

use super::country_classifier;
use crate::modules::taxes::models::{TaxCalculation, TaxContext};

/// TaxCalculator produces the tax breakdown for an invoice or quotation:
/// taxable amount, tax amount, total, and the effective rate after
/// precedence resolution.
pub struct TaxCalculator;

impl TaxCalculator {
    pub fn new() -> Self {
        Self
    }

    /// Calculate the tax breakdown for a subtotal and optional discount.
    ///
    /// Always succeeds: negative subtotals, unknown countries, and
    /// out-of-range rates all produce a numerically defined result. The
    /// taxable amount is `subtotal - discount`, floored at zero. No rounding
    /// is applied here; display layers round to the currency's scale.
    pub fn calculate_tax(
        &self,
        subtotal: Decimal,
        discount: Decimal,
        context: &TaxContext,
    ) -> TaxCalculation {
        let effective_rate = Self::effective_rate(context);

        let taxable_amount = (subtotal - discount).max(Decimal::ZERO);
        let tax_amount = taxable_amount * effective_rate / Decimal::ONE_HUNDRED;
        let total_amount = taxable_amount + tax_amount;

        debug!(
            "Calculated tax for {}: taxable {} at {}% = {}",
            context.country_code, taxable_amount, effective_rate, tax_amount
        );

        TaxCalculation {
            taxable_amount,
            tax_amount,
            total_amount,
            effective_rate,
        }
    }

    /// Resolve the effective rate for a context.
    ///
    /// Ordered precedence, first match wins: exemption, caller override
    /// (zero counts as provided), stored rate, country default. Falls back
    /// to zero when nothing matches.
    pub fn effective_rate(context: &TaxContext) -> Decimal {
        let rules = [
            context.is_exempt.then_some(Decimal::ZERO),
            context.custom_rate,
            context.tax_rate.as_ref().map(|tax_rate| tax_rate.rate),
            country_classifier::default_rate(&context.country_code),
        ];

        rules.into_iter().flatten().next().unwrap_or(Decimal::ZERO)
    }
}

impl Default for TaxCalculator {
    fn default() -> Self {
        Self::new()
    }
}
