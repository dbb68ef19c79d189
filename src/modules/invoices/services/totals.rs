use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::modules::invoices::models::Document;
use crate::modules::taxes::services::country_classifier;
use crate::modules::taxes::TaxCalculator;

/// Display-ready totals breakdown for an invoice or quotation.
///
/// Monetary fields are rounded to the document currency's minor-unit scale;
/// `effective_rate` stays exact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TotalsSummary {
    pub subtotal: Decimal,
    pub discount: Decimal,
    pub taxable_amount: Decimal,
    /// Display label, e.g. "VAT" or "Sales Tax"
    pub tax_name: String,
    pub effective_rate: Decimal,
    pub tax_amount: Decimal,
    pub total: Decimal,
}

/// Builds totals summaries by aggregating a document's line items and
/// delegating the tax breakdown to the tax engine. This is where display
/// rounding happens — the engine itself never rounds.
pub struct TotalsPresenter {
    calculator: TaxCalculator,
}

impl TotalsPresenter {
    pub fn new() -> Self {
        Self {
            calculator: TaxCalculator::new(),
        }
    }

    pub fn summarize(&self, document: &Document) -> TotalsSummary {
        let subtotal = document.subtotal();
        let context = document.tax_context();
        let calculation = self
            .calculator
            .calculate_tax(subtotal, document.discount, &context);

        let currency = document.currency;
        let summary = TotalsSummary {
            subtotal: currency.round(subtotal),
            discount: currency.round(document.discount),
            taxable_amount: currency.round(calculation.taxable_amount),
            tax_name: country_classifier::tax_name(&document.country_code).to_string(),
            effective_rate: calculation.effective_rate,
            tax_amount: currency.round(calculation.tax_amount),
            total: currency.round(calculation.total_amount),
        };

        debug!(
            "Summarized {} {}: {} line items, {} {} total",
            document.kind,
            document.number,
            document.line_items.len(),
            summary.total,
            currency
        );

        summary
    }
}

impl Default for TotalsPresenter {
    fn default() -> Self {
        Self::new()
    }
}
