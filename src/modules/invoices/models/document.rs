// A document is an invoice or a quotation. Both share the same line-item and
// totals machinery; they differ in lifecycle (quotations can be accepted and
// expire, invoices get paid). Documents become immutable once sent.

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::line_item::LineItem;
use crate::core::{AppError, Currency, Result};
use crate::modules::taxes::models::{TaxContext, TaxRate};

/// Quotations are valid for 30 days unless overridden.
const QUOTATION_VALIDITY_DAYS: i64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Invoice,
    Quotation,
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentKind::Invoice => write!(f, "invoice"),
            DocumentKind::Quotation => write!(f, "quotation"),
        }
    }
}

/// Document status lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    /// Editable, not yet delivered to the client
    Draft,

    /// Delivered; the document is now immutable
    Sent,

    /// Quotation accepted by the client
    Accepted,

    /// Invoice settled in full
    Paid,

    /// Validity window elapsed without acceptance/payment
    Expired,

    /// Withdrawn by the issuer
    Cancelled,
}

impl Default for DocumentStatus {
    fn default() -> Self {
        DocumentStatus::Draft
    }
}

impl std::fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentStatus::Draft => write!(f, "draft"),
            DocumentStatus::Sent => write!(f, "sent"),
            DocumentStatus::Accepted => write!(f, "accepted"),
            DocumentStatus::Paid => write!(f, "paid"),
            DocumentStatus::Expired => write!(f, "expired"),
            DocumentStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl std::str::FromStr for DocumentStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "draft" => Ok(DocumentStatus::Draft),
            "sent" => Ok(DocumentStatus::Sent),
            "accepted" => Ok(DocumentStatus::Accepted),
            "paid" => Ok(DocumentStatus::Paid),
            "expired" => Ok(DocumentStatus::Expired),
            "cancelled" => Ok(DocumentStatus::Cancelled),
            _ => Err(format!("Invalid document status: {}", s)),
        }
    }
}

/// An invoice or quotation record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Unique document ID (UUID)
    #[serde(skip_deserializing)]
    pub id: Option<String>,

    pub kind: DocumentKind,

    /// Issuer-assigned number, e.g. "INV-2026-041"
    pub number: String,

    pub client_name: String,

    /// Currency for the entire document
    pub currency: Currency,

    /// Client country, drives the default tax rate and the tax label
    pub country_code: String,

    /// Absolute discount applied to the document subtotal
    #[serde(default)]
    pub discount: Decimal,

    /// Tax-exempt transactions carry a zero effective rate
    #[serde(default)]
    pub tax_exempt: bool,

    /// Caller-supplied override percentage
    #[serde(default)]
    pub custom_tax_rate: Option<Decimal>,

    /// Stored rate resolved by the persistence layer, if any
    #[serde(default)]
    pub tax_rate: Option<TaxRate>,

    pub line_items: Vec<LineItem>,

    #[serde(skip_deserializing)]
    pub status: DocumentStatus,

    #[serde(skip_deserializing)]
    pub issued_at: Option<DateTime<Utc>>,

    /// Quotations expire after this instant; invoices have no validity window
    #[serde(skip_deserializing)]
    pub valid_until: Option<DateTime<Utc>>,

    #[serde(skip_deserializing)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(skip_deserializing)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Document {
    /// Create a new document with validation
    ///
    /// # Arguments
    /// * `kind` - Invoice or quotation
    /// * `number` - Issuer-assigned document number (must be non-empty)
    /// * `client_name` - Billed client (must be non-empty)
    /// * `currency` - Document currency
    /// * `country_code` - Client country (ISO-3166 alpha-2)
    /// * `line_items` - At least one line item
    pub fn new(
        kind: DocumentKind,
        number: impl Into<String>,
        client_name: impl Into<String>,
        currency: Currency,
        country_code: impl Into<String>,
        line_items: Vec<LineItem>,
    ) -> Result<Self> {
        let number = number.into();
        let client_name = client_name.into();

        Self::validate_number(&number)?;
        Self::validate_client_name(&client_name)?;
        Self::validate_line_items(&line_items)?;

        let now = Utc::now();
        let valid_until = match kind {
            DocumentKind::Quotation => Some(now + Duration::days(QUOTATION_VALIDITY_DAYS)),
            DocumentKind::Invoice => None,
        };

        Ok(Self {
            id: Some(Uuid::new_v4().to_string()),
            kind,
            number,
            client_name,
            currency,
            country_code: country_code.into(),
            discount: Decimal::ZERO,
            tax_exempt: false,
            custom_tax_rate: None,
            tax_rate: None,
            line_items,
            status: DocumentStatus::Draft,
            issued_at: Some(now),
            valid_until,
            created_at: Some(now),
            updated_at: Some(now),
        })
    }

    /// Set the document-level discount (absolute amount, must be non-negative)
    pub fn set_discount(&mut self, discount: Decimal) -> Result<()> {
        if discount < Decimal::ZERO {
            return Err(AppError::validation(format!(
                "Discount must be non-negative, got: {}",
                discount
            )));
        }

        self.discount = discount;
        self.updated_at = Some(Utc::now());
        Ok(())
    }

    /// Sum of line-item subtotals, unrounded
    pub fn subtotal(&self) -> Decimal {
        self.line_items.iter().map(LineItem::subtotal).sum()
    }

    /// The tax context this document resolves its rate with
    pub fn tax_context(&self) -> TaxContext {
        TaxContext {
            country_code: self.country_code.clone(),
            tax_rate: self.tax_rate.clone(),
            is_exempt: self.tax_exempt,
            custom_rate: self.custom_tax_rate,
        }
    }

    /// Whether the validity window has elapsed
    pub fn is_expired(&self) -> bool {
        if let Some(valid_until) = self.valid_until {
            Utc::now() > valid_until
        } else {
            false
        }
    }

    /// Documents are editable only while in draft
    pub fn is_mutable(&self) -> bool {
        self.status == DocumentStatus::Draft
    }

    /// Update status, enforcing the allowed transitions
    pub fn update_status(&mut self, new_status: DocumentStatus) -> Result<()> {
        let allowed = match (self.status, new_status) {
            // Draft can transition anywhere
            (DocumentStatus::Draft, _) => true,
            (DocumentStatus::Sent, DocumentStatus::Paid) => self.kind == DocumentKind::Invoice,
            (DocumentStatus::Sent, DocumentStatus::Accepted) => {
                self.kind == DocumentKind::Quotation
            }
            (DocumentStatus::Sent, DocumentStatus::Expired | DocumentStatus::Cancelled) => true,
            _ => false,
        };

        if !allowed {
            return Err(AppError::validation(format!(
                "Invalid {} status transition from {} to {}",
                self.kind, self.status, new_status
            )));
        }

        self.status = new_status;
        self.updated_at = Some(Utc::now());
        Ok(())
    }

    fn validate_number(number: &str) -> Result<()> {
        if number.trim().is_empty() {
            return Err(AppError::validation("Document number cannot be empty"));
        }

        Ok(())
    }

    fn validate_client_name(client_name: &str) -> Result<()> {
        if client_name.trim().is_empty() {
            return Err(AppError::validation("Client name cannot be empty"));
        }

        Ok(())
    }

    fn validate_line_items(line_items: &[LineItem]) -> Result<()> {
        if line_items.is_empty() {
            return Err(AppError::validation(
                "Document must have at least one line item",
            ));
        }

        Ok(())
    }
}
