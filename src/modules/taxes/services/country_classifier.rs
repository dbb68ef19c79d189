//! Country tax classification tables.
//!
//! Process-wide constant lookups: per-country default rates, VAT-jurisdiction
//! membership, and display tax names. Every function is total — unrecognized
//! codes resolve to a defined fallback, never an error. Codes are matched
//! case-insensitively.

use rust_decimal::Decimal;

/// Default tax rate (percent) for a country, or `None` when the country is
/// not in the table. Rates are the standard VAT/GST/sales rates the
/// application ships with; stored [`TaxRate`](super::super::models::TaxRate)
/// records override them.
pub fn default_rate(country_code: &str) -> Option<Decimal> {
    let rate: i64 = match country_code.to_ascii_uppercase().as_str() {
        "HU" => 27,
        "HR" | "DK" | "NO" | "SE" => 25,
        "FI" | "GR" => 24,
        "IE" | "PL" | "PT" => 23,
        "IT" | "SI" => 22,
        "BE" | "CZ" | "ES" | "LT" | "LV" | "NL" => 21,
        "AT" | "BG" | "EE" | "FR" | "GB" | "SK" => 20,
        "CY" | "DE" | "RO" => 19,
        "IN" | "MT" | "TR" => 18,
        "BR" | "LU" => 17,
        "MX" => 16,
        "NZ" | "SA" | "ZA" => 15,
        "CN" => 13,
        "AU" | "JP" | "KR" => 10,
        "CH" => return Some(Decimal::new(77, 1)),
        "SG" => 7,
        "AE" | "CA" => 5,
        "US" => 0,
        _ => return None,
    };
    Some(Decimal::from(rate))
}

/// True iff the country is one of the fixed VAT jurisdictions: the 27 EU
/// members plus the United Kingdom, Switzerland, and Norway.
pub fn is_vat_country(country_code: &str) -> bool {
    matches!(
        country_code.to_ascii_uppercase().as_str(),
        "AT" | "BE"
            | "BG"
            | "HR"
            | "CY"
            | "CZ"
            | "DK"
            | "EE"
            | "FI"
            | "FR"
            | "DE"
            | "GR"
            | "HU"
            | "IE"
            | "IT"
            | "LV"
            | "LT"
            | "LU"
            | "MT"
            | "NL"
            | "PL"
            | "PT"
            | "RO"
            | "SK"
            | "SI"
            | "ES"
            | "SE"
            | "GB"
            | "CH"
            | "NO"
    )
}

/// Display label for the country's tax, used on invoice and quotation
/// summaries. "VAT" for VAT jurisdictions, a fixed secondary table for other
/// known systems, "Tax" for anything else.
pub fn tax_name(country_code: &str) -> &'static str {
    if is_vat_country(country_code) {
        return "VAT";
    }

    match country_code.to_ascii_uppercase().as_str() {
        "US" => "Sales Tax",
        "CA" => "GST/HST",
        "AU" | "NZ" | "SG" | "IN" => "GST",
        "JP" => "Consumption Tax",
        "CN" | "ZA" => "VAT",
        "BR" => "ICMS",
        "MX" => "IVA",
        _ => "Tax",
    }
}
