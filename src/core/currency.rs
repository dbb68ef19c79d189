use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::{AppError, Result};
use super::locale::Locale;

/// Supported invoice currencies with their minor-unit precision rules.
///
/// Covers the currencies of the countries the application invoices in. All
/// currencies use 2 decimal places except JPY (none).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    USD,
    EUR,
    GBP,
    CHF,
    SEK,
    NOK,
    DKK,
    PLN,
    CZK,
    CAD,
    AUD,
    NZD,
    SGD,
    JPY,
    INR,
    CNY,
    ZAR,
    BRL,
    MXN,
}

impl Currency {
    /// Returns the minor-unit scale for this currency
    pub fn scale(&self) -> u32 {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }

    /// Rounds a decimal value to the appropriate scale for this currency
    pub fn round(&self, amount: Decimal) -> Decimal {
        amount.round_dp(self.scale())
    }

    /// ISO-4217 code
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::CHF => "CHF",
            Currency::SEK => "SEK",
            Currency::NOK => "NOK",
            Currency::DKK => "DKK",
            Currency::PLN => "PLN",
            Currency::CZK => "CZK",
            Currency::CAD => "CAD",
            Currency::AUD => "AUD",
            Currency::NZD => "NZD",
            Currency::SGD => "SGD",
            Currency::JPY => "JPY",
            Currency::INR => "INR",
            Currency::CNY => "CNY",
            Currency::ZAR => "ZAR",
            Currency::BRL => "BRL",
            Currency::MXN => "MXN",
        }
    }

    /// Display symbol used in formatted amounts
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "€",
            Currency::GBP => "£",
            Currency::CHF => "CHF",
            Currency::SEK | Currency::NOK | Currency::DKK => "kr",
            Currency::PLN => "zł",
            Currency::CZK => "Kč",
            Currency::CAD => "CA$",
            Currency::AUD => "A$",
            Currency::NZD => "NZ$",
            Currency::SGD => "S$",
            Currency::JPY => "¥",
            Currency::INR => "₹",
            Currency::CNY => "CN¥",
            Currency::ZAR => "R",
            Currency::BRL => "R$",
            Currency::MXN => "MX$",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "USD" => Ok(Currency::USD),
            "EUR" => Ok(Currency::EUR),
            "GBP" => Ok(Currency::GBP),
            "CHF" => Ok(Currency::CHF),
            "SEK" => Ok(Currency::SEK),
            "NOK" => Ok(Currency::NOK),
            "DKK" => Ok(Currency::DKK),
            "PLN" => Ok(Currency::PLN),
            "CZK" => Ok(Currency::CZK),
            "CAD" => Ok(Currency::CAD),
            "AUD" => Ok(Currency::AUD),
            "NZD" => Ok(Currency::NZD),
            "SGD" => Ok(Currency::SGD),
            "JPY" => Ok(Currency::JPY),
            "INR" => Ok(Currency::INR),
            "CNY" => Ok(Currency::CNY),
            "ZAR" => Ok(Currency::ZAR),
            "BRL" => Ok(Currency::BRL),
            "MXN" => Ok(Currency::MXN),
            _ => Err(format!("Invalid currency: {}", s)),
        }
    }
}

impl TryFrom<String> for Currency {
    type Error = String;

    fn try_from(s: String) -> std::result::Result<Self, Self::Error> {
        s.parse()
    }
}

impl TryFrom<&str> for Currency {
    type Error = String;

    fn try_from(s: &str) -> std::result::Result<Self, Self::Error> {
        s.parse()
    }
}

/// Formats a decimal amount as a localized currency string with exactly two
/// fraction digits.
///
/// Fails with [`AppError::Formatting`] when the currency code or the locale
/// tag is not recognized. No other validation happens here; callers catch the
/// error and fall back to a plain numeric string.
pub fn format_tax_amount(amount: Decimal, currency_code: &str, locale_tag: &str) -> Result<String> {
    let currency: Currency = currency_code.parse().map_err(AppError::formatting)?;
    let locale: Locale = locale_tag.parse().map_err(AppError::formatting)?;
    Ok(locale.format_currency(amount, currency))
}
