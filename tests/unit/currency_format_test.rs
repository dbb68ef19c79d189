// Tests for the locale-aware currency formatting helper. Output always has
// exactly two fraction digits; unknown currencies and locales are errors the
// caller handles by falling back to a plain numeric string.

use billcraft::{format_tax_amount, AppError};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn test_english_prefix_format() {
    assert_eq!(
        format_tax_amount(dec!(1234.5), "USD", "en-US").unwrap(),
        "$1,234.50"
    );
    assert_eq!(
        format_tax_amount(dec!(0.5), "GBP", "en-GB").unwrap(),
        "£0.50"
    );
}

#[test]
fn test_continental_suffix_format() {
    assert_eq!(
        format_tax_amount(dec!(1234.56), "EUR", "de-DE").unwrap(),
        "1.234,56 €"
    );
    assert_eq!(
        format_tax_amount(dec!(19.99), "EUR", "es-ES").unwrap(),
        "19,99 €"
    );
}

#[test]
fn test_swiss_format() {
    assert_eq!(
        format_tax_amount(dec!(1234.56), "CHF", "de-CH").unwrap(),
        "CHF 1'234.56"
    );
}

#[test]
fn test_space_grouped_suffix_format() {
    assert_eq!(
        format_tax_amount(dec!(1234567.8), "SEK", "sv-SE").unwrap(),
        "1 234 567,80 kr"
    );
    assert_eq!(
        format_tax_amount(dec!(1234.56), "EUR", "fr-FR").unwrap(),
        "1 234,56 €"
    );
}

#[test]
fn test_always_two_fraction_digits() {
    assert_eq!(
        format_tax_amount(Decimal::from(1200), "JPY", "ja-JP").unwrap(),
        "¥1,200.00"
    );
    assert_eq!(
        format_tax_amount(dec!(8.125), "USD", "en-US").unwrap(),
        "$8.12"
    );
}

#[test]
fn test_negative_amounts_carry_a_leading_sign() {
    assert_eq!(
        format_tax_amount(dec!(-42.5), "GBP", "en-GB").unwrap(),
        "-£42.50"
    );
    assert_eq!(
        format_tax_amount(dec!(-42.5), "EUR", "de-DE").unwrap(),
        "-42,50 €"
    );
}

#[test]
fn test_unknown_currency_is_a_formatting_error() {
    let err = format_tax_amount(dec!(10), "ZZZ", "en-US").unwrap_err();
    assert!(matches!(err, AppError::Formatting(_)));
}

#[test]
fn test_unknown_locale_is_a_formatting_error() {
    let err = format_tax_amount(dec!(10), "USD", "xx-YY").unwrap_err();
    assert!(matches!(err, AppError::Formatting(_)));
}

#[test]
fn test_caller_fallback_on_error() {
    // The documented failure handling: fall back to the plain numeric string
    let amount = dec!(19.99);
    let rendered = format_tax_amount(amount, "USD", "xx-YY")
        .unwrap_or_else(|_| amount.to_string());

    assert_eq!(rendered, "19.99");
}
