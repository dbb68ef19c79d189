// Tests for the static country tax tables: VAT classification, display tax
// names, and per-country default rates. These are total functions — every
// input, including unrecognized codes, has a defined result.

use billcraft::taxes::country_classifier::{default_rate, is_vat_country, tax_name};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[test]
fn test_vat_country_classification() {
    assert!(is_vat_country("DE"));
    assert!(is_vat_country("GB"));
    assert!(is_vat_country("CH"));
    assert!(is_vat_country("NO"));

    assert!(!is_vat_country("US"));
    assert!(!is_vat_country("JP"));
    assert!(!is_vat_country("ZZ"));
    assert!(!is_vat_country(""));
}

#[test]
fn test_tax_name_for_vat_countries() {
    assert_eq!(tax_name("DE"), "VAT");
    assert_eq!(tax_name("GB"), "VAT");
    assert_eq!(tax_name("SE"), "VAT");
}

#[test]
fn test_tax_name_secondary_table() {
    assert_eq!(tax_name("US"), "Sales Tax");
    assert_eq!(tax_name("CA"), "GST/HST");
    assert_eq!(tax_name("AU"), "GST");
    assert_eq!(tax_name("NZ"), "GST");
    assert_eq!(tax_name("SG"), "GST");
    assert_eq!(tax_name("IN"), "GST");
    assert_eq!(tax_name("JP"), "Consumption Tax");
    // VAT-style systems outside the fixed VAT jurisdiction set
    assert_eq!(tax_name("CN"), "VAT");
    assert_eq!(tax_name("ZA"), "VAT");
    assert_eq!(tax_name("BR"), "ICMS");
    assert_eq!(tax_name("MX"), "IVA");
}

#[test]
fn test_tax_name_falls_back_to_generic_label() {
    assert_eq!(tax_name("ZZ"), "Tax");
    assert_eq!(tax_name(""), "Tax");
    assert_eq!(tax_name("AR"), "Tax");
}

#[test]
fn test_default_rates() {
    assert_eq!(default_rate("GB"), Some(Decimal::from(20)));
    assert_eq!(default_rate("DE"), Some(Decimal::from(19)));
    assert_eq!(default_rate("HU"), Some(Decimal::from(27)));
    assert_eq!(default_rate("CH"), Some(dec!(7.7)));
    assert_eq!(default_rate("US"), Some(Decimal::ZERO));
}

#[test]
fn test_default_rate_absent_for_unknown_countries() {
    assert_eq!(default_rate("ZZ"), None);
    assert_eq!(default_rate(""), None);
    assert_eq!(default_rate("AR"), None);
}
