use rust_decimal::Decimal;

use super::currency::Currency;

/// Number-formatting conventions for a BCP-47 style locale tag.
///
/// The application ships a fixed set of locale conventions (separators and
/// currency-symbol placement). Parsing an unknown tag is an error so callers
/// can fall back to plain numeric output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    decimal_sep: char,
    group_sep: char,
    symbol_first: bool,
}

impl Locale {
    /// English and CJK style: `$1,234.56`
    const PREFIX_DOT: Locale = Locale {
        decimal_sep: '.',
        group_sep: ',',
        symbol_first: true,
    };

    /// Continental European style: `1.234,56 €`
    const SUFFIX_COMMA: Locale = Locale {
        decimal_sep: ',',
        group_sep: '.',
        symbol_first: false,
    };

    /// French/Nordic style: `1 234,56 kr`
    const SUFFIX_SPACE: Locale = Locale {
        decimal_sep: ',',
        group_sep: ' ',
        symbol_first: false,
    };

    /// Swiss style: `CHF 1'234.56`
    const SWISS: Locale = Locale {
        decimal_sep: '.',
        group_sep: '\'',
        symbol_first: true,
    };

    /// Renders `amount` with exactly two fraction digits, this locale's
    /// separators, and the currency's display symbol.
    pub fn format_currency(&self, amount: Decimal, currency: Currency) -> String {
        let rounded = amount.round_dp(2);
        let sign = if rounded.is_sign_negative() { "-" } else { "" };
        let fixed = format!("{:.2}", rounded.abs());
        let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
        let number = format!("{}{}{}", self.group(int_part), self.decimal_sep, frac_part);

        let symbol = currency.symbol();
        if self.symbol_first {
            // Alphabetic codes read better with a space: "CHF 1'234.56"
            let gap = if symbol.ends_with(|c: char| c.is_ascii_alphabetic()) {
                " "
            } else {
                ""
            };
            format!("{}{}{}{}", sign, symbol, gap, number)
        } else {
            format!("{}{} {}", sign, number, symbol)
        }
    }

    /// Inserts the grouping separator every three digits from the right.
    fn group(&self, digits: &str) -> String {
        let len = digits.len();
        let mut out = String::with_capacity(len + len / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                out.push(self.group_sep);
            }
            out.push(c);
        }
        out
    }
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        let normalized = tag.trim().replace('_', "-");
        let mut parts = normalized.split('-');
        let lang = parts.next().unwrap_or("").to_ascii_lowercase();
        let region = parts.next().map(|r| r.to_ascii_uppercase());

        match (lang.as_str(), region.as_deref()) {
            ("de" | "fr" | "it", Some("CH")) => Ok(Locale::SWISS),
            ("en" | "ja" | "zh" | "ko", _) => Ok(Locale::PREFIX_DOT),
            ("de" | "es" | "it" | "nl" | "pt" | "da" | "nb" | "tr" | "id", _) => {
                Ok(Locale::SUFFIX_COMMA)
            }
            ("fr" | "sv" | "fi" | "pl" | "cs" | "hu" | "ru", _) => Ok(Locale::SUFFIX_SPACE),
            _ => Err(format!("Unsupported locale: {}", tag)),
        }
    }
}
