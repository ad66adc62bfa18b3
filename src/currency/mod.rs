use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{ExpenseError, Result};

/// ISO 4217 currency representation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CurrencyCode(pub String);

impl CurrencyCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::new("USD")
    }
}

/// Display attributes for a supported currency.
#[derive(Debug, Clone, Copy)]
pub struct CurrencySpec {
    pub symbol: &'static str,
    pub minor_units: u8,
}

static SUPPORTED: Lazy<BTreeMap<&'static str, CurrencySpec>> = Lazy::new(|| {
    let spec = |symbol, minor_units| CurrencySpec {
        symbol,
        minor_units,
    };
    BTreeMap::from([
        ("USD", spec("$", 2)),
        ("EUR", spec("€", 2)),
        ("GBP", spec("£", 2)),
        ("JPY", spec("¥", 0)),
        ("CAD", spec("CA$", 2)),
        ("AUD", spec("A$", 2)),
        ("CHF", spec("CHF", 2)),
        ("INR", spec("₹", 2)),
        ("CNY", spec("CN¥", 2)),
        ("BRL", spec("R$", 2)),
        ("MXN", spec("MX$", 2)),
        ("SEK", spec("kr", 2)),
        ("NOK", spec("kr", 2)),
        ("DKK", spec("kr", 2)),
        ("KWD", spec("KD", 3)),
        ("BHD", spec("BD", 3)),
    ])
});

pub fn spec_for(code: &str) -> Option<CurrencySpec> {
    SUPPORTED.get(code).copied()
}

pub fn is_supported(code: &str) -> bool {
    SUPPORTED.contains_key(code)
}

/// Codes the formatter accepts, for populating currency pickers.
pub fn supported_codes() -> Vec<&'static str> {
    SUPPORTED.keys().copied().collect()
}

/// Locale-aware formatting preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Locale {
    pub decimal_separator: char,
    pub grouping_separator: char,
}

impl Default for Locale {
    fn default() -> Self {
        Self {
            decimal_separator: '.',
            grouping_separator: ',',
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum CurrencyDisplay {
    #[default]
    Symbol,
    Code,
}

/// Formats an amount with the default locale and symbol display.
pub fn format_amount(amount: f64, code: &CurrencyCode) -> Result<String> {
    format_amount_with(amount, code, &Locale::default(), CurrencyDisplay::Symbol)
}

/// Formats an amount for display in the given currency.
///
/// Fails with [`ExpenseError::UnsupportedCurrency`] when the code is not
/// in the supported table; callers are expected to offer only codes from
/// [`supported_codes`].
pub fn format_amount_with(
    amount: f64,
    code: &CurrencyCode,
    locale: &Locale,
    display: CurrencyDisplay,
) -> Result<String> {
    let spec = spec_for(code.as_str())
        .ok_or_else(|| ExpenseError::UnsupportedCurrency(code.as_str().to_string()))?;
    let mut body = format_number(locale, amount.abs(), spec.minor_units);
    if amount < 0.0 {
        body = format!("-{}", body);
    }
    Ok(match display {
        CurrencyDisplay::Symbol => format!("{}{}", spec.symbol, body),
        CurrencyDisplay::Code => format!("{} {}", code.as_str(), body),
    })
}

pub fn format_number(locale: &Locale, value: f64, precision: u8) -> String {
    let body = format!("{:.*}", precision as usize, value);
    let (int_part, frac_part) = match body.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (body.as_str(), None),
    };
    let grouped = group_digits(int_part, locale.grouping_separator);
    match frac_part {
        Some(frac) => format!("{}{}{}", grouped, locale.decimal_separator, frac),
        None => grouped,
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::new();
    let mut count = 0;
    for ch in digits.chars().rev() {
        if count != 0 && count % 3 == 0 && ch.is_ascii_digit() {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
        count += 1;
    }
    grouped
}
