//! Presentation helpers for monetary amounts.

use crate::config::Config;

/// Formats currency amounts for presentation.
pub trait CurrencyFormatter: Send + Sync {
    fn format_amount(&self, amount: f64) -> String;
}

/// Symbol-prefixed, comma-grouped formatter driven by [`Config`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlainCurrencyFormatter {
    currency: String,
    precision: u8,
}

impl PlainCurrencyFormatter {
    pub fn new(currency: impl Into<String>, precision: u8) -> Self {
        Self {
            currency: currency.into().trim().to_ascii_uppercase(),
            precision,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.currency.clone(), config.precision)
    }
}

impl Default for PlainCurrencyFormatter {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl CurrencyFormatter for PlainCurrencyFormatter {
    fn format_amount(&self, amount: f64) -> String {
        let body = format_number(amount.abs(), self.precision);
        let sign = if amount < 0.0 && body.chars().any(|c| c.is_ascii_digit() && c != '0') {
            "-"
        } else {
            ""
        };
        match symbol_for(&self.currency) {
            Some(symbol) => format!("{sign}{symbol}{body}"),
            None => format!("{sign}{} {body}", self.currency),
        }
    }
}

fn symbol_for(code: &str) -> Option<&'static str> {
    match code {
        "USD" | "MXN" | "CLP" | "COP" | "ARS" => Some("$"),
        "EUR" => Some("€"),
        "GBP" => Some("£"),
        "JPY" => Some("¥"),
        _ => None,
    }
}

fn format_number(value: f64, precision: u8) -> String {
    let body = format!("{:.*}", precision as usize, value);
    match body.split_once('.') {
        Some((int_part, fraction)) => format!("{}.{}", group_digits(int_part), fraction),
        None => group_digits(&body),
    }
}

fn group_digits(digits: &str) -> String {
    let mut grouped = String::new();
    for (count, ch) in digits.chars().rev().enumerate() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, ',');
        }
        grouped.insert(0, ch);
    }
    grouped
}
