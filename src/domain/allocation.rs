//! Percentage split of income across savings, fixed and variable buckets.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Upper bound for the combined bucket percentages.
pub const MAX_TOTAL_PCT: f64 = 100.0;

/// Targets that normalized income is divided into.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Bucket {
    Savings,
    Fixed,
    Variable,
}

impl Bucket {
    pub const ALL: [Bucket; 3] = [Bucket::Savings, Bucket::Fixed, Bucket::Variable];
}

impl fmt::Display for Bucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Bucket::Savings => "Savings",
            Bucket::Fixed => "Fixed",
            Bucket::Variable => "Variable",
        };
        f.write_str(label)
    }
}

/// Percentages of normalized income assigned to each bucket.
///
/// The sum is only checked when a new split is saved; a stored value that
/// breaks the limit is still used as-is.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct AllocationConfig {
    #[serde(rename = "savings")]
    pub savings_pct: f64,
    #[serde(rename = "fixed")]
    pub fixed_pct: f64,
    #[serde(rename = "variable")]
    pub variable_pct: f64,
}

impl AllocationConfig {
    pub fn new(savings_pct: f64, fixed_pct: f64, variable_pct: f64) -> Self {
        Self {
            savings_pct,
            fixed_pct,
            variable_pct,
        }
    }

    /// Parses raw form inputs; blank or non-numeric fields count as zero.
    pub fn from_inputs(savings: &str, fixed: &str, variable: &str) -> Self {
        Self::new(
            parse_percentage(savings),
            parse_percentage(fixed),
            parse_percentage(variable),
        )
    }

    pub fn pct(&self, bucket: Bucket) -> f64 {
        match bucket {
            Bucket::Savings => self.savings_pct,
            Bucket::Fixed => self.fixed_pct,
            Bucket::Variable => self.variable_pct,
        }
    }

    pub fn total_pct(&self) -> f64 {
        self.savings_pct + self.fixed_pct + self.variable_pct
    }

    pub fn exceeds_limit(&self) -> bool {
        self.total_pct() > MAX_TOTAL_PCT
    }

    /// Share of income left outside every bucket. Negative when over the limit.
    pub fn unallocated_pct(&self) -> f64 {
        MAX_TOTAL_PCT - self.total_pct()
    }
}

impl Default for AllocationConfig {
    fn default() -> Self {
        Self::new(20.0, 50.0, 30.0)
    }
}

/// Lenient numeric parse used by the allocation form.
///
/// Reads the longest numeric prefix after leading whitespace, so `"20%"` is
/// 20. Input without a numeric prefix counts as zero.
pub fn parse_percentage(input: &str) -> f64 {
    numeric_prefix(input.trim_start())
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(0.0)
}

/// Optional sign, digits with an optional fraction, then an optional exponent.
fn numeric_prefix(input: &str) -> &str {
    let bytes = input.as_bytes();
    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|byte| byte.is_ascii_digit())
            .count()
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let integer = digits_from(end);
    end += integer;
    let mut mantissa = integer;
    if bytes.get(end) == Some(&b'.') {
        let fraction = digits_from(end + 1);
        if integer + fraction > 0 {
            end += 1 + fraction;
            mantissa += fraction;
        }
    }
    if mantissa == 0 {
        return "";
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent = end + 1;
        if matches!(bytes.get(exponent), Some(b'+' | b'-')) {
            exponent += 1;
        }
        let digits = digits_from(exponent);
        if digits > 0 {
            end = exponent + digits;
        }
    }
    &input[..end]
}
