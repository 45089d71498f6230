// src/core/ratio.rs

/// Outcome of dividing two user-entered numbers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RatioResult {
    Success { ratio: f64 },
    /// One or both fields are not a decimal number.
    InvalidInput,
    /// The denominator parsed to exactly zero.
    DivisionByZero,
}

impl RatioResult {
    #[inline]
    #[must_use]
    pub const fn ratio(&self) -> Option<f64> {
        match *self {
            Self::Success { ratio } => Some(ratio),
            Self::InvalidInput | Self::DivisionByZero => None,
        }
    }
}

/// Parses a decimal number: optional sign, digits, decimal point, exponent.
///
/// Surrounding whitespace is ignored. Textual specials such as `inf` or `NaN`
/// are not decimal numbers and are rejected.
fn parse_decimal(text: &str) -> Option<f64> {
    let text = text.trim();
    let looks_decimal = text
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'));
    if !looks_decimal {
        return None;
    }
    text.parse::<f64>().ok()
}

/// Computes `numerator / denominator` from raw text fields.
///
/// # Arguments
///
/// * `numerator_text` - Text entered for the numerator (albumin)
/// * `denominator_text` - Text entered for the denominator (globulin)
///
/// # Returns
///
/// * `RatioResult::InvalidInput` if either field fails to parse
/// * `RatioResult::DivisionByZero` if the denominator is `0` or `-0`
/// * `RatioResult::Success` with the unrounded IEEE-754 quotient otherwise
#[inline]
#[must_use]
pub fn compute(numerator_text: &str, denominator_text: &str) -> RatioResult {
    let (Some(numerator), Some(denominator)) =
        (parse_decimal(numerator_text), parse_decimal(denominator_text))
    else {
        return RatioResult::InvalidInput;
    };

    if denominator == 0.0 {
        return RatioResult::DivisionByZero;
    }

    RatioResult::Success {
        ratio: numerator / denominator,
    }
}
