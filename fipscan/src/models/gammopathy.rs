// src/models/gammopathy.rs
use std::convert::Infallible;
use std::str::FromStr;

/// Character of the gamma fraction on serum protein electrophoresis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gammopathy {
    /// Broad increase across several fractions, typical for FIP.
    Polyclonal,
    /// Narrow spike of a single fraction.
    Monoclonal,
    #[default]
    None,
}

impl Gammopathy {
    /// Classifies a free-text description such as "Polyclonal gammopathy detected".
    #[must_use]
    pub fn from_description(text: &str) -> Self {
        let text = text.to_lowercase();
        if text.contains("poliklonaln") || text.contains("polyclonal") {
            Self::Polyclonal
        } else if text.contains("monoklonaln") || text.contains("monoclonal") {
            Self::Monoclonal
        } else {
            Self::None
        }
    }
}

impl FromStr for Gammopathy {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_description(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_description() {
        assert_eq!(
            Gammopathy::from_description("Polyclonal gammopathy detected"),
            Gammopathy::Polyclonal
        );
        assert_eq!(
            Gammopathy::from_description("gammapatia monoklonalna"),
            Gammopathy::Monoclonal
        );
        assert_eq!(Gammopathy::from_description("No gammopathy"), Gammopathy::None);
        assert_eq!(Gammopathy::from_description("brak gammapatii"), Gammopathy::None);
    }
}
