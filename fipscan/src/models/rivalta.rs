// src/models/rivalta.rs
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Outcome of the Rivalta test on effusion fluid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum RivaltaStatus {
    #[default]
    NotPerformed,
    Negative,
    Positive,
}

impl FromStr for RivaltaStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pozytywna" | "pozytywny" | "dodatnia" | "positive" | "+" => Ok(Self::Positive),
            "negatywna" | "negatywny" | "ujemna" | "negative" | "-" => Ok(Self::Negative),
            "nie wykonano" | "niewykonano" | "brak" | "not performed" | "none" | "" => {
                Ok(Self::NotPerformed)
            }
            other => Err(format!("unknown Rivalta status: '{other}'")),
        }
    }
}

impl TryFrom<String> for RivaltaStatus {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for RivaltaStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::NotPerformed => "nie wykonano",
            Self::Negative => "negatywna",
            Self::Positive => "pozytywna",
        };
        f.write_str(label)
    }
}
