// src/models/cat_record.rs
use serde::Deserialize;
use std::fmt;

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct CatRecord {
    pub name: String,
    pub ag_ratio: f64,
}

impl CatRecord {
    #[inline]
    #[must_use]
    pub fn new(name: &str, ag_ratio: f64) -> Self {
        Self {
            name: name.to_owned(),
            ag_ratio,
        }
    }
}

impl fmt::Display for CatRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - A/G: {}", self.name, self.ag_ratio)
    }
}
