// src/models/parameter.rs
use crate::utils::to_number;

/// A single measured lab value together with its unit and reference range.
///
/// Values are kept as the text the lab printed (after `,` → `.` normalisation)
/// so qualifiers such as `<0.1` or `1:400` survive extraction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Parameter {
    pub name: String,
    pub value: String,
    pub unit: String,
    pub range_min: Option<String>,
    pub range_max: Option<String>,
}

impl Parameter {
    #[inline]
    #[must_use]
    pub fn new(name: &str, value: &str) -> Self {
        Self {
            name: name.to_owned(),
            value: value.to_owned(),
            ..Self::default()
        }
    }

    #[inline]
    #[must_use]
    pub fn with_unit(mut self, unit: &str) -> Self {
        unit.clone_into(&mut self.unit);
        self
    }

    #[inline]
    #[must_use]
    pub fn with_range(mut self, min: Option<&str>, max: Option<&str>) -> Self {
        self.range_min = min.map(str::to_owned);
        self.range_max = max.map(str::to_owned);
        self
    }

    #[inline]
    #[must_use]
    pub fn value_f64(&self) -> Option<f64> {
        to_number(&self.value)
    }

    #[inline]
    #[must_use]
    pub fn min_f64(&self) -> Option<f64> {
        self.range_min.as_deref().and_then(to_number)
    }

    #[inline]
    #[must_use]
    pub fn max_f64(&self) -> Option<f64> {
        self.range_max.as_deref().and_then(to_number)
    }

    /// Measured value and upper bound, present only when both parse.
    #[inline]
    #[must_use]
    pub fn value_and_max(&self) -> Option<(f64, f64)> {
        Some((self.value_f64()?, self.max_f64()?))
    }

    /// Measured value and lower bound, present only when both parse.
    #[inline]
    #[must_use]
    pub fn value_and_min(&self) -> Option<(f64, f64)> {
        Some((self.value_f64()?, self.min_f64()?))
    }
}
