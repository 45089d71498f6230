// src/models/lab_data.rs
use std::collections::BTreeMap;

use crate::models::Parameter;

/// Everything pulled out of a single lab report.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabData {
    /// Patient card fields keyed by their label without the colon (`Pacjent`, `Wiek`, ...).
    pub patient: BTreeMap<String, String>,
    /// Sample collection date as printed, `dd.mm.yyyy`.
    pub collection_date: Option<String>,
    /// Parameters in report order.
    pub parameters: Vec<Parameter>,
    /// Human readable result lines, one per ranged parameter.
    pub results: Vec<String>,
}

impl LabData {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, mostly useful when assembling data by hand.
    #[inline]
    #[must_use]
    pub fn with(mut self, parameter: Parameter) -> Self {
        self.insert(parameter);
        self
    }

    /// Inserts a parameter. A parameter with the same name is replaced in place.
    #[inline]
    pub fn insert(&mut self, parameter: Parameter) {
        if let Some(existing) = self.parameters.iter_mut().find(|p| p.name == parameter.name) {
            *existing = parameter;
        } else {
            self.parameters.push(parameter);
        }
    }

    #[inline]
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.name == name)
    }

    /// First parameter whose name contains `needle`, ignoring case.
    #[inline]
    #[must_use]
    pub fn find(&self, needle: &str) -> Option<&Parameter> {
        let needle = needle.to_lowercase();
        self.find_where(|name| name.contains(&needle))
    }

    /// First parameter whose lowercased name satisfies `pred`.
    #[inline]
    pub fn find_where<F>(&self, pred: F) -> Option<&Parameter>
    where
        F: Fn(&str) -> bool,
    {
        self.parameters
            .iter()
            .find(|p| pred(&p.name.to_lowercase()))
    }

    /// Tries each needle in turn and returns the first hit.
    #[inline]
    #[must_use]
    pub fn find_any(&self, needles: &[&str]) -> Option<&Parameter> {
        needles.iter().find_map(|needle| self.find(needle))
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty() && self.patient.is_empty() && self.collection_date.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_replaces_in_place() {
        let mut data = LabData::new();
        data.insert(Parameter::new("ALT", "50"));
        data.insert(Parameter::new("AST", "30"));
        data.insert(Parameter::new("ALT", "75"));

        assert_eq!(data.parameters.len(), 2);
        assert_eq!(data.parameters[0].name, "ALT");
        assert_eq!(data.parameters[0].value, "75");
    }

    #[test]
    fn test_find_is_case_insensitive_and_ordered() {
        let data = LabData::new()
            .with(Parameter::new("Albuminy", "2.8"))
            .with(Parameter::new("Stosunek albumin/globulin", "0.62"));

        assert_eq!(data.find("ALBUMIN").map(|p| p.value.as_str()), Some("2.8"));
        assert!(data.find("bilirubin").is_none());
    }

    #[test]
    fn test_find_any_falls_back() {
        let data = LabData::new().with(Parameter::new("AlAT", "120"));
        assert_eq!(data.find_any(&["ALT", "AlAT"]).map(|p| p.name.as_str()), Some("AlAT"));
    }
}
