// src/core/report.rs
use anyhow::{Context as _, Result};
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;
use tracing::debug;

use crate::models::{LabData, Parameter};

const COLLECTION_DATE_LABEL: &str = "Data pobrania materiału";

/// Labels that mark a line as part of the patient card.
const PATIENT_TRIGGERS: [&str; 6] = [
    "Pacjent:",
    "Gatunek:",
    "Płeć:",
    "Wiek:",
    "Umaszczenie:",
    "Mikrochip:",
];

static PATIENT_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new("(Pacjent:|Gatunek:|Rasa:|Płeć:|Wiek:|Umaszczenie:|Mikrochip:)")
        .unwrap_or_else(|e| unreachable!("invalid patient key regex: {e}"))
});

static COLLECTION_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Data pobrania materiału:\s*(\d{2}\.\d{2}\.\d{4})")
        .unwrap_or_else(|e| unreachable!("invalid date regex: {e}"))
});

static NAME_AND_VALUE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([^\d<>]+?)\s*([<>]?\d+[,.]\d+)")
        .unwrap_or_else(|e| unreachable!("invalid parameter regex: {e}"))
});

static DECIMAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d+[,.]\d+").unwrap_or_else(|e| unreachable!("invalid decimal regex: {e}"))
});

static PARENTHESISED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\([^)]*\)").unwrap_or_else(|e| unreachable!("invalid parentheses regex: {e}"))
});

/// Reads a semicolon-separated lab report export and extracts its data.
///
/// # Errors
///
/// This function may return an error if:
/// * The file cannot be read
/// * The file is not valid UTF-8
pub fn read_lab_report(path: &Path) -> Result<LabData> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read lab report: {}", path.display()))?;
    let lines: Vec<&str> = content.lines().collect();
    Ok(parse_lab_results(&lines))
}

/// Extracts patient data, collection date and measured parameters from report lines.
///
/// Lines that match none of the known shapes are ignored; this never fails.
pub fn parse_lab_results<S: AsRef<str>>(lines: &[S]) -> LabData {
    let mut data = LabData::new();

    for line in lines.iter().map(AsRef::as_ref) {
        if is_patient_line(line) {
            extract_patient_data(line, &mut data);
        }
    }

    let mut pending_test_name: Option<String> = None;

    for line in lines.iter().map(AsRef::as_ref) {
        if is_patient_line(line) {
            continue;
        }

        let cleaned = PARENTHESISED.replace_all(line, "");
        let cleaned = cleaned.trim();

        if cleaned.starts_with(COLLECTION_DATE_LABEL) {
            if data.collection_date.is_none() {
                data.collection_date = COLLECTION_DATE
                    .captures(cleaned)
                    .and_then(|caps| caps.get(1))
                    .map(|m| m.as_str().to_owned());
                debug!(date = ?data.collection_date, "collection date");
            }
            continue;
        }

        if cleaned.starts_with("Data ") {
            continue;
        }

        let parts: Vec<&str> = cleaned.split(';').map(str::trim).collect();
        let Some(&first) = parts.first() else {
            continue;
        };

        // A bare heading names the test whose row is labelled "Wynik".
        if parts.len() == 1 && !first.is_empty() && !DECIMAL.is_match(first) {
            pending_test_name = Some(first.to_owned());
            continue;
        }

        if !DECIMAL.is_match(first) {
            continue;
        }

        let (name, value) = parse_parameter_name(first);
        let name = if name == "Wynik" {
            pending_test_name.clone().unwrap_or(name)
        } else {
            name
        };

        if let [_, unit, range, ..] = parts.as_slice() {
            let mut bounds = range.split('-');
            let raw_min = bounds.next().unwrap_or_default();
            let raw_max = bounds.next();
            let min = raw_min.replace(',', ".");
            let max = raw_max.map(|m| m.replace(',', "."));

            data.results.push(format!(
                "{name} {value} (norma {raw_min} - {}) {unit}",
                raw_max.unwrap_or(&value)
            ));
            debug!(%name, %value, %min, max = max.as_deref().unwrap_or("-"), %unit, "parameter");

            data.insert(
                Parameter::new(&name, &value)
                    .with_unit(unit)
                    .with_range(Some(&min), max.as_deref()),
            );
        } else if NAME_AND_VALUE.is_match(first) {
            let unit = parts.get(1).copied().unwrap_or_default();
            debug!(%name, %value, %unit, "summary parameter");
            data.insert(Parameter::new(&name, &value).with_unit(unit));
        }
    }

    data
}

fn is_patient_line(line: &str) -> bool {
    PATIENT_TRIGGERS.iter().any(|trigger| line.contains(trigger))
}

fn extract_patient_data(line: &str, data: &mut LabData) {
    let text = line.replace('\n', " ");
    let markers: Vec<_> = PATIENT_KEY.find_iter(&text).collect();

    for (index, marker) in markers.iter().enumerate() {
        let key = marker.as_str().trim_end_matches(':').trim();
        let end = markers.get(index + 1).map_or(text.len(), |next| next.start());
        let value = text
            .get(marker.end()..end)
            .unwrap_or_default()
            .replace(';', "");
        data.patient.insert(key.to_owned(), value.trim().to_owned());
    }
}

/// Splits `"Albuminy 2,8"` into `("Albuminy", "2.8")`.
fn parse_parameter_name(text: &str) -> (String, String) {
    NAME_AND_VALUE.captures(text).map_or_else(
        || (text.to_owned(), String::from("-")),
        |caps| {
            let name = caps.get(1).map_or("", |m| m.as_str()).trim().to_owned();
            let value = caps.get(2).map_or("", |m| m.as_str()).replace(',', ".");
            (name, value)
        },
    )
}
