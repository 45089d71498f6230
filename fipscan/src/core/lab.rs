// src/core/lab.rs
use tracing::debug;

use crate::models::{LabData, Parameter};
use crate::utils::to_number;

/// A single observation produced by [`analyze_lab_data`].
#[derive(Debug, Clone, PartialEq)]
pub enum LabFinding {
    AgRatioLow(f64),
    AgRatioModerate(f64),
    Hypergammaglobulinemia,
    AltMild { value: f64, unit: String },
    AltSevere { value: f64, unit: String },
    BilirubinHigh { value: f64, unit: String },
    Leukocytosis(f64),
    Leukopenia(f64),
    StressLeukogram,
    Anemia(f64),
    FcovPositive,
    FcovNegative,
    FcovTiterHigh(String),
    FcovTiterModerate(String),
    FcovTiterLow(String),
    FcovResult(String),
    ResultsNormal,
    DisclaimerOtherDiseases,
}

impl LabFinding {
    /// Whether the rendered comment mentions FIP.
    #[must_use]
    pub const fn mentions_fip(&self) -> bool {
        matches!(
            self,
            Self::AgRatioLow(_)
                | Self::AgRatioModerate(_)
                | Self::Hypergammaglobulinemia
                | Self::FcovPositive
                | Self::FcovTiterHigh(_)
                | Self::FcovTiterModerate(_)
                | Self::DisclaimerOtherDiseases
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Supplement {
    HepatialeForte,
    HepatialeForteAdvanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Specialist {
    Hepatologist,
    Internist,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Consultation {
    #[default]
    None,
    General,
    Specialist(Specialist),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LabAnalysis {
    pub findings: Vec<LabFinding>,
    pub supplements: Vec<Supplement>,
    pub consultation: Consultation,
}

fn is_ratio(name: &str) -> bool {
    name.contains("a/g") || (name.contains("stosunek") && name.contains("albumin"))
}

/// Electrophoresis fractions share the word "globulin" with the total.
fn is_fraction(name: &str) -> bool {
    ["gamma", "alfa", "alpha", "beta"]
        .iter()
        .any(|fraction| name.contains(fraction))
}

/// Albumin/globulin ratio, read directly from the report or derived from its parts.
///
/// When no globulin value is reported it is taken as total protein minus albumin.
/// A derived ratio requires a positive globulin value.
#[must_use]
pub fn ag_ratio(data: &LabData) -> Option<f64> {
    if let Some(ratio) = data.find_where(is_ratio).and_then(Parameter::value_f64) {
        return Some(ratio);
    }

    let albumin = data
        .find_where(|name| name.contains("albumin") && !is_ratio(name))
        .and_then(Parameter::value_f64)?;

    let globulin = match data.find_where(|name| {
        name.contains("globulin") && !is_ratio(name) && !is_fraction(name)
    }) {
        Some(param) => param.value_f64(),
        None => data
            .find_any(&["Białko całkowite", "Total Protein"])
            .and_then(Parameter::value_f64)
            .map(|total| total - albumin),
    }?;

    (globulin > 0.0).then(|| albumin / globulin)
}

/// Reviews common biochemistry and haematology values for FIP-related deviations.
#[must_use]
pub fn analyze_lab_data(data: &LabData) -> LabAnalysis {
    let mut analysis = LabAnalysis::default();
    let mut consultation_needed = false;
    let mut specialist: Option<Specialist> = None;

    if let Some(ratio) = ag_ratio(data) {
        if ratio < 0.6 {
            analysis.findings.push(LabFinding::AgRatioLow(ratio));
        } else if ratio < 0.8 {
            analysis.findings.push(LabFinding::AgRatioModerate(ratio));
        }
    }

    if let Some((gamma, max)) = data.find("Gamma").and_then(Parameter::value_and_max) {
        if gamma > max {
            analysis.findings.push(LabFinding::Hypergammaglobulinemia);
        }
    }

    if let Some(alt) = data.find_any(&["ALT", "AlAT"]) {
        if let Some((value, max)) = alt.value_and_max() {
            if value > max {
                let fold = if max > 0.0 { value / max } else { f64::INFINITY };
                let unit = alt.unit.clone();
                if fold <= 2.0 {
                    analysis.findings.push(LabFinding::AltMild { value, unit });
                    analysis.supplements.push(Supplement::HepatialeForte);
                } else {
                    analysis.findings.push(LabFinding::AltSevere { value, unit });
                    analysis.supplements.push(Supplement::HepatialeForteAdvanced);
                    consultation_needed = true;
                    specialist = Some(Specialist::Hepatologist);
                }
            }
        }
    }

    if let Some(bili) = data.find_any(&["Bilirubina", "Bilirubin"]) {
        if let Some((value, max)) = bili.value_and_max() {
            if value > max {
                analysis.findings.push(LabFinding::BilirubinHigh {
                    value,
                    unit: bili.unit.clone(),
                });
                if value / max > 2.0 {
                    consultation_needed = true;
                    specialist.get_or_insert(Specialist::Internist);
                }
            }
        }
    }

    if let Some(wbc) = data.find_any(&["Leukocyty", "WBC"]) {
        if let Some(value) = wbc.value_f64() {
            if wbc.max_f64().is_some_and(|max| value > max) {
                analysis.findings.push(LabFinding::Leukocytosis(value));
            } else if wbc.min_f64().is_some_and(|min| value < min) {
                analysis.findings.push(LabFinding::Leukopenia(value));
            }
        }
    }

    if let (Some(neut), Some(lymph)) = (data.find("Neutro"), data.find("Limfocy")) {
        let neutrophilia = neut.value_and_max().is_some_and(|(v, max)| v > max);
        let lymphopenia = lymph.value_and_min().is_some_and(|(v, min)| v < min);
        if neutrophilia && lymphopenia {
            analysis.findings.push(LabFinding::StressLeukogram);
        }
    }

    if let Some((value, min)) = data
        .find_any(&["Hematokryt", "HCT"])
        .and_then(Parameter::value_and_min)
    {
        if value < min {
            analysis.findings.push(LabFinding::Anemia(value));
        }
    }

    if let Some(finding) = fcov_finding(data) {
        analysis.findings.push(finding);
    }

    if analysis.findings.is_empty() {
        analysis.findings.push(LabFinding::ResultsNormal);
    } else if analysis.findings.iter().any(LabFinding::mentions_fip) {
        analysis.findings.push(LabFinding::DisclaimerOtherDiseases);
    }

    analysis.consultation = match (consultation_needed, specialist) {
        (false, _) => Consultation::None,
        (true, Some(kind)) => Consultation::Specialist(kind),
        (true, None) => Consultation::General,
    };

    debug!(
        findings = analysis.findings.len(),
        consultation = ?analysis.consultation,
        "lab analysis"
    );
    analysis
}

/// Parameters whose value lies outside their reference range, in report order.
///
/// Parameters without a range are skipped. A range with only a lower bound is
/// treated as `min..=min`. A value or bound that does not parse never counts as abnormal.
#[must_use]
pub fn abnormal_results(data: &LabData) -> Vec<&Parameter> {
    data.parameters
        .iter()
        .filter(|param| is_out_of_range(param))
        .collect()
}

fn is_out_of_range(param: &Parameter) -> bool {
    if param.range_min.is_none() && param.range_max.is_none() {
        return false;
    }
    let Some(value) = param.value_f64() else {
        return false;
    };

    let min = param.min_f64();
    let max = if param.range_max.is_some() {
        param.max_f64()
    } else {
        min
    };
    min.is_some_and(|min| value < min) || max.is_some_and(|max| value > max)
}

fn fcov_finding(data: &LabData) -> Option<LabFinding> {
    let fcov = data.find_where(|name| name.contains("fcov") && name.contains("elisa"))?;
    let value = fcov.value.trim();
    if value.is_empty() {
        return None;
    }

    // Some labs put the verdict in the reference column.
    let verdict = format!("{}{}", fcov.range_max.as_deref().unwrap_or_default(), value).to_lowercase();
    let positive = ["dodatni", "pozytywny", "positive"]
        .iter()
        .any(|word| verdict.contains(word));
    let negative = ["ujemny", "negatywny", "negative"]
        .iter()
        .any(|word| verdict.contains(word));

    let finding = if positive {
        LabFinding::FcovPositive
    } else if negative {
        LabFinding::FcovNegative
    } else if let Some((_, titer)) = value.rsplit_once(':') {
        match to_number(titer) {
            Some(t) if t >= 400.0 => LabFinding::FcovTiterHigh(value.to_owned()),
            Some(t) if t >= 100.0 => LabFinding::FcovTiterModerate(value.to_owned()),
            Some(_) => LabFinding::FcovTiterLow(value.to_owned()),
            None => LabFinding::FcovResult(value.to_owned()),
        }
    } else {
        LabFinding::FcovResult(value.to_owned())
    };
    Some(finding)
}
