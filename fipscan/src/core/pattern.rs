// src/core/pattern.rs
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

use crate::models::{LabData, Parameter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
}

/// Single-parameter abnormality. Declaration order is reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Pattern {
    Hyperglobulinemia,
    Hypoalbuminemia,
    Lymphopenia,
    Neutrophilia,
    Anemia,
    Hyperbilirubinemia,
    LiverEnzymes,
    Azotemia,
    Thrombocytopenia,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Combination {
    ClassicTriad,
    Inflammatory,
    Wasting,
    Hepatic,
    Renal,
    Hematologic,
    StressLeukogram,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FipProfile {
    InflammatoryAcute,
    InflammatoryChronic,
    EffusiveClassic,
    DryNeurological,
    MixedPattern,
    Atypical,
    NonFip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyFinding {
    ClassicTriad,
    StressLeukogram,
    SevereHyperglobulinemia,
    SevereHypoalbuminemia,
    SevereLymphopenia,
    SevereAnemia,
    LiverInvolvement,
    RenalInvolvement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suggestion {
    UrgentConsult,
    UltrasoundRivalta,
    GsImmediate,
    QuickConsult,
    Imaging,
    GsSupport,
    NeuroConsult,
    MriCt,
    GsNeuroDose,
    ComplexDiagnostics,
    ComprehensiveImaging,
    DifferentialDiagnosis,
    RepeatTests,
    FipUnlikely,
    SearchOtherCauses,
    Monitor,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PatternAnalysis {
    pub primary: FipProfile,
    pub secondary: Option<FipProfile>,
    /// Pattern strength in percent, `0.0..=100.0`.
    pub strength: f32,
    pub patterns: BTreeMap<Pattern, Severity>,
    pub combinations: BTreeSet<Combination>,
    pub findings: Vec<KeyFinding>,
    pub suggestions: Vec<Suggestion>,
}

impl PatternAnalysis {
    #[must_use]
    pub fn has(&self, combination: Combination) -> bool {
        self.combinations.contains(&combination)
    }

    #[must_use]
    pub fn severe_count(&self) -> usize {
        self.patterns
            .values()
            .filter(|s| **s == Severity::Severe)
            .count()
    }
}

/// Classifies a lab panel into a FIP presentation profile.
///
/// Single abnormalities are graded first, then grouped into clinically
/// meaningful combinations which drive the profile and its strength.
#[must_use]
pub fn analyze_parameter_patterns(data: &LabData) -> PatternAnalysis {
    let patterns = detect_basic_patterns(data);
    let combinations = identify_combinations(&patterns);
    let (primary, secondary) = determine_profiles(&combinations);
    let strength = calculate_pattern_strength(&combinations, primary);
    let findings = key_findings(&patterns, &combinations);
    let suggestions = management_suggestions(primary, strength);

    debug!(?primary, ?secondary, strength, "pattern analysis");

    PatternAnalysis {
        primary,
        secondary,
        strength,
        patterns,
        combinations,
        findings,
        suggestions,
    }
}

/// Grades how far above `max` a value lies. Thresholds are multiples of `max`.
fn grade_high(value: f64, max: f64, severe: f64, moderate: f64) -> Option<Severity> {
    if value <= max {
        None
    } else if value > max * severe {
        Some(Severity::Severe)
    } else if value > max * moderate {
        Some(Severity::Moderate)
    } else {
        Some(Severity::Mild)
    }
}

/// Grades a value below `min` against absolute thresholds.
fn grade_low(value: f64, min: f64, severe: f64, moderate: f64) -> Option<Severity> {
    if value >= min {
        None
    } else if value < severe {
        Some(Severity::Severe)
    } else if value < moderate {
        Some(Severity::Moderate)
    } else {
        Some(Severity::Mild)
    }
}

fn high(data: &LabData, needle: &str, severe: f64, moderate: f64) -> Option<Severity> {
    let (value, max) = data.find(needle)?.value_and_max()?;
    grade_high(value, max, severe, moderate)
}

fn absolute_count(name: &str, needle: &str) -> bool {
    name.contains(needle) && !name.contains('%')
}

fn detect_basic_patterns(data: &LabData) -> BTreeMap<Pattern, Severity> {
    let mut patterns = BTreeMap::new();

    let low_relative = |param: Option<&Parameter>, severe: f64, moderate: f64| {
        let (value, min) = param?.value_and_min()?;
        grade_low(value, min, min * severe, min * moderate)
    };
    let low_absolute = |param: Option<&Parameter>, severe: f64, moderate: f64| {
        let (value, min) = param?.value_and_min()?;
        grade_low(value, min, severe, moderate)
    };

    let detected = [
        (Pattern::Hyperglobulinemia, high(data, "Globulin", 2.0, 1.5)),
        (
            Pattern::Hypoalbuminemia,
            low_relative(data.find("Albumin"), 0.5, 0.75),
        ),
        (
            Pattern::Lymphopenia,
            low_relative(data.find_where(|n| absolute_count(n, "lym")), 0.3, 0.6),
        ),
        (
            Pattern::Neutrophilia,
            data.find_where(|n| absolute_count(n, "neu"))
                .and_then(Parameter::value_and_max)
                .and_then(|(value, max)| grade_high(value, max, 1.5, 1.25)),
        ),
        (Pattern::Anemia, low_absolute(data.find("HCT"), 0.2, 0.25)),
        (
            Pattern::Hyperbilirubinemia,
            high(data, "Bilirubina", 3.0, 2.0),
        ),
        (Pattern::LiverEnzymes, high(data, "ALT", 3.0, 2.0)),
        (Pattern::Azotemia, azotemia(data)),
        (
            Pattern::Thrombocytopenia,
            low_absolute(data.find("PLT"), 50.0, 100.0),
        ),
    ];

    for (pattern, severity) in detected {
        if let Some(severity) = severity {
            patterns.insert(pattern, severity);
        }
    }
    patterns
}

/// Urea and creatinine together; either one above its limit means azotemia.
fn azotemia(data: &LabData) -> Option<Severity> {
    let read = |needle: &str| {
        data.find(needle).map(|param| {
            (
                param.value_f64().unwrap_or(0.0),
                param.max_f64().unwrap_or(999.0),
            )
        })
    };

    let mut azotemia = false;
    let mut severity = Severity::Mild;

    if let Some((value, max)) = read("Mocznik") {
        if value > max {
            azotemia = true;
            if value > max * 2.0 {
                severity = Severity::Severe;
            } else if value > max * 1.5 {
                severity = Severity::Moderate;
            }
        }
    }

    if let Some((value, max)) = read("Kreatynina") {
        if value > max {
            azotemia = true;
            if value > max * 2.0 {
                severity = Severity::Severe;
            } else if value > max * 1.5 && severity == Severity::Mild {
                severity = Severity::Moderate;
            }
        }
    }

    azotemia.then_some(severity)
}

fn identify_combinations(patterns: &BTreeMap<Pattern, Severity>) -> BTreeSet<Combination> {
    let has = |p: Pattern| patterns.contains_key(&p);
    let severe = |p: Pattern| patterns.get(&p) == Some(&Severity::Severe);

    let rules = [
        (
            Combination::ClassicTriad,
            has(Pattern::Hyperglobulinemia) && has(Pattern::Hypoalbuminemia) && has(Pattern::Lymphopenia),
        ),
        (
            Combination::Inflammatory,
            has(Pattern::Hyperglobulinemia) && has(Pattern::Neutrophilia),
        ),
        (
            Combination::Wasting,
            has(Pattern::Hypoalbuminemia)
                && has(Pattern::Anemia)
                && (severe(Pattern::Hypoalbuminemia) || severe(Pattern::Anemia)),
        ),
        (
            Combination::Hepatic,
            has(Pattern::Hyperbilirubinemia) || has(Pattern::LiverEnzymes),
        ),
        (Combination::Renal, has(Pattern::Azotemia)),
        (
            Combination::Hematologic,
            (has(Pattern::Anemia) || has(Pattern::Thrombocytopenia)) && has(Pattern::Lymphopenia),
        ),
        (
            Combination::StressLeukogram,
            has(Pattern::Neutrophilia) && has(Pattern::Lymphopenia),
        ),
    ];

    rules
        .into_iter()
        .filter_map(|(combination, present)| present.then_some(combination))
        .collect()
}

fn determine_profiles(combinations: &BTreeSet<Combination>) -> (FipProfile, Option<FipProfile>) {
    let has = |c: Combination| combinations.contains(&c);
    let count = combinations.len();
    let triad = has(Combination::ClassicTriad);

    let candidates = [
        (
            triad && has(Combination::Inflammatory),
            FipProfile::InflammatoryAcute,
            85_u8,
        ),
        (
            triad && has(Combination::Wasting),
            FipProfile::InflammatoryChronic,
            80,
        ),
        (
            triad && has(Combination::Hepatic),
            FipProfile::EffusiveClassic,
            90,
        ),
        (
            has(Combination::Inflammatory)
                && !has(Combination::Hepatic)
                && has(Combination::StressLeukogram),
            FipProfile::DryNeurological,
            70,
        ),
        (count >= 4, FipProfile::MixedPattern, 75),
        (!triad && count >= 2, FipProfile::Atypical, 60),
        (count < 2, FipProfile::NonFip, 90),
    ];

    let mut profiles: Vec<(FipProfile, u8)> = candidates
        .into_iter()
        .filter(|(applies, _, _)| *applies)
        .map(|(_, profile, score)| (profile, score))
        .collect();
    // Stable: equal scores keep rule order.
    profiles.sort_by(|a, b| b.1.cmp(&a.1));

    let primary = profiles.first().map_or(FipProfile::NonFip, |(p, _)| *p);
    let secondary = profiles
        .get(1)
        .filter(|(_, score)| *score > 50)
        .map(|(p, _)| *p);
    (primary, secondary)
}

fn calculate_pattern_strength(combinations: &BTreeSet<Combination>, profile: FipProfile) -> f32 {
    let base: f32 = match profile {
        FipProfile::InflammatoryAcute => 80.0,
        FipProfile::InflammatoryChronic => 75.0,
        FipProfile::EffusiveClassic => 85.0,
        FipProfile::DryNeurological => 70.0,
        FipProfile::MixedPattern => 65.0,
        FipProfile::Atypical => 50.0,
        FipProfile::NonFip => 20.0,
    };

    let triad = combinations.contains(&Combination::ClassicTriad);
    let mut modifier = 0.0_f32;
    if triad {
        modifier += 15.0;
    }
    if combinations.contains(&Combination::StressLeukogram) {
        modifier += 10.0;
    }
    if combinations.contains(&Combination::Inflammatory) {
        modifier += 5.0;
    }
    if !triad && profile != FipProfile::NonFip {
        modifier -= 20.0;
    }

    ((base + modifier) * 2.75).clamp(0.0, 100.0)
}

fn key_findings(
    patterns: &BTreeMap<Pattern, Severity>,
    combinations: &BTreeSet<Combination>,
) -> Vec<KeyFinding> {
    let mut findings = Vec::new();

    if combinations.contains(&Combination::ClassicTriad) {
        findings.push(KeyFinding::ClassicTriad);
    }
    if combinations.contains(&Combination::StressLeukogram) {
        findings.push(KeyFinding::StressLeukogram);
    }

    for (pattern, severity) in patterns {
        if *severity != Severity::Severe {
            continue;
        }
        let finding = match pattern {
            Pattern::Hyperglobulinemia => KeyFinding::SevereHyperglobulinemia,
            Pattern::Hypoalbuminemia => KeyFinding::SevereHypoalbuminemia,
            Pattern::Lymphopenia => KeyFinding::SevereLymphopenia,
            Pattern::Anemia => KeyFinding::SevereAnemia,
            _ => continue,
        };
        findings.push(finding);
    }

    if combinations.contains(&Combination::Hepatic) {
        findings.push(KeyFinding::LiverInvolvement);
    }
    if combinations.contains(&Combination::Renal) {
        findings.push(KeyFinding::RenalInvolvement);
    }

    findings
}

fn management_suggestions(profile: FipProfile, strength: f32) -> Vec<Suggestion> {
    let mut suggestions = match profile {
        FipProfile::InflammatoryAcute | FipProfile::EffusiveClassic => vec![
            Suggestion::UrgentConsult,
            Suggestion::UltrasoundRivalta,
            Suggestion::GsImmediate,
        ],
        FipProfile::InflammatoryChronic => vec![
            Suggestion::QuickConsult,
            Suggestion::Imaging,
            Suggestion::GsSupport,
        ],
        FipProfile::DryNeurological => vec![
            Suggestion::NeuroConsult,
            Suggestion::MriCt,
            Suggestion::GsNeuroDose,
        ],
        FipProfile::MixedPattern => vec![
            Suggestion::ComplexDiagnostics,
            Suggestion::ComprehensiveImaging,
        ],
        FipProfile::Atypical => vec![Suggestion::DifferentialDiagnosis, Suggestion::RepeatTests],
        FipProfile::NonFip => vec![Suggestion::FipUnlikely, Suggestion::SearchOtherCauses],
    };

    if strength >= 70.0 && profile != FipProfile::NonFip {
        suggestions.push(Suggestion::Monitor);
    }
    suggestions
}
