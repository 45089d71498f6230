// tests/integration_tests/analysis_test.rs
use super::common::{FIP_REPORT, NORMAL_REPORT};
use fipscan::core::lab::{Consultation, Specialist, Supplement};
use fipscan::core::pattern::{Combination, Pattern};
use fipscan::models::{Gammopathy, RivaltaStatus};
use fipscan::{
    FipProfile, LabFinding, RiskLevel, ag_ratio, analyze_lab_data, analyze_parameter_patterns,
    assess_fip_risk, parse_lab_results,
};

fn lines(report: &str) -> Vec<&str> {
    report.lines().collect()
}

#[test]
fn test_lab_analysis_of_fip_report() {
    let data = parse_lab_results(&lines(FIP_REPORT));
    let analysis = analyze_lab_data(&data);

    let ratio = ag_ratio(&data).unwrap();
    assert!((ratio - 2.1 / 6.2).abs() < 1e-9);

    assert!(matches!(analysis.findings[0], LabFinding::AgRatioLow(_)));
    assert!(analysis.findings.contains(&LabFinding::Hypergammaglobulinemia));
    assert!(analysis.findings.contains(&LabFinding::Anemia(24.0)));
    assert_eq!(analysis.findings.last(), Some(&LabFinding::DisclaimerOtherDiseases));
    assert_eq!(analysis.supplements, vec![Supplement::HepatialeForte]);
    assert_eq!(
        analysis.consultation,
        Consultation::Specialist(Specialist::Internist)
    );
}

#[test]
fn test_lab_analysis_of_normal_report() {
    let data = parse_lab_results(&lines(NORMAL_REPORT));
    let analysis = analyze_lab_data(&data);

    assert_eq!(analysis.findings, vec![LabFinding::ResultsNormal]);
    assert!(analysis.supplements.is_empty());
    assert_eq!(analysis.consultation, Consultation::None);
}

#[test]
fn test_pattern_analysis_of_fip_report() {
    let data = parse_lab_results(&lines(FIP_REPORT));
    let patterns = analyze_parameter_patterns(&data);

    assert!(patterns.patterns.contains_key(&Pattern::Hyperglobulinemia));
    assert!(patterns.patterns.contains_key(&Pattern::Hypoalbuminemia));
    assert!(patterns.patterns.contains_key(&Pattern::Lymphopenia));
    assert!(patterns.has(Combination::ClassicTriad));
    assert_ne!(patterns.primary, FipProfile::NonFip);
    assert!(patterns.strength > 50.0);
}

#[test]
fn test_pattern_analysis_of_normal_report() {
    let data = parse_lab_results(&lines(NORMAL_REPORT));
    let patterns = analyze_parameter_patterns(&data);

    assert!(patterns.patterns.is_empty());
    assert_eq!(patterns.primary, FipProfile::NonFip);
}

#[test]
fn test_risk_from_report() {
    let data = parse_lab_results(&lines(FIP_REPORT));

    let high = assess_fip_risk(&data, RivaltaStatus::Positive, Gammopathy::Polyclonal);
    assert_eq!(high.percentage, 100);
    assert_eq!(high.level, RiskLevel::High);

    let normal = parse_lab_results(&lines(NORMAL_REPORT));
    let low = assess_fip_risk(&normal, RivaltaStatus::Negative, Gammopathy::None);
    assert!(low.percentage < 20, "got {}%", low.percentage);
    assert_eq!(low.level, RiskLevel::Low);
}
