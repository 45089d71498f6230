// tests/integration_tests/ratio_test.rs
use fipscan::{Language, RatioResult, compute, messages};

#[test]
fn test_ratio_outcomes() {
    assert_eq!(compute("4.9", "7.0").ratio().map(|r| (r * 100.0).round()), Some(70.0));
    assert_eq!(compute("3", "0"), RatioResult::DivisionByZero);
    assert_eq!(compute("", "2"), RatioResult::InvalidInput);
    assert_eq!(compute("abc", "0"), RatioResult::InvalidInput);
}

#[test]
fn test_ratio_rendering_in_both_languages() {
    let result = compute("2.8", "4.0");
    assert_eq!(messages::ratio(&result, Language::Pl), "Stosunek A/G: 0,70");
    assert_eq!(messages::ratio(&result, Language::En), "A/G ratio: 0.70");
    assert_eq!(
        messages::ratio(&compute("1", "0"), Language::En),
        "Globulins cannot be 0."
    );
}
