// src/core/risk.rs
use tracing::debug;

use crate::core::lab::ag_ratio;
use crate::models::{Gammopathy, LabData, Parameter, RivaltaStatus};

// Weights in tenths, scores in halves; the percentage is taken from the exact integer sum.
const WEIGHT_RIVALTA: u32 = 6;
const WEIGHT_GAMMOPATHY: u32 = 4;
const WEIGHT_AG_RATIO: u32 = 3;
const WEIGHT_GAMMA: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    #[must_use]
    pub const fn from_percentage(percentage: u8) -> Self {
        match percentage {
            70.. => Self::High,
            30..=69 => Self::Medium,
            _ => Self::Low,
        }
    }

    /// Display colour for the level, as an HTML hex triplet.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::High => "#FF0000",
            Self::Medium => "#FFA500",
            Self::Low => "#00FF00",
        }
    }

    #[must_use]
    pub const fn needs_consultation(self) -> bool {
        matches!(self, Self::High | Self::Medium)
    }
}

/// Where the A/G ratio falls relative to the FIP cut-offs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgBand {
    VeryLow,
    Lowered,
    Normal,
}

impl AgBand {
    #[must_use]
    pub fn classify(ratio: f64) -> Self {
        if ratio < 0.6 {
            Self::VeryLow
        } else if ratio < 0.8 {
            Self::Lowered
        } else {
            Self::Normal
        }
    }

    const fn score(self) -> u32 {
        match self {
            Self::VeryLow => 2,
            Self::Lowered => 1,
            Self::Normal => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RiskComment {
    AgRatio { ratio: f64, band: AgBand },
    GammaElevated,
    GammaNormal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FipRisk {
    pub percentage: u8,
    pub level: RiskLevel,
    pub rivalta: RivaltaStatus,
    pub gammopathy: Gammopathy,
    pub comments: Vec<RiskComment>,
}

/// Weighted FIP likelihood from protein electrophoresis and the Rivalta test.
///
/// Rivalta and gammopathy always contribute; the A/G ratio and gamma fraction
/// contribute only when the report contains them.
#[must_use]
pub fn assess_fip_risk(data: &LabData, rivalta: RivaltaStatus, gammopathy: Gammopathy) -> FipRisk {
    let mut comments = Vec::new();
    let mut weighted_sum = 0;
    let mut total_weight = 0;

    let rivalta_score = match rivalta {
        RivaltaStatus::Positive => 2,
        RivaltaStatus::Negative => 0,
        RivaltaStatus::NotPerformed => 1,
    };
    weighted_sum += rivalta_score * WEIGHT_RIVALTA;
    total_weight += WEIGHT_RIVALTA;

    let gammopathy_score = match gammopathy {
        Gammopathy::Polyclonal => 2,
        Gammopathy::Monoclonal => 0,
        Gammopathy::None => 1,
    };
    weighted_sum += gammopathy_score * WEIGHT_GAMMOPATHY;
    total_weight += WEIGHT_GAMMOPATHY;

    if let Some(ratio) = ag_ratio(data) {
        let band = AgBand::classify(ratio);
        comments.push(RiskComment::AgRatio { ratio, band });
        weighted_sum += band.score() * WEIGHT_AG_RATIO;
        total_weight += WEIGHT_AG_RATIO;
    }

    if let Some((gamma, max)) = data.find("Gamma").and_then(Parameter::value_and_max) {
        let elevated = gamma > max;
        comments.push(if elevated {
            RiskComment::GammaElevated
        } else {
            RiskComment::GammaNormal
        });
        weighted_sum += if elevated { 2 * WEIGHT_GAMMA } else { 0 };
        total_weight += WEIGHT_GAMMA;
    }

    let percentage = to_percentage(weighted_sum, total_weight);
    let level = RiskLevel::from_percentage(percentage);
    debug!(percentage, ?level, %rivalta, ?gammopathy, "fip risk");

    FipRisk {
        percentage,
        level,
        rivalta,
        gammopathy,
        comments,
    }
}

/// `floor(sum / (2 * weight) * 100)`, with `sum` in half-points.
fn to_percentage(weighted_sum: u32, total_weight: u32) -> u8 {
    let percentage = (weighted_sum * 100) / (total_weight * 2).max(1);
    u8::try_from(percentage.min(100)).unwrap_or(100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_high_risk() {
        let data = LabData::new()
            .with(Parameter::new("Globulin", "6.0").with_range(None, Some("4.5")))
            .with(Parameter::new("Stosunek A/G", "0.35"))
            .with(Parameter::new("Bilirubina", "2.0").with_range(None, Some("0.5")));
        let gammopathy = Gammopathy::from_description("Polyclonal gammopathy detected");

        let risk = assess_fip_risk(&data, RivaltaStatus::Positive, gammopathy);

        assert!(risk.percentage >= 75, "got {}%", risk.percentage);
        assert_eq!(risk.level, RiskLevel::High);
        assert_eq!(
            risk.comments,
            vec![RiskComment::AgRatio { ratio: 0.35, band: AgBand::VeryLow }]
        );
    }

    #[test]
    fn test_low_risk() {
        let data = LabData::new()
            .with(Parameter::new("Globulin", "3.0").with_range(None, Some("4.5")))
            .with(Parameter::new("Stosunek A/G", "0.9"));
        let gammopathy = Gammopathy::from_description("No gammopathy");

        let risk = assess_fip_risk(&data, RivaltaStatus::Negative, gammopathy);

        // 0.5 * 0.4 / (0.6 + 0.4 + 0.3)
        assert_eq!(risk.percentage, 15);
        assert_eq!(risk.level, RiskLevel::Low);
        assert!(!risk.level.needs_consultation());
    }

    #[test]
    fn test_gamma_fraction_contributes() {
        let data = LabData::new()
            .with(Parameter::new("Gamma-globuliny", "2.5").with_range(Some("0.5"), Some("1.5")));

        let risk = assess_fip_risk(&data, RivaltaStatus::NotPerformed, Gammopathy::None);

        // (0.3 + 0.2 + 0.2) / 1.2
        assert_eq!(risk.percentage, 58);
        assert_eq!(risk.level, RiskLevel::Medium);
        assert_eq!(risk.comments, vec![RiskComment::GammaElevated]);
    }

    #[test]
    fn test_exact_ninety_is_not_rounded_down() {
        let data = LabData::new()
            .with(Parameter::new("Stosunek A/G", "0.7"))
            .with(Parameter::new("Gamma-globuliny", "3.0").with_range(Some("0.7"), Some("1.9")));

        let risk = assess_fip_risk(&data, RivaltaStatus::Positive, Gammopathy::Polyclonal);

        // (0.6 + 0.4 + 0.15 + 0.2) / 1.5
        assert_eq!(risk.percentage, 90);
        assert_eq!(risk.level, RiskLevel::High);
    }

    #[test]
    fn test_levels_and_colors() {
        assert_eq!(RiskLevel::from_percentage(100), RiskLevel::High);
        assert_eq!(RiskLevel::from_percentage(70), RiskLevel::High);
        assert_eq!(RiskLevel::from_percentage(69), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_percentage(30), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_percentage(29), RiskLevel::Low);
        assert_eq!(RiskLevel::High.color(), "#FF0000");
        assert_eq!(RiskLevel::Low.color(), "#00FF00");
    }

    #[test]
    fn test_monoclonal_negative_is_zero() {
        let risk = assess_fip_risk(&LabData::new(), RivaltaStatus::Negative, Gammopathy::Monoclonal);
        assert_eq!(risk.percentage, 0);
        assert!(risk.comments.is_empty());
    }
}
