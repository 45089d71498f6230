// src/messages.rs
//! Display text for every domain outcome, in Polish and English.
use clap::ValueEnum;
use serde::Deserialize;

use crate::core::lab::{Consultation, LabFinding, Specialist, Supplement};
use crate::core::pattern::{Combination, FipProfile, KeyFinding, PatternAnalysis, Suggestion};
use crate::core::ratio::RatioResult;
use crate::core::risk::{AgBand, FipRisk, RiskComment, RiskLevel};
use crate::models::Parameter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Pl,
    En,
}

/// Section titles used by the CLI output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    Patient,
    CollectionDate,
    Results,
    LabComments,
    Supplements,
    Consultation,
    Profile,
    Strength,
    KeyFindings,
    Suggestions,
    FurtherTests,
    Records,
    Abnormal,
    Colour,
}

/// Formats a decimal with a fixed number of places, using a decimal comma for Polish.
#[must_use]
pub fn decimal(value: f64, places: usize, lang: Language) -> String {
    let text = format!("{value:.places$}");
    match lang {
        Language::Pl => text.replace('.', ","),
        Language::En => text,
    }
}

#[must_use]
pub const fn heading(heading: Heading, lang: Language) -> &'static str {
    match (heading, lang) {
        (Heading::Patient, Language::Pl) => "Pacjent",
        (Heading::Patient, Language::En) => "Patient",
        (Heading::CollectionDate, Language::Pl) => "Data pobrania materiału",
        (Heading::CollectionDate, Language::En) => "Sample collected",
        (Heading::Results, Language::Pl) => "Wyniki",
        (Heading::Results, Language::En) => "Results",
        (Heading::LabComments, Language::Pl) => "Komentarz diagnostyczny",
        (Heading::LabComments, Language::En) => "Diagnostic comment",
        (Heading::Supplements, Language::Pl) => "Suplementy",
        (Heading::Supplements, Language::En) => "Supplements",
        (Heading::Consultation, Language::Pl) => "Konsultacja",
        (Heading::Consultation, Language::En) => "Consultation",
        (Heading::Profile, Language::Pl) => "Profil",
        (Heading::Profile, Language::En) => "Profile",
        (Heading::Strength, Language::Pl) => "Siła wzorca",
        (Heading::Strength, Language::En) => "Pattern strength",
        (Heading::KeyFindings, Language::Pl) => "Kluczowe obserwacje",
        (Heading::KeyFindings, Language::En) => "Key findings",
        (Heading::Suggestions, Language::Pl) => "Zalecenia",
        (Heading::Suggestions, Language::En) => "Suggestions",
        (Heading::FurtherTests, Language::Pl) => "Dalsze badania",
        (Heading::FurtherTests, Language::En) => "Further tests",
        (Heading::Records, Language::Pl) => "Koty",
        (Heading::Records, Language::En) => "Cats",
        (Heading::Abnormal, Language::Pl) => "Wyniki poza normą",
        (Heading::Abnormal, Language::En) => "Results out of range",
        (Heading::Colour, Language::Pl) => "Kolor",
        (Heading::Colour, Language::En) => "Colour",
    }
}

#[must_use]
pub fn ratio(result: &RatioResult, lang: Language) -> String {
    match (result, lang) {
        (RatioResult::Success { ratio }, Language::Pl) => {
            format!("Stosunek A/G: {}", decimal(*ratio, 2, lang))
        }
        (RatioResult::Success { ratio }, Language::En) => {
            format!("A/G ratio: {}", decimal(*ratio, 2, lang))
        }
        (RatioResult::InvalidInput, Language::Pl) => String::from("Nieprawidłowe wartości."),
        (RatioResult::InvalidInput, Language::En) => String::from("Invalid values."),
        (RatioResult::DivisionByZero, Language::Pl) => {
            String::from("Globuliny nie mogą być równe 0.")
        }
        (RatioResult::DivisionByZero, Language::En) => String::from("Globulins cannot be 0."),
    }
}

#[must_use]
pub const fn no_contact(lang: Language) -> &'static str {
    match lang {
        Language::Pl => "Brak skonfigurowanych danych kontaktowych.",
        Language::En => "No contact details configured.",
    }
}

#[must_use]
pub const fn no_reports(lang: Language) -> &'static str {
    match lang {
        Language::Pl => "Nie znaleziono plików z wynikami.",
        Language::En => "No report files found.",
    }
}

/// One out-of-range parameter, e.g. `Albuminy: 2.1 g/dl (norma: 2.6 - 4.0)`.
#[must_use]
pub fn abnormal_result(param: &Parameter, lang: Language) -> String {
    let min = param.range_min.as_deref().unwrap_or("-");
    let max = param.range_max.as_deref().unwrap_or(min);
    let label = match lang {
        Language::Pl => "norma",
        Language::En => "range",
    };
    let value = if param.unit.is_empty() {
        param.value.clone()
    } else {
        format!("{} {}", param.value, param.unit)
    };
    format!("{}: {value} ({label}: {min} - {max})", param.name)
}

#[must_use]
pub fn lab_finding(finding: &LabFinding, lang: Language) -> String {
    let one = |v: f64| decimal(v, 1, lang);
    let two = |v: f64| decimal(v, 2, lang);
    match lang {
        Language::Pl => match finding {
            LabFinding::AgRatioLow(r) => format!(
                "Stosunek A/G = {} jest bardzo niski (<0,6), co silnie wspiera podejrzenie FIP.",
                two(*r)
            ),
            LabFinding::AgRatioModerate(r) => format!(
                "Stosunek A/G = {} jest obniżony (<0,8); FIP jest możliwy, ale nie pewny.",
                two(*r)
            ),
            LabFinding::Hypergammaglobulinemia => String::from(
                "Hipergammaglobulinemia, często spotykana u kotów z FIP.",
            ),
            LabFinding::AltMild { value, unit } => {
                format!("Łagodnie podwyższone ALT ({} {unit}).", one(*value))
            }
            LabFinding::AltSevere { value, unit } => {
                format!("Znacznie podwyższone ALT ({} {unit}), możliwe uszkodzenie wątroby.", one(*value))
            }
            LabFinding::BilirubinHigh { value, unit } => {
                format!("Podwyższona bilirubina ({} {unit}).", one(*value))
            }
            LabFinding::Leukocytosis(v) => format!("Leukocytoza (WBC {}).", one(*v)),
            LabFinding::Leukopenia(v) => format!("Leukopenia (WBC {}).", one(*v)),
            LabFinding::StressLeukogram => String::from(
                "Neutrofilia z limfopenią, obraz leukogramu stresowego.",
            ),
            LabFinding::Anemia(v) => format!("Obniżony hematokryt ({}), możliwa anemia.", one(*v)),
            LabFinding::FcovPositive => String::from(
                "Dodatni wynik FCoV ELISA: kontakt z koronawirusem, ryzyko FIP.",
            ),
            LabFinding::FcovNegative => String::from("Ujemny wynik FCoV ELISA."),
            LabFinding::FcovTiterHigh(t) => {
                format!("Wysokie miano przeciwciał FCoV ({t}), wspiera podejrzenie FIP.")
            }
            LabFinding::FcovTiterModerate(t) => {
                format!("Umiarkowane miano przeciwciał FCoV ({t}), FIP możliwy.")
            }
            LabFinding::FcovTiterLow(t) => format!("Niskie miano przeciwciał FCoV ({t})."),
            LabFinding::FcovResult(t) => format!("Wynik FCoV ELISA: {t}."),
            LabFinding::ResultsNormal => String::from("Wyniki w granicach normy."),
            LabFinding::DisclaimerOtherDiseases => String::from(
                "Podobne zmiany mogą występować także w innych chorobach, nie tylko w FIP.",
            ),
        },
        Language::En => match finding {
            LabFinding::AgRatioLow(r) => format!(
                "A/G ratio = {} is very low (<0.6), strongly supporting suspicion of FIP.",
                two(*r)
            ),
            LabFinding::AgRatioModerate(r) => format!(
                "A/G ratio = {} is lowered (<0.8); FIP is possible but not certain.",
                two(*r)
            ),
            LabFinding::Hypergammaglobulinemia => {
                String::from("Hypergammaglobulinemia, frequently seen in cats with FIP.")
            }
            LabFinding::AltMild { value, unit } => {
                format!("Mildly elevated ALT ({} {unit}).", one(*value))
            }
            LabFinding::AltSevere { value, unit } => {
                format!("Markedly elevated ALT ({} {unit}), possible liver damage.", one(*value))
            }
            LabFinding::BilirubinHigh { value, unit } => {
                format!("Elevated bilirubin ({} {unit}).", one(*value))
            }
            LabFinding::Leukocytosis(v) => format!("Leukocytosis (WBC {}).", one(*v)),
            LabFinding::Leukopenia(v) => format!("Leukopenia (WBC {}).", one(*v)),
            LabFinding::StressLeukogram => {
                String::from("Neutrophilia with lymphopenia, a stress leukogram.")
            }
            LabFinding::Anemia(v) => format!("Low hematocrit ({}), possible anemia.", one(*v)),
            LabFinding::FcovPositive => {
                String::from("Positive FCoV ELISA: coronavirus exposure, FIP risk.")
            }
            LabFinding::FcovNegative => String::from("Negative FCoV ELISA."),
            LabFinding::FcovTiterHigh(t) => {
                format!("High FCoV antibody titer ({t}), supporting suspicion of FIP.")
            }
            LabFinding::FcovTiterModerate(t) => {
                format!("Moderate FCoV antibody titer ({t}), FIP possible.")
            }
            LabFinding::FcovTiterLow(t) => format!("Low FCoV antibody titer ({t})."),
            LabFinding::FcovResult(t) => format!("FCoV ELISA result: {t}."),
            LabFinding::ResultsNormal => String::from("Results within normal limits."),
            LabFinding::DisclaimerOtherDiseases => String::from(
                "Similar changes can occur in other diseases, not only FIP.",
            ),
        },
    }
}

#[must_use]
pub const fn supplement(supplement: Supplement, lang: Language) -> &'static str {
    match (supplement, lang) {
        (Supplement::HepatialeForte, Language::Pl) => "Hepatiale Forte (wsparcie wątroby)",
        (Supplement::HepatialeForte, Language::En) => "Hepatiale Forte (liver support)",
        (Supplement::HepatialeForteAdvanced, Language::Pl) => {
            "Hepatiale Forte Advanced (intensywne wsparcie wątroby)"
        }
        (Supplement::HepatialeForteAdvanced, Language::En) => {
            "Hepatiale Forte Advanced (intensive liver support)"
        }
    }
}

#[must_use]
pub const fn no_supplements(lang: Language) -> &'static str {
    match lang {
        Language::Pl => "Brak zaleceń dotyczących suplementacji.",
        Language::En => "No supplements recommended.",
    }
}

#[must_use]
pub fn consultation(consultation: Consultation, lang: Language) -> String {
    match (consultation, lang) {
        (Consultation::None, Language::Pl) => {
            String::from("Konsultacja weterynaryjna nie jest pilnie wymagana.")
        }
        (Consultation::None, Language::En) => {
            String::from("A veterinary consultation is not urgently required.")
        }
        (Consultation::General, Language::Pl) => {
            String::from("Zalecana konsultacja z lekarzem weterynarii.")
        }
        (Consultation::General, Language::En) => {
            String::from("A veterinary consultation is recommended.")
        }
        (Consultation::Specialist(kind), Language::Pl) => {
            format!("Zalecana konsultacja ze specjalistą: {}.", specialist(kind, lang))
        }
        (Consultation::Specialist(kind), Language::En) => {
            format!("A consultation with a specialist is recommended: {}.", specialist(kind, lang))
        }
    }
}

#[must_use]
pub const fn specialist(kind: Specialist, lang: Language) -> &'static str {
    match (kind, lang) {
        (Specialist::Hepatologist, Language::Pl) => "hepatolog",
        (Specialist::Hepatologist, Language::En) => "hepatologist",
        (Specialist::Internist, Language::Pl) => "internista",
        (Specialist::Internist, Language::En) => "internist",
    }
}

#[must_use]
pub const fn profile_name(profile: FipProfile, lang: Language) -> &'static str {
    match (profile, lang) {
        (FipProfile::InflammatoryAcute, Language::Pl) => "Ostra postać zapalna",
        (FipProfile::InflammatoryAcute, Language::En) => "Acute inflammatory",
        (FipProfile::InflammatoryChronic, Language::Pl) => "Przewlekła postać zapalna",
        (FipProfile::InflammatoryChronic, Language::En) => "Chronic inflammatory",
        (FipProfile::EffusiveClassic, Language::Pl) => "Postać wysiękowa (klasyczna)",
        (FipProfile::EffusiveClassic, Language::En) => "Effusive (classic)",
        (FipProfile::DryNeurological, Language::Pl) => "Postać sucha/neurologiczna",
        (FipProfile::DryNeurological, Language::En) => "Dry/neurological",
        (FipProfile::MixedPattern, Language::Pl) => "Obraz mieszany",
        (FipProfile::MixedPattern, Language::En) => "Mixed pattern",
        (FipProfile::Atypical, Language::Pl) => "Obraz atypowy",
        (FipProfile::Atypical, Language::En) => "Atypical",
        (FipProfile::NonFip, Language::Pl) => "Obraz nietypowy dla FIP",
        (FipProfile::NonFip, Language::En) => "Not typical for FIP",
    }
}

const fn profile_summary(profile: FipProfile, lang: Language) -> &'static str {
    match (profile, lang) {
        (FipProfile::InflammatoryAcute, Language::Pl) => {
            "Profil wskazuje na ostry, aktywny proces zapalny typowy dla FIP"
        }
        (FipProfile::InflammatoryAcute, Language::En) => {
            "The profile points to an acute, active inflammatory process typical for FIP"
        }
        (FipProfile::InflammatoryChronic, Language::Pl) => {
            "Profil wskazuje na przewlekły proces zapalny z wyniszczeniem"
        }
        (FipProfile::InflammatoryChronic, Language::En) => {
            "The profile points to a chronic inflammatory process with wasting"
        }
        (FipProfile::EffusiveClassic, Language::Pl) => {
            "Profil odpowiada klasycznej postaci wysiękowej FIP z zajęciem wątroby"
        }
        (FipProfile::EffusiveClassic, Language::En) => {
            "The profile matches classic effusive FIP with liver involvement"
        }
        (FipProfile::DryNeurological, Language::Pl) => {
            "Profil może odpowiadać suchej lub neurologicznej postaci FIP"
        }
        (FipProfile::DryNeurological, Language::En) => {
            "The profile may correspond to dry or neurological FIP"
        }
        (FipProfile::MixedPattern, Language::Pl) => {
            "Liczne nakładające się odchylenia tworzą obraz mieszany"
        }
        (FipProfile::MixedPattern, Language::En) => {
            "Several overlapping abnormalities form a mixed picture"
        }
        (FipProfile::Atypical, Language::Pl) => {
            "Odchylenia nie tworzą typowej triady FIP, obraz atypowy"
        }
        (FipProfile::Atypical, Language::En) => {
            "The abnormalities do not form the typical FIP triad, an atypical picture"
        }
        (FipProfile::NonFip, Language::Pl) => "Wyniki nie tworzą wzorca typowego dla FIP",
        (FipProfile::NonFip, Language::En) => "The results do not form a pattern typical for FIP",
    }
}

/// Narrative description of a pattern analysis, sentences joined by `". "`.
#[must_use]
pub fn profile_description(analysis: &PatternAnalysis, lang: Language) -> String {
    let mut parts = vec![profile_summary(analysis.primary, lang).to_owned()];

    if let Some(secondary) = analysis.secondary {
        let name = profile_name(secondary, lang).to_lowercase();
        parts.push(match lang {
            Language::Pl => format!("Widoczne także cechy: {name}"),
            Language::En => format!("Features of {name} are also present"),
        });
    }

    if analysis.has(Combination::ClassicTriad) {
        parts.push(
            match lang {
                Language::Pl => "Obecna klasyczna triada FIP",
                Language::En => "The classic FIP triad is present",
            }
            .to_owned(),
        );
    }

    let severe = analysis.severe_count();
    if severe > 0 {
        parts.push(match lang {
            Language::Pl => format!("Liczba ciężkich odchyleń: {severe}"),
            Language::En => format!("Severe abnormalities: {severe}"),
        });
    }

    parts.join(". ")
}

#[must_use]
pub const fn key_finding(finding: KeyFinding, lang: Language) -> &'static str {
    match (finding, lang) {
        (KeyFinding::ClassicTriad, Language::Pl) => {
            "Klasyczna triada: hiperglobulinemia, hipoalbuminemia, limfopenia"
        }
        (KeyFinding::ClassicTriad, Language::En) => {
            "Classic triad: hyperglobulinemia, hypoalbuminemia, lymphopenia"
        }
        (KeyFinding::StressLeukogram, Language::Pl) => "Leukogram stresowy",
        (KeyFinding::StressLeukogram, Language::En) => "Stress leukogram",
        (KeyFinding::SevereHyperglobulinemia, Language::Pl) => "Ciężka hiperglobulinemia",
        (KeyFinding::SevereHyperglobulinemia, Language::En) => "Severe hyperglobulinemia",
        (KeyFinding::SevereHypoalbuminemia, Language::Pl) => "Ciężka hipoalbuminemia",
        (KeyFinding::SevereHypoalbuminemia, Language::En) => "Severe hypoalbuminemia",
        (KeyFinding::SevereLymphopenia, Language::Pl) => "Ciężka limfopenia",
        (KeyFinding::SevereLymphopenia, Language::En) => "Severe lymphopenia",
        (KeyFinding::SevereAnemia, Language::Pl) => "Ciężka anemia",
        (KeyFinding::SevereAnemia, Language::En) => "Severe anemia",
        (KeyFinding::LiverInvolvement, Language::Pl) => "Zajęcie wątroby",
        (KeyFinding::LiverInvolvement, Language::En) => "Liver involvement",
        (KeyFinding::RenalInvolvement, Language::Pl) => "Zajęcie nerek",
        (KeyFinding::RenalInvolvement, Language::En) => "Renal involvement",
    }
}

#[must_use]
pub const fn suggestion(suggestion: Suggestion, lang: Language) -> &'static str {
    match (suggestion, lang) {
        (Suggestion::UrgentConsult, Language::Pl) => "Pilna konsultacja weterynaryjna",
        (Suggestion::UrgentConsult, Language::En) => "Urgent veterinary consultation",
        (Suggestion::UltrasoundRivalta, Language::Pl) => "USG jamy brzusznej i próba Rivalta",
        (Suggestion::UltrasoundRivalta, Language::En) => "Abdominal ultrasound and Rivalta test",
        (Suggestion::GsImmediate, Language::Pl) => "Rozważyć niezwłoczne leczenie (GS-441524)",
        (Suggestion::GsImmediate, Language::En) => "Consider immediate treatment (GS-441524)",
        (Suggestion::QuickConsult, Language::Pl) => "Konsultacja weterynaryjna w najbliższych dniach",
        (Suggestion::QuickConsult, Language::En) => "Veterinary consultation within days",
        (Suggestion::Imaging, Language::Pl) => "Badania obrazowe",
        (Suggestion::Imaging, Language::En) => "Diagnostic imaging",
        (Suggestion::GsSupport, Language::Pl) => "Leczenie GS-441524 z leczeniem wspomagającym",
        (Suggestion::GsSupport, Language::En) => "GS-441524 with supportive care",
        (Suggestion::NeuroConsult, Language::Pl) => "Konsultacja neurologiczna",
        (Suggestion::NeuroConsult, Language::En) => "Neurological consultation",
        (Suggestion::MriCt, Language::Pl) => "Rezonans magnetyczny lub tomografia",
        (Suggestion::MriCt, Language::En) => "MRI or CT scan",
        (Suggestion::GsNeuroDose, Language::Pl) => "Dawka neurologiczna GS-441524",
        (Suggestion::GsNeuroDose, Language::En) => "Neurological dose of GS-441524",
        (Suggestion::ComplexDiagnostics, Language::Pl) => "Kompleksowa diagnostyka",
        (Suggestion::ComplexDiagnostics, Language::En) => "Comprehensive diagnostics",
        (Suggestion::ComprehensiveImaging, Language::Pl) => "Pełne badania obrazowe",
        (Suggestion::ComprehensiveImaging, Language::En) => "Full diagnostic imaging",
        (Suggestion::DifferentialDiagnosis, Language::Pl) => "Diagnostyka różnicowa",
        (Suggestion::DifferentialDiagnosis, Language::En) => "Differential diagnosis",
        (Suggestion::RepeatTests, Language::Pl) => "Powtórzyć badania za 2-4 tygodnie",
        (Suggestion::RepeatTests, Language::En) => "Repeat tests in 2-4 weeks",
        (Suggestion::FipUnlikely, Language::Pl) => "FIP mało prawdopodobny",
        (Suggestion::FipUnlikely, Language::En) => "FIP unlikely",
        (Suggestion::SearchOtherCauses, Language::Pl) => "Szukać innych przyczyn odchyleń",
        (Suggestion::SearchOtherCauses, Language::En) => "Look for other causes of the abnormalities",
        (Suggestion::Monitor, Language::Pl) => "Regularne monitorowanie parametrów",
        (Suggestion::Monitor, Language::En) => "Regular monitoring of parameters",
    }
}

#[must_use]
pub fn risk_headline(risk: &FipRisk, lang: Language) -> String {
    let pct = risk.percentage;
    match (risk.level, lang) {
        (RiskLevel::High, Language::Pl) => format!("WYSOKIE RYZYKO FIP ({pct}%)"),
        (RiskLevel::High, Language::En) => format!("HIGH FIP RISK ({pct}%)"),
        (RiskLevel::Medium, Language::Pl) => format!("ŚREDNIE RYZYKO FIP ({pct}%)"),
        (RiskLevel::Medium, Language::En) => format!("MEDIUM FIP RISK ({pct}%)"),
        (RiskLevel::Low, Language::Pl) => format!("NISKIE RYZYKO FIP ({pct}%)"),
        (RiskLevel::Low, Language::En) => format!("LOW FIP RISK ({pct}%)"),
    }
}

#[must_use]
pub fn risk_comment(comment: &RiskComment, lang: Language) -> String {
    match (comment, lang) {
        (RiskComment::AgRatio { ratio, band }, Language::Pl) => {
            let tail = match band {
                AgBand::VeryLow => "bardzo niski (<0,6), co silnie wspiera podejrzenie FIP.",
                AgBand::Lowered => "obniżony (<0,8); może wskazywać na przewlekły stan zapalny.",
                AgBand::Normal => "w normie (>0,8), co obniża prawdopodobieństwo FIP.",
            };
            format!("Stosunek A/G = {}: {tail}", decimal(*ratio, 2, lang))
        }
        (RiskComment::AgRatio { ratio, band }, Language::En) => {
            let tail = match band {
                AgBand::VeryLow => "very low (<0.6), strongly supporting suspicion of FIP.",
                AgBand::Lowered => "lowered (<0.8); may indicate chronic inflammation.",
                AgBand::Normal => "normal (>0.8), lowering the likelihood of FIP.",
            };
            format!("A/G ratio = {}: {tail}", decimal(*ratio, 2, lang))
        }
        (RiskComment::GammaElevated, Language::Pl) => String::from(
            "Gamma-globuliny podwyższone: hipergammaglobulinemia, częsta u kotów z FIP.",
        ),
        (RiskComment::GammaElevated, Language::En) => String::from(
            "Gamma globulins elevated: hypergammaglobulinemia, common in cats with FIP.",
        ),
        (RiskComment::GammaNormal, Language::Pl) => {
            String::from("Gamma-globuliny w normie, brak hipergammaglobulinemii.")
        }
        (RiskComment::GammaNormal, Language::En) => {
            String::from("Gamma globulins normal, no hypergammaglobulinemia.")
        }
    }
}

#[must_use]
pub fn further_tests(level: RiskLevel, lang: Language) -> Vec<&'static str> {
    match (level, lang) {
        (RiskLevel::High, Language::Pl) => vec![
            "Próba Rivalta na płynie, jeśli występuje wysięk.",
            "PCR w kierunku FCoV z krwi lub płynu.",
            "USG jamy brzusznej.",
            "Badanie cytologiczne lub histopatologiczne zmienionych tkanek.",
        ],
        (RiskLevel::High, Language::En) => vec![
            "Rivalta test on effusion fluid, if present.",
            "FCoV PCR from blood or fluid.",
            "Abdominal ultrasound.",
            "Cytology or histopathology of affected tissue.",
        ],
        (RiskLevel::Medium, Language::Pl) => vec![
            "Powtórzyć elektroforezę za kilka tygodni, aby ocenić trend.",
            "Przy utrzymujących się objawach rozważyć Rivaltę, PCR i badania obrazowe.",
        ],
        (RiskLevel::Medium, Language::En) => vec![
            "Repeat electrophoresis in a few weeks to assess the trend.",
            "If signs persist, consider Rivalta, PCR and imaging.",
        ],
        (RiskLevel::Low, Language::Pl) => vec![
            "Dalsze testy w kierunku FIP nie są obecnie konieczne.",
            "Kontynuować obserwację kota.",
        ],
        (RiskLevel::Low, Language::En) => vec![
            "Further FIP-specific tests are not needed at this stage.",
            "Keep monitoring the cat.",
        ],
    }
}

#[must_use]
pub const fn risk_supplements(level: RiskLevel, lang: Language) -> &'static str {
    match (level, lang) {
        (RiskLevel::High, Language::Pl) => {
            "Brak specyficznych suplementów; po potwierdzeniu wymagane leczenie przyczynowe."
        }
        (RiskLevel::High, Language::En) => {
            "No specific supplements; causal treatment is required once confirmed."
        }
        (RiskLevel::Medium, Language::Pl) => {
            "Można rozważyć wspomaganie odporności w porozumieniu z weterynarzem."
        }
        (RiskLevel::Medium, Language::En) => {
            "Immune support may be considered together with the veterinarian."
        }
        (RiskLevel::Low, Language::Pl) => "Nie wymaga specjalnej suplementacji.",
        (RiskLevel::Low, Language::En) => "No special supplementation needed.",
    }
}

#[must_use]
pub fn risk_consultation(level: RiskLevel, lang: Language) -> String {
    if level.needs_consultation() {
        consultation(Consultation::Specialist(Specialist::Internist), lang)
    } else {
        consultation(Consultation::None, lang)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ratio::compute;

    #[test]
    fn test_ratio_messages() {
        assert_eq!(ratio(&compute("4.9", "7.0"), Language::Pl), "Stosunek A/G: 0,70");
        assert_eq!(ratio(&compute("4.9", "7.0"), Language::En), "A/G ratio: 0.70");
        assert_eq!(ratio(&compute("x", "1"), Language::En), "Invalid values.");
        assert_eq!(
            ratio(&compute("1", "0"), Language::Pl),
            "Globuliny nie mogą być równe 0."
        );
    }

    #[test]
    fn test_decimal_separator() {
        assert_eq!(decimal(0.64, 1, Language::En), "0.6");
        assert_eq!(decimal(12.0, 1, Language::Pl), "12,0");
    }

    fn every_finding() -> Vec<LabFinding> {
        let unit = String::from("U/l");
        vec![
            LabFinding::AgRatioLow(0.45),
            LabFinding::AgRatioModerate(0.7),
            LabFinding::Hypergammaglobulinemia,
            LabFinding::AltMild { value: 150.0, unit: unit.clone() },
            LabFinding::AltSevere { value: 350.0, unit: unit.clone() },
            LabFinding::BilirubinHigh { value: 1.5, unit },
            LabFinding::Leukocytosis(25.0),
            LabFinding::Leukopenia(3.0),
            LabFinding::StressLeukogram,
            LabFinding::Anemia(22.0),
            LabFinding::FcovPositive,
            LabFinding::FcovNegative,
            LabFinding::FcovTiterHigh(String::from("1:1600")),
            LabFinding::FcovTiterModerate(String::from("1:100")),
            LabFinding::FcovTiterLow(String::from("1:25")),
            LabFinding::FcovResult(String::from("niejednoznaczny")),
            LabFinding::ResultsNormal,
            LabFinding::DisclaimerOtherDiseases,
        ]
    }

    #[test]
    fn test_mentions_fip_matches_rendered_text() {
        for finding in every_finding() {
            // Adding a variant must extend `every_finding`.
            match finding {
                LabFinding::AgRatioLow(_)
                | LabFinding::AgRatioModerate(_)
                | LabFinding::Hypergammaglobulinemia
                | LabFinding::AltMild { .. }
                | LabFinding::AltSevere { .. }
                | LabFinding::BilirubinHigh { .. }
                | LabFinding::Leukocytosis(_)
                | LabFinding::Leukopenia(_)
                | LabFinding::StressLeukogram
                | LabFinding::Anemia(_)
                | LabFinding::FcovPositive
                | LabFinding::FcovNegative
                | LabFinding::FcovTiterHigh(_)
                | LabFinding::FcovTiterModerate(_)
                | LabFinding::FcovTiterLow(_)
                | LabFinding::FcovResult(_)
                | LabFinding::ResultsNormal
                | LabFinding::DisclaimerOtherDiseases => {}
            }
            for lang in [Language::Pl, Language::En] {
                let text = lab_finding(&finding, lang);
                assert_eq!(
                    text.contains("FIP"),
                    finding.mentions_fip(),
                    "{lang:?}: {text}"
                );
            }
        }
    }

    #[test]
    fn test_abnormal_result_line() {
        let param = Parameter::new("Albuminy", "2.1")
            .with_unit("g/dl")
            .with_range(Some("2.6"), Some("4.0"));
        assert_eq!(
            abnormal_result(&param, Language::Pl),
            "Albuminy: 2.1 g/dl (norma: 2.6 - 4.0)"
        );

        let open = Parameter::new("ALT", "145.0").with_range(Some("20.0"), None);
        assert_eq!(
            abnormal_result(&open, Language::En),
            "ALT: 145.0 (range: 20.0 - 20.0)"
        );
    }

    #[test]
    fn test_language_deserialize() {
        #[derive(Deserialize)]
        struct Wrapper {
            language: Language,
        }
        let wrapper: Wrapper = toml::from_str("language = \"en\"").unwrap();
        assert_eq!(wrapper.language, Language::En);
    }
}
