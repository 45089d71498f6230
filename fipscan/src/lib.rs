// src/lib.rs
pub mod cli;
pub mod config;
pub mod core;
pub mod logging;
pub mod messages;
pub mod models;
pub mod records;
pub mod utils;

pub use cli::{Args, Command, run};
pub use config::{Config, Contact, load_config, load_config_file};
pub use crate::core::lab::{LabAnalysis, LabFinding, abnormal_results, ag_ratio, analyze_lab_data};
pub use crate::core::pattern::{FipProfile, PatternAnalysis, analyze_parameter_patterns};
pub use crate::core::ratio::{RatioResult, compute};
pub use crate::core::report::{parse_lab_results, read_lab_report};
pub use crate::core::risk::{FipRisk, RiskLevel, assess_fip_risk};
pub use messages::Language;
pub use records::{RecordSource, SampleRecords, YamlRecords, source_from};
