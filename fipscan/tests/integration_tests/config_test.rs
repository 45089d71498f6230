// tests/integration_tests/config_test.rs
use super::common::create_config_file;
use anyhow::Result;
use fipscan::models::RivaltaStatus;
use fipscan::{Language, load_config};
use std::fs;

#[test]
fn test_config_from_ancestor_directory() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;
    create_config_file(
        temp_dir.path(),
        "language = \"en\"\nrivalta = \"negatywna\"\nreport_glob = \"*.txt\"\nrecords = \"data/cats.yaml\"\n",
    )?;
    let nested = temp_dir.path().join("clinic/reports");
    fs::create_dir_all(&nested)?;

    let config = load_config(&nested)?;
    assert_eq!(config.language, Language::En);
    assert_eq!(config.rivalta, RivaltaStatus::Negative);
    assert_eq!(config.report_glob, "*.txt");
    assert_eq!(config.records, Some(temp_dir.path().join("data/cats.yaml")));
    assert!(config.contact.is_none());
    Ok(())
}

#[test]
fn test_bad_rivalta_value_is_an_error() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;
    create_config_file(temp_dir.path(), "rivalta = \"maybe\"\n")?;

    let err = load_config(temp_dir.path()).unwrap_err();
    assert!(format!("{err:#}").contains("Rivalta"));
    Ok(())
}
