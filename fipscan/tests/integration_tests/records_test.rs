// tests/integration_tests/records_test.rs
use super::common::create_test_file;
use anyhow::Result;
use fipscan::models::CatRecord;
use fipscan::{RecordSource as _, SampleRecords, source_from};

#[test]
fn test_sample_records_display() -> Result<()> {
    let lines: Vec<String> = SampleRecords.records()?.iter().map(ToString::to_string).collect();
    assert_eq!(lines, vec!["Mruczek - A/G: 0.7", "Puszek - A/G: 0.5"]);
    Ok(())
}

#[test]
fn test_yaml_source_selected_when_path_given() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;
    let path = create_test_file(temp_dir.path(), "cats.yaml", "- name: Filemon\n  ag_ratio: 0.42\n")?;

    let records = source_from(Some(path)).records()?;
    assert_eq!(records, vec![CatRecord::new("Filemon", 0.42)]);

    let missing = source_from(Some(temp_dir.path().join("none.yaml")));
    let err = missing.records().unwrap_err();
    assert!(err.to_string().contains("none.yaml"));
    Ok(())
}
