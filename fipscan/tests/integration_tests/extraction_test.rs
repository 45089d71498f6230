// tests/integration_tests/extraction_test.rs
use super::common::{FIP_REPORT, create_test_file, setup_report_directory};
use anyhow::Result;
use fipscan::read_lab_report;
use fipscan::utils::collect_report_files;

#[test]
fn test_extract_full_report() -> Result<()> {
    let temp_dir = tempfile::tempdir()?;
    let path = create_test_file(temp_dir.path(), "report.csv", FIP_REPORT)?;

    let data = read_lab_report(&path)?;

    assert_eq!(data.patient.get("Pacjent").map(String::as_str), Some("Mruczek"));
    assert_eq!(data.patient.get("Wiek").map(String::as_str), Some("2 lata"));
    assert_eq!(data.collection_date.as_deref(), Some("15.03.2024"));
    assert_eq!(data.parameters.len(), 8);

    let alt = data.get("ALT").expect("ALT extracted");
    assert_eq!(alt.value, "145.0");
    assert_eq!(alt.unit, "U/l");
    assert_eq!(alt.max_f64(), Some(100.0));

    assert!(data.results.contains(&String::from("Albuminy 2.1 (norma 2,6 - 4,0) g/dl")));
    Ok(())
}

#[test]
fn test_collect_report_files() -> Result<()> {
    let temp_dir = setup_report_directory()?;

    let files = collect_report_files(temp_dir.path(), "*.csv")?;
    let names: Vec<_> = files
        .iter()
        .map(|f| f.strip_prefix(temp_dir.path()).unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["archive/2023/mruczek.csv", "mruczek.csv", "puszek.csv"]);

    let single = collect_report_files(&temp_dir.path().join("puszek.csv"), "*.txt")?;
    assert_eq!(single.len(), 1, "a file path is used as-is");

    assert!(collect_report_files(temp_dir.path(), "[").is_err());
    Ok(())
}
