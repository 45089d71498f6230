// tests/integration_tests/common.rs
use anyhow::Result;
use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const FIP_REPORT: &str = "\
Pacjent: Mruczek; Gatunek: kot; Rasa: europejska
Płeć: samiec; Wiek: 2 lata
Data pobrania materiału: 15.03.2024
Data wydruku: 18.03.2024
Badanie Wynik; Jedn.; Norma
Białko całkowite 8,3; g/dl; 5,7-8,9
Albuminy 2,1; g/dl; 2,6-4,0
Globuliny 6,2; g/dl; 2,8-4,8
Gamma-globuliny 3,4; g/dl; 0,7-1,9
ALT (AlAT) 145,0; U/l; 20,0-100,0
Bilirubina 0,9; mg/dl; 0,0-0,4
LYM 0,9; 10^3/ul; 1,5-7,0
HCT 24,0; %; 30,0-45,0
";

pub const NORMAL_REPORT: &str = "\
Pacjent: Puszek; Gatunek: kot
Data pobrania materiału: 02.04.2024
Albuminy 3,4; g/dl; 2,6-4,0
Globuliny 3,6; g/dl; 2,8-4,8
ALT (AlAT) 55,0; U/l; 20,0-100,0
HCT 38,0; %; 30,0-45,0
";

pub fn create_test_file(dir: &Path, name: &str, content: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(&path)?;
    file.write_all(content.as_bytes())?;
    Ok(path)
}

pub fn create_config_file(dir: &Path, content: &str) -> Result<PathBuf> {
    create_test_file(dir, ".fipscan.toml", content)
}

/// Two reports at the top level, one nested, one hidden and one non-report file.
pub fn setup_report_directory() -> Result<TempDir> {
    let temp_dir = TempDir::new()?;

    create_test_file(temp_dir.path(), "mruczek.csv", FIP_REPORT)?;
    create_test_file(temp_dir.path(), "puszek.csv", NORMAL_REPORT)?;
    create_test_file(temp_dir.path(), "archive/2023/mruczek.csv", NORMAL_REPORT)?;
    create_test_file(temp_dir.path(), ".cache/old.csv", FIP_REPORT)?;
    create_test_file(temp_dir.path(), "notes.txt", "not a report")?;

    Ok(temp_dir)
}
