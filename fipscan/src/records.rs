// src/records.rs
use anyhow::{Context as _, Result};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

use crate::models::CatRecord;

/// Something that can list stored cat records.
pub trait RecordSource {
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read or decoded.
    fn records(&self) -> Result<Vec<CatRecord>>;
}

/// Built-in demonstration list.
#[derive(Debug, Default, Clone, Copy)]
pub struct SampleRecords;

impl RecordSource for SampleRecords {
    fn records(&self) -> Result<Vec<CatRecord>> {
        Ok(vec![
            CatRecord::new("Mruczek", 0.7),
            CatRecord::new("Puszek", 0.5),
        ])
    }
}

/// Records kept in a YAML file as a sequence of `{ name, ag_ratio }` maps.
#[derive(Debug, Clone)]
pub struct YamlRecords {
    pub path: PathBuf,
}

impl RecordSource for YamlRecords {
    fn records(&self) -> Result<Vec<CatRecord>> {
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read records file: {}", self.path.display()))?;
        let records: Vec<CatRecord> = serde_yaml_ng::from_str(&content)
            .with_context(|| format!("Failed to parse records file: {}", self.path.display()))?;
        debug!(path = %self.path.display(), count = records.len(), "loaded records");
        Ok(records)
    }
}

/// Uses the YAML file when one is given, the sample list otherwise.
#[must_use]
pub fn source_from(path: Option<PathBuf>) -> Box<dyn RecordSource> {
    match path {
        Some(path) => Box::new(YamlRecords { path }),
        None => Box::new(SampleRecords),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_records() -> Result<()> {
        let records = source_from(None).records()?;
        assert_eq!(
            records,
            vec![CatRecord::new("Mruczek", 0.7), CatRecord::new("Puszek", 0.5)]
        );
        Ok(())
    }

    #[test]
    fn test_yaml_records() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("cats.yaml");
        fs::write(&path, "- name: Filemon\n  ag_ratio: 0.45\n- name: Bonifacy\n  ag_ratio: 0.9\n")?;

        let records = source_from(Some(path)).records()?;
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], CatRecord::new("Filemon", 0.45));
        Ok(())
    }

    #[test]
    fn test_yaml_records_errors_name_the_file() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("broken.yaml");
        fs::write(&path, "- name: [unclosed\n")?;

        let err = YamlRecords { path }.records().unwrap_err();
        assert!(err.to_string().contains("broken.yaml"));

        let missing = YamlRecords {
            path: dir.path().join("missing.yaml"),
        };
        assert!(missing.records().is_err());
        Ok(())
    }
}
