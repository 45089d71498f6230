// src/utils.rs
use anyhow::{Context as _, Result};
use glob::Pattern;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Parses a lab value as printed on a report: drops `<`/`>` qualifiers,
/// accepts a decimal comma and ignores surrounding whitespace.
#[inline]
#[must_use]
pub fn to_number(text: &str) -> Option<f64> {
    let cleaned: String = text
        .chars()
        .filter(|c| *c != '<' && *c != '>')
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    cleaned.trim().parse::<f64>().ok()
}

pub fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .is_some_and(|s| s.starts_with('.'))
}

/// Resolves the report files to process for `path`.
///
/// A file is returned as-is. A directory is walked recursively, skipping hidden
/// entries, and every file whose name matches `file_glob` is collected in sorted order.
///
/// # Errors
///
/// This function may return an error if:
/// * `file_glob` is not a valid glob pattern
/// * The directory cannot be read during traversal
pub fn collect_report_files(path: &Path, file_glob: &str) -> Result<Vec<PathBuf>> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }

    let pattern = Pattern::new(file_glob)
        .with_context(|| format!("Invalid report glob: {file_glob}"))?;

    let mut files = Vec::new();
    for entry in WalkDir::new(path)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| !is_hidden(e))
    {
        let entry = entry
            .with_context(|| format!("Failed to read directory: {}", path.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        if entry.file_name().to_str().is_some_and(|name| pattern.matches(name)) {
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(files)
}
