// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::options::ExportOptions;
use crate::report::AuditReport;

/// Render `report` in the configured format and write it to
/// `export.out_path()`. Returns the path written to.
pub fn write_report(export: &ExportOptions, report: &AuditReport) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let path = export.out_path();
    let contents = report.render(export.format, export.include_headers)?;
    write_string(&path, &contents)?;
    Ok(path)
}

/// Create parent directories as needed, then overwrite `path`.
pub fn write_string(path: &Path, contents: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, contents)?;
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
