use crate::utils::error::{OptcheckError, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Default, Deserialize)]
struct ReportFile {
    #[serde(default)]
    reports: Vec<serde_json::Value>,
}

/// Number of reports in a `CodeChecker parse --export json` file.
pub fn evaluate_reports(path: &Path) -> Result<usize> {
    if !path.is_file() {
        return Err(OptcheckError::ReportNotFound {
            path: path.display().to_string(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|e| OptcheckError::ReportParseError {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let report: ReportFile =
        serde_json::from_str(&content).map_err(|e| OptcheckError::ReportParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

    Ok(report.reports.len())
}
