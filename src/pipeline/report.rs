use crate::error::CleanError;
use crate::pipeline::Stage;
use crate::process::CleanedDataset;
use crate::write::exceeds_cell_limit;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::{fmt, path::Path, path::PathBuf};

/// Outcome of one run, printable as a status line or serialisable as JSON.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub success: bool,
    pub message: String,
    pub stage: Stage,
    /// `CleanError::kind()` of the failure, if any.
    pub reason: Option<String>,
    pub files_read: usize,
    pub rows_read: usize,
    pub rows_written: usize,
    /// Rows cut to the spreadsheet cell limit.
    pub rows_truncated: usize,
    pub header: Option<String>,
    pub output_path: Option<PathBuf>,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
}

impl RunReport {
    pub fn start() -> Self {
        Self {
            success: false,
            message: String::new(),
            stage: Stage::Init,
            reason: None,
            files_read: 0,
            rows_read: 0,
            rows_written: 0,
            rows_truncated: 0,
            header: None,
            output_path: None,
            started_at: Utc::now(),
            finished_at: None,
        }
    }

    /// A finished report for a run that failed before the pipeline started.
    pub fn failed(err: &CleanError) -> Self {
        let mut report = Self::start();
        report.fail(err);
        report.stage = Stage::Failed.advance(Stage::Done);
        report
    }

    pub(crate) fn succeed(
        &mut self,
        output_path: &Path,
        files: usize,
        rows_read: usize,
        dataset: &CleanedDataset,
    ) {
        let name = output_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| output_path.display().to_string());
        self.success = true;
        self.message = format!(
            "Data cleaning completed successfully. Cleaned data is in {}",
            name
        );
        self.files_read = files;
        self.rows_read = rows_read;
        self.rows_written = dataset.len();
        self.rows_truncated = dataset.values().filter(|v| exceeds_cell_limit(v)).count();
        self.header = dataset.header.clone();
        self.output_path = Some(output_path.to_path_buf());
        self.finished_at = Some(Utc::now());
    }

    pub(crate) fn fail(&mut self, err: &CleanError) {
        self.success = false;
        self.message = format!("Data cleaning interrupted: {}", err);
        self.reason = Some(err.kind().to_string());
        self.finished_at = Some(Utc::now());
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::DatasetRow;

    #[test]
    fn test_success_fields() {
        let mut report = RunReport::start();
        let ds = CleanedDataset {
            header: Some("h".into()),
            rows: vec![DatasetRow {
                value: "v".into(),
                header: Some("h".into()),
            }],
        };
        report.succeed(Path::new("out/clean.xlsx"), 2, 10, &ds);

        assert!(report.success);
        assert_eq!(report.rows_written, 1);
        assert_eq!(
            report.to_string(),
            "Data cleaning completed successfully. Cleaned data is in clean.xlsx"
        );
        assert!(report.finished_at.unwrap() >= report.started_at);
    }

    #[test]
    fn test_counts_truncated_rows() {
        let mut report = RunReport::start();
        let ds = CleanedDataset {
            header: None,
            rows: ["*;ok*".to_string(), "x".repeat(40_000)]
                .into_iter()
                .map(|value| DatasetRow {
                    value,
                    header: None,
                })
                .collect(),
        };
        report.succeed(Path::new("clean.xlsx"), 1, 2, &ds);
        assert_eq!(report.rows_written, 2);
        assert_eq!(report.rows_truncated, 1);
    }

    #[test]
    fn test_failed_before_start() {
        let err = CleanError::Io(anyhow::anyhow!("no working directory"));
        let report = RunReport::failed(&err);
        assert!(!report.success);
        assert_eq!(report.stage, Stage::Done);
        assert_eq!(report.reason.as_deref(), Some("io_failure"));
        assert!(report.to_string().contains("no working directory"));
        assert!(report.finished_at.is_some());
    }

    #[test]
    fn test_failure_serialises_reason() -> anyhow::Result<()> {
        let mut report = RunReport::start();
        report.fail(&CleanError::EmptyResultSet { files: 3 });

        let json = serde_json::to_value(&report)?;
        assert_eq!(json["success"], false);
        assert_eq!(json["reason"], "empty_result_set");
        assert_eq!(json["stage"], "init");
        assert!(json["message"]
            .as_str()
            .unwrap()
            .contains("no rows passed validation across 3 file(s)"));
        Ok(())
    }
}
