// src/pipeline/mod.rs

pub mod report;
pub mod stage;

pub use report::RunReport;
pub use stage::Stage;

use crate::config::{Config, ConfigLoader, JsonConfigLoader};
use crate::error::CleanError;
use crate::process::{collect_dataset, CleanedDataset};
use crate::read::{list_matching_files, DelimitedReader, RawDataReader};
use crate::write::{writer_for, OutputWriter};
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

/// What a successful run produced.
#[derive(Debug)]
struct Written {
    files: usize,
    rows_read: usize,
    dataset: CleanedDataset,
    output_path: PathBuf,
}

/// Reader + writer composed into the list → read → validate → write flow.
pub struct Pipeline<R, W> {
    reader: R,
    writer: W,
}

impl Pipeline<DelimitedReader, Box<dyn OutputWriter>> {
    /// `;` reader plus the writer for the configured layout.
    pub fn for_config(config: &Config) -> Self {
        Pipeline::new(DelimitedReader::default(), writer_for(config.output_layout))
    }
}

impl<R: RawDataReader, W: OutputWriter> Pipeline<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Run once and turn the outcome, good or bad, into a report.
    pub fn run(&self, config: &Config) -> RunReport {
        let mut report = RunReport::start();
        let mut stage = Stage::Init;

        match self.try_run(config, &mut stage, &mut report) {
            Ok(done) => {
                report.succeed(&done.output_path, done.files, done.rows_read, &done.dataset);
                info!(
                    output = %done.output_path.display(),
                    rows = done.dataset.len(),
                    truncated = report.rows_truncated,
                    "cleaning completed"
                );
            }
            Err(err) => {
                let end = if matches!(err, CleanError::EmptyResultSet { .. }) {
                    Stage::FailedEmpty
                } else {
                    Stage::Failed
                };
                stage = stage.advance(end);
                warn!(stage = stage.as_str(), reason = err.kind(), "cleaning interrupted: {}", err);
                report.fail(&err);
            }
        }

        report.stage = stage.advance(Stage::Done);
        report
    }

    fn try_run(
        &self,
        config: &Config,
        stage: &mut Stage,
        report: &mut RunReport,
    ) -> Result<Written, CleanError> {
        // 1) every setting the run depends on, before touching the disk
        let input_dir = require(&config.corrupted_folder, "corrupted_folder")?;
        let output_dir = require(&config.cleaned_folder, "cleaned_folder")?;
        let output_name = require(&config.output_filename, "output_filename")?;
        let suffix = config.files_only.as_deref();

        // 2) list candidate files
        let input_dir = Path::new(input_dir);
        let files = list_matching_files(input_dir, suffix)?;
        if files.is_empty() {
            return Err(CleanError::NoMatchingFiles {
                folder: input_dir.to_path_buf(),
                suffix: suffix.unwrap_or_default().to_string(),
            });
        }
        info!(files = files.len(), folder = %input_dir.display(), "found input files");

        // 3) read + validate
        *stage = stage.advance(Stage::Collecting);
        let rows = self.reader.read_rows(&files)?;
        report.files_read = files.len();
        report.rows_read = rows.len();
        let dataset = collect_dataset(&rows);
        if dataset.is_empty() {
            return Err(CleanError::EmptyResultSet { files: files.len() });
        }

        // 4) write
        *stage = stage.advance(Stage::Writing);
        let output_path = Path::new(output_dir).join(output_name);
        info!(writer = self.writer.name(), path = %output_path.display(), "writing output");
        self.writer.write(&output_path, &dataset)?;

        Ok(Written {
            files: files.len(),
            rows_read: rows.len(),
            dataset,
            output_path,
        })
    }
}

fn require<'a>(value: &'a Option<String>, key: &'static str) -> Result<&'a str, CleanError> {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .ok_or(CleanError::MissingSetting(key))
}

/// Load the config at `path` with the JSON loader and run the default pipeline.
pub fn run_from_path(path: &Path) -> RunReport {
    run_with_loader(&JsonConfigLoader, path)
}

pub fn run_with_loader<L: ConfigLoader>(loader: &L, path: &Path) -> RunReport {
    match loader.load(path) {
        Ok(config) => Pipeline::for_config(&config).run(&config),
        Err(err) => {
            error!(path = %path.display(), "config not loaded: {}", err);
            RunReport::failed(&err)
        }
    }
}
