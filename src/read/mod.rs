// src/read/mod.rs

use anyhow::{bail, Context, Result};
use csv::ReaderBuilder;
use glob::{glob, Pattern};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// One input line split on the field delimiter.
pub type RawRow = Vec<String>;

/// Field delimiter of the corrupted input files.
pub const FIELD_DELIMITER: u8 = b';';

/// Source of raw rows for a list of input files.
pub trait RawDataReader {
    /// Read `files` in the given order, concatenating their rows.
    fn read_rows(&self, files: &[PathBuf]) -> Result<Vec<RawRow>>;
}

/// List regular files directly under `folder` whose name ends with `suffix`.
///
/// A `None` suffix matches every file. Paths come back sorted by name, which
/// is the order the pipeline reads them in.
pub fn list_matching_files(folder: &Path, suffix: Option<&str>) -> Result<Vec<PathBuf>> {
    if !folder.is_dir() {
        bail!("input folder {} is not a directory", folder.display());
    }

    let pattern = format!(
        "{}/*{}",
        Pattern::escape(&folder.to_string_lossy()),
        Pattern::escape(suffix.unwrap_or(""))
    );
    let mut files = Vec::new();
    for entry in glob(&pattern).with_context(|| format!("bad glob pattern '{}'", pattern))? {
        let path = entry.with_context(|| format!("listing {}", folder.display()))?;
        if path.is_file() {
            files.push(path);
        }
    }
    debug!(pattern = %pattern, found = files.len(), "listed input files");
    Ok(files)
}

/// `;`-delimited reader with `"` quoting. Blank lines produce no row.
#[derive(Debug, Clone, Copy)]
pub struct DelimitedReader {
    delimiter: u8,
}

impl Default for DelimitedReader {
    fn default() -> Self {
        Self {
            delimiter: FIELD_DELIMITER,
        }
    }
}

impl DelimitedReader {
    pub fn with_delimiter(delimiter: u8) -> Self {
        Self { delimiter }
    }

    /// Read one file fully; the handle is closed before returning.
    #[tracing::instrument(level = "info", skip(self, path), fields(path = %path.display()))]
    pub fn read_file(&self, path: &Path) -> Result<Vec<RawRow>> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true) // corrupted lines carry any number of fields
            .delimiter(self.delimiter)
            .from_path(path)
            .with_context(|| format!("opening {}", path.display()))?;

        let mut rows = Vec::new();
        for (idx, result) in rdr.byte_records().enumerate() {
            let record = result
                .with_context(|| format!("parse error in {} at record {}", path.display(), idx))?;
            // invalid UTF-8 is expected in corrupted exports
            let row: RawRow = record
                .iter()
                .map(|f| String::from_utf8_lossy(f).into_owned())
                .collect();
            if !row.is_empty() {
                rows.push(row);
            }
        }
        debug!(rows = rows.len(), "read file");
        Ok(rows)
    }
}

impl RawDataReader for DelimitedReader {
    fn read_rows(&self, files: &[PathBuf]) -> Result<Vec<RawRow>> {
        let mut combined = Vec::new();
        for path in files {
            let rows = self.read_file(path)?;
            combined.extend(rows);
        }
        info!(files = files.len(), rows = combined.len(), "read input files");
        Ok(combined)
    }
}
