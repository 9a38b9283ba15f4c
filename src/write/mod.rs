// src/write/mod.rs

pub mod mapping;
pub mod rows;

pub use mapping::KeyValueWriter;
pub use rows::RowsWithHeaderWriter;

use crate::config::OutputLayout;
use crate::process::CleanedDataset;
use anyhow::{bail, Context, Result};
use rust_xlsxwriter::Workbook;
use std::{fs, path::Path};
use tracing::{debug, warn};

/// Rows available on one Excel sheet.
pub const MAX_SHEET_ROWS: usize = 1_048_576;
/// Characters one Excel cell can hold.
pub const MAX_CELL_CHARS: usize = 32_767;

/// Turns a cleaned dataset into an output file at `dest`.
pub trait OutputWriter {
    fn name(&self) -> &'static str;
    fn write(&self, dest: &Path, dataset: &CleanedDataset) -> Result<()>;
}

impl<W: OutputWriter + ?Sized> OutputWriter for Box<W> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn write(&self, dest: &Path, dataset: &CleanedDataset) -> Result<()> {
        (**self).write(dest, dataset)
    }
}

/// Writer matching the configured layout.
pub fn writer_for(layout: OutputLayout) -> Box<dyn OutputWriter> {
    match layout {
        OutputLayout::Rows => Box::new(RowsWithHeaderWriter),
        OutputLayout::Mapping => Box::new(KeyValueWriter),
    }
}

/// Fail early when the dataset plus its header row cannot fit on one sheet.
pub(crate) fn check_sheet_capacity(data_rows: usize) -> Result<()> {
    if data_rows + 1 > MAX_SHEET_ROWS {
        bail!(
            "{} rows plus header exceed the sheet limit of {}",
            data_rows,
            MAX_SHEET_ROWS
        );
    }
    Ok(())
}

pub fn exceeds_cell_limit(value: &str) -> bool {
    value.char_indices().nth(MAX_CELL_CHARS).is_some()
}

/// Cut `value` to the first `MAX_CELL_CHARS` characters, warning when it had to.
pub(crate) fn fit_cell<'a>(value: &'a str, row: u32) -> &'a str {
    match value.char_indices().nth(MAX_CELL_CHARS) {
        Some((cut, _)) => {
            warn!(
                row,
                chars = value.chars().count(),
                limit = MAX_CELL_CHARS,
                "cell too long, truncated"
            );
            &value[..cut]
        }
        None => value,
    }
}

/// Save `workbook` next to `dest` under a hidden temp name, then rename over `dest`.
///
/// The destination folder is created if needed. A failed save leaves any
/// previous output untouched.
pub(crate) fn save_atomically(workbook: &mut Workbook, dest: &Path) -> Result<()> {
    let dir = match dest.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).with_context(|| format!("creating output folder {}", dir.display()))?;

    let file_name = dest
        .file_name()
        .with_context(|| format!("output path {} has no file name", dest.display()))?;
    let tmp_path = dir.join(format!(".{}.tmp", file_name.to_string_lossy()));

    if let Err(e) = workbook.save(&tmp_path) {
        discard_temp(&tmp_path);
        return Err(e).with_context(|| format!("saving workbook to {}", tmp_path.display()));
    }
    if let Err(e) = fs::rename(&tmp_path, dest) {
        discard_temp(&tmp_path);
        return Err(e).with_context(|| {
            format!("renaming {} -> {}", tmp_path.display(), dest.display())
        });
    }
    debug!(path = %dest.display(), "saved workbook");
    Ok(())
}

fn discard_temp(tmp_path: &Path) {
    if tmp_path.is_file() {
        if let Err(e) = fs::remove_file(tmp_path) {
            warn!(path = %tmp_path.display(), "leftover temp file: {}", e);
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use anyhow::Result;
    use calamine::{open_workbook, Data, Range, Reader, Xlsx};
    use std::path::Path;

    pub fn read_sheet(path: &Path) -> Result<Range<Data>> {
        let mut wb: Xlsx<_> = open_workbook(path)?;
        Ok(wb.worksheet_range("Sheet1")?)
    }

    pub fn cell(range: &Range<Data>, row: u32, col: u32) -> Option<String> {
        match range.get_value((row, col)) {
            Some(Data::String(s)) => Some(s.clone()),
            _ => None,
        }
    }
}
