use crate::process::CleanedDataset;
use crate::write::{check_sheet_capacity, fit_cell, save_atomically, OutputWriter};
use anyhow::{Context, Result};
use rust_xlsxwriter::Workbook;
use std::path::Path;
use tracing::info;

/// Header label in A1, then one cleaned row per line in column A.
#[derive(Debug, Default, Clone, Copy)]
pub struct RowsWithHeaderWriter;

impl OutputWriter for RowsWithHeaderWriter {
    fn name(&self) -> &'static str {
        "rows"
    }

    fn write(&self, dest: &Path, dataset: &CleanedDataset) -> Result<()> {
        check_sheet_capacity(dataset.len())?;

        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();

        // an unset header leaves A1 blank but still reserves the row
        if let Some(header) = dataset.header.as_deref().filter(|h| !h.is_empty()) {
            sheet
                .write_string(0, 0, fit_cell(header, 0))
                .context("writing header cell")?;
        }
        for (idx, value) in dataset.values().enumerate() {
            let row = idx as u32 + 1;
            sheet
                .write_string(row, 0, fit_cell(value, row))
                .with_context(|| format!("writing row {}", row))?;
        }

        save_atomically(&mut workbook, dest)?;
        info!(path = %dest.display(), rows = dataset.len(), "wrote rows sheet");
        Ok(())
    }
}
