use crate::process::CleanedDataset;
use crate::write::{check_sheet_capacity, fit_cell, save_atomically, OutputWriter};
use anyhow::{Context, Result};
use rust_xlsxwriter::Workbook;
use std::path::Path;
use tracing::info;

/// One column per header label, in first-seen order.
///
/// Each cleaned row gets its own sheet row and sits under the label that was
/// in force when it was read. Rows read before any header share a column with
/// a blank heading.
#[derive(Debug, Default, Clone, Copy)]
pub struct KeyValueWriter;

impl KeyValueWriter {
    /// Distinct keys in first-seen order, and the column index of every row.
    fn plan_columns(dataset: &CleanedDataset) -> (Vec<Option<&str>>, Vec<u16>) {
        let mut keys: Vec<Option<&str>> = Vec::new();
        let mut placement = Vec::with_capacity(dataset.len());
        for row in &dataset.rows {
            let key = row.header.as_deref();
            let col = match keys.iter().position(|k| *k == key) {
                Some(c) => c,
                None => {
                    keys.push(key);
                    keys.len() - 1
                }
            };
            placement.push(col as u16);
        }
        (keys, placement)
    }
}

impl OutputWriter for KeyValueWriter {
    fn name(&self) -> &'static str {
        "mapping"
    }

    fn write(&self, dest: &Path, dataset: &CleanedDataset) -> Result<()> {
        check_sheet_capacity(dataset.len())?;
        let (keys, placement) = Self::plan_columns(dataset);

        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();

        for (col, key) in keys.iter().enumerate() {
            if let Some(k) = key.filter(|k| !k.is_empty()) {
                sheet
                    .write_string(0, col as u16, fit_cell(k, 0))
                    .with_context(|| format!("writing heading {}", col))?;
            }
        }
        for (idx, (value, col)) in dataset.values().zip(placement).enumerate() {
            let row = idx as u32 + 1;
            sheet
                .write_string(row, col, fit_cell(value, row))
                .with_context(|| format!("writing row {}", row))?;
        }

        save_atomically(&mut workbook, dest)?;
        info!(
            path = %dest.display(),
            rows = dataset.len(),
            columns = keys.len(),
            "wrote mapping sheet"
        );
        Ok(())
    }
}
