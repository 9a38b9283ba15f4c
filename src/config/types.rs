// src/config/types.rs

use serde::{Deserialize, Serialize};

/// Shape of the produced spreadsheet.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Copy, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputLayout {
    /// Header cell on the first row, then one row per cleaned line.
    #[default]
    Rows,
    /// One column per header label, rows placed under the label in force when they were read.
    Mapping,
}

/// Options read from the JSON config file.
///
/// Every key is optional: an absent key leaves the matching feature disabled
/// and the driver reports it instead of failing to deserialize.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub corrupted_folder: Option<String>,
    pub cleaned_folder: Option<String>,
    pub files_only: Option<String>,
    pub output_filename: Option<String>,
    pub output_layout: OutputLayout,
}
