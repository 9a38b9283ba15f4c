// src/process/mod.rs

pub mod dataset;
pub mod utils;
pub mod validate;

pub use dataset::{collect_dataset, CleanedDataset, DatasetRow, HeaderTracker};
pub use validate::{
    classify_and_normalize, count_markers, is_header_line, normalize_line, Classification,
    LineKind,
};
