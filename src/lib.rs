pub mod config;
pub mod error;
pub mod pipeline;
pub mod process;
pub mod read;
pub mod write;

pub use config::{Config, ConfigLoader, JsonConfigLoader, OutputLayout};
pub use error::CleanError;
pub use pipeline::{run_from_path, Pipeline, RunReport, Stage};
pub use process::{classify_and_normalize, collect_dataset, Classification, CleanedDataset};
