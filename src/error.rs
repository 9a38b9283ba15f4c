use std::path::PathBuf;
use thiserror::Error;

/// Every way a cleaning run can end without producing an output file.
#[derive(Error, Debug)]
pub enum CleanError {
    #[error("config file does not exist at {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("config file {} is not valid JSON: {source}", .path.display())]
    ConfigInvalid {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("config key `{0}` is not set")]
    MissingSetting(&'static str),

    #[error("no files ending with {suffix:?} in {}", .folder.display())]
    NoMatchingFiles { folder: PathBuf, suffix: String },

    #[error("no rows passed validation across {files} file(s)")]
    EmptyResultSet { files: usize },

    #[error("I/O failure: {0:#}")]
    Io(anyhow::Error),
}

impl CleanError {
    /// Stable identifier used in structured run reports.
    pub fn kind(&self) -> &'static str {
        match self {
            CleanError::ConfigNotFound(_) => "config_not_found",
            CleanError::ConfigInvalid { .. } => "config_invalid",
            CleanError::MissingSetting(_) => "missing_setting",
            CleanError::NoMatchingFiles { .. } => "no_matching_files",
            CleanError::EmptyResultSet { .. } => "empty_result_set",
            CleanError::Io(_) => "io_failure",
        }
    }
}

impl From<anyhow::Error> for CleanError {
    fn from(err: anyhow::Error) -> Self {
        CleanError::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn kinds_are_stable() {
        assert_eq!(
            CleanError::ConfigNotFound(PathBuf::from("config.json")).kind(),
            "config_not_found"
        );
        assert_eq!(
            CleanError::MissingSetting("cleaned_folder").kind(),
            "missing_setting"
        );
        assert_eq!(
            CleanError::EmptyResultSet { files: 2 }.kind(),
            "empty_result_set"
        );
    }

    #[test]
    fn io_message_keeps_context_chain() {
        let err: CleanError = anyhow!("permission denied")
            .context("opening in/a.csv")
            .into();
        assert_eq!(err.kind(), "io_failure");
        assert_eq!(
            err.to_string(),
            "I/O failure: opening in/a.csv: permission denied"
        );
    }
}
