use serde::Serialize;
use tracing::{debug, warn};

/// Where a run is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Init,
    Collecting,
    Writing,
    /// Input was read but no row passed validation.
    FailedEmpty,
    /// Config, listing or I/O failure.
    Failed,
    Done,
}

impl Stage {
    pub fn as_str(&self) -> &str {
        match self {
            Stage::Init => "init",
            Stage::Collecting => "collecting",
            Stage::Writing => "writing",
            Stage::FailedEmpty => "failed_empty",
            Stage::Failed => "failed",
            Stage::Done => "done",
        }
    }

    pub fn can_advance_to(&self, next: Stage) -> bool {
        matches!(
            (self, next),
            (Stage::Init, Stage::Collecting)
                | (Stage::Collecting, Stage::Writing)
                | (Stage::Collecting, Stage::FailedEmpty)
                | (Stage::Init | Stage::Collecting | Stage::Writing, Stage::Failed)
                | (Stage::Writing | Stage::FailedEmpty | Stage::Failed, Stage::Done)
        )
    }

    /// Move to `next`, logging the transition. Unexpected transitions are logged, not refused.
    pub fn advance(self, next: Stage) -> Stage {
        if self.can_advance_to(next) {
            debug!(from = self.as_str(), to = next.as_str(), "stage");
        } else {
            warn!(from = self.as_str(), to = next.as_str(), "unexpected stage transition");
        }
        next
    }
}
