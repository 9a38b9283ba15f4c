use crate::process::validate::{classify_and_normalize, Classification};
use crate::read::RawRow;
use serde::Serialize;
use tracing::{debug, trace};

/// One accepted row plus the header label in force when it was read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatasetRow {
    pub value: String,
    pub header: Option<String>,
}

/// Cleaned rows in input order, plus the single captured header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CleanedDataset {
    pub header: Option<String>,
    pub rows: Vec<DatasetRow>,
}

impl CleanedDataset {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|r| r.value.as_str())
    }
}

/// Holds the header for one run while lines are classified in order.
#[derive(Debug, Clone, Default)]
pub struct HeaderTracker {
    header: Option<String>,
}

impl HeaderTracker {
    pub fn header(&self) -> Option<&str> {
        self.header.as_deref()
    }

    pub fn into_header(self) -> Option<String> {
        self.header
    }

    /// Classify `line` against the held header, capturing it if this line is the first header.
    pub fn observe(&mut self, line: &str) -> Classification {
        let outcome = classify_and_normalize(line, self.header.as_deref());
        if let Some(h) = &outcome.new_header {
            debug!(header = %h, "captured header");
            self.header = Some(h.clone());
        }
        outcome
    }
}

/// Run every row's first field through the validator, threading the header.
pub fn collect_dataset<'a, I>(rows: I) -> CleanedDataset
where
    I: IntoIterator<Item = &'a RawRow>,
{
    let mut tracker = HeaderTracker::default();
    let mut values = Vec::new();

    for (idx, row) in rows.into_iter().enumerate() {
        let Some(line) = row.first() else {
            continue;
        };
        let outcome = tracker.observe(line);
        trace!(idx, kind = outcome.kind().as_str(), "classified");

        // the header is updated before the row is keyed, so an overlap line is keyed by itself
        if let Some(value) = outcome.normalized {
            values.push(DatasetRow {
                value,
                header: tracker.header().map(str::to_string),
            });
        }
    }

    CleanedDataset {
        header: tracker.into_header(),
        rows: values,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracker_captures_once() {
        let mut tracker = HeaderTracker::default();

        let first = tracker.observe("Stat|first");
        assert_eq!(first.new_header.as_deref(), Some("tat;first"));
        assert_eq!(tracker.header(), Some("tat;first"));

        let data = tracker.observe("a*|b*");
        assert_eq!(data.normalized.as_deref(), Some("*;b*"));
        assert!(data.new_header.is_none());

        let second = tracker.observe("Stat|second");
        assert!(second.new_header.is_none());
        assert_eq!(tracker.into_header().as_deref(), Some("tat;first"));
    }

    #[test]
    fn test_tracker_overlap_line() {
        let mut tracker = HeaderTracker::default();
        let outcome = tracker.observe("|Stat*|v*");
        assert!(outcome.is_data);
        assert_eq!(outcome.new_header.as_deref(), Some("Stat*;v*"));
        assert_eq!(tracker.header(), Some("Stat*;v*"));
    }

    fn rows(lines: &[&str]) -> Vec<RawRow> {
        lines.iter().map(|l| vec![l.to_string()]).collect()
    }

    #[test]
    fn test_scenario_lines() {
        let input = rows(&["noise", "A*B*C", "Stat|X"]);
        let ds = collect_dataset(&input);
        assert_eq!(ds.values().collect::<Vec<_>>(), vec!["*B*C"]);
        assert_eq!(ds.header.as_deref(), Some("tat;X"));
        // row came before the header line
        assert_eq!(ds.rows[0].header, None);
    }

    #[test]
    fn test_first_header_wins() {
        let input = rows(&["Stat|first", "a*|b*", "Stat|second", "c*|d*"]);
        let ds = collect_dataset(&input);
        assert_eq!(ds.header.as_deref(), Some("tat;first"));
        assert_eq!(ds.len(), 2);
        assert!(ds
            .rows
            .iter()
            .all(|r| r.header.as_deref() == Some("tat;first")));
    }

    #[test]
    fn test_only_first_field_is_used() {
        let input = vec![
            vec!["x*|y*".to_string(), "ignored**".to_string()],
            vec!["plain".to_string(), "a*b*c".to_string()],
            Vec::new(),
        ];
        let ds = collect_dataset(&input);
        assert_eq!(ds.values().collect::<Vec<_>>(), vec!["*;y*"]);
    }

    #[test]
    fn test_overlap_row_keyed_by_its_own_header() {
        let input = rows(&["|Stat*|v*"]);
        let ds = collect_dataset(&input);
        assert_eq!(ds.header.as_deref(), Some("Stat*;v*"));
        assert_eq!(ds.rows[0].value, "Stat*;v*");
        assert_eq!(ds.rows[0].header.as_deref(), Some("Stat*;v*"));
    }

    #[test]
    fn test_all_noise_is_empty() {
        let input = rows(&["", "noise", "one*"]);
        let ds = collect_dataset(&input);
        assert!(ds.is_empty());
        assert!(ds.header.is_none());
    }
}
