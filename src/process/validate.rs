use crate::process::utils::{
    clean_token, drop_first_char, HEADER_MARKER, JOIN_SEPARATOR, MARKER_CHAR,
    SUB_TOKEN_SEPARATOR,
};
use serde::Serialize;

/// What a single candidate line turned out to be.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    Data,
    Header,
    /// Emitted as data and captured as the header in the same call.
    DataAndHeader,
    Noise,
}

impl LineKind {
    pub fn as_str(&self) -> &str {
        match self {
            LineKind::Data => "data",
            LineKind::Header => "header",
            LineKind::DataAndHeader => "data+header",
            LineKind::Noise => "noise",
        }
    }
}

/// Result of validating one candidate line.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize)]
pub struct Classification {
    pub is_data: bool,
    /// The cleaned row, present only for data lines.
    pub normalized: Option<String>,
    /// Set only when this line is the one that captures the header.
    pub new_header: Option<String>,
}

impl Classification {
    pub fn kind(&self) -> LineKind {
        match (self.is_data, self.new_header.is_some()) {
            (true, true) => LineKind::DataAndHeader,
            (true, false) => LineKind::Data,
            (false, true) => LineKind::Header,
            (false, false) => LineKind::Noise,
        }
    }

    /// The emitted row, else the captured header, else empty.
    pub fn shown_value(&self) -> &str {
        self.normalized
            .as_deref()
            .or(self.new_header.as_deref())
            .unwrap_or("")
    }
}

/// Split on `|`, clean each sub-token, rejoin with `;` and drop the first character.
///
/// The first character is dropped unconditionally, even when it is not a
/// stray separator. Source files carry a leading-delimiter artifact on every
/// row and this is the only place it is removed.
pub fn normalize_line(line: &str) -> String {
    let joined = line
        .split(SUB_TOKEN_SEPARATOR)
        .map(clean_token)
        .collect::<Vec<_>>()
        .join(JOIN_SEPARATOR);
    drop_first_char(&joined).to_string()
}

pub fn count_markers(line: &str) -> usize {
    line.chars().filter(|&c| c == MARKER_CHAR).count()
}

pub fn is_header_line(line: &str) -> bool {
    line.contains(HEADER_MARKER)
}

/// Classify one candidate line and normalise it.
///
/// Data (more than one `*`) and header capture (`"Stat"` while no header is
/// held yet) are decided independently, so one line may do both. Never fails.
pub fn classify_and_normalize(line: &str, current_header: Option<&str>) -> Classification {
    let candidate = normalize_line(line);
    let is_data = count_markers(line) > 1;
    let new_header = if current_header.is_none() && is_header_line(line) {
        Some(candidate.clone())
    } else {
        None
    };

    Classification {
        is_data,
        normalized: is_data.then_some(candidate),
        new_header,
    }
}
