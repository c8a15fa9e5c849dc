//! Per-station commentary lookup.
//!
//! The analyst-facing report attaches fixed interpretation text to each
//! station's plots. The text is configuration data, not logic: it lives
//! in a JSON document mapping station codes to commentary records and
//! is only looked up here.

use crate::error::{AnalysisError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Commentary for one station, one block per report section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationCommentary {
    /// Commentary on the raw series plot.
    pub series: String,
    /// Commentary on the seasonal decomposition.
    pub decomposition: String,
    /// Commentary on the weekly resample.
    pub weekly: String,
    /// Commentary on the monthly resample.
    pub monthly: String,
    /// Commentary on the daily view; not every station provides one.
    #[serde(default)]
    pub daily: String,
}

/// Lookup table from station code to commentary.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NarrativeLibrary {
    entries: BTreeMap<String, StationCommentary>,
}

impl NarrativeLibrary {
    /// Parse a library from its JSON document.
    ///
    /// The document is an object keyed by station code:
    /// `{"ASFF01": {"series": "...", "decomposition": "...", ...}, ...}`.
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: BTreeMap<String, StationCommentary> =
            serde_json::from_str(json).map_err(|e| AnalysisError::NarrativeData(e.to_string()))?;
        Ok(Self { entries })
    }

    /// Commentary for a station, if the library covers it.
    pub fn commentary(&self, code: &str) -> Option<&StationCommentary> {
        self.entries.get(code)
    }

    /// Station codes the library covers, sorted.
    pub fn station_codes(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of stations covered.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the library is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
