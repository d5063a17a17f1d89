//! Catalog filter construction and evaluation.
//!
//! Search is a full-scan-and-filter design: the filter is an in-process
//! predicate evaluated record-by-record, never pushed down as an
//! indexed query. Acceptable at this catalog's scale; a secondary
//! search index is an external collaborator, not part of this core.

use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::IntoParams;

use super::voiceover::VoiceoverRecord;

/// Wire-level search parameters (`GET /voiceovers/search`).
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    /// Case-insensitive substring match on the voiceover name.
    pub q: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// Composed catalog filter. Clauses AND together; an empty filter
/// matches every record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoiceoverFilter {
    name_contains: Option<String>,
    date_range: Option<(NaiveDate, NaiveDate)>,
}

impl VoiceoverFilter {
    /// Filter on `voiceover_name` containing `needle`, ignoring case.
    /// Blank needles are dropped rather than matching nothing.
    pub fn with_name_contains(mut self, needle: &str) -> Self {
        let needle = needle.trim();
        if !needle.is_empty() {
            self.name_contains = Some(needle.to_lowercase());
        }
        self
    }

    /// Filter on `project_date` in `[start, end]` inclusive.
    pub fn with_date_range(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.date_range = Some((start, end));
        self
    }

    /// Build the filter from wire parameters. A date bound on its own
    /// is not a valid combination and is treated as no date filter.
    pub fn from_params(params: &SearchParams) -> Self {
        let mut filter = VoiceoverFilter::default();
        if let Some(q) = params.q.as_deref() {
            filter = filter.with_name_contains(q);
        }
        if let (Some(start), Some(end)) = (params.start_date, params.end_date) {
            filter = filter.with_date_range(start, end);
        }
        filter
    }

    pub fn is_empty(&self) -> bool {
        self.name_contains.is_none() && self.date_range.is_none()
    }

    /// Evaluate the composed predicate against one record.
    pub fn matches(&self, record: &VoiceoverRecord) -> bool {
        if let Some(needle) = &self.name_contains {
            if !record.voiceover_name.to_lowercase().contains(needle) {
                return false;
            }
        }
        if let Some((start, end)) = self.date_range {
            if record.project_date < start || record.project_date > end {
                return false;
            }
        }
        true
    }
}
