use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// One raw punch-in/punch-out record, exactly as the upstream API delivers it.
///
/// The payload uses PascalCase field names and misspells the start timestamp
/// as `StarTimeUtc`; both are contractual and must not be "fixed" here.
/// Timestamps arrive without a UTC offset, so they are kept naive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntryRecord {
    #[serde(rename = "Id")]
    pub id: Uuid,

    // Upstream sends null for some records.
    #[serde(rename = "EmployeeName")]
    pub employee_name: Option<String>,

    #[serde(rename = "StarTimeUtc")]
    pub start_time_utc: NaiveDateTime,

    #[serde(rename = "EndTimeUtc")]
    pub end_time_utc: NaiveDateTime,

    #[serde(rename = "EntryNotes")]
    pub entry_notes: Option<String>,

    // Soft-delete marker; present in the schema, never filtered on.
    #[serde(rename = "DeletedOn")]
    pub deleted_on: Option<NaiveDateTime>,
}

impl TimeEntryRecord {
    /// Elapsed time of this entry in fractional hours.
    ///
    /// Negative when the end timestamp precedes the start timestamp; callers
    /// that want to reject such records run `validate_intervals` first.
    pub fn worked_hours(&self) -> f64 {
        (self.end_time_utc - self.start_time_utc).num_milliseconds() as f64 / MILLIS_PER_HOUR
    }
}
