//! Daily attendance records.
//!
//! # Invariants
//! - At most one record exists per `(intern_id, date)`; the store upserts.
//! - `check_in`/`check_out` are kept only for `Present` days.
//! - Clock fields use `HH:MM` 24-hour text, matching the legacy layout.

use super::{new_record_id, RecordId, ValidationError};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static CLOCK_TIME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([01]\d|2[0-3]):[0-5]\d$").expect("valid clock time regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Present,
    Absent,
    #[serde(rename = "Half Day")]
    HalfDay,
    Leave,
}

impl AttendanceStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Present => "Present",
            Self::Absent => "Absent",
            Self::HalfDay => "Half Day",
            Self::Leave => "Leave",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub id: RecordId,
    pub intern_id: RecordId,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_in: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_out: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Attendance mark for one intern on one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAttendance {
    pub intern_id: RecordId,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    pub check_in: Option<String>,
    pub check_out: Option<String>,
    pub notes: Option<String>,
}

/// Partial update by record id.
///
/// Optional record fields use a nested `Option`: `Some(None)` clears.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendancePatch {
    pub intern_id: Option<RecordId>,
    pub date: Option<NaiveDate>,
    pub status: Option<AttendanceStatus>,
    pub check_in: Option<Option<String>>,
    pub check_out: Option<Option<String>>,
    pub notes: Option<Option<String>>,
}

impl NewAttendance {
    /// Checks clock fields before they reach the store.
    ///
    /// Only `Present` marks keep their clock fields, so other statuses pass.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.status != AttendanceStatus::Present {
            return Ok(());
        }
        validate_clock_pair(self.check_in.as_deref(), self.check_out.as_deref())
    }
}

impl AttendanceRecord {
    pub fn create(fields: NewAttendance) -> Self {
        let mut record = Self {
            id: new_record_id(),
            intern_id: fields.intern_id.clone(),
            date: fields.date,
            status: fields.status,
            check_in: None,
            check_out: None,
            notes: None,
        };
        record.restamp(fields);
        record
    }

    /// Overwrites the day's mark with `fields`, keeping id, intern and date.
    ///
    /// Clock fields are dropped unless the new status is `Present`.
    pub fn restamp(&mut self, fields: NewAttendance) {
        let present = fields.status == AttendanceStatus::Present;
        self.status = fields.status;
        self.check_in = fields.check_in.filter(|_| present);
        self.check_out = fields.check_out.filter(|_| present);
        self.notes = fields.notes;
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_clock_pair(self.check_in.as_deref(), self.check_out.as_deref())
    }

    pub fn apply(&mut self, patch: AttendancePatch) {
        if let Some(intern_id) = patch.intern_id {
            self.intern_id = intern_id;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(check_in) = patch.check_in {
            self.check_in = check_in;
        }
        if let Some(check_out) = patch.check_out {
            self.check_out = check_out;
        }
        if let Some(notes) = patch.notes {
            self.notes = notes;
        }
    }
}

fn validate_clock_pair(
    check_in: Option<&str>,
    check_out: Option<&str>,
) -> Result<(), ValidationError> {
    for (field, value) in [("check_in", check_in), ("check_out", check_out)] {
        if let Some(value) = value {
            if !CLOCK_TIME_RE.is_match(value) {
                return Err(ValidationError::InvalidClockTime {
                    field,
                    value: value.to_string(),
                });
            }
        }
    }

    // Zero-padded HH:MM compares correctly as text.
    if let (Some(check_in), Some(check_out)) = (check_in, check_out) {
        if check_out < check_in {
            return Err(ValidationError::CheckOutBeforeCheckIn {
                check_in: check_in.to_string(),
                check_out: check_out.to_string(),
            });
        }
    }

    Ok(())
}
