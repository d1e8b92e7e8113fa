//! Domain model for interns and the records that reference them.
//!
//! # Responsibility
//! - Define the four persisted entity shapes and their field patches.
//! - Keep the serialized form compatible with the legacy storage layout
//!   (camelCase fields, display-string enum values, `YYYY-MM-DD` dates).
//!
//! # Invariants
//! - Every record is identified by an opaque, stable `RecordId`.
//! - `Task::assigned_to` references an intern by *name*, not by id.

use serde::{Deserialize, Deserializer};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub mod attendance;
pub mod intern;
pub mod review;
pub mod snapshot;
pub mod task;

/// Opaque record identifier.
///
/// Seed records use short legacy ids (`"1"`); new records get UUID v4 text.
pub type RecordId = String;

/// Generates a fresh identifier for a newly created record.
pub fn new_record_id() -> RecordId {
    Uuid::new_v4().to_string()
}

/// Reads a stored `null` as the type's default.
///
/// Legacy review forms wrote unparsable numbers as `null`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Entity category, used to label lookups and errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Intern,
    Task,
    PerformanceReview,
    Attendance,
}

impl EntityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Intern => "intern",
            Self::Task => "task",
            Self::PerformanceReview => "performance_review",
            Self::Attendance => "attendance",
        }
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field-level validation failure for a domain record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A clock field is not a `HH:MM` 24-hour value.
    InvalidClockTime { field: &'static str, value: String },
    /// `check_out` is earlier than `check_in`.
    CheckOutBeforeCheckIn { check_in: String, check_out: String },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidClockTime { field, value } => {
                write!(f, "{field} must be a HH:MM time, got `{value}`")
            }
            Self::CheckOutBeforeCheckIn {
                check_in,
                check_out,
            } => write!(
                f,
                "check_out `{check_out}` is earlier than check_in `{check_in}`"
            ),
        }
    }
}

impl Error for ValidationError {}
