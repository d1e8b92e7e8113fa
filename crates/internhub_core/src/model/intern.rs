//! Intern records.

use super::{new_record_id, RecordId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Enrollment state of an intern.
///
/// Stored as free text; labels other than `Active`/`Inactive` are kept as-is
/// and count as not active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InternStatus {
    Active,
    Inactive,
    #[serde(untagged)]
    Other(String),
}

impl InternStatus {
    pub fn label(&self) -> &str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Other(label) => label,
        }
    }
}

/// One intern enrolled in the program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Intern {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Ordered as entered; duplicates are kept.
    pub skills: Vec<String>,
    pub role: String,
    pub join_date: NaiveDate,
    pub status: InternStatus,
}

/// Caller-supplied fields for a new intern.
///
/// `id`, `join_date` and `status` are assigned by the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewIntern {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub skills: Vec<String>,
    pub role: String,
}

/// Partial update for an intern; `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InternPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub skills: Option<Vec<String>>,
    pub role: Option<String>,
    pub join_date: Option<NaiveDate>,
    pub status: Option<InternStatus>,
}

impl Intern {
    /// Builds an active intern joining on `join_date` with a fresh id.
    pub fn enroll(fields: NewIntern, join_date: NaiveDate) -> Self {
        Self {
            id: new_record_id(),
            name: fields.name,
            email: fields.email,
            phone: fields.phone,
            skills: fields.skills,
            role: fields.role,
            join_date,
            status: InternStatus::Active,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == InternStatus::Active
    }

    /// Merges every set field of `patch` into this record.
    pub fn apply(&mut self, patch: InternPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(skills) = patch.skills {
            self.skills = skills;
        }
        if let Some(role) = patch.role {
            self.role = role;
        }
        if let Some(join_date) = patch.join_date {
            self.join_date = join_date;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_status_labels_survive_a_round_trip() {
        let status: InternStatus = serde_json::from_str(r#""On Leave""#).unwrap();
        assert_eq!(status, InternStatus::Other("On Leave".to_string()));
        assert_eq!(status.label(), "On Leave");
        assert_eq!(serde_json::to_string(&status).unwrap(), r#""On Leave""#);

        let active: InternStatus = serde_json::from_str(r#""Active""#).unwrap();
        assert_eq!(active, InternStatus::Active);
    }

    #[test]
    fn apply_only_touches_set_fields() {
        let join = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let mut intern = Intern::enroll(
            NewIntern {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                ..NewIntern::default()
            },
            join,
        );

        intern.apply(InternPatch {
            role: Some("Backend".to_string()),
            ..InternPatch::default()
        });

        assert_eq!(intern.name, "Ada");
        assert_eq!(intern.role, "Backend");
        assert_eq!(intern.join_date, join);
        assert!(intern.is_active());
    }
}
