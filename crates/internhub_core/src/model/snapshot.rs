//! Point-in-time view of all four collections.

use super::attendance::AttendanceRecord;
use super::intern::Intern;
use super::review::PerformanceReview;
use super::task::Task;

/// The four entity collections, each in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub interns: Vec<Intern>,
    pub tasks: Vec<Task>,
    pub performances: Vec<PerformanceReview>,
    pub attendance: Vec<AttendanceRecord>,
}

impl Snapshot {
    pub fn find_intern(&self, id: &str) -> Option<&Intern> {
        self.interns.iter().find(|intern| intern.id == id)
    }

    /// Resolves an intern id to a display name, or `"Unknown"`.
    pub fn intern_name(&self, id: &str) -> &str {
        self.find_intern(id)
            .map_or("Unknown", |intern| intern.name.as_str())
    }
}
