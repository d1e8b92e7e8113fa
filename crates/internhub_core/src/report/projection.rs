//! Period-filtered report rows.

use super::window::{ReportPeriod, ReportType};
use crate::model::attendance::AttendanceRecord;
use crate::model::intern::Intern;
use crate::model::review::PerformanceReview;
use crate::model::snapshot::Snapshot;
use crate::model::task::Task;
use chrono::NaiveDate;

/// Rows of one report, typed by source collection.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportRows {
    Performance(Vec<PerformanceReview>),
    Task(Vec<Task>),
    Attendance(Vec<AttendanceRecord>),
    Intern(Vec<Intern>),
    /// Unrecognized report type.
    Empty,
}

impl ReportRows {
    pub fn len(&self) -> usize {
        match self {
            Self::Performance(rows) => rows.len(),
            Self::Task(rows) => rows.len(),
            Self::Attendance(rows) => rows.len(),
            Self::Intern(rows) => rows.len(),
            Self::Empty => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// `None` when the requested type was not recognized.
    pub report_type: Option<ReportType>,
    pub period: ReportPeriod,
    pub window_start: NaiveDate,
    pub today: NaiveDate,
    pub rows: ReportRows,
}

/// Builds a report from raw selector strings.
///
/// Unrecognized `report_type` gives empty rows; unrecognized `period` is
/// treated as all time.
pub fn generate_report(
    snapshot: &Snapshot,
    report_type: &str,
    period: &str,
    today: NaiveDate,
) -> Report {
    let period = ReportPeriod::parse(period);
    match ReportType::parse(report_type) {
        Some(kind) => build_report(snapshot, kind, period, today),
        None => Report {
            report_type: None,
            period,
            window_start: period.window_start(today),
            today,
            rows: ReportRows::Empty,
        },
    }
}

/// Builds a report from typed selectors.
pub fn build_report(
    snapshot: &Snapshot,
    kind: ReportType,
    period: ReportPeriod,
    today: NaiveDate,
) -> Report {
    let in_window = |date: NaiveDate| period.contains(date, today);
    let rows = match kind {
        ReportType::Performance => ReportRows::Performance(filter_cloned(
            &snapshot.performances,
            |review| in_window(review.last_review),
        )),
        ReportType::Task => {
            ReportRows::Task(filter_cloned(&snapshot.tasks, |task| in_window(task.deadline)))
        }
        ReportType::Attendance => ReportRows::Attendance(filter_cloned(
            &snapshot.attendance,
            |record| in_window(record.date),
        )),
        ReportType::Intern => ReportRows::Intern(filter_cloned(
            &snapshot.interns,
            |intern| in_window(intern.join_date),
        )),
    };

    Report {
        report_type: Some(kind),
        period,
        window_start: period.window_start(today),
        today,
        rows,
    }
}

fn filter_cloned<T: Clone>(items: &[T], keep: impl Fn(&T) -> bool) -> Vec<T> {
    items.iter().filter(|item| keep(item)).cloned().collect()
}
