//! Tabular export of report rows.
//!
//! Produces the title, column headers and string cells a document renderer
//! needs, plus a CSV writer for plain-file export.

use super::projection::{Report, ReportRows};
use crate::model::snapshot::Snapshot;
use chrono::NaiveDate;
use std::io::Write;

const PERFORMANCE_HEADERS: &[&str] = &[
    "Intern Name",
    "Rating",
    "Tasks Completed",
    "Review Date",
    "Feedback",
];
const TASK_HEADERS: &[&str] = &["Title", "Assigned To", "Status", "Priority", "Deadline"];
const ATTENDANCE_HEADERS: &[&str] = &[
    "Intern Name",
    "Date",
    "Status",
    "Check In",
    "Check Out",
    "Notes",
];
const INTERN_HEADERS: &[&str] = &["Name", "Role", "Join Date", "Status"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportTable {
    /// e.g. `Task Report`.
    pub title: String,
    /// e.g. `Period: Month`.
    pub subtitle: String,
    pub generated_on: NaiveDate,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// `{type}-report-{period}-{YYYY-MM-DD}.csv`
    pub file_name: String,
}

/// Shapes `report` into a table; intern ids resolve through `snapshot`.
pub fn export_table(report: &Report, snapshot: &Snapshot, generated_on: NaiveDate) -> ExportTable {
    let type_name = report.report_type.map_or("unknown", |kind| kind.as_str());
    let period_name = report.period.as_str();

    let (headers, rows): (&[&str], Vec<Vec<String>>) = match &report.rows {
        ReportRows::Performance(reviews) => (
            PERFORMANCE_HEADERS,
            reviews
                .iter()
                .map(|review| {
                    vec![
                        snapshot.intern_name(&review.intern_id).to_string(),
                        review.rating.to_string(),
                        review.tasks_completed.to_string(),
                        review.last_review.to_string(),
                        review.feedback.clone(),
                    ]
                })
                .collect(),
        ),
        ReportRows::Task(tasks) => (
            TASK_HEADERS,
            tasks
                .iter()
                .map(|task| {
                    vec![
                        task.title.clone(),
                        task.assigned_to.clone(),
                        task.status.label().to_string(),
                        task.priority.label().to_string(),
                        task.deadline.to_string(),
                    ]
                })
                .collect(),
        ),
        ReportRows::Attendance(records) => (
            ATTENDANCE_HEADERS,
            records
                .iter()
                .map(|record| {
                    vec![
                        snapshot.intern_name(&record.intern_id).to_string(),
                        record.date.to_string(),
                        record.status.label().to_string(),
                        record.check_in.clone().unwrap_or_default(),
                        record.check_out.clone().unwrap_or_default(),
                        record.notes.clone().unwrap_or_default(),
                    ]
                })
                .collect(),
        ),
        ReportRows::Intern(interns) => (
            INTERN_HEADERS,
            interns
                .iter()
                .map(|intern| {
                    vec![
                        intern.name.clone(),
                        intern.role.clone(),
                        intern.join_date.to_string(),
                        intern.status.label().to_string(),
                    ]
                })
                .collect(),
        ),
        ReportRows::Empty => (&[], Vec::new()),
    };

    ExportTable {
        title: format!("{} Report", capitalize(type_name)),
        subtitle: format!("Period: {}", capitalize(period_name)),
        generated_on,
        headers: headers.iter().map(|header| header.to_string()).collect(),
        rows,
        file_name: format!("{type_name}-report-{period_name}-{generated_on}.csv"),
    }
}

impl ExportTable {
    /// Writes headers and rows as CSV.
    pub fn write_csv<W: Write>(&self, out: W) -> csv::Result<()> {
        let mut writer = csv::Writer::from_writer(out);
        if !self.headers.is_empty() {
            writer.write_record(&self.headers)?;
        }
        for row in &self.rows {
            writer.write_record(row)?;
        }
        writer.flush()?;
        Ok(())
    }
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
