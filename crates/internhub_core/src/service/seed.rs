//! First-run sample data, one record per collection.
//!
//! All seed records reference intern `"1"` (Sarah Parker).

use crate::model::attendance::{AttendanceRecord, AttendanceStatus};
use crate::model::intern::{Intern, InternStatus};
use crate::model::review::PerformanceReview;
use crate::model::task::{Task, TaskPriority, TaskStatus};
use chrono::NaiveDate;

pub const SEED_INTERN_ID: &str = "1";
pub const SEED_INTERN_NAME: &str = "Sarah Parker";

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

pub fn seed_interns() -> Vec<Intern> {
    vec![Intern {
        id: SEED_INTERN_ID.to_string(),
        name: SEED_INTERN_NAME.to_string(),
        email: "sarah.parker@example.com".to_string(),
        phone: "123-456-7890".to_string(),
        skills: vec!["React".to_string(), "TypeScript".to_string(), "CSS".to_string()],
        role: "Frontend Developer".to_string(),
        join_date: date(2024, 1, 15),
        status: InternStatus::Active,
    }]
}

pub fn seed_tasks() -> Vec<Task> {
    vec![Task {
        id: "1".to_string(),
        title: "Complete React Tutorial".to_string(),
        assigned_to: SEED_INTERN_NAME.to_string(),
        deadline: date(2024, 3, 20),
        status: TaskStatus::InProgress,
        priority: TaskPriority::High,
    }]
}

pub fn seed_performances() -> Vec<PerformanceReview> {
    vec![PerformanceReview {
        id: "1".to_string(),
        intern_id: SEED_INTERN_ID.to_string(),
        rating: 4.5,
        tasks_completed: 15,
        last_review: date(2024, 3, 1),
        feedback: "Excellent progress in React development. Shows great initiative.".to_string(),
    }]
}

pub fn seed_attendance() -> Vec<AttendanceRecord> {
    vec![AttendanceRecord {
        id: "1".to_string(),
        intern_id: SEED_INTERN_ID.to_string(),
        date: date(2024, 3, 18),
        status: AttendanceStatus::Present,
        check_in: Some("09:00".to_string()),
        check_out: Some("17:00".to_string()),
        notes: None,
    }]
}
