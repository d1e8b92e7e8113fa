#![allow(dead_code)]

use chrono::NaiveDate;
use internhub_core::{
    AttendanceStatus, DomainStore, FixedClock, NewAttendance, NewIntern, NewTask,
    SqliteKvRepository, StoreConfig, TaskPriority, TaskStatus,
};
use rusqlite::Connection;

pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Store over `conn` with empty collections and a fixed "today".
pub fn empty_store(conn: &Connection, today: NaiveDate) -> DomainStore<SqliteKvRepository<'_>> {
    let repo = SqliteKvRepository::try_new(conn).unwrap();
    let config = StoreConfig {
        seed_when_empty: false,
        ..StoreConfig::default()
    };
    DomainStore::open_with_clock(repo, config, FixedClock(today))
}

/// Store over `conn` with seed collections and a fixed "today".
pub fn seeded_store(conn: &Connection, today: NaiveDate) -> DomainStore<SqliteKvRepository<'_>> {
    let repo = SqliteKvRepository::try_new(conn).unwrap();
    DomainStore::open_with_clock(repo, StoreConfig::default(), FixedClock(today))
}

pub fn new_intern(name: &str) -> NewIntern {
    NewIntern {
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        phone: "555-0100".to_string(),
        skills: vec!["Rust".to_string(), "SQL".to_string()],
        role: "Backend Developer".to_string(),
    }
}

pub fn new_task(title: &str, assignee: &str, deadline: NaiveDate, status: TaskStatus) -> NewTask {
    NewTask {
        title: title.to_string(),
        assigned_to: assignee.to_string(),
        deadline,
        status,
        priority: TaskPriority::Medium,
    }
}

pub fn mark(intern_id: &str, date: NaiveDate, status: AttendanceStatus) -> NewAttendance {
    let present = status == AttendanceStatus::Present;
    NewAttendance {
        intern_id: intern_id.to_string(),
        date,
        status,
        check_in: present.then(|| "09:00".to_string()),
        check_out: present.then(|| "17:00".to_string()),
        notes: None,
    }
}
