mod common;

use common::{empty_store, mark, new_intern, seeded_store, ymd};
use internhub_core::db::{open_db, open_db_in_memory};
use internhub_core::service::seed::{seed_attendance, seed_interns, seed_performances, seed_tasks};
use internhub_core::{
    AttendanceRecord, AttendanceStatus, CollectionKey, Intern, InternStatus, KvRepository,
    PerformanceReview, PersistenceAdapter, SqliteKvRepository, Task,
};
use serde_json::Value;

#[test]
fn slot_write_overwrites_and_delete_reports_presence() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteKvRepository::try_new(&conn).unwrap();

    assert_eq!(repo.read_slot("tasks").unwrap(), None);
    repo.write_slot("tasks", "[]").unwrap();
    repo.write_slot("tasks", "[1]").unwrap();
    repo.write_slot("interns", "[]").unwrap();

    assert_eq!(repo.read_slot("tasks").unwrap().as_deref(), Some("[1]"));
    assert_eq!(repo.list_keys().unwrap(), vec!["interns", "tasks"]);
    assert!(repo.delete_slot("tasks").unwrap());
    assert!(!repo.delete_slot("tasks").unwrap());
}

#[test]
fn missing_and_corrupt_slots_load_the_default() {
    let conn = open_db_in_memory().unwrap();
    let adapter = PersistenceAdapter::new(SqliteKvRepository::try_new(&conn).unwrap());

    let missing: Vec<Intern> = adapter.load(CollectionKey::Interns, seed_interns());
    assert_eq!(missing, seed_interns());

    adapter
        .repository()
        .write_slot(CollectionKey::Tasks.as_str(), "{not json")
        .unwrap();
    let corrupt: Vec<Task> = adapter.load(CollectionKey::Tasks, Vec::new());
    assert!(corrupt.is_empty());
    assert!(adapter.try_load::<Vec<Task>>(CollectionKey::Tasks).is_err());

    assert!(adapter.clear(CollectionKey::Tasks).unwrap());
    assert!(adapter.try_load::<Vec<Task>>(CollectionKey::Tasks).unwrap().is_none());
}

#[test]
fn every_collection_round_trips_field_for_field() {
    let conn = open_db_in_memory().unwrap();
    let adapter = PersistenceAdapter::new(SqliteKvRepository::try_new(&conn).unwrap());

    let mut attendance = seed_attendance();
    attendance.push(AttendanceRecord::create(mark("1", ymd(2024, 3, 19), AttendanceStatus::Absent)));

    adapter.save(CollectionKey::Interns, &seed_interns());
    adapter.save(CollectionKey::Tasks, &seed_tasks());
    adapter.save(CollectionKey::Performances, &seed_performances());
    adapter.save(CollectionKey::Attendance, &attendance);

    assert_eq!(adapter.load::<Vec<Intern>>(CollectionKey::Interns, Vec::new()), seed_interns());
    assert_eq!(adapter.load::<Vec<Task>>(CollectionKey::Tasks, Vec::new()), seed_tasks());
    assert_eq!(
        adapter.load::<Vec<PerformanceReview>>(CollectionKey::Performances, Vec::new()),
        seed_performances()
    );
    let reloaded: Vec<AttendanceRecord> = adapter.load(CollectionKey::Attendance, Vec::new());
    assert_eq!(reloaded, attendance);
    assert_eq!(reloaded[1].check_in, None);
    assert_eq!(reloaded[1].notes, None);
}

#[test]
fn stored_layout_uses_legacy_field_names_and_labels() {
    let conn = open_db_in_memory().unwrap();
    let adapter = PersistenceAdapter::new(SqliteKvRepository::try_new(&conn).unwrap());
    adapter.save(CollectionKey::Tasks, &seed_tasks());

    let raw = adapter.repository().read_slot("tasks").unwrap().unwrap();
    let json: Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json[0]["assignedTo"], "Sarah Parker");
    assert_eq!(json[0]["status"], "In Progress");
    assert_eq!(json[0]["deadline"], "2024-03-20");
}

#[test]
fn legacy_attendance_blob_without_optional_fields_loads() {
    let conn = open_db_in_memory().unwrap();
    let adapter = PersistenceAdapter::new(SqliteKvRepository::try_new(&conn).unwrap());
    adapter
        .repository()
        .write_slot(
            "attendance",
            r#"[{"id":"7","internId":"1","date":"2024-03-18","status":"Half Day"}]"#,
        )
        .unwrap();

    let records: Vec<AttendanceRecord> = adapter.load(CollectionKey::Attendance, Vec::new());
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].status, AttendanceStatus::HalfDay);
    assert_eq!(records[0].check_out, None);
}

#[test]
fn file_backed_store_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("internhub.sqlite3");
    let today = ymd(2024, 6, 1);

    let intern_id = {
        let conn = open_db(&path).unwrap();
        let mut store = empty_store(&conn, today);
        store.add_intern(new_intern("Grace Hopper"))
    };

    let conn = open_db(&path).unwrap();
    let store = empty_store(&conn, today);
    let intern = store.intern(&intern_id).unwrap();
    assert_eq!(intern.name, "Grace Hopper");
    assert_eq!(intern.join_date, today);
    assert!(store.tasks().is_empty());
}

#[test]
fn corrupt_slot_opens_with_the_seed_collection() {
    let conn = open_db_in_memory().unwrap();
    SqliteKvRepository::try_new(&conn)
        .unwrap()
        .write_slot(CollectionKey::Tasks.as_str(), "{not json")
        .unwrap();

    let store = seeded_store(&conn, ymd(2024, 3, 20));
    assert_eq!(store.tasks(), seed_tasks().as_slice());
    assert_eq!(store.interns(), seed_interns().as_slice());
}

#[test]
fn stored_free_text_status_and_null_counts_are_kept() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteKvRepository::try_new(&conn).unwrap();
    repo.write_slot(
        "interns",
        r#"[{"id":"a","name":"Ada","email":"ada@example.com","phone":"","skills":["Rust",""],"role":"Backend","joinDate":"2024-01-02","status":"Active"},
            {"id":"b","name":"Bea","email":"bea@example.com","phone":"","skills":[],"role":"Design","joinDate":"2024-02-03","status":"On Leave"}]"#,
    )
    .unwrap();
    repo.write_slot(
        "performances",
        r#"[{"id":"r1","internId":"a","rating":4,"tasksCompleted":null,"lastReview":"2024-03-01","feedback":"ok"}]"#,
    )
    .unwrap();

    let mut store = seeded_store(&conn, ymd(2024, 3, 20));
    let names: Vec<&str> = store.interns().iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["Ada", "Bea"]);
    assert_eq!(store.interns()[0].skills, vec!["Rust".to_string(), String::new()]);
    assert_eq!(store.interns()[1].status, InternStatus::Other("On Leave".to_string()));
    assert!(!store.interns()[1].is_active());
    assert_eq!(store.performances().len(), 1);
    assert_eq!(store.performances()[0].tasks_completed, 0);

    store.add_intern(new_intern("Cy"));

    let raw = store_slot(&conn, "interns");
    let json: Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 3);
    assert_eq!(json[0]["name"], "Ada");
    assert_eq!(json[1]["status"], "On Leave");
}

fn store_slot(conn: &rusqlite::Connection, key: &str) -> String {
    SqliteKvRepository::try_new(conn)
        .unwrap()
        .read_slot(key)
        .unwrap()
        .unwrap()
}
