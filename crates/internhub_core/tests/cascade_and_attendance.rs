mod common;

use common::{empty_store, mark, new_intern, new_task, seeded_store, ymd};
use internhub_core::db::open_db_in_memory;
use internhub_core::{
    AttendancePatch, AttendanceStatus, AttendanceUpsert, CascadeSummary, CollectionKey,
    KvRepository, NewPerformanceReview, SqliteKvRepository, StoreError, TaskStatus,
    ValidationError,
};

#[test]
fn seed_scenario_delete_empties_every_collection() {
    let conn = open_db_in_memory().unwrap();
    let mut store = seeded_store(&conn, ymd(2024, 3, 20));
    assert_eq!(store.interns().len(), 1);
    assert_eq!(store.interns()[0].name, "Sarah Parker");
    assert_eq!(store.tasks().len(), 1);
    assert_eq!(store.performances().len(), 1);
    assert_eq!(store.attendance().len(), 1);

    let summary = store.delete_intern("1").unwrap();
    assert_eq!(
        summary,
        CascadeSummary {
            tasks_removed: 1,
            reviews_removed: 1,
            attendance_removed: 1,
        }
    );
    assert!(store.interns().is_empty());
    assert!(store.tasks().is_empty());
    assert!(store.performances().is_empty());
    assert!(store.attendance().is_empty());

    // Empty collections are persisted, so reopening does not reseed.
    let repo = SqliteKvRepository::try_new(&conn).unwrap();
    for key in CollectionKey::ALL {
        assert_eq!(repo.read_slot(key.as_str()).unwrap().as_deref(), Some("[]"));
    }
    drop(store);
    let reopened = seeded_store(&conn, ymd(2024, 3, 20));
    assert!(reopened.interns().is_empty());
}

#[test]
fn delete_intern_cascades_only_to_its_records() {
    let conn = open_db_in_memory().unwrap();
    let today = ymd(2024, 4, 2);
    let mut store = empty_store(&conn, today);
    let ada = store.add_intern(new_intern("Ada Lovelace"));
    let alan = store.add_intern(new_intern("Alan Turing"));

    store.add_task(new_task("Docs", "Ada Lovelace", today, TaskStatus::ToDo));
    store.add_task(new_task("Tests", "Ada Lovelace", today, TaskStatus::Completed));
    let alan_task = store.add_task(new_task("Proofs", "Alan Turing", today, TaskStatus::ToDo));
    for intern_id in [&ada, &alan] {
        store.add_performance_review(NewPerformanceReview {
            intern_id: intern_id.clone(),
            rating: 4.0,
            tasks_completed: 1,
            last_review: today,
            feedback: String::new(),
        });
        store
            .add_attendance(mark(intern_id, today, AttendanceStatus::Present))
            .unwrap();
    }

    let summary = store.delete_intern(&ada).unwrap();
    assert_eq!(summary.tasks_removed, 2);
    assert_eq!(summary.reviews_removed, 1);
    assert_eq!(summary.attendance_removed, 1);

    assert_eq!(store.interns().len(), 1);
    assert_eq!(store.tasks().len(), 1);
    assert_eq!(store.tasks()[0].id, alan_task);
    assert!(store.performances().iter().all(|r| r.intern_id == alan));
    assert!(store.attendance().iter().all(|a| a.intern_id == alan));
}

#[test]
fn delete_intern_uses_name_before_deletion_only() {
    let conn = open_db_in_memory().unwrap();
    let today = ymd(2024, 4, 2);
    let mut store = empty_store(&conn, today);
    let ada = store.add_intern(new_intern("Ada Lovelace"));
    store.add_task(new_task("Unassigned", "Someone Else", today, TaskStatus::ToDo));

    store.delete_intern(&ada).unwrap();
    assert_eq!(store.tasks().len(), 1);
}

#[test]
fn add_attendance_twice_for_same_day_upserts() {
    let conn = open_db_in_memory().unwrap();
    let today = ymd(2024, 4, 2);
    let mut store = empty_store(&conn, today);
    let ada = store.add_intern(new_intern("Ada Lovelace"));

    let first = store
        .add_attendance(mark(&ada, today, AttendanceStatus::Present))
        .unwrap();
    assert!(matches!(first, AttendanceUpsert::Inserted(_)));

    let mut second_fields = mark(&ada, today, AttendanceStatus::HalfDay);
    second_fields.check_in = Some("09:00".to_string());
    second_fields.notes = Some("left at noon".to_string());
    let second = store.add_attendance(second_fields).unwrap();
    assert_eq!(second, AttendanceUpsert::Updated(first.id().to_string()));

    let records = store.get_intern_attendance(&ada);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].status, AttendanceStatus::HalfDay);
    assert_eq!(records[0].check_in, None);
    assert_eq!(records[0].check_out, None);
    assert_eq!(records[0].notes.as_deref(), Some("left at noon"));
}

#[test]
fn get_intern_attendance_keeps_insertion_order() {
    let conn = open_db_in_memory().unwrap();
    let mut store = empty_store(&conn, ymd(2024, 4, 5));
    let ada = store.add_intern(new_intern("Ada Lovelace"));
    let alan = store.add_intern(new_intern("Alan Turing"));

    for (intern, day) in [(&ada, 3), (&alan, 3), (&ada, 1), (&ada, 2)] {
        store
            .add_attendance(mark(intern, ymd(2024, 4, day), AttendanceStatus::Present))
            .unwrap();
    }

    let dates: Vec<_> = store
        .get_intern_attendance(&ada)
        .iter()
        .map(|record| record.date)
        .collect();
    assert_eq!(dates, vec![ymd(2024, 4, 3), ymd(2024, 4, 1), ymd(2024, 4, 2)]);
}

#[test]
fn malformed_times_are_rejected_before_writing() {
    let conn = open_db_in_memory().unwrap();
    let today = ymd(2024, 4, 2);
    let mut store = empty_store(&conn, today);
    let ada = store.add_intern(new_intern("Ada Lovelace"));

    let mut fields = mark(&ada, today, AttendanceStatus::Present);
    fields.check_out = Some("25:00".to_string());
    let err = store.add_attendance(fields).unwrap_err();
    assert!(matches!(
        err,
        StoreError::Validation(ValidationError::InvalidClockTime { field: "check_out", .. })
    ));
    assert!(store.attendance().is_empty());
}

#[test]
fn stale_times_on_absent_marks_are_dropped_not_rejected() {
    let conn = open_db_in_memory().unwrap();
    let today = ymd(2024, 4, 2);
    let mut store = empty_store(&conn, today);
    let ada = store.add_intern(new_intern("Ada Lovelace"));

    let mut fields = mark(&ada, today, AttendanceStatus::Absent);
    fields.check_in = Some("9am".to_string());
    let outcome = store.add_attendance(fields).unwrap();

    let record = store.attendance_record(outcome.id()).unwrap();
    assert_eq!(record.status, AttendanceStatus::Absent);
    assert_eq!(record.check_in, None);
}

#[test]
fn update_attendance_patches_and_guards_day_uniqueness() {
    let conn = open_db_in_memory().unwrap();
    let mut store = empty_store(&conn, ymd(2024, 4, 5));
    let ada = store.add_intern(new_intern("Ada Lovelace"));
    let monday = store
        .add_attendance(mark(&ada, ymd(2024, 4, 1), AttendanceStatus::Present))
        .unwrap();
    let tuesday = store
        .add_attendance(mark(&ada, ymd(2024, 4, 2), AttendanceStatus::Absent))
        .unwrap();

    store
        .update_attendance(
            tuesday.id(),
            AttendancePatch {
                status: Some(AttendanceStatus::Leave),
                notes: Some(Some("approved".to_string())),
                ..AttendancePatch::default()
            },
        )
        .unwrap();
    let record = store.attendance_record(tuesday.id()).unwrap();
    assert_eq!(record.status, AttendanceStatus::Leave);
    assert_eq!(record.notes.as_deref(), Some("approved"));

    let err = store
        .update_attendance(
            tuesday.id(),
            AttendancePatch {
                date: Some(ymd(2024, 4, 1)),
                ..AttendancePatch::default()
            },
        )
        .unwrap_err();
    assert_eq!(
        err,
        StoreError::AttendanceConflict {
            intern_id: ada.clone(),
            date: ymd(2024, 4, 1),
            existing_id: monday.id().to_string(),
        }
    );
    assert_eq!(
        store.attendance_record(tuesday.id()).unwrap().date,
        ymd(2024, 4, 2)
    );

    store.delete_attendance(monday.id()).unwrap();
    assert_eq!(store.get_intern_attendance(&ada).len(), 1);
}
