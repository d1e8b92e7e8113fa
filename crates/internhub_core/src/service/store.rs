//! Domain store: the single owner of all intern-related collections.
//!
//! # Responsibility
//! - Hold interns, tasks, performance reviews and attendance in memory.
//! - Apply every mutation and write the affected collections back.
//! - Enforce cascade deletes and per-day attendance uniqueness.
//!
//! # Invariants
//! - A failed operation leaves memory and storage untouched.
//! - At most one attendance record exists per `(intern_id, date)`.
//! - Deleting an intern removes its reviews, its attendance, and every task
//!   assigned to its name as it was before deletion.
//! - Persistence writes are best-effort and never fail an operation.

use crate::config::StoreConfig;
use crate::model::attendance::{AttendancePatch, AttendanceRecord, NewAttendance};
use crate::model::intern::{Intern, InternPatch, NewIntern};
use crate::model::review::{NewPerformanceReview, PerformanceReview, PerformanceReviewPatch};
use crate::model::snapshot::Snapshot;
use crate::model::task::{NewTask, Task, TaskPatch, TaskStatus};
use crate::model::{EntityKind, RecordId, ValidationError};
use crate::report::projection::{generate_report, Report};
use crate::repo::collections::{CollectionKey, PersistenceAdapter};
use crate::repo::kv_repo::KvRepository;
use crate::service::clock::{Clock, SystemClock};
use crate::service::seed;
use chrono::NaiveDate;
use log::{debug, info};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No record of `kind` has this id.
    NotFound { kind: EntityKind, id: RecordId },
    /// Record fields failed validation.
    Validation(ValidationError),
    /// A patch would create a second attendance record for one day.
    AttendanceConflict {
        intern_id: RecordId,
        date: NaiveDate,
        existing_id: RecordId,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { kind, id } => write!(f, "{kind} not found: {id}"),
            Self::Validation(err) => write!(f, "{err}"),
            Self::AttendanceConflict {
                intern_id,
                date,
                existing_id,
            } => write!(
                f,
                "attendance for intern {intern_id} on {date} already exists as {existing_id}"
            ),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for StoreError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Records removed alongside an intern.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CascadeSummary {
    pub tasks_removed: usize,
    pub reviews_removed: usize,
    pub attendance_removed: usize,
}

/// Whether `add_attendance` created a record or overwrote the day's mark.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttendanceUpsert {
    Inserted(RecordId),
    Updated(RecordId),
}

impl AttendanceUpsert {
    pub fn id(&self) -> &str {
        match self {
            Self::Inserted(id) | Self::Updated(id) => id,
        }
    }
}

/// In-memory collections synchronized to a slot repository.
pub struct DomainStore<R: KvRepository> {
    adapter: PersistenceAdapter<R>,
    clock: Box<dyn Clock>,
    config: StoreConfig,
    state: Snapshot,
}

impl<R: KvRepository> DomainStore<R> {
    /// Loads all collections using the local system date as "today".
    pub fn open(repo: R, config: StoreConfig) -> Self {
        Self::open_with_clock(repo, config, SystemClock)
    }

    /// Loads all collections with an explicit clock.
    ///
    /// Empty or unreadable slots fall back to the seed records when
    /// `config.seed_when_empty` is set, otherwise to empty collections.
    pub fn open_with_clock(repo: R, config: StoreConfig, clock: impl Clock + 'static) -> Self {
        let adapter = PersistenceAdapter::new(repo);
        let state = load_state(&adapter, &config);
        info!(
            "event=store_open module=store status=ok interns={} tasks={} performances={} attendance={}",
            state.interns.len(),
            state.tasks.len(),
            state.performances.len(),
            state.attendance.len()
        );
        Self {
            adapter,
            clock: Box::new(clock),
            config,
            state,
        }
    }

    /// Discards in-memory state and re-reads every collection.
    pub fn reload(&mut self) {
        self.state = load_state(&self.adapter, &self.config);
        debug!("event=store_reload module=store status=ok");
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.state
    }

    pub fn interns(&self) -> &[Intern] {
        &self.state.interns
    }

    pub fn tasks(&self) -> &[Task] {
        &self.state.tasks
    }

    pub fn performances(&self) -> &[PerformanceReview] {
        &self.state.performances
    }

    pub fn attendance(&self) -> &[AttendanceRecord] {
        &self.state.attendance
    }

    pub fn intern(&self, id: &str) -> Option<&Intern> {
        self.state.find_intern(id)
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        self.state.tasks.iter().find(|task| task.id == id)
    }

    pub fn performance_review(&self, id: &str) -> Option<&PerformanceReview> {
        self.state.performances.iter().find(|review| review.id == id)
    }

    pub fn attendance_record(&self, id: &str) -> Option<&AttendanceRecord> {
        self.state.attendance.iter().find(|record| record.id == id)
    }

    // ---- interns ----

    /// Enrolls a new active intern joining today.
    pub fn add_intern(&mut self, fields: NewIntern) -> RecordId {
        let intern = Intern::enroll(fields, self.today());
        let id = intern.id.clone();
        self.state.interns.push(intern);
        self.persist(CollectionKey::Interns);
        info!("event=intern_add module=store status=ok id={id}");
        id
    }

    pub fn update_intern(&mut self, id: &str, patch: InternPatch) -> StoreResult<()> {
        let intern = self
            .state
            .interns
            .iter_mut()
            .find(|intern| intern.id == id)
            .ok_or_else(|| not_found(EntityKind::Intern, id))?;
        intern.apply(patch);
        self.persist(CollectionKey::Interns);
        info!("event=intern_update module=store status=ok id={id}");
        Ok(())
    }

    /// Removes an intern and everything that references it.
    ///
    /// Tasks are matched by the intern's name captured before removal.
    pub fn delete_intern(&mut self, id: &str) -> StoreResult<CascadeSummary> {
        let position = self
            .state
            .interns
            .iter()
            .position(|intern| intern.id == id)
            .ok_or_else(|| not_found(EntityKind::Intern, id))?;
        let removed = self.state.interns.remove(position);

        let summary = CascadeSummary {
            tasks_removed: retain_counting(&mut self.state.tasks, |task| {
                task.assigned_to != removed.name
            }),
            reviews_removed: retain_counting(&mut self.state.performances, |review| {
                review.intern_id != removed.id
            }),
            attendance_removed: retain_counting(&mut self.state.attendance, |record| {
                record.intern_id != removed.id
            }),
        };

        for key in CollectionKey::ALL {
            self.persist(key);
        }
        info!(
            "event=intern_delete module=store status=ok id={id} tasks_removed={} reviews_removed={} attendance_removed={}",
            summary.tasks_removed, summary.reviews_removed, summary.attendance_removed
        );
        Ok(summary)
    }

    // ---- tasks ----

    pub fn add_task(&mut self, fields: NewTask) -> RecordId {
        let task = Task::create(fields);
        let id = task.id.clone();
        self.state.tasks.push(task);
        self.persist(CollectionKey::Tasks);
        info!("event=task_add module=store status=ok id={id}");
        id
    }

    pub fn update_task(&mut self, id: &str, patch: TaskPatch) -> StoreResult<()> {
        self.task_mut(id)?.apply(patch);
        self.persist(CollectionKey::Tasks);
        info!("event=task_update module=store status=ok id={id}");
        Ok(())
    }

    /// Moves a task to another kanban column; no other field changes.
    pub fn update_task_status(&mut self, id: &str, status: TaskStatus) -> StoreResult<()> {
        self.task_mut(id)?.status = status;
        self.persist(CollectionKey::Tasks);
        info!(
            "event=task_status module=store status=ok id={id} task_status={}",
            status.label()
        );
        Ok(())
    }

    pub fn delete_task(&mut self, id: &str) -> StoreResult<()> {
        remove_by_id(&mut self.state.tasks, id, |task| &task.id, EntityKind::Task)?;
        self.persist(CollectionKey::Tasks);
        info!("event=task_delete module=store status=ok id={id}");
        Ok(())
    }

    /// Tasks whose assignee name matches the intern with `intern_id`.
    pub fn tasks_for_intern(&self, intern_id: &str) -> Vec<&Task> {
        match self.intern(intern_id) {
            Some(intern) => self
                .state
                .tasks
                .iter()
                .filter(|task| task.assigned_to == intern.name)
                .collect(),
            None => Vec::new(),
        }
    }

    /// Tasks whose assignee name matches no current intern.
    pub fn orphaned_tasks(&self) -> Vec<&Task> {
        let names: HashSet<&str> = self
            .state
            .interns
            .iter()
            .map(|intern| intern.name.as_str())
            .collect();
        self.state
            .tasks
            .iter()
            .filter(|task| !names.contains(task.assigned_to.as_str()))
            .collect()
    }

    fn task_mut(&mut self, id: &str) -> StoreResult<&mut Task> {
        self.state
            .tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or_else(|| not_found(EntityKind::Task, id))
    }

    // ---- performance reviews ----

    /// Adds a review; the rating is stored as given.
    pub fn add_performance_review(&mut self, fields: NewPerformanceReview) -> RecordId {
        let review = PerformanceReview::create(fields);
        let id = review.id.clone();
        self.state.performances.push(review);
        self.persist(CollectionKey::Performances);
        info!("event=review_add module=store status=ok id={id}");
        id
    }

    pub fn update_performance_review(
        &mut self,
        id: &str,
        patch: PerformanceReviewPatch,
    ) -> StoreResult<()> {
        let review = self
            .state
            .performances
            .iter_mut()
            .find(|review| review.id == id)
            .ok_or_else(|| not_found(EntityKind::PerformanceReview, id))?;
        review.apply(patch);
        self.persist(CollectionKey::Performances);
        info!("event=review_update module=store status=ok id={id}");
        Ok(())
    }

    pub fn delete_performance_review(&mut self, id: &str) -> StoreResult<()> {
        remove_by_id(
            &mut self.state.performances,
            id,
            |review| &review.id,
            EntityKind::PerformanceReview,
        )?;
        self.persist(CollectionKey::Performances);
        info!("event=review_delete module=store status=ok id={id}");
        Ok(())
    }

    // ---- attendance ----

    /// Marks attendance, overwriting any existing mark for the same day.
    ///
    /// # Errors
    /// - `Validation` for malformed clock fields; nothing is written.
    pub fn add_attendance(&mut self, fields: NewAttendance) -> StoreResult<AttendanceUpsert> {
        fields.validate()?;

        let existing = self
            .state
            .attendance
            .iter_mut()
            .find(|record| record.intern_id == fields.intern_id && record.date == fields.date);

        let outcome = match existing {
            Some(record) => {
                record.restamp(fields);
                AttendanceUpsert::Updated(record.id.clone())
            }
            None => {
                let record = AttendanceRecord::create(fields);
                let id = record.id.clone();
                self.state.attendance.push(record);
                AttendanceUpsert::Inserted(id)
            }
        };

        self.persist(CollectionKey::Attendance);
        info!(
            "event=attendance_mark module=store status=ok id={} mode={}",
            outcome.id(),
            match outcome {
                AttendanceUpsert::Inserted(_) => "insert",
                AttendanceUpsert::Updated(_) => "update",
            }
        );
        Ok(outcome)
    }

    /// Patches one record by id.
    ///
    /// # Errors
    /// - `NotFound` for an unknown id.
    /// - `Validation` when the patched clock fields are malformed.
    /// - `AttendanceConflict` when the patch moves the record onto a day the
    ///   intern already has a mark for.
    pub fn update_attendance(&mut self, id: &str, patch: AttendancePatch) -> StoreResult<()> {
        let position = self
            .state
            .attendance
            .iter()
            .position(|record| record.id == id)
            .ok_or_else(|| not_found(EntityKind::Attendance, id))?;

        let mut updated = self.state.attendance[position].clone();
        updated.apply(patch);
        updated.validate()?;

        if let Some(other) = self.state.attendance.iter().find(|record| {
            record.id != updated.id
                && record.intern_id == updated.intern_id
                && record.date == updated.date
        }) {
            return Err(StoreError::AttendanceConflict {
                intern_id: updated.intern_id,
                date: updated.date,
                existing_id: other.id.clone(),
            });
        }

        self.state.attendance[position] = updated;
        self.persist(CollectionKey::Attendance);
        info!("event=attendance_update module=store status=ok id={id}");
        Ok(())
    }

    pub fn delete_attendance(&mut self, id: &str) -> StoreResult<()> {
        remove_by_id(
            &mut self.state.attendance,
            id,
            |record| &record.id,
            EntityKind::Attendance,
        )?;
        self.persist(CollectionKey::Attendance);
        info!("event=attendance_delete module=store status=ok id={id}");
        Ok(())
    }

    /// All attendance records of one intern, in insertion order.
    pub fn get_intern_attendance(&self, intern_id: &str) -> Vec<&AttendanceRecord> {
        self.state
            .attendance
            .iter()
            .filter(|record| record.intern_id == intern_id)
            .collect()
    }

    // ---- reports ----

    /// Filters one collection to the period window ending today.
    ///
    /// Unknown `report_type` yields an empty report; unknown `period` means
    /// all time.
    pub fn generate_report(&self, report_type: &str, period: &str) -> Report {
        generate_report(&self.state, report_type, period, self.today())
    }

    fn persist(&self, key: CollectionKey) {
        match key {
            CollectionKey::Interns => self.adapter.save(key, &self.state.interns),
            CollectionKey::Tasks => self.adapter.save(key, &self.state.tasks),
            CollectionKey::Performances => self.adapter.save(key, &self.state.performances),
            CollectionKey::Attendance => self.adapter.save(key, &self.state.attendance),
        }
    }
}

fn load_state<R: KvRepository>(adapter: &PersistenceAdapter<R>, config: &StoreConfig) -> Snapshot {
    let seeded = config.seed_when_empty;
    Snapshot {
        interns: adapter.load(
            CollectionKey::Interns,
            seeded.then(seed::seed_interns).unwrap_or_default(),
        ),
        tasks: adapter.load(
            CollectionKey::Tasks,
            seeded.then(seed::seed_tasks).unwrap_or_default(),
        ),
        performances: adapter.load(
            CollectionKey::Performances,
            seeded.then(seed::seed_performances).unwrap_or_default(),
        ),
        attendance: adapter.load(
            CollectionKey::Attendance,
            seeded.then(seed::seed_attendance).unwrap_or_default(),
        ),
    }
}

fn not_found(kind: EntityKind, id: &str) -> StoreError {
    debug!(
        "event=record_lookup module=store status=not_found kind={} id={id}",
        kind.as_str()
    );
    StoreError::NotFound {
        kind,
        id: id.to_string(),
    }
}

fn remove_by_id<T>(
    items: &mut Vec<T>,
    id: &str,
    id_of: impl Fn(&T) -> &RecordId,
    kind: EntityKind,
) -> StoreResult<T> {
    let position = items
        .iter()
        .position(|item| id_of(item) == id)
        .ok_or_else(|| not_found(kind, id))?;
    Ok(items.remove(position))
}

/// Keeps matching items and returns how many were dropped.
fn retain_counting<T>(items: &mut Vec<T>, keep: impl FnMut(&T) -> bool) -> usize {
    let before = items.len();
    items.retain(keep);
    before - items.len()
}
