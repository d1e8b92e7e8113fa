//! Core domain logic for InternHub.
//! This crate is the single source of truth for intern-program invariants.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod report;
pub mod repo;
pub mod service;

pub use config::{LogConfig, StoreConfig};
pub use logging::{default_log_level, init_logging, init_logging_from, logging_status};
pub use model::attendance::{AttendancePatch, AttendanceRecord, AttendanceStatus, NewAttendance};
pub use model::intern::{Intern, InternPatch, InternStatus, NewIntern};
pub use model::review::{NewPerformanceReview, PerformanceReview, PerformanceReviewPatch};
pub use model::snapshot::Snapshot;
pub use model::task::{NewTask, Task, TaskPatch, TaskPriority, TaskStatus};
pub use model::{EntityKind, RecordId, ValidationError};
pub use report::export::{export_table, ExportTable};
pub use report::projection::{build_report, generate_report, Report, ReportRows};
pub use report::window::{ReportPeriod, ReportType};
pub use repo::collections::{CollectionKey, PersistenceAdapter};
pub use repo::kv_repo::{KvRepository, RepoError, RepoResult, SqliteKvRepository};
pub use service::clock::{Clock, FixedClock, SystemClock};
pub use service::store::{
    AttendanceUpsert, CascadeSummary, DomainStore, StoreError, StoreResult,
};

/// Minimal health-check API for wiring checks.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
