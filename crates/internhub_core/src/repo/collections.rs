//! Collection persistence adapter.
//!
//! # Responsibility
//! - Map each entity collection to its slot key.
//! - Serialize collections to JSON and back.
//!
//! # Invariants
//! - `load` never fails: missing or unreadable slots yield the caller's default.
//! - `save` is best-effort: failures are logged and otherwise ignored.

use super::kv_repo::{KvRepository, RepoResult};
use log::{debug, error, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// Slot key for one entity collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionKey {
    Interns,
    Tasks,
    Performances,
    Attendance,
}

impl CollectionKey {
    pub const ALL: [CollectionKey; 4] = [
        Self::Interns,
        Self::Tasks,
        Self::Performances,
        Self::Attendance,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Interns => "interns",
            Self::Tasks => "tasks",
            Self::Performances => "performances",
            Self::Attendance => "attendance",
        }
    }
}

impl Display for CollectionKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Loads and saves whole collections through a slot repository.
pub struct PersistenceAdapter<R: KvRepository> {
    repo: R,
}

impl<R: KvRepository> PersistenceAdapter<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Reads the value under `key`, or `Ok(None)` when the slot is empty.
    ///
    /// # Errors
    /// - Slot read failures and payload decode failures.
    pub fn try_load<T: DeserializeOwned>(&self, key: CollectionKey) -> RepoResult<Option<T>> {
        match self.repo.read_slot(key.as_str())? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }

    /// Reads the value under `key`, falling back to `default`.
    pub fn load<T: DeserializeOwned>(&self, key: CollectionKey, default: T) -> T {
        match self.try_load(key) {
            Ok(Some(value)) => {
                debug!("event=collection_load module=repo status=ok key={key}");
                value
            }
            Ok(None) => {
                debug!("event=collection_load module=repo status=default reason=missing key={key}");
                default
            }
            Err(err) => {
                warn!(
                    "event=collection_load module=repo status=default reason=unreadable key={key} error={err}"
                );
                default
            }
        }
    }

    /// Serializes `value` and overwrites the slot under `key`.
    ///
    /// # Errors
    /// - Serialization and slot write failures.
    pub fn try_save<T: Serialize + ?Sized>(&self, key: CollectionKey, value: &T) -> RepoResult<()> {
        let raw = serde_json::to_string(value)?;
        self.repo.write_slot(key.as_str(), &raw)
    }

    /// Best-effort save; failures are logged only.
    pub fn save<T: Serialize + ?Sized>(&self, key: CollectionKey, value: &T) {
        match self.try_save(key, value) {
            Ok(()) => debug!("event=collection_save module=repo status=ok key={key}"),
            Err(err) => {
                error!("event=collection_save module=repo status=error key={key} error={err}")
            }
        }
    }

    /// Drops the stored value for `key`, so the next load uses the default.
    pub fn clear(&self, key: CollectionKey) -> RepoResult<bool> {
        self.repo.delete_slot(key.as_str())
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }
}
