//! Persistence layer: durable key-value slots and the collection adapter.
//!
//! # Responsibility
//! - Define the raw slot contract and its SQLite implementation.
//! - Load/save whole entity collections as serialized blobs.
//!
//! # Invariants
//! - Raw slot APIs return typed errors; only the adapter swallows them.
//! - Collections are saved independently; there is no cross-key transaction.

pub mod collections;
pub mod kv_repo;
