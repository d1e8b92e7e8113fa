//! Read-only projections over a [`Snapshot`](crate::model::snapshot::Snapshot).
//!
//! # Responsibility
//! - Filter collections to period windows anchored at a given "today".
//! - Derive dashboard and chart aggregates.
//! - Shape report rows into exportable tables.
//!
//! # Invariants
//! - Nothing here mutates state; every result is recomputed per call.
//! - Filtered rows keep source collection order.

pub mod export;
pub mod projection;
pub mod stats;
pub mod window;
