//! Core use-case services.
//!
//! # Responsibility
//! - Own the in-memory collections and every mutation on them.
//! - Keep callers decoupled from slot keys and serialization.

pub mod clock;
pub mod seed;
pub mod store;
