//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the durable-storage contract the task store flushes through.
//! - Isolate SQLite query details from session/controller orchestration.
//!
//! # Invariants
//! - Repository APIs return semantic errors (`NotFound`) in addition to DB
//!   transport errors.

pub mod task_repo;
