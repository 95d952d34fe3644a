//! Durable task store and its mutation session.
//!
//! # Responsibility
//! - Own the task collection's write path: stage mutations, flush to the
//!   repository after every write intent.
//!
//! # See also
//! - `repo` for the durable-storage contract underneath.

pub mod task_store;
