//! Task domain model.
//!
//! # Invariants
//! - `id` is stable, assigned at creation and never reused.
//! - `title` is free text; the store persists whatever it is given, keeping
//!   it non-empty is the input layer's concern.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a task.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = Uuid;

/// The single persisted entity: one to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable identity assigned at creation; immutable afterwards.
    pub id: TaskId,
    /// Display text shown in the list.
    pub title: String,
}

impl Task {
    /// Creates a task with a freshly generated stable id.
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), title)
    }

    /// Creates a task with a caller-provided id.
    ///
    /// Used by read paths where identity already exists in storage.
    pub fn with_id(id: TaskId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }
}
