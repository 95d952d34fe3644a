//! Task store: CRUD façade with a write-through mutation session.
//!
//! # Responsibility
//! - Provide create/read-all/update/delete over the durable task collection.
//! - Stage every mutation in a session and flush it synchronously.
//!
//! # Invariants
//! - Staged mutations flush in FIFO order.
//! - A failed flush retains the failed mutation and everything staged behind
//!   it; memory and disk stay divergent until a later flush succeeds.
//! - Read and flush failures are logged, never surfaced to callers.
//!   Initialization failures are the one exception: `db::open_db` propagates
//!   them, and the application treats them as fatal.

use crate::model::task::{Task, TaskId};
use crate::repo::task_repo::{RepoError, TaskRepository};
use log::{error, warn};
use std::collections::VecDeque;

/// One staged mutation awaiting flush.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Pending {
    Insert(Task),
    Rename { id: TaskId, title: String },
    Remove(TaskId),
}

/// CRUD façade over the durable task collection.
///
/// The session mirrors an object-graph context: write intents stage a
/// mutation and immediately attempt to flush the whole session. The
/// repository is injected so callers own the storage lifetime and tests can
/// substitute failing implementations.
pub struct TaskStore<R: TaskRepository> {
    repo: R,
    session: VecDeque<Pending>,
}

impl<R: TaskRepository> TaskStore<R> {
    /// Creates a store over the given repository with a clean session.
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            session: VecDeque::new(),
        }
    }

    /// Returns every persisted task in creation order.
    ///
    /// Read failures are recoverable: the error is logged and the caller
    /// receives an empty collection. Staged-but-unflushed mutations are not
    /// reflected here.
    pub fn fetch_all(&self) -> Vec<Task> {
        match self.repo.fetch_all() {
            Ok(tasks) => tasks,
            Err(err) => {
                error!("event=fetch_all module=store status=error error={err}");
                Vec::new()
            }
        }
    }

    /// Creates a task with the given title and stages it for persistence.
    ///
    /// The task is returned regardless of flush outcome; a failed flush is
    /// logged and the staged insert is retried by the next flush.
    pub fn create(&mut self, title: impl Into<String>) -> Task {
        let task = Task::new(title);
        self.session.push_back(Pending::Insert(task.clone()));
        self.flush();
        task
    }

    /// Replaces the title of an existing task.
    ///
    /// There is no check that `task` is known to this session; an unknown id
    /// surfaces as a logged not-found during flush.
    pub fn update(&mut self, task: &Task, new_title: impl Into<String>) {
        self.session.push_back(Pending::Rename {
            id: task.id,
            title: new_title.into(),
        });
        self.flush();
    }

    /// Removes a task from the collection.
    pub fn delete(&mut self, task: &Task) {
        self.session.push_back(Pending::Remove(task.id));
        self.flush();
    }

    /// Persists staged mutations in order. No-op when the session is clean.
    ///
    /// On a repository error the failed mutation and everything staged after
    /// it stay queued. A not-found error is terminal for that mutation
    /// (retrying cannot succeed), so it is dropped instead of wedging the
    /// queue.
    pub fn flush(&mut self) {
        while let Some(pending) = self.session.front() {
            let applied = match pending {
                Pending::Insert(task) => self.repo.insert(task),
                Pending::Rename { id, title } => self.repo.update_title(*id, title),
                Pending::Remove(id) => self.repo.delete(*id),
            };

            match applied {
                Ok(()) => {
                    self.session.pop_front();
                }
                Err(RepoError::NotFound(id)) => {
                    warn!("event=flush module=store status=dropped error_code=not_found id={id}");
                    self.session.pop_front();
                }
                Err(err) => {
                    error!(
                        "event=flush module=store status=error pending={} error={err}",
                        self.session.len()
                    );
                    return;
                }
            }
        }
    }

    /// True when staged mutations have not reached durable storage yet.
    pub fn has_pending_changes(&self) -> bool {
        !self.session.is_empty()
    }

    /// Number of staged mutations awaiting flush.
    pub fn pending_len(&self) -> usize {
        self.session.len()
    }
}
