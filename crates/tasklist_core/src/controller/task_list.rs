//! Task list controller: ordered cache reconciliation over the store.
//!
//! # Responsibility
//! - Maintain the ordered in-memory projection of the store contents.
//! - Keep the presentation collaborator consistent through single-row
//!   change notifications rather than full reloads.
//!
//! # Invariants
//! - The cache is insertion-ordered and never holds two tasks with one id.
//! - Every accepted mutation signals exactly one incremental view change.
//! - Single-threaded use assumed; intents locate rows by their cache
//!   position at intent time.

use crate::model::task::Task;
use crate::repo::task_repo::TaskRepository;
use crate::store::task_store::TaskStore;
use log::warn;

/// Presentation collaborator. Receives incremental row changes plus one
/// full refresh after the initial load; positions refer to the controller's
/// cache.
pub trait TaskListView {
    /// The whole list was replaced; re-render everything.
    fn refresh_all(&mut self);
    /// A row appeared at `index`.
    fn row_inserted(&mut self, index: usize);
    /// The row at `index` changed in place.
    fn row_updated(&mut self, index: usize);
    /// The row at `index` went away.
    fn row_removed(&mut self, index: usize);
}

/// List-screen controller mediating user intents between store and view.
///
/// The cache is a disposable projection of the store; `load` rebuilds it
/// wholesale, every other intent reconciles it one row at a time.
pub struct TaskListController<R: TaskRepository, V: TaskListView> {
    store: TaskStore<R>,
    view: V,
    tasks: Vec<Task>,
}

impl<R: TaskRepository, V: TaskListView> TaskListController<R, V> {
    /// Creates a controller over an injected store and view, with an empty
    /// cache. Call [`load`](Self::load) before handling intents.
    pub fn new(store: TaskStore<R>, view: V) -> Self {
        Self {
            store,
            view,
            tasks: Vec::new(),
        }
    }

    /// Replaces the cache with the store contents and refreshes the view.
    pub fn load(&mut self) {
        self.tasks = self.store.fetch_all();
        self.view.refresh_all();
    }

    /// Adds a task with the given title at the end of the list.
    ///
    /// Blank titles are ignored, matching the input dialog which refuses to
    /// submit empty text. The store itself does not validate.
    pub fn add(&mut self, title: &str) {
        if title.trim().is_empty() {
            return;
        }

        let task = self.store.create(title);
        self.tasks.push(task);
        self.view.row_inserted(self.tasks.len() - 1);
    }

    /// Replaces the title of the row at `index`.
    ///
    /// Out-of-range indices are a logged no-op; blank titles are ignored.
    pub fn edit(&mut self, index: usize, new_title: &str) {
        if new_title.trim().is_empty() {
            return;
        }
        let Some(task) = self.tasks.get(index) else {
            warn!(
                "event=edit module=controller status=ignored error_code=index_out_of_range index={index}"
            );
            return;
        };

        self.store.update(task, new_title);
        self.tasks[index].title = new_title.to_string();
        self.view.row_updated(index);
    }

    /// Removes the row at `index`. Out-of-range indices are a logged no-op.
    pub fn remove(&mut self, index: usize) {
        if index >= self.tasks.len() {
            warn!(
                "event=remove module=controller status=ignored error_code=index_out_of_range index={index}"
            );
            return;
        }

        let task = self.tasks[index].clone();
        self.store.delete(&task);
        self.tasks.remove(index);
        self.view.row_removed(index);
    }

    /// Read access to the ordered cache.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// The underlying store, for session observability.
    pub fn store(&self) -> &TaskStore<R> {
        &self.store
    }
}
