//! Application launch surface.
//!
//! # Responsibility
//! - Open the backing store; failure here is fatal because the application
//!   cannot function without its storage file.
//! - Load the task list through the controller and render it to stdout.

use std::process::ExitCode;

use log::error;
use tasklist_core::db::open_db;
use tasklist_core::{
    core_version, default_log_level, init_logging, SqliteTaskRepository, TaskListController,
    TaskListView, TaskStore,
};

const DB_FILE_NAME: &str = "tasklist.db";

/// Console presentation collaborator.
///
/// Launch only triggers the initial full refresh; the incremental hooks
/// narrate row changes for interactive embedders.
struct ConsoleView;

impl TaskListView for ConsoleView {
    fn refresh_all(&mut self) {}

    fn row_inserted(&mut self, index: usize) {
        println!("+ row {index}");
    }

    fn row_updated(&mut self, index: usize) {
        println!("~ row {index}");
    }

    fn row_removed(&mut self, index: usize) {
        println!("- row {index}");
    }
}

fn main() -> ExitCode {
    let current_dir = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(err) => {
            eprintln!("tasklist: cannot resolve working directory: {err}");
            return ExitCode::FAILURE;
        }
    };

    // Logging trouble is reported but does not block the launch.
    let log_dir = current_dir.join("logs");
    if let Err(err) = init_logging(default_log_level(), &log_dir.to_string_lossy()) {
        eprintln!("tasklist: logging unavailable: {err}");
    }

    let conn = match open_db(current_dir.join(DB_FILE_NAME)) {
        Ok(conn) => conn,
        Err(err) => {
            error!("event=app_launch module=cli status=fatal error={err}");
            eprintln!("tasklist: cannot open {DB_FILE_NAME}: {err}");
            return ExitCode::FAILURE;
        }
    };

    let store = TaskStore::new(SqliteTaskRepository::new(&conn));
    let mut controller = TaskListController::new(store, ConsoleView);
    controller.load();

    println!(
        "tasklist {} ({} tasks)",
        core_version(),
        controller.tasks().len()
    );
    for (index, task) in controller.tasks().iter().enumerate() {
        println!("{:>3}. {}", index + 1, task.title);
    }

    ExitCode::SUCCESS
}
