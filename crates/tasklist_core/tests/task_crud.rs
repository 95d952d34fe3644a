use rusqlite::Connection;
use tasklist_core::db::open_db_in_memory;
use tasklist_core::{RepoError, SqliteTaskRepository, Task, TaskRepository};
use uuid::Uuid;

#[test]
fn insert_and_fetch_all_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTaskRepository::new(&conn);

    let task = Task::new("first task");
    repo.insert(&task).unwrap();

    let all = repo.fetch_all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, task.id);
    assert_eq!(all[0].title, "first task");
}

#[test]
fn fetch_all_returns_creation_order() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTaskRepository::new(&conn);

    let task_a = Task::new("a");
    let task_b = Task::new("b");
    let task_c = Task::new("c");
    repo.insert(&task_a).unwrap();
    repo.insert(&task_b).unwrap();
    repo.insert(&task_c).unwrap();

    let ids: Vec<_> = repo.fetch_all().unwrap().into_iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![task_a.id, task_b.id, task_c.id]);
}

#[test]
fn update_title_persists_and_keeps_identity() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTaskRepository::new(&conn);

    let task = Task::new("draft");
    repo.insert(&task).unwrap();

    repo.update_title(task.id, "final").unwrap();

    let all = repo.fetch_all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, task.id);
    assert_eq!(all[0].title, "final");
}

#[test]
fn update_title_unknown_id_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTaskRepository::new(&conn);

    let task = Task::new("never inserted");
    let err = repo.update_title(task.id, "whatever").unwrap_err();
    assert!(matches!(err, RepoError::NotFound(id) if id == task.id));
}

#[test]
fn delete_removes_row() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTaskRepository::new(&conn);

    let keep = Task::new("keep");
    let doomed = Task::new("doomed");
    repo.insert(&keep).unwrap();
    repo.insert(&doomed).unwrap();

    repo.delete(doomed.id).unwrap();

    let all = repo.fetch_all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, keep.id);
}

#[test]
fn delete_unknown_id_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTaskRepository::new(&conn);

    let id = Uuid::new_v4();
    let err = repo.delete(id).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(got) if got == id));
}

#[test]
fn fetch_all_rejects_corrupt_uuid_column() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO tasks (uuid, title) VALUES ('not-a-uuid', 'broken');",
        [],
    )
    .unwrap();

    let repo = SqliteTaskRepository::new(&conn);
    let err = repo.fetch_all().unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(message) if message.contains("not-a-uuid")));
}

#[test]
fn empty_title_is_accepted_by_the_store_layer() {
    // The input dialog refuses blank submissions, but persistence itself
    // must not validate.
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteTaskRepository::new(&conn);

    let task = Task::new("");
    repo.insert(&task).unwrap();

    let all = repo.fetch_all().unwrap();
    assert_eq!(all[0].title, "");
}

#[test]
fn plain_connection_without_migrations_fails_reads() {
    let conn = Connection::open_in_memory().unwrap();
    let repo = SqliteTaskRepository::new(&conn);

    assert!(repo.fetch_all().is_err());
}
