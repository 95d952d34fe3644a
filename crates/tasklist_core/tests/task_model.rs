use tasklist_core::Task;
use uuid::Uuid;

#[test]
fn task_new_generates_fresh_identity() {
    let task = Task::new("water the plants");

    assert!(!task.id.is_nil());
    assert_eq!(task.title, "water the plants");
}

#[test]
fn task_new_never_reuses_ids() {
    let first = Task::new("same title");
    let second = Task::new("same title");

    assert_ne!(first.id, second.id);
}

#[test]
fn with_id_keeps_caller_identity() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let task = Task::with_id(id, "rehydrated");

    assert_eq!(task.id, id);
    assert_eq!(task.title, "rehydrated");
}

#[test]
fn task_serialization_uses_expected_wire_fields() {
    let id = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
    let task = Task::with_id(id, "ship release");

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["title"], "ship release");

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}
