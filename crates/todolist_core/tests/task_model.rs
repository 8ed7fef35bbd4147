use todolist_core::{Task, TaskValidationError};

#[test]
fn new_trims_fields_and_starts_uncompleted() {
    let task = Task::new("  Buy milk ", "\tShopping").unwrap();

    assert_eq!(task.name(), "Buy milk");
    assert_eq!(task.category(), "Shopping");
    assert!(!task.is_completed());
}

#[test]
fn new_rejects_blank_name_before_category() {
    assert_eq!(
        Task::new("", "").unwrap_err(),
        TaskValidationError::EmptyName
    );
    assert_eq!(
        Task::new("   ", "Work").unwrap_err(),
        TaskValidationError::EmptyName
    );
    assert_eq!(
        Task::new("Report", " ").unwrap_err(),
        TaskValidationError::EmptyCategory
    );
}

#[test]
fn toggle_twice_restores_original_state() {
    let mut task = Task::new("T", "K").unwrap();

    assert!(task.toggle());
    assert!(!task.toggle());
    assert!(!task.is_completed());
}

#[test]
fn serialization_uses_expected_wire_fields() {
    let mut task = Task::new("Write report", "Work").unwrap();
    task.toggle();

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["name"], "Write report");
    assert_eq!(json["category"], "Work");
    assert_eq!(json["completed"], true);

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}

#[test]
fn deserialize_rejects_empty_category() {
    let value = serde_json::json!({"name": "a", "category": "", "completed": false});

    let err = serde_json::from_value::<Task>(value).unwrap_err();
    assert!(
        err.to_string().contains("task category must not be empty"),
        "unexpected error: {err}"
    );
}
