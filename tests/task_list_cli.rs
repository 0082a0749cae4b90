mod support;

use predicates::str::contains;
use serde_json::Value;

use support::{json_output, TestBoard, SCENARIO_SEED};

fn task_ids(value: &Value) -> Vec<i64> {
    value["data"]["tasks"]
        .as_array()
        .expect("tasks array")
        .iter()
        .map(|task| task["id"].as_i64().expect("task id"))
        .collect()
}

#[test]
fn tasks_carry_color_and_owner() -> Result<(), Box<dyn std::error::Error>> {
    let board = TestBoard::new();
    let seed = board.write_seed(SCENARIO_SEED);

    let value = json_output(board.cmd().arg("--seed").arg(&seed).args(["tasks", "--json"]));
    assert_eq!(value["command"].as_str(), Some("tasks"));
    assert_eq!(value["data"]["total"].as_u64(), Some(3));
    assert_eq!(task_ids(&value), vec![1, 2, 3]);

    let tasks = value["data"]["tasks"].as_array().expect("tasks");
    assert_eq!(tasks[0]["status_label"].as_str(), Some("In Progress"));
    assert_eq!(tasks[0]["color"].as_str(), Some("blue"));
    assert_eq!(tasks[0]["color_hex"].as_str(), Some("#29B6F6"));
    assert_eq!(tasks[1]["color"].as_str(), Some("amber"));
    assert_eq!(tasks[2]["color"].as_str(), Some("green"));
    assert_eq!(tasks[2]["owner"].as_str(), Some("Mobile App"));
    assert_eq!(tasks[2]["owner_resolved"].as_bool(), Some(true));

    Ok(())
}

#[test]
fn dangling_reference_falls_back_to_raw_id() {
    let board = TestBoard::new();
    let seed = board.write_seed(
        r#"{
            "projects": [{ "id": 1, "name": "Website Design" }],
            "tasks": [{ "id": 5, "title": "Orphan", "status": "TODO", "project_id": 99 }]
        }"#,
    );

    let value = json_output(board.cmd().arg("--seed").arg(&seed).args(["tasks", "--json"]));
    let task = &value["data"]["tasks"][0];
    assert_eq!(task["owner"].as_str(), Some("99"));
    assert_eq!(task["owner_resolved"].as_bool(), Some(false));
    let warnings = value["warnings"].as_array().expect("warnings");
    assert_eq!(
        warnings[0].as_str(),
        Some("task 5 references missing project 99")
    );

    board
        .cmd()
        .arg("--seed")
        .arg(&seed)
        .arg("tasks")
        .assert()
        .success()
        .stdout(contains("[To Do|amber] #5 Orphan (project: 99)"))
        .stdout(contains("warning: task 5 references missing project 99"));
}

#[test]
fn unknown_status_gets_neutral_color() {
    let board = TestBoard::new();
    let seed = board.write_seed(
        r#"{
            "projects": [{ "id": 1, "name": "Website Design" }],
            "tasks": [{ "id": 1, "title": "Parked", "status": "BLOCKED", "project_id": 1 }]
        }"#,
    );

    let value = json_output(board.cmd().arg("--seed").arg(&seed).args(["tasks", "--json"]));
    let task = &value["data"]["tasks"][0];
    assert_eq!(task["status"].as_str(), Some("BLOCKED"));
    assert_eq!(task["status_label"].as_str(), Some("BLOCKED"));
    assert_eq!(task["color"].as_str(), Some("neutral"));
    assert_eq!(task["color_hex"].as_str(), Some("#78909C"));
}

#[test]
fn tasks_filter_by_project_and_status() {
    let board = TestBoard::new();
    let seed = board.write_seed(SCENARIO_SEED);

    let by_project = json_output(
        board
            .cmd()
            .arg("--seed")
            .arg(&seed)
            .args(["tasks", "--project", "1", "--json"]),
    );
    assert_eq!(task_ids(&by_project), vec![1, 2]);

    let by_both = json_output(board.cmd().arg("--seed").arg(&seed).args([
        "tasks",
        "--project",
        "1",
        "--status",
        "TODO",
        "--json",
    ]));
    assert_eq!(task_ids(&by_both), vec![2]);

    let none = json_output(
        board
            .cmd()
            .arg("--seed")
            .arg(&seed)
            .args(["tasks", "--project", "42", "--json"]),
    );
    assert!(task_ids(&none).is_empty());
}

#[test]
fn projects_list_task_counts() {
    let board = TestBoard::new();
    let seed = board.write_seed(SCENARIO_SEED);

    let value = json_output(board.cmd().arg("--seed").arg(&seed).args(["projects", "--json"]));
    assert_eq!(value["data"]["total"].as_u64(), Some(2));
    let projects = value["data"]["projects"].as_array().expect("projects");
    assert_eq!(projects[0]["name"].as_str(), Some("Website Design"));
    assert_eq!(projects[0]["task_count"].as_u64(), Some(2));
    assert_eq!(projects[1]["task_count"].as_u64(), Some(1));

    board
        .cmd()
        .arg("projects")
        .assert()
        .success()
        .stdout(contains(
            "#2 Mobile App - 1 tasks (1 done): Build iOS & Android app",
        ));
}

#[test]
fn unnamed_project_shows_raw_id() {
    let board = TestBoard::new();
    let seed = board.write_seed(
        r#"{
            "projects": [{ "id": 7, "name": "" }],
            "tasks": [{ "id": 1, "title": "Chore", "status": "DONE", "project_id": 7 }]
        }"#,
    );

    let value = json_output(board.cmd().arg("--seed").arg(&seed).args(["tasks", "--json"]));
    let task = &value["data"]["tasks"][0];
    assert_eq!(task["owner"].as_str(), Some("7"));
    assert_eq!(task["owner_resolved"].as_bool(), Some(true));
    assert!(value.get("warnings").is_none());
}

#[test]
fn tasks_search_title_and_description() {
    let board = TestBoard::new();
    let seed = board.write_seed(
        r#"{
            "projects": [{ "id": 1, "name": "Website Design" }],
            "tasks": [
                { "id": 1, "title": "Design homepage", "status": "IN_PROGRESS", "project_id": 1 },
                { "id": 2, "title": "Fix login bug", "status": "TODO", "project_id": 1,
                  "description": "Safari drops the session cookie" },
                { "id": 3, "title": "Write API docs", "status": "DONE", "project_id": 1 }
            ]
        }"#,
    );

    let by_title = json_output(
        board
            .cmd()
            .arg("--seed")
            .arg(&seed)
            .args(["tasks", "--search", "HOMEPAGE", "--json"]),
    );
    assert_eq!(task_ids(&by_title), vec![1]);

    let by_description = json_output(
        board
            .cmd()
            .arg("--seed")
            .arg(&seed)
            .args(["tasks", "--search", "safari cookie", "--json"]),
    );
    assert_eq!(task_ids(&by_description), vec![2]);

    board
        .cmd()
        .arg("--seed")
        .arg(&seed)
        .args(["tasks", "--search", "docs"])
        .assert()
        .success()
        .stdout(contains("  Search: docs"))
        .stdout(contains("[Done|green] #3 Write API docs (project: Website Design)"));
}

#[test]
fn projects_search_name_and_description() {
    let board = TestBoard::new();

    let value = json_output(board.cmd().args(["projects", "--search", "android", "--json"]));
    assert_eq!(value["data"]["total"].as_u64(), Some(1));
    let projects = value["data"]["projects"].as_array().expect("projects");
    assert_eq!(projects[0]["name"].as_str(), Some("Mobile App"));
    assert_eq!(projects[0]["task_count"].as_u64(), Some(1));

    let none = json_output(board.cmd().args(["projects", "--search", "kubernetes", "--json"]));
    assert_eq!(none["data"]["total"].as_u64(), Some(0));
}
