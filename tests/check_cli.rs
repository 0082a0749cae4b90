mod support;

use predicates::str::contains;
use serde_json::Value;

use support::{json_output, TestBoard};

const MESSY_SEED: &str = r#"{
  "projects": [
    { "id": 1, "name": "Website Design" },
    { "id": 1, "name": "Website Design (copy)" }
  ],
  "tasks": [
    { "id": 1, "title": "Design homepage", "status": "DONE", "project_id": 1 },
    { "id": 2, "title": "Lost", "status": "LATER", "project_id": 99 }
  ]
}"#;

#[test]
fn check_reports_issues_without_failing() {
    let board = TestBoard::new();
    let seed = board.write_seed(MESSY_SEED);

    let value = json_output(board.cmd().arg("--seed").arg(&seed).args(["check", "--json"]));
    let issues = value["data"]["issues"].as_array().expect("issues");
    let kinds: Vec<&str> = issues
        .iter()
        .map(|issue| issue["kind"].as_str().expect("kind"))
        .collect();
    assert_eq!(
        kinds,
        vec![
            "duplicate_project_id",
            "unknown_status",
            "dangling_project_ref",
        ]
    );
}

#[test]
fn check_strict_exits_with_validation_code() -> Result<(), Box<dyn std::error::Error>> {
    let board = TestBoard::new();
    let seed = board.write_seed(MESSY_SEED);

    board
        .cmd()
        .arg("--seed")
        .arg(&seed)
        .args(["check", "--strict"])
        .assert()
        .code(3)
        .stdout(contains("Board check: issues found"))
        .stdout(contains("Issues:\n  duplicate_project_id: project id 1 appears more than once"))
        .stderr(contains("Validation failed: 3 issue(s) found"))
        .stderr(contains("hint: fix the listed issues"));

    let output = board
        .cmd()
        .arg("--seed")
        .arg(&seed)
        .args(["check", "--strict", "--json"])
        .assert()
        .code(3)
        .get_output()
        .stdout
        .clone();
    let value: Value = serde_json::from_slice(&output)?;
    assert_eq!(value["status"].as_str(), Some("error"));
    assert_eq!(value["command"].as_str(), Some("check"));
    assert_eq!(value["error"]["kind"].as_str(), Some("validation_failed"));
    let details = &value["error"]["details"];
    assert_eq!(details["issue_count"].as_u64(), Some(3));
    let issues = details["issues"].as_array().expect("issue list");
    assert_eq!(issues.len(), 3);
    assert_eq!(issues[2]["kind"].as_str(), Some("dangling_project_ref"));
    assert_eq!(issues[2]["entity"].as_str(), Some("task"));
    assert_eq!(issues[2]["id"].as_i64(), Some(2));

    Ok(())
}

#[test]
fn config_can_make_check_strict() {
    let board = TestBoard::new();
    board.write_seed(MESSY_SEED);
    board.write_config("seed = \"board.json\"\n\n[check]\nstrict = true\n");

    board.cmd().arg("check").assert().code(3);
}

#[test]
fn demo_board_passes_strict_check() {
    let board = TestBoard::new();
    board
        .cmd()
        .args(["check", "--strict"])
        .assert()
        .success()
        .stdout(contains("Board check: no issues"));
}
