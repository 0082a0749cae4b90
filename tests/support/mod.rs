#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use serde_json::Value;
use tempfile::TempDir;

pub const SCENARIO_SEED: &str = r#"{
  "schema_version": "taskboard.seed.v1",
  "projects": [
    { "id": 1, "name": "Website Design" },
    { "id": 2, "name": "Mobile App" }
  ],
  "tasks": [
    { "id": 1, "title": "Design homepage", "status": "IN_PROGRESS", "project_id": 1 },
    { "id": 2, "title": "Fix login bug", "status": "TODO", "project_id": 1 },
    { "id": 3, "title": "Write API docs", "status": "DONE", "project_id": 2 }
  ]
}"#;

pub struct TestBoard {
    dir: TempDir,
}

impl TestBoard {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write_file(&self, rel_path: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(rel_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dir");
        }
        fs::write(&path, contents).expect("write file");
        path
    }

    pub fn write_seed(&self, contents: &str) -> PathBuf {
        self.write_file("board.json", contents)
    }

    pub fn write_config(&self, contents: &str) -> PathBuf {
        self.write_file(".taskboard.toml", contents)
    }

    /// Command running inside the board dir, isolated from the caller's env.
    pub fn cmd(&self) -> Command {
        let mut cmd = taskboard_cmd();
        cmd.current_dir(self.path());
        cmd
    }
}

pub fn taskboard_cmd() -> Command {
    let mut cmd = Command::cargo_bin("taskboard").expect("taskboard binary");
    cmd.env_remove("TASKBOARD_SEED")
        .env_remove("TASKBOARD_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

pub fn json_output(cmd: &mut Command) -> Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).expect("json output")
}
