//! Project records.
//!
//! Projects are the grouping entity of the board. Tasks reference a project
//! by its integer id; nothing here checks that the reference resolves.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Project {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = normalize_description(Some(description.into()));
        self
    }
}

fn normalize_description(description: Option<String>) -> Option<String> {
    let description = description?;
    if description.trim().is_empty() {
        None
    } else {
        Some(description)
    }
}
