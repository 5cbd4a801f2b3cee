use std::fmt;

use serde::{Deserialize, Serialize};

use super::Record;

/// Student enrolled in a group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    #[serde(rename = "sid")]
    pub id: i64,
    pub name: String,
    pub group: i64,
}

impl Student {
    pub fn new(id: i64, name: impl Into<String>, group: i64) -> Self {
        Self {
            id,
            name: name.into(),
            group,
        }
    }
}

impl Record for Student {
    const COLLECTION: &'static str = "Student";

    fn id(&self) -> i64 {
        self.id
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Student {}: {} in group {}", self.id, self.name, self.group)
    }
}
