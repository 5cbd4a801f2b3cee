//! Bulk dataset import.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GradebookError, Result};
use crate::model::{Lab, Student, Submission};
use crate::persistence::classify_io_error;

/// All three collections in one JSON object.
///
/// Missing keys are empty collections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub students: Vec<Student>,
    #[serde(default)]
    pub labs: Vec<Lab>,
    #[serde(default)]
    pub submissions: Vec<Submission>,
}

impl Dataset {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| {
            GradebookError::SerializationError(format!("Failed to parse dataset: {}", e))
        })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .map_err(|e| classify_io_error(e, &format!("Failed to read {}", path.display())))?;
        Self::from_json_str(&json)
    }

    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| GradebookError::SerializationError(e.to_string()))
    }
}
