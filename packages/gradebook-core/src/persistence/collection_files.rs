//! Whole-collection JSON files in the data directory.

use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::GradebookConfig;
use crate::error::{GradebookError, Result};

use super::io_utils::{classify_io_error, RetryPolicy};

pub const STUDENTS_FILE: &str = "students.json";
pub const LABS_FILE: &str = "labs.json";
pub const SUBMISSIONS_FILE: &str = "submissions.json";

/// Reads and writes collections as JSON arrays, one file each.
///
/// Every save rewrites the full file through a temporary file and an
/// atomic rename.
#[derive(Debug, Clone)]
pub struct CollectionFiles {
    /// Data directory path
    data_dir: PathBuf,
    retry: RetryPolicy,
}

impl CollectionFiles {
    pub fn new(config: &GradebookConfig) -> Self {
        Self {
            data_dir: config.data_dir.clone(),
            retry: RetryPolicy::from_config(config),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn path(&self, file_name: &str) -> PathBuf {
        self.data_dir.join(file_name)
    }

    /// Loads a collection. A missing file is an empty collection.
    pub fn load<T: DeserializeOwned>(&self, file_name: &str) -> Result<Vec<T>> {
        let path = self.path(file_name);
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("{} not found, starting empty", path.display());
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(classify_io_error(
                    e,
                    &format!("Failed to read {}", path.display()),
                ))
            }
        };

        let records: Vec<T> = serde_json::from_str(&contents).map_err(|e| {
            GradebookError::SerializationError(format!(
                "Failed to parse {}: {}",
                path.display(),
                e
            ))
        })?;
        tracing::debug!("Loaded {} records from {}", records.len(), path.display());
        Ok(records)
    }

    /// Writes a full collection, retrying transient failures.
    pub fn save<T: Serialize>(&self, file_name: &str, records: &[T]) -> Result<()> {
        self.retry
            .run(file_name, || self.save_internal(file_name, records))
    }

    fn save_internal<T: Serialize>(&self, file_name: &str, records: &[T]) -> Result<()> {
        let json = serde_json::to_string_pretty(records)
            .map_err(|e| GradebookError::SerializationError(e.to_string()))?;

        fs::create_dir_all(&self.data_dir)
            .map_err(|e| classify_io_error(e, "Failed to create data directory"))?;

        let final_path = self.path(file_name);
        let temp_path = self.path(&format!("{}.tmp", file_name));

        let mut file = File::create(&temp_path)
            .map_err(|e| classify_io_error(e, "Failed to create temp file"))?;
        file.write_all(json.as_bytes())
            .map_err(|e| classify_io_error(e, "Failed to write collection"))?;
        file.sync_all()
            .map_err(|e| classify_io_error(e, "Failed to sync collection"))?;

        fs::rename(&temp_path, &final_path)
            .map_err(|e| classify_io_error(e, "Failed to rename collection file"))?;

        tracing::debug!("Wrote {} records to {}", records.len(), final_path.display());
        Ok(())
    }
}
