//! Gradebook configuration.

use std::path::PathBuf;

/// Gradebook configuration.
#[derive(Debug, Clone)]
pub struct GradebookConfig {
    /// Directory holding the collection files
    pub data_dir: PathBuf,
    /// Rewrite collection files after every mutating call
    pub persist: bool,
    /// Maximum retry attempts for transient I/O errors
    pub persistence_max_retries: u32,
    /// Delay between retry attempts in milliseconds
    pub persistence_retry_delay_ms: u64,
    /// Averages strictly below this value are failing
    pub passing_average: f64,
}

impl Default for GradebookConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            persist: false,
            persistence_max_retries: 3,
            persistence_retry_delay_ms: 100,
            passing_average: 5.0,
        }
    }
}
