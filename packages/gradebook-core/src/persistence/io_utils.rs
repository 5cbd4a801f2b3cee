//! I/O error mapping and retries for collection writes.

use std::io::{self, ErrorKind};
use std::thread;
use std::time::Duration;

use crate::config::GradebookConfig;
use crate::error::{GradebookError, Result};

/// Maps an I/O error onto the gradebook error for `what` was being done.
///
/// Interruptions and timeouts become `TransientIoError` so that
/// [`RetryPolicy`] picks them up; a full disk gets its own variant.
pub fn classify_io_error(error: io::Error, what: &str) -> GradebookError {
    let message = format!("{}: {}", what, error);
    match error.kind() {
        ErrorKind::Interrupted | ErrorKind::WouldBlock | ErrorKind::TimedOut => {
            GradebookError::TransientIoError(message)
        }
        ErrorKind::StorageFull | ErrorKind::OutOfMemory => GradebookError::DiskFull(message),
        _ => GradebookError::IoError(message),
    }
}

/// How often and how patiently a write is attempted again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub delay: Duration,
}

impl RetryPolicy {
    pub fn from_config(config: &GradebookConfig) -> Self {
        Self {
            max_retries: config.persistence_max_retries,
            delay: Duration::from_millis(config.persistence_retry_delay_ms),
        }
    }

    /// Runs `write` until it succeeds, fails for good, or the retries run
    /// out. Only `TransientIoError` is retried.
    pub fn run<T, F>(&self, file_name: &str, mut write: F) -> Result<T>
    where
        F: FnMut() -> Result<T>,
    {
        let mut retries = 0;
        loop {
            let err = match write() {
                Err(err @ GradebookError::TransientIoError(_)) => err,
                done => return done,
            };
            if retries == self.max_retries {
                return Err(err);
            }
            retries += 1;
            tracing::warn!(
                "Retrying write of {} ({}/{}) after: {}",
                file_name,
                retries,
                self.max_retries,
                err
            );
            if !self.delay.is_zero() {
                thread::sleep(self.delay);
            }
        }
    }
}
