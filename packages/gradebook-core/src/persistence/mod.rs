//! JSON file persistence, one file per collection.

mod collection_files;
mod io_utils;

pub use collection_files::{CollectionFiles, LABS_FILE, STUDENTS_FILE, SUBMISSIONS_FILE};
pub use io_utils::{classify_io_error, RetryPolicy};
