//! In-memory record stores with id uniqueness.

mod lab_problems;
mod record_store;
mod submission_store;

pub use record_store::RecordStore;
pub use submission_store::SubmissionStore;
