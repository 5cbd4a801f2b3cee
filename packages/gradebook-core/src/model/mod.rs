//! Entity records: students, labs with their problems, and submissions.

mod lab;
mod student;
mod submission;

pub use lab::{parse_deadline, Lab, Problem};
pub use student::Student;
pub use submission::{Submission, SubmissionKey};

/// Record stored in a [`RecordStore`](crate::store::RecordStore), identified
/// by an id unique within its collection.
pub trait Record: Clone {
    /// Collection name used in error messages and logs.
    const COLLECTION: &'static str;

    /// Returns the record id.
    fn id(&self) -> i64;
}
