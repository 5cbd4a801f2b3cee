use std::fmt;

use serde::{Deserialize, Serialize};

/// Composite key of a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubmissionKey {
    pub student_id: i64,
    pub lab_id: i64,
    pub problem_id: i64,
}

impl SubmissionKey {
    pub fn new(student_id: i64, lab_id: i64, problem_id: i64) -> Self {
        Self {
            student_id,
            lab_id,
            problem_id,
        }
    }
}

impl fmt::Display for SubmissionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {})",
            self.student_id, self.lab_id, self.problem_id
        )
    }
}

/// Problem assigned to a student, optionally graded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    #[serde(rename = "sid")]
    pub student_id: i64,
    #[serde(rename = "lid")]
    pub lab_id: i64,
    #[serde(rename = "pid")]
    pub problem_id: i64,
    /// `None` until the problem is graded
    #[serde(default)]
    pub grade: Option<f64>,
}

impl Submission {
    pub fn new(student_id: i64, lab_id: i64, problem_id: i64, grade: Option<f64>) -> Self {
        Self {
            student_id,
            lab_id,
            problem_id,
            grade,
        }
    }

    pub fn key(&self) -> SubmissionKey {
        SubmissionKey::new(self.student_id, self.lab_id, self.problem_id)
    }
}

impl fmt::Display for Submission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Submission: student {}, lab {}, problem {}, ",
            self.student_id, self.lab_id, self.problem_id
        )?;
        match self.grade {
            Some(grade) => write!(f, "grade {}", grade),
            None => write!(f, "not graded"),
        }
    }
}
