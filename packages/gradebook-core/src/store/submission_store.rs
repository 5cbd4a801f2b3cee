//! Submission list keyed by (student, lab, problem).

use crate::error::{GradebookError, Result};
use crate::model::{Submission, SubmissionKey};

/// Insertion-ordered submissions, at most one per key.
#[derive(Debug, Clone, Default)]
pub struct SubmissionStore {
    submissions: Vec<Submission>,
}

impl SubmissionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.submissions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.submissions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Submission> {
        self.submissions.iter()
    }

    pub fn as_slice(&self) -> &[Submission] {
        &self.submissions
    }

    pub fn get(&self, key: SubmissionKey) -> Option<&Submission> {
        self.submissions.iter().find(|s| s.key() == key)
    }

    /// Inserts a submission, replacing any with the same key.
    ///
    /// The replaced submission is removed and the new one appended, so the
    /// newest assignment is always last.
    pub fn upsert(&mut self, submission: Submission) -> &Submission {
        let key = submission.key();
        self.submissions.retain(|s| s.key() != key);
        self.submissions.push(submission);
        &self.submissions[self.submissions.len() - 1]
    }

    /// Removes the submission with the given key.
    pub fn remove(&mut self, key: SubmissionKey) -> Result<Submission> {
        let index = self
            .submissions
            .iter()
            .position(|s| s.key() == key)
            .ok_or_else(|| GradebookError::not_found("Submission", key))?;
        Ok(self.submissions.remove(index))
    }

    pub fn for_lab(&self, lab_id: i64) -> Vec<&Submission> {
        self.submissions.iter().filter(|s| s.lab_id == lab_id).collect()
    }

    pub fn for_student(&self, student_id: i64) -> Vec<&Submission> {
        self.submissions
            .iter()
            .filter(|s| s.student_id == student_id)
            .collect()
    }

    /// Replaces the whole collection; later duplicates of a key win.
    pub fn replace_all(&mut self, submissions: Vec<Submission>) {
        self.submissions.clear();
        for submission in submissions {
            self.upsert(submission);
        }
    }
}
