//! Submissions, averages and grade reports.

use std::fmt::Write;

use super::Gradebook;
use crate::error::{GradebookError, Reference, Result};
use crate::model::{Student, Submission, SubmissionKey};

impl Gradebook {
    pub fn submissions(&self) -> &[Submission] {
        self.submissions.as_slice()
    }

    pub fn submission_count(&self) -> usize {
        self.submissions.len()
    }

    pub fn submission(&self, key: SubmissionKey) -> Option<&Submission> {
        self.submissions.get(key)
    }

    pub fn lab_submissions(&self, lab_id: i64) -> Vec<&Submission> {
        self.submissions.for_lab(lab_id)
    }

    /// Assigns a problem to a student, replacing any earlier submission for
    /// the same (student, lab, problem).
    ///
    /// # Errors
    /// `UnknownReference` naming the first missing student, lab or problem.
    pub fn assign_submission(
        &mut self,
        student_id: i64,
        lab_id: i64,
        problem_id: i64,
        grade: Option<f64>,
    ) -> Result<&Submission> {
        if self.students.get_by_id(student_id).is_none() {
            return Err(GradebookError::UnknownReference(Reference::Student(
                student_id,
            )));
        }
        let lab = self
            .labs
            .get_by_id(lab_id)
            .ok_or(GradebookError::UnknownReference(Reference::Lab(lab_id)))?;
        if lab.problem(problem_id).is_none() {
            return Err(GradebookError::UnknownReference(Reference::Problem {
                lab_id,
                problem_id,
            }));
        }

        self.previous = Some(self.snapshot());
        tracing::info!(
            "Assigning problem {} of lab {} to student {} (grade: {:?})",
            problem_id,
            lab_id,
            student_id,
            grade
        );
        self.submissions
            .upsert(Submission::new(student_id, lab_id, problem_id, grade));
        self.save_submissions()?;
        Ok(&self.submissions.as_slice()[self.submissions.len() - 1])
    }

    /// Removes a submission.
    ///
    /// # Errors
    /// `NotFound` when there is no submission for the key.
    pub fn remove_submission(&mut self, key: SubmissionKey) -> Result<Submission> {
        let snapshot = self.snapshot();
        let submission = self.submissions.remove(key)?;
        self.previous = Some(snapshot);
        tracing::info!("Removed submission {}", key);
        self.save_submissions()?;
        Ok(submission)
    }

    /// Mean of a student's graded submissions, `None` when nothing is graded.
    pub fn student_average(&self, student_id: i64) -> Option<f64> {
        let (sum, count) = self
            .submissions
            .iter()
            .filter(|s| s.student_id == student_id)
            .filter_map(|s| s.grade)
            .fold((0.0, 0usize), |(sum, count), grade| (sum + grade, count + 1));
        (count > 0).then(|| sum / count as f64)
    }

    /// Students whose average is below the passing average, in student
    /// order. Students with nothing graded are not failing.
    pub fn failing_students(&self) -> Vec<(&Student, f64)> {
        let passing = self.config.passing_average;
        self.students
            .iter()
            .filter_map(|s| self.student_average(s.id).map(|avg| (s, avg)))
            .filter(|&(_, avg)| avg < passing)
            .collect()
    }

    /// Graded submissions of a lab, one line each, sorted by student name and
    /// then grade.
    ///
    /// ```text
    /// Lab 1
    /// Ann - Problem 3, 8
    /// Bob - Problem 2, 3.5
    /// ```
    ///
    /// Submissions whose student or problem has since been deleted are left
    /// out.
    ///
    /// # Errors
    /// `UnknownReference` when the lab does not exist.
    pub fn lab_grades_report(&self, lab_id: i64) -> Result<String> {
        let lab = self
            .labs
            .get_by_id(lab_id)
            .ok_or(GradebookError::UnknownReference(Reference::Lab(lab_id)))?;

        let mut rows: Vec<(&str, &str, f64)> = self
            .submissions
            .iter()
            .filter(|s| s.lab_id == lab_id)
            .filter_map(|s| {
                let grade = s.grade?;
                let student = self.students.get_by_id(s.student_id)?;
                let problem = lab.problem(s.problem_id)?;
                Some((student.name.as_str(), problem.description.as_str(), grade))
            })
            .collect();
        rows.sort_by(|a, b| a.0.cmp(b.0).then(a.2.total_cmp(&b.2)));

        let mut report = format!("Lab {}", lab.id);
        for (name, description, grade) in rows {
            let _ = write!(report, "\n{} - {}, {}", name, description, grade);
        }
        Ok(report)
    }
}
