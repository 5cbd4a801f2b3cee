//! Lab and problem operations.

use super::Gradebook;
use crate::error::{GradebookError, Result};
use crate::model::{Lab, Problem, Record};

impl Gradebook {
    pub fn labs(&self) -> &[Lab] {
        self.labs.as_slice()
    }

    pub fn lab_count(&self) -> usize {
        self.labs.len()
    }

    pub fn lab(&self, id: i64) -> Option<&Lab> {
        self.labs.get_by_id(id)
    }

    /// Adds a lab along with any problems it already carries.
    pub fn add_lab(&mut self, lab: Lab) -> Result<&Lab> {
        let snapshot = self.snapshot();
        let lab = self.labs.add(lab)?;
        tracing::info!("Added lab {} with {} problems", lab.id, lab.problems.len());
        self.previous = Some(snapshot);
        self.save_labs()?;
        Ok(&self.labs.as_slice()[self.labs.len() - 1])
    }

    /// Deletes a lab and its problems. Submissions against it are kept.
    pub fn delete_lab(&mut self, id: i64) -> Result<Lab> {
        if !self.labs.contains(id) {
            return Err(GradebookError::not_found(Lab::COLLECTION, id));
        }
        let snapshot = self.snapshot();
        let lab = self.labs.delete_by_id(id)?;
        self.previous = Some(snapshot);
        tracing::info!("Deleted lab {}", lab.id);
        self.save_labs()?;
        Ok(lab)
    }

    /// Iterates every problem of every lab.
    pub fn problems(&self) -> impl Iterator<Item = &Problem> {
        self.labs.problems()
    }

    pub fn problem_count(&self) -> usize {
        self.labs.problem_count()
    }

    pub fn problem(&self, lab_id: i64, problem_id: i64) -> Option<&Problem> {
        self.labs.problem(lab_id, problem_id)
    }

    /// Adds a problem to an existing lab.
    ///
    /// # Errors
    /// `NotFound` for a missing lab, `DuplicateKey` when the lab already has
    /// a problem with that id.
    pub fn add_problem(&mut self, lab_id: i64, problem: Problem) -> Result<&Problem> {
        let snapshot = self.snapshot();
        let problem_id = problem.id;
        self.labs.add_problem(lab_id, problem)?;
        self.previous = Some(snapshot);
        tracing::info!("Added problem {} to lab {}", problem_id, lab_id);
        self.save_labs()?;
        self.labs
            .problem(lab_id, problem_id)
            .ok_or_else(|| GradebookError::not_found("Problem", problem_id))
    }

    /// Removes a problem from its lab. Submissions against it are kept.
    pub fn delete_problem(&mut self, lab_id: i64, problem_id: i64) -> Result<Problem> {
        let snapshot = self.snapshot();
        let problem = self.labs.delete_problem(lab_id, problem_id)?;
        self.previous = Some(snapshot);
        tracing::info!("Deleted problem {} from lab {}", problem_id, lab_id);
        self.save_labs()?;
        Ok(problem)
    }

    pub fn search_problems_by_description(&self, description: &str) -> Vec<&Problem> {
        self.problems()
            .filter(|p| p.description == description)
            .collect()
    }
}
