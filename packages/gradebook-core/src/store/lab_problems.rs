//! Problem operations on the lab store.

use super::RecordStore;
use crate::error::{GradebookError, Result};
use crate::model::{Lab, Problem, Record};

impl RecordStore<Lab> {
    /// Iterates the problems of every lab, in lab order.
    pub fn problems(&self) -> impl Iterator<Item = &Problem> {
        self.iter().flat_map(|lab| lab.problems.iter())
    }

    /// Returns the total number of problems across labs.
    pub fn problem_count(&self) -> usize {
        self.iter().map(|lab| lab.problems.len()).sum()
    }

    /// Returns a problem by lab id and problem id.
    pub fn problem(&self, lab_id: i64, problem_id: i64) -> Option<&Problem> {
        self.get_by_id(lab_id)?.problem(problem_id)
    }

    /// Adds a problem to an existing lab.
    ///
    /// # Errors
    /// `NotFound` when the lab is missing, `DuplicateKey` when the lab
    /// already has a problem with that id.
    pub fn add_problem(&mut self, lab_id: i64, problem: Problem) -> Result<&Problem> {
        let lab = self
            .get_by_id_mut(lab_id)
            .ok_or_else(|| GradebookError::not_found(Lab::COLLECTION, lab_id))?;
        lab.add_problem(problem)
    }

    /// Removes a problem from its lab.
    pub fn delete_problem(&mut self, lab_id: i64, problem_id: i64) -> Result<Problem> {
        let lab = self
            .get_by_id_mut(lab_id)
            .ok_or_else(|| GradebookError::not_found(Lab::COLLECTION, lab_id))?;
        lab.remove_problem(problem_id)
    }
}
