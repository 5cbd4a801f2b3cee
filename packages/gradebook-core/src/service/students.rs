//! Student operations.

use super::Gradebook;
use crate::error::{GradebookError, Result};
use crate::model::{Record, Student};

impl Gradebook {
    pub fn students(&self) -> &[Student] {
        self.students.as_slice()
    }

    pub fn student_count(&self) -> usize {
        self.students.len()
    }

    pub fn student(&self, id: i64) -> Option<&Student> {
        self.students.get_by_id(id)
    }

    /// Adds a student.
    ///
    /// # Errors
    /// `DuplicateKey` when the id is taken.
    pub fn add_student(&mut self, student: Student) -> Result<&Student> {
        let snapshot = self.snapshot();
        let student = self.students.add(student)?;
        tracing::info!("Added student {} ({})", student.id, student.name);
        self.previous = Some(snapshot);
        self.save_students()?;
        Ok(&self.students.as_slice()[self.students.len() - 1])
    }

    /// Deletes a student. Their submissions are kept.
    ///
    /// # Errors
    /// `NotFound` when no student has the id.
    pub fn delete_student(&mut self, id: i64) -> Result<Student> {
        if !self.students.contains(id) {
            return Err(GradebookError::not_found(Student::COLLECTION, id));
        }
        let snapshot = self.snapshot();
        let student = self.students.delete_by_id(id)?;
        self.previous = Some(snapshot);
        tracing::info!("Deleted student {} ({})", student.id, student.name);
        self.save_students()?;
        Ok(student)
    }

    pub fn search_students_by_name(&self, name: &str) -> Vec<&Student> {
        self.students.search(|s| s.name == name)
    }

    pub fn search_students_by_group(&self, group: i64) -> Vec<&Student> {
        self.students.search(|s| s.group == group)
    }
}
