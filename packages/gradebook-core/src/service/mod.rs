//! Gradebook aggregate: the three record stores plus the operations that
//! span them.
//!
//! Operations are split by concern:
//! - `students`: student CRUD and searches
//! - `labs`: lab and problem CRUD and searches
//! - `grading`: submissions, averages and reports

mod grading;
mod labs;
mod students;

use crate::config::GradebookConfig;
use crate::error::{GradebookError, Result};
use crate::import::Dataset;
use crate::model::{Lab, Student};
use crate::persistence::{CollectionFiles, LABS_FILE, STUDENTS_FILE, SUBMISSIONS_FILE};
use crate::store::{RecordStore, SubmissionStore};

/// State of all collections before the latest mutation.
#[derive(Debug, Clone)]
struct Snapshot {
    students: RecordStore<Student>,
    labs: RecordStore<Lab>,
    submissions: SubmissionStore,
}

/// Students, labs and submissions with their cross-collection rules.
///
/// With persistence enabled, every successful mutation rewrites the
/// affected collection files before returning.
#[derive(Debug)]
pub struct Gradebook {
    config: GradebookConfig,
    students: RecordStore<Student>,
    labs: RecordStore<Lab>,
    submissions: SubmissionStore,
    /// Present when the config enables persistence
    files: Option<CollectionFiles>,
    /// One level of undo
    previous: Option<Snapshot>,
}

impl Gradebook {
    /// Opens a gradebook, loading the collection files when persistence is
    /// enabled. Missing files are empty collections.
    pub fn open(config: GradebookConfig) -> Result<Self> {
        let mut gradebook = Self {
            students: RecordStore::new(),
            labs: RecordStore::new(),
            submissions: SubmissionStore::new(),
            files: None,
            previous: None,
            config,
        };

        if gradebook.config.persist {
            let files = CollectionFiles::new(&gradebook.config);
            gradebook.students.replace_all(files.load(STUDENTS_FILE)?)?;
            gradebook.labs.replace_all(files.load(LABS_FILE)?)?;
            gradebook
                .submissions
                .replace_all(files.load(SUBMISSIONS_FILE)?);
            tracing::info!(
                "Opened gradebook in {}: {} students, {} labs, {} submissions",
                files.data_dir().display(),
                gradebook.students.len(),
                gradebook.labs.len(),
                gradebook.submissions.len()
            );
            gradebook.files = Some(files);
        }

        Ok(gradebook)
    }

    /// Creates an empty gradebook that never touches the disk.
    pub fn in_memory() -> Self {
        Self {
            config: GradebookConfig::default(),
            students: RecordStore::new(),
            labs: RecordStore::new(),
            submissions: SubmissionStore::new(),
            files: None,
            previous: None,
        }
    }

    pub fn config(&self) -> &GradebookConfig {
        &self.config
    }

    /// Replaces every collection with the dataset's contents.
    pub fn load_dataset(&mut self, dataset: Dataset) -> Result<()> {
        let students = RecordStore::from_records(dataset.students)?;
        let labs = RecordStore::from_records(dataset.labs)?;
        let mut submissions = SubmissionStore::new();
        submissions.replace_all(dataset.submissions);

        self.previous = Some(self.snapshot());
        self.students = students;
        self.labs = labs;
        self.submissions = submissions;

        tracing::info!(
            "Loaded dataset: {} students, {} labs, {} submissions",
            self.students.len(),
            self.labs.len(),
            self.submissions.len()
        );
        self.save_all()
    }

    /// Exports every collection as one dataset.
    pub fn to_dataset(&self) -> Dataset {
        Dataset {
            students: self.students.as_slice().to_vec(),
            labs: self.labs.as_slice().to_vec(),
            submissions: self.submissions.as_slice().to_vec(),
        }
    }

    /// Restores the state from before the latest mutation.
    ///
    /// # Errors
    /// `NothingToUndo` when no mutation happened since opening or since the
    /// previous undo.
    pub fn undo(&mut self) -> Result<()> {
        let previous = self.previous.take().ok_or(GradebookError::NothingToUndo)?;
        self.students = previous.students;
        self.labs = previous.labs;
        self.submissions = previous.submissions;
        tracing::info!("Restored previous state");
        self.save_all()
    }

    pub fn can_undo(&self) -> bool {
        self.previous.is_some()
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            students: self.students.clone(),
            labs: self.labs.clone(),
            submissions: self.submissions.clone(),
        }
    }

    fn save_students(&self) -> Result<()> {
        match &self.files {
            Some(files) => files.save(STUDENTS_FILE, self.students.as_slice()),
            None => Ok(()),
        }
    }

    fn save_labs(&self) -> Result<()> {
        match &self.files {
            Some(files) => files.save(LABS_FILE, self.labs.as_slice()),
            None => Ok(()),
        }
    }

    fn save_submissions(&self) -> Result<()> {
        match &self.files {
            Some(files) => files.save(SUBMISSIONS_FILE, self.submissions.as_slice()),
            None => Ok(()),
        }
    }

    fn save_all(&self) -> Result<()> {
        self.save_students()?;
        self.save_labs()?;
        self.save_submissions()
    }
}

impl Default for Gradebook {
    fn default() -> Self {
        Self::in_memory()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undo_restores_one_level() {
        let mut gradebook = Gradebook::in_memory();
        assert!(!gradebook.can_undo());
        assert_eq!(gradebook.undo(), Err(GradebookError::NothingToUndo));

        gradebook.add_student(Student::new(1, "John", 311)).unwrap();
        gradebook.add_student(Student::new(2, "Mary", 311)).unwrap();
        assert_eq!(gradebook.student_count(), 2);

        gradebook.undo().unwrap();
        assert_eq!(gradebook.student_count(), 1);
        assert!(gradebook.student(2).is_none());

        // Only one level is kept
        assert_eq!(gradebook.undo(), Err(GradebookError::NothingToUndo));
        assert_eq!(gradebook.student_count(), 1);
    }

    #[test]
    fn test_failed_mutation_keeps_previous_snapshot() {
        let mut gradebook = Gradebook::in_memory();
        gradebook.add_student(Student::new(1, "John", 311)).unwrap();
        assert!(gradebook.add_student(Student::new(1, "Again", 311)).is_err());

        gradebook.undo().unwrap();
        assert_eq!(gradebook.student_count(), 0);
    }

    #[test]
    fn test_rejected_add_changes_nothing() {
        let mut gradebook = Gradebook::in_memory();
        let added = gradebook.add_lab(Lab::new(1)).unwrap();
        assert_eq!(added.id, 1);
        gradebook.add_student(Student::new(1, "John", 311)).unwrap();

        let err = gradebook.add_lab(Lab::new(1)).unwrap_err();
        assert!(matches!(err, GradebookError::DuplicateKey { collection: "Lab", .. }));
        let err = gradebook.add_student(Student::new(1, "Jim", 312)).unwrap_err();
        assert!(matches!(err, GradebookError::DuplicateKey { collection: "Student", .. }));

        assert_eq!(gradebook.lab_count(), 1);
        assert_eq!(gradebook.student(1).unwrap().name, "John");
    }

    #[test]
    fn test_load_dataset_is_undoable() {
        let mut gradebook = Gradebook::in_memory();
        gradebook.add_student(Student::new(9, "Solo", 1)).unwrap();

        let dataset = Dataset {
            students: vec![Student::new(1, "John", 311), Student::new(2, "Mary", 311)],
            ..Default::default()
        };
        gradebook.load_dataset(dataset).unwrap();
        assert_eq!(gradebook.student_count(), 2);

        gradebook.undo().unwrap();
        assert_eq!(gradebook.student_count(), 1);
        assert!(gradebook.student(9).is_some());
    }

    #[test]
    fn test_load_dataset_with_duplicate_ids_changes_nothing() {
        let mut gradebook = Gradebook::in_memory();
        let dataset = Dataset {
            students: vec![Student::new(1, "John", 311), Student::new(1, "Mary", 311)],
            ..Default::default()
        };
        let err = gradebook.load_dataset(dataset).unwrap_err();
        assert!(matches!(err, GradebookError::DuplicateKey { .. }));
        assert_eq!(gradebook.student_count(), 0);
        assert!(!gradebook.can_undo());
    }
}
