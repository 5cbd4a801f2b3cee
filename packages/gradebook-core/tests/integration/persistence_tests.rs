//! File persistence tests.

use std::fs;

use chrono::NaiveDate;
use ntest::timeout;
use tempfile::tempdir;

use gradebook_core::model::{Lab, Problem, Student};
use gradebook_core::persistence::{LABS_FILE, STUDENTS_FILE, SUBMISSIONS_FILE};
use gradebook_core::{Gradebook, GradebookConfig, GradebookError};

use super::helpers::sample_dataset;

fn persistent_config(dir: &std::path::Path) -> GradebookConfig {
    GradebookConfig {
        data_dir: dir.to_path_buf(),
        persist: true,
        persistence_retry_delay_ms: 0,
        ..Default::default()
    }
}

#[timeout(5000)]
#[test]
fn test_missing_files_open_empty() {
    let temp_dir = tempdir().unwrap();
    let gradebook = Gradebook::open(persistent_config(temp_dir.path())).unwrap();
    assert_eq!(gradebook.student_count(), 0);
    assert_eq!(gradebook.lab_count(), 0);
    assert_eq!(gradebook.submission_count(), 0);

    // Nothing is written until something changes
    assert!(!temp_dir.path().join(STUDENTS_FILE).exists());
}

#[timeout(5000)]
#[test]
fn test_every_mutation_is_written() {
    let temp_dir = tempdir().unwrap();
    let config = persistent_config(temp_dir.path());
    let deadline = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();

    {
        let mut gradebook = Gradebook::open(config.clone()).unwrap();
        gradebook.add_student(Student::new(1, "test", 1)).unwrap();
        gradebook.add_lab(Lab::new(1)).unwrap();
        gradebook
            .add_problem(1, Problem::new(1, "test", deadline))
            .unwrap();
        gradebook.assign_submission(1, 1, 1, Some(10.0)).unwrap();
    }

    let labs_json = fs::read_to_string(temp_dir.path().join(LABS_FILE)).unwrap();
    assert!(labs_json.contains("\"deadline\": \"2021-01-01\""));
    assert!(temp_dir.path().join(SUBMISSIONS_FILE).exists());

    let mut reopened = Gradebook::open(config.clone()).unwrap();
    assert_eq!(reopened.student_count(), 1);
    assert_eq!(reopened.problem(1, 1).unwrap().deadline, deadline);
    assert_eq!(reopened.student_average(1), Some(10.0));

    reopened.delete_problem(1, 1).unwrap();
    reopened.delete_lab(1).unwrap();
    reopened.delete_student(1).unwrap();

    let reopened = Gradebook::open(config).unwrap();
    assert_eq!(reopened.student_count(), 0);
    assert_eq!(reopened.lab_count(), 0);
    // No cascade: the submission survives its student and lab
    assert_eq!(reopened.submission_count(), 1);
}

#[timeout(5000)]
#[test]
fn test_dataset_import_and_undo_are_written() {
    let temp_dir = tempdir().unwrap();
    let config = persistent_config(temp_dir.path());

    let mut gradebook = Gradebook::open(config.clone()).unwrap();
    gradebook.load_dataset(sample_dataset()).unwrap();
    assert_eq!(Gradebook::open(config.clone()).unwrap().student_count(), 5);

    gradebook.undo().unwrap();
    let reopened = Gradebook::open(config).unwrap();
    assert_eq!(reopened.student_count(), 0);
    assert_eq!(reopened.submission_count(), 0);
}

#[test]
fn test_corrupt_file_is_fatal() {
    let temp_dir = tempdir().unwrap();
    fs::write(temp_dir.path().join(STUDENTS_FILE), "not json").unwrap();

    let err = Gradebook::open(persistent_config(temp_dir.path())).unwrap_err();
    assert!(matches!(err, GradebookError::SerializationError(_)));
    assert!(!err.is_recoverable());
}

#[test]
fn test_in_memory_mode_writes_nothing() {
    let temp_dir = tempdir().unwrap();
    let config = GradebookConfig {
        data_dir: temp_dir.path().to_path_buf(),
        ..Default::default()
    };
    let mut gradebook = Gradebook::open(config).unwrap();
    gradebook.add_student(Student::new(1, "John", 311)).unwrap();
    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}
