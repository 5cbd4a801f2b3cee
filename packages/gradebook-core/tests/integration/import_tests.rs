//! Sample dataset import and entity queries.

use chrono::NaiveDate;
use ntest::timeout;

use gradebook_core::model::{Lab, Problem, Student};
use gradebook_core::GradebookError;

use super::helpers::{sample_dataset, sample_gradebook};

#[timeout(1000)]
#[test]
fn test_load_sample_counts() {
    let gradebook = sample_gradebook();
    assert_eq!(gradebook.student_count(), 5);
    assert_eq!(gradebook.lab_count(), 2);
    assert_eq!(gradebook.problem_count(), 5);
    assert_eq!(gradebook.submission_count(), 6);
}

#[test]
fn test_student_lookup() {
    let gradebook = sample_gradebook();
    let names: Vec<&str> = (1..=5)
        .map(|id| gradebook.student(id).unwrap().name.as_str())
        .collect();
    assert_eq!(names, vec!["John", "Mary", "Peter", "Ann", "Bob"]);
    assert!(gradebook.student(6).is_none());
}

#[test]
fn test_search_students() {
    let gradebook = sample_gradebook();
    assert_eq!(gradebook.search_students_by_group(311).len(), 2);
    assert_eq!(gradebook.search_students_by_group(312).len(), 2);
    assert_eq!(gradebook.search_students_by_group(313).len(), 1);
    assert!(gradebook.search_students_by_group(314).is_empty());

    for name in ["John", "Mary", "Peter", "Ann", "Bob"] {
        assert_eq!(gradebook.search_students_by_name(name).len(), 1);
    }
    assert!(gradebook.search_students_by_name("Alice").is_empty());
}

#[test]
fn test_add_and_delete_student() {
    let mut gradebook = sample_gradebook();
    gradebook.add_student(Student::new(6, "Alice", 314)).unwrap();
    assert_eq!(gradebook.student_count(), 6);
    assert_eq!(gradebook.student(6).unwrap().name, "Alice");

    let err = gradebook
        .add_student(Student::new(6, "Alice again", 314))
        .unwrap_err();
    assert!(matches!(err, GradebookError::DuplicateKey { .. }));

    gradebook.delete_student(1).unwrap();
    assert_eq!(gradebook.student_count(), 5);
    assert!(gradebook.student(1).is_none());

    let err = gradebook.delete_student(1).unwrap_err();
    assert!(matches!(err, GradebookError::NotFound { .. }));
}

#[test]
fn test_labs_and_problems() {
    let mut gradebook = sample_gradebook();
    assert!(gradebook.lab(1).is_some());
    assert!(gradebook.lab(2).is_some());
    assert!(gradebook.lab(3).is_none());

    assert_eq!(gradebook.problem(1, 1).unwrap().description, "Problem 1");
    assert_eq!(gradebook.problem(1, 3).unwrap().description, "Problem 3");
    assert_eq!(gradebook.problem(2, 2).unwrap().description, "Problem 2");
    assert!(gradebook.problem(2, 3).is_none());
    assert!(gradebook.problem(3, 1).is_none());

    assert_eq!(gradebook.search_problems_by_description("Problem 1").len(), 2);
    assert_eq!(gradebook.search_problems_by_description("Problem 3").len(), 1);
    assert!(gradebook.search_problems_by_description("Problem 4").is_empty());

    gradebook.add_lab(Lab::new(3)).unwrap();
    assert_eq!(gradebook.lab_count(), 3);

    let deadline = NaiveDate::from_ymd_opt(2022, 10, 10).unwrap();
    gradebook
        .add_problem(1, Problem::new(4, "Problem 4", deadline))
        .unwrap();
    assert_eq!(gradebook.problem_count(), 6);
    assert_eq!(gradebook.problem(1, 4).unwrap().deadline, deadline);

    gradebook.delete_problem(1, 1).unwrap();
    assert!(gradebook.problem(1, 1).is_none());
    assert_eq!(gradebook.problem_count(), 5);

    gradebook.delete_lab(1).unwrap();
    assert_eq!(gradebook.lab_count(), 2);
    assert!(gradebook.lab(1).is_none());
}

#[test]
fn test_timestamped_deadlines_are_dates() {
    let gradebook = sample_gradebook();
    assert_eq!(
        gradebook.problem(1, 3).unwrap().deadline,
        NaiveDate::from_ymd_opt(2022, 10, 24).unwrap()
    );
}

#[test]
fn test_dataset_round_trip() {
    let dataset = sample_dataset();
    let json = dataset.to_json_string().unwrap();
    assert!(json.contains("\"2022-10-24\""));

    let back = gradebook_core::import::Dataset::from_json_str(&json).unwrap();
    assert_eq!(back, dataset);
    assert_eq!(sample_gradebook().to_dataset(), dataset);
}
