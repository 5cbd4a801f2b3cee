//! Grading over the sample dataset.

use gradebook_core::model::SubmissionKey;
use gradebook_core::{GradebookConfig, GradebookError, Reference};

use super::helpers::{sample_dataset, sample_gradebook};

#[test]
fn test_student_averages() {
    let gradebook = sample_gradebook();
    assert_eq!(gradebook.student_average(1), Some(10.0));
    assert_eq!(gradebook.student_average(2), Some(9.5));
    assert_eq!(gradebook.student_average(3), None);
    assert_eq!(gradebook.student_average(4), Some(8.0));
    assert_eq!(gradebook.student_average(5), Some(3.5));
    assert_eq!(gradebook.student_average(6), None);
}

#[test]
fn test_failing_students() {
    let gradebook = sample_gradebook();
    let failing = gradebook.failing_students();
    assert_eq!(failing.len(), 1);
    assert_eq!(failing[0].0.name, "Bob");
    assert_eq!(failing[0].1, 3.5);
}

#[test]
fn test_failing_students_follow_student_order() {
    let config = GradebookConfig {
        passing_average: 9.75,
        ..Default::default()
    };
    let mut gradebook = gradebook_core::Gradebook::open(config).unwrap();
    gradebook.load_dataset(sample_dataset()).unwrap();

    let names: Vec<&str> = gradebook
        .failing_students()
        .into_iter()
        .map(|(s, _)| s.name.as_str())
        .collect();
    assert_eq!(names, vec!["Mary", "Ann", "Bob"]);
}

#[test]
fn test_lab_submissions() {
    let gradebook = sample_gradebook();
    assert_eq!(gradebook.lab_submissions(1).len(), 5);
    assert_eq!(gradebook.lab_submissions(2).len(), 1);
    assert!(gradebook.lab_submissions(3).is_empty());
}

#[test]
fn test_assign_is_idempotent() {
    let mut gradebook = sample_gradebook();
    gradebook.assign_submission(1, 1, 1, None).unwrap();
    assert_eq!(gradebook.lab_submissions(1).len(), 5);

    gradebook.assign_submission(3, 2, 2, Some(6.0)).unwrap();
    gradebook.assign_submission(3, 2, 2, Some(6.0)).unwrap();
    assert_eq!(gradebook.submission_count(), 6 + 1);
    assert_eq!(gradebook.student_average(3), Some(6.0));
}

#[test]
fn test_assign_rejects_unknown_problem() {
    let mut gradebook = sample_gradebook();
    let err = gradebook.assign_submission(1, 2, 3, Some(5.0)).unwrap_err();
    assert_eq!(
        err,
        GradebookError::UnknownReference(Reference::Problem {
            lab_id: 2,
            problem_id: 3
        })
    );
    assert!(err.is_recoverable());
    assert!(gradebook.submission(SubmissionKey::new(1, 2, 3)).is_none());
}

#[test]
fn test_lab_grades_report() {
    let gradebook = sample_gradebook();
    assert_eq!(
        gradebook.lab_grades_report(1).unwrap(),
        "Lab 1\n\
         Ann - Problem 3, 8\n\
         Bob - Problem 2, 3.5\n\
         John - Problem 1, 10\n\
         Mary - Problem 1, 9"
    );
    assert_eq!(
        gradebook.lab_grades_report(2).unwrap(),
        "Lab 2\nMary - Problem 1, 10"
    );
    assert!(matches!(
        gradebook.lab_grades_report(3),
        Err(GradebookError::UnknownReference(Reference::Lab(3)))
    ));
}

#[test]
fn test_deleting_student_keeps_submissions() {
    let mut gradebook = sample_gradebook();
    gradebook.delete_student(5).unwrap();
    assert_eq!(gradebook.submission_count(), 6);
    // Orphaned grades still count for the id
    assert_eq!(gradebook.student_average(5), Some(3.5));
    assert!(gradebook.failing_students().is_empty());
}
