//! Menu tree and the actions behind each option.

use std::fmt::Display;

use chrono::NaiveDate;
use gradebook_core::import::Dataset;
use gradebook_core::model::{parse_deadline, Lab, Problem, Student, SubmissionKey};
use gradebook_core::numbers::next_primes;
use gradebook_core::sequence::{
    equal, longest_pairwise_subsequence, longest_pointwise_subsequence, longest_sum_subsequence,
    opposite_sign, Run,
};

use crate::menu::{back, Flow, Menu};
use crate::session::Session;
use crate::terminal::{print_items, Terminal};

type ActionResult = anyhow::Result<Flow>;

/// Largest start the primes drill accepts; trial division stays quick below it.
const MAX_PRIME_START: i64 = 1_000_000_000_000;
const MAX_PRIME_COUNT: i64 = 1_000;

pub fn main_menu() -> Menu {
    Menu::new("Main menu")
        .option("Load sample data", load_sample)
        .option("Manage students", manage_students)
        .option("Manage labs", manage_labs)
        .option("Analyze sequences", analyze_sequences)
        .option("Undo last change", undo)
        .option("Exit", back)
}

fn students_menu() -> Menu {
    Menu::new("Manage students")
        .option("List students", list_students)
        .option("Add student", add_student)
        .option("Delete student", delete_student)
        .option("Search student by ID", find_student)
        .option("Search student by name", search_students_by_name)
        .option("Search student by group", search_students_by_group)
        .option("Get student average", student_average)
        .option("Get failing students", failing_students)
        .option("Back", back)
}

fn labs_menu() -> Menu {
    Menu::new("Manage labs")
        .option("List labs", list_labs)
        .option("Add lab", add_lab)
        .option("Delete lab", delete_lab)
        .option("Search lab by ID", find_lab)
        .option("Manage problems", manage_problems)
        .option("Get lab grades", lab_grades)
        .option("Back", back)
}

fn problems_menu() -> Menu {
    Menu::new("Manage problems")
        .option("List problems", list_problems)
        .option("Add problem", add_problem)
        .option("Delete problem", delete_problem)
        .option("Assign problem to student", assign_problem)
        .option("Grade problem for student", grade_problem)
        .option("Remove submission", remove_submission)
        .option("List lab submissions", list_lab_submissions)
        .option("Search problem by ID", find_problem)
        .option("Search problem by description", search_problems_by_description)
        .option("Back", back)
}

fn sequences_menu() -> Menu {
    Menu::new("Analyze sequences")
        .option("Input the list of numbers", input_numbers)
        .option("Get the sub-list with the maximum sum", max_sum_window)
        .option("Get the longest sub-list with opposite sign neighbors", opposite_sign_run)
        .option("Get the longest sub-list with equal elements", equal_run)
        .option("Get the longest sub-list of even elements", even_run)
        .option("Get the next primes", primes)
        .option("Back", back)
}

fn manage_students(session: &mut Session, term: &mut dyn Terminal) -> ActionResult {
    students_menu().run(session, term)?;
    Ok(Flow::Continue)
}

fn manage_labs(session: &mut Session, term: &mut dyn Terminal) -> ActionResult {
    labs_menu().run(session, term)?;
    Ok(Flow::Continue)
}

fn manage_problems(session: &mut Session, term: &mut dyn Terminal) -> ActionResult {
    problems_menu().run(session, term)?;
    Ok(Flow::Continue)
}

fn analyze_sequences(session: &mut Session, term: &mut dyn Terminal) -> ActionResult {
    sequences_menu().run(session, term)?;
    Ok(Flow::Continue)
}

fn load_sample(session: &mut Session, term: &mut dyn Terminal) -> ActionResult {
    // An unreadable sample is reported, not fatal
    let dataset = match Dataset::from_path(&session.sample_path) {
        Ok(dataset) => dataset,
        Err(err) => {
            term.print_lines(&format!("Error: could not load sample data: {}", err))?;
            return Ok(Flow::Continue);
        }
    };
    session.gradebook.load_dataset(dataset)?;
    term.print_lines(&format!(
        "Loaded {} students, {} labs and {} submissions.",
        session.gradebook.student_count(),
        session.gradebook.lab_count(),
        session.gradebook.submission_count()
    ))?;
    Ok(Flow::Continue)
}

fn undo(session: &mut Session, term: &mut dyn Terminal) -> ActionResult {
    session.gradebook.undo()?;
    term.print_lines("Last change undone.")?;
    Ok(Flow::Continue)
}

fn list_students(session: &mut Session, term: &mut dyn Terminal) -> ActionResult {
    print_items(term, session.gradebook.students())?;
    Ok(Flow::Continue)
}

fn add_student(session: &mut Session, term: &mut dyn Terminal) -> ActionResult {
    let id = term.read_integer("Enter ID: ")?;
    let name = term.read_line("Enter name: ")?;
    let group = term.read_integer("Enter group: ")?;
    let student = session
        .gradebook
        .add_student(Student::new(id, name.trim(), group))?;
    term.print_lines(&format!("Added {}", student))?;
    Ok(Flow::Continue)
}

fn delete_student(session: &mut Session, term: &mut dyn Terminal) -> ActionResult {
    let id = term.read_integer("Enter ID: ")?;
    let student = session.gradebook.delete_student(id)?;
    term.print_lines(&format!("Deleted {}", student))?;
    Ok(Flow::Continue)
}

fn find_student(session: &mut Session, term: &mut dyn Terminal) -> ActionResult {
    let id = term.read_integer("Enter ID: ")?;
    print_items(term, session.gradebook.student(id))?;
    Ok(Flow::Continue)
}

fn search_students_by_name(session: &mut Session, term: &mut dyn Terminal) -> ActionResult {
    let name = term.read_line("Enter name: ")?;
    print_items(term, session.gradebook.search_students_by_name(name.trim()))?;
    Ok(Flow::Continue)
}

fn search_students_by_group(session: &mut Session, term: &mut dyn Terminal) -> ActionResult {
    let group = term.read_integer("Enter group: ")?;
    print_items(term, session.gradebook.search_students_by_group(group))?;
    Ok(Flow::Continue)
}

fn student_average(session: &mut Session, term: &mut dyn Terminal) -> ActionResult {
    let id = term.read_integer("Enter student ID: ")?;
    match session.gradebook.student_average(id) {
        Some(average) => term.print_lines(&format!("Average: {}", average))?,
        None => term.print_lines("No graded submissions.")?,
    }
    Ok(Flow::Continue)
}

fn failing_students(session: &mut Session, term: &mut dyn Terminal) -> ActionResult {
    let failing = session.gradebook.failing_students();
    print_items(
        term,
        failing
            .iter()
            .map(|(student, average)| format!("{} - average {}", student, average)),
    )?;
    Ok(Flow::Continue)
}

fn list_labs(session: &mut Session, term: &mut dyn Terminal) -> ActionResult {
    print_items(term, session.gradebook.labs())?;
    Ok(Flow::Continue)
}

fn add_lab(session: &mut Session, term: &mut dyn Terminal) -> ActionResult {
    let id = term.read_integer("Enter ID: ")?;
    let lab = session.gradebook.add_lab(Lab::new(id))?;
    term.print_lines(&format!("Added {}", lab))?;
    Ok(Flow::Continue)
}

fn delete_lab(session: &mut Session, term: &mut dyn Terminal) -> ActionResult {
    let id = term.read_integer("Enter ID: ")?;
    let lab = session.gradebook.delete_lab(id)?;
    term.print_lines(&format!("Deleted {}", lab))?;
    Ok(Flow::Continue)
}

fn find_lab(session: &mut Session, term: &mut dyn Terminal) -> ActionResult {
    let id = term.read_integer("Enter ID: ")?;
    match session.gradebook.lab(id) {
        Some(lab) => {
            term.print_lines(&lab.to_string())?;
            print_items(term, &lab.problems)?;
        }
        None => term.print_lines("No results.")?,
    }
    Ok(Flow::Continue)
}

fn lab_grades(session: &mut Session, term: &mut dyn Terminal) -> ActionResult {
    let id = term.read_integer("Enter lab ID: ")?;
    let report = session.gradebook.lab_grades_report(id)?;
    term.print_lines(&report)?;
    Ok(Flow::Continue)
}

fn list_problems(session: &mut Session, term: &mut dyn Terminal) -> ActionResult {
    for lab in session.gradebook.labs() {
        term.print_lines(&lab.to_string())?;
        for problem in &lab.problems {
            term.print_lines(&format!("  {}", problem))?;
        }
    }
    Ok(Flow::Continue)
}

fn read_deadline(term: &mut dyn Terminal) -> std::io::Result<NaiveDate> {
    loop {
        let raw = term.read_line("Enter deadline (YYYY-MM-DD): ")?;
        match parse_deadline(&raw) {
            Some(date) => return Ok(date),
            None => term.print_lines("Invalid date specified. Try again.")?,
        }
    }
}

fn add_problem(session: &mut Session, term: &mut dyn Terminal) -> ActionResult {
    let lab_id = term.read_integer("Enter lab ID: ")?;
    let id = term.read_integer("Enter problem ID: ")?;
    let description = term.read_line("Enter description: ")?;
    let deadline = read_deadline(term)?;
    let problem = session
        .gradebook
        .add_problem(lab_id, Problem::new(id, description.trim(), deadline))?;
    term.print_lines(&format!("Added {}", problem))?;
    Ok(Flow::Continue)
}

fn delete_problem(session: &mut Session, term: &mut dyn Terminal) -> ActionResult {
    let lab_id = term.read_integer("Enter lab ID: ")?;
    let id = term.read_integer("Enter problem ID: ")?;
    let problem = session.gradebook.delete_problem(lab_id, id)?;
    term.print_lines(&format!("Deleted {}", problem))?;
    Ok(Flow::Continue)
}

fn read_key(term: &mut dyn Terminal) -> std::io::Result<SubmissionKey> {
    let student_id = term.read_integer("Enter student ID: ")?;
    let lab_id = term.read_integer("Enter lab ID: ")?;
    let problem_id = term.read_integer("Enter problem ID: ")?;
    Ok(SubmissionKey::new(student_id, lab_id, problem_id))
}

fn assign_problem(session: &mut Session, term: &mut dyn Terminal) -> ActionResult {
    let key = read_key(term)?;
    let submission =
        session
            .gradebook
            .assign_submission(key.student_id, key.lab_id, key.problem_id, None)?;
    term.print_lines(&submission.to_string())?;
    Ok(Flow::Continue)
}

fn grade_problem(session: &mut Session, term: &mut dyn Terminal) -> ActionResult {
    let key = read_key(term)?;
    let grade = term.read_real("Enter grade: ")?;
    let submission = session.gradebook.assign_submission(
        key.student_id,
        key.lab_id,
        key.problem_id,
        Some(grade),
    )?;
    term.print_lines(&submission.to_string())?;
    Ok(Flow::Continue)
}

fn remove_submission(session: &mut Session, term: &mut dyn Terminal) -> ActionResult {
    let key = read_key(term)?;
    let submission = session.gradebook.remove_submission(key)?;
    term.print_lines(&format!("Removed {}", submission))?;
    Ok(Flow::Continue)
}

fn list_lab_submissions(session: &mut Session, term: &mut dyn Terminal) -> ActionResult {
    let lab_id = term.read_integer("Enter lab ID: ")?;
    print_items(term, session.gradebook.lab_submissions(lab_id))?;
    Ok(Flow::Continue)
}

fn find_problem(session: &mut Session, term: &mut dyn Terminal) -> ActionResult {
    let lab_id = term.read_integer("Enter lab ID: ")?;
    let id = term.read_integer("Enter problem ID: ")?;
    print_items(term, session.gradebook.problem(lab_id, id))?;
    Ok(Flow::Continue)
}

fn search_problems_by_description(session: &mut Session, term: &mut dyn Terminal) -> ActionResult {
    let description = term.read_line("Enter description: ")?;
    print_items(
        term,
        session
            .gradebook
            .search_problems_by_description(description.trim()),
    )?;
    Ok(Flow::Continue)
}

fn input_numbers(session: &mut Session, term: &mut dyn Terminal) -> ActionResult {
    let len = term.read_integer("Length of list: ")?.max(0);
    let mut numbers = Vec::new();
    for i in 1..=len {
        numbers.push(term.read_integer(&format!("Element {}: ", i))?);
    }
    session.numbers = numbers;
    Ok(Flow::Continue)
}

fn format_numbers<T: Display>(numbers: &[T]) -> String {
    let items: Vec<String> = numbers.iter().map(|n| n.to_string()).collect();
    format!("[{}]", items.join(", "))
}

fn print_run(term: &mut dyn Terminal, numbers: &[i64], run: Run) -> std::io::Result<()> {
    term.print_lines(&format!(
        "Starts on: {}, Length of: {}, Elements: {}",
        run.start,
        run.len,
        format_numbers(run.slice(numbers))
    ))
}

fn max_sum_window(session: &mut Session, term: &mut dyn Terminal) -> ActionResult {
    // Widened so sums of large inputs cannot overflow
    let numbers: Vec<i128> = session.numbers.iter().map(|&n| i128::from(n)).collect();
    let window = longest_sum_subsequence(&numbers);
    term.print_lines(&format!(
        "Subsequence: {}, Sum of: {}",
        format_numbers(window.items),
        window.sum
    ))?;
    Ok(Flow::Continue)
}

fn opposite_sign_run(session: &mut Session, term: &mut dyn Terminal) -> ActionResult {
    let run = longest_pairwise_subsequence(&session.numbers, opposite_sign);
    print_run(term, &session.numbers, run)?;
    Ok(Flow::Continue)
}

fn equal_run(session: &mut Session, term: &mut dyn Terminal) -> ActionResult {
    let run = longest_pairwise_subsequence(&session.numbers, equal);
    print_run(term, &session.numbers, run)?;
    Ok(Flow::Continue)
}

fn even_run(session: &mut Session, term: &mut dyn Terminal) -> ActionResult {
    let run = longest_pointwise_subsequence(&session.numbers, |n| n % 2 == 0);
    print_run(term, &session.numbers, run)?;
    Ok(Flow::Continue)
}

fn primes(_: &mut Session, term: &mut dyn Terminal) -> ActionResult {
    let start = term.read_integer_in("Start after: ", 0..=MAX_PRIME_START)?;
    let count = term.read_integer_in("How many: ", 0..=MAX_PRIME_COUNT)?;
    let primes = next_primes(start as u64, count as usize);
    term.print_lines(&format_numbers(&primes))?;
    Ok(Flow::Continue)
}
