use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Record;
use crate::error::{GradebookError, Result};

/// Problem belonging to a lab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    #[serde(rename = "pid")]
    pub id: i64,
    pub description: String,
    #[serde(with = "iso_date")]
    pub deadline: NaiveDate,
}

impl Problem {
    pub fn new(id: i64, description: impl Into<String>, deadline: NaiveDate) -> Self {
        Self {
            id,
            description: description.into(),
            deadline,
        }
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Problem {}: {} (deadline: {})",
            self.id,
            self.description,
            self.deadline.format(iso_date::FORMAT)
        )
    }
}

/// Lab owning an ordered list of problems.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lab {
    #[serde(rename = "lid")]
    pub id: i64,
    #[serde(default)]
    pub problems: Vec<Problem>,
}

impl Lab {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            problems: Vec::new(),
        }
    }

    pub fn with_problems(id: i64, problems: Vec<Problem>) -> Self {
        Self { id, problems }
    }

    pub fn problem(&self, problem_id: i64) -> Option<&Problem> {
        self.problems.iter().find(|p| p.id == problem_id)
    }

    /// Appends a problem; problem ids are unique within the lab.
    pub fn add_problem(&mut self, problem: Problem) -> Result<&Problem> {
        if self.problem(problem.id).is_some() {
            return Err(GradebookError::duplicate(
                "Problem",
                format!("{} in lab {}", problem.id, self.id),
            ));
        }
        self.problems.push(problem);
        Ok(&self.problems[self.problems.len() - 1])
    }

    pub fn remove_problem(&mut self, problem_id: i64) -> Result<Problem> {
        let index = self
            .problems
            .iter()
            .position(|p| p.id == problem_id)
            .ok_or_else(|| {
                GradebookError::not_found("Problem", format!("{} in lab {}", problem_id, self.id))
            })?;
        Ok(self.problems.remove(index))
    }
}

impl Record for Lab {
    const COLLECTION: &'static str = "Lab";

    fn id(&self) -> i64 {
        self.id
    }
}

impl fmt::Display for Lab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Lab {} ({} problems)", self.id, self.problems.len())
    }
}

/// ISO-8601 deadline encoding.
///
/// Writes `YYYY-MM-DD`; reads either a plain date or a date-time whose time
/// part is dropped.
pub(crate) mod iso_date {
    use chrono::{NaiveDate, NaiveDateTime};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&date.format(FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| de::Error::custom(format!("invalid ISO-8601 date: {}", raw)))
    }

    pub fn parse(raw: &str) -> Option<NaiveDate> {
        let raw = raw.trim();
        NaiveDate::parse_from_str(raw, FORMAT)
            .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date()))
            .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f").map(|dt| dt.date()))
            .ok()
    }

}

/// Parses a deadline typed by a user or read from a file.
pub fn parse_deadline(raw: &str) -> Option<NaiveDate> {
    iso_date::parse(raw)
}
