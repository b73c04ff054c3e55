//! Academic term (year + semester) selecting a catalog snapshot.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// A year/semester pair such as `2020/2021`, semester 2.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcademicTerm {
    /// Academic year as the catalog spells it (`"2020/2021"`)
    pub year: String,

    /// Semester within the year (1 or 2)
    pub semester: u8,
}

impl AcademicTerm {
    pub fn new(year: impl Into<String>, semester: u8) -> Self {
        Self {
            year: year.into(),
            semester,
        }
    }

    /// Whether a catalog term label belongs to this term.
    ///
    /// Labels look like `"2º Semestre 2020/2021"` or
    /// `"2nd Semester 2020/2021"`; the leading digit is the semester.
    /// An empty label is accepted, since some catalog entries omit it.
    pub fn includes(&self, label: &str) -> bool {
        let label = label.trim();
        if label.is_empty() {
            return true;
        }

        let semester = label
            .chars()
            .next()
            .and_then(|c| c.to_digit(10))
            .map(|d| d as u8);

        semester == Some(self.semester) && label.ends_with(&self.year)
    }
}

impl fmt::Display for AcademicTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.year, self.semester)
    }
}

impl FromStr for AcademicTerm {
    type Err = AppError;

    /// Parse `"2020/2021:2"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, semester) = s
            .split_once(':')
            .ok_or_else(|| AppError::validation(format!("Invalid academic term '{s}'")))?;

        let semester: u8 = semester
            .trim()
            .parse()
            .map_err(|_| AppError::validation(format!("Invalid semester in '{s}'")))?;
        if !(1..=2).contains(&semester) {
            return Err(AppError::validation(format!(
                "Semester must be 1 or 2, got {semester}"
            )));
        }

        let year = year.trim();
        let valid_year = year
            .split_once('/')
            .is_some_and(|(a, b)| a.parse::<u16>().is_ok() && b.parse::<u16>().is_ok());
        if !valid_year {
            return Err(AppError::validation(format!("Invalid academic year '{year}'")));
        }

        Ok(Self::new(year, semester))
    }
}
